//! Local checks run before a request leaves the process.

use mia_types::{MiaError, Payload};

/// Checks that every required field is present and not `null`.
///
/// Only presence is tested, never type or content. An absent payload is
/// missing every required field.
pub fn validate_params(data: Option<&Payload>, required_params: &[&str]) -> Result<(), MiaError> {
    for param in required_params {
        let present = data
            .and_then(|d| d.get(*param))
            .is_some_and(|v| !v.is_null());
        if !present {
            return Err(MiaError::MissingParameter((*param).to_string()));
        }
    }
    Ok(())
}

pub fn validate_access_token(token: &str) -> Result<(), MiaError> {
    if token.is_empty() {
        return Err(MiaError::InvalidAccessToken);
    }
    Ok(())
}

/// Checks that an entity id was supplied.
///
/// MIA ids are 36-character UUIDs, but only emptiness is rejected here.
pub fn validate_id_param(entity_id: &str) -> Result<(), MiaError> {
    if entity_id.is_empty() {
        return Err(MiaError::MissingId);
    }
    Ok(())
}
