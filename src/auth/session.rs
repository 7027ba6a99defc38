use actix_session::Session;

use crate::errors::AppError;

const ACCESS_TOKEN_KEY: &str = "access_token";

/// API access token of the signed-in viewer, if the session carries one.
pub fn get_access_token(session: &Session) -> Option<String> {
    session
        .get::<String>(ACCESS_TOKEN_KEY)
        .unwrap_or(None)
        .filter(|token| !token.trim().is_empty())
}

pub fn set_access_token(session: &Session, token: &str) -> Result<(), AppError> {
    session.renew();
    session
        .insert(ACCESS_TOKEN_KEY, token)
        .map_err(|e| AppError::Session(format!("Failed to store access token: {}", e)))
}

pub fn clear(session: &Session) {
    session.purge();
}
