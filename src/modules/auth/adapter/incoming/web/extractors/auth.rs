use actix_web::{
    dev::Payload,
    http::header::{self, HeaderValue},
    web, Error as ActixError, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::{
    auth::application::{
        domain::entities::BasicCredentials, ports::outgoing::CredentialVerifier,
    },
    shared::api::ApiResponse,
};

/// Represents a caller whose Basic credentials matched the configured principal
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BasicAuthError {
    #[error("Missing authorization header")]
    MissingHeader,

    #[error("Malformed Basic authorization header")]
    MalformedHeader,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn unauthorized(realm: &str, code: &str, message: &str) -> ActixError {
    let mut response = ApiResponse::unauthorized(code, message);

    if let Ok(challenge) = HeaderValue::from_str(&format!("Basic realm=\"{}\"", realm)) {
        response
            .headers_mut()
            .insert(header::WWW_AUTHENTICATE, challenge);
    }

    create_api_error(response)
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Already resolved by the scope guard
        if let Some(user) = req.extensions().get::<AuthenticatedUser>() {
            return ready(Ok(user.clone()));
        }

        ready(authenticate(req))
    }
}

/// Checks the request's Basic credentials against the registered verifier.
pub fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ActixError> {
    let verifier = match req.app_data::<web::Data<Arc<dyn CredentialVerifier + Send + Sync>>>() {
        Some(verifier) => verifier,
        None => {
            tracing::error!("Credential verifier is not registered as app data");
            return Err(create_api_error(ApiResponse::internal_error()));
        }
    };

    let credentials = match extract_basic_credentials(req) {
        Ok(credentials) => credentials,
        Err(BasicAuthError::MissingHeader) => {
            return Err(unauthorized(
                verifier.realm(),
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            ));
        }
        Err(BasicAuthError::MalformedHeader) => {
            tracing::warn!(path = %req.path(), "Rejected malformed Basic authorization header");
            return Err(unauthorized(
                verifier.realm(),
                "INVALID_CREDENTIALS",
                "Invalid username or password",
            ));
        }
    };

    match verifier.verify(&credentials) {
        Ok(principal) => Ok(AuthenticatedUser {
            username: principal.username,
            role: principal.role,
        }),
        Err(_) => {
            tracing::warn!(
                username = %credentials.username,
                path = %req.path(),
                "Rejected Basic credentials"
            );
            Err(unauthorized(
                verifier.realm(),
                "INVALID_CREDENTIALS",
                "Invalid username or password",
            ))
        }
    }
}

/// Decodes `Authorization: Basic base64(username:password)`.
/// The scheme name is matched case-insensitively; the password may contain `:`.
pub fn extract_basic_credentials(req: &HttpRequest) -> Result<BasicCredentials, BasicAuthError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(BasicAuthError::MissingHeader)?
        .to_str()
        .map_err(|_| BasicAuthError::MalformedHeader)?;

    let (scheme, encoded) = value
        .trim()
        .split_once(' ')
        .ok_or(BasicAuthError::MalformedHeader)?;

    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(BasicAuthError::MalformedHeader);
    }

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| BasicAuthError::MalformedHeader)?;
    let decoded = String::from_utf8(decoded).map_err(|_| BasicAuthError::MalformedHeader)?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or(BasicAuthError::MalformedHeader)?;

    Ok(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}
