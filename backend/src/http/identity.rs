//! Caller identity extraction.
//!
//! The identity provider in front of this service authenticates the user and
//! forwards who they are in request headers. Handlers that need a caller
//! take an [`Identity`] argument; there is no process-wide current user.

use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::AppError;
use crate::error::ServiceError;
use crate::models::Identity;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_NAME_HEADER: &str = "x-user-name";
pub const USER_EMAIL_HEADER: &str = "x-user-email";

fn header(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let uid = header(parts, USER_ID_HEADER).ok_or_else(|| {
            ServiceError::Unauthenticated("Sign in to manage reviews.".to_string())
        })?;

        Ok(Identity {
            uid,
            display_name: header(parts, USER_NAME_HEADER),
            email: header(parts, USER_EMAIL_HEADER),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};

    async fn extract(req: Request<()>) -> Result<Identity, AppError> {
        let (mut parts, _) = req.into_parts();
        Identity::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_all_headers() {
        let req = Request::builder()
            .header(USER_ID_HEADER, "u1")
            .header(USER_NAME_HEADER, "Ada")
            .header(USER_EMAIL_HEADER, "ada@example.com")
            .body(())
            .unwrap();

        let identity = extract(req).await.unwrap();
        assert_eq!(
            identity,
            Identity::new("u1")
                .with_display_name("Ada")
                .with_email("ada@example.com")
        );
    }

    #[tokio::test]
    async fn test_missing_uid_is_unauthorized() {
        let req = Request::builder()
            .header(USER_NAME_HEADER, "Ada")
            .body(())
            .unwrap();
        let err = extract(req).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let req = Request::builder().header(USER_ID_HEADER, "  ").body(()).unwrap();
        assert!(extract(req).await.is_err());
    }

    #[tokio::test]
    async fn test_blank_optional_headers_are_absent() {
        let req = Request::builder()
            .header(USER_ID_HEADER, "u1")
            .header(USER_NAME_HEADER, "")
            .body(())
            .unwrap();
        let identity = extract(req).await.unwrap();
        assert_eq!(identity.display_name, None);
        assert_eq!(identity.email, None);
    }
}
