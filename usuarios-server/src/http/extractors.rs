//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Form;

use super::error::ApiError;
use crate::models::{RawUserForm, UserForm};

/// Extract a user id from the path.
///
/// Anything that is not an integer cannot name a user, so it is reported
/// as not found rather than as a malformed request.
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                message: e.body_text(),
            })?;

        parse_id(&raw).map(Self).ok_or_else(|| ApiError::NotFound {
            resource: "usuario",
            id: raw.clone(),
        })
    }
}

/// Only plain ASCII digits name a user: no sign, no whitespace.
fn parse_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Extract the create/edit form, requiring both `nome` and `email`.
pub struct ValidUserForm(pub UserForm);

impl<S> FromRequest<S> for ValidUserForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(raw) = Form::<RawUserForm>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                message: e.body_text(),
            })?;

        Ok(Self(UserForm::try_from(raw)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_parse() {
        assert_eq!(parse_id("1"), Some(1));
        assert_eq!(parse_id("007"), Some(7));
    }

    #[test]
    fn signs_and_junk_are_rejected() {
        for raw in ["", "+1", "-1", " 1", "1a", "abc", "1.0"] {
            assert_eq!(parse_id(raw), None, "{:?}", raw);
        }
    }

    #[test]
    fn overflow_is_rejected() {
        assert_eq!(parse_id("99999999999999999999"), None);
    }
}
