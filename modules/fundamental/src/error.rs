use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use std::borrow::Cow;
use superheroes_common::error::ErrorInformation;
use superheroes_entity::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested entity doesn't exist.
    #[error("{0}")]
    NotFound(Cow<'static, str>),
    /// The request is missing something essential.
    #[error("{0}")]
    BadRequest(Cow<'static, str>),
    /// One or more fields of the request were rejected.
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),
    /// An entity referenced by the request doesn't exist.
    #[error("{0}")]
    ReferenceNotFound(Cow<'static, str>),
    /// Anything else going wrong while writing.
    #[error("{0}")]
    Write(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl Error {
    /// Report a database failure as a failed write, leaving all other errors as they are.
    pub fn into_write(self) -> Self {
        match self {
            Self::Database(err) => Self::Write(err.to_string()),
            err => err,
        }
    }
}

impl From<ValidationError> for Error {
    fn from(value: ValidationError) -> Self {
        Self::Validation(vec![value.to_string()])
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::ReferenceNotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::Validation(_) | Self::Write(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) => {
                response.json(ErrorInformation::new(msg))
            }
            Self::Validation(errors) => response.json(ErrorInformation::list(errors)),
            Self::ReferenceNotFound(msg) => response.json(ErrorInformation::list([msg])),
            Self::Write(msg) => {
                log::info!("write failed: {msg}");
                response.json(ErrorInformation::list([msg]))
            }
            Self::Database(err) => {
                log::warn!("database error: {err}");
                response.json(ErrorInformation::new(err))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::{json, Value};

    async fn body(err: Error) -> (StatusCode, Value) {
        let response = err.error_response();
        let status = response.status();
        let body = to_bytes(response.into_body()).await.expect("must read body");
        (status, serde_json::from_slice(&body).expect("must be JSON"))
    }

    #[actix_web::test]
    async fn shapes() {
        assert_eq!(
            body(Error::NotFound("Hero not found".into())).await,
            (StatusCode::NOT_FOUND, json!({"error": "Hero not found"}))
        );
        assert_eq!(
            body(Error::BadRequest("Description is required".into())).await,
            (
                StatusCode::BAD_REQUEST,
                json!({"error": "Description is required"})
            )
        );
        assert_eq!(
            body(Error::Validation(vec!["a".into(), "b".into()])).await,
            (StatusCode::BAD_REQUEST, json!({"errors": ["a", "b"]}))
        );
        assert_eq!(
            body(Error::ReferenceNotFound("Power not found".into())).await,
            (StatusCode::NOT_FOUND, json!({"errors": ["Power not found"]}))
        );
    }

    #[actix_web::test]
    async fn database_errors_while_writing() {
        let err = Error::from(DbErr::Custom("boom".into())).into_write();
        let (status, value) = body(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value, json!({"errors": ["Custom Error: boom"]}));
    }

    #[actix_web::test]
    async fn database_errors_while_reading() {
        let (status, value) = body(Error::from(DbErr::Custom("boom".into()))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(value, json!({"error": "Custom Error: boom"}));
    }
}
