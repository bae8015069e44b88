use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Display};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

// Malformed requests share the InvalidInput code with failed validation.

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        invalid_input_error(format!("request body: {}", rejection))
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        invalid_input_error(format!("query string: {}", rejection))
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        invalid_input_error(format!("path: {}", rejection))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            104 => (StatusCode::NOT_FOUND, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_input_error(reason: impl Into<String>) -> Error {
    Error {
        code: 101,
        message: format!("invalid input: {}", reason.into()),
    }
}

pub fn degenerate_path_error(point_count: usize) -> Error {
    Error {
        code: 102,
        message: format!("a path needs at least 2 waypoints, got {}", point_count),
    }
}

pub fn not_found_error(what: impl Display) -> Error {
    Error {
        code: 104,
        message: format!("{} not found", what),
    }
}

pub fn env_var_error(err: env::VarError) -> Error {
    Error {
        code: 1,
        message: format!("environment variable error: {}", err),
    }
}

pub fn config_error(key: &str, err: impl Display) -> Error {
    Error {
        code: 2,
        message: format!("invalid value for {}: {}", key, err),
    }
}

pub fn server_error(err: impl Display) -> Error {
    Error {
        code: 3,
        message: format!("server error: {}", err),
    }
}

pub fn unexpected_error(err: impl Display) -> Error {
    Error {
        code: 5,
        message: format!("unexpected error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_hide_their_message() {
        let response = unexpected_error("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn client_errors_map_to_their_status() {
        assert_eq!(
            invalid_input_error("start is empty").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            degenerate_path_error(1).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            not_found_error("alert 7").into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn display_includes_code() {
        assert_eq!(
            not_found_error("alert 7").to_string(),
            "[104] alert 7 not found"
        );
    }
}
