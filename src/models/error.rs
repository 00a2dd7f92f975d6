use serde::{Deserialize, Serialize};

/// Error normalizado que devuelve el API client
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_message: String,
    pub detailed_error: String,
    pub status_code: u16,
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.detailed_error.is_empty() {
            write!(f, "{} ({})", self.error_message, self.status_code)
        } else {
            write!(
                f,
                "{}: {} ({})",
                self.error_message, self.detailed_error, self.status_code
            )
        }
    }
}

impl std::error::Error for ErrorResponse {}

/// Cuerpo de error que manda el backend
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detailed_message: Option<String>,
}
