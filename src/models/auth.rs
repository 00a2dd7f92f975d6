use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub token: String,
}

/// Cuerpo opcional de `POST /api/v1/login` (204 no trae nada)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<String>,
}
