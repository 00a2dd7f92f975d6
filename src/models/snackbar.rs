use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnackBarKind {
    #[default]
    Message,
    Error,
}

/// Notificación de un solo slot: cada una pisa a la anterior
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnackBarMessage {
    pub message: String,
    pub detailed_error_msg: String,
    #[serde(rename = "type")]
    pub kind: SnackBarKind,
}

impl SnackBarMessage {
    pub fn message(message: &str) -> Self {
        Self {
            message: message.to_string(),
            detailed_error_msg: String::new(),
            kind: SnackBarKind::Message,
        }
    }

    pub fn error(message: &str, detailed: &str) -> Self {
        Self {
            message: message.to_string(),
            detailed_error_msg: detailed.to_string(),
            kind: SnackBarKind::Error,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let snack = SnackBarMessage::error("Bad", "worse");
        let json = serde_json::to_value(&snack).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "Bad", "detailedErrorMsg": "worse", "type": "error"})
        );
    }
}
