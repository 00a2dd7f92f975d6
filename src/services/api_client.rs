// ============================================================================
// API CLIENT - Requests HTTP + manejo centralizado de 401 y errores
// ============================================================================
// Tres salidas posibles:
// - Ok(Some(body)): respuesta 2xx
// - Ok(None): logout silencioso (401 con sesión previa o fallo de red),
//   la página ya está navegando al login
// - Err(ErrorResponse): cualquier otro error HTTP, normalizado
// ============================================================================

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ConsoleConfig;
use crate::models::{ApiErrorBody, ErrorResponse};
use crate::platform::{ApiRequest, HttpResponse, Method, Platform};
use crate::services::session_service;
use crate::utils::{capitalize_first, LOGIN_PATH_MARKER};

/// Cliente API - stateless, todo el estado vive en la plataforma
#[derive(Clone)]
pub struct ApiClient {
    platform: Platform,
    config: ConsoleConfig,
}

impl ApiClient {
    pub fn new(platform: Platform, config: ConsoleConfig) -> Self {
        Self { platform, config }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub async fn invoke(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Option<Value>, ErrorResponse> {
        Ok(self
            .send(method, path, body)
            .await?
            .map(|response| response.body.unwrap_or(Value::Null)))
    }

    /// Igual que `invoke`, decodificando el cuerpo como `T`
    pub async fn invoke_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Option<T>, ErrorResponse> {
        let Some(response) = self.send(method, path, body).await? else {
            return Ok(None);
        };

        let status = response.status;
        serde_json::from_value(response.body.unwrap_or(Value::Null))
            .map(Some)
            .map_err(|e| {
                log::error!("❌ Respuesta inválida de {} {}: {}", method, path, e);
                ErrorResponse {
                    error_message: "Invalid response body".to_string(),
                    detailed_error: capitalize_first(&e.to_string()),
                    status_code: status,
                }
            })
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Option<HttpResponse>, ErrorResponse> {
        let target = path.strip_prefix('/').unwrap_or(path).to_string();
        let request = ApiRequest {
            method,
            path: target.clone(),
            body,
        };

        match self.platform.transport.send(request).await {
            Ok(response) if response.is_success() => Ok(Some(response)),
            Ok(response) => {
                // 401 fuera del login con sesión previa: sacar al usuario
                if response.status == 401
                    && session_service::is_user_logged_in(self.platform.storage.as_ref())
                    && !target.contains(LOGIN_PATH_MARKER)
                {
                    log::warn!("🔒 401 en {} {}, sesión expirada", method, target);
                    let current_path = self.platform.navigator.current_path();
                    if current_path != "/" {
                        session_service::remember_redirect_path(
                            self.platform.storage.as_ref(),
                            &current_path,
                        );
                    }
                    self.force_login();
                    return Ok(None);
                }

                let error = normalize_error(response.status, response.body.as_ref());
                log::warn!("⚠️ {} {} falló: {}", method, target, error);
                Err(error)
            }
            Err(e) => {
                log::error!("❌ Error de red en {} {}: {}", method, target, e);
                self.force_login();
                Ok(None)
            }
        }
    }

    /// Limpia la sesión y recarga la página en el login (evita loops de redirect)
    fn force_login(&self) {
        session_service::clear_session(&self.platform);
        self.platform.navigator.redirect(&self.config.login_url());
    }
}

/// `message`/`detailedMessage` del backend, con fallback a "Error <status>"
pub(crate) fn normalize_error(status: u16, body: Option<&Value>) -> ErrorResponse {
    let parsed = body
        .and_then(|value| serde_json::from_value::<ApiErrorBody>(value.clone()).ok())
        .unwrap_or_default();

    let message = parsed
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("Error {}", status));
    let mut detailed = parsed.detailed_message.unwrap_or_default();

    if message == detailed {
        detailed.clear();
    }

    ErrorResponse {
        error_message: capitalize_first(&message),
        detailed_error: capitalize_first(&detailed),
        status_code: status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionResponse;
    use crate::platform::{CookieJar, KeyValueStore, MemoryPlatform};
    use chrono::{Duration, Utc};
    use futures::executor::block_on;
    use serde_json::json;

    fn setup(path: &str) -> (MemoryPlatform, ApiClient) {
        let memory = MemoryPlatform::new(path);
        let client = ApiClient::new(memory.platform(), ConsoleConfig::default());
        (memory, client)
    }

    fn log_in(memory: &MemoryPlatform) {
        memory.storage.set_item("userLoggedIn", "true").unwrap();
        memory.storage.set_item("token", "abc").unwrap();
        memory
            .cookies
            .set("token", "abc", Utc::now() + Duration::minutes(45))
            .unwrap();
    }

    #[test]
    fn test_success_returns_body() {
        let (memory, client) = setup("/");
        memory
            .transport
            .respond(Method::Get, "api/v1/session", 200, Some(json!({"status": "ok"})));

        let body = block_on(client.invoke(Method::Get, "/api/v1/session", None)).unwrap();
        assert_eq!(body, Some(json!({"status": "ok"})));

        let typed = block_on(client.invoke_json::<SessionResponse>(Method::Get, "/api/v1/session", None));
        assert_eq!(typed, Ok(Some(SessionResponse::new("ok"))));
    }

    #[test]
    fn test_leading_slash_is_stripped_once() {
        let (memory, client) = setup("/");
        memory.transport.respond(Method::Post, "api/v1/logout", 204, None);

        let body = block_on(client.invoke(Method::Post, "/api/v1/logout", Some(json!({}))));
        assert_eq!(body, Ok(Some(Value::Null)));

        let requests = memory.transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "api/v1/logout");
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].body, Some(json!({})));
    }

    #[test]
    fn test_error_detail_equal_to_message_is_cleared() {
        let (memory, client) = setup("/");
        memory.transport.respond(
            Method::Get,
            "x",
            500,
            Some(json!({"message": "Bad", "detailedMessage": "Bad"})),
        );

        let result = block_on(client.invoke(Method::Get, "/x", None));
        assert_eq!(
            result,
            Err(ErrorResponse {
                error_message: "Bad".to_string(),
                detailed_error: String::new(),
                status_code: 500,
            })
        );
        assert!(memory.navigator.href().is_none());
    }

    #[test]
    fn test_detail_is_compared_before_capitalizing() {
        let (memory, client) = setup("/");
        memory.transport.respond(
            Method::Get,
            "api/v1/drives",
            500,
            Some(json!({"message": "bad", "detailedMessage": "Bad"})),
        );

        let error = block_on(client.invoke(Method::Get, "api/v1/drives", None)).unwrap_err();
        assert_eq!(error.error_message, "Bad");
        assert_eq!(error.detailed_error, "Bad");
    }

    #[test]
    fn test_empty_message_uses_status() {
        let (memory, client) = setup("/");
        memory.transport.respond(
            Method::Delete,
            "api/v1/volumes",
            409,
            Some(json!({"message": "", "detailedMessage": "volume in use"})),
        );

        let error = block_on(client.invoke(Method::Delete, "api/v1/volumes", None)).unwrap_err();
        assert_eq!(error.error_message, "Error 409");
        assert_eq!(error.detailed_error, "Volume in use");
        assert_eq!(error.status_code, 409);
    }

    #[test]
    fn test_error_messages_are_capitalized() {
        let (memory, client) = setup("/");
        memory.transport.respond(
            Method::Put,
            "api/v1/drives",
            400,
            Some(json!({"message": "invalid drive", "detailedMessage": "drive sdb is busy"})),
        );

        let error = block_on(client.invoke(Method::Put, "api/v1/drives", None)).unwrap_err();
        assert_eq!(error.error_message, "Invalid drive");
        assert_eq!(error.detailed_error, "Drive sdb is busy");
        assert_eq!(error.status_code, 400);
    }

    #[test]
    fn test_error_without_body_uses_status() {
        let (memory, client) = setup("/");
        memory.transport.respond(Method::Get, "api/v1/nodes", 503, Some(json!("upstream down")));

        let error = block_on(client.invoke(Method::Get, "api/v1/nodes", None)).unwrap_err();
        assert_eq!(error.error_message, "Error 503");
        assert_eq!(error.detailed_error, "");
    }

    #[test]
    fn test_401_with_prior_login_redirects_silently() {
        let (memory, client) = setup("/drives");
        log_in(&memory);
        memory.transport.respond(Method::Get, "api/v1/session", 401, None);

        let result = block_on(client.invoke(Method::Get, "/api/v1/session", None));

        assert_eq!(result, Ok(None));
        assert!(memory.storage.get_item("token").is_none());
        assert!(memory.cookies.get("token").is_none());
        assert_eq!(memory.navigator.href().as_deref(), Some("/login"));
        assert_eq!(memory.storage.get_item("redirect-path").as_deref(), Some("/drives"));
    }

    #[test]
    fn test_401_from_root_does_not_store_redirect_path() {
        let (memory, client) = setup("/");
        log_in(&memory);
        memory.transport.respond(Method::Get, "api/v1/session", 401, None);

        assert_eq!(block_on(client.invoke(Method::Get, "/api/v1/session", None)), Ok(None));
        assert!(memory.storage.get_item("redirect-path").is_none());
    }

    #[test]
    fn test_401_without_prior_login_is_an_error() {
        let (memory, client) = setup("/drives");
        memory.transport.respond(
            Method::Get,
            "api/v1/session",
            401,
            Some(json!({"message": "unauthorized"})),
        );

        let error = block_on(client.invoke(Method::Get, "/api/v1/session", None)).unwrap_err();
        assert_eq!(error.error_message, "Unauthorized");
        assert_eq!(error.status_code, 401);
        assert!(memory.navigator.href().is_none());
    }

    #[test]
    fn test_401_on_login_endpoint_is_an_error() {
        let (memory, client) = setup("/login");
        log_in(&memory);
        memory.transport.respond(
            Method::Post,
            "api/v1/login",
            401,
            Some(json!({"message": "invalid token", "detailedMessage": "invalid token"})),
        );

        let error = block_on(client.invoke(Method::Post, "/api/v1/login", None)).unwrap_err();
        assert_eq!(error.error_message, "Invalid token");
        assert_eq!(error.detailed_error, "");
        assert_eq!(memory.storage.get_item("token").as_deref(), Some("abc"));
        assert!(memory.navigator.href().is_none());
    }

    #[test]
    fn test_network_error_clears_session_and_redirects() {
        let (memory, client) = setup("/drives");
        log_in(&memory);
        memory.transport.fail(Method::Get, "api/v1/session", "connection refused");

        let result = block_on(client.invoke(Method::Get, "/api/v1/session", None));

        assert_eq!(result, Ok(None));
        assert!(memory.storage.get_item("token").is_none());
        assert!(memory.cookies.get("token").is_none());
        assert_eq!(memory.navigator.href().as_deref(), Some("/login"));
    }

    #[test]
    fn test_redirect_uses_base_url() {
        let memory = MemoryPlatform::new("/console/drives");
        let client = ApiClient::new(
            memory.platform(),
            ConsoleConfig::default().with_base_url("/console/"),
        );
        memory.transport.fail(Method::Get, "api/v1/session", "offline");

        assert_eq!(block_on(client.invoke(Method::Get, "/api/v1/session", None)), Ok(None));
        assert_eq!(memory.navigator.href().as_deref(), Some("/console/login"));
    }

    #[test]
    fn test_invalid_body_is_reported() {
        let (memory, client) = setup("/");
        memory
            .transport
            .respond(Method::Get, "api/v1/session", 200, Some(json!({"status": 7})));

        let error = block_on(client.invoke_json::<SessionResponse>(Method::Get, "/api/v1/session", None))
            .unwrap_err();
        assert_eq!(error.error_message, "Invalid response body");
        assert_eq!(error.status_code, 200);
    }
}
