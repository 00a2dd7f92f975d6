use crate::models::{ErrorResponse, LoginRequest, LoginResponse, SessionResponse};
use crate::platform::Method;
use crate::services::{session_service, ApiClient};
use crate::state::{ConsoleAction, Store, SystemAction};
use crate::utils::{LOGIN_ENDPOINT, LOGOUT_ENDPOINT, SESSION_ENDPOINT};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Login correcto; la página está navegando a `redirect_to`
    LoggedIn { redirect_to: String },
    /// Fallo de red: el API client ya mandó al usuario al login
    Redirected,
}

/// Operaciones de sesión sobre el API client y el store
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    store: Store,
}

impl AuthService {
    pub fn new(api: ApiClient, store: Store) -> Self {
        Self { api, store }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// `Ok(None)` cuando el API client hizo el logout silencioso
    pub async fn check_session(&self) -> Result<Option<SessionResponse>, ErrorResponse> {
        self.api
            .invoke_json::<SessionResponse>(Method::Get, SESSION_ENDPOINT, None)
            .await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginOutcome, ErrorResponse> {
        let body = serde_json::to_value(request).ok();
        let response = match self
            .api
            .invoke_json::<Option<LoginResponse>>(Method::Post, LOGIN_ENDPOINT, body)
            .await
        {
            Ok(Some(response)) => response.unwrap_or_default(),
            Ok(None) => return Ok(LoginOutcome::Redirected),
            Err(e) => {
                log::error!("❌ Login fallido: {}", e);
                self.store.dispatch(SystemAction::SetErrorSnackMessage(e.clone()));
                return Err(e);
            }
        };

        let platform = self.api.platform();
        session_service::mark_user_logged_in(platform.storage.as_ref());
        if let Some(token) = response.session_id.as_deref() {
            if let Err(e) = session_service::store_session_token(platform, self.api.config(), token) {
                log::error!("❌ Error guardando token de sesión: {}", e);
            }
        }
        self.store.dispatch(SystemAction::UserLogged(true));

        let redirect_to = session_service::take_redirect_path(platform.storage.as_ref())
            .unwrap_or_else(|| self.api.config().base_url.clone());
        log::info!("✅ Login exitoso, navegando a {}", redirect_to);
        platform.navigator.redirect(&redirect_to);

        Ok(LoginOutcome::LoggedIn { redirect_to })
    }

    pub async fn logout(&self) {
        if let Err(e) = self.api.invoke(Method::Post, LOGOUT_ENDPOINT, None).await {
            log::warn!("⚠️ Logout en backend falló: {}", e);
        }

        let platform = self.api.platform();
        session_service::clear_session(platform);
        session_service::forget_user(platform.storage.as_ref());
        self.store.dispatch(ConsoleAction::ResetSession);
        self.store.dispatch(SystemAction::UserLogged(false));

        log::info!("👋 Logout");
        platform.navigator.redirect(&self.api.config().login_url());
    }
}

// Dos servicios son iguales si comparten store
impl PartialEq for AuthService {
    fn eq(&self, other: &Self) -> bool {
        self.store.ptr_eq(&other.store)
    }
}
