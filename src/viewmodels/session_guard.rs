// ============================================================================
// SESSION GUARD VIEWMODEL - Checking / Authenticated / Unauthenticated
// ============================================================================
// Lógica del ProtectedRoute sin Yew: un chequeo de sesión por montaje y la
// decisión de qué renderizar. El componente cancela el LifetimeToken al
// desmontarse y un chequeo cancelado nunca escribe en el store.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::services::{session_service, AuthService};
use crate::state::{logged_in, ConsoleAction, SystemAction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Authenticated,
    Unauthenticated,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardView {
    Loading,
    Protected,
    Redirect { to: String },
}

/// Vida del componente que lanzó el chequeo
#[derive(Clone, Default, Debug)]
pub struct LifetimeToken {
    cancelled: Rc<Cell<bool>>,
}

impl LifetimeToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[derive(Clone)]
pub struct SessionGuard {
    auth: AuthService,
    lifetime: LifetimeToken,
}

impl SessionGuard {
    pub fn new(auth: AuthService) -> Self {
        Self {
            auth,
            lifetime: LifetimeToken::new(),
        }
    }

    pub fn lifetime(&self) -> LifetimeToken {
        self.lifetime.clone()
    }

    /// `None` si el guard se desmontó antes de que llegara la respuesta
    pub async fn check(&self) -> Option<GuardState> {
        let result = self.auth.check_session().await;

        if self.lifetime.is_cancelled() {
            log::debug!("🔕 Chequeo de sesión descartado: guard desmontado");
            return None;
        }

        let store = self.auth.store();
        match result {
            Ok(Some(session)) => {
                log::info!("✅ Sesión válida ({})", session.status);
                store.dispatch(ConsoleAction::SaveSession(session));
                store.dispatch(SystemAction::UserLogged(true));
                Some(GuardState::Authenticated)
            }
            Ok(None) => {
                log::warn!("🔒 Sin sesión, redirección en curso");
                store.dispatch(SystemAction::UserLogged(false));
                Some(GuardState::Unauthenticated)
            }
            Err(e) => {
                log::warn!("🔒 Chequeo de sesión falló: {}", e);
                store.dispatch(SystemAction::UserLogged(false));
                Some(GuardState::Unauthenticated)
            }
        }
    }

    /// Qué renderizar; no tiene efectos
    pub fn view(&self, state: GuardState) -> GuardView {
        if state == GuardState::Checking {
            return GuardView::Loading;
        }
        if self.auth.store().select(logged_in) {
            return GuardView::Protected;
        }
        GuardView::Redirect {
            to: self.auth.api().config().login_url(),
        }
    }

    /// Guarda la ruta actual en `redirect-path` antes de ir al login
    pub fn remember_redirect(&self, current_path: &str) {
        let platform = self.auth.api().platform();
        session_service::remember_redirect_path(platform.storage.as_ref(), current_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsoleConfig;
    use crate::platform::{KeyValueStore, MemoryPlatform, Method};
    use crate::services::ApiClient;
    use crate::state::{session_status, Store};
    use futures::executor::block_on;
    use serde_json::json;

    fn setup(path: &str) -> (MemoryPlatform, SessionGuard) {
        let memory = MemoryPlatform::new(path);
        let platform = memory.platform();
        let store = Store::new(platform.storage.clone());
        let api = ApiClient::new(platform, ConsoleConfig::default());
        (memory, SessionGuard::new(AuthService::new(api, store)))
    }

    #[test]
    fn test_checking_renders_loading() {
        let (memory, guard) = setup("/drives");
        assert_eq!(guard.view(GuardState::Checking), GuardView::Loading);
        assert!(memory.storage.get_item("redirect-path").is_none());
    }

    #[test]
    fn test_resolving_session_renders_protected() {
        let (memory, guard) = setup("/drives");
        memory
            .transport
            .respond(Method::Get, "api/v1/session", 200, Some(json!({"status": "ok"})));

        let state = block_on(guard.check());

        assert_eq!(state, Some(GuardState::Authenticated));
        assert_eq!(guard.view(GuardState::Authenticated), GuardView::Protected);
        let store = guard.auth.store();
        assert_eq!(store.select(session_status), "ok");
        assert!(store.select(logged_in));
        assert_eq!(memory.transport.requests().len(), 1);
    }

    #[test]
    fn test_rejected_session_redirects_and_remembers_path() {
        let (memory, guard) = setup("/volumes");
        memory.transport.respond(
            Method::Get,
            "api/v1/session",
            403,
            Some(json!({"message": "forbidden"})),
        );

        let state = block_on(guard.check());

        assert_eq!(state, Some(GuardState::Unauthenticated));
        let redirect = GuardView::Redirect {
            to: "/login".to_string(),
        };
        assert_eq!(guard.view(GuardState::Unauthenticated), redirect);
        assert!(memory.storage.get_item("redirect-path").is_none());

        guard.remember_redirect("/volumes");
        assert_eq!(memory.storage.get_item("redirect-path").as_deref(), Some("/volumes"));
        assert!(!guard.auth.store().select(logged_in));
    }

    #[test]
    fn test_view_does_not_touch_storage() {
        let (memory, guard) = setup("/volumes");
        memory.storage.set_item("redirect-path", "/drives").unwrap();

        for _ in 0..3 {
            guard.view(GuardState::Unauthenticated);
        }

        assert_eq!(memory.storage.get_item("redirect-path").as_deref(), Some("/drives"));
    }

    #[test]
    fn test_silent_redirect_counts_as_unauthenticated() {
        let (memory, guard) = setup("/drives");
        memory.storage.set_item("userLoggedIn", "true").unwrap();
        memory.transport.respond(Method::Get, "api/v1/session", 401, None);

        assert_eq!(block_on(guard.check()), Some(GuardState::Unauthenticated));
        assert_eq!(memory.navigator.href().as_deref(), Some("/login"));
    }

    #[test]
    fn test_failed_check_clears_previous_login() {
        let (memory, guard) = setup("/drives");
        guard.auth.store().dispatch(SystemAction::UserLogged(true));
        memory.transport.respond(Method::Get, "api/v1/session", 500, None);

        block_on(guard.check());

        assert!(!guard.auth.store().select(logged_in));
    }

    #[test]
    fn test_cancelled_check_does_not_commit() {
        let (memory, guard) = setup("/drives");
        memory
            .transport
            .respond(Method::Get, "api/v1/session", 200, Some(json!({"status": "ok"})));

        guard.lifetime().cancel();
        let state = block_on(guard.check());

        assert_eq!(state, None);
        let store = guard.auth.store();
        assert_eq!(store.select(session_status), "");
        assert!(!store.select(logged_in));
    }
}
