// ============================================================================
// SESSION SERVICE - Token, cookie y marcas de sesión en storage
// ============================================================================

use chrono::{TimeDelta, Utc};

use crate::config::ConsoleConfig;
use crate::platform::{KeyValueStore, Platform, StorageError};
use crate::utils::{
    COOKIE_TOKEN, STORAGE_KEY_REDIRECT_PATH, STORAGE_KEY_TOKEN, STORAGE_KEY_USER_LOGGED_IN,
};

/// Borra el token de storage y la cookie. No toca `userLoggedIn`.
pub fn clear_session(platform: &Platform) {
    if let Err(e) = platform.storage.remove_item(STORAGE_KEY_TOKEN) {
        log::error!("❌ Error eliminando token de storage: {}", e);
    }
    if let Err(e) = platform.cookies.delete(COOKIE_TOKEN) {
        log::error!("❌ Error eliminando cookie de sesión: {}", e);
    }
    log::info!("🗑️ Sesión local limpiada");
}

/// Guarda el token en storage y en una cookie con la duración configurada
pub fn store_session_token(
    platform: &Platform,
    config: &ConsoleConfig,
    token: &str,
) -> Result<(), StorageError> {
    let minutes = config.cookie_lifetime_minutes;
    let expires = TimeDelta::try_minutes(minutes)
        .filter(|lifetime| *lifetime > TimeDelta::zero())
        .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
        .ok_or(StorageError::InvalidLifetime(minutes))?;

    platform.storage.set_item(STORAGE_KEY_TOKEN, token)?;
    platform.cookies.set(COOKIE_TOKEN, token, expires)
}

pub fn is_user_logged_in(storage: &dyn KeyValueStore) -> bool {
    storage
        .get_item(STORAGE_KEY_USER_LOGGED_IN)
        .map(|flag| !flag.is_empty())
        .unwrap_or(false)
}

pub fn mark_user_logged_in(storage: &dyn KeyValueStore) {
    if let Err(e) = storage.set_item(STORAGE_KEY_USER_LOGGED_IN, "true") {
        log::error!("❌ Error guardando userLoggedIn: {}", e);
    }
}

pub fn forget_user(storage: &dyn KeyValueStore) {
    if let Err(e) = storage.remove_item(STORAGE_KEY_USER_LOGGED_IN) {
        log::error!("❌ Error eliminando userLoggedIn: {}", e);
    }
}

pub fn remember_redirect_path(storage: &dyn KeyValueStore, path: &str) {
    if let Err(e) = storage.set_item(STORAGE_KEY_REDIRECT_PATH, path) {
        log::error!("❌ Error guardando redirect-path: {}", e);
    }
}

/// Lee y borra la ruta pendiente
pub fn take_redirect_path(storage: &dyn KeyValueStore) -> Option<String> {
    let path = storage
        .get_item(STORAGE_KEY_REDIRECT_PATH)
        .filter(|p| !p.is_empty())?;
    if let Err(e) = storage.remove_item(STORAGE_KEY_REDIRECT_PATH) {
        log::error!("❌ Error eliminando redirect-path: {}", e);
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{CookieJar, FailingStorage, MemoryCookieJar, MemoryPlatform};
    use std::rc::Rc;

    #[test]
    fn test_token_cookie_lasts_configured_minutes() {
        let memory = MemoryPlatform::new("/");
        let before = Utc::now();
        store_session_token(&memory.platform(), &ConsoleConfig::default(), "abc").unwrap();

        let cookie = memory.cookies.get("token").unwrap();
        assert_eq!(cookie.value, "abc");
        let lifetime = cookie.expires - before;
        assert!(lifetime >= TimeDelta::minutes(45));
        assert!(lifetime < TimeDelta::minutes(46));
        assert_eq!(memory.storage.get_item("token").as_deref(), Some("abc"));
    }

    #[test]
    fn test_out_of_range_lifetime_is_rejected() {
        for minutes in [0, -5, 1_000_000_000_000_000] {
            let memory = MemoryPlatform::new("/");
            let mut config = ConsoleConfig::default();
            config.cookie_lifetime_minutes = minutes;

            let result = store_session_token(&memory.platform(), &config, "abc");

            assert!(matches!(result, Err(StorageError::InvalidLifetime(m)) if m == minutes));
            assert!(memory.cookies.get("token").is_none());
            assert!(memory.storage.get_item("token").is_none());
        }
    }

    #[test]
    fn test_clear_session_deletes_cookie_when_storage_fails() {
        let memory = MemoryPlatform::new("/");
        let cookies = Rc::new(MemoryCookieJar::new());
        cookies
            .set("token", "abc", Utc::now() + TimeDelta::minutes(45))
            .unwrap();
        let platform = Platform {
            storage: Rc::new(FailingStorage),
            cookies: cookies.clone(),
            ..memory.platform()
        };

        clear_session(&platform);

        assert!(cookies.get("token").is_none());
    }

    #[test]
    fn test_clear_session_keeps_login_flag() {
        let memory = MemoryPlatform::new("/");
        let platform = memory.platform();
        store_session_token(&platform, &ConsoleConfig::default(), "abc").unwrap();
        mark_user_logged_in(memory.storage.as_ref());

        clear_session(&platform);

        assert!(memory.storage.get_item("token").is_none());
        assert!(memory.cookies.get("token").is_none());
        assert!(is_user_logged_in(memory.storage.as_ref()));

        forget_user(memory.storage.as_ref());
        assert!(!is_user_logged_in(memory.storage.as_ref()));
    }

    #[test]
    fn test_redirect_path_is_consumed() {
        let memory = MemoryPlatform::new("/");
        let storage = memory.storage.as_ref();
        assert_eq!(take_redirect_path(storage), None);

        remember_redirect_path(storage, "/drives");
        assert_eq!(take_redirect_path(storage).as_deref(), Some("/drives"));
        assert_eq!(take_redirect_path(storage), None);
    }
}
