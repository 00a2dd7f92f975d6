// ============================================================================
// CONSTANTS - Claves de storage, cookies y endpoints
// ============================================================================

/// Token de sesión (storage + cookie)
pub const STORAGE_KEY_TOKEN: &str = "token";
/// Preferencia del sidebar, JSON `{"open": bool}`
pub const STORAGE_KEY_SIDEBAR_OPEN: &str = "sidebarOpen";
/// Última ruta protegida que se intentó abrir sin sesión
pub const STORAGE_KEY_REDIRECT_PATH: &str = "redirect-path";
/// Marca de "ya hubo login"; habilita el logout silencioso en 401
pub const STORAGE_KEY_USER_LOGGED_IN: &str = "userLoggedIn";

pub const COOKIE_TOKEN: &str = "token";

pub const SESSION_ENDPOINT: &str = "/api/v1/session";
pub const LOGIN_ENDPOINT: &str = "/api/v1/login";
pub const LOGOUT_ENDPOINT: &str = "/api/v1/logout";

/// Los 401 sobre rutas que contienen esto nunca disparan el logout silencioso
pub const LOGIN_PATH_MARKER: &str = "api/v1/login";

/// Ruta de la pantalla de login (relativa al base path)
pub const LOGIN_ROUTE: &str = "/login";
