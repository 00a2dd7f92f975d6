use crate::utils::LOGIN_ROUTE;

/// Tabla de rutas: `/login` exacto o la consola protegida
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Console { path: String },
}

impl AppRoute {
    /// `pathname` incluye el base path; se quita antes de comparar
    pub fn recognize(pathname: &str, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let relative = match pathname.strip_prefix(base) {
            Some(rest) if rest.is_empty() => "/",
            Some(rest) if rest.starts_with('/') => rest,
            _ => pathname,
        };

        let trimmed = relative.trim_end_matches('/');
        if trimmed == LOGIN_ROUTE {
            AppRoute::Login
        } else {
            AppRoute::Console {
                path: relative.to_string(),
            }
        }
    }
}
