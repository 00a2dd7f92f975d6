use serde::{Deserialize, Serialize};

const DEFAULT_COOKIE_LIFETIME_MINUTES: i64 = 45;
/// Tope de la cookie de sesión: un año
pub const MAX_COOKIE_LIFETIME_MINUTES: i64 = 60 * 24 * 365;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Base path de la consola, siempre termina en '/'
    pub base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub cookie_lifetime_minutes: i64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            cookie_lifetime_minutes: DEFAULT_COOKIE_LIFETIME_MINUTES,
        }
    }
}

impl ConsoleConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: normalize_base_url(option_env!("CONSOLE_BASE_URL").unwrap_or("/")),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL").unwrap_or("info").to_string(),
            cookie_lifetime_minutes: parse_cookie_lifetime(option_env!("COOKIE_LIFETIME_MINUTES")),
        }
    }

    /// Misma configuración con otro base path (el de `document.baseURI`)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }

    pub fn max_log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }

    /// Destino de la navegación completa al perder la sesión
    pub fn login_url(&self) -> String {
        format!("{}login", self.base_url)
    }
}

/// Minutos de vida de la cookie; fuera de `1..=MAX_COOKIE_LIFETIME_MINUTES`
/// se usa el valor por defecto
fn parse_cookie_lifetime(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return DEFAULT_COOKIE_LIFETIME_MINUTES;
    };
    match raw.trim().parse::<i64>() {
        Ok(minutes) if (1..=MAX_COOKIE_LIFETIME_MINUTES).contains(&minutes) => minutes,
        _ => {
            log::warn!(
                "⚠️ COOKIE_LIFETIME_MINUTES inválido ({}), usando {}",
                raw,
                DEFAULT_COOKIE_LIFETIME_MINUTES
            );
            DEFAULT_COOKIE_LIFETIME_MINUTES
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut base = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    };
    if !base.ends_with('/') {
        base.push('/');
    }
    base
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: ConsoleConfig = ConsoleConfig::from_env();
}
