use std::rc::Rc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Almacenamiento clave/valor persistente (localStorage en el navegador)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Cookies del documento. Todas se escriben con `path=/`.
pub trait CookieJar {
    fn set(&self, name: &str, value: &str, expires: DateTime<Utc>) -> Result<(), StorageError>;

    /// Sobrescribe la cookie con una expiración ya pasada
    fn delete(&self, name: &str) -> Result<(), StorageError>;
}

pub trait Navigator {
    /// Pathname actual, incluyendo el base path
    fn current_path(&self) -> String;

    /// Navegación completa (recarga la página)
    fn redirect(&self, href: &str);

    /// Transición dentro de la app, sin recargar
    fn push(&self, path: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request ya normalizada: `path` nunca empieza con '/'
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    /// `None` para cuerpos vacíos o que no son JSON
    pub body: Option<Value>,
}

impl HttpResponse {
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fallos sin código HTTP
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request build error: {0}")]
    Build(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage not available")]
    Unavailable,
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("write failed: {0}")]
    Write(String),
    #[error("invalid cookie lifetime: {0} minutes")]
    InvalidLifetime(i64),
}

#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<HttpResponse, TransportError>;
}

/// Dependencias del navegador que usa la app
#[derive(Clone)]
pub struct Platform {
    pub storage: Rc<dyn KeyValueStore>,
    pub cookies: Rc<dyn CookieJar>,
    pub navigator: Rc<dyn Navigator>,
    pub transport: Rc<dyn HttpTransport>,
}
