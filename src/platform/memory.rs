// ============================================================================
// MEMORY PLATFORM - Implementación en memoria (nativo y tests)
// ============================================================================
// Registra cada efecto (storage, cookies, navegación, requests) para poder
// verificarlo después.
// ============================================================================

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{
    ApiRequest, CookieJar, HttpResponse, HttpTransport, KeyValueStore, Method, Navigator,
    Platform, StorageError, TransportError,
};

#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Storage lleno o bloqueado: lee vacío y rechaza toda escritura
#[cfg(test)]
pub struct FailingStorage;

#[cfg(test)]
impl KeyValueStore for FailingStorage {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write(format!("quota exceeded writing {}", key)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::Write(format!("storage locked removing {}", key)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredCookie {
    pub value: String,
    pub expires: DateTime<Utc>,
}

#[derive(Default)]
pub struct MemoryCookieJar {
    cookies: RefCell<HashMap<String, StoredCookie>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<StoredCookie> {
        self.cookies.borrow().get(name).cloned()
    }
}

impl CookieJar for MemoryCookieJar {
    fn set(&self, name: &str, value: &str, expires: DateTime<Utc>) -> Result<(), StorageError> {
        self.cookies.borrow_mut().insert(
            name.to_string(),
            StoredCookie {
                value: value.to_string(),
                expires,
            },
        );
        Ok(())
    }

    // Una cookie expirada desaparece del jar, igual que en el navegador
    fn delete(&self, name: &str) -> Result<(), StorageError> {
        self.cookies.borrow_mut().remove(name);
        Ok(())
    }
}

pub struct MemoryNavigator {
    path: RefCell<String>,
    href: RefCell<Option<String>>,
    pushed: RefCell<Vec<String>>,
}

impl MemoryNavigator {
    pub fn new(path: &str) -> Self {
        Self {
            path: RefCell::new(path.to_string()),
            href: RefCell::new(None),
            pushed: RefCell::new(Vec::new()),
        }
    }

    /// Último destino de una navegación completa
    pub fn href(&self) -> Option<String> {
        self.href.borrow().clone()
    }

    pub fn pushed(&self) -> Vec<String> {
        self.pushed.borrow().clone()
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn redirect(&self, href: &str) {
        *self.href.borrow_mut() = Some(href.to_string());
    }

    fn push(&self, path: &str) {
        self.pushed.borrow_mut().push(path.to_string());
        *self.path.borrow_mut() = path.to_string();
    }
}

type Reply = Result<HttpResponse, TransportError>;

/// Transport con respuestas programadas por (método, path).
/// La última respuesta de cada ruta se repite.
#[derive(Default)]
pub struct MockTransport {
    routes: RefCell<HashMap<(Method, String), VecDeque<Reply>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: Option<Value>) {
        self.push_reply(method, path, Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, method: Method, path: &str, message: &str) {
        self.push_reply(method, path, Err(TransportError::Network(message.to_string())));
    }

    fn push_reply(&self, method: Method, path: &str, reply: Reply) {
        self.routes
            .borrow_mut()
            .entry((method, path.trim_start_matches('/').to_string()))
            .or_default()
            .push_back(reply);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<HttpResponse, TransportError> {
        let key = (request.method, request.path.clone());
        self.requests.borrow_mut().push(request);

        let mut routes = self.routes.borrow_mut();
        let queue = routes
            .get_mut(&key)
            .ok_or_else(|| TransportError::Network(format!("no route for {} {}", key.0, key.1)))?;
        if queue.len() > 1 {
            queue
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Network("empty route".to_string())))
        } else {
            queue
                .front()
                .cloned()
                .unwrap_or_else(|| Err(TransportError::Network("empty route".to_string())))
        }
    }
}

/// Plataforma completa en memoria, con acceso a las implementaciones concretas
#[derive(Clone)]
pub struct MemoryPlatform {
    pub storage: Rc<MemoryStorage>,
    pub cookies: Rc<MemoryCookieJar>,
    pub navigator: Rc<MemoryNavigator>,
    pub transport: Rc<MockTransport>,
}

impl MemoryPlatform {
    pub fn new(path: &str) -> Self {
        Self {
            storage: Rc::new(MemoryStorage::new()),
            cookies: Rc::new(MemoryCookieJar::new()),
            navigator: Rc::new(MemoryNavigator::new(path)),
            transport: Rc::new(MockTransport::new()),
        }
    }

    pub fn platform(&self) -> Platform {
        Platform {
            storage: self.storage.clone(),
            cookies: self.cookies.clone(),
            navigator: self.navigator.clone(),
            transport: self.transport.clone(),
        }
    }
}
