// ============================================================================
// WEB PLATFORM - localStorage, document.cookie, location/history y fetch
// ============================================================================

use std::rc::Rc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlDocument};

use super::{
    ApiRequest, CookieJar, HttpResponse, HttpTransport, KeyValueStore, Method, Navigator,
    Platform, StorageError, TransportError,
};

const EXPIRED_COOKIE_DATE: &str = "Thu, 01 Jan 1970 00:00:01 GMT";

pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

pub struct BrowserCookies;

impl BrowserCookies {
    fn document() -> Result<HtmlDocument, StorageError> {
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
            .ok_or(StorageError::Unavailable)
    }

    fn write(cookie: &str) -> Result<(), StorageError> {
        Self::document()?
            .set_cookie(cookie)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

impl CookieJar for BrowserCookies {
    fn set(&self, name: &str, value: &str, expires: DateTime<Utc>) -> Result<(), StorageError> {
        let expires = expires.format("%a, %d %b %Y %H:%M:%S GMT");
        // `;` y `,` cortarían la cookie
        let value = String::from(js_sys::encode_uri_component(value));
        Self::write(&format!("{}={}; expires={}; path=/", name, value, expires))
    }

    fn delete(&self, name: &str) -> Result<(), StorageError> {
        Self::write(&format!("{}=; expires={}; path=/", name, EXPIRED_COOKIE_DATE))
    }
}

pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn redirect(&self, href: &str) {
        if let Some(win) = window() {
            if let Err(e) = win.location().set_href(href) {
                log::error!("❌ No se pudo navegar a {}: {:?}", href, e);
            }
        }
    }

    fn push(&self, path: &str) {
        let Some(win) = window() else {
            return;
        };
        let pushed = win
            .history()
            .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)));
        if let Err(e) = pushed {
            log::error!("❌ history.pushState falló para {}: {:?}", path, e);
            return;
        }
        // El router escucha popstate; pushState no lo emite por sí solo
        match web_sys::PopStateEvent::new("popstate") {
            Ok(event) => {
                if let Err(e) = win.dispatch_event(&event) {
                    log::error!("❌ No se pudo emitir popstate para {}: {:?}", path, e);
                }
            }
            Err(e) => log::error!("❌ No se pudo crear popstate: {:?}", e),
        }
    }
}

/// Transport sobre fetch (gloo-net). Las rutas se resuelven contra `base_url`.
pub struct FetchTransport {
    base_url: String,
}

impl FetchTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<HttpResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        let response = match request.body {
            Some(body) => builder
                .json(&body)
                .map_err(|e| TransportError::Build(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let body = if text.trim().is_empty() {
            None
        } else {
            match serde_json::from_str(&text) {
                Ok(value) => Some(value),
                Err(_) => Some(serde_json::Value::String(text)),
            }
        };

        Ok(HttpResponse::new(status, body))
    }
}

/// Pathname de `document.baseURI` (p. ej. "/console/"), si se puede leer
pub fn document_base_path() -> Option<String> {
    let base_uri = window()?.document()?.base_uri().ok()??;
    let url = web_sys::Url::new(&base_uri).ok()?;
    Some(url.pathname())
}

impl Platform {
    pub fn browser(base_url: &str) -> Self {
        Self {
            storage: Rc::new(BrowserStorage),
            cookies: Rc::new(BrowserCookies),
            navigator: Rc::new(BrowserNavigator),
            transport: Rc::new(FetchTransport::new(base_url)),
        }
    }
}
