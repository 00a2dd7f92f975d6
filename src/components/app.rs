// ============================================================================
// CONSOLE APP - Router + provider del contexto
// ============================================================================
// `/login` → `login`; cualquier otra ruta → `children` detrás del guard.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::{ProtectedRoute, SnackBar};
use crate::config::CONFIG;
use crate::hooks::ConsoleContext;
use crate::platform::web::document_base_path;
use crate::platform::Platform;
use crate::services::{ApiClient, AuthService};
use crate::state::Store;
use crate::viewmodels::AppRoute;

#[derive(Properties, PartialEq)]
pub struct ConsoleAppProps {
    /// Pantalla de login (la provee quien embebe la consola)
    #[prop_or_default]
    pub login: Html,
    #[prop_or_default]
    pub children: Children,
}

fn build_services() -> AuthService {
    let base_url = document_base_path().unwrap_or_else(|| CONFIG.base_url.clone());
    let config = CONFIG.clone().with_base_url(&base_url);
    log::info!("🚀 Consola en {}", config.base_url);

    let platform = Platform::browser(&config.base_url);
    let store = Store::new(platform.storage.clone());
    AuthService::new(ApiClient::new(platform, config), store)
}

#[function_component(ConsoleApp)]
pub fn console_app(props: &ConsoleAppProps) -> Html {
    let auth = (*use_state(build_services)).clone();
    let navigator = auth.api().platform().navigator.clone();
    let pathname = use_state_eq({
        let navigator = navigator.clone();
        move || navigator.current_path()
    });

    // Back/forward y navegaciones internas
    {
        let pathname = pathname.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_e: web_sys::Event| {
                pathname.set(navigator.current_path());
            });
            let win = web_sys::window();
            if let Some(win) = &win {
                if let Err(e) =
                    win.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
                {
                    log::error!("❌ No se pudo escuchar popstate: {:?}", e);
                }
            }
            move || {
                if let Some(win) = win {
                    if let Err(e) = win.remove_event_listener_with_callback(
                        "popstate",
                        listener.as_ref().unchecked_ref(),
                    ) {
                        log::error!("❌ No se pudo quitar el listener de popstate: {:?}", e);
                    }
                }
                drop(listener);
            }
        });
    }

    let navigate = use_callback((), move |path: String, _| navigator.push(&path));

    let context = ConsoleContext {
        auth: auth.clone(),
        navigate: navigate.clone(),
    };

    let content = match AppRoute::recognize(&pathname, &auth.api().config().base_url) {
        AppRoute::Login => props.login.clone(),
        AppRoute::Console { path } => html! {
            <ProtectedRoute key={path} auth={auth.clone()} navigate={navigate}>
                { props.children.clone() }
            </ProtectedRoute>
        },
    };

    html! {
        <ContextProvider<ConsoleContext> context={context}>
            { content }
            <SnackBar store={auth.store().clone()} />
        </ContextProvider<ConsoleContext>>
    }
}
