// ============================================================================
// CONSOLE WEB - Shell cliente de la consola (Rust + WASM)
// ============================================================================
// - Platform: storage, cookies, navegación y HTTP detrás de traits
// - State: slices theme / system / console + store con subscribers
// - Services: API client (401 + errores normalizados) y auth
// - ViewModels: session guard y router, sin Yew
// - Components / Hooks: capa Yew (solo wasm32)
// ============================================================================

pub mod config;
pub mod models;
pub mod platform;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod hooks;

pub use config::{ConsoleConfig, CONFIG};
pub use models::{ErrorResponse, SessionResponse};
pub use services::{ApiClient, AuthService};
pub use state::Store;

#[cfg(target_arch = "wasm32")]
mod entry {
    use wasm_bindgen::prelude::*;
    use yew::prelude::*;

    use crate::components::ConsoleApp;
    use crate::config::CONFIG;

    /// Puntos de montaje para la pantalla de login y las páginas de la consola
    #[function_component(Root)]
    fn root() -> Html {
        html! {
            <ConsoleApp login={html! { <div id="login-root"></div> }}>
                <div id="console-root"></div>
            </ConsoleApp>
        }
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        // Inicializar panic hook para mejor debugging
        console_error_panic_hook::set_once();

        if CONFIG.enable_logging {
            wasm_logger::init(wasm_logger::Config::new(CONFIG.max_log_level()));
        }
        log::info!("🚀 Console web ({})", CONFIG.environment);

        yew::Renderer::<Root>::new().render();
        Ok(())
    }
}
