// ============================================================================
// CONSOLE CONTEXT - Store + servicios compartidos con el contenido de la app
// ============================================================================

use yew::prelude::*;

use crate::services::AuthService;
use crate::state::Store;

#[derive(Clone)]
pub struct ConsoleContext {
    pub auth: AuthService,
    /// Transición dentro de la app (history.pushState)
    pub navigate: Callback<String>,
}

impl ConsoleContext {
    pub fn store(&self) -> &Store {
        self.auth.store()
    }
}

impl PartialEq for ConsoleContext {
    fn eq(&self, other: &Self) -> bool {
        self.auth == other.auth && self.navigate == other.navigate
    }
}

/// `None` fuera de `ConsoleApp`
#[hook]
pub fn use_console() -> Option<ConsoleContext> {
    use_context::<ConsoleContext>()
}
