// ============================================================================
// SYSTEM SLICE - Login, sidebar y snackbars
// ============================================================================
// `MenuOpen` es el único reducer con efecto: persiste la preferencia del
// sidebar en storage.
// ============================================================================

use serde::{Deserialize, Serialize};

use super::RootState;
use crate::models::{ErrorResponse, SnackBarMessage};
use crate::platform::KeyValueStore;
use crate::utils::{load_from_storage, save_to_storage, STORAGE_KEY_SIDEBAR_OPEN};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemState {
    pub logged_in: bool,
    pub sidebar_open: bool,
    pub snack_bar: SnackBarMessage,
    pub modal_snack_bar: SnackBarMessage,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            logged_in: false,
            sidebar_open: true,
            snack_bar: SnackBarMessage::default(),
            modal_snack_bar: SnackBarMessage::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct SidebarPreference {
    open: bool,
}

impl SystemState {
    /// Estado inicial; el sidebar arranca con la preferencia guardada (abierto si no hay)
    pub fn init(storage: &dyn KeyValueStore) -> Self {
        let sidebar_open = load_from_storage::<SidebarPreference>(storage, STORAGE_KEY_SIDEBAR_OPEN)
            .map(|pref| pref.open)
            .unwrap_or(true);

        Self {
            sidebar_open,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SystemAction {
    UserLogged(bool),
    MenuOpen(bool),
    SetSnackBarMessage(String),
    SetErrorSnackMessage(ErrorResponse),
    SetModalSnackMessage(String),
    SetModalErrorSnackMessage(ErrorResponse),
}

pub fn reduce(state: &SystemState, action: &SystemAction, storage: &dyn KeyValueStore) -> SystemState {
    let mut next = state.clone();
    match action {
        SystemAction::UserLogged(logged_in) => next.logged_in = *logged_in,
        SystemAction::MenuOpen(open) => {
            let pref = SidebarPreference { open: *open };
            if let Err(e) = save_to_storage(storage, STORAGE_KEY_SIDEBAR_OPEN, &pref) {
                log::error!("❌ Error guardando preferencia del sidebar: {}", e);
            }
            next.sidebar_open = *open;
        }
        SystemAction::SetSnackBarMessage(message) => {
            next.snack_bar = SnackBarMessage::message(message);
        }
        SystemAction::SetErrorSnackMessage(error) => {
            next.snack_bar = SnackBarMessage::error(&error.error_message, &error.detailed_error);
        }
        SystemAction::SetModalSnackMessage(message) => {
            next.modal_snack_bar = SnackBarMessage::message(message);
        }
        SystemAction::SetModalErrorSnackMessage(error) => {
            next.modal_snack_bar =
                SnackBarMessage::error(&error.error_message, &error.detailed_error);
        }
    }
    next
}

pub fn logged_in(state: &RootState) -> bool {
    state.system.logged_in
}

pub fn sidebar_open(state: &RootState) -> bool {
    state.system.sidebar_open
}

pub fn snack_bar(state: &RootState) -> SnackBarMessage {
    state.system.snack_bar.clone()
}

pub fn modal_snack_bar(state: &RootState) -> SnackBarMessage {
    state.system.modal_snack_bar.clone()
}
