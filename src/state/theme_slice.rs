// ============================================================================
// THEME SLICE - Modo oscuro (solo en memoria)
// ============================================================================

use super::RootState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark_mode: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThemeAction {
    SetDarkMode(bool),
    ToggleDarkMode,
}

pub fn reduce(state: &ThemeState, action: &ThemeAction) -> ThemeState {
    match action {
        ThemeAction::SetDarkMode(dark_mode) => ThemeState {
            dark_mode: *dark_mode,
        },
        ThemeAction::ToggleDarkMode => ThemeState {
            dark_mode: !state.dark_mode,
        },
    }
}

pub fn dark_mode(state: &RootState) -> bool {
    state.theme.dark_mode
}
