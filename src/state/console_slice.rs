// ============================================================================
// CONSOLE SLICE - Datos de la sesión de consola
// ============================================================================

use super::RootState;
use crate::models::SessionResponse;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsoleState {
    pub session: SessionResponse,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleAction {
    /// Reemplaza la sesión completa
    SaveSession(SessionResponse),
    ResetSession,
}

pub fn reduce(_state: &ConsoleState, action: &ConsoleAction) -> ConsoleState {
    match action {
        ConsoleAction::SaveSession(session) => ConsoleState {
            session: session.clone(),
        },
        ConsoleAction::ResetSession => ConsoleState::default(),
    }
}

pub fn session(state: &RootState) -> SessionResponse {
    state.console.session.clone()
}

pub fn session_status(state: &RootState) -> String {
    state.console.session.status.clone()
}
