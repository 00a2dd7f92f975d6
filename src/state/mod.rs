// ============================================================================
// STATE MODULE - Slices (theme / system / console) + store
// ============================================================================

pub mod console_slice;
pub mod store;
pub mod system_slice;
pub mod theme_slice;

pub use console_slice::{session, session_status, ConsoleAction, ConsoleState};
pub use store::*;
pub use system_slice::{
    logged_in, modal_snack_bar, sidebar_open, snack_bar, SystemAction, SystemState,
};
pub use theme_slice::{dark_mode, ThemeAction, ThemeState};
