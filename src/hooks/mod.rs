pub mod console_context;
pub mod use_store;

pub use console_context::{use_console, ConsoleContext};
pub use use_store::use_selector;
