// Utils compartidos

pub mod constants;
pub mod storage;
pub mod text;

pub use constants::*;
pub use storage::*;
pub use text::*;
