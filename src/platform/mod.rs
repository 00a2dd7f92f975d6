// Plataforma: storage, cookies, navegación y HTTP detrás de traits

#[cfg(target_arch = "wasm32")]
pub mod web;

pub mod memory;
pub mod traits;

pub use memory::*;
pub use traits::*;
