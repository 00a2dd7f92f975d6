// ViewModels: estado + lógica de UI, sin Yew

pub mod router;
pub mod session_guard;

pub use router::AppRoute;
pub use session_guard::{GuardState, GuardView, LifetimeToken, SessionGuard};
