pub mod auth;
pub mod error;
pub mod session;
pub mod snackbar;

pub use auth::{LoginRequest, LoginResponse};
pub use error::ErrorResponse;
pub(crate) use error::ApiErrorBody;
pub use session::SessionResponse;
pub use snackbar::{SnackBarKind, SnackBarMessage};
