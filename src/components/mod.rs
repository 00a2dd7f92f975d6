pub mod app;
pub mod protected_route;
pub mod snackbar;

pub use app::{ConsoleApp, ConsoleAppProps};
pub use protected_route::ProtectedRoute;
pub use snackbar::SnackBar;
