pub mod snackbar;
pub mod traits;
