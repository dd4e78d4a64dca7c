/// Transient, dismissible error surface.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn show_error(&self, message: &str);
}
