pub mod notifier;

pub use notifier::{ContactNotifier, EmailNotifier, LogNotifier, NotifyError};
