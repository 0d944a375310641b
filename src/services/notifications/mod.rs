pub mod mailer;

pub use mailer::{EmailTask, Notifier};
