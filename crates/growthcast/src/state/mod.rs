mod app_state;
mod notification;

pub use app_state::{AppState, FormState, Section};
pub use notification::{NOTIFICATION_TIMEOUT, Notification, Severity};
