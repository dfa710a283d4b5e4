mod login_form;
mod notifications;

pub use login_form::LoginForm;
pub use notifications::{Notifications, Toast};
