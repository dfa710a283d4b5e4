pub mod components;
pub mod config;
pub mod context;
pub mod logging;
pub mod stores;
pub mod timer;

pub use components::{LoginForm, Notifications};
pub use config::PanelConfig;
pub use context::{AuthContext, NotificationsContext, StoreProvider, use_auth, use_notifications};
pub use stores::{AuthStore, NotificationStore, Stores};
