//! Application state stores
//!
//! Each store is a cheap-to-clone handle over shared state. Stores are created
//! once per session by [`Stores::new`] and passed around explicitly.

pub mod auth;
pub mod notifications;

pub use auth::{AttemptOutcome, AuthStore, Bearer};
pub use notifications::{
    Icon, Notification, NotificationKind, NotificationRequest, NotificationStore,
    StoredNotification,
};

use crate::config::PanelConfig;
use panel_http::{ApiClient, ClientError};
use std::cell::RefCell;
use std::rc::Rc;

/// Every store of the application, wired together
#[derive(Clone, PartialEq)]
pub struct Stores {
    pub notifications: NotificationStore,
    pub auth: AuthStore,
}

impl Stores {
    /// Create the stores against the configured backend
    pub fn new() -> Result<Self, ClientError> {
        let client = ApiClient::builder()
            .base_url(PanelConfig::API_BASE_URL)
            .build()?;
        Ok(Self::with_client(client))
    }

    /// Create the stores against an explicit client
    pub fn with_client(client: ApiClient) -> Self {
        let notifications = NotificationStore::new();
        let auth = AuthStore::new(client, notifications.clone());
        Self {
            notifications,
            auth,
        }
    }
}

/// Single change listener attached to a store
#[derive(Default)]
pub(crate) struct ChangeNotifier {
    callback: RefCell<Option<Rc<dyn Fn()>>>,
}

impl ChangeNotifier {
    pub(crate) fn set(&self, callback: Rc<dyn Fn()>) {
        *self.callback.borrow_mut() = Some(callback);
    }

    pub(crate) fn clear(&self) {
        *self.callback.borrow_mut() = None;
    }

    /// Invoke the listener. The borrow is released first so the listener may
    /// replace or clear itself.
    pub(crate) fn notify(&self) {
        let callback = self.callback.borrow().clone();
        if let Some(callback) = callback {
            callback();
        }
    }
}
