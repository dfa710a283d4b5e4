//! Login form and bearer token

use super::ChangeNotifier;
use super::notifications::{NotificationRequest, NotificationStore};
use crate::config::PanelConfig;
use panel_http::ApiClient;
use panel_http::types::Credentials;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const ERROR_TITLE: &str = "Error";
const UNAUTHORIZED_MESSAGE: &str = "La solicitud no ha sido authorizada.";
const VALIDATION_MESSAGE: &str = "La reglas de validación no han sido superadas.";

/// Token handed out by the backend. It is kept in memory only and is not yet
/// attached to later requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bearer {
    pub token: String,
}

/// How a login attempt ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Token stored
    Authenticated,
    /// 401, reported to the user
    Unauthorized,
    /// 422, reported to the user
    ValidationFailed,
    /// Any other failure, not reported
    Unhandled,
}

struct AuthState {
    form: Credentials,
    bearer: Bearer,
}

struct Inner {
    state: RefCell<AuthState>,
    // Requests in flight; overlapping submits each hold one
    pending_attempts: Cell<u32>,
    client: ApiClient,
    notifications: NotificationStore,
    on_change: ChangeNotifier,
}

/// Authentication store
#[derive(Clone)]
pub struct AuthStore {
    inner: Rc<Inner>,
}

impl PartialEq for AuthStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl AuthStore {
    /// Create a store with the placeholder form and no token
    pub fn new(client: ApiClient, notifications: NotificationStore) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(AuthState {
                    form: Credentials {
                        email: PanelConfig::DEFAULT_EMAIL.to_string(),
                        password: PanelConfig::DEFAULT_PASSWORD.to_string(),
                    },
                    bearer: Bearer::default(),
                }),
                pending_attempts: Cell::new(0),
                client,
                notifications,
                on_change: ChangeNotifier::default(),
            }),
        }
    }

    pub fn form(&self) -> Credentials {
        self.inner.state.borrow().form.clone()
    }

    pub fn bearer(&self) -> Bearer {
        self.inner.state.borrow().bearer.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.inner.state.borrow().bearer.token.is_empty()
    }

    /// Whether a login request is in flight
    pub fn is_attempting(&self) -> bool {
        self.inner.pending_attempts.get() > 0
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.inner.state.borrow_mut().form.email = email.into();
        self.inner.on_change.notify();
    }

    pub fn set_password(&self, password: impl Into<String>) {
        self.inner.state.borrow_mut().form.password = password.into();
        self.inner.on_change.notify();
    }

    /// Send the form to the backend and store the returned token.
    ///
    /// 401 and 422 answers become error toasts. Every other failure leaves
    /// the store untouched and shows nothing.
    pub async fn attempt(&self) -> AttemptOutcome {
        let form = self.form();
        self.track_attempt(1);
        let result = self.inner.client.attempt(&form).await;
        self.track_attempt(-1);

        let error = match result {
            Ok(response) => {
                self.inner.state.borrow_mut().bearer.token = response.data.token;
                tracing::info!(store = PanelConfig::AUTH_STORE_KEY, "authenticated");
                self.inner.on_change.notify();
                return AttemptOutcome::Authenticated;
            }
            Err(error) => error,
        };

        match error.status_code() {
            Some(401) => {
                self.report(UNAUTHORIZED_MESSAGE);
                AttemptOutcome::Unauthorized
            }
            Some(422) => {
                self.report(VALIDATION_MESSAGE);
                AttemptOutcome::ValidationFailed
            }
            _ => AttemptOutcome::Unhandled,
        }
    }

    fn report(&self, body: &str) {
        self.inner.notifications.error(NotificationRequest::new(
            ERROR_TITLE,
            body,
            PanelConfig::NOTIFICATION_TIMEOUT_MS,
        ));
    }

    fn track_attempt(&self, delta: i32) {
        let pending = self.inner.pending_attempts.get();
        self.inner
            .pending_attempts
            .set(pending.saturating_add_signed(delta));
        self.inner.on_change.notify();
    }

    /// Register the callback run after every mutation
    pub fn set_on_change(&self, callback: Rc<dyn Fn()>) {
        self.inner.on_change.set(callback);
    }

    pub fn clear_on_change(&self) {
        self.inner.on_change.clear();
    }
}
