//! Toast notifications with timed visibility

use super::ChangeNotifier;
use crate::config::PanelConfig;
use crate::timer::TimerHandle;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    CheckCircle,
    XCircle,
}

/// Fixed icon and color pairing of a toast
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn icon(self) -> Icon {
        match self {
            Self::Success => Icon::CheckCircle,
            Self::Error => Icon::XCircle,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "text-green-400",
            Self::Error => "text-rose-400",
        }
    }
}

/// What the caller asks to show
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    pub timeout_ms: u32,
}

impl NotificationRequest {
    pub fn new(title: impl Into<String>, body: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            timeout_ms,
        }
    }
}

/// Complete description of a toast
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub icon: Icon,
    pub color: String,
    pub timeout_ms: u32,
}

impl Notification {
    /// Decorate a request with the icon and color of `kind`
    pub fn from_request(request: NotificationRequest, kind: NotificationKind) -> Self {
        Self {
            title: request.title,
            body: request.body,
            icon: kind.icon(),
            color: kind.color().to_string(),
            timeout_ms: request.timeout_ms,
        }
    }
}

/// A toast as held by the store
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredNotification {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub icon: Icon,
    pub color: String,
    pub timeout_ms: u32,
    pub visible: bool,
}

impl StoredNotification {
    fn new(id: Uuid, notification: Notification) -> Self {
        Self {
            id,
            title: notification.title,
            body: notification.body,
            icon: notification.icon,
            color: notification.color,
            timeout_ms: notification.timeout_ms,
            visible: true,
        }
    }
}

#[derive(Default)]
struct Inner {
    items: RefCell<Vec<StoredNotification>>,
    // Auto-hide timers, keyed by record. Dropping the store cancels them.
    timers: RefCell<HashMap<Uuid, TimerHandle>>,
    on_change: ChangeNotifier,
}

impl Inner {
    fn hide(&self, id: Uuid) -> bool {
        let hidden = {
            let mut items = self.items.borrow_mut();
            match items.iter_mut().find(|item| item.id == id) {
                Some(item) if item.visible => {
                    item.visible = false;
                    true
                }
                _ => false,
            }
        };

        if hidden {
            tracing::debug!(
                store = PanelConfig::NOTIFICATIONS_STORE_KEY,
                %id,
                "notification hidden"
            );
            self.on_change.notify();
        }
        hidden
    }
}

/// Ordered collection of toasts. Hidden records are kept until
/// [`NotificationStore::prune_hidden`] is called.
#[derive(Clone, Default)]
pub struct NotificationStore {
    inner: Rc<Inner>,
}

impl PartialEq for NotificationStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a visible toast and schedule it to hide after its timeout
    pub fn push(&self, notification: Notification) -> Uuid {
        let id = Uuid::new_v4();
        let timeout_ms = notification.timeout_ms;

        self.inner
            .items
            .borrow_mut()
            .push(StoredNotification::new(id, notification));

        let inner = Rc::downgrade(&self.inner);
        let timer = TimerHandle::schedule(timeout_ms, move || {
            if let Some(inner) = inner.upgrade() {
                inner.hide(id);
            }
        });
        self.inner.timers.borrow_mut().insert(id, timer);

        tracing::debug!(
            store = PanelConfig::NOTIFICATIONS_STORE_KEY,
            %id,
            timeout_ms,
            "notification pushed"
        );
        self.inner.on_change.notify();
        id
    }

    /// Push a green check toast
    pub fn success(&self, request: NotificationRequest) -> Uuid {
        self.push(Notification::from_request(request, NotificationKind::Success))
    }

    /// Push a red cross toast
    pub fn error(&self, request: NotificationRequest) -> Uuid {
        self.push(Notification::from_request(request, NotificationKind::Error))
    }

    /// Hide a toast now and drop its pending timer. Unknown ids are ignored.
    pub fn dismiss(&self, id: Uuid) {
        let timer = self.inner.timers.borrow_mut().remove(&id);
        if let Some(timer) = timer {
            timer.cancel();
        }
        self.inner.hide(id);
    }

    /// Remove every hidden record, returning how many were removed
    pub fn prune_hidden(&self) -> usize {
        let removed: Vec<Uuid> = {
            let mut items = self.inner.items.borrow_mut();
            let removed = items
                .iter()
                .filter(|item| !item.visible)
                .map(|item| item.id)
                .collect();
            items.retain(|item| item.visible);
            removed
        };

        if removed.is_empty() {
            return 0;
        }

        // Dropped outside the borrow; a hidden record's timer has already fired
        let timers: Vec<TimerHandle> = {
            let mut timers = self.inner.timers.borrow_mut();
            removed.iter().filter_map(|id| timers.remove(id)).collect()
        };
        drop(timers);

        tracing::debug!(
            store = PanelConfig::NOTIFICATIONS_STORE_KEY,
            count = removed.len(),
            "hidden notifications pruned"
        );
        self.inner.on_change.notify();
        removed.len()
    }

    /// Snapshot of every record in insertion order
    pub fn items(&self) -> Vec<StoredNotification> {
        self.inner.items.borrow().clone()
    }

    /// Snapshot of the records currently shown
    pub fn visible(&self) -> Vec<StoredNotification> {
        self.inner
            .items
            .borrow()
            .iter()
            .filter(|item| item.visible)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.items.borrow().is_empty()
    }

    /// Register the callback run after every mutation
    pub fn set_on_change(&self, callback: Rc<dyn Fn()>) {
        self.inner.on_change.set(callback);
    }

    pub fn clear_on_change(&self) {
        self.inner.on_change.clear();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;
    use std::time::Duration;
    use tokio::task::LocalSet;

    fn request(body: &str, timeout_ms: u32) -> NotificationRequest {
        NotificationRequest::new("Title", body, timeout_ms)
    }

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_uses_green_check() {
        LocalSet::new()
            .run_until(async {
                let store = NotificationStore::new();
                store.success(request("saved", 5000));

                let items = store.items();
                assert_eq!(items.len(), 1);
                assert!(items[0].visible);
                assert_eq!(items[0].icon, Icon::CheckCircle);
                assert_eq!(items[0].color, "text-green-400");
                assert_eq!(items[0].body, "saved");
                assert_eq!(items[0].timeout_ms, 5000);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_uses_red_cross() {
        LocalSet::new()
            .run_until(async {
                let store = NotificationStore::new();
                store.error(request("failed", 5000));

                let items = store.items();
                assert_eq!(items.len(), 1);
                assert!(items[0].visible);
                assert_eq!(items[0].icon, Icon::XCircle);
                assert_eq!(items[0].color, "text-rose-400");
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_push_keeps_order_and_unique_ids() {
        LocalSet::new()
            .run_until(async {
                let store = NotificationStore::new();
                let pushed: Vec<Uuid> = (0..25)
                    .map(|n| store.success(request(&n.to_string(), 1000)))
                    .collect();

                let items = store.items();
                assert_eq!(items.len(), 25);

                let ids: HashSet<Uuid> = items.iter().map(|item| item.id).collect();
                assert_eq!(ids.len(), 25);

                for (n, item) in items.iter().enumerate() {
                    assert_eq!(item.id, pushed[n]);
                    assert_eq!(item.body, n.to_string());
                }
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_hides_only_its_record() {
        LocalSet::new()
            .run_until(async {
                let store = NotificationStore::new();
                let short = store.error(request("short", 1000));
                let long = store.error(request("long", 5000));

                sleep_ms(1500).await;
                let items = store.items();
                assert!(!items.iter().find(|item| item.id == short).unwrap().visible);
                assert!(items.iter().find(|item| item.id == long).unwrap().visible);

                sleep_ms(4000).await;
                assert!(store.items().iter().all(|item| !item.visible));
                // Hidden records are retained
                assert_eq!(store.len(), 2);
                assert!(store.visible().is_empty());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_hides_immediately() {
        LocalSet::new()
            .run_until(async {
                let store = NotificationStore::new();
                let first = store.success(request("first", 5000));
                let second = store.success(request("second", 5000));

                store.dismiss(first);
                let visible = store.visible();
                assert_eq!(visible.len(), 1);
                assert_eq!(visible[0].id, second);

                // Unknown ids are ignored
                store.dismiss(Uuid::new_v4());
                assert_eq!(store.len(), 2);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_prune_hidden_keeps_visible_in_order() {
        LocalSet::new()
            .run_until(async {
                let store = NotificationStore::new();
                let a = store.success(request("a", 5000));
                let b = store.success(request("b", 100));
                let c = store.success(request("c", 5000));

                assert_eq!(store.prune_hidden(), 0);

                sleep_ms(200).await;
                assert_eq!(store.prune_hidden(), 1);

                let ids: Vec<Uuid> = store.items().iter().map(|item| item.id).collect();
                assert_eq!(ids, vec![a, c]);
                assert!(!ids.contains(&b));
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_change_callback_fires_on_push_and_hide() {
        LocalSet::new()
            .run_until(async {
                let store = NotificationStore::new();
                let changes = Rc::new(Cell::new(0));
                let counter = changes.clone();
                store.set_on_change(Rc::new(move || counter.set(counter.get() + 1)));

                store.success(request("a", 100));
                assert_eq!(changes.get(), 1);

                sleep_ms(200).await;
                assert_eq!(changes.get(), 2);

                store.clear_on_change();
                store.success(request("b", 100));
                assert_eq!(changes.get(), 2);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_store_leaves_no_pending_callbacks() {
        LocalSet::new()
            .run_until(async {
                let changes = Rc::new(Cell::new(0));
                {
                    let store = NotificationStore::new();
                    let counter = changes.clone();
                    store.set_on_change(Rc::new(move || counter.set(counter.get() + 1)));
                    store.error(request("gone", 100));
                }
                // The listener was owned by the store and is released with it
                assert_eq!(Rc::strong_count(&changes), 1);

                sleep_ms(500).await;
                assert_eq!(changes.get(), 1);
            })
            .await;
    }
}
