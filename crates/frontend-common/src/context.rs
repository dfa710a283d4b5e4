//! Yew context providers for the stores

use crate::stores::{AuthStore, NotificationStore, Stores};
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

/// Store plus a revision number that changes whenever the store does, so
/// context consumers re-render
#[derive(Clone, PartialEq)]
pub struct StoreHandle<S> {
    store: S,
    revision: u64,
}

impl<S> StoreHandle<S> {
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> Deref for StoreHandle<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.store
    }
}

pub type NotificationsContext = StoreHandle<NotificationStore>;
pub type AuthContext = StoreHandle<AuthStore>;

#[derive(Default)]
struct Revision(u64);

impl Reducible for Revision {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

#[derive(Properties, PartialEq)]
pub struct StoreProviderProps {
    pub children: Children,
}

/// Creates the stores for the lifetime of this component and provides them
#[function_component(StoreProvider)]
pub fn store_provider(props: &StoreProviderProps) -> Html {
    let stores = use_memo((), |_| Stores::new());
    let notifications_revision = use_reducer(Revision::default);
    let auth_revision = use_reducer(Revision::default);

    // Re-render on store changes, detach on unmount
    {
        let stores = stores.clone();
        let notifications_dispatcher = notifications_revision.dispatcher();
        let auth_dispatcher = auth_revision.dispatcher();
        use_effect_with((), move |_| {
            if let Ok(stores) = stores.as_ref() {
                stores
                    .notifications
                    .set_on_change(Rc::new(move || notifications_dispatcher.dispatch(())));
                stores
                    .auth
                    .set_on_change(Rc::new(move || auth_dispatcher.dispatch(())));
            }

            move || {
                if let Ok(stores) = stores.as_ref() {
                    stores.notifications.clear_on_change();
                    stores.auth.clear_on_change();
                }
            }
        });
    }

    match stores.as_ref() {
        Ok(stores) => {
            let notifications = NotificationsContext {
                store: stores.notifications.clone(),
                revision: notifications_revision.0,
            };
            let auth = AuthContext {
                store: stores.auth.clone(),
                revision: auth_revision.0,
            };

            html! {
                <ContextProvider<NotificationsContext> context={notifications}>
                    <ContextProvider<AuthContext> context={auth}>
                        {props.children.clone()}
                    </ContextProvider<AuthContext>>
                </ContextProvider<NotificationsContext>>
            }
        }
        Err(error) => {
            tracing::error!(%error, "failed to create API client");
            html! {
                <div class="m-4 p-3 bg-red-50 text-red-700 rounded text-sm">
                    {format!("Failed to initialize the application: {error}")}
                </div>
            }
        }
    }
}

/// Hook to use the notification store
#[hook]
pub fn use_notifications() -> NotificationsContext {
    use_context::<NotificationsContext>().expect(
        "NotificationsContext not found. Make sure to wrap your component with StoreProvider",
    )
}

/// Hook to use the auth store
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with StoreProvider")
}
