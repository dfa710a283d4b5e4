//! Toast region

use crate::context::use_notifications;
use crate::stores::{Icon, StoredNotification};
use uuid::Uuid;
use yew::prelude::*;

fn icon_path(icon: Icon) -> &'static str {
    match icon {
        Icon::CheckCircle => "M9 12.75 11.25 15 15 9.75M21 12a9 9 0 1 1-18 0 9 9 0 0 1 18 0Z",
        Icon::XCircle => "m9.75 9.75 4.5 4.5m0-4.5-4.5 4.5M21 12a9 9 0 1 1-18 0 9 9 0 0 1 18 0Z",
    }
}

/// Renders every visible toast, newest last
#[function_component(Notifications)]
pub fn notifications() -> Html {
    let notifications = use_notifications();

    let on_dismiss = {
        let store = notifications.store().clone();
        Callback::from(move |id: Uuid| store.dismiss(id))
    };

    html! {
        <div aria-live="assertive" class="pointer-events-none fixed inset-0 flex items-end px-4 py-6 sm:items-start sm:p-6 z-50">
            <div class="flex w-full flex-col items-center space-y-4 sm:items-end">
                { for notifications.visible().into_iter().map(|notification| {
                    let key = notification.id.to_string();
                    html! {
                        <Toast key={key} {notification} on_dismiss={on_dismiss.clone()} />
                    }
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notification: StoredNotification,
    pub on_dismiss: Callback<Uuid>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let notification = &props.notification;
    let onclick = {
        let id = notification.id;
        props.on_dismiss.reform(move |_: MouseEvent| id)
    };

    html! {
        <div class="pointer-events-auto w-full max-w-sm overflow-hidden rounded-lg bg-white dark:bg-gray-800 shadow-lg ring-1 ring-black/5">
            <div class="p-4">
                <div class="flex items-start">
                    <div class="shrink-0">
                        <svg class={classes!("size-6", notification.color.clone())} fill="none" stroke="currentColor" stroke-width="1.5" viewBox="0 0 24 24" aria-hidden="true">
                            <path stroke-linecap="round" stroke-linejoin="round" d={icon_path(notification.icon)} />
                        </svg>
                    </div>
                    <div class="ml-3 w-0 flex-1 pt-0.5">
                        <p class="text-sm font-medium text-gray-900 dark:text-white">{&notification.title}</p>
                        <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">{&notification.body}</p>
                    </div>
                    <div class="ml-4 flex shrink-0">
                        <button
                            type="button"
                            {onclick}
                            class="inline-flex rounded-md text-gray-400 hover:text-gray-500 focus:outline-none focus:ring-2 focus:ring-blue-500"
                        >
                            <span class="sr-only">{"Close"}</span>
                            <svg class="size-5" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
                                <path d="M6.28 5.22a.75.75 0 0 0-1.06 1.06L8.94 10l-3.72 3.72a.75.75 0 1 0 1.06 1.06L10 11.06l3.72 3.72a.75.75 0 1 0 1.06-1.06L11.06 10l3.72-3.72a.75.75 0 0 0-1.06-1.06L10 8.94 6.28 5.22Z" />
                            </svg>
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
