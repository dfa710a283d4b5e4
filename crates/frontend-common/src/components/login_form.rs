//! Email and password form bound to the auth store

use crate::context::use_auth;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let auth = use_auth();
    let form = auth.form();
    let is_attempting = auth.is_attempting();

    let on_email = {
        let store = auth.store().clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            store.set_email(input.value());
        })
    };

    let on_password = {
        let store = auth.store().clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            store.set_password(input.value());
        })
    };

    let on_submit = {
        let store = auth.store().clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let store = store.clone();
            spawn_local(async move {
                let outcome = store.attempt().await;
                tracing::debug!(?outcome, "login attempt finished");
            });
        })
    };

    html! {
        <form onsubmit={on_submit} class="space-y-6">
            <div>
                <label for="email" class="block text-sm font-medium text-gray-900 dark:text-white">
                    {"Correo electrónico"}
                </label>
                <input
                    id="email"
                    type="email"
                    autocomplete="email"
                    value={form.email}
                    oninput={on_email}
                    class="mt-2 block w-full rounded-md bg-white dark:bg-gray-800 px-3 py-1.5 text-gray-900 dark:text-white outline-1 outline-gray-300 focus:outline-2 focus:outline-blue-600"
                />
            </div>
            <div>
                <label for="password" class="block text-sm font-medium text-gray-900 dark:text-white">
                    {"Contraseña"}
                </label>
                <input
                    id="password"
                    type="password"
                    autocomplete="current-password"
                    value={form.password}
                    oninput={on_password}
                    class="mt-2 block w-full rounded-md bg-white dark:bg-gray-800 px-3 py-1.5 text-gray-900 dark:text-white outline-1 outline-gray-300 focus:outline-2 focus:outline-blue-600"
                />
            </div>
            <button
                type="submit"
                disabled={is_attempting}
                class="w-full bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                       text-white font-medium py-2 px-4 rounded-lg transition-colors
                       flex items-center justify-center"
            >
                if is_attempting {
                    <svg class="animate-spin h-5 w-5 mr-2" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                        <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                        <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
                    </svg>
                    {"Ingresando..."}
                } else {
                    {"Ingresar"}
                }
            </button>
        </form>
    }
}
