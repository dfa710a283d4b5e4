use panel_frontend_common::{LoginForm, Notifications, StoreProvider, use_auth};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <StoreProvider>
            <Notifications />
            <AppContent />
        </StoreProvider>
    }
}

#[function_component(AppContent)]
fn app_content() -> Html {
    let auth = use_auth();

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex items-center justify-center px-6 py-12">
            <div class="w-full max-w-sm">
                <h1 class="text-center text-2xl font-bold text-gray-900 dark:text-white mb-10">
                    {"Engine Panel"}
                </h1>
                if auth.is_authenticated() {
                    <p class="text-center text-sm text-gray-600 dark:text-gray-300">
                        {"Sesión iniciada."}
                    </p>
                } else {
                    <LoginForm />
                }
            </div>
        </div>
    }
}
