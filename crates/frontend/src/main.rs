mod app;

use app::App;

fn main() {
    match panel_frontend_common::logging::init_logging() {
        Ok(()) => tracing::info!("starting panel frontend"),
        Err(error) => {
            web_sys::console::error_1(&format!("Failed to initialize logging: {error}").into());
        }
    }
    yew::Renderer::<App>::new().render();
}
