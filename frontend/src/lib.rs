use leptos::*;
use leptos_meta::*;
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use components::{layout::APP_TITLE, toast::ToastHost};
use pages::dashboard::DashboardPage;
use state::{
    auth::{use_auth, AuthProvider},
    toast::use_notifier,
};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already initialised: {}", err).into());
    }
    log::info!("Starting {} frontend", APP_TITLE);

    // window.__FACETRACK_ENV (env.js) takes precedence over ./config.json.
    // The view reads the time zone and poll interval, so mount only once
    // the config is in place.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        mount_to_body(|| view! { <App/> });
    });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let notifier = use_notifier();

    view! {
        <Title text=format!("{} | Dashboard", APP_TITLE)/>
        <AuthProvider>
            <ToastHost notifier=notifier/>
            <Router>
                <Routes>
                    <Route path="/" view=DashboardRoute/>
                    <Route path="/dashboard" view=DashboardRoute/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn DashboardRoute() -> impl IntoView {
    let (auth, _) = use_auth();
    let notifier = use_notifier();
    let user = Signal::derive(move || auth.with(|state| state.user.clone()));
    view! { <DashboardPage user=user notifier=notifier/> }
}
