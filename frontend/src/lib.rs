pub mod api;
pub mod config;
pub mod pages;
pub mod router;
#[cfg(test)]
mod test_support;

/// Browser entry point: logging, runtime config, then mount.
pub fn boot() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"console logger already initialized".into());
    }
    log::info!("Starting Campus Circle frontend (wasm)");

    // Runtime config (window.__PEEPS_ENV or ./config.json) resolves in the background.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
