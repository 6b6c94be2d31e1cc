use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_CONTACT_ENDPOINT: &str = "http://localhost:3000/api/contact";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "CONTACT_ENDPOINT")]
    pub contact_endpoint: Option<String>,
}

static CONTACT_ENDPOINT: OnceLock<String> = OnceLock::new();

pub fn normalize_endpoint(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    // Optional global object: window.__PEEPS_ENV = { CONTACT_ENDPOINT: "..." }
    read_global_key("__PEEPS_ENV", &["CONTACT_ENDPOINT", "contact_endpoint"])
        .and_then(|v| normalize_endpoint(&v))
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let origin = web_sys::window()
        .ok_or_else(|| anyhow::anyhow!("no global `window` exists"))?
        .location()
        .origin()
        .map_err(|_| anyhow::anyhow!("window.location.origin unavailable"))?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await?;
    if !resp.status().is_success() {
        anyhow::bail!("config.json returned {}", resp.status());
    }
    Ok(resp.json::<RuntimeConfig>().await?)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    Ok(RuntimeConfig::default())
}

fn cache_endpoint(value: &str) -> String {
    let _ = CONTACT_ENDPOINT.set(value.to_string());
    CONTACT_ENDPOINT
        .get()
        .cloned()
        .unwrap_or_else(|| value.to_string())
}

pub async fn await_contact_endpoint() -> String {
    if let Some(cached) = CONTACT_ENDPOINT.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_endpoint(&existing);
    }
    match fetch_runtime_config().await {
        Ok(cfg) => {
            if let Some(url) = cfg.contact_endpoint.as_deref().and_then(normalize_endpoint) {
                return cache_endpoint(&url);
            }
        }
        Err(err) => log::warn!("runtime config unavailable, using default endpoint: {}", err),
    }
    cache_endpoint(DEFAULT_CONTACT_ENDPOINT)
}

pub async fn init() {
    let endpoint = await_contact_endpoint().await;
    log::info!("contact endpoint resolved to {}", endpoint);
}
