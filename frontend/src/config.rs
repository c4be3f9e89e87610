use futures::future::{FutureExt, LocalBoxFuture, Shared};
use serde::Deserialize;
use std::cell::RefCell;
use std::sync::OnceLock;

pub const DEFAULT_DATA_BASE_URL: &str = "/data";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    pub data_base_url: Option<String>,
}

static DATA_BASE_URL: OnceLock<String> = OnceLock::new();

type PendingBaseUrl = Shared<LocalBoxFuture<'static, String>>;

thread_local! {
    static RESOLVING: RefCell<Option<PendingBaseUrl>> = const { RefCell::new(None) };
}

fn read_global_key(global: &str, keys: [&str; 2]) -> Option<String> {
    // Expect optional global object: window.<global> = { DATA_BASE_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    // env.js (window.__DASHBOARD_ENV) wins over window.__DASHBOARD_CONFIG.
    read_global_key("__DASHBOARD_ENV", ["DATA_BASE_URL", "data_base_url"])
        .or_else(|| read_global_key("__DASHBOARD_CONFIG", ["data_base_url", "DATA_BASE_URL"]))
}

pub fn current_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

fn write_window_config(cfg: &RuntimeConfig) {
    let Some(url) = &cfg.data_base_url else {
        return;
    };
    let Some(w) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"data_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &"__DASHBOARD_CONFIG".into(), &obj);
}

async fn fetch_runtime_config(origin: &str) -> Option<RuntimeConfig> {
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Trims trailing slashes and anchors path-only bases (`/data`) to `origin`.
pub fn normalize_base_url(raw: &str, origin: Option<&str>) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        return trimmed.to_string();
    }
    let path = trimmed.trim_start_matches("./").trim_start_matches('/');
    match origin {
        Some(origin) => {
            let origin = origin.trim_end_matches('/');
            if path.is_empty() {
                origin.to_string()
            } else {
                format!("{}/{}", origin, path)
            }
        }
        None => format!("/{}", path),
    }
}

fn cache_base_url(value: &str) -> String {
    let normalized = normalize_base_url(value, current_origin().as_deref());
    DATA_BASE_URL.get_or_init(|| normalized).clone()
}

async fn resolve_data_base_url() -> String {
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(origin) = current_origin() {
        if let Some(cfg) = fetch_runtime_config(&origin).await {
            write_window_config(&cfg);
            if let Some(url) = cfg.data_base_url {
                return cache_base_url(&url);
            }
        }
    }
    cache_base_url(DEFAULT_DATA_BASE_URL)
}

/// Returns the resolution already in flight, or starts one. Every caller
/// awaits the same future, so `config.json` is requested at most once.
fn join_or_start(
    slot: &RefCell<Option<PendingBaseUrl>>,
    start: impl FnOnce() -> LocalBoxFuture<'static, String>,
) -> PendingBaseUrl {
    slot.borrow_mut()
        .get_or_insert_with(|| start().shared())
        .clone()
}

pub async fn await_data_base_url() -> String {
    if let Some(cached) = DATA_BASE_URL.get() {
        return cached.clone();
    }
    let pending =
        RESOLVING.with(|slot| join_or_start(slot, || resolve_data_base_url().boxed_local()));
    pending.await
}

pub async fn init() {
    let url = await_data_base_url().await;
    log::info!("Data resources resolved to {}", url);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn trims_trailing_slashes_from_absolute_urls() {
        assert_eq!(
            normalize_base_url("https://cdn.example.com/data//", None),
            "https://cdn.example.com/data"
        );
    }

    #[test]
    fn anchors_path_only_bases_to_origin() {
        assert_eq!(
            normalize_base_url("/data", Some("http://localhost:8080")),
            "http://localhost:8080/data"
        );
        assert_eq!(
            normalize_base_url("./static/data/", Some("http://localhost:8080/")),
            "http://localhost:8080/static/data"
        );
        assert_eq!(
            normalize_base_url("/", Some("http://localhost:8080")),
            "http://localhost:8080"
        );
    }

    #[test]
    fn keeps_path_only_bases_rooted_without_origin() {
        assert_eq!(normalize_base_url("data/", None), "/data");
        assert_eq!(normalize_base_url(DEFAULT_DATA_BASE_URL, None), "/data");
    }

    #[test]
    fn concurrent_callers_share_one_resolution() {
        let slot = RefCell::new(None);
        let starts = Rc::new(Cell::new(0));

        let start = |starts: Rc<Cell<u32>>| {
            move || {
                starts.set(starts.get() + 1);
                async { "http://localhost:8080/data".to_string() }.boxed_local()
            }
        };
        let first = join_or_start(&slot, start(starts.clone()));
        let second = join_or_start(&slot, start(starts.clone()));

        let (a, b) = futures::executor::block_on(futures::future::join(first, second));
        assert_eq!(starts.get(), 1);
        assert_eq!(a, b);
        assert_eq!(a, "http://localhost:8080/data");
    }

    #[test]
    fn runtime_config_accepts_missing_fields() {
        let cfg: RuntimeConfig = serde_json::from_str("{}").expect("decode");
        assert!(cfg.data_base_url.is_none());

        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"data_base_url":"/content"}"#).expect("decode");
        assert_eq!(cfg.data_base_url.as_deref(), Some("/content"));
    }
}
