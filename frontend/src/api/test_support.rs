#[cfg(test)]
pub mod data_host {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::DataResource;
    use reqwest::Method;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Stands in for the static host serving `<base>/<resource>.json`.
    /// Resources that were never served answer like a dropped connection.
    #[derive(Clone)]
    pub struct DataHost {
        origin: String,
        files: Arc<Mutex<HashMap<&'static str, MockResponse>>>,
    }

    impl DataHost {
        pub fn start() -> Self {
            static NEXT_HOST: AtomicUsize = AtomicUsize::new(1);
            Self {
                origin: format!(
                    "http://data-host-{}",
                    NEXT_HOST.fetch_add(1, Ordering::Relaxed)
                ),
                files: Arc::default(),
            }
        }

        /// Base URL to hand to `ApiClient::new_with_base_url`.
        pub fn base_url(&self) -> String {
            let base = format!("{}/data", self.origin);
            register_mock(base.clone(), Arc::new(self.clone()));
            base
        }

        pub fn serve_json(&self, resource: DataResource, body: Value) -> &Self {
            self.put(resource, MockResponse::json(200, body))
        }

        pub fn serve_text(&self, resource: DataResource, body: &str) -> &Self {
            self.put(resource, MockResponse::text(200, body))
        }

        pub fn fail_with(&self, resource: DataResource, status: u16) -> &Self {
            self.put(resource, MockResponse::text(status, ""))
        }

        fn put(&self, resource: DataResource, response: MockResponse) -> &Self {
            if let Ok(mut files) = self.files.lock() {
                files.insert(resource.file_name(), response);
            }
            self
        }
    }

    impl TestResponder for DataHost {
        fn respond(&self, request: &reqwest::Request) -> Option<MockResponse> {
            if request.method() != Method::GET {
                return None;
            }
            let file = request.url().path().strip_prefix("/data/")?;
            self.files.lock().ok()?.get(file).cloned()
        }
    }
}
