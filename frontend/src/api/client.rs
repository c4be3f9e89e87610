use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{api::types::*, config};

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

struct RawResponse {
    status: u16,
    body: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_data_base_url().await
        }
    }

    async fn fetch_raw(&self, resource: DataResource) -> Result<RawResponse, ResourceLoadFailure> {
        let url = resource.url(&self.resolved_base_url().await);
        if let Some(mocked) = self.mocked(resource, &url) {
            return mocked;
        }
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ResourceLoadFailure::network(resource, e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ResourceLoadFailure::network(resource, e))?;
        Ok(RawResponse { status, body })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        resource: DataResource,
    ) -> Result<T, ResourceLoadFailure> {
        let raw = self.fetch_raw(resource).await?;
        decode_response(resource, raw)
    }

    pub async fn get_welcome(&self) -> Result<WelcomeContent, ResourceLoadFailure> {
        self.get_json(DataResource::Welcome).await
    }

    pub async fn list_courses(&self) -> Result<Vec<CourseRecord>, ResourceLoadFailure> {
        self.get_json(DataResource::Courses).await
    }

    #[cfg(not(test))]
    fn mocked(
        &self,
        _resource: DataResource,
        _url: &str,
    ) -> Option<Result<RawResponse, ResourceLoadFailure>> {
        None
    }

    #[cfg(test)]
    fn mocked(
        &self,
        resource: DataResource,
        url: &str,
    ) -> Option<Result<RawResponse, ResourceLoadFailure>> {
        let responder = mock_for(url)?;
        let request = match self.client.get(url).build() {
            Ok(request) => request,
            Err(e) => return Some(Err(ResourceLoadFailure::network(resource, e))),
        };
        Some(
            responder
                .respond(&request)
                .map(|mock| RawResponse {
                    status: mock.status,
                    body: mock.body,
                })
                .ok_or_else(|| {
                    ResourceLoadFailure::network(resource, format!("no mock for GET {}", url))
                }),
        )
    }
}

fn decode_response<T: DeserializeOwned>(
    resource: DataResource,
    raw: RawResponse,
) -> Result<T, ResourceLoadFailure> {
    if !(200..300).contains(&raw.status) {
        return Err(ResourceLoadFailure::Status {
            resource,
            status: raw.status,
        });
    }
    serde_json::from_str(&raw.body).map_err(|e| ResourceLoadFailure::decode(resource, e))
}

#[cfg(test)]
#[derive(Clone, Debug)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

#[cfg(test)]
impl MockResponse {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[cfg(test)]
pub trait TestResponder: Send + Sync {
    fn respond(&self, request: &reqwest::Request) -> Option<MockResponse>;
}

#[cfg(test)]
type MockRegistry = std::sync::Mutex<Vec<(String, std::sync::Arc<dyn TestResponder>)>>;

#[cfg(test)]
fn mock_registry() -> &'static MockRegistry {
    static REGISTRY: std::sync::OnceLock<MockRegistry> = std::sync::OnceLock::new();
    REGISTRY.get_or_init(Default::default)
}

#[cfg(test)]
pub fn register_mock(base_url: String, responder: std::sync::Arc<dyn TestResponder>) {
    if let Ok(mut registry) = mock_registry().lock() {
        registry.push((base_url, responder));
    }
}

#[cfg(test)]
fn mock_for(url: &str) -> Option<std::sync::Arc<dyn TestResponder>> {
    let registry = mock_registry().lock().ok()?;
    registry
        .iter()
        .rev()
        .find(|(base, _)| url.starts_with(base.as_str()))
        .map(|(_, responder)| responder.clone())
}
