use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// The read-only JSON endpoints the dashboard consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataResource {
    Welcome,
    Courses,
}

impl DataResource {
    pub fn file_name(&self) -> &'static str {
        match self {
            DataResource::Welcome => "welcome.json",
            DataResource::Courses => "courses.json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataResource::Welcome => "welcome data",
            DataResource::Courses => "courses",
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.file_name())
    }
}

impl fmt::Display for DataResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WelcomeContent {
    pub title: String,
    pub subtitle: String,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CourseRecord {
    pub id: i64,
    pub title: String,
    pub level: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
}

/// Every way a resource read can fail. Panels never surface these to the
/// user; they are reported through diagnostics and the panel falls back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceLoadFailure {
    #[error("failed to load {resource}: {message}")]
    Network {
        resource: DataResource,
        message: String,
    },
    #[error("failed to load {resource}: HTTP {status}")]
    Status { resource: DataResource, status: u16 },
    #[error("failed to decode {resource}: {message}")]
    Decode {
        resource: DataResource,
        message: String,
    },
}

impl ResourceLoadFailure {
    pub fn network(resource: DataResource, err: impl fmt::Display) -> Self {
        Self::Network {
            resource,
            message: err.to_string(),
        }
    }

    pub fn decode(resource: DataResource, err: impl fmt::Display) -> Self {
        Self::Decode {
            resource,
            message: err.to_string(),
        }
    }

    pub fn resource(&self) -> DataResource {
        match self {
            Self::Network { resource, .. }
            | Self::Status { resource, .. }
            | Self::Decode { resource, .. } => *resource,
        }
    }
}
