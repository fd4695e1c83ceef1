//! Configuration for client generation.
//!
//! The generator needs two things: where the REST API description lives
//! (a file, a URL, or a server to query for it) and where to write the
//! generated artifacts. Configuration can be created programmatically or
//! loaded from a YAML file.

// Internal imports (std, crate)
use std::path::Path;

use crate::api::meta_api_url;
use crate::error::Error;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;
use url::Url;

/// Configuration for a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server to query for its self-describing REST API. Also passed through
    /// into generated boilerplate.
    #[serde(default)]
    pub server_url: Option<Url>,

    /// Path or URL of an API description, overriding `server_url`
    #[serde(default)]
    pub api_path: Option<String>,

    /// Output directory for generated artifacts
    pub output_dir: String,

    /// REST API version segment used when querying the server
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

impl Config {
    /// Create a new Config reading the API description from a file or URL
    pub fn new(api_path: impl Into<String>, output_dir: impl Into<String>) -> Self {
        Self {
            server_url: None,
            api_path: Some(api_path.into()),
            output_dir: output_dir.into(),
            api_version: default_api_version(),
        }
    }

    /// Create a new Config querying `server_url` for its API description
    pub fn for_server(server_url: Url, output_dir: impl Into<String>) -> Self {
        Self {
            server_url: Some(server_url),
            api_path: None,
            output_dir: output_dir.into(),
            api_version: default_api_version(),
        }
    }

    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Resolve where the API description should be read from. `api_path`
    /// wins over `server_url`; having neither is a configuration error.
    pub fn api_location(&self) -> crate::Result<String> {
        if let Some(path) = &self.api_path {
            return Ok(path.clone());
        }
        if let Some(server) = &self.server_url {
            return Ok(meta_api_url(server.as_str(), &self.api_version));
        }
        Err(Error::config(
            "neither an API description path nor a server URL is configured",
        ))
    }
}

fn default_api_version() -> String {
    "v2".to_string()
}
