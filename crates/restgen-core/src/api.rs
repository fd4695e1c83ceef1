//! REST API description loading and raw model.
//!
//! The generator is driven by the service's self-describing REST API: a JSON
//! (or YAML) document listing every category, its endpoints and their declared
//! parameters. This module provides functionality for loading that document
//! from a file or URL and deserializing it into the raw `RestApi` model.
//!
//! # Examples
//!
//! ```no_run
//! use restgen_core::api::RestApi;
//! use restgen_core::error::Result;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let api = RestApi::from_file("rest-api.json").await?;
//! for category in &api.categories {
//!     println!("{}: {} endpoints", category.name, category.endpoints.len());
//! }
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::Error;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tokio::fs;

/// The full REST API description: one entry per resource category.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RestApi {
    pub categories: Vec<RestCategory>,
}

impl RestApi {
    /// Load an API description from a file or URL (supports both YAML and JSON)
    pub async fn from_file_or_url<P: AsRef<str>>(location: P) -> crate::Result<Self> {
        let location = location.as_ref();

        // Check if the input looks like a URL
        if location.starts_with("http://") || location.starts_with("https://") {
            return Self::from_url(location).await;
        }

        // Otherwise treat as a file path
        Self::from_file(location).await
    }

    /// Load an API description from a file (supports both YAML and JSON)
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        Self::parse_content(&content).map_err(|e| {
            Error::api(format!(
                "Failed to parse API description at {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Fetch an API description from a URL (supports both YAML and JSON)
    pub async fn from_url(url: &str) -> crate::Result<Self> {
        log::debug!("Fetching API description from {}", url);
        let response = reqwest::get(url).await.map_err(|e| {
            Error::api(format!("Failed to fetch API description from {}: {}", url, e))
        })?;

        if !response.status().is_success() {
            return Err(Error::api(format!(
                "Failed to fetch API description from {}: HTTP {}",
                url,
                response.status()
            )));
        }

        let content = response.text().await.map_err(|e| {
            Error::api(format!("Failed to read response from {}: {}", url, e))
        })?;

        Self::parse_content(&content)
            .map_err(|e| Error::api(format!("Failed to parse API description from {}: {}", url, e)))
    }

    /// Parse content as either JSON or YAML
    fn parse_content(content: &str) -> Result<Self, String> {
        // Try to parse as JSON first
        if let Ok(value) = serde_json::from_str::<JsonValue>(content) {
            return Self::from_value(value);
        }

        // If JSON parsing fails, try YAML
        if let Ok(value) = serde_yaml::from_str::<JsonValue>(content) {
            return Self::from_value(value);
        }

        // If both parsers fail, return an error
        Err("content is neither valid JSON nor YAML".to_string())
    }

    /// Accept both a bare category array and an object wrapping it under
    /// a `categories` key.
    fn from_value(value: JsonValue) -> Result<Self, String> {
        let categories = match value {
            JsonValue::Array(_) => value,
            other => other
                .get("categories")
                .cloned()
                .ok_or_else(|| "expected a category array or a 'categories' key".to_string())?,
        };
        let categories: Vec<RestCategory> =
            serde_json::from_value(categories).map_err(|e| e.to_string())?;
        Ok(Self { categories })
    }
}

/// Build the conventional URL of the self-describing API resource for a server.
pub fn meta_api_url(server_url: &str, api_version: &str) -> String {
    format!(
        "{}/webservices/rest/{}/meta/api",
        server_url.trim_end_matches('/'),
        api_version
    )
}

/// One resource category: a name, the common path prefix of its endpoints
/// and the endpoint list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RestCategory {
    /// Display name of the category (e.g. "Files", "Analysis - Variant")
    pub name: String,
    /// Common path prefix (e.g. "/{apiVersion}/files")
    pub path: String,
    /// Endpoints of the category, in declaration order
    #[serde(default)]
    pub endpoints: Vec<RestEndpoint>,
}

/// One REST operation as declared by the service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RestEndpoint {
    /// Path template (e.g. "/{apiVersion}/files/{files}/update")
    pub path: String,
    /// HTTP verb ("GET", "POST" or "DELETE")
    pub method: String,
    /// Free-text description, used for documentation only
    #[serde(default)]
    pub description: String,
    /// Declared parameters, in declaration order
    #[serde(default)]
    pub parameters: Vec<RestParameter>,
}

/// One declared endpoint parameter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RestParameter {
    /// Name of the parameter as declared by the service
    pub name: String,
    /// Abstract parameter type
    #[serde(rename = "type")]
    pub type_name: TypeName,
    /// Whether the parameter is mandatory
    #[serde(default)]
    pub required: bool,
    /// Default value, empty when the parameter has none
    #[serde(rename = "defaultValue", default)]
    pub default_value: String,
    /// Comma-separated literal value set, non-empty only for enum parameters
    #[serde(rename = "allowedValues", default)]
    pub allowed_values: String,
    /// Free-text description, used for documentation only
    #[serde(default)]
    pub description: String,
}

/// Abstract parameter type as declared in the API description.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeName {
    String,
    #[serde(alias = "int")]
    Integer,
    Object,
    List,
    Boolean,
    Enum,
}
