//! Generation entry point: one client-class artifact per category.

use std::path::Path;

use log::{debug, info};
use tokio::fs;

use crate::api::RestApi;
use crate::config::Config;
use crate::descriptor::EndpointDescriptor;
use crate::emit::{ClientEmitter, JavaScriptEmitter};
use crate::error::Result;

/// Generate one client artifact per category into `config.output_dir`.
///
/// Categories are processed strictly in the declared order; the run aborts
/// on the first error (an unknown category, a malformed endpoint or a
/// filesystem failure). Each artifact is written in a single call, so no
/// partially written artifact is ever left readable. Generation is
/// deterministic: the same description produces byte-identical artifacts.
pub async fn generate(config: &Config) -> Result<()> {
    let location = config.api_location()?;
    let api = RestApi::from_file_or_url(&location).await?;
    info!(
        "Loaded API description from {}: {} categories",
        location,
        api.categories.len()
    );

    generate_into(&api, Path::new(&config.output_dir)).await
}

/// Generate artifacts for an already-loaded API description.
pub async fn generate_into(api: &RestApi, output_dir: &Path) -> Result<()> {
    let emitter = JavaScriptEmitter::new();
    fs::create_dir_all(output_dir).await?;

    for category in &api.categories {
        let file_name = emitter.file_name(&category.name)?;

        let endpoints = category
            .endpoints
            .iter()
            .map(|endpoint| EndpointDescriptor::from_rest(category, endpoint))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            "Rendering category '{}' ({} endpoints)",
            category.name,
            endpoints.len()
        );

        let artifact = emitter.render(&category.name, &endpoints)?;
        let path = output_dir.join(&file_name);
        fs::write(&path, artifact).await?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}
