//! Client-class emitters for target languages.

pub mod javascript;

pub use javascript::JavaScriptEmitter;

use crate::descriptor::EndpointDescriptor;
use crate::error::Result;

/// Trait for rendering one resource category into a client-class artifact.
pub trait ClientEmitter {
    /// Generated class name for a category display name. Fails with
    /// [`crate::Error::UnknownCategory`] when the category has no entry in
    /// the emitter's name table.
    fn class_name(&self, category_name: &str) -> Result<&'static str>;

    /// Artifact file name for a category (class name plus extension).
    fn file_name(&self, category_name: &str) -> Result<String>;

    /// Render the full artifact for a category: header, class declaration,
    /// one method per endpoint in the given order, closing marker.
    fn render(&self, category_name: &str, endpoints: &[EndpointDescriptor]) -> Result<String>;
}
