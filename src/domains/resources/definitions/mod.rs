//! Resource definitions module.
//!
//! Each resource template is defined in its own file with:
//! - URI template and metadata
//! - A resolver turning a concrete URI into content
//!
//! ## Adding a New Resource Template
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceTemplateDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

pub mod greeting;

pub use greeting::GreetingResource;

/// Trait for parameterized resource definitions.
///
/// The URI template follows RFC 6570 notation (e.g. `greeting://{name}`).
pub trait ResourceTemplateDefinition {
    /// The URI template clients fill in.
    const URI_TEMPLATE: &'static str;

    /// The display name of the template.
    const NAME: &'static str;

    /// A human-readable title.
    const TITLE: &'static str;

    /// A description of the resources this template produces.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Produce the text content for `uri`, or `None` if the URI does not
    /// match this template.
    fn resolve(uri: &str) -> Option<String>;
}
