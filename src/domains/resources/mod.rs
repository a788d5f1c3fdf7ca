//! Readable resources, all reached through URI templates.
//!
//! A template lives in `definitions/` as a [`ResourceTemplateDefinition`]
//! (URI template, metadata, resolver) and is listed once in `registry.rs`.
//! [`ResourceService`] answers `resources/templates/list` and
//! `resources/read` from that table, trying templates in registration order.

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::{GreetingResource, ResourceTemplateDefinition};
pub use error::ResourceError;
pub use registry::get_all_resource_templates;
pub use service::{ResourceService, TemplateEntry};
