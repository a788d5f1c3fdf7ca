//! Resource Registry - central registration of all resource templates.
//!
//! When adding a new resource template:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resource_templates()`

use rmcp::model::{AnnotateAble, RawResourceTemplate};

use super::definitions::{GreetingResource, ResourceTemplateDefinition};
use super::service::TemplateEntry;

/// Build a template entry from a definition.
fn build_template<R: ResourceTemplateDefinition>() -> TemplateEntry {
    TemplateEntry {
        template: RawResourceTemplate {
            uri_template: R::URI_TEMPLATE.to_string(),
            name: R::NAME.to_string(),
            title: Some(R::TITLE.to_string()),
            description: Some(R::DESCRIPTION.to_string()),
            mime_type: Some(R::MIME_TYPE.to_string()),
        }
        .no_annotation(),
        resolve: R::resolve,
    }
}

/// Get all registered resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in. Templates are tried in
/// the order returned here.
pub fn get_all_resource_templates() -> Vec<TemplateEntry> {
    vec![build_template::<GreetingResource>()]
}
