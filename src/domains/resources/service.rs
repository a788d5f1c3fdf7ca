//! Resource service: lists the template table and resolves reads against it.

use rmcp::model::{ReadResourceResult, ResourceContents, ResourceTemplate};
use tracing::{debug, info};

use super::error::ResourceError;
use super::registry::get_all_resource_templates;

/// A registered resource template together with its resolver.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    /// The template metadata advertised to clients.
    pub template: ResourceTemplate,

    /// Renders the content for a concrete URI, `None` when it doesn't match.
    pub resolve: fn(&str) -> Option<String>,
}

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Templates, tried in registration order.
    templates: Vec<TemplateEntry>,
}

impl ResourceService {
    /// Create a new ResourceService with every registered template.
    pub fn new() -> Self {
        Self::with_templates(get_all_resource_templates())
    }

    /// Create a ResourceService from an explicit template table.
    pub fn with_templates(templates: Vec<TemplateEntry>) -> Self {
        info!("Initializing ResourceService");
        for entry in &templates {
            info!("Registering resource template: {}", entry.template.raw.uri_template);
        }
        Self { templates }
    }

    /// List all available resource templates.
    pub fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates
            .iter()
            .map(|entry| entry.template.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        if !uri.contains("://") {
            return Err(ResourceError::invalid_uri(uri));
        }

        let (entry, text) = self
            .templates
            .iter()
            .find_map(|entry| (entry.resolve)(uri).map(|text| (entry, text)))
            .ok_or_else(|| ResourceError::not_found(uri))?;

        debug!("Resolved {} via {}", uri, entry.template.raw.uri_template);

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: entry.template.raw.mime_type.clone(),
                text,
                meta: None,
            }],
        })
    }
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}
