//! Greeting resource template definition.

use super::ResourceTemplateDefinition;

/// Personalized greeting resource (`greeting://{name}`).
pub struct GreetingResource;

impl GreetingResource {
    /// Scheme prefix every greeting URI starts with.
    pub const URI_PREFIX: &'static str = "greeting://";

    /// Build the greeting for `name`.
    ///
    /// The name is used verbatim: no trimming, escaping or validation, and
    /// the empty string is accepted.
    pub fn greet(name: &str) -> String {
        format!("Hello, {name}!")
    }

    /// Extract the `{name}` parameter from a greeting URI.
    ///
    /// `{name}` is a single non-empty path segment, so `greeting://` and
    /// `greeting://a/b` do not match the template.
    pub fn extract_name(uri: &str) -> Option<&str> {
        uri.strip_prefix(Self::URI_PREFIX)
            .filter(|name| !name.is_empty() && !name.contains('/'))
    }
}

impl ResourceTemplateDefinition for GreetingResource {
    const URI_TEMPLATE: &'static str = "greeting://{name}";
    const NAME: &'static str = "greeting";
    const TITLE: &'static str = "Greeting";
    const DESCRIPTION: &'static str = "Get a personalized greeting";
    const MIME_TYPE: &'static str = "text/plain";

    fn resolve(uri: &str) -> Option<String> {
        Self::extract_name(uri).map(Self::greet)
    }
}
