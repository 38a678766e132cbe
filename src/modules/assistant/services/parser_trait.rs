use async_trait::async_trait;

use crate::modules::assistant::models::ParsedItem;

/// Turns a rough spoken or typed work description into line items
///
/// Implementations fail closed: any problem (no credentials, transport
/// failure, unusable response) yields an empty list, never an error, so a
/// draft being edited is never disturbed.
#[async_trait]
pub trait WorkDescriptionParser: Send + Sync {
    /// Extract `{description, quantity}` pairs in the order they were described
    async fn parse(&self, description: &str) -> Vec<ParsedItem>;

    /// Whether the parser can produce anything at all
    fn is_enabled(&self) -> bool;

    /// Parser name for logs
    fn name(&self) -> &str;
}
