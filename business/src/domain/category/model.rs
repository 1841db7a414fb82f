/// The category fields shown next to a product.
///
/// Categories are managed outside this service; products only reference them
/// by id, and reads join these fields in.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub name: String,
    pub description: Option<String>,
}
