/// Shown when a search matches nothing.
pub const NO_MATCH_MESSAGE: &str = "Product yang anda cari tidak ada!";

/// Free-text product search input.
///
/// A product matches when its name or description contains the text in any
/// case, or when its name matches the text as a case-sensitive regular
/// expression. Both forms are handed to the store as bound values, never
/// spliced into a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Returns `None` for an absent or empty query.
    pub fn parse(raw: Option<String>) -> Option<Self> {
        raw.filter(|q| !q.is_empty()).map(|text| Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// `LIKE` pattern for the case-insensitive substring clauses.
    pub fn contains_pattern(&self) -> String {
        format!("%{}%", self.text.to_lowercase())
    }

    /// Case-sensitive regular expression matched against product names.
    ///
    /// The text is passed through as typed; an invalid expression is
    /// reported by the store.
    pub fn name_pattern(&self) -> &str {
        &self.text
    }
}

/// What a search produced.
#[derive(Debug, Clone)]
pub enum SearchOutcome<T> {
    /// No query text was given.
    NoQuery,
    /// The query matched nothing.
    NoMatches,
    Matches(Vec<T>),
}
