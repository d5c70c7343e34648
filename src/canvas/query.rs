//! Query-string builder for Canvas endpoints.
//!
//! Canvas uses repeated bracketed keys for list parameters
//! (`include[]=term&include[]=total_students`), so pairs are kept in order
//! rather than in a map.

use super::error::CanvasResult;

/// Page size requested for collection endpoints.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Ordered list of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query for a collection endpoint, starting with `per_page`.
    pub fn paged() -> Self {
        Self::new().push("per_page", DEFAULT_PER_PAGE)
    }

    /// Append a parameter.
    pub fn push(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Append a parameter only when a value is present.
    pub fn push_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    /// Append a parameter only when `condition` holds.
    pub fn push_if(self, condition: bool, key: impl Into<String>, value: impl ToString) -> Self {
        if condition { self.push(key, value) } else { self }
    }

    /// Append `key` once per value.
    pub fn extend<I, V>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        for value in values {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// URL-encode the pairs (`a=1&b=2`).
    pub fn encode(&self) -> CanvasResult<String> {
        Ok(serde_urlencoded::to_string(&self.pairs)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_keeps_order_and_repeats() {
        let query = Query::new()
            .extend("include[]", ["term", "total_students"])
            .push("state", "available");
        assert_eq!(
            query.encode().unwrap(),
            "include%5B%5D=term&include%5B%5D=total_students&state=available"
        );
    }

    #[test]
    fn test_optional_and_conditional() {
        let query = Query::new()
            .push_opt("missing", None::<u32>)
            .push_opt("present", Some(3))
            .push_if(false, "skipped", 1)
            .push_if(true, "kept", "yes");
        assert_eq!(query.encode().unwrap(), "present=3&kept=yes");
    }

    #[test]
    fn test_paged_and_empty() {
        assert!(Query::new().is_empty());
        assert_eq!(Query::paged().encode().unwrap(), "per_page=100");
    }
}
