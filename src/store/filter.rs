//! # Filter Rendering
//!
//! Column filters in the store's query dialect: each filter becomes a
//! `column=operator.value` query parameter.

/// Comparison operators understood by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    /// Equals
    Eq,
    /// Not equals
    Neq,
    /// Greater than
    Gt,
    /// Greater than or equal
    Gte,
    /// Less than
    Lt,
    /// Less than or equal
    Lte,
    /// Pattern match (LIKE)
    Like,
    /// Value in list
    In,
    /// Is null/not null
    Is,
}

impl FilterOperator {
    /// Get the operator string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "eq",
            FilterOperator::Neq => "neq",
            FilterOperator::Gt => "gt",
            FilterOperator::Gte => "gte",
            FilterOperator::Lt => "lt",
            FilterOperator::Lte => "lte",
            FilterOperator::Like => "like",
            FilterOperator::In => "in",
            FilterOperator::Is => "is",
        }
    }
}

/// One rendered column filter
#[derive(Debug, Clone)]
pub struct Filter {
    /// Column to filter on
    pub column: String,

    /// Comparison operator
    pub operator: FilterOperator,

    /// Value as it appears on the wire
    pub value: String,
}

impl Filter {
    /// Create a new filter
    pub fn new(
        column: impl Into<String>,
        operator: FilterOperator,
        value: impl ToString,
    ) -> Self {
        Self {
            column: column.into(),
            operator,
            value: value.to_string(),
        }
    }

    /// Create an equality filter
    pub fn eq(column: impl Into<String>, value: impl ToString) -> Self {
        Self::new(column, FilterOperator::Eq, value)
    }

    /// Create an "in list" filter: `column=in.(a,b,c)`
    pub fn in_list<V: ToString>(column: impl Into<String>, values: &[V]) -> Self {
        let list = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        Self::new(column, FilterOperator::In, format!("({})", list))
    }

    /// Create an "is null" filter
    pub fn is_null(column: impl Into<String>) -> Self {
        Self::new(column, FilterOperator::Is, "null")
    }

    /// Render the query-string pair for this filter
    pub fn to_query_pair(&self) -> (String, String) {
        (
            self.column.clone(),
            format!("{}.{}", self.operator.as_str(), self.value),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_filter_renders() {
        let (key, value) = Filter::eq("id", 42).to_query_pair();
        assert_eq!(key, "id");
        assert_eq!(value, "eq.42");
    }

    #[test]
    fn test_comparison_filter_renders() {
        let (key, value) = Filter::new("age", FilterOperator::Gte, 18).to_query_pair();
        assert_eq!(key, "age");
        assert_eq!(value, "gte.18");
    }

    #[test]
    fn test_in_list_renders() {
        let (key, value) = Filter::in_list("status", &["active", "pending"]).to_query_pair();
        assert_eq!(key, "status");
        assert_eq!(value, "in.(active,pending)");
    }

    #[test]
    fn test_is_null_renders() {
        let (key, value) = Filter::is_null("email").to_query_pair();
        assert_eq!(key, "email");
        assert_eq!(value, "is.null");
    }
}
