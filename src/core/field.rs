//! The merged, collected view of a field

use graphql_parser::query::{Field, Selection};
use indexmap::IndexMap;
use serde_json::Value;

/// One entry of a collection result
///
/// Every selection in a collected selection set that shares a response key ends up
/// in the same `CollectedField`. Only the first occurrence defines the name and the
/// arguments; every occurrence contributes its sub-selections, which stay
/// uncollected until the resolver pipeline descends into this field.
#[derive(Debug, Clone)]
pub struct CollectedField<'d, 'q> {
    pub(crate) response_key: String,
    pub(crate) alias: Option<String>,
    pub(crate) name: String,
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) selections: Vec<&'d Selection<'q, String>>,
}

impl<'d, 'q> CollectedField<'d, 'q> {
    /// Build the defining occurrence of a response key
    pub(crate) fn new(field: &'d Field<'q, String>, arguments: IndexMap<String, Value>) -> Self {
        Self {
            response_key: response_key(field).to_string(),
            alias: field.alias.clone(),
            name: field.name.clone(),
            arguments,
            selections: field.selection_set.items.iter().collect(),
        }
    }

    /// Alias if the defining occurrence had one, otherwise the field name
    pub fn response_key(&self) -> &str {
        &self.response_key
    }

    /// Explicit alias of the defining occurrence
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Underlying field name to resolve
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Arguments of the defining occurrence, in document order
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    /// Get a single argument value
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }

    /// Sub-selections of every merged occurrence, in encounter order
    ///
    /// Feed these back into the collector together with the satisfied types of
    /// the value this field resolved to.
    pub fn child_selections(&self) -> impl Iterator<Item = &'d Selection<'q, String>> + '_ {
        self.selections.iter().copied()
    }

    /// Number of raw sub-selections accumulated so far
    pub fn child_selection_count(&self) -> usize {
        self.selections.len()
    }

    /// Whether this is a leaf field (no sub-selections from any occurrence)
    pub fn is_leaf(&self) -> bool {
        self.selections.is_empty()
    }
}

/// Response key of a field selection: its alias, else its name
pub fn response_key<'d>(field: &'d Field<'_, String>) -> &'d str {
    field.alias.as_deref().unwrap_or(field.name.as_str())
}
