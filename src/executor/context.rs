//! Per-request collection context

use graphql_parser::query::{
    Definition, Document, FragmentDefinition, OperationDefinition, Selection, parse_query,
};
use serde_json::Value;
use std::collections::HashMap;

use super::collect;
use crate::config::CollectorConfig;
use crate::core::error::{CollectError, Result};
use crate::core::field::CollectedField;

/// Parse a query document
pub fn parse_document(query: &str) -> Result<Document<'_, String>> {
    parse_query::<String>(query).map_err(|e| CollectError::Parse {
        message: e.to_string(),
    })
}

/// Everything collection reads besides the selection set itself
///
/// Built once per request from a parsed document and the coerced variable
/// values; read-only afterwards, so any number of collection calls may share it.
#[derive(Debug, Clone)]
pub struct RequestContext<'d, 'q> {
    document: &'d Document<'q, String>,
    fragments: HashMap<&'d str, &'d FragmentDefinition<'q, String>>,
    variables: HashMap<String, Value>,
    config: CollectorConfig,
}

/// Root selection set of the operation being executed
#[derive(Debug, Clone, Copy)]
pub struct RootSelections<'d, 'q> {
    /// Operation name, if the operation has one
    pub name: Option<&'d str>,
    /// Root type the selections apply to (`Query`, `Mutation` or `Subscription`)
    pub root_type: &'static str,
    /// Top-level selections of the operation
    pub selections: &'d [Selection<'q, String>],
}

impl<'d, 'q> RequestContext<'d, 'q> {
    /// Create a context with the default configuration
    pub fn new(document: &'d Document<'q, String>, variables: HashMap<String, Value>) -> Self {
        let fragments = document
            .definitions
            .iter()
            .filter_map(|def| match def {
                Definition::Fragment(fragment) => Some((fragment.name.as_str(), fragment)),
                Definition::Operation(_) => None,
            })
            .collect();

        Self {
            document,
            fragments,
            variables,
            config: CollectorConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: CollectorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn document(&self) -> &'d Document<'q, String> {
        self.document
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    pub fn variables(&self) -> &HashMap<String, Value> {
        &self.variables
    }

    /// Get a single variable value
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Look up a fragment definition by name
    pub fn fragment(&self, name: &str) -> Option<&'d FragmentDefinition<'q, String>> {
        self.fragments.get(name).copied()
    }

    /// Find the operation to execute
    ///
    /// Without a name the first operation of the document is used.
    pub fn root_selections(&self, operation_name: Option<&str>) -> Result<RootSelections<'d, 'q>> {
        self.document
            .definitions
            .iter()
            .filter_map(|def| match def {
                Definition::Operation(op) => Some(root_of(op)),
                Definition::Fragment(_) => None,
            })
            .find(|root| operation_name.is_none() || root.name == operation_name)
            .ok_or_else(|| CollectError::OperationNotFound {
                name: operation_name.map(str::to_string),
            })
    }

    /// Collect `selections` for a value satisfying `satisfies`
    ///
    /// See [`collect::collect_fields`].
    pub fn collect_fields<I>(
        &self,
        selections: I,
        satisfies: &[&str],
    ) -> Result<Vec<CollectedField<'d, 'q>>>
    where
        I: IntoIterator<Item = &'d Selection<'q, String>>,
    {
        collect::collect_fields(self, selections, satisfies)
    }
}

fn root_of<'d, 'q>(op: &'d OperationDefinition<'q, String>) -> RootSelections<'d, 'q> {
    let (name, root_type, selection_set) = match op {
        OperationDefinition::SelectionSet(selection_set) => (None, "Query", selection_set),
        OperationDefinition::Query(query) => (query.name.as_deref(), "Query", &query.selection_set),
        OperationDefinition::Mutation(mutation) => (
            mutation.name.as_deref(),
            "Mutation",
            &mutation.selection_set,
        ),
        OperationDefinition::Subscription(subscription) => (
            subscription.name.as_deref(),
            "Subscription",
            &subscription.selection_set,
        ),
    };

    RootSelections {
        name,
        root_type,
        selections: &selection_set.items,
    }
}
