//! Field collection for GraphQL execution
//!
//! This module decides which fields of a selection set must be resolved for a
//! given value, with which arguments, and how occurrences from different
//! fragments merge under one response key.
//!
//! The executor is split into several sub-modules:
//! - `context`: Per-request fragment index, variables and operation lookup
//! - `collect`: The collection walk and response-key merging
//! - `directives`: `@skip` / `@include` evaluation
//! - `arguments`: Argument literal and variable extraction

mod arguments;
mod collect;
mod context;
mod directives;

pub use arguments::{gql_value_to_json, resolve_arguments};
pub use collect::collect_fields;
pub use context::{RequestContext, RootSelections, parse_document};
pub use directives::{INCLUDE_DIRECTIVE_NAME, SKIP_DIRECTIVE_NAME, should_include};
