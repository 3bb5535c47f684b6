//! # Field Collector
//!
//! Selection-set field collection for GraphQL execution engines.
//!
//! Given a selection set from a parsed operation and the type names the value
//! being resolved satisfies, the collector returns the fields that must be
//! resolved, in order, with fields sharing a response key merged together.
//!
//! ## Features
//!
//! - **Conditional inclusion**: `@skip` / `@include` with literal or variable conditions
//! - **Fragment inlining**: inline fragments and named fragment spreads
//! - **Type-condition narrowing**: fragments apply only to the satisfied types
//! - **Response-key merging**: aliases and repeated fields collapse into one entry
//! - **Cycle-safe**: each named fragment is expanded at most once per call
//! - **Lazy**: sub-selections stay raw until the resolver descends into them
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use field_collector::prelude::*;
//!
//! let doc = parse_document("{ pet { name ... on Dog { barkVolume } } }")?;
//! let ctx = RequestContext::new(&doc, HashMap::new());
//! let root = ctx.root_selections(None)?;
//!
//! for field in ctx.collect_fields(root.selections, &[root.root_type])? {
//!     // resolve `field`, then descend with the resolved value's types
//!     let children = ctx.collect_fields(field.child_selections(), &["Dog", "Pet"])?;
//! }
//! ```

pub mod config;
pub mod core;
pub mod executor;

/// Re-exports of commonly used types and functions
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{CollectError, CollectedField, Result, response_key};

    // === Collection ===
    pub use crate::executor::{
        RequestContext, RootSelections, collect_fields, parse_document, should_include,
    };

    // === Config ===
    pub use crate::config::CollectorConfig;

    // === External dependencies ===
    pub use serde_json::Value;
    pub use std::collections::HashMap;
}
