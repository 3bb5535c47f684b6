//! Field collection over a selection set
//!
//! Walks fields, inline fragments and fragment spreads depth-first, left to
//! right, and groups the surviving fields by response key. Sub-selections are
//! not collected here: each [`CollectedField`] carries the raw selections of every
//! occurrence so the resolver can collect them later against the concrete type
//! of the value it resolved.

use graphql_parser::query::{Selection, TypeCondition};
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::collections::HashSet;

use super::arguments;
use super::context::RequestContext;
use super::directives;
use crate::core::error::{CollectError, Result};
use crate::core::field::{CollectedField, response_key};

type GroupedFields<'d, 'q> = IndexMap<String, CollectedField<'d, 'q>>;

/// Collect `selections` for a value satisfying the type names in `satisfies`
///
/// Fields sharing a response key are merged into one [`CollectedField`] whose
/// arguments come from the first occurrence. A named fragment is expanded at most
/// once per call, however many times it is spread.
pub fn collect_fields<'d, 'q, I>(
    ctx: &RequestContext<'d, 'q>,
    selections: I,
    satisfies: &[&str],
) -> Result<Vec<CollectedField<'d, 'q>>>
where
    I: IntoIterator<Item = &'d Selection<'q, String>>,
{
    let mut collector = Collector {
        ctx,
        satisfies,
        visited: HashSet::new(),
    };
    let grouped = collector.collect(selections, 0)?;

    tracing::debug!(
        fields = grouped.len(),
        fragments = collector.visited.len(),
        "collected selection set"
    );

    Ok(grouped.into_values().collect())
}

struct Collector<'c, 'd, 'q> {
    ctx: &'c RequestContext<'d, 'q>,
    satisfies: &'c [&'c str],
    visited: HashSet<&'d str>,
}

impl<'d, 'q> Collector<'_, 'd, 'q> {
    fn collect<I>(&mut self, selections: I, depth: usize) -> Result<GroupedFields<'d, 'q>>
    where
        I: IntoIterator<Item = &'d Selection<'q, String>>,
    {
        let ctx = self.ctx;
        let limit = ctx.config().max_depth;
        if depth > limit {
            tracing::error!("selection processing recursion limit({limit}) exceeded");
            return Err(CollectError::RecursionLimitExceeded { limit });
        }

        let variables = ctx.variables();
        let mut grouped = GroupedFields::new();

        for selection in selections {
            match selection {
                Selection::Field(field) => {
                    if !directives::should_include(&field.directives, variables)? {
                        tracing::trace!(field = %field.name, "field excluded by directive");
                        continue;
                    }

                    let key = response_key(field);
                    if let Some(existing) = grouped.get_mut(key) {
                        existing.selections.extend(field.selection_set.items.iter());
                        continue;
                    }

                    let args = arguments::resolve_arguments(field, variables)?;
                    grouped.insert(key.to_string(), CollectedField::new(field, args));
                }
                Selection::InlineFragment(inline) => {
                    if !directives::should_include(&inline.directives, variables)? {
                        tracing::trace!("inline fragment excluded by directive");
                        continue;
                    }

                    if let Some(TypeCondition::On(type_name)) = &inline.type_condition
                        && !self.applies(type_name)
                    {
                        tracing::trace!(type_condition = %type_name, "inline fragment does not apply");
                        continue;
                    }

                    let fields = self.collect(&inline.selection_set.items, depth + 1)?;
                    merge(&mut grouped, fields);
                }
                Selection::FragmentSpread(spread) => {
                    if !directives::should_include(&spread.directives, variables)? {
                        tracing::trace!(fragment = %spread.fragment_name, "fragment spread excluded by directive");
                        continue;
                    }

                    let name = spread.fragment_name.as_str();
                    if !self.visited.insert(name) {
                        tracing::trace!(fragment = %name, "fragment already collected");
                        continue;
                    }

                    let Some(fragment) = ctx.fragment(name) else {
                        tracing::error!(fragment = %name, "spread of undefined fragment");
                        return Err(CollectError::MissingFragment {
                            name: name.to_string(),
                        });
                    };

                    let TypeCondition::On(type_name) = &fragment.type_condition;
                    if !self.applies(type_name) {
                        tracing::trace!(fragment = %name, type_condition = %type_name, "fragment does not apply");
                        continue;
                    }

                    let fields = self.collect(&fragment.selection_set.items, depth + 1)?;
                    merge(&mut grouped, fields);
                }
            }
        }

        Ok(grouped)
    }

    fn applies(&self, type_name: &str) -> bool {
        self.satisfies.iter().any(|satisfied| *satisfied == type_name)
    }
}

/// Merge fields collected from a fragment into the enclosing result
fn merge<'d, 'q>(grouped: &mut GroupedFields<'d, 'q>, fields: GroupedFields<'d, 'q>) {
    for (key, field) in fields {
        match grouped.entry(key) {
            Entry::Occupied(mut entry) => entry.get_mut().selections.extend(field.selections),
            Entry::Vacant(entry) => {
                entry.insert(field);
            }
        }
    }
}
