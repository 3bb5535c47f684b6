//! Argument extraction for collected fields

use graphql_parser::query::{Field, Value as GqlValue};
use indexmap::IndexMap;
use serde_json::{Number, Value, json};
use std::collections::HashMap;

use crate::core::error::{CollectError, Result};

/// Resolve the arguments of a field's defining occurrence
///
/// An argument bound to a variable that was not provided is left out of the map
/// entirely, so a resolver can fall back to its own default.
pub fn resolve_arguments(
    field: &Field<'_, String>,
    variables: &HashMap<String, Value>,
) -> Result<IndexMap<String, Value>> {
    let mut resolved = IndexMap::with_capacity(field.arguments.len());

    for (name, value) in &field.arguments {
        if let GqlValue::Variable(variable) = value {
            match variables.get(variable) {
                Some(bound) => {
                    resolved.insert(name.clone(), bound.clone());
                }
                None => tracing::trace!(
                    field = %field.name,
                    argument = %name,
                    variable = %variable,
                    "variable not bound, omitting argument"
                ),
            }
            continue;
        }

        resolved.insert(name.clone(), gql_value_to_json(name, value, variables)?);
    }

    Ok(resolved)
}

/// Convert a GraphQL value to JSON, resolving nested variables
///
/// Unbound variables nested inside lists or objects become `null`.
pub fn gql_value_to_json(
    argument: &str,
    value: &GqlValue<'_, String>,
    variables: &HashMap<String, Value>,
) -> Result<Value> {
    Ok(match value {
        GqlValue::Null => Value::Null,
        GqlValue::Boolean(b) => Value::Bool(*b),
        GqlValue::String(s) => Value::String(s.clone()),
        GqlValue::Enum(e) => Value::String(e.clone()),
        // Out-of-range integers are already rejected by the parser
        GqlValue::Int(i) => json!(i.as_i64()),
        GqlValue::Float(f) => Number::from_f64(*f).map(Value::Number).ok_or_else(|| {
            let reason = format!("float literal {f} is not finite");
            tracing::error!(argument = %argument, %reason, "malformed argument literal");
            CollectError::malformed_literal(argument, reason)
        })?,
        GqlValue::Variable(name) => variables.get(name).cloned().unwrap_or(Value::Null),
        GqlValue::List(list) => Value::Array(
            list.iter()
                .map(|item| gql_value_to_json(argument, item, variables))
                .collect::<Result<_>>()?,
        ),
        GqlValue::Object(obj) => {
            let mut map = serde_json::Map::new();
            for (k, v) in obj {
                map.insert(k.clone(), gql_value_to_json(argument, v, variables)?);
            }
            Value::Object(map)
        }
    })
}
