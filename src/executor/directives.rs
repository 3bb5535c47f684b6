//! Conditional inclusion (`@skip` / `@include`)

use graphql_parser::query::{Directive, Value as GqlValue};
use serde_json::Value;
use std::collections::HashMap;

use crate::core::error::{CollectError, Result};

pub const SKIP_DIRECTIVE_NAME: &str = "skip";
pub const INCLUDE_DIRECTIVE_NAME: &str = "include";

/// Decide whether a selection carrying `directives` is part of the result
///
/// Only one directive is consulted: `@skip` when present, otherwise `@include`.
pub fn should_include(
    directives: &[Directive<'_, String>],
    variables: &HashMap<String, Value>,
) -> Result<bool> {
    if let Some(skip) = find_directive(directives, SKIP_DIRECTIVE_NAME) {
        return Ok(!resolve_if_argument(skip, variables)?);
    }

    if let Some(include) = find_directive(directives, INCLUDE_DIRECTIVE_NAME) {
        return resolve_if_argument(include, variables);
    }

    Ok(true)
}

fn find_directive<'d, 'q>(
    directives: &'d [Directive<'q, String>],
    name: &str,
) -> Option<&'d Directive<'q, String>> {
    directives.iter().find(|d| d.name == name)
}

fn resolve_if_argument(
    directive: &Directive<'_, String>,
    variables: &HashMap<String, Value>,
) -> Result<bool> {
    let fail = |reason: String| {
        tracing::error!(directive = %directive.name, %reason, "malformed inclusion directive");
        CollectError::malformed_directive(&directive.name, reason)
    };

    let (_, value) = directive
        .arguments
        .iter()
        .find(|(name, _)| name == "if")
        .ok_or_else(|| fail("argument 'if' not defined".to_string()))?;

    match value {
        GqlValue::Boolean(b) => Ok(*b),
        GqlValue::Variable(variable) => match variables.get(variable) {
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(fail("argument 'if' is not a boolean".to_string())),
            None => Err(fail(format!(
                "argument 'if' is bound to unset variable ${variable}"
            ))),
        },
        _ => Err(fail("argument 'if' is not a boolean".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_parser::query::{Definition, Document, OperationDefinition, Selection, parse_query};
    use serde_json::json;

    fn field_directives<'d, 'q>(doc: &'d Document<'q, String>) -> &'d [Directive<'q, String>] {
        match &doc.definitions[0] {
            Definition::Operation(OperationDefinition::SelectionSet(set)) => match &set.items[0] {
                Selection::Field(field) => &field.directives,
                _ => panic!("expected a field"),
            },
            _ => panic!("expected a shorthand query"),
        }
    }

    fn include(query: &str, variables: &HashMap<String, Value>) -> Result<bool> {
        let doc = parse_query::<String>(query).expect("valid query");
        should_include(field_directives(&doc), variables)
    }

    #[test]
    fn test_no_directive_includes() {
        assert_eq!(include("{ name }", &HashMap::new()), Ok(true));
    }

    #[test]
    fn test_literal_conditions() {
        let vars = HashMap::new();
        assert_eq!(include("{ name @skip(if: true) }", &vars), Ok(false));
        assert_eq!(include("{ name @skip(if: false) }", &vars), Ok(true));
        assert_eq!(include("{ name @include(if: true) }", &vars), Ok(true));
        assert_eq!(include("{ name @include(if: false) }", &vars), Ok(false));
    }

    #[test]
    fn test_skip_takes_precedence() {
        let vars = HashMap::new();
        assert_eq!(
            include("{ name @include(if: true) @skip(if: true) }", &vars),
            Ok(false)
        );
        // include is not consulted once skip is present
        assert_eq!(
            include("{ name @skip(if: false) @include(if: false) }", &vars),
            Ok(true)
        );
    }

    #[test]
    fn test_variable_conditions() {
        let mut vars = HashMap::new();
        vars.insert("show".to_string(), json!(false));
        assert_eq!(include("{ name @include(if: $show) }", &vars), Ok(false));

        vars.insert("show".to_string(), json!(true));
        assert_eq!(include("{ name @include(if: $show) }", &vars), Ok(true));
        assert_eq!(include("{ name @skip(if: $show) }", &vars), Ok(false));
    }

    #[test]
    fn test_unrelated_directives_are_ignored() {
        assert_eq!(
            include("{ name @deprecated(reason: \"x\") }", &HashMap::new()),
            Ok(true)
        );
    }

    #[test]
    fn test_missing_if_argument_is_an_error() {
        let err = include("{ name @skip }", &HashMap::new()).expect_err("should fail");
        assert_eq!(
            err,
            CollectError::MalformedDirective {
                directive: "skip".to_string(),
                reason: "argument 'if' not defined".to_string(),
            }
        );
    }

    #[test]
    fn test_non_boolean_if_is_an_error() {
        let err = include("{ name @include(if: \"yes\") }", &HashMap::new())
            .expect_err("literal string should fail");
        assert_eq!(err.to_string(), "include: argument 'if' is not a boolean");

        let mut vars = HashMap::new();
        vars.insert("show".to_string(), json!(1));
        let err = include("{ name @include(if: $show) }", &vars).expect_err("int should fail");
        assert_eq!(err.error_code(), "MALFORMED_DIRECTIVE");
    }

    #[test]
    fn test_unset_variable_is_an_error() {
        let err = include("{ name @skip(if: $hidden) }", &HashMap::new())
            .expect_err("unset variable should fail");
        assert!(err.to_string().contains("$hidden"), "got: {err}");
    }
}
