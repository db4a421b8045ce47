// SPDX-License-Identifier: GPL-3.0-only

//! Term resolution for lookup requests
//!
//! A term that is a whole-string `{{ name }}` reference is replaced by the
//! value of `name` in the caller's variables; anything else passes through
//! untouched. A reference to a variable that does not exist is an
//! UndefinedVariable error, kept distinct from the matcher's NotFound so
//! "your inputs are broken" never reads as "no volume matched".

use serde_json::{Map, Value};

use ec2ops_contracts::ModuleError;

pub fn resolve(terms: &[Value], variables: &Map<String, Value>) -> Result<Vec<Value>, ModuleError> {
    terms
        .iter()
        .map(|term| resolve_term(term, variables))
        .collect()
}

fn resolve_term(term: &Value, variables: &Map<String, Value>) -> Result<Value, ModuleError> {
    let Value::String(raw) = term else {
        return Ok(term.clone());
    };

    let Some(name) = template_reference(raw) else {
        return Ok(term.clone());
    };

    variables.get(name).cloned().ok_or_else(|| {
        ModuleError::undefined_variable(format!("variable '{name}' is undefined"))
    })
}

/// The referenced variable name when `raw` is exactly one `{{ name }}`
/// expression, with optional surrounding whitespace.
fn template_reference(raw: &str) -> Option<&str> {
    let inner = raw.trim().strip_prefix("{{")?.strip_suffix("}}")?;
    let name = inner.trim();
    if name.is_empty() || name.contains("{{") {
        return None;
    }
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ec2ops_contracts::ModuleErrorKind;
    use serde_json::json;

    fn variables(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn plain_terms_pass_through() {
        let terms = vec![json!([{"id": "vol-1"}]), json!("/dev/sdf")];
        let resolved = resolve(&terms, &Map::new()).expect("resolve");
        assert_eq!(resolved, terms);
    }

    #[test]
    fn whole_string_reference_is_replaced() {
        let vars = variables(&[("device", json!("/dev/sdg"))]);
        let resolved = resolve(&[json!("{{ device }}")], &vars).expect("resolve");
        assert_eq!(resolved, vec![json!("/dev/sdg")]);
    }

    #[test]
    fn reference_may_hold_a_sequence() {
        let vars = variables(&[("volumes", json!([{"id": "vol-1"}]))]);
        let resolved = resolve(&[json!("{{volumes}}")], &vars).expect("resolve");
        assert_eq!(resolved, vec![json!([{"id": "vol-1"}])]);
    }

    #[test]
    fn unknown_variable_is_undefined_error() {
        let error = resolve(&[json!("{{ missing }}")], &Map::new()).expect_err("undefined");
        assert_eq!(error.kind, ModuleErrorKind::UndefinedVariable);
        assert_eq!(error.message, "variable 'missing' is undefined");
    }

    #[test]
    fn partial_template_is_not_a_reference() {
        // Only whole-string references resolve; embedded ones pass through.
        let vars = variables(&[("device", json!("/dev/sdg"))]);
        let resolved = resolve(&[json!("prefix {{ device }}")], &vars).expect("resolve");
        assert_eq!(resolved, vec![json!("prefix {{ device }}")]);
    }
}
