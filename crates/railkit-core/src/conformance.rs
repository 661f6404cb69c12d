//! Structural conformance of parsed value trees
//!
//! The external validator hands back a value tree it believes matches the
//! rail template. Before deserializing, the tree is walked against the field
//! registry so that a missing required field or a wrong JSON type is reported
//! with its exact location instead of as an opaque serde message.
//!
//! Length and format constraints are not checked here. Those belong to the
//! validator, which applies each field's `on-fail` policy to them.
//!
//! Copyright (c) 2025 Railkit Team
//! Licensed under the Apache-2.0 license

use crate::error::{Violation, ViolationRule};
use crate::schema::{Field, FieldKind};
use serde_json::Value;

/// Location of the value currently being checked
#[derive(Debug, Clone)]
pub struct CheckContext {
    /// Current JSON path
    pub path: String,
}

impl CheckContext {
    /// Context positioned at the root of the tree
    pub fn root() -> Self {
        Self {
            path: "$".to_string(),
        }
    }

    /// Create a child context for an object key
    pub fn child<P: AsRef<str>>(&self, segment: P) -> Self {
        Self {
            path: format!("{}.{}", self.path, segment.as_ref()),
        }
    }

    /// Create a child context for an array index
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
        }
    }

    fn violation(&self, rule: ViolationRule, expected: &str, actual: &str) -> Violation {
        Violation {
            path: self.path.clone(),
            rule,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Check a value tree against top-level field declarations
///
/// Returns every violation found; an empty vector means the tree has the
/// declared shape.
pub fn check(fields: &[Field], value: &Value) -> Vec<Violation> {
    let mut violations = Vec::new();
    check_object(fields, value, &CheckContext::root(), &mut violations);
    violations
}

fn check_object(fields: &[Field], value: &Value, ctx: &CheckContext, out: &mut Vec<Violation>) {
    let Some(map) = value.as_object() else {
        out.push(ctx.violation(ViolationRule::Type, "object", describe(value)));
        return;
    };

    for field in fields {
        let field_ctx = ctx.child(field.name);
        match map.get(field.name) {
            None | Some(Value::Null) => {
                if field.required {
                    out.push(field_ctx.violation(ViolationRule::Required, expected(field), "null"));
                }
            }
            Some(child) => check_field(field, child, &field_ctx, out),
        }
    }
}

fn check_field(field: &Field, value: &Value, ctx: &CheckContext, out: &mut Vec<Violation>) {
    match &field.kind {
        FieldKind::String => {
            if !value.is_string() {
                out.push(ctx.violation(ViolationRule::Type, expected(field), describe(value)));
            }
        }
        FieldKind::Integer => {
            // Integers are stored as i64; larger unsigned values cannot be held
            if !value.is_i64() {
                let actual = if value.is_u64() { "integer out of range" } else { describe(value) };
                out.push(ctx.violation(ViolationRule::Type, expected(field), actual));
            }
        }
        FieldKind::Object(children) => check_object(children, value, ctx, out),
        FieldKind::List(element) => match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    check_object(element, item, &ctx.child_index(i), out);
                }
            }
            None => out.push(ctx.violation(ViolationRule::Type, expected(field), describe(value))),
        },
    }
}

fn expected(field: &Field) -> &'static str {
    match field.kind {
        FieldKind::String => "string",
        FieldKind::Integer => "integer",
        FieldKind::Object(_) => "object",
        FieldKind::List(_) => "array of objects",
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
