//! Fragment tree and its rail serialization
//!
//! A [`Fragment`] is the ordered list of field declarations for one rail
//! object. Nested objects and lists keep their children as sub-trees, and the
//! whole tree is serialized once, at the root. Serialization of a node does
//! not depend on where the node sits, so the text of a child fragment appears
//! verbatim inside every ancestor that embeds it.
//!
//! Copyright (c) 2025 Railkit Team
//! Licensed under the Apache-2.0 license

use crate::schema::field::{Field, FieldKind};
use std::fmt::{self, Write};

/// Indentation applied to attribute lines
const ATTRIBUTE_INDENT: &str = "    ";

/// An ordered tree of field declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    fields: Vec<Field>,
}

/// A declaration paired with its dotted path from the fragment root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry<'a> {
    pub path: String,
    pub depth: usize,
    pub field: &'a Field,
}

impl Fragment {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Top-level declarations in declaration order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Find a declaration by dotted path
    ///
    /// List and object fields are traversed transparently, so the element
    /// schema of `commits` is addressed as `commits.commit_message`.
    pub fn field(&self, path: &str) -> Option<&Field> {
        let mut current: &[Field] = &self.fields;
        let mut found = None;

        for segment in path.split('.') {
            let field = current.iter().find(|f| f.name == segment)?;
            current = field.children().unwrap_or(&[]);
            found = Some(field);
        }

        found
    }

    /// Every declaration in the tree, depth-first in declaration order
    pub fn entries(&self) -> Vec<FieldEntry<'_>> {
        let mut entries = Vec::new();
        collect_entries(&self.fields, "", 0, &mut entries);
        entries
    }

    /// Serialize the tree into rail markup
    pub fn render(&self) -> String {
        let mut out = String::new();
        write_fields(&mut out, &self.fields);
        out
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Vec<Field>> for Fragment {
    fn from(fields: Vec<Field>) -> Self {
        Self::new(fields)
    }
}

fn collect_entries<'a>(
    fields: &'a [Field],
    prefix: &str,
    depth: usize,
    entries: &mut Vec<FieldEntry<'a>>,
) {
    for field in fields {
        let path = if prefix.is_empty() {
            field.name.to_string()
        } else {
            format!("{}.{}", prefix, field.name)
        };

        entries.push(FieldEntry {
            path: path.clone(),
            depth,
            field,
        });

        if let Some(children) = field.children() {
            collect_entries(children, &path, depth + 1, entries);
        }
    }
}

fn write_fields(out: &mut String, fields: &[Field]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_field(out, field);
    }
}

fn write_field(out: &mut String, field: &Field) {
    let tag = field.kind.tag();
    out.push('<');
    out.push_str(tag);
    write_attributes(out, field);

    match &field.kind {
        FieldKind::String | FieldKind::Integer => out.push_str("\n/>"),
        FieldKind::List(element) => {
            out.push_str("\n>\n<object>\n");
            write_fields(out, element);
            out.push_str("\n</object>\n</list>");
        }
        FieldKind::Object(children) => {
            out.push_str("\n>\n");
            write_fields(out, children);
            out.push_str("\n</object>");
        }
    }
}

fn write_attributes(out: &mut String, field: &Field) {
    write_attribute(out, "name", field.name);
    if let Some(description) = field.description {
        write_attribute(out, "description", description);
    }
    if let Some(format) = field.format {
        write_attribute(out, "format", format.as_str());
    }
    if let Some(length) = field.length {
        write_attribute(out, "length", &length.to_string());
    }
    write_attribute(out, "required", if field.required { "true" } else { "false" });
    write_attribute(out, "on-fail", field.on_fail.as_str());
}

fn write_attribute(out: &mut String, name: &str, value: &str) {
    // Writing into a String cannot fail.
    let _ = write!(out, "\n{}{}=\"{}\"", ATTRIBUTE_INDENT, name, escape_attribute(value));
}

/// Escape a value for use inside a double-quoted attribute
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
