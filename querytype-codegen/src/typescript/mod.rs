//! TypeScript rendering of a type model.
//!
//! The renderer emits a single module: enums, record interfaces, and a
//! `Queries` class with one async method per query. It reads descriptors
//! only and makes no naming or typing decisions of its own.

pub mod enums;
pub mod interfaces;
pub mod queries;

pub use enums::EnumGenerator;
pub use interfaces::InterfaceGenerator;
pub use queries::QueryGenerator;

use crate::model::{TypeModel, TypeRef};

/// Name of the rendered module file.
pub const OUTPUT_FILE: &str = "queries.ts";

const HEADER: &str = "\
// Code generated by querytype. DO NOT EDIT.

export interface QueryResult {
  rows: unknown[][];
  rowCount: number | null;
}

export interface QueryClient {
  query(config: { text: string; values?: unknown[]; rowMode: 'array' }): Promise<QueryResult>;
}

";

/// Renders a complete TypeScript module from a type model.
pub struct TypeScriptGenerator<'a> {
    model: &'a TypeModel,
}

impl<'a> TypeScriptGenerator<'a> {
    /// Creates a new TypeScript generator.
    #[must_use]
    pub fn new(model: &'a TypeModel) -> Self {
        Self { model }
    }

    /// Renders the module source.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::from(HEADER);
        output.push_str(&EnumGenerator::new(self.model).generate());
        output.push_str(&InterfaceGenerator::new(self.model).generate());
        output.push_str(&QueryGenerator::new(self.model).generate());
        output
    }
}

/// Renders a field or scalar type.
#[must_use]
pub fn ts_type(ty: &TypeRef) -> String {
    let mut out = ty.tag.to_string();
    if ty.is_array {
        out.push_str("[]");
    }
    if ty.is_nullable {
        out.push_str(" | null");
    }
    out
}

/// Renders a comment as `//` lines at `indent`; blank comments render nothing.
#[must_use]
pub fn comment_lines(comment: &str, indent: &str) -> String {
    if comment.trim().is_empty() {
        return String::new();
    }
    comment
        .lines()
        .map(|line| format!("{}// {}\n", indent, line))
        .collect()
}

/// Escapes SQL text for a double-quoted string literal.
#[must_use]
pub fn escape_sql(sql: &str) -> String {
    sql.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

/// Words that cannot name a function parameter in strict-mode TypeScript.
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "null", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Returns true if `name` is a plain ASCII identifier.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn quoted(name: &str) -> String {
    format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Renders an object property key, quoting names that are not identifiers.
#[must_use]
pub fn property_name(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        quoted(name)
    }
}

/// Renders a property read on `object`.
#[must_use]
pub fn member_access(object: &str, name: &str) -> String {
    if is_identifier(name) {
        format!("{}.{}", object, name)
    } else {
        format!("{}[{}]", object, quoted(name))
    }
}

/// Renders a method parameter name.
///
/// Characters outside `[A-Za-z0-9_$]` become `_`; a leading digit or a
/// reserved word gets an extra `_`.
#[must_use]
pub fn parameter_name(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    if RESERVED_WORDS.contains(&out.as_str()) {
        out.push('_');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeTag;

    #[test]
    fn test_ts_type() {
        let nullable_array = TypeRef::new(TypeTag::String).array(true).nullable(true);
        assert_eq!(ts_type(&nullable_array), "string[] | null");
        assert_eq!(ts_type(&TypeRef::new(TypeTag::Number).array(true)), "number[]");
        assert_eq!(ts_type(&TypeRef::new(TypeTag::enumeration("DayOfWeek"))), "DayOfWeek");
        assert_eq!(ts_type(&TypeRef::new(TypeTag::Any)), "any");
        let qualified = TypeTag::Enum {
            namespace: Some("models".to_string()),
            name: "Mood".to_string(),
        };
        assert_eq!(ts_type(&TypeRef::new(qualified)), "models.Mood");
    }

    #[test]
    fn test_comment_lines() {
        assert_eq!(comment_lines("  ", ""), "");
        assert_eq!(comment_lines("one\ntwo", "  "), "  // one\n  // two\n");
    }

    #[test]
    fn test_escape_sql() {
        assert_eq!(
            escape_sql("SELECT \"a\"\nFROM t WHERE x = '\\'"),
            "SELECT \\\"a\\\"\\nFROM t WHERE x = '\\\\'"
        );
    }

    #[test]
    fn test_escape_sql_line_terminators() {
        assert_eq!(escape_sql("SELECT 1\r\nFROM t"), "SELECT 1\\r\\nFROM t");
        assert_eq!(
            escape_sql("SELECT '\u{2028}\u{2029}'"),
            "SELECT '\\u2028\\u2029'"
        );
        assert!(!escape_sql("a\rb\u{2028}c").contains(['\r', '\u{2028}']));
    }

    #[test]
    fn test_property_name() {
        assert_eq!(property_name("order_id"), "order_id");
        assert_eq!(property_name("$ref"), "$ref");
        assert_eq!(property_name("order-id"), "'order-id'");
        assert_eq!(property_name("1st"), "'1st'");
        assert_eq!(property_name("it's"), "'it\\'s'");
        assert_eq!(member_access("arg", "id"), "arg.id");
        assert_eq!(member_access("arg", "order-id"), "arg['order-id']");
    }

    #[test]
    fn test_parameter_name() {
        assert_eq!(parameter_name("id"), "id");
        assert_eq!(parameter_name("order-id"), "order_id");
        assert_eq!(parameter_name("2fa"), "_2fa");
        assert_eq!(parameter_name("default"), "default_");
    }

    #[test]
    fn test_generate_empty_model() {
        let model = TypeModel::default();
        let output = TypeScriptGenerator::new(&model).generate();

        assert!(output.starts_with("// Code generated by querytype"));
        assert!(output.contains("export interface QueryClient"));
        assert!(output.contains("export class Queries"));
    }
}
