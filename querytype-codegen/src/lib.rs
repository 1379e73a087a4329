//! # querytype Codegen
//!
//! Type model derivation from a schema catalog and parsed queries.
//!
//! This crate provides:
//! - Column type resolution against the engine's native types and catalog enums
//! - Enum and table record descriptors
//! - Per-query argument and return shapes, with table record reuse and
//!   record synthesis
//! - Name collision reporting
//! - A reference TypeScript renderer

pub mod collisions;
pub mod enums;
pub mod error;
pub mod generator;
pub mod model;
pub mod naming;
pub mod postgres;
pub mod queries;
pub mod records;
pub mod resolver;
pub mod synthesis;
pub mod typescript;

pub use collisions::{Declaration, NameCollision};
pub use error::CodegenError;
pub use generator::Generator;
pub use model::{
    ConstantDescriptor, EnumDescriptor, FieldDescriptor, QueryDescriptor, QueryValue,
    RecordDescriptor, TypeModel, TypeRef, TypeTag,
};
pub use resolver::TypeResolver;
pub use typescript::TypeScriptGenerator;

use querytype_catalog::CodeGenRequest;

/// Builds the type model for a request.
///
/// # Errors
/// Returns `CodegenError` if the settings deny name collisions and one occurs.
pub fn build_model(request: &CodeGenRequest) -> Result<TypeModel, CodegenError> {
    Generator::new(request).build()
}

/// Generates TypeScript from a JSON generation request.
///
/// # Arguments
/// * `json` - Request content
///
/// # Returns
/// Generated TypeScript source.
///
/// # Errors
/// Returns `CodegenError` if parsing or model building fails.
pub fn generate_from_json(json: &str) -> Result<String, CodegenError> {
    let request = querytype_catalog::parse_request(json)?;
    let model = build_model(&request)?;
    Ok(TypeScriptGenerator::new(&model).generate())
}

/// Generates TypeScript from a JSON generation request file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or model building fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const REQUEST: &str = r#"{
        "settings": { "engine": "postgresql" },
        "catalog": {
            "default_schema": "public",
            "schemas": [
                {
                    "name": "public",
                    "enums": [ { "name": "book_type", "vals": ["fiction", "non_fiction"] } ],
                    "tables": [
                        {
                            "rel": { "schema": "public", "name": "books" },
                            "comment": "Every book we stock",
                            "columns": [
                                { "name": "book_id", "type": { "name": "serial" }, "not_null": true },
                                { "name": "title", "type": { "name": "text" }, "not_null": true },
                                { "name": "book_type", "type": { "name": "book_type" }, "not_null": true },
                                { "name": "tags", "type": { "name": "text" }, "not_null": true, "is_array": true }
                            ]
                        }
                    ]
                }
            ]
        },
        "queries": [
            {
                "name": "GetBook",
                "cmd": ":one",
                "text": "SELECT * FROM books WHERE book_id = $1",
                "params": [
                    { "number": 1, "column": { "name": "book_id", "type": { "name": "serial" }, "not_null": true } }
                ],
                "columns": [
                    { "name": "book_id", "type": { "name": "serial" }, "not_null": true, "table": { "name": "books" } },
                    { "name": "title", "type": { "name": "text" }, "not_null": true, "table": { "name": "books" } },
                    { "name": "book_type", "type": { "name": "book_type" }, "not_null": true, "table": { "name": "books" } },
                    { "name": "tags", "type": { "name": "text" }, "not_null": true, "is_array": true, "table": { "name": "books" } }
                ]
            },
            {
                "name": "BookTitles",
                "cmd": ":many",
                "text": "SELECT book_id, title FROM books",
                "columns": [
                    { "name": "book_id", "type": { "name": "serial" }, "not_null": true, "table": { "name": "books" } },
                    { "name": "title", "type": { "name": "text" }, "not_null": true, "table": { "name": "books" } }
                ]
            },
            {
                "name": "CreateBook",
                "cmd": ":execrows",
                "text": "INSERT INTO books (book_id, title, book_type, tags, isbn) VALUES ($1, $2, $3, $4, $5)",
                "params": [
                    { "number": 1, "column": { "name": "book_id", "type": { "name": "serial" }, "not_null": true } },
                    { "number": 2, "column": { "name": "title", "type": { "name": "text" }, "not_null": true } },
                    { "number": 3, "column": { "name": "book_type", "type": { "name": "book_type" }, "not_null": true } },
                    { "number": 4, "column": { "name": "tags", "type": { "name": "text" }, "not_null": true, "is_array": true } },
                    { "number": 5, "column": { "name": "", "type": { "name": "text" } } }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_generate_from_json() {
        let output = generate_from_json(REQUEST).expect("Failed to generate");

        assert!(output.contains("export enum BookType {\n  Fiction = 'fiction',\n  NonFiction = 'non_fiction',\n}"));
        assert!(output.contains("// Every book we stock\nexport interface Books {"));
        assert!(output.contains("  tags: string[];\n"));
        assert!(output.contains("  book_type: BookType;\n"));
        assert!(output.contains("): Promise<Books | undefined> {"));
        assert!(output.contains("export interface BookTitlesRow {"));
        assert!(output.contains("export interface CreateBookParams {"));
        assert!(output.contains("  column_5: string | null;\n"));
        assert!(output.contains("  async createBook(\n    arg: CreateBookParams,\n  ): Promise<number> {"));
    }

    #[test]
    fn test_build_model_from_request() {
        let request = querytype_catalog::parse_request(REQUEST).expect("Failed to parse");
        let model = build_model(&request).expect("Failed to build");

        let get = model.query("GetBook").expect("missing query");
        assert!(matches!(
            &get.ret,
            Some(QueryValue::Record { emit: false, record, .. }) if record.name == "Books"
        ));
        assert_eq!(model.emitted_records().count(), 2);
    }

    #[test]
    fn test_generate_from_json_invalid() {
        assert!(matches!(
            generate_from_json("not json"),
            Err(CodegenError::Parse(_))
        ));
    }

    #[test]
    fn test_generate_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(REQUEST.as_bytes())
            .expect("Failed to write request");

        let output = generate_from_file(file.path()).expect("Failed to generate");
        assert!(output.contains("export class Queries"));
    }

    #[test]
    fn test_generate_from_missing_file() {
        let result = generate_from_file(std::path::Path::new("/nonexistent/request.json"));
        assert!(matches!(result, Err(CodegenError::Io(_))));
    }
}
