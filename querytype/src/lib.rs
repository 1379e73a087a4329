//! # querytype
//!
//! Typed models for SQL queries, derived from a database catalog.
//!
//! Given a schema catalog (schemas, tables, columns, enums) and a list of
//! parsed queries, querytype resolves every column to a language-neutral
//! type and builds a model of enums, table records and per-query argument
//! and return shapes. Backends render that model into target source code.
//!
//! ## Features
//!
//! - **Type resolution** - PostgreSQL native types and catalog enums
//! - **Record reuse** - Queries selecting a whole table row return the table record
//! - **Record synthesis** - Deterministic field naming for ad-hoc rows and parameter sets
//! - **TypeScript rendering** - A reference backend emitting interfaces and a query class
//!
//! ## Quick Start
//!
//! ```ignore
//! use querytype::prelude::*;
//!
//! let request = parse_request_file(Path::new("request.json"))?;
//! let model = build_model(&request)?;
//! let source = TypeScriptGenerator::new(&model).generate();
//! ```
//!
//! ## Crate Organization
//!
//! - [`catalog`] - Catalog, query and settings types, request loading
//! - [`codegen`] - Type model builders and the TypeScript renderer

pub mod prelude;

/// Catalog, query and settings types.
pub mod catalog {
    pub use querytype_catalog::*;
}

/// Type model builders and renderers.
pub mod codegen {
    pub use querytype_codegen::*;
}

// Re-export commonly used items at the crate root
pub use querytype_catalog::{CodeGenRequest, ParseError, parse_request, parse_request_file};
pub use querytype_codegen::{
    CodegenError, Generator, TypeModel, TypeScriptGenerator, build_model, generate_from_file,
    generate_from_json,
};

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_builds_model() {
        let mut catalog = Catalog::new("public");
        let mut public = Schema::new("public");
        let mut authors = Table::new("public", "authors");
        authors.add_column(Column::new("id", Identifier::unqualified("int8")).not_null());
        authors.add_column(Column::new("bio", Identifier::unqualified("text")));
        public.add_table(authors);
        catalog.add_schema(public);

        let mut query = Query::new(
            "GetAuthorBio",
            Command::One,
            "SELECT bio FROM authors WHERE id = $1",
        );
        query.add_param(Column::new("id", Identifier::unqualified("int8")).not_null());
        query.add_column(
            Column::new("bio", Identifier::unqualified("text"))
                .in_table(Identifier::unqualified("authors")),
        );

        let request = CodeGenRequest {
            settings: Settings::default(),
            catalog,
            queries: vec![query],
        };
        let model = build_model(&request).expect("Failed to build model");

        let get = model.query("GetAuthorBio").expect("missing query");
        assert_eq!(get.method_name, "getAuthorBio");
        match &get.ret {
            Some(QueryValue::Scalar { name, ty }) => {
                assert_eq!(name, "bio");
                assert_eq!(ty.tag, TypeTag::String);
                assert!(ty.is_nullable);
            }
            other => panic!("unexpected return value: {:?}", other),
        }

        let source = TypeScriptGenerator::new(&model).generate();
        assert!(source.contains("export interface Authors {"));
    }
}
