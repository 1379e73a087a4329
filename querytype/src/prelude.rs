//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use querytype::prelude::*;
//! ```

// Catalog types
pub use querytype_catalog::{
    Catalog, CodeGenRequest, Column, EnumDef, Identifier, Schema, Table,
};

// Query and settings types
pub use querytype_catalog::{Command, Engine, Parameter, Query, Settings};

// Request loading
pub use querytype_catalog::{ParseError, parse_request, parse_request_file};

// Model types
pub use querytype_codegen::{
    EnumDescriptor, FieldDescriptor, QueryDescriptor, QueryValue, RecordDescriptor, TypeModel,
    TypeRef, TypeTag,
};

// Generation
pub use querytype_codegen::{
    CodegenError, Generator, NameCollision, TypeScriptGenerator, build_model, generate_from_file,
    generate_from_json,
};
