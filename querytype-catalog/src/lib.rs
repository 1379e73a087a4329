//! # querytype Catalog
//!
//! Schema catalog and query metadata for the querytype model builders.
//!
//! This crate provides:
//! - Catalog snapshot types (schemas, tables, columns, enums)
//! - Parsed query and parameter definitions
//! - Generation settings
//! - JSON request loading

pub mod error;
pub mod parser;
pub mod query;
pub mod settings;
pub mod types;

pub use error::ParseError;
pub use parser::{parse_request, parse_request_file};
pub use query::{Command, Parameter, Query};
pub use settings::{Engine, Settings};
pub use types::{Catalog, CodeGenRequest, Column, EnumDef, Identifier, Schema, Table};
