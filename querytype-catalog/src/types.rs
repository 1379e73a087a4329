//! Catalog type definitions.
//!
//! This module contains the data structures describing a schema catalog
//! snapshot: schemas, tables, columns and enums, plus the request envelope
//! that bundles a catalog with its queries and settings.

use crate::query::Query;
use crate::settings::Settings;
use serde::{Deserialize, Serialize};

/// Schemas that belong to the database itself and never produce descriptors.
pub const SYSTEM_SCHEMAS: &[&str] = &["pg_catalog", "information_schema"];

/// Complete generation request: settings, catalog snapshot and queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeGenRequest {
    /// Generation settings.
    pub settings: Settings,
    /// Schema catalog snapshot.
    pub catalog: Catalog,
    /// Parsed queries, in input order.
    pub queries: Vec<Query>,
}

/// Static snapshot of schema metadata for one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Catalog comment.
    pub comment: String,
    /// Name of the schema unqualified identifiers resolve against.
    pub default_schema: String,
    /// Catalog name.
    pub name: String,
    /// Schemas in catalog order.
    pub schemas: Vec<Schema>,
}

impl Catalog {
    /// Creates an empty catalog with the given default schema.
    #[must_use]
    pub fn new(default_schema: impl Into<String>) -> Self {
        Self {
            default_schema: default_schema.into(),
            ..Self::default()
        }
    }

    /// Adds a schema to the catalog.
    pub fn add_schema(&mut self, schema: Schema) {
        self.schemas.push(schema);
    }

    /// Returns true if `schema` is the catalog's default schema.
    #[must_use]
    pub fn is_default_schema(&self, schema: &str) -> bool {
        schema == self.default_schema
    }

    /// Iterates over every schema that is not a system schema, in catalog order.
    pub fn user_schemas(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.iter().filter(|s| !s.is_system())
    }
}

/// A named schema holding enums and tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    /// Schema comment.
    pub comment: String,
    /// Schema name.
    pub name: String,
    /// Tables in declaration order.
    pub tables: Vec<Table>,
    /// Enums in declaration order.
    pub enums: Vec<EnumDef>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a table to the schema.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Adds an enum to the schema.
    pub fn add_enum(&mut self, enum_def: EnumDef) {
        self.enums.push(enum_def);
    }

    /// Returns true for schemas owned by the database system.
    #[must_use]
    pub fn is_system(&self) -> bool {
        SYSTEM_SCHEMAS.contains(&self.name.as_str())
    }
}

/// Enum type definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumDef {
    /// Enum name.
    pub name: String,
    /// Literal values in declaration order.
    pub vals: Vec<String>,
    /// Enum comment.
    pub comment: String,
}

impl EnumDef {
    /// Creates a new enum definition.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, vals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            vals: vals.into_iter().map(Into::into).collect(),
            comment: String::new(),
        }
    }
}

/// Table definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    /// Table identity.
    pub rel: Identifier,
    /// Columns in declaration order.
    pub columns: Vec<Column>,
    /// Table comment.
    pub comment: String,
}

impl Table {
    /// Creates a new table without columns.
    #[must_use]
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            rel: Identifier::new(schema, name),
            ..Self::default()
        }
    }

    /// Adds a column to the table.
    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }
}

/// Qualified identifier for tables and types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Identifier {
    /// Catalog name.
    pub catalog: String,
    /// Schema name (may be empty).
    pub schema: String,
    /// Object name.
    pub name: String,
}

impl Identifier {
    /// Creates an identifier in the unnamed catalog.
    #[must_use]
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            catalog: String::new(),
            schema: schema.into(),
            name: name.into(),
        }
    }

    /// Creates an identifier without a schema.
    #[must_use]
    pub fn unqualified(name: impl Into<String>) -> Self {
        Self::new("", name)
    }

    /// Returns the native type name: `schema.name` when a schema is set,
    /// else `name`.
    #[must_use]
    pub fn data_type(&self) -> String {
        if self.schema.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.schema, self.name)
        }
    }

    /// Returns true if this table reference names `table`.
    ///
    /// An empty schema on `self` stands for `default_schema`.
    #[must_use]
    pub fn same_table(&self, table: &Identifier, default_schema: &str) -> bool {
        let schema = if self.schema.is_empty() {
            default_schema
        } else {
            self.schema.as_str()
        };
        self.catalog == table.catalog && schema == table.schema && self.name == table.name
    }
}

/// Column metadata, used for table columns, query results and parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    /// Column name; empty for anonymous or computed columns.
    pub name: String,
    /// Whether the column is declared `NOT NULL`.
    pub not_null: bool,
    /// Whether the column holds an array.
    pub is_array: bool,
    /// Column comment.
    pub comment: String,
    /// Owning table, when the column traces back to one.
    pub table: Option<Identifier>,
    /// Native type identifier.
    #[serde(rename = "type")]
    pub type_name: Identifier,
}

impl Column {
    /// Creates a nullable, non-array column.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: Identifier) -> Self {
        Self {
            name: name.into(),
            type_name,
            ..Self::default()
        }
    }

    /// Marks the column `NOT NULL`.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Marks the column as an array.
    #[must_use]
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Sets the owning table.
    #[must_use]
    pub fn in_table(mut self, table: Identifier) -> Self {
        self.table = Some(table);
        self
    }

    /// Returns the native type name of the column.
    #[must_use]
    pub fn data_type(&self) -> String {
        self.type_name.data_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_qualification() {
        assert_eq!(Identifier::unqualified("int8").data_type(), "int8");
        assert_eq!(
            Identifier::new("pg_catalog", "int8").data_type(),
            "pg_catalog.int8"
        );
    }

    #[test]
    fn test_same_table_uses_default_schema() {
        let table = Identifier::new("public", "users");

        assert!(Identifier::unqualified("users").same_table(&table, "public"));
        assert!(Identifier::new("public", "users").same_table(&table, "public"));
        assert!(!Identifier::unqualified("users").same_table(&table, "app"));
        assert!(!Identifier::new("app", "users").same_table(&table, "public"));
    }

    #[test]
    fn test_user_schemas_skip_system() {
        let mut catalog = Catalog::new("public");
        catalog.add_schema(Schema::new("pg_catalog"));
        catalog.add_schema(Schema::new("public"));
        catalog.add_schema(Schema::new("information_schema"));
        catalog.add_schema(Schema::new("billing"));

        let names: Vec<&str> = catalog.user_schemas().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["public", "billing"]);
    }

    #[test]
    fn test_column_builders() {
        let column = Column::new("tags", Identifier::unqualified("text"))
            .not_null()
            .array()
            .in_table(Identifier::new("public", "posts"));

        assert!(column.not_null);
        assert!(column.is_array);
        assert_eq!(column.data_type(), "text");
        assert_eq!(column.table, Some(Identifier::new("public", "posts")));
    }
}
