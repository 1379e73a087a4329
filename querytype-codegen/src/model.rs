//! Descriptor model produced by a generation run.
//!
//! Descriptors are language-agnostic: they name types and fields and carry
//! resolved type tags, but hold no target-language syntax. Every descriptor
//! is built once per run and never mutated afterwards.

use crate::collisions::NameCollision;
use querytype_catalog::{Command, Identifier};
use std::fmt;
use std::sync::Arc;

/// Abstract type tag for a field, argument or return value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Textual value. Also used for 64-bit integers and decimals.
    String,
    /// Numeric value that fits a double without loss.
    Number,
    /// Boolean value.
    Boolean,
    /// Opaque value (binary, semi-structured).
    Unknown,
    /// Unresolved native type.
    Any,
    /// Reference to a derived enum.
    Enum {
        /// Qualifying namespace, when the consumer lives outside the models.
        namespace: Option<String>,
        /// Derived enum name.
        name: String,
    },
}

impl TypeTag {
    /// Creates an unqualified enum tag.
    #[must_use]
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::Enum {
            namespace: None,
            name: name.into(),
        }
    }

    /// Returns the tag with any namespace qualification removed.
    #[must_use]
    pub fn unqualified(&self) -> Self {
        match self {
            Self::Enum { name, .. } => Self::enumeration(name.clone()),
            other => other.clone(),
        }
    }

    /// Returns the tag name without namespace qualification.
    #[must_use]
    pub fn base_name(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Unknown => "unknown",
            Self::Any => "any",
            Self::Enum { name, .. } => name,
        }
    }

    /// Returns true for enum references.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum { .. })
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enum {
                namespace: Some(ns),
                name,
            } => write!(f, "{}.{}", ns, name),
            other => f.write_str(other.base_name()),
        }
    }
}

/// Resolved type of a column: tag plus array and nullability flags.
///
/// Equality ignores namespace qualification on the tag.
#[derive(Debug, Clone, Eq)]
pub struct TypeRef {
    /// Base type tag.
    pub tag: TypeTag,
    /// Whether the value is an array of `tag`.
    pub is_array: bool,
    /// Whether the value may be null.
    pub is_nullable: bool,
}

impl TypeRef {
    /// Creates a non-array, non-nullable type.
    #[must_use]
    pub fn new(tag: TypeTag) -> Self {
        Self {
            tag,
            is_array: false,
            is_nullable: false,
        }
    }

    /// Sets the array flag.
    #[must_use]
    pub fn array(mut self, is_array: bool) -> Self {
        self.is_array = is_array;
        self
    }

    /// Sets the nullable flag.
    #[must_use]
    pub fn nullable(mut self, is_nullable: bool) -> Self {
        self.is_nullable = is_nullable;
        self
    }

    /// Returns the type with namespace qualification removed from its tag.
    #[must_use]
    pub fn unqualified(&self) -> Self {
        Self {
            tag: self.tag.unqualified(),
            ..self.clone()
        }
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.is_array == other.is_array
            && self.is_nullable == other.is_nullable
            && self.tag.is_enum() == other.tag.is_enum()
            && self.tag.base_name() == other.tag.base_name()
    }
}

/// A named enum constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantDescriptor {
    /// Derived constant name.
    pub name: String,
    /// Literal value, verbatim from the catalog.
    pub value: String,
}

/// An enum type derived from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    /// Derived enum name.
    pub name: String,
    /// Catalog comment.
    pub comment: String,
    /// Constants in declaration order.
    pub constants: Vec<ConstantDescriptor>,
}

/// A record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Field type.
    pub ty: TypeRef,
    /// Column comment.
    pub comment: String,
}

/// A record type, either derived from a table or synthesized for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDescriptor {
    /// Record name.
    pub name: String,
    /// Table the record mirrors; `None` for synthesized records.
    pub source_table: Option<Identifier>,
    /// Table comment.
    pub comment: String,
    /// Fields in column order.
    pub fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    /// Returns true if the record was synthesized for a query.
    #[must_use]
    pub fn is_synthesized(&self) -> bool {
        self.source_table.is_none()
    }

    /// Returns the field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

/// An argument or return value of a generated method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// A single typed value.
    Scalar {
        /// Value name.
        name: String,
        /// Value type.
        ty: TypeRef,
    },
    /// A record carrying several values.
    Record {
        /// Value name.
        name: String,
        /// Record type.
        record: Arc<RecordDescriptor>,
        /// True when the record is synthesized here and must be declared;
        /// false when it is an existing table record.
        emit: bool,
    },
}

impl QueryValue {
    /// Returns the value name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar { name, .. } | Self::Record { name, .. } => name,
        }
    }

    /// Returns the record, if the value is composite.
    #[must_use]
    pub fn record(&self) -> Option<&Arc<RecordDescriptor>> {
        match self {
            Self::Scalar { .. } => None,
            Self::Record { record, .. } => Some(record),
        }
    }

    /// Returns the record if it must be declared alongside the query.
    #[must_use]
    pub fn emitted_record(&self) -> Option<&Arc<RecordDescriptor>> {
        match self {
            Self::Record {
                record, emit: true, ..
            } => Some(record),
            _ => None,
        }
    }
}

/// Typed method shape for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    /// Command tag.
    pub command: Command,
    /// Query name as written by the user.
    pub name: String,
    /// Generated method name.
    pub method_name: String,
    /// SQL text.
    pub sql: String,
    /// Comment lines.
    pub comments: Vec<String>,
    /// Arguments in parameter order.
    pub args: Vec<QueryValue>,
    /// Return value; absent when the query yields no columns.
    pub ret: Option<QueryValue>,
}

impl QueryDescriptor {
    /// Iterates over records that this query must declare: arguments first,
    /// then the return value.
    pub fn emitted_records(&self) -> impl Iterator<Item = &Arc<RecordDescriptor>> {
        self.args
            .iter()
            .chain(self.ret.iter())
            .filter_map(QueryValue::emitted_record)
    }
}

/// Complete output of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeModel {
    /// Enums sorted by name.
    pub enums: Vec<EnumDescriptor>,
    /// Table records sorted by name.
    pub records: Vec<Arc<RecordDescriptor>>,
    /// Query shapes in input order.
    pub queries: Vec<QueryDescriptor>,
    /// Descriptor names shared by more than one declaration.
    pub collisions: Vec<NameCollision>,
}

impl TypeModel {
    /// Iterates over records synthesized for queries, in query order.
    pub fn emitted_records(&self) -> impl Iterator<Item = &Arc<RecordDescriptor>> {
        self.queries.iter().flat_map(QueryDescriptor::emitted_records)
    }

    /// Looks up a table record by name.
    #[must_use]
    pub fn record(&self, name: &str) -> Option<&Arc<RecordDescriptor>> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Looks up a query shape by query name.
    #[must_use]
    pub fn query(&self, name: &str) -> Option<&QueryDescriptor> {
        self.queries.iter().find(|q| q.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_equality_ignores_namespace() {
        let qualified = TypeRef::new(TypeTag::Enum {
            namespace: Some("models".to_string()),
            name: "Status".to_string(),
        });
        let plain = TypeRef::new(TypeTag::enumeration("Status"));

        assert_eq!(qualified, plain);
        assert_ne!(plain, TypeRef::new(TypeTag::enumeration("Mood")));
    }

    #[test]
    fn test_type_ref_equality_checks_flags() {
        let base = TypeRef::new(TypeTag::String);
        assert_ne!(base, base.clone().nullable(true));
        assert_ne!(base, base.clone().array(true));
        assert_eq!(base, TypeRef::new(TypeTag::String));
    }

    #[test]
    fn test_enum_named_like_scalar_is_distinct() {
        let scalar = TypeRef::new(TypeTag::String);
        let enumeration = TypeRef::new(TypeTag::enumeration("string"));
        assert_ne!(scalar, enumeration);
    }

    #[test]
    fn test_type_tag_display() {
        assert_eq!(TypeTag::Number.to_string(), "number");
        assert_eq!(TypeTag::enumeration("Mood").to_string(), "Mood");
        let qualified = TypeTag::Enum {
            namespace: Some("models".to_string()),
            name: "Mood".to_string(),
        };
        assert_eq!(qualified.to_string(), "models.Mood");
        assert_eq!(qualified.unqualified(), TypeTag::enumeration("Mood"));
    }

    #[test]
    fn test_emitted_records_order() {
        let params = Arc::new(RecordDescriptor {
            name: "CreateParams".to_string(),
            source_table: None,
            comment: String::new(),
            fields: Vec::new(),
        });
        let row = Arc::new(RecordDescriptor {
            name: "CreateRow".to_string(),
            ..(*params).clone()
        });
        let query = QueryDescriptor {
            command: Command::One,
            name: "Create".to_string(),
            method_name: "create".to_string(),
            sql: String::new(),
            comments: Vec::new(),
            args: vec![QueryValue::Record {
                name: "arg".to_string(),
                record: params,
                emit: true,
            }],
            ret: Some(QueryValue::Record {
                name: "i".to_string(),
                record: row,
                emit: true,
            }),
        };

        let names: Vec<&str> = query.emitted_records().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["CreateParams", "CreateRow"]);
    }
}
