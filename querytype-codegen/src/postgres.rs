//! PostgreSQL native type table.

use crate::model::TypeTag;

/// Maps a PostgreSQL native type name to its scalar tag.
///
/// Names are matched case-sensitively, including `pg_catalog.` aliases.
/// Returns `None` for names outside the table (typically user enums).
#[must_use]
pub fn scalar_tag(data_type: &str) -> Option<TypeTag> {
    let tag = match data_type {
        // 64-bit integers overflow a double; carry them as text.
        "bigserial" | "serial8" | "pg_catalog.serial8" | "bigint" | "int8" | "pg_catalog.int8" => {
            TypeTag::String
        }
        "serial" | "serial4" | "pg_catalog.serial4" | "smallserial" | "serial2"
        | "pg_catalog.serial2" | "integer" | "int" | "int4" | "pg_catalog.int4" | "smallint"
        | "int2" | "pg_catalog.int2" => TypeTag::Number,
        "float" | "double precision" | "float8" | "pg_catalog.float8" | "real" | "float4"
        | "pg_catalog.float4" => TypeTag::Number,
        "numeric" | "pg_catalog.numeric" | "money" => TypeTag::String,
        "boolean" | "bool" | "pg_catalog.bool" => TypeTag::Boolean,
        "json" | "jsonb" | "bytea" | "blob" | "pg_catalog.bytea" => TypeTag::Unknown,
        "date" | "pg_catalog.time" | "pg_catalog.timetz" | "pg_catalog.timestamp"
        | "pg_catalog.timestamptz" | "timestamptz" | "interval" | "pg_catalog.interval"
        | "timestamp with time zone" => TypeTag::String,
        "text" | "pg_catalog.varchar" | "pg_catalog.bpchar" | "string" | "citext" => {
            TypeTag::String
        }
        "uuid" => TypeTag::String,
        "inet" | "cidr" | "macaddr" | "macaddr8" => TypeTag::String,
        "ltree" | "lquery" | "ltxtquery" => TypeTag::String,
        _ => return None,
    };
    Some(tag)
}
