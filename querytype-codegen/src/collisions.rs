//! Detection of descriptors that would be declared under the same name.
//!
//! Names are derived independently for enums, table records and query
//! records, so two of them can land on the same identifier. Collisions are
//! reported, never resolved by renaming.

use crate::model::{EnumDescriptor, QueryDescriptor, RecordDescriptor};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Origin of a declared name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// Enum derived from the catalog.
    Enum,
    /// Record derived from a table.
    TableRecord,
    /// Record synthesized for the named query.
    QueryRecord(String),
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enum => f.write_str("enum"),
            Self::TableRecord => f.write_str("table record"),
            Self::QueryRecord(query) => write!(f, "record of query '{}'", query),
        }
    }
}

/// Two declarations sharing one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCollision {
    /// Shared name.
    pub name: String,
    /// Declaration seen first.
    pub first: Declaration,
    /// Declaration seen later.
    pub second: Declaration,
}

impl fmt::Display for NameCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name '{}' declared by {} and {}",
            self.name, self.first, self.second
        )
    }
}

/// Finds every name declared more than once, in declaration order: enums,
/// then table records, then query records.
#[must_use]
pub fn find_collisions(
    enums: &[EnumDescriptor],
    records: &[Arc<RecordDescriptor>],
    queries: &[QueryDescriptor],
) -> Vec<NameCollision> {
    let declarations = enums
        .iter()
        .map(|e| (e.name.as_str(), Declaration::Enum))
        .chain(
            records
                .iter()
                .map(|r| (r.name.as_str(), Declaration::TableRecord)),
        )
        .chain(queries.iter().flat_map(|q| {
            q.emitted_records()
                .map(move |r| (r.name.as_str(), Declaration::QueryRecord(q.name.clone())))
        }));

    let mut seen: HashMap<&str, Declaration> = HashMap::new();
    let mut collisions = Vec::new();

    for (name, declaration) in declarations {
        match seen.get(name) {
            Some(first) => collisions.push(NameCollision {
                name: name.to_string(),
                first: first.clone(),
                second: declaration,
            }),
            None => {
                seen.insert(name, declaration);
            }
        }
    }

    collisions
}
