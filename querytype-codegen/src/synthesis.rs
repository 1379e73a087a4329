//! Record synthesis for query parameters and projections.
//!
//! A synthesized record gets one field per source column. Field names start
//! from the column name and are disambiguated with numeric suffixes, keyed
//! first by the column's identity and then by its name: two occurrences of
//! the same bound parameter share one field name, while distinct columns
//! that happen to share a name get `_2`, `_3`, ...

use crate::model::{FieldDescriptor, RecordDescriptor};
use crate::naming::column_name;
use crate::resolver::TypeResolver;
use querytype_catalog::{Column, Parameter};
use std::collections::HashMap;

/// A column fed into synthesis, tagged with a stable identity.
///
/// Parameters use their ordinal; result columns use their position.
#[derive(Debug, Clone, Copy)]
pub struct SourceColumn<'a> {
    /// Identity shared by every occurrence of the same value.
    pub id: i32,
    /// Column metadata.
    pub column: &'a Column,
}

impl<'a> SourceColumn<'a> {
    /// Creates a source column.
    #[must_use]
    pub fn new(id: i32, column: &'a Column) -> Self {
        Self { id, column }
    }

    /// Tags a parameter with its ordinal.
    #[must_use]
    pub fn from_param(param: &'a Parameter) -> Self {
        Self::new(param.number, &param.column)
    }

    /// Tags result columns with their 0-based position.
    pub fn from_columns(columns: &'a [Column]) -> impl Iterator<Item = SourceColumn<'a>> {
        (0..).zip(columns).map(|(id, column)| Self::new(id, column))
    }
}

/// Builds a record named `name` with one field per source column.
#[must_use]
pub fn synthesize(
    resolver: &TypeResolver,
    name: &str,
    columns: &[SourceColumn<'_>],
) -> RecordDescriptor {
    let mut seen: HashMap<String, u32> = HashMap::new();
    let mut suffixes: HashMap<i32, u32> = HashMap::new();
    let mut taken: HashMap<String, i32> = HashMap::new();
    let mut fields = Vec::with_capacity(columns.len());

    for (pos, source) in columns.iter().enumerate() {
        let base = column_name(source.column, pos);

        let mut suffix = match suffixes.get(&source.id) {
            Some(&suffix) => suffix,
            None => match seen.get(&base) {
                Some(&count) if count > 0 => count + 1,
                _ => 0,
            },
        };
        let mut field_name = suffixed(&base, suffix);
        // A literal column may already own the generated name.
        while taken
            .get(&field_name)
            .is_some_and(|&owner| owner != source.id)
        {
            suffix = suffix.max(1) + 1;
            field_name = suffixed(&base, suffix);
        }
        suffixes.insert(source.id, suffix);
        taken.insert(field_name.clone(), source.id);
        *seen.entry(base).or_insert(0) += 1;

        fields.push(FieldDescriptor {
            name: field_name,
            ty: resolver.resolve(source.column),
            comment: String::new(),
        });
    }

    RecordDescriptor {
        name: name.to_string(),
        source_table: None,
        comment: String::new(),
        fields,
    }
}

fn suffixed(base: &str, suffix: u32) -> String {
    if suffix > 0 {
        format!("{}_{}", base, suffix)
    } else {
        base.to_string()
    }
}
