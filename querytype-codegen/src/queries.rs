//! Per-query argument and return shapes.
//!
//! Arguments stay positional up to [`MAX_POSITIONAL_ARGS`] parameters and
//! collapse into a synthesized `<Query>Params` record beyond that. A single
//! result column is returned as a scalar. Wider projections reuse a table
//! record when one matches field for field, and otherwise get a
//! synthesized `<Query>Row` record.

use crate::model::{QueryDescriptor, QueryValue, RecordDescriptor, TypeRef};
use crate::naming::{column_name, lower_title, param_name};
use crate::resolver::TypeResolver;
use crate::synthesis::{SourceColumn, synthesize};
use querytype_catalog::{Catalog, Column, Query};
use std::sync::Arc;

/// Largest parameter count passed as individual arguments.
pub const MAX_POSITIONAL_ARGS: usize = 4;

/// Name of the argument carrying a synthesized parameter record.
pub const PARAMS_ARG_NAME: &str = "arg";

/// Name of a composite return value.
pub const ROW_VALUE_NAME: &str = "i";

/// Builder for query descriptors.
pub struct QueryBuilder<'a> {
    catalog: &'a Catalog,
    resolver: &'a TypeResolver,
    records: &'a [Arc<RecordDescriptor>],
}

impl<'a> QueryBuilder<'a> {
    /// Creates a query builder matching against `records`, the table
    /// records of the run.
    #[must_use]
    pub fn new(
        catalog: &'a Catalog,
        resolver: &'a TypeResolver,
        records: &'a [Arc<RecordDescriptor>],
    ) -> Self {
        Self {
            catalog,
            resolver,
            records,
        }
    }

    /// Builds one descriptor per query, in input order.
    #[must_use]
    pub fn build(&self, queries: &[Query]) -> Vec<QueryDescriptor> {
        queries.iter().map(|q| self.build_query(q)).collect()
    }

    /// Builds the descriptor for a single query.
    #[must_use]
    pub fn build_query(&self, query: &Query) -> QueryDescriptor {
        QueryDescriptor {
            command: query.cmd,
            name: query.name.clone(),
            method_name: lower_title(&query.name),
            sql: query.text.clone(),
            comments: query.comments.clone(),
            args: self.build_args(query),
            ret: self.build_ret(query),
        }
    }

    fn build_args(&self, query: &Query) -> Vec<QueryValue> {
        if query.params.len() > MAX_POSITIONAL_ARGS {
            let sources: Vec<SourceColumn<'_>> =
                query.params.iter().map(SourceColumn::from_param).collect();
            let record = synthesize(self.resolver, &format!("{}Params", query.name), &sources);
            return vec![QueryValue::Record {
                name: PARAMS_ARG_NAME.to_string(),
                record: Arc::new(record),
                emit: true,
            }];
        }

        query
            .params
            .iter()
            .map(|param| QueryValue::Scalar {
                name: param_name(param),
                ty: self.resolver.resolve(&param.column),
            })
            .collect()
    }

    fn build_ret(&self, query: &Query) -> Option<QueryValue> {
        match query.columns.as_slice() {
            [] => None,
            [column] => Some(QueryValue::Scalar {
                name: column_name(column, 0),
                ty: self.resolver.resolve(column),
            }),
            columns => Some(match self.find_reusable(columns) {
                Some(record) => QueryValue::Record {
                    name: ROW_VALUE_NAME.to_string(),
                    record,
                    emit: false,
                },
                None => {
                    let sources: Vec<SourceColumn<'_>> =
                        SourceColumn::from_columns(columns).collect();
                    let record =
                        synthesize(self.resolver, &format!("{}Row", query.name), &sources);
                    QueryValue::Record {
                        name: ROW_VALUE_NAME.to_string(),
                        record: Arc::new(record),
                        emit: true,
                    }
                }
            }),
        }
    }

    /// Returns the first table record whose fields match `columns` position
    /// by position in name, type and source table.
    #[must_use]
    pub fn find_reusable(&self, columns: &[Column]) -> Option<Arc<RecordDescriptor>> {
        let wanted: Vec<(String, TypeRef)> = columns
            .iter()
            .enumerate()
            .map(|(pos, column)| {
                (
                    column_name(column, pos),
                    self.resolver.resolve(column).unqualified(),
                )
            })
            .collect();

        self.records
            .iter()
            .find(|record| self.matches(record, columns, &wanted))
            .cloned()
    }

    fn matches(
        &self,
        record: &RecordDescriptor,
        columns: &[Column],
        wanted: &[(String, TypeRef)],
    ) -> bool {
        let Some(source_table) = &record.source_table else {
            return false;
        };
        if record.fields.len() != columns.len() {
            return false;
        }

        record
            .fields
            .iter()
            .zip(columns.iter().zip(wanted))
            .all(|(field, (column, (name, ty)))| {
                let same_table = column.table.as_ref().is_some_and(|table| {
                    table.same_table(source_table, &self.catalog.default_schema)
                });
                field.name == *name && field.ty == *ty && same_table
            })
    }
}
