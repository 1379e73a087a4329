//! Generation run orchestration.

use crate::collisions::find_collisions;
use crate::enums::EnumBuilder;
use crate::error::CodegenError;
use crate::model::TypeModel;
use crate::queries::QueryBuilder;
use crate::records::RecordBuilder;
use crate::resolver::TypeResolver;
use querytype_catalog::CodeGenRequest;

/// Builds the type model for one request.
///
/// Builders run strictly in sequence: enums, table records, then queries
/// matched against those records.
pub struct Generator<'a> {
    request: &'a CodeGenRequest,
}

impl<'a> Generator<'a> {
    /// Creates a generator for a request.
    #[must_use]
    pub fn new(request: &'a CodeGenRequest) -> Self {
        Self { request }
    }

    /// Runs every builder and collects the type model.
    ///
    /// # Errors
    /// Returns `CodegenError::NameCollision` when the settings deny
    /// collisions and two declarations share a name.
    pub fn build(&self) -> Result<TypeModel, CodegenError> {
        let CodeGenRequest {
            settings,
            catalog,
            queries,
        } = self.request;

        let resolver = TypeResolver::new(catalog, settings);
        let enums = EnumBuilder::new(catalog, settings).build();
        let records = RecordBuilder::new(catalog, settings, &resolver).build();
        let queries = QueryBuilder::new(catalog, &resolver, &records).build(queries);

        let collisions = find_collisions(&enums, &records, &queries);
        for collision in &collisions {
            tracing::warn!("{}", collision);
        }
        if settings.deny_name_collisions {
            if let Some(collision) = collisions.first() {
                return Err(CodegenError::NameCollision(collision.clone()));
            }
        }

        let model = TypeModel {
            enums,
            records,
            queries,
            collisions,
        };
        tracing::debug!(
            "built {} enums, {} records, {} queries ({} synthesized records)",
            model.enums.len(),
            model.records.len(),
            model.queries.len(),
            model.emitted_records().count()
        );

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QueryValue;
    use querytype_catalog::{
        Catalog, Column, Command, EnumDef, Identifier, Query, Schema, Settings, Table,
    };

    fn create_test_request() -> CodeGenRequest {
        let mut catalog = Catalog::new("public");
        let mut public = Schema::new("public");
        public.add_enum(EnumDef::new("status", ["active", "banned"]));

        let mut accounts = Table::new("public", "accounts");
        accounts.add_column(Column::new("id", Identifier::unqualified("int8")).not_null());
        accounts.add_column(Column::new("status", Identifier::unqualified("status")).not_null());
        public.add_table(accounts);
        catalog.add_schema(public);

        let table = Identifier::unqualified("accounts");
        let mut list = Query::new("ListAccounts", Command::Many, "SELECT * FROM accounts");
        list.add_column(
            Column::new("id", Identifier::unqualified("int8"))
                .not_null()
                .in_table(table.clone()),
        );
        list.add_column(
            Column::new("status", Identifier::unqualified("status"))
                .not_null()
                .in_table(table),
        );

        let mut ban = Query::new(
            "BanAccount",
            Command::ExecRows,
            "UPDATE accounts SET status = 'banned' WHERE id = $1",
        );
        ban.add_param(Column::new("id", Identifier::unqualified("int8")).not_null());

        CodeGenRequest {
            settings: Settings::default(),
            catalog,
            queries: vec![list, ban],
        }
    }

    #[test]
    fn test_build_model() {
        let request = create_test_request();
        let model = Generator::new(&request).build().expect("Failed to build");

        assert_eq!(model.enums.len(), 1);
        assert_eq!(model.enums[0].name, "Status");
        assert_eq!(model.records.len(), 1);
        assert_eq!(model.queries.len(), 2);
        assert!(model.collisions.is_empty());
        assert_eq!(model.emitted_records().count(), 0);

        let list = model.query("ListAccounts").expect("missing query");
        let reused = list.ret.as_ref().and_then(QueryValue::record).expect("record");
        assert!(std::sync::Arc::ptr_eq(
            reused,
            model.record("Accounts").expect("missing record")
        ));
    }

    #[test]
    fn test_build_deterministic() {
        let request = create_test_request();
        let first = Generator::new(&request).build().expect("Failed to build");
        let second = Generator::new(&request).build().expect("Failed to build");
        assert_eq!(first, second);
    }

    #[test]
    fn test_collision_reported() {
        let mut request = create_test_request();
        request.settings = Settings::default().with_rename("accounts", "Status");

        let model = Generator::new(&request).build().expect("Failed to build");
        assert_eq!(model.collisions.len(), 1);
        assert_eq!(model.collisions[0].name, "Status");
        // Names are reported, never rewritten.
        assert_eq!(model.records[0].name, "Status");
    }

    #[test]
    fn test_collision_denied() {
        let mut request = create_test_request();
        request.settings = Settings::default().with_rename("accounts", "Status");
        request.settings.deny_name_collisions = true;

        let result = Generator::new(&request).build();
        assert!(matches!(result, Err(CodegenError::NameCollision(_))));
    }
}
