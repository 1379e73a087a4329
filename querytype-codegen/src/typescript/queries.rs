//! Query method code generation.

use super::{
    comment_lines, escape_sql, member_access, parameter_name, property_name, ts_type,
};
use crate::model::{QueryDescriptor, QueryValue, TypeModel};
use querytype_catalog::Command;

/// Generator for the `Queries` class.
pub struct QueryGenerator<'a> {
    model: &'a TypeModel,
}

impl<'a> QueryGenerator<'a> {
    /// Creates a new query generator.
    #[must_use]
    pub fn new(model: &'a TypeModel) -> Self {
        Self { model }
    }

    /// Generates the class with one method per query.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str("export class Queries {\n");
        output.push_str("  constructor(private readonly client: QueryClient) {}\n");
        for query in &self.model.queries {
            output.push('\n');
            output.push_str(&self.generate_method(query));
        }
        output.push_str("}\n");

        output
    }

    /// Generates one async method.
    fn generate_method(&self, query: &QueryDescriptor) -> String {
        let mut output = String::new();

        for comment in &query.comments {
            output.push_str(&comment_lines(comment, "  "));
        }
        output.push_str(&format!("  // {}\n", query.command));

        // Signature
        output.push_str(&format!("  async {}(", query.method_name));
        if !query.args.is_empty() {
            output.push('\n');
            for arg in &query.args {
                output.push_str(&format!(
                    "    {}: {},\n",
                    parameter_name(arg.name()),
                    value_type(arg)
                ));
            }
            output.push_str("  ");
        }
        output.push_str(&format!("): Promise<{}> {{\n", return_type(query)));

        // Call
        let binding = match (query.command, &query.ret) {
            (Command::ExecRows, _) | (Command::One | Command::Many, Some(_)) => "const result = ",
            _ => "",
        };
        output.push_str(&format!("    {}await this.client.query({{\n", binding));
        output.push_str(&format!("      text: \"{}\",\n", escape_sql(&query.sql)));
        if !query.args.is_empty() {
            output.push_str("      values: [\n");
            for value in argument_values(query) {
                output.push_str(&format!("        {},\n", value));
            }
            output.push_str("      ],\n");
        }
        output.push_str("      rowMode: 'array',\n");
        output.push_str("    });\n");

        // Result
        match (query.command, &query.ret) {
            (Command::ExecRows, _) => {
                output.push_str("    return result.rowCount ?? 0;\n");
            }
            (Command::One, Some(ret)) => {
                output.push_str(&format!("    return result.rows.map({})[0];\n", row_mapper(ret)));
            }
            (Command::Many, Some(ret)) => {
                output.push_str(&format!("    return result.rows.map({});\n", row_mapper(ret)));
            }
            _ => {}
        }
        output.push_str("  }\n");

        output
    }
}

/// Renders the declared type of an argument or return value.
fn value_type(value: &QueryValue) -> String {
    match value {
        QueryValue::Scalar { ty, .. } => ts_type(ty),
        QueryValue::Record { record, .. } => record.name.clone(),
    }
}

/// Renders the resolved type of the method's promise.
fn return_type(query: &QueryDescriptor) -> String {
    match (query.command, &query.ret) {
        (Command::ExecRows, _) => "number".to_string(),
        (Command::One, Some(ret)) => format!("{} | undefined", value_type(ret)),
        (Command::Many, Some(ret)) => match ret {
            QueryValue::Scalar { ty, .. } if ty.is_nullable => format!("({})[]", ts_type(ty)),
            _ => format!("{}[]", value_type(ret)),
        },
        _ => "void".to_string(),
    }
}

/// Flattens arguments into positional query values; record arguments
/// contribute one value per field.
fn argument_values(query: &QueryDescriptor) -> Vec<String> {
    let mut values = Vec::new();
    for arg in &query.args {
        match arg {
            QueryValue::Scalar { name, .. } => values.push(parameter_name(name)),
            QueryValue::Record { name, record, .. } => {
                let object = parameter_name(name);
                values.extend(
                    record
                        .fields
                        .iter()
                        .map(|f| member_access(&object, &f.name)),
                );
            }
        }
    }
    values
}

/// Renders the arrow function turning an array-mode row into the return value.
fn row_mapper(ret: &QueryValue) -> String {
    match ret {
        QueryValue::Scalar { ty, .. } => format!("(row) => row[0] as {}", ts_type(ty)),
        QueryValue::Record { record, .. } => {
            let mut output = String::from("(row) => ({\n");
            for (idx, field) in record.fields.iter().enumerate() {
                output.push_str(&format!(
                    "      {}: row[{}] as {},\n",
                    property_name(&field.name),
                    idx,
                    ts_type(&field.ty)
                ));
            }
            output.push_str("    })");
            output
        }
    }
}
