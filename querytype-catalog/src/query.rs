//! Query definitions.
//!
//! This module contains the data structures representing parsed,
//! parameter-annotated queries as supplied by the upstream SQL parser.

use crate::error::ParseError;
use crate::types::Column;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Query command, determining how many rows the generated method returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Command {
    /// Executes without returning rows.
    #[default]
    Exec,
    /// Executes and returns the affected row count.
    ExecRows,
    /// Returns a single row.
    One,
    /// Returns every row.
    Many,
}

impl Command {
    /// Parses a command tag such as `:one`. The leading colon is optional.
    ///
    /// # Errors
    /// Returns `ParseError::UnknownCommand` for unrecognized tags.
    pub fn parse(tag: &str) -> Result<Self, ParseError> {
        match tag.strip_prefix(':').unwrap_or(tag) {
            "exec" => Ok(Self::Exec),
            "execrows" => Ok(Self::ExecRows),
            "one" => Ok(Self::One),
            "many" => Ok(Self::Many),
            _ => Err(ParseError::unknown_command(tag)),
        }
    }

    /// Returns the canonical tag, including the leading colon.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Exec => ":exec",
            Self::ExecRows => ":execrows",
            Self::One => ":one",
            Self::Many => ":many",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl TryFrom<String> for Command {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Command> for String {
    fn from(value: Command) -> Self {
        value.tag().to_string()
    }
}

/// A parsed query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    /// SQL text as written by the user.
    pub text: String,
    /// Query name, used to derive method and record names.
    pub name: String,
    /// Command tag.
    pub cmd: Command,
    /// Result columns in projection order.
    pub columns: Vec<Column>,
    /// Bound parameters in ordinal order.
    pub params: Vec<Parameter>,
    /// Comment lines attached to the query.
    pub comments: Vec<String>,
}

impl Query {
    /// Creates a new query without columns or parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, cmd: Command, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            name: name.into(),
            cmd,
            ..Self::default()
        }
    }

    /// Adds a result column.
    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Adds a parameter bound to `column`, numbered after the existing ones.
    pub fn add_param(&mut self, column: Column) {
        let number = i32::try_from(self.params.len() + 1).unwrap_or(i32::MAX);
        self.params.push(Parameter { number, column });
    }

    /// Adds a parameter with an explicit ordinal.
    pub fn add_numbered_param(&mut self, number: i32, column: Column) {
        self.params.push(Parameter { number, column });
    }
}

/// A bound query parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    /// 1-based ordinal of the placeholder (`$1`, `$2`, ...).
    pub number: i32,
    /// Column the parameter is compared against or inserted into.
    pub column: Column,
}
