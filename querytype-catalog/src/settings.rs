//! Generation settings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Database engine whose native type names the catalog uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Engine {
    /// PostgreSQL.
    #[default]
    Postgresql,
    /// Any engine without a type table; carries the name as given.
    Unsupported(String),
}

impl Engine {
    /// Parses an engine name. Unknown names are preserved, not rejected.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "postgresql" | "postgres" | "pg" => Self::Postgresql,
            _ => Self::Unsupported(s.to_string()),
        }
    }

    /// Returns the engine name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Postgresql => "postgresql",
            Self::Unsupported(name) => name,
        }
    }

    /// Returns true if native types can be mapped for this engine.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        matches!(self, Self::Postgresql)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Engine {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Engine> for String {
    fn from(value: Engine) -> Self {
        value.name().to_string()
    }
}

/// Settings for one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Engine the catalog was built for.
    pub engine: Engine,
    /// Explicit names keyed by the default-derived name (`table` or
    /// `schema_table`). A match is used verbatim.
    pub rename: BTreeMap<String, String>,
    /// Namespace qualifying enum type tags in query shapes, if any.
    pub models_namespace: Option<String>,
    /// Fail the run instead of reporting when two descriptors share a name.
    pub deny_name_collisions: bool,
}

impl Settings {
    /// Creates settings for the given engine.
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            ..Self::default()
        }
    }

    /// Adds a rename override.
    #[must_use]
    pub fn with_rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.rename.insert(from.into(), to.into());
        self
    }

    /// Returns the override registered for `name`, ignoring empty entries.
    #[must_use]
    pub fn renamed(&self, name: &str) -> Option<&str> {
        self.rename
            .get(name)
            .map(String::as_str)
            .filter(|r| !r.is_empty())
    }
}
