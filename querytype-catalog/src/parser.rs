//! Generation request loader.
//!
//! This module decodes the JSON form of a generation request (settings,
//! catalog snapshot and parsed queries) into the internal representation.

use crate::error::ParseError;
use crate::types::CodeGenRequest;
use std::path::Path;

/// Parses a generation request from a JSON string.
///
/// # Arguments
/// * `json` - Request content
///
/// # Returns
/// Parsed request or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed, a command tag is unknown,
/// or a query is structurally unusable.
pub fn parse_request(json: &str) -> Result<CodeGenRequest, ParseError> {
    let request: CodeGenRequest = serde_json::from_str(json)?;
    check_queries(&request)?;
    Ok(request)
}

/// Parses a generation request from a JSON file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_request_file(path: &Path) -> Result<CodeGenRequest, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_request(&json)
}

/// Rejects queries the model builders cannot name.
fn check_queries(request: &CodeGenRequest) -> Result<(), ParseError> {
    for (idx, query) in request.queries.iter().enumerate() {
        if query.name.is_empty() {
            return Err(ParseError::invalid_structure(format!(
                "query #{} has no name",
                idx + 1
            )));
        }

        if let Some(param) = query.params.iter().find(|p| p.number < 1) {
            return Err(ParseError::invalid_structure(format!(
                "query '{}' has parameter with ordinal {}",
                query.name, param.number
            )));
        }
    }
    Ok(())
}
