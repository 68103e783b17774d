//! The DSL front end: message-block location and per-message field parsing.
//!
//! Field lines are processed one at a time. Dimension annotations are
//! permitted in exactly two positions, as a suffix of the type token and
//! as a suffix of the field name; they are collected left to right with
//! type-token dimensions first. Unknown type names are *not* rejected
//! here; the layout builder is the single authority for type validity.

use lazy_static::lazy_static;
use regex::Regex;

use tagwire_schema::FieldDescriptor;

use crate::error::SchemaError;
use crate::verifier::RESERVED_WORDS;

lazy_static! {
    /// `message <Identifier> { ... }` blocks; bodies never nest braces.
    static ref MESSAGE_BLOCK: Regex =
        Regex::new(r"message\s+([A-Za-z_][A-Za-z0-9_]*)\s*\{([^}]*)\}").unwrap();
    static ref DIMENSION:  Regex = Regex::new(r"\[([0-9]+)\]").unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    /// Field-line remainder: name, optional dimension suffixes, optional
    /// `= integer` default.
    static ref NAME_PATTERN: Regex =
        Regex::new(r"^(\w+)\s*((?:\[[0-9]+\]\s*)*)(?:=\s*([0-9]+)\s*)?$").unwrap();
}

/// Locate every message block in the input, in source order.
pub fn find_messages(text: &str) -> Vec<(String, String)> {
    MESSAGE_BLOCK
        .captures_iter(text)
        .map(|cap| (cap[1].to_string(), cap[2].to_string()))
        .collect()
}

/// Parse the body of one message block into its ordered field list.
pub fn parse_fields(message: &str, body: &str) -> Result<Vec<FieldDescriptor>, SchemaError> {
    let mut fields: Vec<FieldDescriptor> = Vec::new();

    for raw in body.lines() {
        let line = raw.trim().trim_end_matches(';').trim_end();
        if line.is_empty() || line == "{" || line == "}" {
            continue;
        }

        let malformed = || SchemaError::MalformedLine {
            message: message.to_string(),
            line: line.to_string(),
        };

        let (type_token, rest) = match line.split_once(char::is_whitespace) {
            Some((type_token, rest)) => (type_token, rest.trim()),
            None => return Err(malformed()),
        };

        let caps = NAME_PATTERN.captures(rest).ok_or_else(|| SchemaError::MissingFieldName {
            message: message.to_string(),
            line: line.to_string(),
        })?;
        let name = caps[1].to_string();
        let name_dims = caps.get(2).map_or("", |m| m.as_str());
        let default = match caps.get(3) {
            Some(m) => Some(m.as_str().parse::<u64>().map_err(|_| malformed())?),
            None => None,
        };

        let mut dims = Vec::new();
        for cap in DIMENSION
            .captures_iter(type_token)
            .chain(DIMENSION.captures_iter(name_dims))
        {
            let dim: usize = cap[1].parse().map_err(|_| malformed())?;
            if dim == 0 {
                return Err(malformed());
            }
            dims.push(dim);
        }
        let type_name = DIMENSION.replace_all(type_token, "").to_string();

        if !IDENTIFIER.is_match(&name) || RESERVED_WORDS.contains(&name.as_str()) {
            return Err(SchemaError::InvalidFieldName {
                message: message.to_string(),
                name,
            });
        }
        if fields.iter().any(|field| field.name == name) {
            return Err(SchemaError::DuplicateField {
                message: message.to_string(),
                name,
            });
        }

        fields.push(FieldDescriptor {
            name,
            type_name,
            dims,
            default,
        });
    }

    Ok(fields)
}
