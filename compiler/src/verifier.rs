use tagwire_schema::{registry, CompiledMessage, MessageSchema};

use crate::error::SchemaError;

/// Names that cannot be used for messages or fields: keywords of both
/// target languages, so generated sources stay valid everywhere.
pub const RESERVED_WORDS: &[&str] = &[
    // Rust
    "as", "async", "await", "break", "const", "continue", "crate", "dyn",
    "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
    // Python
    "False", "None", "True", "and", "assert", "class", "def", "del",
    "elif", "except", "finally", "from", "global", "import", "is",
    "lambda", "nonlocal", "not", "or", "pass", "raise", "try", "with",
    "yield",
];

/// Check the header invariants of one message and return its wire tag:
/// the first field is named `header`, is a scalar of a 1-byte unsigned
/// kind, and carries a default that fits in one byte.
pub fn verify_message(schema: &MessageSchema) -> Result<u8, SchemaError> {
    let invalid = |detail: &str| SchemaError::InvalidHeader {
        message: schema.name.clone(),
        detail: detail.to_string(),
    };

    let header = match schema.fields.first() {
        Some(field) if field.name == "header" => field,
        _ => return Err(invalid("the first field must be named \"header\"")),
    };
    if !header.is_scalar() {
        return Err(invalid("the header cannot be an array"));
    }
    match registry::lookup(&header.type_name) {
        Some(entry) if entry.is_header_kind() => {}
        _ => return Err(invalid("the header type must be a 1-byte unsigned kind")),
    }
    match header.default {
        Some(tag) if tag <= u8::MAX as u64 => Ok(tag as u8),
        Some(_) => Err(invalid("the header tag does not fit in one byte")),
        None => Err(invalid("the header needs a default value, its wire tag")),
    }
}

/// Set-level checks, run after every message verified on its own:
/// message names must be unique and unreserved, and no two messages may
/// share a header tag (the tag is the dispatch key).
pub fn verify_set(messages: &[CompiledMessage]) -> Result<(), SchemaError> {
    for (i, current) in messages.iter().enumerate() {
        if RESERVED_WORDS.contains(&current.schema.name.as_str()) {
            return Err(SchemaError::InvalidMessageName {
                name: current.schema.name.clone(),
            });
        }
        for earlier in &messages[..i] {
            if earlier.schema.name == current.schema.name {
                return Err(SchemaError::DuplicateMessage {
                    name: current.schema.name.clone(),
                });
            }
            if earlier.tag == current.tag {
                return Err(SchemaError::DuplicateHeaderTag {
                    tag: current.tag,
                    first: earlier.schema.name.clone(),
                    second: current.schema.name.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagwire_schema::{build_layout, FieldDescriptor};

    fn message(name: &str, fields: Vec<FieldDescriptor>) -> MessageSchema {
        MessageSchema {
            name: name.to_string(),
            fields,
        }
    }

    fn header(type_name: &str, default: Option<u64>) -> FieldDescriptor {
        FieldDescriptor {
            name: "header".to_string(),
            type_name: type_name.to_string(),
            dims: vec![],
            default,
        }
    }

    fn compiled(name: &str, tag: u64) -> CompiledMessage {
        let schema = message(name, vec![header("byte", Some(tag))]);
        let layout = build_layout(&schema).unwrap();
        let tag = verify_message(&schema).unwrap();
        CompiledMessage { schema, layout, tag }
    }

    #[test]
    fn a_valid_header_yields_its_tag() {
        assert_eq!(verify_message(&message("M", vec![header("byte", Some(14))])).unwrap(), 14);
        assert_eq!(verify_message(&message("M", vec![header("uint8_t", Some(0))])).unwrap(), 0);
    }

    #[test]
    fn header_must_come_first_and_be_named_header() {
        let value = FieldDescriptor {
            name: "value".to_string(),
            type_name: "byte".to_string(),
            dims: vec![],
            default: None,
        };
        for schema in [
            message("M", vec![]),
            message("M", vec![value.clone()]),
            message("M", vec![value, header("byte", Some(1))]),
        ] {
            let err = verify_message(&schema).unwrap_err();
            assert!(matches!(err, SchemaError::InvalidHeader { .. }), "{err:?}");
        }
    }

    #[test]
    fn header_must_be_a_scalar_1_byte_unsigned_kind_with_a_default() {
        let mut array_header = header("byte", Some(1));
        array_header.dims = vec![4];
        for schema in [
            message("M", vec![array_header]),
            message("M", vec![header("int8_t", Some(1))]),
            message("M", vec![header("uint32_t", Some(1))]),
            message("M", vec![header("nonsense", Some(1))]),
            message("M", vec![header("byte", None)]),
            message("M", vec![header("byte", Some(256))]),
        ] {
            let err = verify_message(&schema).unwrap_err();
            assert!(matches!(err, SchemaError::InvalidHeader { .. }), "{err:?}");
        }
    }

    #[test]
    fn colliding_header_tags_are_rejected() {
        let err = verify_set(&[compiled("A", 0), compiled("B", 2), compiled("C", 0)]).unwrap_err();
        match err {
            SchemaError::DuplicateHeaderTag { tag, first, second } => {
                assert_eq!(tag, 0);
                assert_eq!(first, "A");
                assert_eq!(second, "C");
            }
            other => panic!("expected DuplicateHeaderTag, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_and_reserved_message_names_are_rejected() {
        let err = verify_set(&[compiled("A", 0), compiled("A", 2)]).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateMessage { .. }), "{err:?}");

        let err = verify_set(&[compiled("True", 0)]).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidMessageName { .. }), "{err:?}");
    }

    #[test]
    fn distinct_tags_pass() {
        assert!(verify_set(&[compiled("A", 0), compiled("B", 1), compiled("C", 255)]).is_ok());
    }
}
