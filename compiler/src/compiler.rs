use std::fs;
use std::path::Path;

use tagwire_schema::{build_layout, CompiledMessage, MessageSchema, MessageSet};

use crate::error::SchemaError;
use crate::parser::{find_messages, parse_fields};
use crate::verifier::{verify_message, verify_set};

/// Compile schema text into a verified, layout-annotated message set.
///
/// This is the whole front half of the pipeline: locate blocks, parse
/// fields, verify each message, build its canonical layout, then verify
/// the set as a whole. It fails fast on the first error, so no emitter
/// ever sees a partially valid set.
pub fn compile_schema(text: &str) -> Result<MessageSet, SchemaError> {
    let blocks = find_messages(text);
    if blocks.is_empty() {
        return Err(SchemaError::NoMessagesFound);
    }

    let mut messages = Vec::with_capacity(blocks.len());
    for (name, body) in blocks {
        let fields = parse_fields(&name, &body)?;
        let schema = MessageSchema { name, fields };
        let tag = verify_message(&schema)?;
        let layout = build_layout(&schema)?;
        messages.push(CompiledMessage { schema, layout, tag });
    }
    verify_set(&messages)?;

    Ok(MessageSet { messages })
}

/// Read and compile a schema file.
pub fn compile_file(path: &Path) -> Result<MessageSet, SchemaError> {
    let text = fs::read_to_string(path)?;
    compile_schema(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_a_full_schema() {
        let set = compile_schema(
            r#"
            message HeartBeat {
                byte header = 0;
            }

            message Mode {
                byte header = 14;
                byte value;
            }

            message Q {
                byte header = 16;
                float32_t axisAngle[6];
            }
            "#,
        )
        .unwrap();

        assert_eq!(set.messages.len(), 3);
        assert_eq!(set.messages[0].tag, 0);
        assert_eq!(set.messages[0].layout.total_size, 1);
        assert_eq!(set.messages[1].tag, 14);
        assert_eq!(set.messages[1].layout.total_size, 2);
        assert_eq!(set.messages[2].layout.fmt, "<B6f");
        assert_eq!(set.messages[2].layout.total_size, 25);
    }

    #[test]
    fn an_empty_input_has_no_messages() {
        let err = compile_schema("// nothing to see\n").unwrap_err();
        assert!(matches!(err, SchemaError::NoMessagesFound), "{err:?}");
    }

    #[test]
    fn colliding_tags_abort_the_whole_compile() {
        let err = compile_schema(
            r#"
            message A { byte header = 0; }
            message B { byte header = 0; }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateHeaderTag { .. }), "{err:?}");
    }

    #[test]
    fn unsupported_types_surface_from_the_layout_builder() {
        let err = compile_schema(
            r#"
            message A {
                byte header = 0;
                string label;
            }
            "#,
        )
        .unwrap_err();
        match err {
            SchemaError::UnsupportedType(inner) => {
                assert_eq!(inner.message, "A");
                assert_eq!(inner.type_name, "string");
            }
            other => panic!("expected UnsupportedType, got {other:?}"),
        }
    }
}
