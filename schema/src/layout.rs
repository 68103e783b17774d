//! The canonical wire layout of a message.
//!
//! A layout is a pure function of a [`MessageSchema`]: little-endian, no
//! implicit padding, arrays and matrices flattened row-major. Every
//! emitter consumes the descriptor built here; none may re-derive offsets
//! or sizes on its own. Two emitters given the same schema therefore
//! always agree on total size and per-field byte offsets.

use serde::Serialize;
use thiserror::Error;

use crate::registry::{self, TypeEntry};
use crate::types::MessageSchema;

/// One field's place in the encoded message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slot {
    pub field: String,
    /// Byte offset of the first element.
    pub offset: usize,
    /// Flattened element count (1 for scalars).
    pub count: usize,
    pub entry: &'static TypeEntry,
}

impl Slot {
    /// Encoded length of the whole field in bytes.
    pub fn byte_len(&self) -> usize {
        self.count * self.entry.width
    }
}

/// The canonical plan of a message's byte-exact wire representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutDescriptor {
    /// Exact encoded size in bytes, header included.
    pub total_size: usize,
    /// `<`-prefixed wire-format alias string, one token per field with
    /// arrays expanded to a repeat count (`<B6f`).
    pub fmt: String,
    /// One slot per field, in wire order. `slots[0]` is the header.
    pub slots: Vec<Slot>,
}

/// A field referenced a type name missing from the registry. This is the
/// single authority for type validity; the parser passes unknown names
/// through untouched.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unsupported type {type_name:?} for field {field:?} in message \"{message}\"")]
pub struct UnsupportedType {
    pub message: String,
    pub field: String,
    pub type_name: String,
}

/// Build the layout descriptor for one message.
pub fn build_layout(schema: &MessageSchema) -> Result<LayoutDescriptor, UnsupportedType> {
    let mut slots = Vec::with_capacity(schema.fields.len());
    let mut fmt = String::from("<");
    let mut offset = 0;

    for field in &schema.fields {
        let entry = registry::lookup(&field.type_name).ok_or_else(|| UnsupportedType {
            message: schema.name.clone(),
            field: field.name.clone(),
            type_name: field.type_name.clone(),
        })?;

        let count = field.element_count();
        if count > 1 {
            fmt.push_str(&count.to_string());
        }
        fmt.push(entry.code);

        slots.push(Slot {
            field: field.name.clone(),
            offset,
            count,
            entry,
        });
        offset += count * entry.width;
    }

    Ok(LayoutDescriptor {
        total_size: offset,
        fmt,
        slots,
    })
}
