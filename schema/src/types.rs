use serde::Serialize;

use crate::layout::LayoutDescriptor;

/// One parsed field of a message block. Immutable after parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    /// Base type name, with any dimension suffixes stripped.
    pub type_name: String,
    /// Declared dimensions, outermost first; empty means scalar.
    pub dims: Vec<usize>,
    /// Integer default, only meaningful for the implicit `header` field.
    pub default: Option<u64>,
}

impl FieldDescriptor {
    /// Flattened element count: the product of all dimensions, 1 for scalars.
    pub fn element_count(&self) -> usize {
        self.dims.iter().product()
    }

    pub fn is_scalar(&self) -> bool {
        self.dims.is_empty()
    }
}

/// One message block: a name plus its fields in wire order.
///
/// Once verified, the first field is always the `header` field and its
/// default is the message's wire tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageSchema {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl MessageSchema {
    /// Fields that become settable members of the generated type.
    /// The header is excluded: its value is a compile-time constant.
    pub fn payload_fields(&self) -> &[FieldDescriptor] {
        self.fields.get(1..).unwrap_or(&[])
    }
}

/// A verified message paired with its canonical layout and wire tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledMessage {
    pub schema: MessageSchema,
    pub layout: LayoutDescriptor,
    pub tag: u8,
}

/// The full ordered message collection parsed from one schema file.
///
/// Lifecycle is parse-once, emit-many: every emitter reads the same set,
/// and nothing mutates it after the driver finishes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageSet {
    pub messages: Vec<CompiledMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, type_name: &str, dims: &[usize]) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            type_name: type_name.to_string(),
            dims: dims.to_vec(),
            default: None,
        }
    }

    #[test]
    fn element_count_is_the_product_of_dims() {
        assert_eq!(field("x", "float32_t", &[]).element_count(), 1);
        assert_eq!(field("values", "int8_t", &[4]).element_count(), 4);
        assert_eq!(field("grid", "float32_t", &[10, 6]).element_count(), 60);
    }

    #[test]
    fn payload_excludes_the_header() {
        let schema = MessageSchema {
            name: "Mode".to_string(),
            fields: vec![field("header", "byte", &[]), field("value", "byte", &[])],
        };
        let payload = schema.payload_fields();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0].name, "value");

        let empty = MessageSchema { name: "X".to_string(), fields: vec![] };
        assert!(empty.payload_fields().is_empty());
    }
}
