//! The closed table of scalar wire types.
//!
//! Every schema type name maps to a fixed byte width, a numeric class,
//! and a stable per-width wire-format code (struct-module style). There
//! is no user extension; an unregistered name is the only failure, and it
//! is surfaced by the layout builder.

use serde::Serialize;

/// Numeric class of a registered scalar kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScalarClass {
    Signed,
    Unsigned,
    Float,
}

/// One entry of the wire-type table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TypeEntry {
    pub name: &'static str,
    /// Encoded width of one element, in bytes.
    pub width: usize,
    pub class: ScalarClass,
    /// Wire-format code used in layout alias strings.
    pub code: char,
}

impl TypeEntry {
    /// Whether this kind may carry the message header (1-byte unsigned).
    pub fn is_header_kind(&self) -> bool {
        self.width == 1 && self.class == ScalarClass::Unsigned
    }
}

/// All registered scalar kinds. `byte` is an alias for `uint8_t`.
pub const WIRE_TYPES: [TypeEntry; 11] = [
    TypeEntry { name: "int8_t",    width: 1, class: ScalarClass::Signed,   code: 'b' },
    TypeEntry { name: "int16_t",   width: 2, class: ScalarClass::Signed,   code: 'h' },
    TypeEntry { name: "int32_t",   width: 4, class: ScalarClass::Signed,   code: 'i' },
    TypeEntry { name: "int64_t",   width: 8, class: ScalarClass::Signed,   code: 'q' },
    TypeEntry { name: "uint8_t",   width: 1, class: ScalarClass::Unsigned, code: 'B' },
    TypeEntry { name: "uint16_t",  width: 2, class: ScalarClass::Unsigned, code: 'H' },
    TypeEntry { name: "uint32_t",  width: 4, class: ScalarClass::Unsigned, code: 'I' },
    TypeEntry { name: "uint64_t",  width: 8, class: ScalarClass::Unsigned, code: 'Q' },
    TypeEntry { name: "float32_t", width: 4, class: ScalarClass::Float,    code: 'f' },
    TypeEntry { name: "float64_t", width: 8, class: ScalarClass::Float,    code: 'd' },
    TypeEntry { name: "byte",      width: 1, class: ScalarClass::Unsigned, code: 'B' },
];

/// Look up a registered scalar kind by its schema name.
pub fn lookup(name: &str) -> Option<&'static TypeEntry> {
    WIRE_TYPES.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_and_codes() {
        let entry = lookup("int16_t").unwrap();
        assert_eq!(entry.width, 2);
        assert_eq!(entry.code, 'h');
        assert_eq!(entry.class, ScalarClass::Signed);

        let entry = lookup("float64_t").unwrap();
        assert_eq!(entry.width, 8);
        assert_eq!(entry.code, 'd');
        assert_eq!(entry.class, ScalarClass::Float);
    }

    #[test]
    fn byte_is_an_alias_for_uint8() {
        let byte = lookup("byte").unwrap();
        let uint8 = lookup("uint8_t").unwrap();
        assert_eq!(byte.width, uint8.width);
        assert_eq!(byte.code, uint8.code);
        assert_eq!(byte.class, uint8.class);
    }

    #[test]
    fn header_kinds() {
        assert!(lookup("byte").unwrap().is_header_kind());
        assert!(lookup("uint8_t").unwrap().is_header_kind());
        assert!(!lookup("int8_t").unwrap().is_header_kind());
        assert!(!lookup("uint16_t").unwrap().is_header_kind());
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(lookup("string").is_none());
        assert!(lookup("float32").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in WIRE_TYPES.iter().enumerate() {
            for b in WIRE_TYPES.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
