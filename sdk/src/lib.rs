//! tagwire
//!
//! Runtime support and the public face of the tagwire toolchain.
//!
//! - `Packet` trait, `WireError`, and the reader/writer primitives that
//!   generated Rust code is built on (re-exported from `tagwire-schema`)
//! - The compiler entry points, for embedding schema compilation
//! - Helpers for inspecting a compiled message set

pub use tagwire_compiler::error::SchemaError;
pub use tagwire_compiler::{compile_file, compile_schema, emit_all, Artifact, Emitter};
pub use tagwire_schema::{
    build_layout, CompiledMessage, FieldDescriptor, LayoutDescriptor, MessageSchema, MessageSet,
    Packet, ScalarClass, Slot, TypeEntry, WireError, WireReader, WireWriter,
};

/// Render a compiled message set as pretty-printed JSON, for inspection
/// and diffing.
pub fn dump_to_json(set: &MessageSet) -> Result<String, SchemaError> {
    Ok(serde_json::to_string_pretty(set).unwrap())
}

pub mod wire {
    pub use tagwire_schema::wire::{Packet, WireError, WireReader, WireWriter};
}

pub mod error {
    pub use tagwire_compiler::error::SchemaError;
    pub use tagwire_schema::wire::WireError;
}

pub mod schema {
    pub use tagwire_schema::{
        CompiledMessage, FieldDescriptor, LayoutDescriptor, MessageSchema, MessageSet, Slot,
        TypeEntry,
    };
}
