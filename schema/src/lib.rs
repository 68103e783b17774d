//! Shared model for the tagwire message compiler.
//!
//! This crate holds everything the per-language emitters must agree on:
//!
//!  - the parsed message model ([`FieldDescriptor`], [`MessageSchema`],
//!    [`MessageSet`]),
//!  - the closed table of scalar wire types ([`registry`]),
//!  - the canonical layout builder ([`layout`]), the single authority for
//!    byte offsets, element counts, and total encoded size,
//!  - the runtime primitives generated Rust code is built on ([`wire`]).
//!
//! Layouts are little-endian and unpadded; arrays and matrices are
//! flattened row-major. A message's first byte is always its header tag.

pub mod layout;
pub mod registry;
pub mod types;
pub mod wire;

pub use layout::{build_layout, LayoutDescriptor, Slot, UnsupportedType};
pub use registry::{ScalarClass, TypeEntry};
pub use types::{CompiledMessage, FieldDescriptor, MessageSchema, MessageSet};
pub use wire::{Packet, WireError, WireReader, WireWriter};
