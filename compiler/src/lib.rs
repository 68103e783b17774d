//! tagwire-compiler
//!
//! This crate implements:
//!  1) A block scanner + line parser for `.msg` schema files,
//!  2) A message verifier (header shape, tag uniqueness, reserved names),
//!  3) The driver (`compile_schema` / `compile_file` → `MessageSet`),
//!  4) Code generation for both targets (`emit_all` → one artifact per
//!     language), and
//!  5) Error types (`SchemaError`).
//!
//! The canonical layout itself lives in `tagwire-schema`; every backend
//! here consumes it and none re-derives offsets or sizes on its own.

pub mod compiler;
pub mod emitter;
pub mod error;
pub mod gen_python;
pub mod gen_rust;
pub mod parser;
pub mod verifier;

pub use compiler::{compile_file, compile_schema};
pub use emitter::{emit_all, Artifact, Emitter};
pub use error::SchemaError;
