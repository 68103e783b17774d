//! Python backend: renders a message set into one module of struct-packing
//! classes plus a module-level dispatch table. Packing goes through the
//! layout's wire-format alias string (`FMT`), so the byte stream is the
//! same one the Rust backend produces, and element slices in `unpack` are
//! computed here at generation time from the shared slots.

use tagwire_schema::{CompiledMessage, FieldDescriptor, MessageSet, Slot};

use crate::emitter::Emitter;

pub struct PythonEmitter;

impl Emitter for PythonEmitter {
    fn target(&self) -> &'static str {
        "python"
    }

    fn extension(&self) -> &'static str {
        "py"
    }

    fn emit(&self, set: &MessageSet) -> String {
        emit_python(set)
    }
}

fn py_dtype(code: char) -> &'static str {
    match code {
        'b' => "np.int8",
        'h' => "np.int16",
        'i' => "np.int32",
        'q' => "np.int64",
        'B' => "np.uint8",
        'H' => "np.uint16",
        'I' => "np.uint32",
        'Q' => "np.uint64",
        'f' => "np.float32",
        'd' => "np.float64",
        _ => unreachable!("wire-format codes are a closed set"),
    }
}

/// Class names keep the schema spelling with a capitalized first letter.
fn class_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().to_string() + chars.as_str(),
    }
}

/// `(6,)` for rank-1 fields, `(2, 3)` for matrices.
fn py_shape(dims: &[usize]) -> String {
    if dims.len() == 1 {
        format!("({},)", dims[0])
    } else {
        let parts: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
        format!("({})", parts.join(", "))
    }
}

pub fn emit_python(set: &MessageSet) -> String {
    let mut out: Vec<String> = Vec::new();

    out.push("# Generated by tagwire. Do not edit.".to_string());
    out.push(String::new());
    out.push("import struct, numpy as np".to_string());
    out.push(String::new());
    out.push(String::new());

    for message in &set.messages {
        emit_class(message, &mut out);
    }
    emit_dispatch(set, &mut out);

    let mut source = out.join("\n");
    source.push('\n');
    source
}

fn emit_class(message: &CompiledMessage, out: &mut Vec<String>) {
    let cls = class_name(&message.schema.name);
    let payload: Vec<(&FieldDescriptor, &Slot)> = message
        .schema
        .payload_fields()
        .iter()
        .zip(&message.layout.slots[1..])
        .collect();
    let has_arrays = payload.iter().any(|(field, _)| !field.dims.is_empty());

    out.push(format!("class {}:", cls));
    out.push(format!("    HEADER = {}", message.tag));
    out.push(format!("    SIZE = {}", message.layout.total_size));
    out.push(format!("    FMT = '{}'", message.layout.fmt));
    out.push(String::new());

    if payload.is_empty() {
        out.push("    def __init__(self):".to_string());
    } else {
        let params: Vec<String> = payload
            .iter()
            .map(|(field, slot)| {
                if field.dims.is_empty() {
                    format!("{}: {}", field.name, py_dtype(slot.entry.code))
                } else {
                    format!("{}: np.ndarray", field.name)
                }
            })
            .collect();
        out.push(format!("    def __init__(self, {}):", params.join(", ")));
    }
    out.push(format!("        self.header = np.uint8({})", message.tag));
    for (field, slot) in &payload {
        if field.dims.is_empty() {
            out.push(format!(
                "        self.{} = {}({})",
                field.name,
                py_dtype(slot.entry.code),
                field.name
            ));
        } else {
            out.push(format!(
                "        self.{} = np.asarray({}, dtype={}).reshape({})",
                field.name,
                field.name,
                py_dtype(slot.entry.code),
                py_shape(&field.dims)
            ));
        }
    }
    out.push(String::new());

    out.push("    def pack(self) -> bytes:".to_string());
    if has_arrays {
        out.push("        parts = [self.header]".to_string());
        for (field, _) in &payload {
            if field.dims.is_empty() {
                out.push(format!("        parts.append(self.{})", field.name));
            } else {
                out.push(format!("        parts.extend(self.{}.ravel())", field.name));
            }
        }
        out.push("        return struct.pack(self.FMT, *parts)".to_string());
    } else {
        let mut args = vec!["self.header".to_string()];
        args.extend(payload.iter().map(|(field, _)| format!("self.{}", field.name)));
        out.push(format!("        return struct.pack(self.FMT, {})", args.join(", ")));
    }
    out.push(String::new());

    out.push("    @classmethod".to_string());
    out.push(format!("    def unpack(cls, b: bytes) -> '{}':", cls));
    out.push("        if len(b) != cls.SIZE:".to_string());
    out.push(format!(
        "            raise ValueError(f'{}: expected {{cls.SIZE}} bytes, got {{len(b)}}')",
        cls
    ));
    if payload.is_empty() {
        out.push("        return cls()".to_string());
    } else if !has_arrays {
        out.push("        vals = struct.unpack(cls.FMT, b)".to_string());
        out.push("        return cls(*vals[1:])".to_string());
    } else {
        out.push("        vals = struct.unpack(cls.FMT, b)".to_string());
        let mut at = 1;
        let mut names: Vec<&str> = Vec::new();
        for (field, slot) in &payload {
            if field.dims.is_empty() {
                out.push(format!("        {} = vals[{}]", field.name, at));
                at += 1;
            } else {
                out.push(format!(
                    "        {} = np.asarray(vals[{}:{}], dtype={}).reshape({})",
                    field.name,
                    at,
                    at + slot.count,
                    py_dtype(slot.entry.code),
                    py_shape(&field.dims)
                ));
                at += slot.count;
            }
            names.push(&field.name);
        }
        out.push(format!("        return cls({})", names.join(", ")));
    }
    out.push(String::new());
    out.push(String::new());
}

fn emit_dispatch(set: &MessageSet, out: &mut Vec<String>) {
    out.push("# --- Dispatch table and decoder ---".to_string());
    out.push(String::new());
    out.push("msg_dispatch = {".to_string());
    for message in &set.messages {
        out.push(format!("    {}: {},", message.tag, class_name(&message.schema.name)));
    }
    out.push("}".to_string());
    out.push(String::new());
    out.push(String::new());
    out.push("def decode_msg(blob: bytes):".to_string());
    out.push("    if not blob:".to_string());
    out.push("        raise ValueError('empty message blob')".to_string());
    out.push("    cls = msg_dispatch.get(blob[0])".to_string());
    out.push("    if cls is None:".to_string());
    out.push("        raise ValueError(f'unknown message header: {blob[0]}')".to_string());
    out.push("    return cls.unpack(blob)".to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile_schema;

    const SCHEMA: &str = r#"
    message HeartBeat {
        byte header = 0;
    }

    message Mode {
        byte header = 14;
        byte value;
    }

    message Sweep {
        byte header = 20;
        byte mode;
        float32_t gains[6];
    }
    "#;

    fn emitted() -> String {
        emit_python(&compile_schema(SCHEMA).unwrap())
    }

    #[test]
    fn classes_carry_the_shared_layout_constants() {
        let source = emitted();
        assert!(source.contains("class Mode:"));
        assert!(source.contains("    HEADER = 14"));
        assert!(source.contains("    SIZE = 2"));
        assert!(source.contains("    FMT = '<BB'"));
        assert!(source.contains("    FMT = '<BB6f'"));
    }

    #[test]
    fn scalar_only_messages_unpack_positionally() {
        let source = emitted();
        assert!(source.contains("        return cls(*vals[1:])"));
        assert!(source.contains("        return struct.pack(self.FMT, self.header, self.value)"));
    }

    #[test]
    fn mixed_messages_slice_by_element_count() {
        let source = emitted();
        assert!(source.contains("        mode = vals[1]"));
        assert!(source.contains("gains = np.asarray(vals[2:8], dtype=np.float32).reshape((6,))"));
        assert!(source.contains("        parts.append(self.mode)"));
        assert!(source.contains("        parts.extend(self.gains.ravel())"));
    }

    #[test]
    fn decode_checks_the_length_before_unpacking() {
        let source = emitted();
        assert!(source.contains("        if len(b) != cls.SIZE:"));
        assert!(source.contains("raise ValueError(f'Mode: expected {cls.SIZE} bytes, got {len(b)}')"));
    }

    #[test]
    fn the_dispatch_table_maps_every_tag() {
        let source = emitted();
        assert!(source.contains("msg_dispatch = {"));
        assert!(source.contains("    0: HeartBeat,"));
        assert!(source.contains("    14: Mode,"));
        assert!(source.contains("    20: Sweep,"));
        assert!(source.contains("raise ValueError(f'unknown message header: {blob[0]}')"));
    }

    #[test]
    fn emission_is_deterministic() {
        assert_eq!(emitted(), emitted());
    }
}
