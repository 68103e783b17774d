//! Rust backend: renders a message set into one self-contained module of
//! generated structs, `Packet` impls, and a header-tag dispatch function.
//! Generated code depends only on the `tagwire` sdk crate. All offsets
//! and sizes come from the shared layout descriptors.

use tagwire_schema::{CompiledMessage, FieldDescriptor, MessageSet, Slot};

use crate::emitter::Emitter;

pub struct RustEmitter;

impl Emitter for RustEmitter {
    fn target(&self) -> &'static str {
        "rust"
    }

    fn extension(&self) -> &'static str {
        "rs"
    }

    fn emit(&self, set: &MessageSet) -> String {
        emit_rust(set)
    }
}

/// Converts a string to PascalCase.
/// - Underscore-separated words are capitalized and joined.
/// - A fully uppercase word keeps only its first letter uppercase.
/// - Otherwise only the first letter is forced uppercase.
pub fn to_pascal_case(s: &str) -> String {
    if s.contains('_') {
        s.split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
                }
            })
            .collect::<String>()
    } else if s == s.to_uppercase() {
        let mut chars = s.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
        }
    } else {
        let mut chars = s.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_uppercase().to_string() + chars.as_str(),
        }
    }
}

/// Converts a string to snake_case without splitting acronyms
/// (e.g. "axisAngle" becomes "axis_angle", "sessionID" becomes "session_id").
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut snake = String::new();
    for i in 0..chars.len() {
        let c = chars[i];
        if c.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                if !prev.is_uppercase() || (i + 1 < chars.len() && chars[i + 1].is_lowercase()) {
                    snake.push('_');
                }
            }
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake
}

/// Maps a wire-format code to the Rust scalar it decodes to. The suffix
/// of the matching `WireReader`/`WireWriter` method is the same string.
fn rust_scalar(code: char) -> &'static str {
    match code {
        'b' => "i8",
        'h' => "i16",
        'i' => "i32",
        'q' => "i64",
        'B' => "u8",
        'H' => "u16",
        'I' => "u32",
        'Q' => "u64",
        'f' => "f32",
        'd' => "f64",
        _ => unreachable!("wire-format codes are a closed set"),
    }
}

fn rust_zero(code: char) -> &'static str {
    match code {
        'b' => "0i8",
        'h' => "0i16",
        'i' => "0i32",
        'q' => "0i64",
        'B' => "0u8",
        'H' => "0u16",
        'I' => "0u32",
        'Q' => "0u64",
        'f' => "0.0f32",
        'd' => "0.0f64",
        _ => unreachable!("wire-format codes are a closed set"),
    }
}

/// `[[i16; 3]; 2]` for dims `[2, 3]`; the bare scalar for a scalar field.
fn rust_type(code: char, dims: &[usize]) -> String {
    let mut ty = rust_scalar(code).to_string();
    for dim in dims.iter().rev() {
        ty = format!("[{}; {}]", ty, dim);
    }
    ty
}

fn rust_zero_value(code: char, dims: &[usize]) -> String {
    let mut value = rust_zero(code).to_string();
    for dim in dims.iter().rev() {
        value = format!("[{}; {}]", value, dim);
    }
    value
}

pub fn emit_rust(set: &MessageSet) -> String {
    let mut out: Vec<String> = Vec::new();

    out.push("// Generated by tagwire. Do not edit.".to_string());
    out.push(String::new());
    let needs_reader = set
        .messages
        .iter()
        .any(|message| !message.schema.payload_fields().is_empty());
    if needs_reader {
        out.push("use tagwire::{Packet, WireError, WireReader, WireWriter};".to_string());
    } else {
        out.push("use tagwire::{Packet, WireError, WireWriter};".to_string());
    }
    out.push(String::new());

    for message in &set.messages {
        emit_message(message, &mut out);
    }
    emit_dispatch(set, &mut out);

    let mut source = out.join("\n");
    source.push('\n');
    source
}

fn emit_message(message: &CompiledMessage, out: &mut Vec<String>) {
    let struct_name = to_pascal_case(&message.schema.name);
    let payload: Vec<(&FieldDescriptor, &Slot)> = message
        .schema
        .payload_fields()
        .iter()
        .zip(&message.layout.slots[1..])
        .collect();

    out.push("#[derive(Debug, Clone, PartialEq)]".to_string());
    if payload.is_empty() {
        out.push(format!("pub struct {};", struct_name));
    } else {
        out.push(format!("pub struct {} {{", struct_name));
        for (field, slot) in &payload {
            out.push(format!(
                "    pub {}: {},",
                to_snake_case(&field.name),
                rust_type(slot.entry.code, &field.dims)
            ));
        }
        out.push("}".to_string());
    }
    out.push(String::new());

    out.push(format!("impl Packet for {} {{", struct_name));
    out.push(format!("    const HEADER: u8 = {};", message.tag));
    out.push(format!("    const SIZE: usize = {};", message.layout.total_size));
    out.push(String::new());

    out.push("    fn pack(&self) -> Vec<u8> {".to_string());
    out.push("        let mut w = WireWriter::with_capacity(Self::SIZE);".to_string());
    out.push("        w.write_u8(Self::HEADER);".to_string());
    for &(field, slot) in &payload {
        push_pack_stmts(field, slot, out);
    }
    out.push("        w.into_bytes()".to_string());
    out.push("    }".to_string());
    out.push(String::new());

    out.push("    fn unpack(bytes: &[u8]) -> Result<Self, WireError> {".to_string());
    out.push("        if bytes.len() != Self::SIZE {".to_string());
    out.push(
        "            return Err(WireError::WrongLength { expected: Self::SIZE, found: bytes.len() });"
            .to_string(),
    );
    out.push("        }".to_string());
    if payload.is_empty() {
        out.push(format!("        Ok({})", struct_name));
    } else {
        out.push("        let mut r = WireReader::new(bytes);".to_string());
        out.push("        r.skip(1)?;".to_string());
        for &(field, slot) in &payload {
            push_unpack_stmts(field, slot, out);
        }
        let names: Vec<String> = payload
            .iter()
            .map(|(field, _)| to_snake_case(&field.name))
            .collect();
        out.push(format!("        Ok({} {{ {} }})", struct_name, names.join(", ")));
    }
    out.push("    }".to_string());
    out.push("}".to_string());
    out.push(String::new());
}

fn push_pack_stmts(field: &FieldDescriptor, slot: &Slot, out: &mut Vec<String>) {
    let suffix = rust_scalar(slot.entry.code);
    let name = to_snake_case(&field.name);

    if field.dims.is_empty() {
        out.push(format!("        w.write_{}(self.{});", suffix, name));
        return;
    }

    let mut indent = String::from("        ");
    let mut source = format!("self.{}", name);
    for depth in 0..field.dims.len() {
        out.push(format!("{}for v{} in {}.iter() {{", indent, depth, source));
        source = format!("v{}", depth);
        indent.push_str("    ");
    }
    out.push(format!("{}w.write_{}(*v{});", indent, suffix, field.dims.len() - 1));
    for _ in 0..field.dims.len() {
        indent.truncate(indent.len() - 4);
        out.push(format!("{}}}", indent));
    }
}

fn push_unpack_stmts(field: &FieldDescriptor, slot: &Slot, out: &mut Vec<String>) {
    let suffix = rust_scalar(slot.entry.code);
    let name = to_snake_case(&field.name);

    if field.dims.is_empty() {
        out.push(format!("        let {} = r.read_{}()?;", name, suffix));
        return;
    }

    out.push(format!(
        "        let mut {} = {};",
        name,
        rust_zero_value(slot.entry.code, &field.dims)
    ));
    let mut indent = String::from("        ");
    let mut source = name;
    for depth in 0..field.dims.len() {
        out.push(format!("{}for v{} in {}.iter_mut() {{", indent, depth, source));
        source = format!("v{}", depth);
        indent.push_str("    ");
    }
    out.push(format!("{}*v{} = r.read_{}()?;", indent, field.dims.len() - 1, suffix));
    for _ in 0..field.dims.len() {
        indent.truncate(indent.len() - 4);
        out.push(format!("{}}}", indent));
    }
}

fn emit_dispatch(set: &MessageSet, out: &mut Vec<String>) {
    out.push("/// Every message of this schema, as one dispatchable sum.".to_string());
    out.push("#[derive(Debug, Clone, PartialEq)]".to_string());
    out.push("pub enum Message {".to_string());
    for message in &set.messages {
        let name = to_pascal_case(&message.schema.name);
        out.push(format!("    {}({}),", name, name));
    }
    out.push("}".to_string());
    out.push(String::new());

    out.push("/// Decode an incoming blob by its header tag.".to_string());
    out.push("pub fn decode_message(bytes: &[u8]) -> Result<Message, WireError> {".to_string());
    out.push("    let tag = match bytes.first() {".to_string());
    out.push("        Some(tag) => *tag,".to_string());
    out.push("        None => return Err(WireError::WrongLength { expected: 1, found: 0 }),".to_string());
    out.push("    };".to_string());
    out.push("    match tag {".to_string());
    for message in &set.messages {
        let name = to_pascal_case(&message.schema.name);
        out.push(format!(
            "        {} => Ok(Message::{}({}::unpack(bytes)?)),",
            message.tag, name, name
        ));
    }
    out.push("        unknown => Err(WireError::UnknownHeader(unknown)),".to_string());
    out.push("    }".to_string());
    out.push("}".to_string());
}
