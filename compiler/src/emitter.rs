use tagwire_schema::MessageSet;

use crate::gen_python::PythonEmitter;
use crate::gen_rust::RustEmitter;

/// A backend rendering one message set into one target language's source
/// form. Emitters run only after the driver has validated the whole set,
/// and they derive every offset and size from the shared layout
/// descriptors, so emission itself cannot fail.
pub trait Emitter {
    fn target(&self) -> &'static str;
    /// Extension of the generated artifact, without the dot.
    fn extension(&self) -> &'static str;
    fn emit(&self, set: &MessageSet) -> String;
}

/// One generated source file, not yet written to disk.
pub struct Artifact {
    pub target: &'static str,
    pub extension: &'static str,
    pub source: String,
}

/// Run every backend over the same immutable set, in a fixed order.
pub fn emit_all(set: &MessageSet) -> Vec<Artifact> {
    let emitters: [&dyn Emitter; 2] = [&RustEmitter, &PythonEmitter];
    emitters
        .iter()
        .map(|emitter| Artifact {
            target: emitter.target(),
            extension: emitter.extension(),
            source: emitter.emit(set),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile_schema;

    #[test]
    fn every_target_emits_one_artifact() {
        let set = compile_schema("message A { byte header = 0; }").unwrap();
        let artifacts = emit_all(&set);
        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts[0].target, "rust");
        assert_eq!(artifacts[0].extension, "rs");
        assert_eq!(artifacts[1].target, "python");
        assert_eq!(artifacts[1].extension, "py");
        assert!(!artifacts[0].source.is_empty());
        assert!(!artifacts[1].source.is_empty());
    }
}
