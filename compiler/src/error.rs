use thiserror::Error;

use tagwire_schema::UnsupportedType;

/// Every way a schema can fail to compile. All of these are authoring
/// errors: any single one aborts the run before a file is written, so
/// mutually inconsistent output across target languages can never exist.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse line {line:?} in message \"{message}\"")]
    MalformedLine { message: String, line: String },

    #[error("missing field name in line {line:?} in message \"{message}\"")]
    MissingFieldName { message: String, line: String },

    #[error("invalid field name {name:?} in message \"{message}\"")]
    InvalidFieldName { message: String, name: String },

    #[error("duplicate field {name:?} in message \"{message}\"")]
    DuplicateField { message: String, name: String },

    #[error(transparent)]
    UnsupportedType(#[from] UnsupportedType),

    #[error("invalid header in message \"{message}\": {detail}")]
    InvalidHeader { message: String, detail: String },

    #[error("no messages found in schema")]
    NoMessagesFound,

    #[error("header tag {tag} is used by both \"{first}\" and \"{second}\"")]
    DuplicateHeaderTag { tag: u8, first: String, second: String },

    #[error("the message name {name:?} is reserved")]
    InvalidMessageName { name: String },

    #[error("the message {name:?} is defined twice")]
    DuplicateMessage { name: String },
}
