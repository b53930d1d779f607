use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZorshError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema decode error: {0}")]
    DecodeError(String),

    #[error("Schema encode error: {0}")]
    EncodeError(String),

    #[error("Unknown generic type: {0}")]
    UnknownGenericType(String),

    #[error("Generic type {name} expects {expected} argument(s) but got {found}")]
    GenericArity {
        name:     String,
        expected: usize,
        found:    usize,
    },

    #[error("Malformed type reference {declaration}: {msg}")]
    MalformedTypeReference {
        declaration: String,
        msg:         String,
    },

    #[error("Circular dependency found: {0}")]
    CircularDependency(String),

    #[error("Unsupported variant shape for {variant} in {parent}: {msg}")]
    UnsupportedVariantShape {
        parent:  String,
        variant: String,
        msg:     String,
    },

    #[error("Unknown definition type for {name}: {kind}")]
    UnknownDefinitionKind {
        name: String,
        kind: String,
    },
}
