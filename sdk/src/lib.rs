//! zorsh-gen
//!
//! One-call entry points for turning a Borsh schema into Zorsh declarations.
//!
//! - `generate_from_bytes` / `generate_from_file` (decode + generate)
//! - `decode_to_json` for inspecting a schema file
//! - Re-exports of the model, options and error types

use std::path::Path;

pub use zorsh_gen_compiler::{generate, generate_with_options, GeneratorOptions, ZorshError};
pub use zorsh_gen_schema::{Definition, Fields, SchemaContainer, Variant};

/// Decode a Borsh schema buffer and generate Zorsh declarations for it.
pub fn generate_from_bytes(buffer: &[u8], options: &GeneratorOptions) -> Result<String, ZorshError> {
    zorsh_gen_compiler::compile_schema_container(buffer, options)
}

/// Read a Borsh schema file and generate Zorsh declarations for it.
pub fn generate_from_file(path: &Path, options: &GeneratorOptions) -> Result<String, ZorshError> {
    let data = std::fs::read(path)?;
    generate_from_bytes(&data, options)
}

/// Decode a Borsh schema buffer into a pretty‐printed JSON string.
pub fn decode_to_json(buffer: &[u8]) -> Result<String, ZorshError> {
    let container = zorsh_gen_compiler::decode_schema_container(buffer)?;
    Ok(serde_json::to_string_pretty(&container)?)
}

pub mod error {
    pub use zorsh_gen_compiler::error::ZorshError;
}

pub mod schema {
    pub use zorsh_gen_schema::*;
}
