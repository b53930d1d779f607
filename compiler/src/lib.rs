//! zorsh-gen-compiler
//!
//! This crate implements:
//!  1) A parser for Rust-style type declarations (`Vec<(u8, Item)>`, `[u8; 32]`, ...),
//!  2) An analyzer that picks the schema entries deserving their own declaration,
//!  3) A resolver that orders them so every type follows its dependencies,
//!  4) Code generation (`generate` → `String` of Zorsh declarations),
//!  5) `decode_schema_container` / `encode_schema_container` (Borsh layout),
//!  6) Error types (`ZorshError`).

pub mod error;
pub mod utils;
pub mod parser;
pub mod analyzer;
pub mod resolver;
pub mod gen_zorsh;
pub mod compiler;

pub use analyzer::find_nominal_types;
pub use compiler::{
    compile_schema_container, decode_schema_container, encode_schema_container, generate,
    generate_with_options,
};
pub use error::ZorshError;
pub use gen_zorsh::{emit_declarations, GeneratorOptions};
pub use parser::{parse, parse_type_ref, TypeRef};
pub use resolver::resolve;
