//! In-memory model of a decoded Borsh schema container, with conversions
//! to and from `borsh::schema::BorshSchemaContainer`.
//!
//! ```
//! use zorsh_gen_schema::*;
//!
//! let container = SchemaContainer::new("Point")
//!     .with("Point", Definition::named_struct([("x", "f32"), ("y", "f32")]))
//!     .with("f32", Definition::Primitive { size: 4 });
//!
//! assert_eq!(container.definitions.len(), 2);
//! assert_eq!(container.get("Point").map(Definition::kind), Some(DefinitionKind::Struct));
//! ```

pub mod convert;
pub mod schema;

pub use schema::*;
