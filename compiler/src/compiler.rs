use borsh::schema::BorshSchemaContainer;
use zorsh_gen_schema::SchemaContainer;

use crate::{
    analyzer::find_nominal_types,
    error::ZorshError,
    gen_zorsh::{emit_declarations, GeneratorOptions},
    resolver::resolve,
};

/// Generate Zorsh declarations for every nominal type in `container`.
pub fn generate(container: &SchemaContainer) -> Result<String, ZorshError> {
    generate_with_options(container, &GeneratorOptions::default())
}

/// Classify, order, then emit. Any failure aborts with no partial output.
pub fn generate_with_options(
    container: &SchemaContainer,
    options: &GeneratorOptions,
) -> Result<String, ZorshError> {
    let nominal = find_nominal_types(container);
    let sorted = resolve(&nominal, container)?;
    emit_declarations(&sorted, container, options)
}

/// Decode a Borsh-serialized schema container and generate declarations for it.
pub fn compile_schema_container(
    buffer: &[u8],
    options: &GeneratorOptions,
) -> Result<String, ZorshError> {
    let container = decode_schema_container(buffer)?;
    generate_with_options(&container, options)
}

/// Decode a Borsh-serialized `BorshSchemaContainer`.
/// Returns `Err(ZorshError::DecodeError)` on truncated or invalid data, or
/// when bytes are left over after the container.
pub fn decode_schema_container(buffer: &[u8]) -> Result<SchemaContainer, ZorshError> {
    let container: BorshSchemaContainer = borsh::from_slice(buffer)
        .map_err(|e| ZorshError::DecodeError(format!("Failed to decode schema container: {}", e)))?;

    tracing::debug!(
        declaration = %container.declaration(),
        definitions = container.definitions().count(),
        "decoded schema container"
    );
    Ok(SchemaContainer::from(&container))
}

/// Encode a `SchemaContainer` the way borsh serializes a `BorshSchemaContainer`.
/// Definitions are written sorted by name, whatever order `container` holds them in.
pub fn encode_schema_container(container: &SchemaContainer) -> Result<Vec<u8>, ZorshError> {
    borsh::to_vec(&BorshSchemaContainer::from(container))
        .map_err(|e| ZorshError::EncodeError(e.to_string()))
}
