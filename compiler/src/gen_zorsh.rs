use zorsh_gen_schema::{Definition, Fields, NamedField, SchemaContainer, Variant};

use crate::{error::ZorshError, parser::{parse, SCHEMA_SUFFIX}};

/// Import line every generated module opens with.
pub const PREAMBLE: &str = r#"import { b } from "@zorsh/zorsh";"#;

/// Knobs for the emitted source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Prefix each generated schema constant and type alias with `export`.
    pub exports: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions { exports: true }
    }
}

/// Emits one declaration block per name in `sorted`, in that order.
///
/// Names missing from the container are skipped with a warning. Each block is
/// a schema constant followed by its inferred type alias; blocks are
/// separated by a blank line and the output ends with a newline.
pub fn emit_declarations(
    sorted: &[String],
    container: &SchemaContainer,
    options: &GeneratorOptions,
) -> Result<String, ZorshError> {
    let mut blocks: Vec<String> = vec![PREAMBLE.to_string()];

    for name in sorted {
        let Some(definition) = container.get(name) else {
            tracing::warn!(name = %name, "skipping type missing from schema definitions");
            continue;
        };
        blocks.push(generate_declaration(name, definition, container, options)?);
    }

    let mut out = blocks.join("\n\n");
    out.push('\n');
    Ok(out)
}

fn generate_declaration(
    name: &str,
    definition: &Definition,
    container: &SchemaContainer,
    options: &GeneratorOptions,
) -> Result<String, ZorshError> {
    let schema = match definition {
        Definition::Struct { fields: Fields::NamedFields(fields) } => generate_struct(fields, 0)?,
        Definition::Struct { .. } => {
            return Err(ZorshError::UnsupportedVariantShape {
                parent:  name.to_string(),
                variant: name.to_string(),
                msg:     "only structs with named fields can be declared on their own".to_string(),
            })
        }
        Definition::Enum { variants, .. } => generate_enum(name, variants, container)?,
        other => {
            return Err(ZorshError::UnknownDefinitionKind {
                name: name.to_string(),
                kind: format!("{:?}", other.kind()),
            })
        }
    };

    let export = if options.exports { "export " } else { "" };
    Ok(format!(
        "{export}const {name}{suffix} = {schema};\n{export}type {name} = b.infer<typeof {name}{suffix}>;",
        export = export,
        name = name,
        suffix = SCHEMA_SUFFIX,
        schema = schema,
    ))
}

/// `b.struct({...})` with one line per field, in declared order. `depth`
/// is the nesting level of the struct literal itself.
fn generate_struct(fields: &[NamedField], depth: usize) -> Result<String, ZorshError> {
    if fields.is_empty() {
        return Ok("b.struct({})".to_string());
    }
    let field_indent = "  ".repeat(depth + 1);
    let lines = fields
        .iter()
        .map(|field| -> Result<String, ZorshError> {
            Ok(format!("{}{}: {}", field_indent, field.name, parse(&field.declaration)?))
        })
        .collect::<Result<Vec<String>, ZorshError>>()?;

    Ok(format!("b.struct({{\n{}\n{}}})", lines.join(",\n"), "  ".repeat(depth)))
}

fn generate_enum(
    name: &str,
    variants: &[Variant],
    container: &SchemaContainer,
) -> Result<String, ZorshError> {
    let lines = variants
        .iter()
        .map(|variant| -> Result<String, ZorshError> {
            Ok(format!("  {}: {}", variant.name, generate_variant(name, variant, container)?))
        })
        .collect::<Result<Vec<String>, ZorshError>>()?;

    if lines.is_empty() {
        return Ok("b.enum({})".to_string());
    }
    Ok(format!("b.enum({{\n{}\n}})", lines.join(",\n")))
}

/// Builder expression for one enum variant's payload.
fn generate_variant(
    parent: &str,
    variant: &Variant,
    container: &SchemaContainer,
) -> Result<String, ZorshError> {
    if variant.is_unit() {
        return Ok("b.unit()".to_string());
    }

    let unsupported = |msg: &str| ZorshError::UnsupportedVariantShape {
        parent:  parent.to_string(),
        variant: variant.name.clone(),
        msg:     msg.to_string(),
    };

    match container.get(&variant.declaration) {
        // Not a generated payload struct, so the declaration is the payload type.
        None => parse(&variant.declaration),
        Some(Definition::Struct { fields }) => match fields {
            Fields::UnnamedFields(fields) => match fields.as_slice() {
                [] => Ok("b.unit()".to_string()),
                [only] => parse(only),
                _ => Err(unsupported(&format!("{} unnamed fields", fields.len()))),
            },
            Fields::Empty => Ok("b.unit()".to_string()),
            Fields::NamedFields(fields) => generate_struct(fields, 1),
        },
        Some(other) => Err(unsupported(&format!("payload is a {:?} definition", other.kind()))),
    }
}
