use std::collections::BTreeMap;

use borsh::schema::{
    BorshSchemaContainer, Definition as BorshDefinition, Fields as BorshFields,
};

use crate::schema::{Definition, Fields, LengthRange, NamedField, SchemaContainer, Variant};

impl From<&BorshSchemaContainer> for SchemaContainer {
    /// Definitions keep the container's own iteration order, which is sorted by name.
    fn from(container: &BorshSchemaContainer) -> Self {
        SchemaContainer {
            declaration: container.declaration().clone(),
            definitions: container
                .definitions()
                .map(|(name, def)| (name.clone(), Definition::from(def)))
                .collect(),
        }
    }
}

impl From<&SchemaContainer> for BorshSchemaContainer {
    fn from(container: &SchemaContainer) -> Self {
        let definitions: BTreeMap<String, BorshDefinition> = container
            .definitions
            .iter()
            .map(|(name, def)| (name.clone(), BorshDefinition::from(def)))
            .collect();
        BorshSchemaContainer::new(container.declaration.clone(), definitions)
    }
}

impl From<&BorshDefinition> for Definition {
    fn from(def: &BorshDefinition) -> Self {
        match def {
            BorshDefinition::Primitive(size) => Definition::Primitive { size: *size },
            BorshDefinition::Sequence {
                length_width,
                length_range,
                elements,
            } => Definition::Sequence {
                length_width: *length_width,
                length_range: LengthRange {
                    start: *length_range.start(),
                    end:   *length_range.end(),
                },
                elements: elements.clone(),
            },
            BorshDefinition::Tuple { elements } => Definition::Tuple {
                elements: elements.clone(),
            },
            BorshDefinition::Enum { tag_width, variants } => Definition::Enum {
                tag_width: *tag_width,
                variants: variants
                    .iter()
                    .map(|(discriminant, name, declaration)| {
                        Variant::new(*discriminant, name.clone(), declaration.clone())
                    })
                    .collect(),
            },
            BorshDefinition::Struct { fields } => Definition::Struct {
                fields: match fields {
                    BorshFields::NamedFields(fields) => Fields::NamedFields(
                        fields
                            .iter()
                            .map(|(name, declaration)| NamedField::new(name.clone(), declaration.clone()))
                            .collect(),
                    ),
                    BorshFields::UnnamedFields(fields) => Fields::UnnamedFields(fields.clone()),
                    BorshFields::Empty => Fields::Empty,
                },
            },
        }
    }
}

impl From<&Definition> for BorshDefinition {
    fn from(def: &Definition) -> Self {
        match def {
            Definition::Primitive { size } => BorshDefinition::Primitive(*size),
            Definition::Sequence {
                length_width,
                length_range,
                elements,
            } => BorshDefinition::Sequence {
                length_width: *length_width,
                length_range: length_range.start..=length_range.end,
                elements: elements.clone(),
            },
            Definition::Tuple { elements } => BorshDefinition::Tuple {
                elements: elements.clone(),
            },
            Definition::Enum { tag_width, variants } => BorshDefinition::Enum {
                tag_width: *tag_width,
                variants: variants
                    .iter()
                    .map(|v| (v.discriminant, v.name.clone(), v.declaration.clone()))
                    .collect(),
            },
            Definition::Struct { fields } => BorshDefinition::Struct {
                fields: match fields {
                    Fields::NamedFields(fields) => BorshFields::NamedFields(
                        fields
                            .iter()
                            .map(|f| (f.name.clone(), f.declaration.clone()))
                            .collect(),
                    ),
                    Fields::UnnamedFields(fields) => BorshFields::UnnamedFields(fields.clone()),
                    Fields::Empty => BorshFields::Empty,
                },
            },
        }
    }
}
