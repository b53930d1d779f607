use indexmap::IndexMap;
use serde::Serialize;

/// The literal declaration Borsh uses for the unit type.
pub const UNIT_DECLARATION: &str = "()";

/// A decoded `BorshSchemaContainer`: the root declaration plus every
/// definition reachable from it, in wire order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaContainer {
    pub declaration: String,
    pub definitions: IndexMap<String, Definition>,
}

impl SchemaContainer {
    pub fn new(declaration: impl Into<String>) -> Self {
        SchemaContainer {
            declaration: declaration.into(),
            definitions: IndexMap::new(),
        }
    }

    /// Builder-style insertion, keeping the order definitions are added in.
    pub fn with(mut self, name: impl Into<String>, definition: Definition) -> Self {
        self.definitions.insert(name.into(), definition);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.definitions.get(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Definition {
    Primitive {
        size: u8,
    },
    Sequence {
        length_width: u8,
        length_range: LengthRange,
        elements: String,
    },
    Tuple {
        elements: Vec<String>,
    },
    Enum {
        tag_width: u8,
        variants: Vec<Variant>,
    },
    Struct {
        fields: Fields,
    },
}

impl Definition {
    /// Short tag naming the definition kind, used in diagnostics.
    pub fn kind(&self) -> DefinitionKind {
        match self {
            Definition::Primitive { .. } => DefinitionKind::Primitive,
            Definition::Sequence { .. } => DefinitionKind::Sequence,
            Definition::Tuple { .. } => DefinitionKind::Tuple,
            Definition::Enum { .. } => DefinitionKind::Enum,
            Definition::Struct { .. } => DefinitionKind::Struct,
        }
    }

    pub fn named_struct<N, D>(fields: impl IntoIterator<Item = (N, D)>) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        Definition::Struct {
            fields: Fields::NamedFields(
                fields
                    .into_iter()
                    .map(|(name, declaration)| NamedField::new(name, declaration))
                    .collect(),
            ),
        }
    }

    pub fn unnamed_struct<D: Into<String>>(fields: impl IntoIterator<Item = D>) -> Self {
        Definition::Struct {
            fields: Fields::UnnamedFields(fields.into_iter().map(Into::into).collect()),
        }
    }

    pub fn empty_struct() -> Self {
        Definition::Struct { fields: Fields::Empty }
    }

    /// Enum with a one-byte tag and discriminants assigned in order.
    pub fn simple_enum<N, D>(variants: impl IntoIterator<Item = (N, D)>) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        Definition::Enum {
            tag_width: 1,
            variants: variants
                .into_iter()
                .enumerate()
                .map(|(i, (name, declaration))| Variant::new(i as i64, name, declaration))
                .collect(),
        }
    }

    /// A `u32`-length-prefixed sequence, as Borsh emits for `Vec`, `HashMap`,
    /// `HashSet` and `String`.
    pub fn sequence(elements: impl Into<String>) -> Self {
        Definition::Sequence {
            length_width: 4,
            length_range: LengthRange {
                start: 0,
                end: u32::MAX as u64,
            },
            elements: elements.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DefinitionKind {
    Primitive = 0,
    Sequence  = 1,
    Tuple     = 2,
    Enum      = 3,
    Struct    = 4,
}

/// Inclusive bounds on a sequence's element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthRange {
    pub start: u64,
    pub end:   u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variant {
    pub discriminant: i64,
    pub name:         String,
    pub declaration:  String,
}

impl Variant {
    pub fn new(discriminant: i64, name: impl Into<String>, declaration: impl Into<String>) -> Self {
        Variant {
            discriminant,
            name: name.into(),
            declaration: declaration.into(),
        }
    }

    pub fn is_unit(&self) -> bool {
        self.declaration == UNIT_DECLARATION
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Fields {
    NamedFields(Vec<NamedField>),
    UnnamedFields(Vec<String>),
    Empty,
}

impl Fields {
    /// Every field declaration, named or not, in declared order.
    pub fn declarations(&self) -> Vec<&str> {
        match self {
            Fields::NamedFields(fields) => fields.iter().map(|f| f.declaration.as_str()).collect(),
            Fields::UnnamedFields(fields) => fields.iter().map(String::as_str).collect(),
            Fields::Empty => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedField {
    pub name:        String,
    pub declaration: String,
}

impl NamedField {
    pub fn new(name: impl Into<String>, declaration: impl Into<String>) -> Self {
        NamedField {
            name: name.into(),
            declaration: declaration.into(),
        }
    }
}
