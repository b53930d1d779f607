use indexmap::IndexSet;
use lazy_static::lazy_static;
use regex::Regex;
use zorsh_gen_schema::{Definition, SchemaContainer};

lazy_static! {
    static ref NUMERIC_PRIMITIVE: Regex = Regex::new(r"^[a-z][0-9]*$").unwrap();
}

/// Returns the names that get their own generated declaration, in
/// definitions order.
///
/// Everything else is synthetic: primitives, strings, collection and tuple
/// instantiations, `Option<...>`, and the per-variant payload structs that the
/// emitter inlines into their parent enum.
pub fn find_nominal_types(container: &SchemaContainer) -> Vec<String> {
    tracing::trace!(
        keys = ?container.definitions.keys().collect::<Vec<_>>(),
        "classifying definitions"
    );

    let payloads = variant_payload_names(container);

    let nominal: Vec<String> = container
        .definitions
        .iter()
        .filter(|(name, def)| !payloads.contains(name.as_str()) && !is_synthetic(name, def))
        .map(|(name, _)| name.clone())
        .collect();

    tracing::debug!(?nominal, "found nominal types");
    nominal
}

/// Declarations of every non-unit variant of every user enum.
fn variant_payload_names(container: &SchemaContainer) -> IndexSet<&str> {
    let mut payloads = IndexSet::new();
    for (name, def) in &container.definitions {
        if let Definition::Enum { variants, .. } = def {
            if is_option(name) {
                continue;
            }
            for variant in variants.iter().filter(|v| !v.is_unit()) {
                payloads.insert(variant.declaration.as_str());
            }
        }
    }
    payloads
}

fn is_synthetic(name: &str, def: &Definition) -> bool {
    name.contains('<')
        || name.starts_with('(')
        || is_option(name)
        || NUMERIC_PRIMITIVE.is_match(name)
        || name == "String"
        || matches!(def, Definition::Sequence { .. } | Definition::Primitive { .. })
}

fn is_option(name: &str) -> bool {
    name.starts_with("Option<")
}
