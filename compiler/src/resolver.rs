use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use zorsh_gen_schema::{Definition, SchemaContainer};

use crate::{error::ZorshError, parser::parse_type_ref};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// Orders `nominal` so that every type comes after the nominal types it
/// references. Ties keep the order of `nominal`.
///
/// Fails with [`ZorshError::CircularDependency`] naming the first type found
/// to be its own ancestor, which includes a type that contains itself.
pub fn resolve(nominal: &[String], container: &SchemaContainer) -> Result<Vec<String>, ZorshError> {
    let nominal_set: IndexSet<&str> = nominal.iter().map(String::as_str).collect();

    let mut graph: IndexMap<&str, IndexSet<String>> = IndexMap::new();
    for &name in &nominal_set {
        let deps = match container.get(name) {
            Some(def) => {
                let mut deps = IndexSet::new();
                let mut seen_payloads = IndexSet::new();
                collect_dependencies(def, container, &nominal_set, &mut seen_payloads, &mut deps)?;
                deps
            }
            None => IndexSet::new(),
        };
        graph.insert(name, deps);
    }

    let mut marks: HashMap<&str, Mark> = HashMap::new();
    let mut sorted = Vec::with_capacity(nominal_set.len());
    for &name in &nominal_set {
        visit(name, &graph, &mut marks, &mut sorted)?;
    }

    tracing::debug!(?sorted, "sorted dependencies");
    Ok(sorted)
}

fn visit<'a>(
    name: &'a str,
    graph: &'a IndexMap<&'a str, IndexSet<String>>,
    marks: &mut HashMap<&'a str, Mark>,
    sorted: &mut Vec<String>,
) -> Result<(), ZorshError> {
    match marks.get(name) {
        Some(Mark::Visiting) => return Err(ZorshError::CircularDependency(name.to_string())),
        Some(Mark::Done) => return Ok(()),
        None => {}
    }
    marks.insert(name, Mark::Visiting);

    if let Some(deps) = graph.get(name) {
        for dep in deps {
            visit(dep, graph, marks, sorted)?;
        }
    }

    marks.insert(name, Mark::Done);
    sorted.push(name.to_string());
    Ok(())
}

/// Adds the nominal types `def` refers to. Enum variants are looked through:
/// a payload contributes the dependencies of its own fields but is never a
/// node itself.
fn collect_dependencies<'c>(
    def: &'c Definition,
    container: &'c SchemaContainer,
    nominal: &IndexSet<&str>,
    seen_payloads: &mut IndexSet<&'c str>,
    deps: &mut IndexSet<String>,
) -> Result<(), ZorshError> {
    match def {
        Definition::Struct { fields } => {
            for declaration in fields.declarations() {
                add_declaration(declaration, nominal, deps)?;
            }
        }
        Definition::Enum { variants, .. } => {
            for variant in variants.iter().filter(|v| !v.is_unit()) {
                if !seen_payloads.insert(variant.declaration.as_str()) {
                    continue;
                }
                match container.get(&variant.declaration) {
                    Some(payload) => {
                        collect_dependencies(payload, container, nominal, seen_payloads, deps)?
                    }
                    None => add_declaration(&variant.declaration, nominal, deps)?,
                }
            }
        }
        Definition::Primitive { .. } | Definition::Sequence { .. } | Definition::Tuple { .. } => {}
    }
    Ok(())
}

fn add_declaration(
    declaration: &str,
    nominal: &IndexSet<&str>,
    deps: &mut IndexSet<String>,
) -> Result<(), ZorshError> {
    let ty = parse_type_ref(declaration)?;
    for ident in ty.identifiers() {
        if nominal.contains(ident) {
            deps.insert(ident.to_string());
        }
    }
    Ok(())
}
