use std::fmt;

use crate::{error::ZorshError, utils::quote};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref INTEGER_PRIMITIVE: Regex = Regex::new(r"^[iu][0-9]+$").unwrap();
    static ref FLOAT_PRIMITIVE:   Regex = Regex::new(r"^f[0-9]+$").unwrap();
    static ref IDENTIFIER:        Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    static ref ARRAY_LENGTH:      Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Suffix appended to a definition name to get its generated schema constant.
pub const SCHEMA_SUFFIX: &str = "Schema";

/// Generic constructors the Zorsh builder knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generic {
    Vec,
    HashMap,
    HashSet,
    Option,
}

impl Generic {
    pub fn from_name(name: &str) -> Option<Generic> {
        match name {
            "Vec" => Some(Generic::Vec),
            "HashMap" => Some(Generic::HashMap),
            "HashSet" => Some(Generic::HashSet),
            "Option" => Some(Generic::Option),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Generic::Vec => "Vec",
            Generic::HashMap => "HashMap",
            Generic::HashSet => "HashSet",
            Generic::Option => "Option",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Generic::HashMap => 2,
            Generic::Vec | Generic::HashSet | Generic::Option => 1,
        }
    }

    /// Builder method on `b` that constructs this generic.
    fn builder(self) -> &'static str {
        match self {
            Generic::Vec => "vec",
            Generic::HashMap => "hashMap",
            Generic::HashSet => "hashSet",
            Generic::Option => "option",
        }
    }
}

/// A parsed type reference. `Display` renders the Zorsh builder expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    String,
    Unit,
    /// Fixed-width numeric such as `u8`, `i128` or `f32`.
    Numeric(String),
    Generic(Generic, Vec<TypeRef>),
    Tuple(Vec<TypeRef>),
    Array(Box<TypeRef>, u64),
    /// Reference to another generated declaration.
    Named(String),
}

impl TypeRef {
    /// Every `Named` identifier in this reference, outermost first, without
    /// duplicates.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_identifiers(&mut out);
        out
    }

    fn collect_identifiers<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            TypeRef::Named(name) => {
                if !out.contains(&name.as_str()) {
                    out.push(name);
                }
            }
            TypeRef::Generic(_, args) | TypeRef::Tuple(args) => {
                for arg in args {
                    arg.collect_identifiers(out);
                }
            }
            TypeRef::Array(element, _) => element.collect_identifiers(out),
            TypeRef::String | TypeRef::Unit | TypeRef::Numeric(_) => {}
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::String => f.write_str("b.string()"),
            TypeRef::Unit => f.write_str("b.unit()"),
            TypeRef::Numeric(name) => write!(f, "b.{}()", name),
            TypeRef::Generic(generic, args) => {
                write!(f, "b.{}(", generic.builder())?;
                write_joined(f, args)?;
                f.write_str(")")
            }
            TypeRef::Tuple(elements) => {
                f.write_str("b.tuple([")?;
                write_joined(f, elements)?;
                f.write_str("])")
            }
            TypeRef::Array(element, len) => write!(f, "b.array({}, {})", element, len),
            TypeRef::Named(name) => write!(f, "{}{}", name, SCHEMA_SUFFIX),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[TypeRef]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Parses a type declaration and renders it as a Zorsh builder expression.
///
/// ```
/// use zorsh_gen_compiler::parser::parse;
///
/// assert_eq!(parse("Option<Vec<String>>").unwrap(), "b.option(b.vec(b.string()))");
/// assert_eq!(parse("[u8; 32]").unwrap(), "b.array(b.u8(), 32)");
/// ```
pub fn parse(declaration: &str) -> Result<String, ZorshError> {
    parse_type_ref(declaration).map(|ty| ty.to_string())
}

/// Parses a type declaration into a [`TypeRef`] tree.
pub fn parse_type_ref(declaration: &str) -> Result<TypeRef, ZorshError> {
    let input = declaration.trim();

    if input.is_empty() {
        return Err(malformed(declaration, "empty type"));
    }
    if input == "()" {
        return Ok(TypeRef::Unit);
    }
    if is_enclosed(input, '(', ')') {
        return parse_tuple(declaration, &input[1..input.len() - 1]);
    }
    if is_enclosed(input, '[', ']') {
        return parse_array(declaration, &input[1..input.len() - 1]);
    }
    if let Some(open) = input.find('<') {
        if !input.ends_with('>') {
            return Err(malformed(declaration, "generic arguments are not closed"));
        }
        return parse_generic(declaration, &input[..open], &input[open + 1..input.len() - 1]);
    }
    parse_leaf(declaration, input)
}

fn parse_tuple(declaration: &str, inner: &str) -> Result<TypeRef, ZorshError> {
    let mut parts = split_top_level(declaration, inner, ',')?;
    // `(T,)` is how a one-element tuple is spelled.
    if parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    let elements = parts
        .into_iter()
        .map(|part| parse_element(declaration, part))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TypeRef::Tuple(elements))
}

fn parse_array(declaration: &str, inner: &str) -> Result<TypeRef, ZorshError> {
    let parts = split_top_level(declaration, inner, ';')?;
    let [element, len] = parts.as_slice() else {
        return Err(malformed(declaration, "arrays are written [T; N]"));
    };
    if !ARRAY_LENGTH.is_match(len) {
        return Err(malformed(
            declaration,
            &format!("array length {} is not an integer", quote(len)),
        ));
    }
    let len = len
        .parse::<u64>()
        .map_err(|_| malformed(declaration, &format!("array length {} is too large", quote(len))))?;
    Ok(TypeRef::Array(Box::new(parse_element(declaration, element)?), len))
}

fn parse_generic(declaration: &str, base: &str, args: &str) -> Result<TypeRef, ZorshError> {
    let base = base.trim();
    if !IDENTIFIER.is_match(base) {
        return Err(malformed(
            declaration,
            &format!("{} is not a generic type name", quote(base)),
        ));
    }
    let generic =
        Generic::from_name(base).ok_or_else(|| ZorshError::UnknownGenericType(base.to_string()))?;

    let args = split_top_level(declaration, args, ',')?
        .into_iter()
        .map(|arg| parse_element(declaration, arg))
        .collect::<Result<Vec<_>, _>>()?;

    if args.len() != generic.arity() {
        return Err(ZorshError::GenericArity {
            name:     generic.name().to_string(),
            expected: generic.arity(),
            found:    args.len(),
        });
    }
    Ok(TypeRef::Generic(generic, args))
}

fn parse_leaf(declaration: &str, input: &str) -> Result<TypeRef, ZorshError> {
    if input == "String" {
        Ok(TypeRef::String)
    } else if INTEGER_PRIMITIVE.is_match(input) || FLOAT_PRIMITIVE.is_match(input) {
        Ok(TypeRef::Numeric(input.to_string()))
    } else if IDENTIFIER.is_match(input) {
        Ok(TypeRef::Named(input.to_string()))
    } else {
        Err(malformed(
            declaration,
            &format!("unexpected token {}", quote(input)),
        ))
    }
}

/// Parses one comma- or semicolon-separated piece of a larger declaration.
fn parse_element(declaration: &str, part: &str) -> Result<TypeRef, ZorshError> {
    if part.is_empty() {
        return Err(malformed(declaration, "empty element"));
    }
    parse_type_ref(part)
}

/// True when `input` starts with `open` and that opener is closed by the
/// final character, so `(a, b)` is enclosed but `(a), (b)` is not.
fn is_enclosed(input: &str, open: char, close: char) -> bool {
    if !input.starts_with(open) || !input.ends_with(close) {
        return false;
    }
    let mut depth = 0i32;
    for (i, c) in input.char_indices() {
        match c {
            '(' | '<' | '[' => depth += 1,
            ')' | '>' | ']' => depth -= 1,
            _ => {}
        }
        if depth == 0 {
            return i == input.len() - close.len_utf8();
        }
    }
    false
}

/// Splits on `delimiter` wherever it is not nested inside `()`, `<>` or `[]`.
/// Parts are trimmed; empty parts are kept so callers can reject them.
fn split_top_level<'a>(
    declaration: &str,
    input: &'a str,
    delimiter: char,
) -> Result<Vec<&'a str>, ZorshError> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        match c {
            '(' | '<' | '[' => depth += 1,
            ')' | '>' | ']' => {
                depth -= 1;
                if depth < 0 {
                    return Err(malformed(declaration, &format!("unbalanced {}", quote(&c.to_string()))));
                }
            }
            _ if c == delimiter && depth == 0 => {
                parts.push(input[start..i].trim());
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(malformed(declaration, "unbalanced brackets"));
    }
    parts.push(input[start..].trim());
    Ok(parts)
}

fn malformed(declaration: &str, msg: &str) -> ZorshError {
    ZorshError::MalformedTypeReference {
        declaration: quote(declaration),
        msg:         msg.to_string(),
    }
}
