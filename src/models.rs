use std::collections::BTreeSet;
use std::fmt;
use serde::{Deserialize, Serialize};
use crate::generator::naming::PREFIX_I;

/// A pass's worth of type metadata, as produced by the host's metadata reader.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct Input {
    pub types: Vec<TypeDescriptor>,
}

/// Read access to the types of one generation pass.
pub trait TypeMetadata {
    /// Types carrying a generation request, in the order the host submitted them.
    fn annotated(&self) -> Vec<&TypeDescriptor>;

    /// Looks up any known type by its qualified name. Generic arguments are ignored.
    fn lookup(&self, name: &str) -> Option<&TypeDescriptor>;
}

impl TypeMetadata for Input {
    fn annotated(&self) -> Vec<&TypeDescriptor> {
        self.types.iter()
            .filter(|f| f.request.is_some())
            .collect()
    }

    fn lookup(&self, name: &str) -> Option<&TypeDescriptor> {
        let name = erasure(name);
        self.types.iter().find(|f| f.name == name)
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
    Record,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Class => "a class",
            Self::Interface => "an interface",
            Self::Enum => "an enum",
            Self::Annotation => "an annotation type",
            Self::Record => "a record",
        };
        f.write_str(kind)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct TypeDescriptor {
    /// Qualified name, e.g. `com.example.UserService`.
    pub name: String,
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub kind: TypeKind,
    /// Qualified name of the enclosing type, absent for top-level types.
    #[serde(default, rename(deserialize = "enclosingType"))]
    pub enclosing_type: Option<String>,
    #[serde(default, rename(deserialize = "typeParameters"))]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    /// Present when the type carries the generation request marker.
    #[serde(default)]
    pub request: Option<GenerateRequest>,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

impl TypeDescriptor {
    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Explicit interface name, optionally qualified.
    #[serde(default)]
    pub value: String,
    #[serde(default = "default_naming_strategy", rename(deserialize = "namingStrategy"))]
    pub naming_strategy: String,
    #[serde(default, rename(deserialize = "propertyConstants"))]
    pub property_constants: bool,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            value: String::new(),
            naming_strategy: default_naming_strategy(),
            property_constants: false,
        }
    }
}

fn default_naming_strategy() -> String {
    PREFIX_I.to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub column: Option<u32>,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file)?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
            if let Some(column) = self.column {
                write!(f, ":{}", column)?;
            }
        }
        Ok(())
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    #[default]
    Method,
    Constructor,
    Initializer,
    Field,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    #[default]
    Package,
    Private,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum MethodMarker {
    /// Keeps the method out of every generated interface.
    NotExposed,
}

#[derive(Deserialize, Clone, Debug)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub kind: MemberKind,
    #[serde(default, rename(deserialize = "typeParameters"))]
    pub type_parameters: Vec<String>,
    #[serde(default = "void", rename(deserialize = "returnType"))]
    pub return_type: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, rename(deserialize = "thrownTypes"))]
    pub thrown_types: Vec<String>,
    #[serde(default, rename(deserialize = "isVarArgs"))]
    pub is_var_args: bool,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename(deserialize = "isStatic"))]
    pub is_static: bool,
    #[serde(default)]
    pub markers: BTreeSet<MethodMarker>,
}

fn void() -> String {
    "void".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub class: String,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<String>,
}

/// Strips generic arguments from a type reference: `java.util.List<T>` becomes `java.util.List`.
pub fn erasure(ty: &str) -> &str {
    match ty.find('<') {
        Some(idx) => ty[..idx].trim(),
        None => ty.trim(),
    }
}

/// Simple name of a type reference: `java.lang.Comparable<a.Foo>` becomes `Comparable`.
pub fn simple_name(ty: &str) -> &str {
    let ty = erasure(ty);
    match ty.rfind('.') {
        Some(idx) => &ty[idx + 1..],
        None => ty,
    }
}
