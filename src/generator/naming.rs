use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use log::debug;
use serde::Serialize;
use crate::error::NamingError;
use crate::models::{GenerateRequest, TypeDescriptor};

/// `Foo` becomes `IFoo`.
pub const PREFIX_I: &str = "PREFIX_I";
/// `FooImpl` becomes `Foo`.
pub const EXCEPT_LAST_FOUR_CHARS: &str = "EXCEPT_LAST_FOUR_CHARS";
/// `_Foo` becomes `Foo`.
pub const EXCEPT_FIRST_CHAR: &str = "EXCEPT_FIRST_CHAR";

/// A naming strategy maps a type's simple name to a candidate interface name.
/// Must be a pure function of its input.
pub type StrategyFn = Arc<dyn Fn(&str) -> Result<String, String> + Send + Sync>;

/// Table of naming strategies, keyed by the identifier a request names.
#[derive(Clone)]
pub struct NamingStrategies {
    table: BTreeMap<String, StrategyFn>,
}

impl Default for NamingStrategies {
    fn default() -> Self {
        let mut strategies = Self { table: BTreeMap::new() };
        strategies.register(PREFIX_I, prefix_i);
        strategies.register(EXCEPT_LAST_FOUR_CHARS, except_last_four_chars);
        strategies.register(EXCEPT_FIRST_CHAR, except_first_char);
        strategies
    }
}

impl fmt::Debug for NamingStrategies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.table.keys()).finish()
    }
}

impl NamingStrategies {
    /// Registers a strategy, replacing any previous one under the same key.
    pub fn register<F>(&mut self, key: impl Into<String>, strategy: F)
    where
        F: Fn(&str) -> Result<String, String> + Send + Sync + 'static,
    {
        self.table.insert(key.into(), Arc::new(strategy));
    }

    pub fn apply(&self, key: &str, simple_name: &str) -> Result<String, NamingError> {
        let strategy = self.table.get(key)
            .ok_or_else(|| NamingError::UnknownStrategy(key.to_string()))?;
        strategy(simple_name).map_err(|reason| NamingError::StrategyFailed {
            strategy: key.to_string(),
            reason,
        })
    }
}

fn prefix_i(simple_name: &str) -> Result<String, String> {
    Ok(format!("I{}", simple_name))
}

fn except_last_four_chars(simple_name: &str) -> Result<String, String> {
    let len = simple_name.chars().count();
    if len < 4 {
        return Err(format!("`{}` is shorter than four characters", simple_name));
    }
    Ok(simple_name.chars().take(len - 4).collect())
}

fn except_first_char(simple_name: &str) -> Result<String, String> {
    let mut chars = simple_name.chars();
    match chars.next() {
        Some(_) => Ok(chars.collect()),
        None => Err("cannot strip a character from an empty name".to_string()),
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualifiedName {
    /// Empty for the default package.
    pub package: String,
    pub simple: String,
}

impl QualifiedName {
    /// Splits `value` on its last `.`; an unqualified value lands in `default_package`.
    pub fn parse(value: &str, default_package: &str) -> Self {
        match value.rfind('.') {
            Some(idx) => Self {
                package: value[..idx].to_string(),
                simple: value[idx + 1..].to_string(),
            },
            None => Self {
                package: default_package.to_string(),
                simple: value.to_string(),
            },
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            f.write_str(&self.simple)
        } else {
            write!(f, "{}.{}", self.package, self.simple)
        }
    }
}

/// Computes the name of the interface generated for `ty`.
///
/// An explicit `value` on the request wins; otherwise the request's naming
/// strategy is applied to the type's simple name.
pub fn resolve(strategies: &NamingStrategies, ty: &TypeDescriptor) -> Result<QualifiedName, NamingError> {
    let request = ty.request.clone().unwrap_or_default();
    let value = candidate(strategies, ty, &request)?;

    let name = QualifiedName::parse(&value, &ty.package);
    if name.simple.is_empty() {
        return Err(NamingError::Empty);
    }

    debug!("Interface for {} will be named {}", ty.name, name);
    Ok(name)
}

fn candidate(strategies: &NamingStrategies, ty: &TypeDescriptor, request: &GenerateRequest) -> Result<String, NamingError> {
    if !request.value.is_empty() {
        return Ok(request.value.clone());
    }

    let value = strategies.apply(&request.naming_strategy, ty.simple_name())?;
    if value.is_empty() {
        return Err(NamingError::Empty);
    }
    Ok(value)
}
