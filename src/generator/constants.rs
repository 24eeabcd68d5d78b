use serde::Serialize;
use crate::generator::methods::MethodSignature;

const SETTER_PREFIX: &str = "set";

/// A string constant holding a property identifier.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Constant {
    pub name: String,
    pub value: String,
}

/// `setFooBar` is setter-shaped, `set` and `settle` are not.
pub fn is_setter(name: &str) -> bool {
    name.strip_prefix(SETTER_PREFIX)
        .and_then(|f| f.chars().next())
        .map_or(false, char::is_uppercase)
}

/// One constant per setter: `setFooBar` yields `FooBar = "fooBar"`.
pub fn derive_constants(methods: &[MethodSignature]) -> Vec<Constant> {
    methods.iter()
        .filter_map(|f| f.name.strip_prefix(SETTER_PREFIX).filter(|_| is_setter(&f.name)))
        .map(|name| Constant {
            name: name.to_string(),
            value: property_id(name),
        })
        .collect()
}

fn property_id(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
