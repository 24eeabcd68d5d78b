use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use serde::Deserialize;
use crate::error::ConfigError;

/// Methods injected by a dynamic object model base class. They are runtime
/// plumbing, not part of the type's API.
const IGNORED_METHODS: &[&str] = &[
    "<init>",
    "getMetaClass",
    "setMetaClass",
    "invokeMethod",
    "getProperty",
    "setProperty",
];

/// Marker interfaces the host runtime adds to every compiled class.
const IGNORED_INTERFACES: &[&str] = &["GroovyObject"];

/// Read-only settings shared by every type of a pass.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    #[serde(rename(deserialize = "ignoredMethods"))]
    pub ignored_methods: BTreeSet<String>,
    /// Matched against simple names.
    #[serde(rename(deserialize = "ignoredInterfaces"))]
    pub ignored_interfaces: BTreeSet<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            ignored_methods: IGNORED_METHODS.iter().map(|f| f.to_string()).collect(),
            ignored_interfaces: IGNORED_INTERFACES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl GeneratorConfig {
    /// Reads a JSON config file. Keys missing from the file keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let f = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(f))?;
        Ok(config)
    }
}
