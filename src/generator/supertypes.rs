use std::collections::BTreeSet;
use log::debug;
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::generator::naming::{self, NamingStrategies, QualifiedName};
use crate::models::{simple_name, TypeDescriptor, TypeMetadata};

/// Computes the super-interfaces of the interface generated for `ty`.
///
/// Only the immediate superclass is consulted: if it is annotated itself, its
/// generated interface comes first. Directly implemented interfaces follow in
/// declaration order, minus those sharing the generated interface's simple
/// name and those on the configured ignore-list.
pub fn resolve<M: TypeMetadata + ?Sized>(
    metadata: &M,
    strategies: &NamingStrategies,
    config: &GeneratorConfig,
    ty: &TypeDescriptor,
    name: &QualifiedName,
) -> Result<Vec<String>, GenerateError> {
    let mut supertypes = Vec::with_capacity(ty.interfaces.len() + 1);

    if let Some(parent) = annotated_parent(metadata, ty) {
        let parent_name = naming::resolve(strategies, parent).map_err(|source| GenerateError::Naming {
            type_name: parent.name.clone(),
            location: parent.location.clone(),
            source,
        })?;
        debug!("{} extends annotated {}, inheriting {}", ty.name, parent.name, parent_name);
        supertypes.push(parent_name.to_string());
    }

    // Matches on simple names, so a same-named interface from another package is skipped too.
    let mut skipped: BTreeSet<&str> = config.ignored_interfaces.iter()
        .map(String::as_str)
        .collect();
    skipped.insert(&name.simple);

    for interface in &ty.interfaces {
        if skipped.contains(simple_name(interface)) {
            debug!("Skipping super interface {} of {}", interface, ty.name);
            continue;
        }
        supertypes.push(interface.clone());
    }

    Ok(supertypes)
}

fn annotated_parent<'a, M: TypeMetadata + ?Sized>(metadata: &'a M, ty: &TypeDescriptor) -> Option<&'a TypeDescriptor> {
    let superclass = ty.superclass.as_deref()?;
    metadata.lookup(superclass).filter(|f| f.request.is_some())
}
