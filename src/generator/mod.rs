use std::collections::BTreeSet;
use log::{debug, info};
use crate::codegen::Emitter;
use crate::config::GeneratorConfig;
use crate::error::{EmitError, GenerateError};
use crate::models::{TypeDescriptor, TypeKind, TypeMetadata};

pub mod constants;
pub mod interface;
pub mod methods;
pub mod naming;
pub mod supertypes;

use interface::GeneratedInterface;
use naming::{NamingStrategies, QualifiedName};

/// Derives interfaces from annotated types.
///
/// Holds only read-only state, so one generator can run any number of
/// independent passes.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
    strategies: NamingStrategies,
}

/// Interfaces emitted by a successful pass, in emission order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub emitted: Vec<QualifiedName>,
}

impl Generator {
    pub fn new(config: GeneratorConfig, strategies: NamingStrategies) -> Self {
        Self { config, strategies }
    }

    /// Registry to inject caller-supplied naming strategies into.
    pub fn strategies_mut(&mut self) -> &mut NamingStrategies {
        &mut self.strategies
    }

    /// Builds the interface for a single annotated type.
    pub fn generate<M: TypeMetadata + ?Sized>(&self, metadata: &M, ty: &TypeDescriptor) -> Result<GeneratedInterface, GenerateError> {
        check_target(ty)?;

        let name = naming::resolve(&self.strategies, ty).map_err(|source| GenerateError::Naming {
            type_name: ty.name.clone(),
            location: ty.location.clone(),
            source,
        })?;
        let super_interfaces = supertypes::resolve(metadata, &self.strategies, &self.config, ty, &name)?;
        let methods = methods::select(&self.config, ty);

        let property_constants = ty.request.as_ref().map_or(false, |f| f.property_constants);
        let constants = if property_constants {
            constants::derive_constants(&methods)
        } else {
            Vec::new()
        };

        debug!(
            "{}: {} super interfaces, {} methods, {} constants",
            name, super_interfaces.len(), methods.len(), constants.len()
        );
        Ok(interface::assemble(name, &ty.type_parameters, super_interfaces, methods, constants))
    }

    /// Runs one generation pass over every annotated type of `metadata`.
    ///
    /// Types are processed in submission order. The first failure ends the
    /// pass: the types after it are left unprocessed and nothing more is
    /// emitted. Interfaces emitted before the failure stay emitted, and the
    /// emitter is still finished so its output covers them.
    pub fn run_pass<M, E>(&self, metadata: &M, emitter: &mut E) -> Result<PassSummary, GenerateError>
    where
        M: TypeMetadata + ?Sized,
        E: Emitter + ?Sized,
    {
        let emitted = self.emit_all(metadata, emitter);
        let finished = emitter.finish();

        // A generation failure takes precedence over a failure to finish
        let summary = emitted?;
        finished?;
        Ok(summary)
    }

    fn emit_all<M, E>(&self, metadata: &M, emitter: &mut E) -> Result<PassSummary, GenerateError>
    where
        M: TypeMetadata + ?Sized,
        E: Emitter + ?Sized,
    {
        let mut summary = PassSummary::default();
        let mut seen = BTreeSet::new();

        for ty in metadata.annotated() {
            let interface = self.generate(metadata, ty)?;

            if !seen.insert(interface.name.clone()) {
                return Err(EmitError::Duplicate(interface.name.to_string()).into());
            }
            emitter.emit(&interface)?;

            info!("Generated {} from {}", interface.name, ty.name);
            summary.emitted.push(interface.name);
        }

        Ok(summary)
    }
}

fn check_target(ty: &TypeDescriptor) -> Result<(), GenerateError> {
    if ty.kind != TypeKind::Class {
        return Err(GenerateError::NotAClass {
            type_name: ty.name.clone(),
            kind: ty.kind,
            location: ty.location.clone(),
        });
    }

    if let Some(enclosing) = &ty.enclosing_type {
        return Err(GenerateError::NotTopLevel {
            type_name: ty.name.clone(),
            enclosing: enclosing.clone(),
            location: ty.location.clone(),
        });
    }

    Ok(())
}
