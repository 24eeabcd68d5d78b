//! Derives interface declarations from the public member methods of
//! annotated classes.
//!
//! A host hands over the type metadata of one generation pass through
//! [`TypeMetadata`]; [`Generator::run_pass`] turns every annotated type into a
//! [`GeneratedInterface`] and passes it to an [`Emitter`].

pub mod codegen;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
mod fmt;

pub use codegen::{CollectingEmitter, Emitter, FileEmitter, OutputFormat};
pub use config::GeneratorConfig;
pub use error::{ConfigError, EmitError, GenerateError, NamingError, RenderError};
pub use generator::constants::Constant;
pub use generator::interface::GeneratedInterface;
pub use generator::methods::MethodSignature;
pub use generator::naming::{NamingStrategies, QualifiedName};
pub use generator::{Generator, PassSummary};
pub use models::{Input, TypeDescriptor, TypeMetadata};
