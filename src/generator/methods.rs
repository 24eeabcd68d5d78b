use log::debug;
use serde::Serialize;
use crate::config::GeneratorConfig;
use crate::models::{MemberKind, MethodDescriptor, MethodMarker, Parameter, TypeDescriptor, Visibility};

/// An abstract method signature copied from the source type.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MethodSignature {
    pub name: String,
    pub type_parameters: Vec<String>,
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    pub thrown_types: Vec<String>,
    pub is_var_args: bool,
}

impl From<&MethodDescriptor> for MethodSignature {
    fn from(method: &MethodDescriptor) -> Self {
        Self {
            name: method.name.clone(),
            type_parameters: method.type_parameters.clone(),
            return_type: method.return_type.clone(),
            parameters: method.parameters.clone(),
            thrown_types: method.thrown_types.clone(),
            is_var_args: method.is_var_args,
        }
    }
}

/// Public, non-static member methods of `ty` that are neither excluded nor
/// object model plumbing, in declaration order.
pub fn select(config: &GeneratorConfig, ty: &TypeDescriptor) -> Vec<MethodSignature> {
    ty.methods.iter()
        .filter(|f| is_exposed(config, f))
        .map(MethodSignature::from)
        .collect()
}

fn is_exposed(config: &GeneratorConfig, method: &MethodDescriptor) -> bool {
    let exposed = method.kind == MemberKind::Method
        && method.visibility == Visibility::Public
        && !method.is_static
        && !method.markers.contains(&MethodMarker::NotExposed)
        && !config.ignored_methods.contains(&method.name);

    if !exposed {
        debug!("Not exposing {}", method.name);
    }
    exposed
}
