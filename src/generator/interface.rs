use serde::Serialize;
use crate::generator::constants::Constant;
use crate::generator::methods::MethodSignature;
use crate::generator::naming::QualifiedName;

/// A public interface declaration, ready to be emitted.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedInterface {
    pub name: QualifiedName,
    pub type_parameters: Vec<String>,
    pub super_interfaces: Vec<String>,
    pub methods: Vec<MethodSignature>,
    pub constants: Vec<Constant>,
}

pub fn assemble(
    name: QualifiedName,
    type_parameters: &[String],
    super_interfaces: Vec<String>,
    methods: Vec<MethodSignature>,
    constants: Vec<Constant>,
) -> GeneratedInterface {
    GeneratedInterface {
        name,
        type_parameters: type_parameters.to_vec(),
        super_interfaces,
        methods,
        constants,
    }
}
