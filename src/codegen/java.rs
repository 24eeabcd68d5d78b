use crate::generator::constants::Constant;
use crate::generator::interface::GeneratedInterface;
use crate::generator::methods::MethodSignature;
use crate::models::Parameter;

const INDENT: &str = "  ";

/// Renders a generated interface as Java source.
///
/// Implicit modifiers are left out: constants are written without
/// `public static final`, methods without `public abstract`.
pub fn gen_interface(def: &GeneratedInterface) -> String {
    let mut out = String::new();
    if !def.name.package.is_empty() {
        out.push_str(&format!("package {};\n\n", def.name.package));
    }

    out.push_str(&format!("public interface {}", def.name.simple));
    if !def.type_parameters.is_empty() {
        out.push_str(&format!("<{}>", def.type_parameters.join(", ")));
    }
    if !def.super_interfaces.is_empty() {
        out.push_str(&format!(" extends {}", def.super_interfaces.join(", ")));
    }
    out.push_str(" {\n");

    let constants = def.constants.iter().map(gen_constant).collect::<Vec<_>>();
    let methods = def.methods.iter().map(gen_method).collect::<Vec<_>>();
    if !constants.is_empty() {
        out.push_str(&constants.concat());
    }
    for method in methods {
        out.push('\n');
        out.push_str(&method);
    }

    out.push_str("}\n");
    out
}

fn gen_constant(constant: &Constant) -> String {
    format!("{}String {} = {};\n", INDENT, constant.name, string_literal(&constant.value))
}

fn gen_method(method: &MethodSignature) -> String {
    let mut out = String::from(INDENT);
    if !method.type_parameters.is_empty() {
        out.push_str(&format!("<{}> ", method.type_parameters.join(", ")));
    }

    let last = method.parameters.len().saturating_sub(1);
    let params = method.parameters.iter()
        .enumerate()
        .map(|(idx, f)| gen_parameter(f, method.is_var_args && idx == last))
        .collect::<Vec<_>>();
    out.push_str(&format!("{} {}({})", method.return_type, method.name, params.join(", ")));

    if !method.thrown_types.is_empty() {
        out.push_str(&format!(" throws {}", method.thrown_types.join(", ")));
    }
    out.push_str(";\n");
    out
}

fn gen_parameter(parameter: &Parameter, var_args: bool) -> String {
    let mut parts = Vec::with_capacity(parameter.annotations.len() + parameter.modifiers.len() + 2);
    for annotation in &parameter.annotations {
        if annotation.starts_with('@') {
            parts.push(annotation.clone());
        } else {
            parts.push(format!("@{}", annotation));
        }
    }
    parts.extend(parameter.modifiers.iter().cloned());

    let class = match parameter.class.strip_suffix("[]") {
        Some(element) if var_args => format!("{}...", element),
        _ => parameter.class.clone(),
    };
    parts.push(class);
    parts.push(parameter.name.clone());
    parts.join(" ")
}

fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\t' => literal.push_str("\\t"),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
