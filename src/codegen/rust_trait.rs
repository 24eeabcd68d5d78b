use convert_case::{Case, Casing};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use crate::codegen::known_types::{self, KnownType};
use crate::error::RenderError;
use crate::generator::interface::GeneratedInterface;
use crate::generator::methods::MethodSignature;

/// Renders a generated interface as a Rust trait.
pub fn gen_interface(def: &GeneratedInterface) -> Result<TokenStream, RenderError> {
    let name_ident = ident(&rust_name(&def.name.simple, None))?;
    let trait_vars = def.type_parameters.iter()
        .map(|f| type_var(f).to_string())
        .collect::<Vec<_>>();
    let generics = gen_generics(&trait_vars)?;

    let supertraits = def.super_interfaces.iter()
        .map(|f| type_tokens(f))
        .collect::<Result<Vec<_>, _>>()?;
    let bounds = if supertraits.is_empty() {
        quote!()
    } else {
        quote!(: #(#supertraits)+*)
    };

    let constants = def.constants.iter()
        .map(|f| -> Result<TokenStream, RenderError> {
            let ident = ident(&rust_name(&f.name, Some(Case::UpperSnake)))?;
            let value = &f.value;
            Ok(quote!(const #ident: &'static str = #value;))
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Java supports overloading, Rust does not
    let mut methods = Vec::with_capacity(def.methods.len());
    let mut method_names: Vec<String> = Vec::with_capacity(def.methods.len());
    for method in &def.methods {
        let base_name = rust_name(&method.name, Some(Case::Snake));
        let mut name = base_name.clone();
        let mut index = 0;
        while method_names.contains(&name) {
            name = format!("{}_{}", base_name, index);
            index += 1;
        }

        methods.push(gen_method_signature(method, &name, &trait_vars)?);
        method_names.push(name);
    }

    Ok(quote! {
        pub trait #name_ident #generics #bounds {
            #(#constants)*
            #(#methods)*
        }
    })
}

fn gen_method_signature(method: &MethodSignature, name: &str, trait_vars: &[String]) -> Result<TokenStream, RenderError> {
    let method_ident = ident(name)?;

    // Rust does not let a method generic shadow one of the trait's
    let method_vars = method.type_parameters.iter()
        .map(|f| type_var(f).to_string())
        .collect::<Vec<_>>();
    let renames = generic_renames(&method_vars, trait_vars);
    let method_vars = method_vars.iter()
        .map(|f| rename_type_vars(f, &renames))
        .collect::<Vec<_>>();
    let generics = gen_generics(&method_vars)?;

    let mut params = vec![quote!(&self)];
    for parameter in &method.parameters {
        let param_ident = ident(&rust_name(&parameter.name, Some(Case::Snake)))?;
        let class = type_tokens(&rename_type_vars(&parameter.class, &renames))?;
        params.push(quote!(#param_ident: #class));
    }

    let return_type = if method.return_type.trim() == "void" {
        quote!()
    } else {
        let class = type_tokens(&rename_type_vars(&method.return_type, &renames))?;
        quote!(-> #class)
    };

    let docs = method.thrown_types.iter()
        .map(|f| {
            let doc = format!(" Throws `{}`.", f);
            quote!(#[doc = #doc])
        })
        .collect::<Vec<_>>();

    Ok(quote! {
        #(#docs)*
        fn #method_ident #generics (#(#params),*) #return_type;
    })
}

fn gen_generics(vars: &[String]) -> Result<TokenStream, RenderError> {
    if vars.is_empty() {
        return Ok(quote!());
    }

    let params = vars.iter()
        .map(|f| ident(f))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(quote!(<#(#params),*>))
}

/// Bounds are dropped: `T extends Comparable<T>` becomes `T`.
fn type_var(type_parameter: &str) -> &str {
    type_parameter.split_whitespace().next().unwrap_or_default()
}

/// New names for the method generics that collide with the trait's: `T` becomes `T0`.
fn generic_renames(method_vars: &[String], trait_vars: &[String]) -> Vec<(String, String)> {
    let mut taken = trait_vars.iter()
        .chain(method_vars)
        .cloned()
        .collect::<Vec<_>>();

    let mut renames = Vec::new();
    for var in method_vars.iter().filter(|f| trait_vars.contains(f)) {
        let mut index = 0;
        let mut renamed = format!("{}{}", var, index);
        while taken.contains(&renamed) {
            index += 1;
            renamed = format!("{}{}", var, index);
        }
        taken.push(renamed.clone());
        renames.push((var.clone(), renamed));
    }
    renames
}

/// Substitutes renamed type variables in a Java type reference. Qualified
/// names such as `a.T` are left alone.
fn rename_type_vars(ty: &str, renames: &[(String, String)]) -> String {
    if renames.is_empty() {
        return ty.to_string();
    }

    let mut out = String::with_capacity(ty.len());
    let mut word = String::new();
    for c in ty.chars() {
        if c.is_alphanumeric() || matches!(c, '_' | '$' | '.') {
            word.push(c);
        } else {
            push_renamed(&mut out, &word, renames);
            word.clear();
            out.push(c);
        }
    }
    push_renamed(&mut out, &word, renames);
    out
}

fn push_renamed(out: &mut String, word: &str, renames: &[(String, String)]) {
    let (var, suffix) = match word.strip_suffix("...") {
        Some(var) => (var, "..."),
        None => (word, ""),
    };
    match renames.iter().find(|(from, _)| from == var) {
        Some((_, to)) => out.push_str(to),
        None => out.push_str(var),
    }
    out.push_str(suffix);
}

/// Maps a Java type reference to a Rust type.
pub fn type_tokens(ty: &str) -> Result<TokenStream, RenderError> {
    let ty = ty.trim();
    if let Some(element) = ty.strip_suffix("[]").or_else(|| ty.strip_suffix("...")) {
        let element = type_tokens(element)?;
        return Ok(quote!(std::vec::Vec<#element>));
    }
    if ty.starts_with('?') {
        return Err(RenderError::UnsupportedType(ty.to_string()));
    }

    let (base, args) = split_generics(ty)?;
    if let Some(primitive) = known_types::primitive(base) {
        return if args.is_empty() {
            Ok(primitive)
        } else {
            Err(RenderError::UnsupportedType(ty.to_string()))
        };
    }

    let args = args.into_iter()
        .map(type_tokens)
        .collect::<Result<Vec<_>, _>>()?;

    let base = match KnownType::from_str(base) {
        Some(known) if !known.is_generic() => return Ok(known.to_tokens()),
        Some(known) => known.to_tokens(),
        None => {
            let path = syn::parse_str::<syn::Path>(&base.replace('.', "::"))
                .map_err(|_| RenderError::UnsupportedType(ty.to_string()))?;
            quote!(#path)
        }
    };

    if args.is_empty() {
        Ok(base)
    } else {
        Ok(quote!(#base<#(#args),*>))
    }
}

/// `Map<K, List<V>>` splits into `Map` and `["K", "List<V>"]`.
fn split_generics(ty: &str) -> Result<(&str, Vec<&str>), RenderError> {
    let open = match ty.find('<') {
        Some(idx) => idx,
        None => return Ok((ty, Vec::new())),
    };
    let inner = ty[open + 1..].strip_suffix('>')
        .ok_or_else(|| RenderError::UnsupportedType(ty.to_string()))?;

    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth.checked_sub(1)
                    .ok_or_else(|| RenderError::UnsupportedType(ty.to_string()))?;
            }
            ',' if depth == 0 => {
                args.push(inner[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(RenderError::UnsupportedType(ty.to_string()));
    }
    args.push(inner[start..].trim());

    Ok((ty[..open].trim(), args))
}

/// Turns a Java name into one Rust accepts: `$` becomes `_`, and names Rust
/// reserves outright (`self`, `crate`, ...) get a trailing `_`.
pub fn rust_name(name: &str, case: Option<Case>) -> String {
    let name = name.replace('$', "_");
    let name = match case {
        Some(case) => name.to_case(case),
        None => name,
    };

    match name.as_str() {
        "self" | "Self" | "super" | "crate" | "_" => format!("{}_", name),
        _ => name,
    }
}

/// A Rust identifier for `name`, raw if `name` is a keyword.
pub fn ident(name: &str) -> Result<Ident, RenderError> {
    let mut chars = name.chars();
    let valid = chars.next().map_or(false, |c| c == '_' || c.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric());
    if !valid || matches!(name, "_" | "self" | "Self" | "super" | "crate") {
        return Err(RenderError::InvalidIdentifier(name.to_string()));
    }

    if syn::parse_str::<Ident>(name).is_ok() {
        Ok(format_ident!("{}", name))
    } else {
        Ok(format_ident!("r#{}", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;
    use crate::generator::constants::Constant;
    use crate::generator::naming::QualifiedName;
    use crate::models::Parameter;

    fn method(name: &str, params: &[(&str, &str)], return_type: &str) -> MethodSignature {
        MethodSignature {
            name: name.to_string(),
            type_parameters: Vec::new(),
            return_type: return_type.to_string(),
            parameters: params.iter()
                .map(|(name, class)| Parameter {
                    name: name.to_string(),
                    class: class.to_string(),
                    modifiers: Vec::new(),
                    annotations: Vec::new(),
                })
                .collect(),
            thrown_types: Vec::new(),
            is_var_args: false,
        }
    }

    fn interface() -> GeneratedInterface {
        GeneratedInterface {
            name: QualifiedName { package: "com.example".to_string(), simple: "IUserService".to_string() },
            type_parameters: vec!["T extends Comparable<T>".to_string()],
            super_interfaces: vec!["com.example.IBase".to_string(), "java.io.Serializable".to_string()],
            methods: vec![
                method("getDisplayName", &[], "String"),
                method("setDisplayName", &[("displayName", "String")], "void"),
                method("find", &[("id", "long")], "T"),
                method("find", &[("name", "String")], "T"),
            ],
            constants: vec![Constant { name: "DisplayName".to_string(), value: "displayName".to_string() }],
        }
    }

    #[test]
    fn trait_shape() {
        let tokens = gen_interface(&interface()).unwrap();
        let item: syn::ItemTrait = syn::parse2(tokens).unwrap();

        assert_eq!(item.ident, "IUserService");
        assert_eq!(item.generics.params.len(), 1);
        assert_eq!(item.supertraits.len(), 2);

        let mut consts = Vec::new();
        let mut fns = Vec::new();
        for trait_item in &item.items {
            match trait_item {
                syn::TraitItem::Const(c) => consts.push(c.ident.to_string()),
                syn::TraitItem::Method(m) => fns.push(m.sig.ident.to_string()),
                _ => panic!("unexpected trait item"),
            }
        }
        assert_eq!(consts, vec!["DISPLAY_NAME"]);
        assert_eq!(fns, vec!["get_display_name", "set_display_name", "find", "find_0"]);
    }

    #[test]
    fn thrown_types_become_docs() {
        let mut def = interface();
        def.methods = vec![method("load", &[], "void")];
        def.methods[0].thrown_types = vec!["java.io.IOException".to_string()];

        let item: syn::ItemTrait = syn::parse2(gen_interface(&def).unwrap()).unwrap();
        match &item.items[1] {
            syn::TraitItem::Method(m) => assert_eq!(m.attrs.len(), 1),
            _ => panic!("expected a method"),
        }
    }

    #[test]
    fn maps_java_types() {
        assert_eq!(type_tokens("int").unwrap().to_string(), quote!(i32).to_string());
        assert_eq!(type_tokens("java.lang.String").unwrap().to_string(), quote!(std::string::String).to_string());
        assert_eq!(
            type_tokens("java.util.List<Integer>").unwrap().to_string(),
            quote!(std::vec::Vec<i32>).to_string()
        );
        assert_eq!(
            type_tokens("byte[]").unwrap().to_string(),
            quote!(std::vec::Vec<i8>).to_string()
        );
        assert_eq!(
            type_tokens("String...").unwrap().to_string(),
            quote!(std::vec::Vec<std::string::String>).to_string()
        );

        let expected = syn::parse_str::<syn::Path>("com::example::Widget").unwrap();
        assert_eq!(
            type_tokens("com.example.Widget").unwrap().to_string(),
            expected.to_token_stream().to_string()
        );
    }

    #[test]
    fn nested_generics_are_split_at_top_level() {
        let (base, args) = split_generics("Map<K, List<V>>").unwrap();
        assert_eq!(base, "Map");
        assert_eq!(args, vec!["K", "List<V>"]);
    }

    #[test]
    fn wildcards_are_unsupported() {
        assert_eq!(
            type_tokens("java.util.List<? extends Number>").unwrap_err(),
            RenderError::UnsupportedType("? extends Number".to_string())
        );
        assert!(type_tokens("java.util.List<String").is_err());
    }

    #[test]
    fn keywords_become_raw_identifiers() {
        assert_eq!(ident("type").unwrap().to_string(), "r#type");
        assert_eq!(ident("name").unwrap().to_string(), "name");
        assert!(ident("self").is_err());
        assert!(ident("has$dollar").is_err());
        assert!(ident("").is_err());
    }

    fn param_names(m: &syn::TraitItemMethod) -> Vec<String> {
        m.sig.inputs.iter()
            .filter_map(|f| match f {
                syn::FnArg::Typed(pat) => Some(pat.pat.to_token_stream().to_string()),
                syn::FnArg::Receiver(_) => None,
            })
            .collect()
    }

    #[test]
    fn java_only_names_are_mapped() {
        let mut def = interface();
        def.constants = Vec::new();
        def.methods = vec![
            method("merge", &[("self", "a.Foo"), ("crate", "int")], "void"),
            method("get$Value", &[], "int"),
            method("resize", &[("größe", "int")], "void"),
        ];

        let item: syn::ItemTrait = syn::parse2(gen_interface(&def).unwrap()).unwrap();
        let fns = item.items.iter()
            .map(|f| match f {
                syn::TraitItem::Method(m) => m,
                _ => panic!("expected a method"),
            })
            .collect::<Vec<_>>();

        assert_eq!(fns[0].sig.ident, "merge");
        assert_eq!(param_names(fns[0]), vec!["self_", "crate_"]);
        assert_eq!(fns[1].sig.ident, "get_value");
        assert_eq!(param_names(fns[2]), vec!["größe"]);
    }

    #[test]
    fn rust_names() {
        assert_eq!(rust_name("self", Some(Case::Snake)), "self_");
        assert_eq!(rust_name("Self", None), "Self_");
        assert_eq!(rust_name("get$Value", Some(Case::Snake)), "get_value");
        assert_eq!(rust_name("type", Some(Case::Snake)), "type");
    }

    #[test]
    fn shadowing_method_generics_are_renamed() {
        let mut def = interface();
        def.type_parameters = vec!["T".to_string()];
        def.super_interfaces = Vec::new();
        def.constants = Vec::new();
        let mut map = method("map", &[("x", "T"), ("rest", "T..."), ("other", "a.T")], "java.util.List<T>");
        map.type_parameters = vec!["T extends Comparable<T>".to_string(), "T0".to_string()];
        def.methods = vec![map];

        let item: syn::ItemTrait = syn::parse2(gen_interface(&def).unwrap()).unwrap();
        let m = match &item.items[0] {
            syn::TraitItem::Method(m) => m,
            _ => panic!("expected a method"),
        };

        let trait_generics = item.generics.params.iter()
            .map(|f| f.to_token_stream().to_string())
            .collect::<Vec<_>>();
        let method_generics = m.sig.generics.params.iter()
            .map(|f| f.to_token_stream().to_string())
            .collect::<Vec<_>>();
        assert_eq!(trait_generics, vec!["T"]);
        assert_eq!(method_generics, vec!["T1", "T0"]);

        let types = m.sig.inputs.iter()
            .filter_map(|f| match f {
                syn::FnArg::Typed(pat) => Some(pat.ty.to_token_stream().to_string()),
                syn::FnArg::Receiver(_) => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(types[0], quote!(T1).to_string());
        assert_eq!(types[1], quote!(std::vec::Vec<T1>).to_string());
        assert_eq!(types[2], syn::parse_str::<syn::Path>("a::T").unwrap().to_token_stream().to_string());

        match &m.sig.output {
            syn::ReturnType::Type(_, ty) => {
                assert_eq!(ty.to_token_stream().to_string(), quote!(std::vec::Vec<T1>).to_string());
            }
            syn::ReturnType::Default => panic!("expected a return type"),
        }
    }

    #[test]
    fn renames_skip_taken_names() {
        let renames = generic_renames(
            &["T".to_string(), "T0".to_string(), "U".to_string()],
            &["T".to_string()],
        );
        assert_eq!(renames, vec![("T".to_string(), "T1".to_string())]);
        assert_eq!(rename_type_vars("Map<T, a.T>[]", &renames), "Map<T1, a.T>[]");
    }
}
