use proc_macro2::TokenStream;
use quote::quote;

/// Java library types that have a direct Rust counterpart.
pub enum KnownType {
    Boolean,
    Byte,
    Character,
    Double,
    Float,
    Integer,
    List,
    Long,
    Map,
    Object,
    Set,
    Short,
    String,
}

impl KnownType {
    pub fn from_str<S: AsRef<str>>(s: S) -> Option<Self> {
        let s = s.as_ref();
        let s = s.strip_prefix("java.lang.")
            .or_else(|| s.strip_prefix("java.util."))
            .unwrap_or(s);

        match s {
            "Boolean" => Some(Self::Boolean),
            "Byte" => Some(Self::Byte),
            "Character" => Some(Self::Character),
            "Double" => Some(Self::Double),
            "Float" => Some(Self::Float),
            "Integer" => Some(Self::Integer),
            "List" | "ArrayList" | "LinkedList" | "Collection" => Some(Self::List),
            "Long" => Some(Self::Long),
            "Map" | "HashMap" => Some(Self::Map),
            "Object" => Some(Self::Object),
            "Set" | "HashSet" => Some(Self::Set),
            "Short" => Some(Self::Short),
            "String" | "CharSequence" => Some(Self::String),
            _ => None
        }
    }

    pub fn to_tokens(&self) -> TokenStream {
        match self {
            Self::Boolean => quote!(bool),
            Self::Byte => quote!(i8),
            Self::Character => quote!(u16),
            Self::Double => quote!(f64),
            Self::Float => quote!(f32),
            Self::Integer => quote!(i32),
            Self::List => quote!(std::vec::Vec),
            Self::Long => quote!(i64),
            Self::Map => quote!(std::collections::HashMap),
            Self::Object => quote!(std::boxed::Box<dyn std::any::Any>),
            Self::Set => quote!(std::collections::HashSet),
            Self::Short => quote!(i16),
            Self::String => quote!(std::string::String),
        }
    }

    /// Whether Java generic arguments carry over to the Rust type.
    pub fn is_generic(&self) -> bool {
        matches!(self, Self::List | Self::Map | Self::Set)
    }
}

/// Java primitive types, `void` included.
pub fn primitive(ty: &str) -> Option<TokenStream> {
    match ty {
        "void" => Some(quote!(())),
        "boolean" => Some(quote!(bool)),
        "byte" => Some(quote!(i8)),
        "char" => Some(quote!(u16)),
        "short" => Some(quote!(i16)),
        "int" => Some(quote!(i32)),
        "long" => Some(quote!(i64)),
        "float" => Some(quote!(f32)),
        "double" => Some(quote!(f64)),
        _ => None
    }
}
