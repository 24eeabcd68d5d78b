use std::fs;
use std::path::Path;
use proc_macro2::TokenStream;
use quote::quote;
use crate::codegen::rust_trait::ident;
use crate::error::EmitError;

/// Generates the `mod.rs` of a directory of generated traits: files are
/// re-exported, subdirectories become public modules.
pub fn gen_mod(path: &Path) -> Result<TokenStream, EmitError> {
    let mod_tokens = get_submods(path)?.iter()
        .map(gen_entry)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(quote! {
        #(#mod_tokens)*
    })
}

fn gen_entry(entry: &Entry) -> Result<TokenStream, EmitError> {
    let ident = ident(&entry.name).map_err(|source| EmitError::Render {
        name: entry.name.clone(),
        source,
    })?;

    if entry.file {
        Ok(quote! {
            mod #ident;
            pub use #ident::*;
        })
    } else {
        Ok(quote! {
            pub mod #ident;
        })
    }
}

struct Entry {
    name: String,
    file: bool
}

fn get_submods(path: &Path) -> Result<Vec<Entry>, EmitError> {
    let io_err = |source| EmitError::Io { path: path.to_path_buf(), source };

    let mut entries = Vec::new();
    for f in fs::read_dir(path).map_err(io_err)? {
        let f = f.map_err(io_err)?;
        let file = f.file_type().map_err(io_err)?.is_file();
        let name = f.file_name().to_string_lossy().into_owned();

        let name = if file {
            match name.strip_suffix(".rs") {
                Some("mod") | None => continue,
                Some(stem) => stem.to_string(),
            }
        } else {
            name
        };
        entries.push(Entry { name, file });
    }

    // read_dir order is platform dependent
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
