use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use convert_case::{Case, Casing};
use log::{debug, warn};
use crate::error::EmitError;
use crate::fmt;
use crate::generator::interface::GeneratedInterface;
use crate::generator::naming::QualifiedName;

pub mod java;
pub mod known_types;
pub mod mod_file;
pub mod rust_trait;

/// Receives each interface of a pass as soon as it is assembled.
pub trait Emitter {
    fn emit(&mut self, interface: &GeneratedInterface) -> Result<(), EmitError>;

    /// Called once at the end of every pass, including one that stopped on a failure.
    fn finish(&mut self) -> Result<(), EmitError> {
        Ok(())
    }
}

/// Keeps emitted interfaces in memory.
#[derive(Debug, Default)]
pub struct CollectingEmitter {
    pub interfaces: Vec<GeneratedInterface>,
}

impl Emitter for CollectingEmitter {
    fn emit(&mut self, interface: &GeneratedInterface) -> Result<(), EmitError> {
        self.interfaces.push(interface.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Java interface source.
    Java,
    /// Rust trait bindings.
    Rust,
    /// The generated interface model as JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "java" => Ok(Self::Java),
            "rust" => Ok(Self::Rust),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown output format `{}` (expected java, rust or json)", s)),
        }
    }
}

/// Writes one file per interface below an output directory.
#[derive(Debug)]
pub struct FileEmitter {
    output_dir: PathBuf,
    format: OutputFormat,
    // Rust module directories that need a mod.rs once the pass is done
    module_dirs: BTreeSet<PathBuf>,
}

impl FileEmitter {
    pub fn new(output_dir: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            output_dir: output_dir.into(),
            format,
            module_dirs: BTreeSet::new(),
        }
    }

    /// Where the interface named `name` is written.
    pub fn artifact_path(&self, name: &QualifiedName) -> PathBuf {
        match self.format {
            OutputFormat::Java => build_path(&self.output_dir, name, &format!("{}.java", name.simple)),
            OutputFormat::Json => build_path(&self.output_dir, name, &format!("{}.json", name.simple)),
            OutputFormat::Rust => build_path(
                &self.output_dir.join("src"),
                name,
                &format!("{}.rs", name.simple.to_case(Case::Snake)),
            ),
        }
    }

    fn render(&self, interface: &GeneratedInterface) -> Result<String, EmitError> {
        match self.format {
            OutputFormat::Java => Ok(java::gen_interface(interface)),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(interface)?;
                json.push('\n');
                Ok(json)
            }
            OutputFormat::Rust => {
                let tokens = rust_trait::gen_interface(interface)
                    .map_err(|source| EmitError::Render { name: interface.name.to_string(), source })?
                    .to_string();
                Ok(format_or_raw(tokens))
            }
        }
    }

    fn track_modules(&mut self, artifact: &Path) {
        let src_dir = self.output_dir.join("src");
        let mut dir = artifact.parent();
        while let Some(d) = dir {
            if !d.starts_with(&src_dir) {
                break;
            }
            self.module_dirs.insert(d.to_path_buf());
            dir = d.parent();
        }
    }
}

impl Emitter for FileEmitter {
    fn emit(&mut self, interface: &GeneratedInterface) -> Result<(), EmitError> {
        let contents = self.render(interface)?;
        let out_path = self.artifact_path(&interface.name);
        debug!("Writing {} to {:?}", interface.name, out_path);
        write_file(&out_path, &contents)?;

        if self.format == OutputFormat::Rust {
            self.track_modules(&out_path);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), EmitError> {
        for dir in &self.module_dirs {
            let tokens = mod_file::gen_mod(dir)?.to_string();
            let out_path = dir.join("mod.rs");
            debug!("Generating mod file {:?}", out_path);
            write_file(&out_path, &format_or_raw(tokens))?;
        }
        Ok(())
    }
}

fn build_path(root: &Path, name: &QualifiedName, file_name: &str) -> PathBuf {
    let mut out_path = root.to_path_buf();
    name.package
        .split('.')
        .filter(|f| !f.is_empty())
        .for_each(|f| out_path.push(f));
    out_path.push(file_name);
    out_path
}

fn write_file(path: &Path, contents: &str) -> Result<(), EmitError> {
    let io_err = |source| EmitError::Io { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let f = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(f);
    writer.write_all(contents.as_bytes()).map_err(io_err)?;
    writer.flush().map_err(io_err)
}

fn format_or_raw(tokens: String) -> String {
    match fmt::rustfmt(&tokens) {
        Ok(formatted) => formatted,
        Err(e) => {
            warn!("Failed to run rustfmt, writing unformatted output: {}", e);
            tokens
        }
    }
}
