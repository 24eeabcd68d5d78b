use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::exit;
use anyhow::{Context, Result};
use log::{debug, error, info};
use structopt::StructOpt;
use interfacegen::{FileEmitter, GenerateError, Generator, GeneratorConfig, Input, NamingStrategies, OutputFormat};

#[derive(StructOpt)]
struct Opt {
    /// JSON type metadata of the pass
    #[structopt(short, long, parse(from_os_str))]
    input_file: PathBuf,

    #[structopt(short, long, parse(from_os_str))]
    output_dir: PathBuf,

    /// java, rust or json
    #[structopt(short, long, default_value = "java")]
    format: OutputFormat,

    /// JSON file overriding the ignored methods and interfaces
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", format!("{}=INFO", env!("CARGO_PKG_NAME")));
    }
    env_logger::init();

    let opts: Opt = Opt::from_args();
    info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(opts) {
        match e.downcast_ref::<GenerateError>() {
            Some(generate) => match generate.location() {
                Some(location) => error!("{}: {}", location, generate),
                None => error!("{}", generate),
            },
            None => error!("{:#}", e),
        }
        exit(1);
    }
}

fn run(opts: Opt) -> Result<()> {
    let config = match &opts.config {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load config {:?}", path))?,
        None => GeneratorConfig::default(),
    };

    debug!("Reading input");
    let f = File::open(&opts.input_file)
        .with_context(|| format!("Failed to open input file {:?}", opts.input_file))?;
    let input: Input = serde_json::from_reader(BufReader::new(f))
        .context("Failed to deserialize input")?;

    let generator = Generator::new(config, NamingStrategies::default());
    let mut emitter = FileEmitter::new(&opts.output_dir, opts.format);
    let summary = generator.run_pass(&input, &mut emitter)?;

    info!("Generated {} interfaces in {:?}", summary.emitted.len(), opts.output_dir);
    Ok(())
}
