//! wfc-faults CLI - regenerate and verify the fault category artifact

mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;

use wfc_faults_core::export::{self, Consistency, FaultCategoryDocument};
use wfc_faults_core::{Config, FaultCategoryCatalog, FaultCategoryGroup};

#[derive(Parser)]
#[command(name = "wfc-faults")]
#[command(about = "Fault categories for automated API testing")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "terminal")]
    output: OutputFormat,

    /// Config file (default: .wfc-faults.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite the JSON artifact from the catalog
    Regenerate,

    /// Fail if the JSON artifact differs from the catalog
    Verify,

    /// List fault categories
    List {
        /// Only show one group
        #[arg(short, long)]
        group: Option<GroupArg>,
    },

    /// Show one fault category in full
    Show {
        /// Fault category code, e.g. 100
        code: u16,
    },

    /// Export JSON Schema for the artifact
    Schema,

    /// Initialize config file
    Init,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GroupArg {
    Base,
    Security,
    Reserved,
    Custom,
}

impl From<GroupArg> for FaultCategoryGroup {
    fn from(arg: GroupArg) -> Self {
        match arg {
            GroupArg::Base => Self::Base,
            GroupArg::Security => Self::Security,
            GroupArg::Reserved => Self::Reserved,
            GroupArg::Custom => Self::Custom,
        }
    }
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    Terminal,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(3)
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<u8> {
    match cli.command {
        Commands::Regenerate => {
            let (cfg, catalog) = load(cli.config.as_deref())?;
            let outcome = export::regenerate(&catalog, &cfg.artifact)?;
            match cli.output {
                OutputFormat::Terminal => {
                    let state = if outcome.changed { "updated" } else { "unchanged" };
                    println!(
                        "{} ({state}, {} categories)",
                        outcome.path.display(),
                        outcome.categories
                    );
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
            }
            Ok(0)
        }

        Commands::Verify => {
            let (cfg, catalog) = load(cli.config.as_deref())?;
            verify(&catalog, &cfg, cli.output)
        }

        Commands::List { group } => {
            let (_, catalog) = load(cli.config.as_deref())?;
            let records: Vec<_> = match group {
                Some(g) => catalog.in_group(g.into()).collect(),
                None => catalog.sorted_by_code(),
            };
            match cli.output {
                OutputFormat::Terminal => print!("{}", render::table(&records)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
            }
            Ok(0)
        }

        Commands::Show { code } => {
            let (_, catalog) = load(cli.config.as_deref())?;
            show(&catalog, code, cli.output)
        }

        Commands::Schema => {
            println!("{}", wfc_faults_core::schema::generate_schema()?);
            Ok(0)
        }

        Commands::Init => init(),
    }
}

/// Config plus the catalog built from it, once per invocation
fn load(config: Option<&Path>) -> Result<(Config, FaultCategoryCatalog)> {
    let cfg = match config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    let catalog = cfg.catalog()?;
    Ok((cfg, catalog))
}

fn verify(catalog: &FaultCategoryCatalog, cfg: &Config, output: OutputFormat) -> Result<u8> {
    let consistency = export::check_consistency(catalog, &cfg.artifact)?;

    match output {
        OutputFormat::Terminal => match &consistency {
            Consistency::InSync => {
                println!(
                    "OK: {} matches the catalog ({} categories)",
                    cfg.artifact.display(),
                    catalog.len()
                );
            }
            Consistency::Drifted(drift) => {
                println!("FAIL: {} is out of date", cfg.artifact.display());
                println!("  {drift}");
                if let Ok(doc) = export::read_from_file(&cfg.artifact)
                    .and_then(|json| FaultCategoryDocument::parse(&json))
                {
                    let summary = render::code_changes(catalog, &doc);
                    if !summary.is_empty() {
                        println!("  {summary}");
                    }
                }
                println!("Run `wfc-faults regenerate` to update it.");
            }
        },
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&consistency)?),
    }

    Ok(if consistency.is_in_sync() { 0 } else { 1 })
}

fn show(catalog: &FaultCategoryCatalog, code: u16, output: OutputFormat) -> Result<u8> {
    let Some(record) = catalog.lookup_by_code(code) else {
        eprintln!("Unknown fault category code {code}");
        return Ok(1);
    };
    match output {
        OutputFormat::Terminal => print!("{}", render::detail(record)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
    }
    Ok(0)
}

fn init() -> Result<u8> {
    let config_path = ".wfc-faults.toml";
    if Path::new(config_path).exists() {
        eprintln!("{config_path} already exists");
        return Ok(1);
    }

    std::fs::write(config_path, Config::example())?;
    println!("Created {config_path}");
    println!("\nEdit the file to configure:");
    println!("  - artifact: where the JSON export is written");
    println!("  - custom: your own 9xx fault categories");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path) -> Config {
        Config {
            artifact: dir.join("fault_categories.json"),
            custom: Vec::new(),
        }
    }

    #[test]
    fn verify_in_sync_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path());
        let catalog = FaultCategoryCatalog::defined().unwrap();
        export::regenerate(&catalog, &cfg.artifact).unwrap();

        assert_eq!(verify(&catalog, &cfg, OutputFormat::Terminal).unwrap(), 0);
        assert_eq!(verify(&catalog, &cfg, OutputFormat::Json).unwrap(), 0);
    }

    #[test]
    fn verify_drifted_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path());
        let catalog = FaultCategoryCatalog::defined().unwrap();
        std::fs::write(&cfg.artifact, "[]\n").unwrap();

        assert_eq!(verify(&catalog, &cfg, OutputFormat::Terminal).unwrap(), 1);
        assert_eq!(verify(&catalog, &cfg, OutputFormat::Json).unwrap(), 1);
    }

    #[test]
    fn verify_non_utf8_artifact_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path());
        let catalog = FaultCategoryCatalog::defined().unwrap();
        std::fs::write(&cfg.artifact, [0xff, 0xfe, b'[', b']']).unwrap();

        assert_eq!(verify(&catalog, &cfg, OutputFormat::Terminal).unwrap(), 1);
    }

    #[test]
    fn verify_missing_artifact_is_tool_error() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path());
        let catalog = FaultCategoryCatalog::defined().unwrap();

        let err = verify(&catalog, &cfg, OutputFormat::Terminal).unwrap_err();
        assert!(err.to_string().starts_with("Cannot read"), "{err}");
    }

    #[test]
    fn show_known_and_unknown_codes() {
        let catalog = FaultCategoryCatalog::defined().unwrap();
        assert_eq!(show(&catalog, 100, OutputFormat::Terminal).unwrap(), 0);
        assert_eq!(show(&catalog, 203, OutputFormat::Json).unwrap(), 0);
        assert_eq!(show(&catalog, 999, OutputFormat::Terminal).unwrap(), 1);
    }
}
