#![deny(unsafe_code)]
//! CLI binary for the glboot bootstrap layer.
//!
//! Subcommands:
//! - `probe`: acquire a context from a simulated host and report what
//!   normalization installed
//! - `list`: print built-in host presets and the supported extensions

mod error;
mod logging;

use clap::{Parser, Subcommand};
use error::CliError;
use glboot_core::defaults::ADD_EXTENSIONS_TO_CONTEXT;
use glboot_core::{
    ContextAcquirer, ContextAttributes, ContextReport, ExistingMember, InstalledMember,
    SUPPORTED_EXTENSIONS,
};
use glboot_hosts::{HostProfile, Preset, SimSurface};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "glboot", about = "Rendering-context bootstrap probe")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Acquire a context from a simulated host and report the result.
    Probe {
        /// Built-in host preset (see `list`).
        #[arg(short, long, default_value = "webgl2-desktop")]
        preset: String,

        /// Host profile JSON file; overrides --preset.
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Only try WebGL1 context kinds.
        #[arg(long)]
        webgl1: bool,

        /// Skip extension normalization.
        #[arg(long)]
        no_extensions: bool,

        /// Defaults to merge before acquiring, as a JSON object.
        #[arg(long, default_value = "{}")]
        defaults: String,

        /// Context creation attributes as a JSON object.
        #[arg(long)]
        attributes: Option<String>,
    },
    /// List built-in host presets and supported extensions.
    List,
}

fn load_profile(preset: &str, profile: Option<PathBuf>) -> Result<HostProfile, CliError> {
    match profile {
        Some(path) => Ok(HostProfile::from_path(&path)?),
        None => Ok(Preset::from_name(preset)?),
    }
}

fn render_report(report: &ContextReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "context: {} ({} native members)",
        report.kind, report.native_members
    );

    if report.enabled_extensions.is_empty() {
        let _ = writeln!(out, "extensions: none");
    } else {
        let _ = writeln!(out, "extensions: {}", report.enabled_extensions.join(", "));
    }

    let _ = writeln!(out, "installed: {}", report.installed.len());
    for (name, member) in &report.installed {
        match member {
            InstalledMember::Function => {
                let _ = writeln!(out, "  {name}()");
            }
            InstalledMember::Constant(value) => {
                let _ = writeln!(out, "  {name} = {value:#06x}");
            }
        }
    }

    if !report.conflicts.is_empty() {
        let _ = writeln!(out, "conflicts: {}", report.conflicts.len());
        for c in &report.conflicts {
            let kept = match c.existing {
                ExistingMember::Constant(v) => format!("{v:#06x}"),
                ExistingMember::Function => "function".to_string(),
            };
            let _ = writeln!(
                out,
                "  {}: kept {kept}, ignored {} = {:#06x} ({})",
                c.name, c.key, c.incoming, c.extension
            );
        }
    }
    out
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let presets = Preset::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "presets": presets,
                    "extensions": SUPPORTED_EXTENSIONS,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Presets:");
                for name in presets {
                    println!("  {name}");
                }
                println!("Extensions:");
                for name in SUPPORTED_EXTENSIONS {
                    println!("  {name}");
                }
            }
        }
        Command::Probe {
            preset,
            profile,
            webgl1,
            no_extensions,
            defaults,
            attributes,
        } => {
            let profile = load_profile(&preset, profile)?;

            let defaults: serde_json::Value = serde_json::from_str(&defaults)
                .map_err(|e| CliError::Input(format!("invalid --defaults JSON: {e}")))?;
            let mut acquirer = ContextAcquirer::default();
            acquirer.set_defaults(&defaults)?;
            if no_extensions {
                let off = serde_json::json!({ (ADD_EXTENSIONS_TO_CONTEXT): false });
                acquirer.set_defaults(&off)?;
            }

            let attributes = attributes
                .as_deref()
                .map(ContextAttributes::from_json)
                .transpose()?;

            let mut surface = SimSurface::new(profile);
            let context = if webgl1 {
                acquirer.get_webgl_context(&mut surface, attributes.as_ref())
            } else {
                acquirer.get_context(&mut surface, attributes.as_ref())
            };

            let Some(context) = context else {
                let tried: Vec<&str> = surface.queries().iter().map(|k| k.as_str()).collect();
                return Err(CliError::Bootstrap(format!(
                    "no supported rendering context (tried {})",
                    tried.join(", ")
                )));
            };

            let report = ContextReport::from_context(&context);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_report(&report));
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
