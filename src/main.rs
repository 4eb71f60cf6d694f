use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use life_core::{Backend, ConfigError, Preset, SimulationDefaults};
use life_storage::format::{to_json_string, to_ron_string};

/// Default parameters for the particle-life simulation backends.
#[derive(Parser)]
#[command(name = "particle_life")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Where the record comes from: a preset plus optional override layers
#[derive(Args, Debug)]
struct Source {
    /// Named preset to start from
    #[arg(short, long, default_value = "canonical")]
    preset: Preset,

    /// Override file layered over the preset (.ron, .json or .bin; repeatable, later wins)
    #[arg(short = 'c', long = "config")]
    configs: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TextFormat {
    Ron,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved defaults, or one backend's slice of them
    Show {
        #[command(flatten)]
        source: Source,

        /// Only print the particle count and interaction radius for this backend
        #[arg(short, long)]
        backend: Option<Backend>,

        #[arg(short, long, value_enum, default_value = "ron")]
        format: TextFormat,
    },
    /// Check the resolved defaults against their invariants
    Validate {
        #[command(flatten)]
        source: Source,
    },
    /// Write the resolved defaults to a file (format from extension)
    Export {
        #[command(flatten)]
        source: Source,

        #[arg(short, long)]
        out: PathBuf,
    },
    /// List the named presets
    Presets,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn resolve(source: &Source) -> anyhow::Result<SimulationDefaults> {
    let layered = life_storage::load_layered(source.preset.defaults(), &source.configs);
    if !layered.is_clean() {
        anyhow::bail!(
            "could not load config layers:\n  {}",
            layered.errors.join("\n  ")
        );
    }
    log::info!(
        "resolved '{}' preset with {} override layer(s)",
        source.preset,
        layered.used.len()
    );
    Ok(layered.config)
}

fn render(
    config: &SimulationDefaults,
    backend: Option<Backend>,
    format: TextFormat,
) -> anyhow::Result<String> {
    let text = match (backend, format) {
        (None, TextFormat::Ron) => to_ron_string(config)?,
        (None, TextFormat::Json) => to_json_string(config)?,
        (Some(b), TextFormat::Ron) => {
            ron::ser::to_string_pretty(&config.profile(b), ron::ser::PrettyConfig::default())?
        }
        (Some(b), TextFormat::Json) => serde_json::to_string_pretty(&config.profile(b))?,
    };
    Ok(text)
}

fn validate(source: &Source) -> anyhow::Result<()> {
    let config = resolve(source)?;
    let issues = config.validate();
    if issues.is_empty() {
        println!("{}: ok", source.preset);
        return Ok(());
    }
    for issue in &issues {
        eprintln!("  - {issue}");
    }
    Err(ConfigError::Invalid(issues).into())
}

fn export(source: &Source, out: &Path) -> anyhow::Result<()> {
    let config = resolve(source)?;
    config
        .check()
        .context("refusing to export an invalid configuration")?;
    life_storage::save(&config, out)
        .with_context(|| format!("failed to write {}", out.display()))?;
    println!("Exported '{}' defaults to {}", source.preset, out.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Show {
            source,
            backend,
            format,
        } => {
            let config = resolve(&source)?;
            println!("{}", render(&config, backend, format)?);
        }
        Commands::Validate { source } => validate(&source)?,
        Commands::Export { source, out } => export(&source, &out)?,
        Commands::Presets => {
            for preset in Preset::ALL {
                println!("{:<10} {}", preset.name(), preset.description());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::DEFAULTS;

    #[test]
    fn cli_parses_show_with_defaults() {
        let cli = Cli::try_parse_from(["particle_life", "show"]).unwrap();
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Show {
                source,
                backend,
                format,
            } => {
                assert_eq!(source.preset, Preset::Canonical);
                assert!(source.configs.is_empty());
                assert!(backend.is_none());
                assert_eq!(format, TextFormat::Ron);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn cli_parses_repeated_configs_and_backend() {
        let cli = Cli::try_parse_from([
            "particle_life", "-vv", "show", "--preset", "five-colors", "-c", "a.json", "-c", "b.ron",
            "--backend", "QTJS", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Show {
                source,
                backend,
                format,
            } => {
                assert_eq!(source.preset, Preset::FiveColors);
                assert_eq!(
                    source.configs,
                    vec![PathBuf::from("a.json"), PathBuf::from("b.ron")]
                );
                assert_eq!(backend, Some(Backend::QtJs));
                assert_eq!(format, TextFormat::Json);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn cli_rejects_unknown_preset() {
        assert!(Cli::try_parse_from(["particle_life", "show", "--preset", "v9"]).is_err());
    }

    #[test]
    fn cli_export_requires_out() {
        assert!(Cli::try_parse_from(["particle_life", "export"]).is_err());
    }

    #[test]
    fn render_backend_profile_json() {
        let text = render(&DEFAULTS, Some(Backend::Js), TextFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["backend"], "js");
        assert_eq!(value["particlesCount"], 750);
    }
}
