//! Command-line interface for spec-script
//! This binary parses spec-script documents and prints them in one of the registered formats.
//!
//! Usage:
//!   specscript `<path>` [--format `<format>`] [--compact]   - Parse a file and print it
//!   specscript - [--format `<format>`]                      - Parse standard input
//!   specscript --list-formats                               - List all available formats
//!
//! Settings are read from the built-in defaults, then `./specscript.toml` if present, then the
//! file given with `--config`, then the command line flags.

use clap::{Arg, ArgAction, ArgMatches, Command};
use specscript_config::{Error as ConfigError, Loader, SpecScriptConfig, PROJECT_FILE};
use specscript_parser::{FormatOptions, FormatRegistry, ScriptLoader};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("specscript")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and converting spec-script files")
        .arg(
            Arg::new("path")
                .help("Path to the spec-script file, or '-' for standard input")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'json', 'yaml', 'text', 'sections', 'treeviz')"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Single-line output for the JSON based formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser diagnostics to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = cli().get_matches();
    let registry = FormatRegistry::default();

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error: invalid configuration: {}", e);
        std::process::exit(1);
    });
    init_logging(&config, matches.get_flag("verbose"));

    let path = matches.get_one::<String>("path").map(String::as_str);
    handle_parse_command(&registry, &config, path);
}

/// Layer defaults, the project file, `--config` and flag overrides
fn load_config(matches: &ArgMatches) -> Result<SpecScriptConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(PROJECT_FILE);

    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("compact") {
        loader = loader.set_override("output.pretty", false)?;
    }

    loader.build()
}

fn init_logging(config: &SpecScriptConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Handle the default command: parse a document and print it
fn handle_parse_command(registry: &FormatRegistry, config: &SpecScriptConfig, path: Option<&str>) {
    let format = config.output.format.as_str();
    if !registry.has(format) {
        eprintln!("Error: unknown format '{}'", format);
        eprintln!("\nAvailable formats:");
        for (name, description) in registry.describe_formats() {
            eprintln!("  {} - {}", name, description);
        }
        std::process::exit(1);
    }

    let loader = match path {
        None | Some("-") => ScriptLoader::from_reader(std::io::stdin().lock()),
        Some(path) => ScriptLoader::from_path(path),
    }
    .unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path.unwrap_or("standard input"), e);
        std::process::exit(1);
    });

    let options = FormatOptions {
        pretty: config.output.pretty,
    };
    tracing::debug!(format, pretty = options.pretty, "rendering document");

    let output = loader
        .render_with(registry, format, &options)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");

    for (name, description) in registry.describe_formats() {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        cli().debug_assert();
    }

    #[test]
    fn flags_override_configured_output() {
        let matches =
            cli().get_matches_from(["specscript", "doc.specscript", "-f", "yaml", "--compact"]);
        let config = load_config(&matches).expect("config to build");

        assert_eq!(config.output.format, "yaml");
        assert!(!config.output.pretty);
    }
}
