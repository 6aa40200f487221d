//! Command-line interface for texlight
//! Highlights a source file into LaTeX. Without arguments it reads `secant_temp.rs` from the
//! working directory and writes `secant.tex` next to it.
//!
//! Usage:
//!   texlight [BASE]                       - `<BASE>_temp.rs` -> `<BASE>.tex`
//!   texlight -i `<input>` -o `<output>`     - Explicit paths
//!   texlight --list-lexers | --list-formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use config::ConfigError;
use texlight::texlight::config::{Loader, TexlightConfig, LOCAL_CONFIG_FILE};
use texlight::texlight::conversion::convert;
use texlight::texlight::formats::FormatterRegistry;
use texlight::texlight::lexing::LexerRegistry;
use texlight::texlight::style::Style;
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("texlight")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Syntax-highlight a source file into LaTeX")
        .arg(
            Arg::new("base")
                .help("Base name: reads <BASE>_temp.rs, writes <BASE>.tex (default: secant)")
                .index(1),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Input file, replacing the one derived from BASE"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file, replacing the one derived from BASE"),
        )
        .arg(
            Arg::new("dir")
                .long("dir")
                .short('d')
                .help("Directory holding the input and receiving the output"),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .short('e')
                .help("Source file extension (default: rs)"),
        )
        .arg(
            Arg::new("lexer")
                .long("lexer")
                .short('l')
                .help("Lexer name or alias, or 'auto' to pick one from the input file name"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (latex, tokens, null)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults and ./texlight.toml"),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .help("Colour style for --full output (default, bw)"),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .help("Section title for --full output"),
        )
        .arg(
            Arg::new("full")
                .long("full")
                .help("Emit a complete LaTeX document including the style definitions")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("linenos")
                .long("linenos")
                .help("Number the lines")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-mathescape")
                .long("no-mathescape")
                .help("Escape $ in comments instead of treating $...$ as math")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("texcomments")
                .long("texcomments")
                .help("Pass comment text through as raw LaTeX")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-lexers")
                .long("list-lexers")
                .help("List available lexers")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (-v info, -vv debug); RUST_LOG takes precedence")
                .action(ArgAction::Count),
        )
}

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_count("verbose"));

    if matches.get_flag("list-lexers") {
        handle_list_lexers_command();
        return;
    }
    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = convert(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("texlight={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then ./texlight.toml, then --config, then the command line
fn load_config(matches: &ArgMatches) -> Result<TexlightConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    let values = [
        ("base", "conversion.base"),
        ("input", "conversion.input"),
        ("output", "conversion.output"),
        ("dir", "conversion.dir"),
        ("extension", "conversion.source_extension"),
        ("lexer", "conversion.lexer"),
        ("format", "conversion.format"),
        ("style", "latex.style"),
        ("title", "latex.title"),
    ];
    for (arg, key) in values {
        if let Some(value) = matches.get_one::<String>(arg) {
            loader = loader.set_override(key, value.clone())?;
        }
    }

    let flags = [
        ("full", "latex.full", true),
        ("linenos", "latex.linenos", true),
        ("no-mathescape", "latex.mathescape", false),
        ("texcomments", "latex.texcomments", true),
    ];
    for (arg, key, value) in flags {
        if matches.get_flag(arg) {
            loader = loader.set_override(key, value)?;
        }
    }

    loader.build()
}

fn handle_list_lexers_command() {
    let registry = LexerRegistry::with_defaults();
    println!("Available lexers:\n");
    for name in registry.list_lexers() {
        if let Ok(lexer) = registry.get(&name) {
            println!("  {}", name);
            if !lexer.aliases().is_empty() {
                println!("    aliases: {}", lexer.aliases().join(", "));
            }
            if !lexer.filenames().is_empty() {
                println!("    files:   {}", lexer.filenames().join(", "));
            }
        }
    }
}

fn handle_list_formats_command() {
    let registry = FormatterRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            if !formatter.aliases().is_empty() {
                println!("    aliases: {}", formatter.aliases().join(", "));
            }
        }
    }
    println!("\nStyles: {}", Style::NAMES.join(", "));
}
