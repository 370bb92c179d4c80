//! cll - interactive command console
//!
//! Reads lines from standard input, applies alias expansion, and hands each
//! line to the console engine. Rendering is plain text; line editing is left
//! to the terminal.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use cll::commands::CLEAR_SCREEN;
use cll::{
    format_execution_time, CommandHistory, CommandResult, Console, ConsoleConfig,
    FixedConfigPaths, HomeConfigPaths,
};

/// Command line options
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration directory override
    config_dir: Option<PathBuf>,
    /// Enable debug logging
    debug: bool,
    /// Execute a single line and exit
    command: Option<String>,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self> {
        Self::parse_from(env::args().skip(1))
    }

    fn parse_from(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut app_args = AppArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config-dir" => {
                    let dir = args.next().context("Missing configuration directory")?;
                    app_args.config_dir = Some(PathBuf::from(dir));
                }
                "--command" | "-c" => {
                    let line = args.next().context("Missing command line")?;
                    app_args.command = Some(line);
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--help" | "-h" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("cll v{}", cll::VERSION);
                    process::exit(0);
                }
                other => bail!("Unknown option: {}", other),
            }
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("cll - interactive command console");
    println!();
    println!("USAGE:");
    println!("    cll [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --command <LINE>      Execute one line and exit with its exit code");
    println!("        --config-dir <DIR>    Use DIR instead of ~/.config/cll");
    println!("    -d, --debug               Enable debug logging");
    println!("    -h, --help                Print this help message");
    println!("    -v, --version             Print version information");
    println!();
    println!("ENVIRONMENT:");
    println!("    CLL_DEBUG    Enable debug logging (1 or true)");
    println!("    RUST_LOG     Set logging level (error, warn, info, debug, trace)");
}

fn init_logging(debug: bool) {
    let debug = debug
        || env::var("CLL_DEBUG").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
    let level = if debug { "debug" } else { "warn" };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("{}", e);
        print_help();
        process::exit(2);
    });

    init_logging(args.debug);

    match run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("cll: {:#}", e);
            process::exit(1);
        }
    }
}

fn run(args: AppArgs) -> Result<i32> {
    let (mut console, config) = match args.config_dir {
        Some(dir) => {
            // The shared layer lives next to the configuration directory
            let shared = dir
                .parent()
                .unwrap_or(&dir)
                .join(cll::config::paths::SHARED_DIR_NAME);
            cll::init(FixedConfigPaths::new(dir, shared))
        }
        None => cll::init(HomeConfigPaths::new()),
    }
    .context("Failed to initialize console")?;

    if let Some(line) = args.command {
        let line = console.expand_alias(&line);
        let result = console.execute(&line);
        render(&result, &config, &mut io::stdout())?;
        return Ok(result.exit_code);
    }

    repl(&mut console, &config)?;
    Ok(0)
}

/// Read-eval loop over standard input
fn repl(console: &mut Console, config: &ConsoleConfig) -> Result<()> {
    let mut history = CommandHistory::new(config.history_size);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    info!("Console ready in {} mode", console.mode());

    loop {
        write!(stdout, "{}", config.prompt(console.mode()))?;
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            // End of input
            writeln!(stdout)?;
            break;
        }
        let line = input.trim_end_matches(['\n', '\r']);

        history.add(line);
        let expanded = console.expand_alias(line);
        if expanded != line {
            debug!("Alias expanded '{}' to '{}'", line, expanded);
        }

        let result = console.execute(&expanded);
        if is_exit_request(&expanded, &result) {
            writeln!(stdout, "{}", result.output)?;
            break;
        }
        render(&result, config, &mut stdout)?;
    }

    debug!("Session ended after {} history entries", history.len());
    Ok(())
}

fn is_exit_request(line: &str, result: &CommandResult) -> bool {
    result.success && matches!(line.split_whitespace().next(), Some("quit" | "exit"))
}

fn render(result: &CommandResult, config: &ConsoleConfig, out: &mut impl Write) -> Result<()> {
    let text = result.display_text();
    if result.output == CLEAR_SCREEN {
        write!(out, "{}", text)?;
    } else if result.success {
        write_line(out, text)?;
    } else {
        // Failed commands may still have produced output
        write_line(out, &result.output)?;
        write_line(&mut io::stderr(), text)?;
    }

    if config.show_execution_time && !result.execution_time.is_zero() {
        writeln!(out, "({})", format_execution_time(result.execution_time))?;
    }
    out.flush()?;
    Ok(())
}

/// Write `text`, adding a newline unless it already ends with one
fn write_line(out: &mut impl Write, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    if text.ends_with('\n') {
        write!(out, "{}", text)
    } else {
        writeln!(out, "{}", text)
    }
}
