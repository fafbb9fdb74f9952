use anyhow::{Context, Result};
use calcbrain::calculator::{self, parse_keys};
use calcbrain::config::{self, Config};
use calcbrain::{CalcBrain, Readout};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calcbrain")]
#[command(about = "Keypad calculator with an expression trace and undo")]
struct Cli {
    /// Keys to press, e.g. `2 + 3 =`. Reads keys from stdin if omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Config file (defaults to ~/.config/calcbrain/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Preset a variable, e.g. `--var M=2`
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_variable)]
    variables: Vec<(String, f64)>,

    /// Load a saved program before pressing any keys
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save the program after the last key
    #[arg(long)]
    save: Option<PathBuf>,

    /// List the operator symbols and exit
    #[arg(long)]
    list_operators: bool,
}

fn parse_variable(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", arg))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value for {}: {}", name, e))?;
    Ok((name.trim().to_string(), value))
}

fn init_logging(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    init_logging(&config);

    if cli.list_operators {
        for symbol in calculator::operation::symbols() {
            println!("{}", symbol);
        }
        return Ok(());
    }

    let mut brain = CalcBrain::with_variables(config.variable_store());
    for (name, value) in &cli.variables {
        brain.set_variable(name, *value);
    }

    let program_file = config.program_path();
    // An explicit --load must exist, a configured program file may not yet
    if let Some(path) = cli.load.as_ref().or(program_file.as_ref())
        && (cli.load.is_some() || path.exists())
    {
        let program = config::load_program(path)?;
        tracing::info!(path = %path.display(), entries = program.len(), "Loaded program");
        brain.set_program(program);
    }

    if cli.keys.is_empty() {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("Failed to read keys from stdin")?;
            press(&mut brain, &line);
            println!("{}", Readout::from_brain(&brain).line());
        }
    } else {
        press(&mut brain, &cli.keys.join(" "));
        println!("{}", Readout::from_brain(&brain).line());
    }

    if let Some(path) = cli.save.as_ref().or(program_file.as_ref()) {
        config::save_program(path, &brain)
            .with_context(|| format!("Failed to save program to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Saved program");
    }

    Ok(())
}

fn press(brain: &mut CalcBrain, line: &str) {
    for key in parse_keys(line) {
        tracing::debug!(?key, "Pressing key");
        key.apply(brain);
    }
}
