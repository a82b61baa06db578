mod config;
mod utility;

pub use config::*;

use anyhow::{Context, Result};
use clap::{Args, Parser};
use model_parser::{ModelParser, Options, Registry};
use std::{io::Write, path::PathBuf};

/// Library behind the `model-parser` command
#[derive(Debug, Default)]
pub struct ModelParserCli {
    config: Config,
}

impl ModelParserCli {
    /// Create a new ModelParserCli instance with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new ModelParserCli instance with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and execute CLI commands from command-line arguments, writing
    /// to stdout
    pub fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::parse();
        self.run(cli, &mut std::io::stdout().lock())
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub fn parse_from<I, T>(&self, args: I, out: &mut dyn Write) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        self.run(cli, out)
    }

    fn run(&self, cli: Cli, out: &mut dyn Write) -> Result<()> {
        let config = cli.global.apply(self.config.clone());

        match cli.command {
            Command::Parse(cmd) => cmd.run(&config, out),
            Command::Models(cmd) => cmd.run(&config, out),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "model-parser")]
#[command(about = "Describe the fields, relations, mutators and casts of a model")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Path to the TOML model manifest
    #[arg(long, short, global = true)]
    manifest: Option<PathBuf>,

    /// SQLite database file or `sqlite:` URL
    #[arg(long, short, global = true)]
    database: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

impl GlobalArgs {
    fn apply(self, mut config: Config) -> Config {
        if let Some(manifest) = self.manifest {
            config = config.manifest_path(manifest);
        }
        if let Some(database) = self.database {
            config = config.database(database);
        }
        if self.pretty {
            config = config.pretty(true);
        }
        config
    }
}

#[derive(Parser, Debug)]
enum Command {
    /// Print the descriptor of one model as JSON
    Parse(ParseCommand),

    /// List the models declared in the manifest
    Models(ModelsCommand),
}

#[derive(Parser, Debug)]
struct ParseCommand {
    /// Fully qualified model identifier, e.g. `App\Models\User`
    model: String,

    /// Leave the model's hidden attributes out of the fields
    #[arg(long)]
    ignore_hidden: bool,

    /// Leave a column out of the fields; may be repeated
    #[arg(long = "filter", value_name = "COLUMN")]
    filter: Vec<String>,
}

impl ParseCommand {
    fn run(self, config: &Config, out: &mut dyn Write) -> Result<()> {
        let registry = load_registry(config)?;

        let database = config
            .database
            .as_deref()
            .context("no database given; pass --database")?;
        let catalog = utility::open_catalog(database)?;

        let options = Options::new()
            .ignore_hidden(self.ignore_hidden)
            .filter(self.filter);

        let descriptor = ModelParser::new(&registry, &*catalog).parse(&self.model, &options)?;

        if config.pretty {
            serde_json::to_writer_pretty(&mut *out, &descriptor)?;
        } else {
            serde_json::to_writer(&mut *out, &descriptor)?;
        }
        writeln!(out)?;

        Ok(())
    }
}

#[derive(Parser, Debug)]
struct ModelsCommand {}

impl ModelsCommand {
    fn run(self, config: &Config, out: &mut dyn Write) -> Result<()> {
        let registry = load_registry(config)?;

        for model in registry.models() {
            writeln!(out, "{}\t{}", model.name, model.table())?;
        }

        Ok(())
    }
}

fn load_registry(config: &Config) -> Result<Registry> {
    Ok(Registry::load(&config.manifest_path)?)
}
