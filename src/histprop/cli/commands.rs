//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Uses `std::process::exit`
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Logging Setup**: Install the `tracing` subscriber from `-v` / `HISTPROP_LOG`
//! 3. **Context Setup**: Resolve configuration and the dataset, load it once
//! 4. **API Dispatch**: Call the matching `HistPropApi` method
//! 5. **Output Formatting**: Render the `CmdResult` as styled text or JSON
//! 6. **Error Handling**: A failed load becomes a generic message and exit code 1

use super::render::Renderer;
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, BrowseCommands, Cli,
    Commands, DataCommands, MiscCommands, OutputMode,
};
use clap::Parser;
use console::Term;
use histprop::commands::config::ConfigAction;
use histprop::commands::CmdResult;
use histprop::error::{HistPropError, Result};
use histprop::init::{initialize, HistPropContext};
use histprop::model::SearchFilters;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "HISTPROP_LOG";
const RETRY_HINT: &str = "Check the dataset and try again (run with -v for details).";

struct AppContext {
    histprop: HistPropContext,
    output: OutputMode,
    renderer: Renderer,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Handle help flag - at top level use grouped help, for subcommands use clap's default
    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        match command {
            Some(name) => print_help_for_command(name),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    let mut ctx = init_context(&cli)?;

    let outcome = match cli.command {
        Some(Commands::Browse(cmd)) => match cmd {
            BrowseCommands::List {
                search,
                street,
                style,
                condition,
                built,
                details,
            } => {
                let filters = SearchFilters::new()
                    .with_search_term(search)
                    .with_street(street)
                    .with_style(style)
                    .with_condition(condition)
                    .with_construction_date(built);
                handle_list(&mut ctx, filters, details)
            }
            BrowseCommands::Search { term } => handle_search(&mut ctx, term),
            BrowseCommands::View { filenames } => handle_view(&ctx, filenames),
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Options { field } => handle_options(&ctx, field),
            DataCommands::Stats => handle_stats(&ctx),
            DataCommands::Doctor => handle_doctor(&ctx),
        },
        Some(Commands::Misc(MiscCommands::Config { key })) => handle_config(&ctx, key),
        Some(Commands::Misc(MiscCommands::Help { .. })) => Ok(()),
        None => handle_list(&mut ctx, SearchFilters::default(), false),
    };

    match outcome {
        Err(HistPropError::Load(message)) => {
            tracing::debug!(data = %ctx.histprop.data_path.display(), "reporting load failure");
            eprintln!("{}", message);
            eprintln!("{}", RETRY_HINT);
            std::process::exit(1);
        }
        other => other,
    }
}

/// Installs the stderr log subscriber. `HISTPROP_LOG` takes an `EnvFilter`
/// directive and wins over `-v`.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let data_override = cli.data.as_ref().map(PathBuf::from);
    let histprop = initialize(&cwd, data_override)?;

    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    let renderer = Renderer::new(use_color, histprop.config.line_width)?;

    Ok(AppContext {
        histprop,
        output: cli.output,
        renderer,
    })
}

/// Prints a result: JSON as-is, or the rendered body followed by messages.
fn emit<F>(ctx: &AppContext, result: &CmdResult, body: F) -> Result<()>
where
    F: FnOnce(&Renderer, &CmdResult) -> Result<String>,
{
    match ctx.output {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputMode::Term => {
            print!("{}", body(&ctx.renderer, result)?);
            print!("{}", ctx.renderer.messages(&result.messages)?);
        }
    }
    Ok(())
}

fn handle_list(ctx: &mut AppContext, filters: SearchFilters, details: bool) -> Result<()> {
    let result = ctx.histprop.api.list(filters)?;
    emit(ctx, &result, |r, res| {
        if details && !res.listed.is_empty() {
            r.property_details(&res.listed)
        } else {
            r.property_list(&res.listed, res.total)
        }
    })
}

fn handle_search(ctx: &mut AppContext, term: Vec<String>) -> Result<()> {
    let result = ctx.histprop.api.search(term.as_slice())?;
    emit(ctx, &result, |r, res| r.property_list(&res.listed, res.total))
}

fn handle_view(ctx: &AppContext, filenames: Vec<String>) -> Result<()> {
    let result = ctx.histprop.api.view(filenames.as_slice())?;
    emit(ctx, &result, |r, res| r.property_details(&res.listed))
}

fn handle_options(ctx: &AppContext, field: Option<String>) -> Result<()> {
    let result = ctx.histprop.api.options(field.as_deref())?;
    emit(ctx, &result, |r, res| match (&res.options, &res.vocabularies) {
        (Some(options), _) => r.option_list(options),
        (None, Some(vocab)) => r.vocabularies(vocab),
        (None, None) => Ok(String::new()),
    })
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.histprop.api.stats()?;
    emit(ctx, &result, |r, res| match &res.stats {
        Some(stats) => r.stats(stats),
        None => Ok(String::new()),
    })
}

fn handle_doctor(ctx: &AppContext) -> Result<()> {
    let result = ctx.histprop.api.doctor()?;
    emit(ctx, &result, |_, _| Ok(String::new()))
}

fn handle_config(ctx: &AppContext, key: Option<String>) -> Result<()> {
    let action = match key {
        Some(key) => ConfigAction::ShowKey(key),
        None => ConfigAction::ShowAll,
    };
    let result = ctx.histprop.api.config(action)?;
    emit(ctx, &result, |r, res| match &res.config {
        Some(config) => r.config(config),
        None => Ok(String::new()),
    })
}
