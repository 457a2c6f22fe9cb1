//! Security Guardrails - Main entry point
//!
//! Parses the command line, sets up logging, loads the catalog and either
//! runs the interactive wizard or one of the headless commands.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use guardrails::cli::{Cli, Commands};
use guardrails::report::{self, RecommendationReport};
use guardrails::{App, Catalog, Feedback, FeedbackSink, GuardrailError, LogFeedbackSink, ProjectProfile};

/// Initialize tracing
///
/// The wizard owns the terminal, so it only logs when given a log file.
/// Headless commands log to stderr.
fn init_logging(cli: &Cli, interactive: bool) -> Result<()> {
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if interactive => builder.with_writer(std::io::sink).init(),
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            info!("Loading catalog from {:?}", path);
            Catalog::load_from_file(path)
                .with_context(|| format!("Failed to load catalog from {:?}", path))
        }
        None => Ok(Catalog::builtin()),
    }
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let interactive = matches!(cli.command, None | Some(Commands::Wizard { .. }));
    init_logging(&cli, interactive)?;
    info!("Security Guardrails starting up");
    debug!("CLI arguments parsed: {:?}", cli);

    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        None => {
            info!("No command specified, launching wizard");
            run_tui(&catalog, None, None)?;
        }
        Some(Commands::Wizard {
            profile,
            save_profile,
        }) => {
            run_tui(&catalog, profile.as_deref(), save_profile)?;
        }
        Some(Commands::List { table, json }) => {
            if json {
                println!("{}", report::list_json(&catalog, table)?);
            } else {
                print!("{}", report::list_table(&catalog, table));
            }
        }
        Some(Commands::Recommend {
            project_type,
            technologies,
            data_types,
            defaults,
            json,
        }) => {
            let config =
                report::build_config(&catalog, &project_type, &technologies, &data_types, defaults)?;
            let report = RecommendationReport::new(&catalog, &config);
            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", report.to_text(&catalog));
            }
        }
        Some(Commands::Validate { profile }) => {
            info!("Validating profile: {:?}", profile);
            let result = ProjectProfile::load_from_file(&profile)
                .and_then(|p| p.validate(&catalog).map(|()| p));
            match result {
                Ok(p) => {
                    info!("Profile validation successful");
                    println!(
                        "✓ Profile is valid: {} with {} technologies and {} data types",
                        p.project_type,
                        p.technologies.len(),
                        p.data_types.len()
                    );
                }
                Err(e) => {
                    error!("Profile validation failed: {:#}", e);
                    eprintln!("✗ Profile validation failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Feedback { rating, message }) => {
            let feedback = Feedback::new(rating, message.unwrap_or_default())?;
            LogFeedbackSink.submit(&feedback)?;
            println!("Thank you for your feedback!");
        }
    }

    Ok(())
}

/// Run the interactive wizard
fn run_tui(catalog: &Catalog, profile: Option<&Path>, save_profile: Option<PathBuf>) -> Result<()> {
    let mut app = match profile {
        Some(path) => {
            info!("Starting from profile {:?}", path);
            let config = ProjectProfile::load_from_file(path)?.to_config(catalog)?;
            App::with_config(catalog, config, save_profile)
        }
        None => App::new(catalog, save_profile),
    };

    debug!("Initializing terminal for TUI mode");
    enable_raw_mode()
        .map_err(|e| GuardrailError::terminal(format!("Failed to enable raw mode: {}", e)))?;

    let result = crossterm::execute!(stdout(), EnterAlternateScreen)
        .map_err(|e| GuardrailError::terminal(format!("Failed to enter alternate screen: {}", e)))
        .and_then(|()| {
            Terminal::new(CrosstermBackend::new(stdout()))
                .map_err(|e| GuardrailError::terminal(format!("Failed to create terminal: {}", e)))
        })
        .and_then(|mut terminal| {
            let result = app.run(&mut terminal);
            let _ = terminal.show_cursor();
            result
        });

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);

    result.map_err(Into::into)
}
