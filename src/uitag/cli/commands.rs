//! # CLI Commands
//!
//! - `run()`: parses arguments, installs logging, resolves config, dispatches
//! - `handle_*()`: one per subcommand
//! - `replay()`: feeds one script event to the widget and prints the outcome

use super::render::{print_messages, render_attributes, render_types, render_widget};
use super::script::{parse_script, Event, ScriptLine};
use super::setup::{Cli, Commands};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use uitag::api::TagWidget;
use uitag::attributes::AttrKey;
use uitag::commands::CmdMessage;
use uitag::config::{default_config_dir, WidgetConfig};
use uitag::error::{Result, TagError};
use uitag::model::TagType;
use uitag::render::board::Board;

const LOG_ENV: &str = "UITAG_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(cli.config.as_deref(), cli.debug)?;

    match cli.command {
        Commands::Run { file } => handle_run(config, &cli.target, file),
        Commands::Types => handle_types(),
        Commands::Config => handle_config(&config),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_config(dir: Option<&Path>, debug: bool) -> Result<WidgetConfig> {
    let mut config = match dir.map(Path::to_path_buf).or_else(default_config_dir) {
        Some(dir) => WidgetConfig::load(dir)?,
        None => WidgetConfig::default(),
    };
    if debug {
        config.debug = true;
    }
    Ok(config)
}

fn handle_run(config: WidgetConfig, targets: &[String], file: Option<PathBuf>) -> Result<()> {
    let source = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let script = parse_script(&source)?;

    let mut board = Board::new();
    for target in targets {
        board.add_target(target.as_str());
    }
    let mut widget = TagWidget::new(board, config);

    for ScriptLine { line, event } in script {
        tracing::debug!(line, ?event, "replaying");
        replay(&mut widget, &event).map_err(|e| TagError::Script {
            line,
            reason: e.to_string(),
        })?;
        if widget.config().debug {
            print_snapshot(&widget)?;
        }
    }
    Ok(())
}

fn replay(widget: &mut TagWidget<Board>, event: &Event) -> Result<()> {
    match event {
        Event::Set { key, value } => print_messages(&widget.set_attribute(key, value)?.messages),
        Event::Unset { key } => print_messages(&widget.remove_attribute(key)?.messages),
        Event::Id(text) => print_messages(&widget.input_id(text).messages),
        Event::Type(text) => {
            let mut result = widget.input_type(text);
            if !text.is_empty() && text.parse::<TagType>().is_err() {
                result.add_message(CmdMessage::warning(format!(
                    "Unknown type '{}' left the type unset",
                    text
                )));
            }
            print_messages(&result.messages);
        }
        Event::Name(text) => {
            print_messages(&widget.apply_attribute(AttrKey::Name, Some(text.as_str()))?.messages)
        }
        Event::Describe(text) => widget.describe(text),
        Event::Confirm => print_messages(&widget.confirm()?.messages),
        Event::Cancel => print_messages(&widget.cancel().messages),
        Event::Remove(id) => print_messages(&widget.remove(id)?.messages),
        Event::Show => print!("{}", render_widget(widget)),
        Event::Attrs => print!(
            "{}",
            render_attributes(widget.attributes(), &widget.config().attribute_prefix)
        ),
        Event::Snapshot => print_snapshot(widget)?,
    }
    Ok(())
}

fn print_snapshot(widget: &TagWidget<Board>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&widget.snapshot())?);
    Ok(())
}

fn handle_types() -> Result<()> {
    print!("{}", render_types(&TagType::SELECTABLE));
    Ok(())
}

fn handle_config(config: &WidgetConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
