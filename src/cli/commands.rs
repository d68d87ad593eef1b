//! Command handlers

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{
    balance_report, build_and_traverse, format_traversal, parse_numbers, render, ApplicationError,
    RenderStyle, Shell, TreeInfo,
};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::AvlTree;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "effective settings");

    match &cli.command {
        Some(Commands::Traverse { numbers, order }) => {
            cmd_traverse(&settings, numbers, order.as_deref())
        }
        Some(Commands::Print { numbers, style }) => {
            cmd_print(&settings, numbers, style.unwrap_or(settings.style))
        }
        Some(Commands::Info { numbers }) => cmd_info(&settings, numbers),
        Some(Commands::Shell) => cmd_shell(&settings),
        Some(Commands::Config { command }) => cmd_config(&settings, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::InvalidArgs(
            "no command given, see --help".to_string(),
        )),
    }
}

/// Parses a number list, reporting rejected tokens as warnings.
fn read_numbers(settings: &Settings, text: &str) -> CliResult<Vec<i32>> {
    let parsed = parse_numbers(text, settings.allow_negative);
    if !parsed.invalid.is_empty() {
        output::warning(&format!("ignored (not numbers): {}", parsed.invalid.join(", ")));
    }
    if !parsed.negative.is_empty() {
        output::warning(&format!(
            "rejected (negative numbers): {}",
            parsed.negative.join(", ")
        ));
    }
    if !parsed.duplicates.is_empty() {
        output::warning(&format!("duplicate numbers removed: {:?}", parsed.duplicates));
    }
    if parsed.is_empty() {
        return Err(ApplicationError::NoNumbers.into());
    }
    Ok(parsed.accepted)
}

#[instrument(skip(settings))]
fn cmd_traverse(settings: &Settings, numbers: &str, order: Option<&str>) -> CliResult<()> {
    let order = order.unwrap_or(settings.default_order.name());
    let numbers = read_numbers(settings, numbers)?;

    let traversal = build_and_traverse(&numbers, Some(order), |value, tree| {
        if settings.show_steps {
            output::header(&format!("--- Inserting {} ---", value));
            output::raw(&render(tree.root(), settings.style));
        }
    })?;

    output::header("=== Final AVL Tree ===");
    output::raw(&render(traversal.tree.root(), settings.style));
    output::header(&format!("=== Traversal ({}) ===", traversal.order));
    output::info(&format_traversal(&traversal.values, traversal.order.name()));
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_print(settings: &Settings, numbers: &str, style: RenderStyle) -> CliResult<()> {
    let tree: AvlTree = read_numbers(settings, numbers)?.into_iter().collect();

    output::header("=== AVL Tree Structure ===");
    output::raw(&render(tree.root(), style));
    output::header("=== Balance Information ===");
    for line in balance_report(tree.root()) {
        if line.is_balanced() {
            output::detail(&line);
        } else {
            output::failure(&line);
        }
    }
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_info(settings: &Settings, numbers: &str) -> CliResult<()> {
    let tree: AvlTree = read_numbers(settings, numbers)?.into_iter().collect();

    output::header("=== Tree Information ===");
    match TreeInfo::from_tree(&tree) {
        Some(info) => output::info(&info),
        None => output::info("The tree is empty."),
    }
    Ok(())
}

fn cmd_shell(settings: &Settings) -> CliResult<()> {
    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), settings.shell_options());
    shell.run()?;
    Ok(())
}

fn cmd_config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available on this platform"),
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}
