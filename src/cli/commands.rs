//! Command dispatch

use std::io::Write;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::builder::{Shape, TreeBuilder};
use crate::cli::args::{Cli, Commands, ConfigCommands, TreeArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{
    global_config_path, local_config_path, resolve_project_dir, RenderStyle, Settings,
};
use crate::demo::{demo_lines, HEADING};
use crate::errors::TreeError;
use crate::render::render;
use crate::stats::{report_lines, Strategy};
use crate::tree::Node;
use crate::tree_traits::TreeNodeConvert;

/// Placeholder printed for an absent tree.
pub const EMPTY_TREE: &str = "(empty tree)";

pub fn execute_command(cli: &Cli, settings: &Settings, out: &mut dyn Write) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Demo) | None => _demo(settings, out),
        Some(Commands::Render { tree, style }) => {
            _render(tree, style.unwrap_or(settings.style), settings, out)
        }
        Some(Commands::Stats { tree, strategy }) => {
            _stats(tree, strategy.unwrap_or(settings.strategy), settings, out)
        }
        Some(Commands::Config { command }) => _config(command, cli, settings, out),
        Some(Commands::Completion { shell }) => {
            clap_complete::generate(*shell, &mut Cli::command(), "gentree", out);
            Ok(())
        }
    }
}

#[instrument(skip_all)]
fn _demo(settings: &Settings, out: &mut dyn Write) -> CliResult<()> {
    let lines: Vec<String> = demo_lines(settings.strategy)
        .into_iter()
        .map(|line| if line == HEADING { output::header(HEADING, settings.color) } else { line })
        .collect();
    write_lines(out, &lines)
}

#[instrument(skip(settings, out))]
fn _render(
    args: &TreeArgs,
    style: RenderStyle,
    settings: &Settings,
    out: &mut dyn Write,
) -> CliResult<()> {
    let Some(root) = build(args, settings)? else {
        return write_lines(out, &[EMPTY_TREE.to_string()]);
    };
    match style {
        RenderStyle::Boxed => write_lines(out, &render(&root)),
        RenderStyle::Compact => {
            write!(out, "{}", root.to_tree_string()).map_err(|e| TreeError::io("write tree", e))?;
            Ok(())
        }
    }
}

#[instrument(skip(settings, out))]
fn _stats(
    args: &TreeArgs,
    strategy: Strategy,
    settings: &Settings,
    out: &mut dyn Write,
) -> CliResult<()> {
    let root = build(args, settings)?;
    write_lines(out, &report_lines(root.as_ref(), strategy))
}

#[instrument(skip_all)]
fn _config(
    command: &ConfigCommands,
    cli: &Cli,
    settings: &Settings,
    out: &mut dyn Write,
) -> CliResult<()> {
    let text = match command {
        ConfigCommands::Show => settings.to_toml()?,
        ConfigCommands::Template => Settings::template(),
        ConfigCommands::Path => {
            let global = global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<unavailable>".to_string());
            let local = resolve_project_dir(cli.project_dir.as_deref())
                .map(|dir| local_config_path(&dir).display().to_string())
                .unwrap_or_else(|| "<unavailable>".to_string());
            format!("global: {}\nlocal:  {}\n", global, local)
        }
    };
    write!(out, "{}", text).map_err(|e| TreeError::io("write config", e))?;
    Ok(())
}

fn build(args: &TreeArgs, settings: &Settings) -> CliResult<Option<Node<i64>>> {
    if args.shape == Shape::Complete && args.branching == 0 && args.size > 1 {
        return Err(CliError::InvalidArgs(
            "a complete tree deeper than 1 needs --branching of at least 1".to_string(),
        ));
    }
    debug!(?args, settings.max_nodes, settings.max_depth, "build");
    let tree = TreeBuilder::new(args.shape)
        .size(args.size)
        .branching(args.branching)
        .max_nodes(settings.max_nodes)
        .max_depth(settings.max_depth)
        .build()?;
    Ok(tree)
}

fn write_lines(out: &mut dyn Write, lines: &[String]) -> CliResult<()> {
    for line in lines {
        writeln!(out, "{}", line).map_err(|e| TreeError::io("write output", e))?;
    }
    Ok(())
}
