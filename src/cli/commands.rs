//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use generational_arena::Index;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::domain::OrgTree;
use crate::errors::RosterError;
use crate::report;
use crate::roster::RosterBuilder;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Show { roster }) => show(roster),
        Some(Commands::Budget { roster, node }) => budget(roster, node.as_deref()),
        Some(Commands::Students { roster, node }) => students(roster, node.as_deref()),
        Some(Commands::Tree { roster }) => tree(roster),
        Some(Commands::Completion { shell }) => completion(*shell),
        None => Ok(()),
    }
}

fn load(roster: &Path) -> CliResult<OrgTree> {
    Ok(RosterBuilder::new().build_from_file(roster)?)
}

/// Resolve the query target: a named node, or the root.
fn resolve(tree: &OrgTree, node: Option<&str>) -> CliResult<Index> {
    match node {
        Some(name) => tree
            .find_by_name(name)
            .ok_or_else(|| CliError::Roster(RosterError::UnknownNode(name.to_string()))),
        None => tree
            .root()
            .ok_or_else(|| CliError::InvalidArgs("roster has no root".to_string())),
    }
}

#[instrument]
fn show(roster: &Path) -> CliResult<()> {
    debug!("roster: {:?}", roster);
    let tree = load(roster)?;
    output::info(&report::render_report(&tree));
    Ok(())
}

#[instrument]
fn budget(roster: &Path, node: Option<&str>) -> CliResult<()> {
    debug!("roster: {:?}, node: {:?}", roster, node);
    let tree = load(roster)?;
    let idx = resolve(&tree, node)?;
    output::metric("Budget", &report::format_money(tree.budget(idx)));
    Ok(())
}

#[instrument]
fn students(roster: &Path, node: Option<&str>) -> CliResult<()> {
    debug!("roster: {:?}, node: {:?}", roster, node);
    let tree = load(roster)?;
    let idx = resolve(&tree, node)?;
    output::metric("Students", &tree.student_count(idx));
    Ok(())
}

#[instrument]
fn tree(roster: &Path) -> CliResult<()> {
    debug!("roster: {:?}", roster);
    let tree = load(roster)?;
    if let Some(rendered) = tree.root().and_then(|root| tree.to_tree_string(root)) {
        output::info(&rendered);
    }
    Ok(())
}

#[instrument]
fn completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
