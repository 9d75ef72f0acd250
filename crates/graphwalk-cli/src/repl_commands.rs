//! REPL command handlers.
//!
//! Each command is implemented as a separate function for maintainability.

use colored::Colorize;
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use graphwalk_core::{Error, GraphSession, GraphSnapshot};
use serde_json::json;

use crate::config::OutputFormat;
use crate::repl::ReplConfig;

/// Result of a REPL command execution.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Quit,
    Error(String),
}

impl<E: std::fmt::Display> From<Result<(), E>> for CommandResult {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => CommandResult::Continue,
            Err(e) => CommandResult::Error(e.to_string()),
        }
    }
}

/// Handle a REPL command (line starting with '.')
pub fn handle_command(
    session: &mut GraphSession,
    line: &str,
    config: &mut ReplConfig,
) -> CommandResult {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let cmd = parts.first().map(|s| s.to_lowercase()).unwrap_or_default();

    match cmd.as_str() {
        ".quit" | ".exit" | ".q" => CommandResult::Quit,
        ".help" | ".h" => {
            print_help();
            CommandResult::Continue
        }
        ".node" | ".add-node" => cmd_add_node(session, &parts),
        ".edge" | ".add-edge" => cmd_add_edge(session, &parts),
        ".rm-node" | ".remove-node" => cmd_remove_node(session, &parts),
        ".rm-edge" | ".remove-edge" => cmd_remove_edge(session, &parts),
        ".dfs" => cmd_dfs(session, config, &parts),
        ".components" => cmd_components(session, config),
        ".neighbors" | ".neighbours" => cmd_neighbors(session, config, &parts),
        ".nodes" => cmd_nodes(session, config),
        ".edges" => cmd_edges(session, config),
        ".show" => cmd_show(session, config),
        ".export" => cmd_export(session, &parts),
        ".import" => cmd_import(session, &parts),
        ".reset" => cmd_reset(session),
        ".timing" => cmd_timing(config, &parts),
        ".format" => cmd_format(config, &parts),
        ".clear" => cmd_clear(),
        _ => CommandResult::Error(format!("Unknown command: {cmd}")),
    }
}

// ============================================================================
// Graph Editing
// ============================================================================

fn cmd_add_node(session: &mut GraphSession, parts: &[&str]) -> CommandResult {
    if parts.len() < 2 {
        println!("Usage: .node <name>\n");
        return CommandResult::Continue;
    }
    match session.add_node(parts[1]) {
        Ok(name) => {
            println!("Node added: {}", name.green());
            CommandResult::Continue
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn cmd_add_edge(session: &mut GraphSession, parts: &[&str]) -> CommandResult {
    if parts.len() < 3 {
        println!("Usage: .edge <from> <to>\n");
        return CommandResult::Continue;
    }
    match session.connect(parts[1], parts[2]) {
        Ok((from, to)) => {
            println!("Edge added: {} → {}", from.green(), to.green());
            CommandResult::Continue
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn cmd_remove_node(session: &mut GraphSession, parts: &[&str]) -> CommandResult {
    if parts.len() < 2 {
        println!("Usage: .rm-node <name>\n");
        return CommandResult::Continue;
    }
    let result = session.remove_node(parts[1]);
    if result.is_ok() {
        println!("Node removed: {}", parts[1].yellow());
    }
    result.into()
}

fn cmd_remove_edge(session: &mut GraphSession, parts: &[&str]) -> CommandResult {
    if parts.len() < 3 {
        println!("Usage: .rm-edge <from> <to>\n");
        return CommandResult::Continue;
    }
    let result = session.disconnect(parts[1], parts[2]);
    if result.is_ok() {
        println!("Edge removed: {} → {}", parts[1].yellow(), parts[2].yellow());
    }
    result.into()
}

fn cmd_reset(session: &mut GraphSession) -> CommandResult {
    session.reset();
    println!("Graph reset\n");
    CommandResult::Continue
}

// ============================================================================
// Traversal & Queries
// ============================================================================

fn cmd_dfs(session: &GraphSession, config: &ReplConfig, parts: &[&str]) -> CommandResult {
    if parts.len() < 2 {
        println!("Usage: .dfs <start>\n");
        return CommandResult::Continue;
    }
    let path = match session.traverse(parts[1]) {
        Ok(path) => path,
        Err(e) => return CommandResult::Error(e.to_string()),
    };
    match config.format {
        OutputFormat::Table => {
            println!("DFS from {}: {}", path.start().cyan(), path.to_string().green());
            CommandResult::Continue
        }
        OutputFormat::Json => print_json(&json!({
            "start": path.start(),
            "order": path.nodes(),
        })),
    }
}

fn cmd_components(session: &GraphSession, config: &ReplConfig) -> CommandResult {
    let components = session.components();
    match config.format {
        OutputFormat::Table => {
            if components.is_empty() {
                println!("Graph is empty.\n");
                return CommandResult::Continue;
            }
            println!("{}", "Components:".bold());
            for (i, component) in components.iter().enumerate() {
                println!("  {}. {}", i + 1, component.join(" → "));
            }
            println!();
            CommandResult::Continue
        }
        OutputFormat::Json => print_json(&json!(components)),
    }
}

fn cmd_neighbors(session: &GraphSession, config: &ReplConfig, parts: &[&str]) -> CommandResult {
    if parts.len() < 2 {
        println!("Usage: .neighbors <name>\n");
        return CommandResult::Continue;
    }
    let name = parts[1];
    let store = session.store();
    if !store.has_node(name) {
        return CommandResult::Error(Error::NodeNotFound(name.to_string()).to_string());
    }
    let neighbors = store.neighbors(name);
    match config.format {
        OutputFormat::Table => {
            if neighbors.is_empty() {
                println!("{} has no neighbors\n", name.green());
            } else {
                println!("{}: {}\n", name.green(), neighbors.join(", "));
            }
            CommandResult::Continue
        }
        OutputFormat::Json => print_json(&json!({ "node": name, "neighbors": neighbors })),
    }
}

fn cmd_nodes(session: &GraphSession, config: &ReplConfig) -> CommandResult {
    let store = session.store();
    match config.format {
        OutputFormat::Table => {
            if store.is_empty() {
                println!("No nodes found.\n");
                return CommandResult::Continue;
            }
            let mut table = new_table(vec!["Node", "Degree", "Neighbors"]);
            for node in store.nodes() {
                table.add_row(vec![
                    node.to_string(),
                    store.degree(node).to_string(),
                    store.neighbors(node).join(", "),
                ]);
            }
            println!("{table}\n");
            CommandResult::Continue
        }
        OutputFormat::Json => {
            let nodes: Vec<_> = store
                .nodes()
                .map(|node| json!({ "node": node, "neighbors": store.neighbors(node) }))
                .collect();
            print_json(&json!(nodes))
        }
    }
}

fn cmd_edges(session: &GraphSession, config: &ReplConfig) -> CommandResult {
    let edges = session.store().edges();
    match config.format {
        OutputFormat::Table => {
            if edges.is_empty() {
                println!("No edges found.\n");
                return CommandResult::Continue;
            }
            let mut table = new_table(vec!["From", "To"]);
            for (from, to) in edges {
                table.add_row(vec![from, to]);
            }
            println!("{table}\n");
            CommandResult::Continue
        }
        OutputFormat::Json => print_json(&json!(edges)),
    }
}

fn cmd_show(session: &GraphSession, config: &ReplConfig) -> CommandResult {
    let store = session.store();
    match config.format {
        OutputFormat::Table => {
            println!("\n{}", "Graph".bold().underline());
            println!("  {} {}", "Nodes:".cyan(), store.node_count());
            println!("  {} {}", "Edges:".cyan(), store.edge_count());
            println!("  {} {}", "Components:".cyan(), session.components().len());
            println!();
            cmd_nodes(session, config)
        }
        OutputFormat::Json => print_json(&json!(session.snapshot())),
    }
}

// ============================================================================
// Import / Export
// ============================================================================

fn cmd_export(session: &GraphSession, parts: &[&str]) -> CommandResult {
    let filename = parts.get(1).copied().unwrap_or("graph.json");
    let json = match session.snapshot().to_json() {
        Ok(json) => json,
        Err(e) => return CommandResult::Error(e.to_string()),
    };
    match std::fs::write(filename, json) {
        Ok(()) => {
            println!(
                "{} Exported {} nodes to {}\n",
                "✓".green(),
                session.store().node_count(),
                filename.green()
            );
            CommandResult::Continue
        }
        Err(e) => CommandResult::Error(format!("Failed to write file: {e}")),
    }
}

fn cmd_import(session: &mut GraphSession, parts: &[&str]) -> CommandResult {
    if parts.len() < 2 {
        println!("Usage: .import <file.json>\n");
        return CommandResult::Continue;
    }
    let filename = parts[1];
    let content = match std::fs::read_to_string(filename) {
        Ok(content) => content,
        Err(e) => return CommandResult::Error(format!("Failed to read file: {e}")),
    };
    match GraphSnapshot::from_json(&content) {
        Ok(snapshot) => {
            session.load(&snapshot);
            println!(
                "{} Imported {} nodes from {}\n",
                "✓".green(),
                session.store().node_count(),
                filename.green()
            );
            CommandResult::Continue
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

// ============================================================================
// Session Commands
// ============================================================================

fn cmd_timing(config: &mut ReplConfig, parts: &[&str]) -> CommandResult {
    if let Some(value) = parts.get(1) {
        let Some(enabled) = parse_switch(value) else {
            return CommandResult::Error(format!("Expected on or off, got '{value}'"));
        };
        config.timing = enabled;
    }
    let state = if config.timing { "on" } else { "off" };
    println!("Timing: {}\n", state.cyan());
    CommandResult::Continue
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn cmd_format(config: &mut ReplConfig, parts: &[&str]) -> CommandResult {
    if let Some(value) = parts.get(1) {
        match OutputFormat::from_str(value, true) {
            Ok(format) => config.format = format,
            Err(_) => {
                return CommandResult::Error(format!(
                    "Unknown format '{value}', expected table or json"
                ))
            }
        }
    }
    let name = match config.format {
        OutputFormat::Table => "table",
        OutputFormat::Json => "json",
    };
    println!("Output format: {}\n", name.cyan());
    CommandResult::Continue
}

fn cmd_clear() -> CommandResult {
    // ANSI: erase display, cursor home.
    print!("\x1B[2J\x1B[H");
    CommandResult::Continue
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn print_json(value: &serde_json::Value) -> CommandResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{text}");
            CommandResult::Continue
        }
        Err(e) => CommandResult::Error(format!("Failed to encode JSON: {e}")),
    }
}

/// Print help text for REPL commands
pub fn print_help() {
    println!("\n{}", "graphwalk Commands".bold().underline());
    println!();
    println!("  {}           Show this help", ".help".yellow());
    println!("  {}           Exit the REPL", ".quit".yellow());
    println!("  {}    Add a node", ".node <name>".yellow());
    println!("  {} Link two nodes", ".edge <from> <to>".yellow());
    println!(
        "  {}   Remove a node and its edges",
        ".rm-node <name>".yellow()
    );
    println!("  {} Unlink two nodes", ".rm-edge <from> <to>".yellow());
    println!("  {}    Depth-first walk", ".dfs <start>".yellow());
    println!("  {}     Walk every component", ".components".yellow());
    println!("  {} List neighbors", ".neighbors <name>".yellow());
    println!("  {}          List nodes", ".nodes".yellow());
    println!("  {}          List edges", ".edges".yellow());
    println!("  {}           Graph summary", ".show".yellow());
    println!("  {}  Save graph as JSON", ".export [file]".yellow());
    println!("  {}  Load graph from JSON", ".import <file>".yellow());
    println!("  {}          Remove everything", ".reset".yellow());
    println!(
        "  {}       Toggle timing display",
        ".timing on|off".yellow()
    );
    println!(
        "  {}        Set output format",
        ".format table|json".yellow()
    );
    println!("  {}          Clear screen", ".clear".yellow());
    println!();
    println!("{}", "Example:".bold().underline());
    println!();
    println!("  {}", ".node A".italic().white());
    println!("  {}", ".node B".italic().white());
    println!("  {}", ".edge A B".italic().white());
    println!("  {}", ".dfs A".italic().white());
    println!();
}
