//! Tests for REPL command dispatch.

use graphwalk_core::GraphSession;

use crate::config::OutputFormat;
use crate::repl::{execute_line, run_batch, ReplConfig};
use crate::repl_commands::{handle_command, CommandResult};

fn repl_config() -> ReplConfig {
    ReplConfig {
        format: OutputFormat::Table,
        timing: false,
    }
}

fn run(session: &mut GraphSession, config: &mut ReplConfig, lines: &[&str]) {
    for line in lines {
        assert_eq!(
            execute_line(session, line, config),
            CommandResult::Continue,
            "command failed: {line}"
        );
    }
}

#[test]
fn test_build_graph_and_walk() {
    let mut session = GraphSession::new();
    let mut config = repl_config();
    run(
        &mut session,
        &mut config,
        &[
            ".node A", ".node B", ".node C", ".node D", ".edge A B", ".edge A C", ".edge B D",
            ".dfs A",
        ],
    );

    let path = session.traverse("A").unwrap();
    assert_eq!(path.to_string(), "A → B → D → C");
}

#[test]
fn test_aliases_and_case() {
    let mut session = GraphSession::new();
    let mut config = repl_config();
    run(
        &mut session,
        &mut config,
        &[".ADD-NODE x", ".add-node y", ".Add-Edge x y"],
    );
    assert!(session.store().has_edge("y", "x"));
}

#[test]
fn test_errors_are_reported() {
    let mut session = GraphSession::new();
    let mut config = repl_config();
    run(&mut session, &mut config, &[".node A"]);

    assert_eq!(
        handle_command(&mut session, ".node A", &mut config),
        CommandResult::Error("Node 'A' already exists".to_string())
    );
    assert_eq!(
        handle_command(&mut session, ".edge A B", &mut config),
        CommandResult::Error("Node 'B' does not exist".to_string())
    );
    assert_eq!(
        handle_command(&mut session, ".dfs Z", &mut config),
        CommandResult::Error("Node 'Z' does not exist".to_string())
    );
    assert_eq!(
        handle_command(&mut session, ".neighbors Z", &mut config),
        CommandResult::Error("Node 'Z' does not exist".to_string())
    );
    assert_eq!(
        handle_command(&mut session, ".bogus", &mut config),
        CommandResult::Error("Unknown command: .bogus".to_string())
    );
}

#[test]
fn test_missing_arguments_print_usage() {
    let mut session = GraphSession::new();
    let mut config = repl_config();
    for line in [".node", ".edge A", ".rm-node", ".rm-edge A", ".dfs", ".neighbors", ".import"] {
        assert_eq!(
            handle_command(&mut session, line, &mut config),
            CommandResult::Continue,
            "{line}"
        );
    }
    assert!(session.store().is_empty());
}

#[test]
fn test_remove_commands() {
    let mut session = GraphSession::new();
    let mut config = repl_config();
    run(
        &mut session,
        &mut config,
        &[".node A", ".node B", ".node C", ".edge A B", ".edge B C", ".rm-edge B A"],
    );
    assert!(!session.store().has_edge("A", "B"));
    assert!(!session.store().has_edge("B", "A"));

    run(&mut session, &mut config, &[".rm-node C"]);
    assert!(!session.store().has_node("C"));
    assert!(session.store().neighbors("B").is_empty());

    assert_eq!(
        handle_command(&mut session, ".rm-edge A B", &mut config),
        CommandResult::Error("Edge A → B does not exist".to_string())
    );
}

#[test]
fn test_reset() {
    let mut session = GraphSession::new();
    let mut config = repl_config();
    run(&mut session, &mut config, &[".node A", ".reset"]);
    assert!(session.store().is_empty());
}

#[test]
fn test_format_and_timing_settings() {
    let mut session = GraphSession::new();
    let mut config = repl_config();

    run(&mut session, &mut config, &[".format json", ".timing on"]);
    assert_eq!(config.format, OutputFormat::Json);
    assert!(config.timing);

    run(&mut session, &mut config, &[".format TABLE", ".timing off"]);
    assert_eq!(config.format, OutputFormat::Table);
    assert!(!config.timing);

    assert_eq!(
        handle_command(&mut session, ".format xml", &mut config),
        CommandResult::Error("Unknown format 'xml', expected table or json".to_string())
    );
    assert_eq!(
        handle_command(&mut session, ".timing maybe", &mut config),
        CommandResult::Error("Expected on or off, got 'maybe'".to_string())
    );
    // Rejected values leave the settings alone; bare commands only report.
    run(&mut session, &mut config, &[".format", ".timing", ".timing YES"]);
    assert_eq!(config.format, OutputFormat::Table);
    assert!(config.timing);
}

#[test]
fn test_query_commands_in_both_formats() {
    let mut session = GraphSession::new();
    let mut config = repl_config();
    let queries = [".nodes", ".edges", ".components", ".neighbors A", ".show", ".dfs A"];

    run(&mut session, &mut config, &[".node A", ".node B", ".edge A B"]);
    run(&mut session, &mut config, &queries);
    config.format = OutputFormat::Json;
    run(&mut session, &mut config, &queries);
}

#[test]
fn test_export_and_import() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("graph.json");
    let file = file.to_str().unwrap();

    let mut session = GraphSession::new();
    let mut config = repl_config();
    run(
        &mut session,
        &mut config,
        &[".node A", ".node B", ".node C", ".edge B C", ".edge A C"],
    );
    run(&mut session, &mut config, &[format!(".export {file}").as_str()]);

    let mut restored = GraphSession::new();
    run(&mut restored, &mut config, &[format!(".import {file}").as_str()]);
    assert_eq!(restored.store(), session.store());
    assert_eq!(restored.traverse("C").unwrap().to_string(), "C → B → A");
}

#[test]
fn test_import_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "not json").unwrap();

    let mut session = GraphSession::new();
    let mut config = repl_config();

    let result = handle_command(
        &mut session,
        &format!(".import {}", missing.display()),
        &mut config,
    );
    assert!(matches!(result, CommandResult::Error(msg) if msg.starts_with("Failed to read file")));

    let result = handle_command(&mut session, &format!(".import {}", bad.display()), &mut config);
    assert!(matches!(result, CommandResult::Error(msg) if msg.starts_with("JSON error")));
}

#[test]
fn test_execute_line_skips_comments_and_blank_lines() {
    let mut session = GraphSession::new();
    let mut config = repl_config();
    assert_eq!(
        execute_line(&mut session, "   ", &mut config),
        CommandResult::Continue
    );
    assert_eq!(
        execute_line(&mut session, "# .node A", &mut config),
        CommandResult::Continue
    );
    assert!(session.store().is_empty());
}

#[test]
fn test_execute_line_requires_dot_prefix() {
    let mut session = GraphSession::new();
    let mut config = repl_config();
    assert!(matches!(
        execute_line(&mut session, "node A", &mut config),
        CommandResult::Error(_)
    ));
}

#[test]
fn test_run_batch_stops_at_first_error() {
    let mut session = GraphSession::new();
    let mut config = repl_config();

    let err = run_batch(
        &mut session,
        [".node A", ".node A", ".node B"],
        &mut config,
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "line 2: Node 'A' already exists");
    assert!(!session.store().has_node("B"));
}

#[test]
fn test_run_batch_stops_at_quit() {
    let mut session = GraphSession::new();
    let mut config = repl_config();

    run_batch(&mut session, [".node A", ".quit", ".node B"], &mut config).unwrap();
    assert!(session.store().has_node("A"));
    assert!(!session.store().has_node("B"));
}
