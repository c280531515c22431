//! Argument handling and the read → run → render sequence behind `main`.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use polyassign::prelude::*;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "polyassign")]
#[command(about = "Assign users to the nearest loop of a geographic network", version)]
pub struct Cmd {
    /// Input file; reads stdin when omitted
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output layout
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Do not extend search paths beyond this many nodes
    #[arg(long)]
    pub max_path_len: Option<usize>,

    /// Stop the search after this many cycles
    #[arg(long)]
    pub max_cycles: Option<usize>,

    /// Log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl Cmd {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }

    pub fn search_cfg(&self) -> SearchCfg {
        SearchCfg {
            max_path_len: self.max_path_len,
            max_cycles: self.max_cycles,
        }
    }
}

/// Read, run and render; returns the full stdout payload.
pub fn execute(cmd: &Cmd) -> Result<String> {
    let raw = read_input(cmd)?;
    let net = parse_network(&raw).context("parsing network input")?;
    tracing::info!(
        nodes = net.nodes.len(),
        edges = net.edges.len(),
        users = net.users.len(),
        "parsed"
    );
    let cfg = cmd.search_cfg();
    tracing::debug!(?cfg, "search_cfg");
    let outcome = run(&net, cfg)?;
    tracing::info!(
        graph_nodes = outcome.graph_nodes,
        cycles = outcome.report.len(),
        "cycles"
    );
    if outcome.truncated {
        tracing::warn!(
            cycles = outcome.report.len(),
            "cycle search hit a ceiling; results are partial"
        );
    }
    render(&outcome, cmd.format)
}

fn read_input(cmd: &Cmd) -> Result<String> {
    match &cmd.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

pub fn render(outcome: &Outcome, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(outcome.report.to_text()),
        Format::Json => {
            let mut s = serde_json::to_string_pretty(outcome)?;
            s.push('\n');
            Ok(s)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    const TRIANGLE: &str = "3\n1 0 0\n2 0 1\n3 1 0\n3\n1 2\n2 3\n3 1\n1\n42 0.3 0.3\n";

    fn cmd_for(args: &[&str]) -> Cmd {
        Cmd::try_parse_from(std::iter::once("polyassign").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cmd = cmd_for(&[]);
        assert_eq!(cmd.format, Format::Text);
        assert!(cmd.search_cfg().is_unbounded());
        assert_eq!(cmd.log_level(), Level::WARN);
        assert_eq!(cmd_for(&["-vv"]).log_level(), Level::DEBUG);
    }

    #[test]
    fn text_run_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("net.txt");
        fs::write(&path, TRIANGLE).unwrap();
        let cmd = cmd_for(&["--input", path.to_str().unwrap()]);
        let out = execute(&cmd).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("6"));
        assert_eq!(lines.next(), Some("3"));
        assert_eq!(lines.next(), Some("1 2 3"));
        assert_eq!(lines.next(), Some("1"));
        assert_eq!(lines.next(), Some("42"));
    }

    #[test]
    fn json_run_with_ceiling() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("net.txt");
        fs::write(&path, TRIANGLE).unwrap();
        let cmd = cmd_for(&[
            "--input",
            path.to_str().unwrap(),
            "--format",
            "json",
            "--max-cycles",
            "1",
        ]);
        let out = execute(&cmd).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["truncated"], true);
        assert_eq!(v["report"]["cycles"].as_array().unwrap().len(), 1);
        assert_eq!(v["report"]["cycles"][0]["nodes"], serde_json::json!([1, 2, 3]));
        assert_eq!(v["report"]["cycles"][0]["users"], serde_json::json!([42]));
    }

    #[test]
    fn failures_carry_context() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.txt");
        let err = execute(&cmd_for(&["--input", missing.to_str().unwrap()])).unwrap_err();
        assert!(format!("{err:#}").contains("reading"));

        let bad = dir.path().join("bad.txt");
        fs::write(&bad, "1\n1 0\n").unwrap();
        let err = execute(&cmd_for(&["--input", bad.to_str().unwrap()])).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"), "{err:#}");
    }
}
