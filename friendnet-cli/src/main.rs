//! friendnet CLI - longest friendly chain and community analyzer.
//!
//! Reads a network description (users + friendships) from a JSON file into
//! the in-memory store, runs both analyses over one snapshot, and prints the
//! report in plain text or JSON.
//!
//! A `friendnet.toml` next to the input file can set the default output
//! format; the `--json` flag always wins.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use friendnet_core::{
    init_structured_logging, load_config, print_json, print_plain, FriendshipState,
    InMemoryNetwork, Network, User,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Longest friendly chain and community analyzer for small social networks"
)]
pub struct Cli {
    /// Path to the network description file (JSON)
    network: PathBuf,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// List every community's members instead of just the count
    #[arg(long)]
    communities: bool,
}

/// On-disk network description.
#[derive(Debug, Deserialize)]
struct NetworkFile {
    users: Vec<User>,
    #[serde(default)]
    friendships: Vec<FriendshipEntry>,
}

#[derive(Debug, Deserialize)]
struct FriendshipEntry {
    first: String,
    second: String,
    /// Defaults to approved; "pending" keeps the edge out of the analyses.
    state: Option<FriendshipState>,
}

/// Builds the in-memory store from a network description file.
///
/// Goes through the store's own request/accept lifecycle, so the file is
/// subject to the same validation as any other caller (unknown endpoints,
/// self-pairs, and duplicates are rejected).
fn load_network(path: &Path) -> Result<InMemoryNetwork> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read network file {}", path.display()))?;
    let file: NetworkFile = serde_json::from_str(&content)
        .with_context(|| format!("Invalid network file {}", path.display()))?;

    let mut net = InMemoryNetwork::new();
    for user in file.users {
        net.add_user(user)?;
    }
    for entry in &file.friendships {
        net.add_friendship(&entry.first, &entry.second)?;
        if entry.state.unwrap_or(FriendshipState::Approved) == FriendshipState::Approved {
            net.accept_friendship(&entry.first, &entry.second)?;
        }
    }
    Ok(net)
}

/// Resolve the output format from friendnet.toml, if one is present.
fn config_wants_json(dir: &Path) -> Result<bool> {
    Ok(load_config(dir)?
        .and_then(|cfg| cfg.output)
        .and_then(|out| out.format)
        .is_some_and(|format| format.eq_ignore_ascii_case("json")))
}

fn main() -> Result<()> {
    init_structured_logging();
    let cli = Cli::parse();

    let net = load_network(&cli.network)?;
    let report = Network::new(&net)
        .analyze()
        .context("Network analysis failed")?;

    let config_dir = match cli.network.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    if cli.json || config_wants_json(&config_dir)? {
        print_json(&report);
    } else {
        print_plain(&report, cli.communities);
    }
    Ok(())
}
