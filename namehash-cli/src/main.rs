//! Namehash CLI
//!
//! Command-line interface for computing ENS namehashes.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use namehash_core::types::{inspect_name, LabelHash, Node};
use namehash_crypto::{append_label, labelhash, namehash};

use crate::config::CliConfig;

/// namehash - ENS namehash calculator
#[derive(Parser)]
#[command(name = "namehash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Path to a JSON config file
    #[arg(short, long, global = true, env = "NAMEHASH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the namehash of one or more names
    Hash {
        /// Names to hash (e.g. vitalik.eth)
        #[arg(required = true)]
        names: Vec<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
        /// Fail on names with empty labels instead of warning
        #[arg(long)]
        strict: bool,
    },

    /// Compute the Keccak-256 hash of single labels
    Label {
        /// Labels to hash (no dots are interpreted)
        #[arg(required = true)]
        labels: Vec<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Derive the node of a subdomain from its parent's node
    Subnode {
        /// Parent node as hex (0x prefix optional)
        parent: String,
        /// Label to prepend
        label: String,
    },

    /// Show the configured ENS registry
    Registry {
        /// Network ID (defaults to the configured network)
        #[arg(short, long, env = "NAMEHASH_NETWORK")]
        network: Option<u64>,
        /// List every configured network
        #[arg(long)]
        all: bool,
    },

    /// Print the effective configuration as JSON
    Config,
}

/// A computed namehash, as printed by `hash --json`.
#[derive(Debug, Serialize)]
struct HashRecord {
    name: String,
    node: Node,
}

/// A computed label hash, as printed by `label --json`.
#[derive(Debug, Serialize)]
struct LabelRecord {
    label: String,
    hash: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_json);

    let config = CliConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Commands::Hash {
            names,
            json,
            strict,
        } => cmd_hash(&names, json, &config.strict(strict)),
        Commands::Label { labels, json } => cmd_label(&labels, json),
        Commands::Subnode { parent, label } => cmd_subnode(&parent, &label),
        Commands::Registry { network, all } => {
            let config = match network {
                Some(network_id) => config.with_network(network_id),
                None => config,
            };
            cmd_registry(&config, all)
        }
        Commands::Config => cmd_config(&config),
    }
}

fn init_logging(verbose: bool, json: bool) {
    let filter = if verbose {
        "namehash=debug,info"
    } else {
        "namehash=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into());

    // Logs go to stderr so stdout stays parseable.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Compute namehashes
#[instrument(skip(config))]
fn cmd_hash(names: &[String], json: bool, config: &CliConfig) -> Result<()> {
    let records = hash_names(names, config.strict)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{}  {}", record.node.to_hex().green(), record.name.bold());
        }
    }

    Ok(())
}

/// Hashes each name, flagging (or with `strict`, rejecting) empty labels.
fn hash_names(names: &[String], strict: bool) -> Result<Vec<HashRecord>> {
    let mut records = Vec::with_capacity(names.len());

    for name in names {
        let shape = inspect_name(name);
        if !shape.is_well_formed() {
            if strict {
                namehash_core::types::ensure_well_formed(name)
                    .with_context(|| format!("Refusing to hash '{}'", name))?;
            }
            warn!(
                name = %name,
                empty_labels = ?shape.empty_labels,
                "Name contains empty labels; hashing as-is"
            );
        }

        let node = namehash(name);
        debug!(name = %name, node = %node, "Namehash computed");
        records.push(HashRecord {
            name: name.clone(),
            node,
        });
    }

    Ok(records)
}

/// Compute label hashes
fn cmd_label(labels: &[String], json: bool) -> Result<()> {
    let records: Vec<LabelRecord> = labels
        .iter()
        .map(|label| {
            if label.contains('.') {
                warn!(label = %label, "Label contains '.', hashing it as a single label");
            }
            let hash: LabelHash = labelhash(label);
            LabelRecord {
                label: label.clone(),
                hash: hash.to_hex(),
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{}  {}", record.hash.green(), record.label.bold());
        }
    }

    Ok(())
}

/// Derive a subdomain node
#[instrument]
fn cmd_subnode(parent: &str, label: &str) -> Result<()> {
    let parent: Node = parent.parse().context("Invalid parent node")?;
    let node = append_label(parent, label);
    debug!(parent = %parent, node = %node, "Subnode derived");
    println!("{}", node.to_hex());
    Ok(())
}

/// Show registry configuration
fn cmd_registry(config: &CliConfig, all: bool) -> Result<()> {
    if all {
        for (id, contracts) in config.registries.networks() {
            println!("{} {}", format!("[{}]", id).cyan().bold(), contracts.registry);
            if let Some(resolver) = contracts.public_resolver {
                println!("    {} {}", "Public resolver:".dimmed(), resolver);
            }
        }
        return Ok(());
    }

    let network_id = config.network_id;
    let contracts = config
        .registries
        .contracts(network_id)
        .context("Registry lookup failed")?;

    println!("{}", contracts.registry);
    if let Some(resolver) = contracts.public_resolver {
        debug!(network_id, resolver = %resolver, "Public resolver configured");
    }

    Ok(())
}

/// Print effective configuration
fn cmd_config(config: &CliConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
