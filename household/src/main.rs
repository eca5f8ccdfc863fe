//! Household Tree Runner
//!
//! Loads a member snapshot, builds and audits its family tree, and prints the
//! exported nodes.

mod config;

use anyhow::{bail, Context};
use clap::Parser;
use household::{audit_household, build_family_tree, export_tree, export_tree_pretty, verify_tree};
use household::HouseholdSnapshot;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use config::RunConfig;

fn main() -> anyhow::Result<()> {
    let config = RunConfig::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let json = std::fs::read_to_string(&config.input)
        .with_context(|| format!("reading {}", config.input.display()))?;
    let snapshot = HouseholdSnapshot::from_json(&json)
        .with_context(|| format!("parsing {}", config.input.display()))?;

    info!(
        household = snapshot.household_id.as_deref().unwrap_or("-"),
        members = snapshot.members.len(),
        "Building family tree"
    );

    let tree = build_family_tree(&snapshot.members);
    verify_tree(&snapshot.members, &tree)?;
    let anomalies = audit_household(&snapshot.members);

    info!(
        roots = tree.roots().count(),
        anomalies = anomalies.len(),
        "Family tree built"
    );

    let output = if config.pretty {
        export_tree_pretty(&tree)?
    } else {
        export_tree(&tree)?
    };
    println!("{}", output);

    if config.audit && !anomalies.is_empty() {
        bail!("household has {} anomalies", anomalies.len());
    }

    Ok(())
}
