//! sclcfggen - switch configuration generator CLI
//!
//! Entry point that wires files to the pure compiler: reads the port map
//! CSV and the SCL document, builds the lookup indexes, compiles the
//! selected switch, and writes the configuration text.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};

use sclcfg_compiler::{compile, CompileOptions, PortMap};
use sclcfg_scl::{SclDocument, TopologyIndex, VlanRegistry};
use sclcfg_types::VlanId;

/// Switch configuration generator for SCL substations
#[derive(Parser, Debug)]
#[command(name = "sclcfggen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port map CSV: switchName, portName, iedName, receivingPortName
    #[arg(short = 'p', long)]
    port_map: PathBuf,

    /// SCL document (SCD file) with the Communication section and VLAN
    /// allocation registry
    #[arg(short = 'd', long)]
    scd: PathBuf,

    /// Switch to compile; omit to list the switches found in the port map
    #[arg(short = 's', long)]
    switch: Option<String>,

    /// Native VLAN (decimal)
    #[arg(short = 'n', long, default_value = "1000")]
    native_vlan: String,

    /// Output file (stdout when omitted)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,
}

/// Initializes tracing/logging subsystem
fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_new(level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let csv = fs::read_to_string(&args.port_map)
        .with_context(|| format!("reading port map {}", args.port_map.display()))?;
    let port_map = PortMap::parse(&csv);

    let switch = match &args.switch {
        Some(switch) => switch,
        None => {
            for name in port_map.switch_names() {
                println!("{name}");
            }
            return Ok(());
        }
    };

    let xml = fs::read_to_string(&args.scd)
        .with_context(|| format!("reading SCL document {}", args.scd.display()))?;
    let scl = SclDocument::from_xml(&xml)
        .with_context(|| format!("parsing SCL document {}", args.scd.display()))?;
    let topology = TopologyIndex::build(&scl);
    let registry = VlanRegistry::build(&scl);
    info!(
        devices = topology.device_count(),
        vlan_allocations = registry.len(),
        "SCL document indexed"
    );

    let native_vlan: VlanId = args
        .native_vlan
        .parse()
        .with_context(|| format!("invalid native VLAN {:?}", args.native_vlan))?;

    let output = compile(
        &port_map,
        &topology,
        &registry,
        switch,
        &CompileOptions::new(native_vlan),
    );

    if let Some(name) = &output.report.unrecognized_switch_name {
        warn!(
            switch = %name,
            "switch name does not match the naming convention, tier/network may be wrong"
        );
    }
    if !output.report.short_rows.is_empty() {
        warn!(
            lines = ?output.report.short_rows,
            "port map rows with fewer than four fields"
        );
    }
    for skipped in &output.report.skipped_ports {
        warn!(
            port = %skipped.port_name,
            ied = %skipped.ied_name,
            reason = ?skipped.reason,
            "port excluded from output"
        );
    }

    let text = output.document.render();
    match &args.output {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "configuration written");
        }
        None => println!("{text}"),
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
