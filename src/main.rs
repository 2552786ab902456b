use std::io::Read;
use std::process::exit;
use clap::Parser;
use log::{error, info};
use ratio_ledger::common::common::{fmt_bytes, fmt_bytes_signed, setup_logging};
use ratio_ledger::config::structs::buffers_config::BuffersConfig;
use ratio_ledger::config::structs::configuration::Configuration;
use ratio_ledger::config::structs::tracker_alias_map::TrackerAliasMap;
use ratio_ledger::config::structs::trackers_config::TrackersConfig;
use ratio_ledger::ledger::structs::ratio_ledger::RatioLedger;
use ratio_ledger::ratio::structs::tracker_ratio_row::TrackerRatioRow;
use ratio_ledger::store::structs::state_store::StateStore;
use ratio_ledger::structs::Cli;
use ratio_ledger::upstream::structs::torrents_summary::TorrentsSummary;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let data = match &args.snapshot {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };

    let summary = match TorrentsSummary::from_slice(&data) {
        Ok(summary) => summary,
        Err(e) => {
            error!("snapshot rejected: {}", e);
            exit(1);
        }
    };

    let aliases = TrackerAliasMap::from(&TrackersConfig::load_file(&config.trackers_path));
    let overrides = BuffersConfig::load_file(&config.buffers_path).overrides();

    let mut rows = TrackerRatioRow::compute_rows(&summary, &aliases, &overrides);

    if config.ledger.enabled && !args.no_ledger {
        let ledger = RatioLedger::new(StateStore::new(&config.ledger.state_path), config.ledger.reset_policy);
        rows = ledger.apply(rows);
    }

    if args.json {
        match serde_json::to_string_pretty(&serde_json::json!({ "trackers": rows })) {
            Ok(document) => println!("{}", document),
            Err(e) => {
                error!("could not serialize rows: {}", e);
                exit(1);
            }
        }
    } else {
        print_table(&rows);
    }

    Ok(())
}

fn print_table(rows: &[TrackerRatioRow])
{
    println!("{:<32} {:>12} {:>12} {:>8} {:>13} {:>6} {:>12}",
        "Tracker", "Upload", "Download", "Ratio", "Delta", "#", "Total");
    for row in rows {
        let ratio = if row.ratio.is_infinite() { String::from("inf") } else { format!("{:.2}", row.ratio) };
        println!("{:<32} {:>12} {:>12} {:>8} {:>13} {:>6} {:>12}",
            row.tracker,
            fmt_bytes(row.uploaded),
            fmt_bytes(row.downloaded),
            ratio,
            fmt_bytes_signed(row.delta),
            row.count,
            fmt_bytes(row.total_size));
    }
}
