use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::config::structs::configuration::Configuration;

static BYTES_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+(?:\.[0-9]+)?)\s*([A-Za-z]{2,4})$").unwrap()
});

/// Parses a human-readable byte quantity such as `"1.5GiB"` or `"2MB"`.
///
/// Binary suffixes (KiB/MiB/GiB/TiB) multiply by powers of 1024, decimal
/// suffixes (KB/MB/GB/TB) by powers of 1000, case-insensitive. A bare number
/// parses as-is, an unrecognized suffix keeps the number verbatim, and anything
/// unparseable yields 0. Configuration files are hand-edited, so this never errors.
pub fn parse_bytes_str(input: &str) -> i64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match BYTES_PATTERN.captures(trimmed) {
        Some(captures) => {
            let number: f64 = captures[1].parse().unwrap_or(0.0);
            let multiplier = suffix_multiplier(&captures[2]);
            (number * multiplier as f64) as i64
        }
        None => trimmed.parse::<i64>().unwrap_or(0)
    }
}

fn suffix_multiplier(suffix: &str) -> u64 {
    match suffix.to_ascii_uppercase().as_str() {
        "KIB" => 1024u64.pow(1),
        "MIB" => 1024u64.pow(2),
        "GIB" => 1024u64.pow(3),
        "TIB" => 1024u64.pow(4),
        "KB" => 1000u64.pow(1),
        "MB" => 1000u64.pow(2),
        "GB" => 1000u64.pow(3),
        "TB" => 1000u64.pow(4),
        _ => 1
    }
}

/// Renders a byte count in binary units, e.g. `"1.50 GiB"`.
pub fn fmt_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let units = ["KiB", "MiB", "GiB", "TiB", "PiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < units.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, units[unit])
}

/// Renders a signed byte count, used for upload/download deltas.
pub fn fmt_bytes_signed(bytes: i64) -> String {
    if bytes < 0 {
        format!("-{}", fmt_bytes(bytes.unsigned_abs()))
    } else {
        fmt_bytes(bytes as u64)
    }
}

pub fn setup_logging(config: &Configuration)
{
    let level = match config.log_level.as_str() {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        unknown => {
            eprintln!("Unknown log level '{}', defaulting to 'info'.", unknown);
            log::LevelFilter::Info
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}
