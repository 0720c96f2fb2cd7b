//! to-summary CLI: builds TO summary records from IT and NX domain data.
//!
//! Usage:
//!   to-summary [--config FILE] [--input-root DIR] [--output-dir DIR] [--join positional|keyed]
//!
//! With no flags, inputs are read from and outputs written to the working
//! directory.

use clap::Parser;
use std::path::PathBuf;
use to_summary::{JoinStrategy, ReportConfig, RunReport};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "to-summary",
    version,
    about = "Merge IT and NX domain data into TO summary records"
)]
struct Cli {
    /// YAML config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory the input collection paths are relative to
    #[arg(long)]
    input_root: Option<PathBuf>,
    /// Directory the output files are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// How supplemental records attach to projects (positional, keyed)
    #[arg(long)]
    join: Option<JoinStrategy>,
    /// Skip the per-record digest
    #[arg(short, long)]
    quiet: bool,
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn report_config(&self) -> Result<ReportConfig, String> {
        let mut config = match &self.config {
            Some(path) => ReportConfig::from_yaml_file(path).map_err(|e| e.to_string())?,
            None => ReportConfig::default(),
        };
        if let Some(dir) = &self.input_root {
            config.input_root = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(join) = self.join {
            config.join = join;
        }
        Ok(config)
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_report(report: &RunReport, quiet: bool) {
    for (collection, count) in &report.loaded {
        println!("Loaded {}: {} items", collection, count);
    }
    println!("Summary: {}", report.summary_json.display());
    println!("Field mapping: {}", report.field_mapping_csv.display());
    println!();
    println!("=== Done ===");
    println!(
        "Generated {} TO summary records ({} field mapping rows)",
        report.records.len(),
        report.provenance_rows
    );

    if quiet {
        return;
    }
    for (i, record) in report.records.iter().enumerate() {
        println!();
        println!("{}", to_summary::report::record_digest(i + 1, record));
    }
}

fn cmd_run(cli: &Cli) -> i32 {
    let config = match cli.report_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    println!("=== Generating TO Summary from IT Domain and NX Domain ===");
    match to_summary::run(&config) {
        Ok(report) => {
            print_report(&report, cli.quiet);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    std::process::exit(cmd_run(&cli));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, yaml: &str) -> String {
        let path = dir.path().join("report.yaml");
        std::fs::write(&path, yaml).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn config_file_values_apply_without_flags() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "join: keyed\ninput_root: /data/extract\n");

        let cli = Cli::try_parse_from(["to-summary", "--config", path.as_str()]).unwrap();
        let config = cli.report_config().unwrap();
        assert_eq!(config.join, JoinStrategy::Keyed);
        assert_eq!(config.input_root, PathBuf::from("/data/extract"));
    }

    #[test]
    fn flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "join: keyed\ninput_root: /data/extract\noutput_dir: /data/out\n",
        );

        let cli = Cli::try_parse_from([
            "to-summary",
            "--config",
            path.as_str(),
            "--join",
            "positional",
            "--input-root",
            "/srv/in",
            "--output-dir",
            "/srv/out",
        ])
        .unwrap();
        let config = cli.report_config().unwrap();
        assert_eq!(config.join, JoinStrategy::Positional);
        assert_eq!(config.input_root, PathBuf::from("/srv/in"));
        assert_eq!(config.output_dir, PathBuf::from("/srv/out"));
    }

    #[test]
    fn unknown_join_flag_is_rejected() {
        assert!(Cli::try_parse_from(["to-summary", "--join", "fuzzy"]).is_err());
    }

    #[test]
    fn missing_config_file_is_reported() {
        let cli = Cli::try_parse_from(["to-summary", "--config", "/nonexistent/report.yaml"])
            .unwrap();
        let err = cli.report_config().unwrap_err();
        assert!(err.contains("report.yaml"));
    }
}
