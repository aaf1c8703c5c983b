// Access Roster - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/access-roster
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/access-roster --config roster.json --save roster.txt --verbose
// ```

use access_roster::system::{storage, AccessControlSystem, LoggingConfig};
use access_roster::types::config::CliArgs;
use access_roster::types::RosterConfig;
use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match RosterConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let logging_result = LoggingConfig::from_cli_args(&args).init();

    let _logging_guard = match logging_result {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    let dry_run = args.dry_run;
    let config = match RosterConfig::from_cli_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // A dry run checks the seeds too; a real run reports them while building
    let validation = if dry_run { config.validate() } else { config.validate_persistence() };
    if let Err(e) = validation {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!(
        users = config.users.len(),
        resources = config.resources.len(),
        "Configuration loaded and validated"
    );

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - the roster will not be processed.");
        return;
    }

    // Failures past this point are reported but do not change the exit code
    if let Err(e) = run(&config) {
        error!("Roster run failed: {:#}", e);
        eprintln!("Error: {:#}", e);
    }
}

/// Populate the system, check access for everyone, sort and persist
fn run(config: &RosterConfig) -> anyhow::Result<()> {
    let mut system = config.build_system().context("Failed to build roster")?;

    if let Some(path) = &config.load_path {
        system
            .load_from_file(path)
            .with_context(|| format!("Failed to load roster from '{}'", path))?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "--- All users ---")?;
    system.display_all_users(&mut out)?;

    writeln!(out, "--- Access check ---")?;
    system.report_access_for_all(&mut out)?;

    if config.sort_users {
        writeln!(out, "--- Users sorted by access level ---")?;
        system.sort_users_by_access_level();
        system.display_all_users(&mut out)?;
    }
    out.flush()?;

    persist(config, &system)
}

fn persist(config: &RosterConfig, system: &AccessControlSystem) -> anyhow::Result<()> {
    if let Some(path) = &config.save_path {
        let saved = system
            .save_to_file(path)
            .with_context(|| format!("Failed to save roster to '{}'", path))?;
        eprintln!("Saved {} users to {}", saved, path);
    }

    if let Some(path) = &config.profiles_output {
        let written = storage::write_user_profiles(path, system.users())
            .with_context(|| format!("Failed to write user profiles to '{}'", path))?;
        eprintln!("User profiles written to: {} ({} users)", path, written);
    }

    Ok(())
}
