use clap::ArgMatches;
use tracing::{error, info};

use hubcap_core::config::CONFIG_FILE;
use hubcap_core::events;
use hubcap_core::targets;
use hubcap_core::{ConfigurationDocument, EnvOverrides, OverrideMap, TargetType};

use crate::table::TableFormatter;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("caps", sub_matches)) => handle_caps_command(matches, sub_matches),
        Some(("url", _)) => handle_url_command(matches),
        Some(("plan", _)) => handle_plan_command(matches),
        Some(("targets", _)) => handle_targets_command(),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}

/// Overrides for this run: `--set` values layered over the environment.
fn collect_overrides(matches: &ArgMatches) -> OverrideMap {
    let explicit: OverrideMap = matches
        .get_many::<(String, String)>("set")
        .into_iter()
        .flatten()
        .cloned()
        .collect();

    info!(event = "cli.overrides_collected", explicit_count = explicit.len());

    explicit.layered_over(&EnvOverrides::capture())
}

/// Load the configuration document, printing a user-facing error on failure.
fn load_config() -> Result<ConfigurationDocument, Box<dyn std::error::Error>> {
    match ConfigurationDocument::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Error: Could not load config: {}\n\
                 Tip: hubcap reads {} relative to the current directory.",
                e, CONFIG_FILE
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_caps_command(
    matches: &ArgMatches,
    sub_matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = sub_matches.get_flag("json");

    info!(event = "cli.caps_started", json_output = json_output);

    let config = load_config()?;
    let overrides = collect_overrides(matches);

    match hubcap_core::resolve_capabilities(&config, &overrides) {
        Ok(caps) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&caps)?);
            } else {
                TableFormatter::new(&caps).print_table(&caps);
            }

            info!(event = "cli.caps_completed", count = caps.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: Failed to resolve capabilities: {}", e);

            error!(
                event = "cli.caps_failed",
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_url_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.url_started");

    let config = load_config()?;
    let overrides = collect_overrides(matches);

    match hubcap_core::resolve_hub_url(&config, &overrides) {
        Ok(url) => {
            println!("{}", url);
            info!(event = "cli.url_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: Failed to resolve hub URL: {}", e);

            error!(
                event = "cli.url_failed",
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_plan_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.plan_started");

    let config = load_config()?;
    let overrides = collect_overrides(matches);

    match hubcap_core::resolve_plan(&config, &overrides) {
        Ok(plan) => {
            println!("{}", serde_json::to_string_pretty(&plan)?);
            info!(event = "cli.plan_completed", target = %plan.target);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: Failed to resolve session plan: {}", e);

            error!(
                event = "cli.plan_failed",
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_targets_command() -> Result<(), Box<dyn std::error::Error>> {
    let default = targets::default_target_name();

    for target_type in TargetType::all() {
        let Some(backend) = targets::get_target_by_type(*target_type) else {
            continue;
        };
        let marker = if backend.name() == default {
            " (default)"
        } else {
            ""
        };
        println!(
            "{:<14} {} [{}]{}",
            backend.name(),
            backend.display_name(),
            backend.section(),
            marker
        );
    }

    Ok(())
}
