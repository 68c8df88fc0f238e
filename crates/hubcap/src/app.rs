use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("hubcap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve capabilities and hub URL for a mobile automation session")
        .long_about(
            "hubcap reads configuration/capabilities.json from the working directory, \
             applies overrides from the environment (PLATFORM_NAME, TO_INSTALL, TARGET_SUT, ...) \
             and prints the capability set and Appium hub URL a driver should use.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .short('s')
                .value_name("NAME=VALUE")
                .help("Override a value for this run (takes precedence over the environment)")
                .action(ArgAction::Append)
                .value_parser(parse_assignment)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("caps")
                .about("Print the resolved capability set")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("url").about("Print the resolved Appium hub URL"))
        .subcommand(Command::new("plan").about("Print target, hub URL and capabilities as JSON"))
        .subcommand(Command::new("targets").about("List supported deployment targets"))
}

/// Parse a `NAME=VALUE` override. The value may be empty or contain `=`.
fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_verifies() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_set_collects_assignments() {
        let matches = build_cli()
            .try_get_matches_from([
                "hubcap",
                "--set",
                "TARGET_SUT=browserstack",
                "-s",
                "TO_INSTALL=",
                "caps",
            ])
            .unwrap();

        let values: Vec<(String, String)> = matches
            .get_many::<(String, String)>("set")
            .unwrap()
            .cloned()
            .collect();
        assert_eq!(
            values,
            vec![
                ("TARGET_SUT".to_string(), "browserstack".to_string()),
                ("TO_INSTALL".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("BROWSERSTACK_ACCESS_KEY=a=b").unwrap(),
            ("BROWSERSTACK_ACCESS_KEY".to_string(), "a=b".to_string())
        );
        assert!(parse_assignment("NOVALUE").is_err());
        assert!(parse_assignment("=value").is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(build_cli().try_get_matches_from(["hubcap"]).is_err());
    }
}
