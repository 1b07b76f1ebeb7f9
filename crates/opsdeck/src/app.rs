use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("opsdeck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminal operations console for the agent platform")
        .long_about(
            "opsdeck authenticates an operator against the platform API and runs the \
            live console: a polling refresh engine that fans out each view's fetch set, \
            renders status/stat/timeline panels, and streams backend log events.",
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only emit error-level log events")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("login")
                .about("Authenticate and persist a session token")
                .arg(
                    Arg::new("username")
                        .long("username")
                        .short('u')
                        .help("Operator username")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .short('p')
                        .help("Operator password (falls back to OPSDECK_PASSWORD)"),
                ),
        )
        .subcommand(Command::new("logout").about("Tear the current session down"))
        .subcommand(
            Command::new("status")
                .about("Fetch the platform status summary")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("control")
                .about("Issue a control action")
                .arg(
                    Arg::new("action")
                        .help("Control action to execute")
                        .required(true)
                        .value_parser(["pause", "resume", "emergency-stop", "emergency-reset"])
                        .index(1),
                )
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .help("Skip the emergency-stop confirmation prompt")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("run")
                .about("Run the live console")
                .arg(
                    Arg::new("view")
                        .long("view")
                        .short('w')
                        .help("Initial view")
                        .value_parser([
                            "command",
                            "activity",
                            "intel",
                            "communities",
                            "manage",
                            "server",
                            "network",
                        ])
                        .default_value("command"),
                )
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .short('i')
                        .help("Refresh interval in seconds (overrides config)")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "elvish", "powershell"])
                        .index(1),
                ),
        )
}
