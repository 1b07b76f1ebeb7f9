use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::ArgMatches;
use tracing::{info, warn};

use opsdeck_core::api::{ApiClient, ControlAction, ReqwestExec};
use opsdeck_core::config::ConsoleConfig;
use opsdeck_core::orchestrator::Orchestrator;
use opsdeck_core::registry::View;
use opsdeck_core::session::{self, LoginGuard, Session, TokenStore};
use opsdeck_core::stream::{EventChannel, EventFeed, LiveChannel};

use crate::console::ConsoleSink;
use crate::format::format_uptime;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Load configuration with a warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user
/// via stderr and a structured log event.
fn load_config_with_warning() -> ConsoleConfig {
    match opsdeck_core::config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.opsdeck/config.toml for syntax errors.",
                e
            );
            warn!(event = "cli.config.load_failed", error = %e);
            ConsoleConfig::default()
        }
    }
}

fn api_client(
    config: &ConsoleConfig,
    session: Arc<Session>,
) -> Result<ApiClient<ReqwestExec>, Box<dyn std::error::Error>> {
    let exec = ReqwestExec::new(
        &config.base_url,
        Duration::from_secs(config.refresh.request_timeout_secs),
    )?;
    Ok(ApiClient::new(exec, session))
}

fn restore_session() -> Result<Arc<Session>, Box<dyn std::error::Error>> {
    let store = TokenStore::default_location()?;
    Ok(Arc::new(Session::restore(store)))
}

pub fn run_command(matches: &ArgMatches) -> CommandResult {
    match matches.subcommand() {
        Some(("login", sub_matches)) => handle_login_command(sub_matches),
        Some(("logout", sub_matches)) => handle_logout_command(sub_matches),
        Some(("status", sub_matches)) => handle_status_command(sub_matches),
        Some(("control", sub_matches)) => handle_control_command(sub_matches),
        Some(("run", sub_matches)) => handle_run_command(sub_matches),
        Some(("completions", sub_matches)) => handle_completions_command(sub_matches),
        _ => Err("Unknown command".into()),
    }
}

fn handle_login_command(matches: &ArgMatches) -> CommandResult {
    let username = matches
        .get_one::<String>("username")
        .ok_or("Username argument is required")?;
    let password = match matches.get_one::<String>("password") {
        Some(password) => password.clone(),
        None => std::env::var("OPSDECK_PASSWORD")
            .map_err(|_| "Password required: pass --password or set OPSDECK_PASSWORD")?,
    };

    let config = load_config_with_warning();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let session = restore_session()?;
        let client = api_client(&config, session)?;
        let mut guard = LoginGuard::new(config.login.clone());

        session::login(&client, &mut guard, username, &password).await?;
        println!("Session established.");
        Ok(())
    })
}

fn handle_logout_command(_matches: &ArgMatches) -> CommandResult {
    let session = restore_session()?;
    if !session.is_authenticated() {
        println!("No active session.");
        return Ok(());
    }
    session::logout(&session);
    println!("Logged out.");
    Ok(())
}

fn handle_status_command(matches: &ArgMatches) -> CommandResult {
    let json = matches.get_flag("json");
    let config = load_config_with_warning();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let session = restore_session()?;
        if !session.is_authenticated() {
            return Err("No active session. Run `opsdeck login` first.".into());
        }
        let client = api_client(&config, session)?;
        let status = client.status().await?;

        if json {
            println!("{}", serde_json::to_string_pretty(&status)?);
        } else {
            let state = if status.emergency_stopped {
                "STOPPED"
            } else if status.paused {
                "paused"
            } else {
                "online"
            };
            println!(
                "{} | mode {} | up {} | v{}",
                state,
                status.mode_display(),
                format_uptime(status.uptime_seconds),
                status.version.as_deref().unwrap_or("?"),
            );
        }
        Ok(())
    })
}

fn handle_control_command(matches: &ArgMatches) -> CommandResult {
    let action_name = matches
        .get_one::<String>("action")
        .ok_or("Action argument is required")?;
    let action =
        ControlAction::parse(action_name).ok_or_else(|| format!("Unknown action '{action_name}'"))?;

    if action == ControlAction::EmergencyStop && !matches.get_flag("yes") {
        print!("EMERGENCY STOP — freeze ALL operations? [y/N] ");
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let config = load_config_with_warning();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let session = restore_session()?;
        if !session.is_authenticated() {
            return Err("No active session. Run `opsdeck login` first.".into());
        }
        let client = api_client(&config, session)?;
        let outcome = client.control(action).await?;

        if outcome.ok {
            info!(event = "cli.control.executed", action = action_name.as_str());
            println!("{action_name} executed.");
            Ok(())
        } else {
            Err(outcome
                .error
                .unwrap_or_else(|| format!("{action_name} failed"))
                .into())
        }
    })
}

fn handle_run_command(matches: &ArgMatches) -> CommandResult {
    let view_name = matches
        .get_one::<String>("view")
        .ok_or("View argument is required")?;
    let view = View::parse(view_name).ok_or_else(|| format!("Unknown view '{view_name}'"))?;

    let config = load_config_with_warning();
    let interval_secs = matches
        .get_one::<u64>("interval")
        .copied()
        .unwrap_or(config.refresh.interval_secs);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let session = restore_session()?;
        if !session.is_authenticated() {
            return Err("No active session. Run `opsdeck login` first.".into());
        }
        let client = api_client(&config, session.clone())?;

        // Live event channel, independent of the polling cycle.
        let feed = Arc::new(Mutex::new(EventFeed::new()));
        let (notice_tx, mut notice_rx) = tokio::sync::mpsc::unbounded_channel();
        let mut live = LiveChannel::new();
        live.replace(EventChannel::new(
            &config.base_url,
            session.clone(),
            feed.clone(),
            notice_tx,
            Duration::from_millis(config.stream.reconnect_delay_ms),
        ));

        let sink = ConsoleSink::new();
        let (orchestrator, handle) =
            Orchestrator::new(client, sink, view, Duration::from_secs(interval_secs));
        let mut loop_task = tokio::spawn(orchestrator.run());

        let mut lines = tokio::io::AsyncBufReadExt::lines(tokio::io::BufReader::new(
            tokio::io::stdin(),
        ));
        let mut stdin_open = true;

        let outcome: CommandResult = loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!(event = "cli.run.interrupted");
                    break Ok(());
                }
                Some(notice) = notice_rx.recv() => {
                    eprintln!("! {}", notice.message);
                }
                line = lines.next_line(), if stdin_open => match line {
                    Ok(Some(line)) => {
                        if !handle_console_input(line.trim(), &handle) {
                            break Ok(());
                        }
                    }
                    Ok(None) | Err(_) => {
                        stdin_open = false;
                    }
                },
                result = &mut loop_task => {
                    result?;
                    if session.is_authenticated() {
                        break Ok(());
                    }
                    break Err("Session expired — logged out.".into());
                }
            }
        };

        drop(handle);
        loop_task.abort();
        live.shutdown();
        outcome
    })
}

/// One line of console input while the dashboard runs. Returns false to
/// stop the console.
fn handle_console_input(input: &str, handle: &opsdeck_core::RefreshHandle) -> bool {
    match input {
        "" => {}
        "quit" | "exit" => return false,
        "refresh" => {
            // Dropped silently if a cycle is already in flight.
            handle.request_refresh();
        }
        other => {
            if let Some(name) = other.strip_prefix("view ") {
                match View::parse(name.trim()) {
                    Some(view) => {
                        handle.switch_view(view);
                    }
                    None => {
                        warn!(event = "cli.run.unknown_view", view = name.trim());
                        eprintln!("Unknown view '{}'", name.trim());
                    }
                }
            } else {
                eprintln!("Commands: view <name> | refresh | quit");
            }
        }
    }
    true
}

fn handle_completions_command(matches: &ArgMatches) -> CommandResult {
    let shell_name = matches
        .get_one::<String>("shell")
        .ok_or("Shell argument is required")?;
    let shell: clap_complete::Shell = shell_name
        .parse()
        .map_err(|_| format!("Unknown shell '{shell_name}'"))?;
    let mut cli = crate::app::build_cli();
    clap_complete::generate(shell, &mut cli, "opsdeck", &mut std::io::stdout());
    Ok(())
}
