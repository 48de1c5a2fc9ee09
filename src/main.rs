// Draft room entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, keep stdout for the board)
// 2. Load config
// 3. Build the draft engine (seeded if the config says so)
// 4. Run the stdin command loop, rendering a snapshot after every operation

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use tracing::info;

use draft_room::config;
use draft_room::draft::{DraftEngine, DraftSnapshot, Phase};

fn main() -> anyhow::Result<()> {
    // 1. Load config first; it decides where the log goes.
    let config = config::load_config().context("failed to load configuration")?;

    // 2. Initialize tracing.
    init_tracing(&config.log_path)?;
    info!("draft room starting up");

    // 3. Build the engine.
    let mut engine = match config.seed {
        Some(seed) => {
            info!(seed, "using fixed shuffle seed");
            DraftEngine::with_seed(seed)
        }
        None => DraftEngine::new(),
    };

    // 4. Command loop.
    println!("draft room -- type 'help' for commands");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        let result = match command {
            "team" => engine.add_team(rest),
            "join" => engine.add_participant(rest),
            "cut" => match parse_id(rest) {
                Ok(id) => engine.delete_team(id),
                Err(message) => {
                    eprintln!("{message}");
                    continue;
                }
            },
            "drop" => match parse_id(rest) {
                Ok(id) => engine.delete_participant(id),
                Err(message) => {
                    eprintln!("{message}");
                    continue;
                }
            },
            "start" => engine.start_draft(),
            "pick" => engine.advance_pick(),
            "new" => engine.new_draft(),
            "board" => {
                render(&engine.snapshot());
                continue;
            }
            "json" => {
                let json = serde_json::to_string_pretty(&engine.snapshot())
                    .context("failed to serialize snapshot")?;
                println!("{json}");
                continue;
            }
            "help" => {
                print_help();
                continue;
            }
            "quit" | "exit" => break,
            other => {
                eprintln!("unknown command: {other} (try 'help')");
                continue;
            }
        };

        match result {
            Ok(snapshot) => render(&snapshot),
            Err(err) => eprintln!("error: {err}"),
        }
    }

    info!("draft room shut down cleanly");
    Ok(())
}

fn parse_id(raw: &str) -> Result<u64, String> {
    raw.parse::<u64>()
        .map_err(|_| format!("expected a numeric id, got '{raw}'"))
}

fn print_help() {
    println!("commands:");
    println!("  team <name>   register a team");
    println!("  join <name>   register a participant");
    println!("  cut <id>      delete a team (setup only)");
    println!("  drop <id>     delete a participant (setup only)");
    println!("  start         start the draft");
    println!("  pick          advance one pick");
    println!("  new           abandon the draft, back to setup");
    println!("  board         print the current board");
    println!("  json          print the current snapshot as JSON");
    println!("  quit          exit");
}

/// Render a snapshot to stdout, one layout per phase.
fn render(snapshot: &DraftSnapshot) {
    match snapshot.phase {
        Phase::Setup => {
            println!("-- setup --");
            println!("teams ({}):", snapshot.teams.len());
            for team in &snapshot.teams {
                println!("  [{}] {}", team.id, team.name);
            }
            println!("participants ({}):", snapshot.participants.len());
            for participant in &snapshot.participants {
                println!("  [{}] {}", participant.id, participant.name);
            }
            if snapshot.teams.len() < 2 || snapshot.participants.len() < 2 {
                println!("(need at least 2 teams and 2 participants to start)");
            }
        }
        Phase::Draft => {
            println!(
                "-- draft, round {} ({} left in pool) --",
                snapshot.current_round, snapshot.pool_remaining
            );
            print_rosters(snapshot, snapshot.current_team_id);
        }
        Phase::Results => {
            println!("-- results --");
            print_rosters(snapshot, None);
        }
    }
}

fn print_rosters(snapshot: &DraftSnapshot, current_team_id: Option<u64>) {
    for team in &snapshot.teams {
        let marker = if Some(team.id) == current_team_id {
            ">"
        } else {
            " "
        };
        match team.quota {
            Some(quota) => println!("{marker} {} ({}/{quota})", team.name, team.members.len()),
            None => println!("{marker} {} ({})", team.name, team.members.len()),
        }
        for member in &team.members {
            println!("    {}", member.name);
        }
    }
}

/// Initialize tracing to log to a file, keeping stdout clean for the board.
fn init_tracing(log_path: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let path = Path::new(log_path);
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        }
    }
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("failed to create log file {log_path}"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("draft_room=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
