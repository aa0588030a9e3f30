use anyhow::Result;

use hato_points::cli::{Cli, Command};
use hato_points::{
    build_config, handle_completions, handle_import, handle_init, handle_leaderboard,
    handle_levels, handle_register, handle_set_points, handle_status, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    if let Command::Completions { shell } = &cli.command {
        return handle_completions(*shell);
    }

    let config = build_config(&cli.options)?;
    match &cli.command {
        Command::Init { reset } => handle_init(config, *reset),
        Command::Register { id, name, points } => handle_register(config, id, name, *points),
        Command::SetPoints { id, points } => handle_set_points(config, id, *points),
        Command::Import { path } => handle_import(config, path),
        Command::Status { id, json } => handle_status(config, id, *json),
        Command::Leaderboard { limit } => handle_leaderboard(config, *limit),
        Command::Levels => handle_levels(&config),
        Command::Completions { .. } => Ok(()),
    }
}
