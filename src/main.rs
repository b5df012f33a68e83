mod app;
mod cache;
mod catalog;
mod engine;
mod error;
mod infra;
mod ui;

use std::process::ExitCode;

use app::controller::ApplicationController;
use catalog::models::GameEntry;
use catalog::queries;
use infra::config::AppConfig;
use ui::presenters::{present_entry_row, present_launch_error};

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Ui,
    Init,
    List,
    Launch { name: String },
    Add { entry: GameEntry },
    Remove { name: String },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn main() -> ExitCode {
    infra::logging::init_logging();

    let mut config = AppConfig::default();
    let args = match config.apply_overrides(std::env::args().skip(1).collect()) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            print_usage();
            return ExitCode::from(2);
        }
    };

    match execute(&args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

/// Parses before touching the disk, so a usage error leaves no files behind.
fn execute(args: &[String], config: AppConfig) -> Result<(), CommandError> {
    let command = parse_command(args)?;

    let mut controller = ApplicationController::new(config);
    controller.bootstrap().map_err(|error| {
        CommandError::Runtime(format!("failed to bootstrap game-launcher: {error}"))
    })?;

    run_command(command, controller)
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    let Some(name) = args.first() else {
        return Ok(Command::Ui);
    };

    match name.as_str() {
        "ui" => Ok(Command::Ui),
        "init" => Ok(Command::Init),
        "list" => Ok(Command::List),
        "launch" => Ok(Command::Launch {
            name: required_operand(args, "missing game name")?,
        }),
        "remove" => Ok(Command::Remove {
            name: required_operand(args, "missing game name")?,
        }),
        "add" => parse_add(&args[1..]).map(|entry| Command::Add { entry }),
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn required_operand(args: &[String], missing: &str) -> Result<String, CommandError> {
    args.get(1)
        .cloned()
        .ok_or_else(|| CommandError::Usage(missing.to_string()))
}

fn parse_add(args: &[String]) -> Result<GameEntry, CommandError> {
    let mut name = None;
    let mut desc = None;
    let mut cat = None;
    let mut image = None;
    let mut path = None;

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let slot = match flag.as_str() {
            "--name" => &mut name,
            "--desc" => &mut desc,
            "--cat" => &mut cat,
            "--image" => &mut image,
            "--path" => &mut path,
            other => return Err(CommandError::Usage(format!("unknown option: {other}"))),
        };
        let value = iter
            .next()
            .ok_or_else(|| CommandError::Usage(format!("missing value for {flag}")))?;
        *slot = Some(value.clone());
    }

    let path = path.ok_or_else(|| CommandError::Usage("missing --path".to_string()))?;
    let mut entry = GameEntry::new(String::new(), path);
    entry.name = name;
    entry.desc = desc;
    entry.cat = cat;
    entry.image = image;
    Ok(entry)
}

fn run_command(command: Command, mut controller: ApplicationController) -> Result<(), CommandError> {
    match command {
        Command::Ui => ui::app_shell::launch_window(controller).map_err(CommandError::Runtime),
        Command::Init => {
            println!(
                "catalog ready at {} ({} games)",
                controller.config().catalog_path.display(),
                controller.catalog().len()
            );
            Ok(())
        }
        Command::List => {
            if controller.catalog().is_empty() {
                println!("no games in catalog");
                return Ok(());
            }
            for entry in controller.catalog() {
                println!("{}", present_entry_row(entry));
            }
            Ok(())
        }
        Command::Launch { name } => {
            let (index, _) = queries::find_by_name(controller.catalog(), &name)
                .ok_or_else(|| CommandError::Runtime(format!("no game named {name:?}")))?;
            controller
                .launch_entry(index)
                .map_err(|error| CommandError::Runtime(present_launch_error(&error)))
        }
        Command::Add { entry } => {
            let label = entry.display_name().to_string();
            controller
                .add_entry(entry)
                .map_err(|error| CommandError::Runtime(format!("add failed: {error}")))?;
            println!("added {label}");
            Ok(())
        }
        Command::Remove { name } => {
            let removed = controller
                .remove_entry(&name)
                .map_err(|error| CommandError::Runtime(format!("remove failed: {error}")))?;
            println!("removed {}", removed.display_name());
            Ok(())
        }
    }
}

fn print_usage() {
    println!("usage:");
    println!("  game-launcher [--catalog <file>] [--images <dir>] [command]");
    println!("commands:");
    println!("  ui                      open the launcher window (default)");
    println!("  init                    create the catalog and images directory");
    println!("  list                    print the catalog");
    println!("  launch <name>           start a game by name");
    println!("  add --name <name> --path <exe> [--desc <text>] [--cat <label>] [--image <file>]");
    println!("  remove <name>           delete a game from the catalog");
}
