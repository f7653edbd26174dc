//! Terminal driver: one command per line on stdin.
//!
//! Commands: `start`, `settings`, `quit`, `new`, `load`, `next`, `type <text>`,
//! `back`, `submit`, `choose <choice>`, `reset`, `level`. Backspace in name
//! entry is `back`.

use std::io::{self, BufRead, Write};

use game_rules::MoralityChoice;
use narrative_core::{GameConfig, Input, NarrativePhase, Step, StoryController};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                error!(path = %path, error = %err, "config_load_failed");
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };
    info!(save_path = %config.save_path.display(), "starting");

    let mut story = StoryController::from_config(&config);
    if let Err(err) = run(&mut story) {
        error!(error = %err, "terminal_io_failed");
        std::process::exit(1);
    }
}

fn run(story: &mut StoryController) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    render(story, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let inputs = parse_command(line.trim(), story.phase());
        if inputs.is_empty() {
            writeln!(stdout, "? unknown command: {}", line.trim())?;
            continue;
        }
        for input in inputs {
            if story.advance(input) == Step::Exit {
                return Ok(());
            }
        }
        render(story, &mut stdout)?;
    }
    Ok(())
}

fn parse_command(command: &str, phase: NarrativePhase) -> Vec<Input> {
    let (verb, rest) = command
        .split_once(' ')
        .map(|(verb, rest)| (verb, rest.trim()))
        .unwrap_or((command, ""));
    match verb {
        "start" => vec![Input::Start],
        "settings" => vec![Input::OpenSettings],
        "quit" | "exit" => vec![Input::Quit],
        "new" => vec![Input::NewGame],
        "load" => vec![Input::LoadGame],
        "next" | "" => vec![Input::Next],
        "type" => rest.chars().map(Input::TypeChar).collect(),
        "back" if phase == NarrativePhase::Level0Dialogue => vec![Input::Backspace],
        "back" => vec![Input::Back],
        "submit" => vec![Input::SubmitName],
        "choose" => {
            let choice = (!rest.is_empty()).then(|| MoralityChoice::parse(Some(rest)));
            vec![Input::ChooseMorality(choice)]
        }
        "reset" => vec![Input::ResetSave],
        "level" => vec![Input::NextLevel],
        _ => Vec::new(),
    }
}

fn render(story: &StoryController, out: &mut impl Write) -> io::Result<()> {
    let state = story.state();
    write!(out, "[{:?}]", state.phase)?;
    if let Some(line) = story.current_line() {
        write!(out, " {line}")?;
    }
    if state.name_entry_active {
        write!(out, " ({} name: {}_)", state.active_slot, state.current_name)?;
    }
    if state.phase == NarrativePhase::Gameplay {
        let session = story.facade().session();
        write!(
            out,
            " level {} ({}), lives {}",
            session.level_index,
            story.levels().current().unwrap_or("-"),
            session.lives_remaining
        )?;
        for player in session.players() {
            write!(
                out,
                " | {} {} hp {}/{} morality {}",
                player.slot(),
                player.name(),
                player.hp(),
                player.max_hp(),
                player.morality()
            )?;
        }
    }
    writeln!(out)?;
    out.flush()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
