use std::io::{self, StdinLock};
use std::path::Path;

use colored::Colorize;
use ff_core::{Direction, FileStore, GroundPoint};
use ff_game::resolver::suggest;
use ff_game::{GameConfig, GameSession, ScreenPoint};

use crate::terminal::{QuietAudio, TerminalPresenter, TextRenderer};

type Session =
    GameSession<FileStore, TextRenderer, QuietAudio, TerminalPresenter<StdinLock<'static>>>;

/// Simulated frame length while walking or waiting.
const STEP: f32 = 0.05;

/// Longest stretch a single command may run the clock.
const MAX_SETTLE: f32 = 30.0;

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Help,
    Look,
    Go(Option<Direction>),
    Tap(String),
    TapAt(f32, f32),
    Wait(f32),
    Inventory,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(input: &str) -> Self {
        let input = input.trim();
        let (verb, rest) = match input.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (input, ""),
        };
        match verb.to_lowercase().as_str() {
            "help" | "h" | "?" => Self::Help,
            "look" | "l" => Self::Look,
            "go" | "walk" => Self::Go(Direction::parse(rest)),
            "tap" | "t" | "use" => {
                let coords: Vec<f32> = rest
                    .split_whitespace()
                    .map_while(|word| word.parse().ok())
                    .collect();
                match coords.as_slice() {
                    [x, z] if rest.split_whitespace().count() == 2 => Self::TapAt(*x, *z),
                    _ => Self::Tap(rest.to_string()),
                }
            }
            "wait" | "w" => Self::Wait(rest.parse().unwrap_or(1.0)),
            "inv" | "i" | "bag" => Self::Inventory,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Unknown(input.to_string()),
        }
    }
}

pub fn run(save_dir: &Path, seed: Option<u64>, skip_intro: bool) -> Result<(), String> {
    let seed = seed.unwrap_or_else(rand::random);
    let store = super::open_store(save_dir);
    let presenter = TerminalPresenter::new(io::stdin().lock(), seed);
    let mut session = GameSession::new(
        store,
        TextRenderer::default(),
        QuietAudio,
        presenter,
        GameConfig::default(),
    );

    println!("  {} Fairy Fun", "Starting".bold());
    if session.state().is_new_game && !skip_intro {
        println!();
        for line in session.intro_lines() {
            println!("  {}", line.italic());
        }
    }
    println!("  Type 'help' for commands, 'quit' to exit.");

    session.start().map_err(|e| e.to_string())?;
    pass_time(&mut session)?;

    loop {
        let Some(input) = session.presenter_mut().read_line("> ") else {
            break;
        };
        if input.is_empty() {
            continue;
        }

        let command = Command::parse(&input);
        if command == Command::Quit {
            break;
        }
        if let Err(e) = execute(&mut session, command) {
            println!("  {}", e.yellow());
        }
        pass_time(&mut session)?;
    }

    println!("  Bye for now! 💜");
    Ok(())
}

fn execute(session: &mut Session, command: Command) -> Result<(), String> {
    match command {
        Command::Help => print_help(),
        Command::Look => look(session),
        Command::Go(None) => return Err("Which way? left, right, top, or bottom.".into()),
        Command::Go(Some(dir)) => {
            if !session.navigate(dir) {
                return Err(format!("There is no path {dir} from here."));
            }
        }
        Command::Tap(name) if name.is_empty() => return Err("Tap what?".into()),
        Command::Tap(name) => match session.resolve_target(&name) {
            Ok(target) => session.tap_target(target).map_err(|e| e.to_string())?,
            Err(e) => {
                let hints = suggest(session.scene(), &name, 3);
                if hints.is_empty() {
                    return Err(e.to_string());
                }
                return Err(format!("{e}. Did you mean: {}?", hints.join(", ")));
            }
        },
        Command::TapAt(x, z) => session
            .tap(ScreenPoint::new(x, z))
            .map_err(|e| e.to_string())?,
        Command::Wait(secs) => {
            let mut left = secs.clamp(0.0, MAX_SETTLE);
            while left > 0.0 {
                session.update(STEP.min(left)).map_err(|e| e.to_string())?;
                left -= STEP;
            }
        }
        Command::Inventory => println!("  Bag: {}", session.state().inventory),
        Command::Quit => {}
        Command::Unknown(input) => {
            return Err(format!("I don't know how to '{input}'. Type 'help'."));
        }
    }
    Ok(())
}

/// Run the clock until the player stands still and the sky is done
/// changing.
fn pass_time(session: &mut Session) -> Result<(), String> {
    let walked = session.settle(STEP, MAX_SETTLE).map_err(|e| e.to_string())?;
    let mut elapsed = walked;
    while session.cycle().is_busy() && elapsed < MAX_SETTLE {
        session.update(STEP).map_err(|e| e.to_string())?;
        elapsed += STEP;
    }
    Ok(())
}

fn look(session: &Session) {
    let scene = session.scene();
    let Some(area) = scene.area() else {
        return;
    };
    println!(
        "  {} {}",
        format!("~ {} ~", area.node().name).bold(),
        format!("({})", session.state().day_state).dimmed()
    );

    let friends: Vec<String> = scene
        .npcs()
        .map(|(npc, _)| {
            let marker = if session.renderer().has_marker(npc) { " ❗" } else { "" };
            format!("{}{marker}", npc.def().name)
        })
        .collect();
    if !friends.is_empty() {
        println!("  {} {}", "Friends:".dimmed(), friends.join(", "));
    }

    let things: Vec<String> = scene
        .items()
        .map(|(_, item)| format!("{} {}", item.kind.emoji(), item.kind.name()))
        .chain(scene.props().map(|(name, _)| name.to_string()))
        .collect();
    if !things.is_empty() {
        println!("  {} {}", "Things:".dimmed(), things.join(", "));
    }

    let paths: Vec<&str> = scene
        .navigation()
        .iter()
        .map(|nav| nav.label.as_str())
        .collect();
    if !paths.is_empty() {
        println!("  {} {}", "Paths:".dimmed(), paths.join("   "));
    }

    let GroundPoint { x, z } = session.player().position();
    println!("  {} ({x:.1}, {z:.1})", "You:".dimmed());
}

fn print_help() {
    println!("  look            what is around");
    println!("  go <dir>        walk left, right, top, or bottom");
    println!("  tap <name>      walk over to something and use it");
    println!("  tap <x> <z>     tap a spot on the ground");
    println!("  wait [secs]     let time pass");
    println!("  inv             what is in the bag");
    println!("  quit            stop playing (the game is saved)");
}
