//! CLI War example.

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use warrs::{
    Affordances, Card, Color, CueEvent, Game, GameOptions, GameState, Outcome, Resolution,
};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_writer(io::stderr)
        .init();

    println!("War CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    match game.start() {
        Ok(report) => {
            play_cue(report.cue);
            thread::sleep(report.pause);
            print_counts(report.counts.player_hand, report.counts.opponent_hand);
        }
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    }

    loop {
        println!("{}", format_actions(game.affordances()));
        let action = prompt_line("Action: ");

        match action.as_str() {
            "d" | "deal" | "" if game.affordances().deal => deal(&game),
            "p" | "play" if game.affordances().play_again => match game.restart() {
                Ok(report) => {
                    play_cue(report.cue);
                    thread::sleep(report.pause);
                    print_counts(report.counts.player_hand, report.counts.opponent_hand);
                }
                Err(err) => println!("Restart error: {err}"),
            },
            "m" | "menu" if game.affordances().main_menu => {
                if let Err(err) = game.main_menu() {
                    println!("Menu error: {err}");
                    continue;
                }
                println!("Back at the main menu. Goodbye.");
                return;
            }
            "q" | "quit" => return,
            _ => println!("Unknown action."),
        }
    }
}

fn deal(game: &Game) {
    let reveal = match game.deal() {
        Ok(reveal) => reveal,
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    };

    play_cue(reveal.cue);
    println!(
        "\nYou: {}    Opponent: {}",
        format_card(&reveal.player.card),
        format_card(&reveal.opponent.card)
    );
    print_counts(reveal.counts.player_hand, reveal.counts.opponent_hand);
    if reveal.player_exhausted || reveal.opponent_exhausted {
        println!("{}", colorize("Last cards on the table.", "90"));
    }
    thread::sleep(reveal.pause);

    match game.resolve() {
        Ok(Resolution::Round(round)) => {
            play_cue(round.cue);
            println!("{}", colorize(&round.message, outcome_color(round.outcome)));
            println!(
                "Score  You: {}  Opponent: {}",
                round.score.player, round.score.opponent
            );
        }
        Ok(Resolution::GameOver(result)) => {
            play_cue(result.cue);
            println!("\n{}", colorize(&result.message, outcome_color(result.outcome)));
            println!(
                "Final  You: {}  Opponent: {}",
                result.score.player, result.score.opponent
            );
        }
        Err(err) => println!("Resolve error: {err}"),
    }

    if game.state() == GameState::GameOver {
        println!("Game over.");
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return String::from("q"),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn print_counts(player: usize, opponent: usize) {
    println!("Cards left  You: {player}  Opponent: {opponent}");
}

fn play_cue(event: CueEvent) {
    let text = format!("[sfx {:?} @ {:.2}]", event.cue, event.volume);
    println!("{}", colorize(&text, "90"));
}

fn format_actions(affordances: Affordances) -> String {
    let parts = [
        format_action("deal", "d", affordances.deal),
        format_action("play again", "p", affordances.play_again),
        format_action("menu", "m", affordances.main_menu),
        format_action("quit", "q", true),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

const fn outcome_color(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWin => "32",
        Outcome::OpponentWin => "31",
        Outcome::Draw => "33",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let code = match card.color() {
        Color::Red => "31",
        Color::Black => "34",
    };
    colorize(&card.to_string(), code)
}
