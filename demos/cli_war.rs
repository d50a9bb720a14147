//! CLI War example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use warrs::{Card, Game, GameOptions, GameState, Player, Seat, Suit, TurnResult};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });

    println!("War CLI example, seed {seed}");
    println!("[enter] play a turn  [a] play to the end  [q] quit");

    let mut game = Game::new(GameOptions::default());
    game.add_player(Player::new("You"));
    game.add_player(Player::new("Computer"));
    game.build_deck();

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    game.reorder_deck(|cards| cards.shuffle(&mut rng));

    if let Err(err) = game.deal() {
        println!("Deal error: {err}");
        return;
    }

    let mut turn = 0;
    while game.state() == GameState::Playing {
        match prompt_line("> ").as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                return;
            }
            "a" | "auto" => {
                match game.play() {
                    Ok(summary) => {
                        turn += summary.turns;
                        println!("Played {} more turns ({} wars).", summary.turns, summary.wars);
                        if summary.winner.is_none() {
                            println!("Turn limit reached.");
                        }
                    }
                    Err(err) => println!("Play error: {err}"),
                }
                break;
            }
            _ => {}
        }

        let played = (
            game.player(Seat::First).and_then(Player::top_card).copied(),
            game.player(Seat::Second).and_then(Player::top_card).copied(),
        );

        match game.play_turn() {
            Ok(result) => {
                turn += 1;
                print_turn(&game, turn, played, &result);
            }
            Err(err) => {
                println!("Turn error: {err}");
                break;
            }
        }
    }

    if game.state() == GameState::Finished {
        if let Some(winner) = game.get_winner() {
            println!("{} wins after {turn} turns.", winner.name());
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_turn(game: &Game, turn: usize, played: (Option<Card>, Option<Card>), result: &TurnResult) {
    let name = |seat: Seat| game.player(seat).map_or("?", Player::name);
    let (first, second) = played;

    println!(
        "Turn {turn}: {} {} vs {} {}",
        name(Seat::First),
        first.as_ref().map_or_else(|| "--".to_string(), format_card),
        name(Seat::Second),
        second.as_ref().map_or_else(|| "--".to_string(), format_card),
    );

    if let Some(war) = result.war {
        let how = if war.forfeit { "by forfeit" } else { "on the face-up card" };
        println!(
            "  WAR! {} rounds, {} takes {} cards {how}",
            war.rounds,
            name(war.winner),
            war.pool_size
        );
    } else {
        println!("  {} takes {} cards", name(result.winner), result.cards_won);
    }

    println!(
        "  {}: {} cards | {}: {} cards",
        name(Seat::First),
        game.player(Seat::First).map_or(0, Player::count_cards),
        name(Seat::Second),
        game.player(Seat::Second).map_or(0, Player::count_cards),
    );
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let value = match card.value {
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        14 => "A".to_string(),
        _ => card.value.to_string(),
    };

    colorize(&format!("{value}{suit}"), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
