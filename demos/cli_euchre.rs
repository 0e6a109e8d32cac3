//! CLI Euchre example. You play seat 1; your partner is seat 3.
//!
//! Set `RUST_LOG=euchre_engine=debug` to trace every decision on stderr.

use core::fmt;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use euchre_engine::input::{parse_position, parse_suit, parse_yes_no};
use euchre_engine::{
    BidDecision, Card, Event, Expected, Game, GameOptions, InputError, PlayError, ScoreKind, Seat,
    Suit, Turn,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Euchre CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut game = Game::new(options, seed);
    let human = options.human_seat.unwrap_or(Seat::One);

    loop {
        if let Err(err) = game.start_round() {
            println!("Deal error: {err}");
            break;
        }
        println!(
            "\n{} deals. Turned up: {}",
            game.dealer(),
            game.flipped().map_or_else(String::new, |card| format_card(&card))
        );

        loop {
            match game.run_automated() {
                Ok(events) => events.iter().for_each(|event| narrate(&game, event)),
                Err(err) => {
                    println!("Engine error: {err}");
                    return;
                }
            }

            let Some(turn) = game.turn() else {
                break;
            };
            if !take_turn(&mut game, human, turn) {
                println!("Goodbye.");
                return;
            }
        }

        match game.finish_round() {
            Ok(result) => {
                let kind = match result.score.kind {
                    ScoreKind::Made => "made it",
                    ScoreKind::March => "marched",
                    ScoreKind::Euchred => "were euchred",
                };
                println!(
                    "\n{} named {}; {} {} ({} to {} in tricks).",
                    result.caller,
                    result.trump,
                    result.caller.team(),
                    kind,
                    result.tricks[0],
                    result.tricks[1]
                );
                println!(
                    "{} scores {}. Team 1: {}, Team 2: {}",
                    result.score.team, result.score.points, result.points[0], result.points[1]
                );
                if let Some(winner) = result.winner {
                    println!("\n{winner} wins the game!");
                    break;
                }
            }
            Err(err) => {
                println!("Scoring error: {err}");
                break;
            }
        }
    }
}

/// Answers one decision for the human seat. Returns `false` on quit.
fn take_turn(game: &mut Game, human: Seat, turn: Turn) -> bool {
    let Some(flipped) = game.flipped() else {
        return false;
    };
    if !matches!(turn.expected, Expected::Lead | Expected::Follow) {
        print_hand(game, human, None);
    }

    match turn.expected {
        Expected::OrderUp | Expected::PickUp => {
            let question = if turn.expected == Expected::PickUp {
                format!("Pick up {}? (y/n): ", format_card(&flipped))
            } else {
                format!("Order up {}? (y/n): ", format_card(&flipped))
            };
            let Some(yes) = prompt(&question, parse_yes_no) else {
                return false;
            };
            let decision = if yes {
                BidDecision::OrderUp
            } else {
                BidDecision::Pass
            };
            report(game.bid(human, decision).map(|event| narrate(game, &event)));
        }
        Expected::CallSuit => {
            let Some(call) = prompt("Name trump? (y/n): ", parse_yes_no) else {
                return false;
            };
            let decision = if call {
                let Some(suit) = prompt_suit(flipped.suit) else {
                    return false;
                };
                BidDecision::Call(suit)
            } else {
                BidDecision::Pass
            };
            report(game.bid(human, decision).map(|event| narrate(game, &event)));
        }
        Expected::MustCall => {
            println!("You are the dealer and must name trump.");
            let Some(suit) = prompt_suit(flipped.suit) else {
                return false;
            };
            report(
                game.bid(human, BidDecision::Call(suit))
                    .map(|event| narrate(game, &event)),
            );
        }
        Expected::Discard => {
            let len = game.hand(human).len();
            let Some(index) = prompt(&format!("Discard which card (1-{len})? "), |text| {
                parse_position(text, len)
            }) else {
                return false;
            };
            report(game.discard(human, index).map(|event| narrate(game, &event)));
        }
        Expected::Lead | Expected::Follow => loop {
            print_trick(game);
            let legal = game.legal_plays(human);
            print_hand(game, human, Some(&legal));
            let len = game.hand(human).len();
            let Some(index) = prompt(&format!("Play which card (1-{len})? "), |text| {
                parse_position(text, len)
            }) else {
                return false;
            };
            match game.play(human, index) {
                Ok(events) => {
                    events.iter().for_each(|event| narrate(game, event));
                    break;
                }
                Err(PlayError::MustFollowSuit) => println!("You must follow suit."),
                Err(err) => {
                    println!("Play error: {err}");
                    break;
                }
            }
        },
    }
    true
}

fn report<E: fmt::Display>(result: Result<(), E>) {
    if let Err(err) = result {
        println!("Error: {err}");
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

/// Re-prompts until `parse` accepts the answer. `None` means quit.
fn prompt<T>(prompt: &str, parse: impl Fn(&str) -> Result<T, InputError>) -> Option<T> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match parse(&input) {
            Ok(value) => return Some(value),
            Err(err) => println!("{err}."),
        }
    }
}

fn prompt_suit(turned_down: Suit) -> Option<Suit> {
    let choices: Vec<String> = Suit::ALL
        .into_iter()
        .filter(|suit| *suit != turned_down)
        .map(|suit| format!("[{}]{suit}", suit.letter()))
        .collect();
    prompt(&format!("Suit ({}): ", choices.join(" ")), |text| {
        parse_suit(text, Some(turned_down))
    })
}

fn narrate(game: &Game, event: &Event) {
    match *event {
        Event::Passed { seat } => println!("{seat} passes."),
        Event::OrderedUp { seat, dealer, card } if seat == dealer => {
            println!("{seat} picks up {}.", format_card(&card));
        }
        Event::OrderedUp { seat, dealer, card } => {
            println!("{seat} orders up {}; {dealer} picks it up.", format_card(&card));
        }
        Event::TrumpNamed { seat, trump } => println!("{seat} names {trump} trump."),
        Event::Discarded { seat, card } if game.is_human(seat) => {
            println!("You discard {}.", format_card(&card));
        }
        Event::Discarded { seat, .. } => println!("{seat} discards."),
        Event::Played { seat, card } => println!("{seat} plays {}", format_card(&card)),
        Event::TrickWon {
            seat,
            card,
            trick_no,
        } => println!(
            "{} Trick {trick_no}: {seat} wins with {}",
            colorize("*", "33"),
            format_card(&card)
        ),
    }
}

fn print_trick(game: &Game) {
    let Some(trick) = game.current_trick() else {
        return;
    };
    if let Some(trump) = game.trump() {
        println!("\nTrump: {trump}");
    }
    if trick.is_empty() {
        println!("You lead.");
        return;
    }
    let plays: Vec<String> = trick
        .plays()
        .iter()
        .map(|play| format!("{}: {}", play.seat, format_card(&play.card)))
        .collect();
    println!("On the table: {}", plays.join(", "));
}

fn print_hand(game: &Game, seat: Seat, legal: Option<&[usize]>) {
    let cards: Vec<String> = game
        .hand(seat)
        .cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let text = format!("{}:{}", index + 1, format_card(card));
            match legal {
                Some(legal) if !legal.contains(&index) => colorize(&text, "90"),
                _ => text,
            }
        })
        .collect();
    println!("Your hand: {}", cards.join("  "));
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
