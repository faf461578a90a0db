//! Interactive blackjack table with training and counting advice.
//!
//! ```text
//! cargo run --example cli_blackjack -- --training --counting Ada Grace
//! ```

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjzen::{
    Action, Card, CountTier, Game, GameOptions, GameState, Hand, HandOutcome, Player, Rank,
    Recommendation, Suit,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const STARTING_WALLET: usize = 1000;

#[derive(Parser, Debug)]
#[command(about = "Play blackjack at a table that stands on soft 17")]
struct Args {
    /// Names of the players at the table
    #[arg(default_value = "Player")]
    players: Vec<String>,

    /// Number of decks in the shoe
    #[arg(long, default_value_t = 4)]
    decks: u8,

    /// Offer basic-strategy hints
    #[arg(long)]
    training: bool,

    /// Offer card-counting advice
    #[arg(long)]
    counting: bool,

    /// Shuffle seed; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let options = GameOptions::default()
        .with_decks(args.decks)
        .with_training_mode(args.training)
        .with_counting_mode(args.counting);
    let minimum = options.table_minimum;
    let game = Game::new(options, seed);

    println!("Welcome! Dealer stands on soft 17, blackjack pays 3/2.");
    println!("Table minimum is ${minimum}. Type 'q' at any prompt to leave.");
    if args.counting {
        println!("Zen count: 2, 3, 7 are +1; 4, 5, 6 are +2; 8, 9 are 0; tens are -2; aces are -1.");
    }

    for name in &args.players {
        match game.join(name.as_str(), STARTING_WALLET) {
            Ok(player_id) => {
                if args.counting {
                    ask_betting_preferences(&game, player_id, name);
                }
            }
            Err(err) => println!("{name} cannot sit down: {err}"),
        }
    }

    let mut departed = Vec::new();
    while !game.is_finished() {
        if !play_round(&game, args.counting, &mut departed) {
            break;
        }
        if !game.is_finished() && !prompt_yes_no("Play another round? (y/n) ") {
            break;
        }
    }

    // Open bets are refunded; a bet on cards already dealt stays on the table
    for player_id in game.seats() {
        match game.leave(player_id) {
            Ok(player) => departed.push((player_id, player)),
            Err(_) => {
                if let Some(player) = game.get_player(player_id) {
                    departed.push((player_id, player));
                }
            }
        }
    }
    departed.sort_by_key(|(player_id, _)| *player_id);

    line('=');
    for (_, player) in &departed {
        let wallet = player.wallet();
        let (outcome, amount) = if wallet >= STARTING_WALLET {
            ("ahead", wallet - STARTING_WALLET)
        } else {
            ("behind", STARTING_WALLET - wallet)
        };
        println!(
            "{} walked away ${amount} {outcome}. Final take: ${wallet}",
            player.name()
        );
    }
    println!("Thanks for playing.");
}

/// Plays one round. Returns `false` when someone asked to quit.
///
/// Players who can no longer cover the minimum are moved to `departed`.
fn play_round(game: &Game, counting: bool, departed: &mut Vec<(u8, Player)>) -> bool {
    if game.start_betting().is_err() {
        return false;
    }

    for player_id in game.seats() {
        let name = player_name(game, player_id);
        if counting {
            print_counting_advice(game, player_id);
        }
        loop {
            let wallet = game.get_money(player_id).unwrap_or(0);
            let Some(amount) = prompt_usize(&format!("{name}, your bet (wallet ${wallet}): "))
            else {
                return false;
            };
            match game.bet(player_id, amount) {
                Ok(()) => break,
                Err(err) => println!("{err}"),
            }
        }
    }

    if let Err(err) = game.deal() {
        println!("Deal error: {err}");
        return false;
    }

    line('-');
    print_table(game);

    while let Some(player_id) = game.current_player() {
        if !take_turn(game, player_id, counting) {
            return false;
        }
    }

    if game.state() == GameState::DealerAction {
        if let Err(err) = game.dealer_play() {
            println!("Dealer error: {err}");
            return false;
        }
    }

    let result = match game.settle() {
        Ok(result) => result,
        Err(err) => {
            println!("Settlement error: {err}");
            return false;
        }
    };

    line('-');
    if let Some(dealer) = game.get_dealer_hand() {
        println!("Dealer reveals {}. {}!", format_hand(dealer.cards()), dealer.value());
        if result.dealer_bust {
            println!("Dealer busted!");
        }
    }
    for player in &result.players {
        let name = player_name(game, player.player_id);
        for hand in &player.hands {
            let verdict = match hand.outcome {
                HandOutcome::Blackjack => format!("Blackjack! You won ${}.", hand.payout - hand.bet),
                HandOutcome::Win => format!("You won ${}.", hand.bet),
                HandOutcome::Push => "Push.".to_string(),
                HandOutcome::Lose => format!("You lost ${}.", hand.bet),
            };
            println!("{name}, hand {}: {verdict}", hand.hand_index + 1);
        }
        println!("{name} total: ${}", player.wallet);
    }

    match game.finish_round() {
        Ok(removed) => {
            for (player_id, player) in removed {
                println!(
                    "{}, you can no longer cover the table minimum. Better luck next time.",
                    player.name()
                );
                departed.push((player_id, player));
            }
            true
        }
        Err(err) => {
            println!("Cleanup error: {err}");
            false
        }
    }
}

/// Prompts for one decision. Returns `false` when the player asked to quit.
fn take_turn(game: &Game, player_id: u8, counting: bool) -> bool {
    let hand_index = game.current_turn().hand_index;
    let name = player_name(game, player_id);
    let Ok(legal) = game.legal_actions(player_id) else {
        return false;
    };

    if let Some(hands) = game.get_hands(player_id) {
        if let Some(hand) = hands.get(hand_index) {
            println!("{name}, hand {}: {}", hand_index + 1, describe(hand));
        }
    }
    println!("  [h]it  [s]tand");
    if legal.double {
        println!("  [d]ouble down");
    }
    if legal.split {
        println!("  s[p]lit the pair");
    }
    if game.options.training_mode {
        println!("  [t]raining recommendation");
    }
    if counting {
        println!("  [c]ounting recommendation (count {})", game.running_count());
    }

    let action = match prompt_line("> ").as_str() {
        "h" | "hit" => Action::Hit,
        "s" | "stand" => Action::Stand,
        "d" | "double" => Action::Double,
        "p" | "split" => Action::Split,
        "t" | "training" => {
            match game.training_hint(player_id) {
                Ok(hint) => println!("{}", describe_hint(hint)),
                Err(err) => println!("{err}"),
            }
            return true;
        }
        "c" | "counting" => {
            print_counting_advice(game, player_id);
            return true;
        }
        "q" | "quit" => return false,
        _ => {
            println!("Selection not recognized. Please try again.");
            return true;
        }
    };

    if !legal.allows(action) {
        println!("That move is not available on this hand.");
        return true;
    }

    match game.perform(player_id, hand_index, action) {
        Ok(_) => {
            let hands = game.get_hands(player_id).unwrap_or_default();
            if let Some(hand) = hands.get(hand_index) {
                println!("  now {}", describe(hand));
                if hand.is_busted() {
                    println!("Busted!");
                }
            }
            if action == Action::Split {
                if let Some(hand) = hands.last() {
                    println!("  new hand {}: {}", hands.len(), describe(hand));
                }
            }
        }
        Err(err) => println!("{err}"),
    }
    true
}

fn ask_betting_preferences(game: &Game, player_id: u8, name: &str) {
    println!("{name}, counting advice needs your betting preferences.");
    loop {
        let Some(min_bet) = prompt_usize("  Minimum bet: ") else {
            return;
        };
        let Some(max_bet) = prompt_usize("  Maximum bet: ") else {
            return;
        };
        match game.set_betting_preferences(player_id, min_bet, max_bet) {
            Ok(unit) => {
                println!("  Minimum bet ${min_bet}, betting unit ${unit}.");
                return;
            }
            Err(err) => println!("  {err}"),
        }
    }
}

fn print_counting_advice(game: &Game, player_id: u8) {
    let Ok(advice) = game.counting_advice(player_id) else {
        return;
    };
    let mood = match advice.tier {
        CountTier::Cold => {
            "The shoe is cold. More low cards than high cards remain, so play conservatively."
        }
        CountTier::Warm => {
            "The shoe is warm. High cards dominate: expect blackjacks and dealer busts."
        }
        CountTier::Hot => "The shoe is hot! This deck is stacked with high cards.",
    };
    println!("Running count {}. {mood}", advice.running_count);
    println!("Recommended bet: ${}", advice.recommended_bet);
}

const fn describe_hint(hint: Recommendation) -> &'static str {
    match hint {
        Recommendation::Hit => "Basic strategy says: hit.",
        Recommendation::Stand => "Basic strategy says: stand.",
        Recommendation::Double => "Basic strategy says: double down.",
        Recommendation::Split => "Basic strategy says: split.",
        Recommendation::SplitUnavailable => {
            "Basic strategy says split, but you cannot cover a second bet."
        }
    }
}

fn print_table(game: &Game) {
    for player_id in game.seats() {
        let name = player_name(game, player_id);
        for hand in game.get_hands(player_id).unwrap_or_default() {
            println!("{name}: {}", describe(&hand));
        }
    }
    if let Some(dealer) = game.get_dealer_hand() {
        println!("Dealer showing {}", format_hand(dealer.public_cards()));
    }
}

fn player_name(game: &Game, player_id: u8) -> String {
    game.get_player(player_id)
        .map_or_else(|| format!("Player {player_id}"), |player| player.name().to_string())
}

fn describe(hand: &Hand) -> String {
    format!(
        "{} ({}) bet ${}",
        format_hand(hand.cards()),
        hand.value(),
        hand.bet()
    )
}

fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|&card| format_card(card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let rank = match card.rank() {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        other => other.to_string(),
    };
    let (suit, color_code) = match card.suit() {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };
    format!("{rank}\u{1b}[{color_code}m{suit}\u{1b}[0m")
}

fn line(ch: char) {
    println!("{}", ch.to_string().repeat(50));
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    // End of input counts as quitting
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_lowercase(),
    }
}

fn prompt_yes_no(prompt: &str) -> bool {
    loop {
        match prompt_line(prompt).as_str() {
            "y" | "yes" => return true,
            "n" | "no" | "q" | "quit" => return false,
            _ => println!("Please answer y or n."),
        }
    }
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

