//! Local driver for the casino core: stands in for the web-view presentation
//! layer and the host-platform bridge. Plays settle synchronously; bridge
//! messages come out as JSON lines on stdout.

use anyhow::Context;
use clap::{Parser, Subcommand};
use starcade_engine::games::thread_entropy;
use starcade_engine::{Bridge, FileStore, PlayError, Session};
use starcade_types::{
    BetSpec, BridgeMessage, CaseKind, DiceBet, GameBet, OutcomeResult, RouletteColor,
    UserIdentity, DICE_RANGE_MULTIPLIER, DICE_SEVEN_MULTIPLIER, ROULETTE_COLOR_MULTIPLIER,
    ROULETTE_GREEN_MULTIPLIER, STAR_OFFERS,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding persisted session state.
    #[arg(long, default_value = ".starcade")]
    data_dir: PathBuf,

    /// Host-provided identity JSON ({"id":..,"first_name":..}). Falls back
    /// to the guest identity when absent or malformed.
    #[arg(long)]
    identity: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Spin the roulette wheel on a color (red, black, green).
    Roulette {
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        stake: u64,
    },
    /// Pull the slot machine arm.
    Slots {
        #[arg(long)]
        stake: u64,
    },
    /// Roll two dice against a total bet (low, high, seven).
    Dice {
        #[arg(long)]
        target: Option<String>,
        #[arg(long)]
        stake: u64,
    },
    /// Open a prize case (bronze, silver, gold, diamond).
    OpenCase {
        #[arg(long)]
        kind: Option<String>,
    },
    /// Buy a star package. Without an index, lists the menu.
    Buy {
        #[arg(long)]
        offer: Option<usize>,
    },
    /// Count a referral.
    Refer,
    /// Show balance, statistics, and achievements.
    Stats,
}

/// Bridge that prints host messages as JSON lines.
struct StdoutBridge;

impl Bridge for StdoutBridge {
    fn send(&mut self, message: &BridgeMessage) {
        if let Ok(line) = serde_json::to_string(message) {
            println!("{line}");
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
    let args = Args::parse();

    let store = FileStore::new(&args.data_dir).context("failed to open data directory")?;
    let identity = UserIdentity::from_host_json(args.identity.as_deref());
    let mut session = Session::open(store, StdoutBridge, identity);

    match args.command {
        Command::Roulette { color, stake } => {
            let Some(color) = color else {
                return notice(PlayError::NoBetSelected);
            };
            let color: RouletteColor = color.parse()?;
            let multiplier = match color {
                RouletteColor::Green => ROULETTE_GREEN_MULTIPLIER,
                _ => ROULETTE_COLOR_MULTIPLIER,
            };
            let spec = BetSpec::new(GameBet::Roulette { color, multiplier }, stake);
            run_play(&mut session, &spec);
        }
        Command::Slots { stake } => {
            let spec = BetSpec::new(GameBet::Slots, stake);
            run_play(&mut session, &spec);
        }
        Command::Dice { target, stake } => {
            let Some(target) = target else {
                return notice(PlayError::NoBetSelected);
            };
            let target: DiceBet = target.parse()?;
            let multiplier = match target {
                DiceBet::Seven => DICE_SEVEN_MULTIPLIER,
                _ => DICE_RANGE_MULTIPLIER,
            };
            let spec = BetSpec::new(GameBet::Dice { target, multiplier }, stake);
            run_play(&mut session, &spec);
        }
        Command::OpenCase { kind } => {
            let Some(kind) = kind else {
                return notice(PlayError::NoBetSelected);
            };
            let kind: CaseKind = kind.parse()?;
            run_play(&mut session, &BetSpec::case(kind));
        }
        Command::Buy { offer: None } => {
            for (index, offer) in STAR_OFFERS.iter().enumerate() {
                println!("{index}: {} ⭐ for {}", offer.stars, offer.amount);
            }
        }
        Command::Buy { offer: Some(index) } => {
            let offer = *STAR_OFFERS.get(index).context("no such offer")?;
            let balance = session.purchase(offer);
            println!("+{} ⭐ (balance: {balance} ⭐)", offer.stars);
        }
        Command::Refer => {
            session.add_referral();
            println!(
                "referrals: {}",
                session.ledger().stats().referrals
            );
        }
        Command::Stats => print_stats(&session),
    }

    Ok(())
}

fn run_play<S, B>(session: &mut Session<S, B>, spec: &BetSpec)
where
    S: starcade_engine::Store,
    B: Bridge,
{
    match session.play(spec, &mut thread_entropy()) {
        Ok(outcome) => print_outcome(&outcome, session.balance()),
        // Rejected plays are a transient notice, not a failure.
        Err(err) => println!("{err}"),
    }
}

fn print_outcome(outcome: &OutcomeResult, balance: u64) {
    if outcome.won {
        println!("Won! +{} ⭐ — {}", outcome.payout, outcome.detail);
    } else {
        println!("Lost — {}", outcome.detail);
    }
    println!("Balance: {balance} ⭐");
}

fn print_stats<S, B>(session: &Session<S, B>)
where
    S: starcade_engine::Store,
    B: Bridge,
{
    let stats = session.ledger().stats();
    println!("{} (id {})", session.identity().first_name, session.identity().id);
    println!("Balance: {} ⭐", session.balance());
    println!(
        "Games: {} played, {} won ({:.0}%)",
        stats.games_played,
        stats.games_won,
        stats.win_rate() * 100.0
    );
    println!("Total won: {} ⭐", stats.total_won);
    println!("Total wagered: {} ⭐", stats.total_lost);
    println!("Referrals: {}", stats.referrals);
    if !stats.achievements.is_empty() {
        let titles: Vec<&str> = stats.achievements.iter().map(|a| a.title()).collect();
        println!("Achievements: {}", titles.join(", "));
    }
}

/// Print a pre-play rejection the way the web view shows a toast.
fn notice(err: PlayError) -> anyhow::Result<()> {
    println!("{err}");
    Ok(())
}
