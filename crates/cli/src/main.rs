// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown command line equity calculator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use log::{debug, error, info};
use std::{collections::BTreeMap, process::ExitCode, time::Instant};

use showdown_equity::{Seat, SeatSet, multi_equity, solo_equity};
use showdown_eval::best_hands;

mod input;
mod report;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Probability of winning or tying against random opponents.
    Solo {
        /// The player hole cards, e.g. "AS AD".
        #[clap(long)]
        hole: String,
        /// The board cards, the street follows from the number of cards.
        #[clap(long, short)]
        board: String,
        /// Number of opponents.
        #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=8))]
        opponents: u32,
    },
    /// Showdown outcomes for the seats at a table.
    Multi {
        /// The hole cards of a seat, repeat for each seat starting from seat 1.
        #[clap(long = "seat", short, required = true)]
        seats: Vec<String>,
        /// A seat number that has folded, may be repeated.
        #[clap(long, short, value_parser = clap::value_parser!(u8).range(1..=9))]
        folded: Vec<u8>,
        /// The board cards, the street follows from the number of cards.
        #[clap(long, short)]
        board: String,
    },
    /// Classify five cards, or the best five of six or seven cards.
    Classify {
        /// The cards, e.g. "AS KS QS JS TS".
        cards: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Solo {
            hole,
            board,
            opponents,
        } => solo(&hole, &board, opponents),
        Command::Multi {
            seats,
            folded,
            board,
        } => multi(&seats, &folded, &board),
        Command::Classify { cards } => classify(&cards),
    }
}

fn solo(hole: &str, board: &str, opponents: u32) -> Result<()> {
    let hole = input::parse_hole(hole)?;
    let (board, street) = input::parse_board(board)?;
    let deck = input::deck_without(&[&hole[..], &board[..]].concat())?;

    info!("Enumerating the {street} against {opponents} opponents");

    let now = Instant::now();
    let equity = solo_equity(&deck, &board, hole, opponents, street)?;
    debug!("Elapsed {:.3}s", now.elapsed().as_secs_f64());

    println!("{}", report::percent(equity));
    Ok(())
}

fn multi(holes: &[String], folded: &[u8], board: &str) -> Result<()> {
    if holes.len() > Seat::MAX_PLAYERS {
        bail!("at most {} seats, found {}", Seat::MAX_PLAYERS, holes.len());
    }

    let mut seats = BTreeMap::new();
    for (number, hole) in (1..).zip(holes) {
        seats.insert(Seat::new(number)?, input::parse_hole(hole)?);
    }

    if let Some(n) = folded.iter().find(|&&n| n as usize > seats.len()) {
        bail!("folded seat {n} is not at the table");
    }

    let active = seats
        .keys()
        .copied()
        .filter(|s| !folded.contains(&s.number()))
        .collect::<SeatSet>();

    let (board, street) = input::parse_board(board)?;
    let dealt = seats
        .values()
        .flatten()
        .chain(&board)
        .copied()
        .collect::<Vec<_>>();
    let deck = input::deck_without(&dealt)?;

    info!("Enumerating the {street} for seats {active}");

    let now = Instant::now();
    let outcomes = multi_equity(&deck, &board, &seats, &active, street)?;
    debug!("Elapsed {:.3}s", now.elapsed().as_secs_f64());

    for line in report::multi_lines(&outcomes, &active) {
        println!("{line}");
    }

    Ok(())
}

fn classify(cards: &str) -> Result<()> {
    let cards = input::parse_cards(cards)?;
    input::deck_without(&cards)?;

    let best = best_hands(&cards)?;
    debug!("{} best hands", best.len());

    if let Some(hand) = best.first() {
        println!("{}", report::hand_line(hand));
    }

    Ok(())
}
