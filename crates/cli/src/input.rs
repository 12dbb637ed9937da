// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Command line cards input.
use anyhow::{Result, bail};

use showdown_cards::{Card, Deck, Error, Rank};
use showdown_equity::Street;

/// Parses a whitespace separated list of cards.
///
/// A rank token followed by a suit token is a card, so `"10 S KH"` and
/// `"10S KH"` are the same two cards.
pub fn parse_cards(s: &str) -> Result<Vec<Card>> {
    let mut cards = Vec::new();
    let mut tokens = s.split_whitespace();

    while let Some(token) = tokens.next() {
        let card = if token.parse::<Rank>().is_ok() {
            match tokens.next() {
                Some(suit) => Card::from_tokens(token, suit)?,
                None => bail!("missing suit for rank '{token}'"),
            }
        } else {
            token.parse::<Card>()?
        };

        cards.push(card);
    }

    Ok(cards)
}

/// Parses two hole cards.
pub fn parse_hole(s: &str) -> Result<[Card; 2]> {
    match parse_cards(s)?.as_slice() {
        &[c1, c2] => Ok([c1, c2]),
        cards => bail!("expected two hole cards, found {} in '{s}'", cards.len()),
    }
}

/// Parses the board cards and returns them with their street.
pub fn parse_board(s: &str) -> Result<(Vec<Card>, Street)> {
    let board = parse_cards(s)?;
    match Street::from_board_len(board.len()) {
        Some(street) => Ok((board, street)),
        None => bail!("the board needs 3 to 5 cards, found {}", board.len()),
    }
}

/// Returns a deck without the dealt cards, a card dealt twice is an error.
pub fn deck_without(dealt: &[Card]) -> Result<Deck> {
    let deck = Deck::default().without(dealt).map_err(|e| match e {
        Error::CardNotFound(card) => Error::DuplicateCard(card),
        e => e,
    })?;

    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_list() {
        let cards = parse_cards("10 S KH 10d ah").unwrap();
        let expected = ["TS", "KH", "TD", "AH"]
            .into_iter()
            .map(|c| c.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(cards, expected);

        assert!(parse_cards("").unwrap().is_empty());
        assert!(parse_cards("10").is_err());
        assert!(parse_cards("ZZ").is_err());
        assert!(parse_cards("K X").is_err());
    }

    #[test]
    fn hole_and_board() {
        assert!(parse_hole("AS AD").is_ok());
        assert!(parse_hole("AS").is_err());
        assert!(parse_hole("AS AD KS").is_err());

        let (board, street) = parse_board("KS QS JS 2H").unwrap();
        assert_eq!(board.len(), 4);
        assert_eq!(street, Street::Turn);
        assert!(parse_board("KS QS").is_err());
    }

    #[test]
    fn dealt_cards() {
        let dealt = parse_cards("AS AD KS").unwrap();
        assert_eq!(deck_without(&dealt).unwrap().count(), 49);

        let twice = parse_cards("AS AD AS").unwrap();
        let err = deck_without(&twice).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::DuplicateCard(dealt[0]))
        );
    }
}
