// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The cards deck.
use rand::prelude::*;

use crate::{Card, Error, Rank, Suit, subsets};

#[cfg(feature = "parallel")]
mod parallel;

/// A cards Deck
///
/// The deck holds the cards that have not been dealt yet, removing a card
/// moves it to the dealt state so that it cannot be dealt twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards in the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Checks if the card is in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck.
    ///
    /// Returns [Error::CardNotFound] if the card is not in the deck.
    pub fn remove(&mut self, card: Card) -> Result<(), Error> {
        let pos = self
            .cards
            .iter()
            .position(|c| c == &card)
            .ok_or(Error::CardNotFound(card))?;
        self.cards.remove(pos);
        Ok(())
    }

    /// Returns a copy of this deck without the given cards.
    pub fn without(&self, cards: &[Card]) -> Result<Deck, Error> {
        let mut deck = self.clone();
        for &card in cards {
            deck.remove(card)?;
        }

        Ok(deck)
    }

    /// Checks that the dealt cards are out of this deck and that no card has
    /// been dealt twice.
    ///
    /// Returns [Error::DuplicateCard] for the first card that breaks the rule.
    pub fn check_dealt(&self, dealt: &[Card]) -> Result<(), Error> {
        for (idx, &card) in dealt.iter().enumerate() {
            if self.contains(card) || dealt[..idx].contains(&card) {
                return Err(Error::DuplicateCard(card));
            }
        }

        Ok(())
    }

    /// Calls the `f` closure for each k-cards subset of the deck.
    ///
    /// A zero k calls `f` once with no cards. Panics if k > 7.
    pub fn for_each<F>(&self, k: usize, f: F)
    where
        F: FnMut(&[Card]),
    {
        subsets::for_each_subset(&self.cards, k, f);
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_cards_are_unique() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        assert!(deck.is_empty());
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        let ad = Card::new(Rank::Ace, Suit::Diamonds);

        assert!(deck.contains(ad));
        deck.remove(ad).unwrap();
        assert!(!deck.contains(ad));
        assert_eq!(deck.count(), 51);

        // Removing it again is a double deal.
        assert_eq!(deck.remove(ad), Err(Error::CardNotFound(ad)));
        assert_eq!(deck.count(), 51);
    }

    #[test]
    fn deck_without() {
        let deck = Deck::default();
        let ks = Card::new(Rank::King, Suit::Spades);
        let qs = Card::new(Rank::Queen, Suit::Spades);

        let rest = deck.without(&[ks, qs]).unwrap();
        assert_eq!(rest.count(), 50);
        assert!(!rest.contains(ks) && !rest.contains(qs));

        // The original deck is unchanged.
        assert_eq!(deck.count(), Deck::SIZE);

        assert_eq!(rest.without(&[ks]), Err(Error::CardNotFound(ks)));
    }

    #[test]
    fn deck_check_dealt() {
        let ks = Card::new(Rank::King, Suit::Spades);
        let qs = Card::new(Rank::Queen, Suit::Spades);
        let deck = Deck::default().without(&[ks, qs]).unwrap();

        assert!(deck.check_dealt(&[ks, qs]).is_ok());
        assert_eq!(deck.check_dealt(&[ks, ks]), Err(Error::DuplicateCard(ks)));

        let js = Card::new(Rank::Jack, Suit::Spades);
        assert_eq!(deck.check_dealt(&[ks, js]), Err(Error::DuplicateCard(js)));
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        let mut count = 0;
        deck.for_each(0, |cards| {
            assert!(cards.is_empty());
            count += 1;
        });
        assert_eq!(count, 1);
    }

    // This takes a while to run in debug mode as it goes through 100M subsets.
    #[test]
    #[ignore]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds)).unwrap();
        deck.remove(Card::new(Rank::King, Suit::Diamonds)).unwrap();

        let mut count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 99_884_400);
    }
}
