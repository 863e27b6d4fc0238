//! Per-player decks and hands.
//!
//! A deck holds the 18 cards of one player (values 1-9 in each of the
//! player's two colors). A hand holds the cards currently playable, two at
//! a time until the deck runs dry.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, MAX_VALUE, MIN_VALUE};
use crate::core::{GameRng, Player};

/// Cards held in hand at the start of a game.
pub const HAND_SIZE: usize = 2;

/// Cards in a full deck (9 values x 2 colors).
pub const DECK_SIZE: usize = 18;

/// A player's draw pile. The top of the deck is the end of the vec.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the full ordered deck for a player.
    #[must_use]
    pub fn full(player: Player) -> Self {
        let cards = player
            .colors()
            .into_iter()
            .flat_map(|color| (MIN_VALUE..=MAX_VALUE).map(move |value| Card { value, color }))
            .collect();
        Self { cards }
    }

    /// Build the full deck for a player and shuffle it.
    #[must_use]
    pub fn shuffled(player: Player, rng: &mut GameRng) -> Self {
        let mut deck = Self::full(player);
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Build a deck with a fixed order (last card is drawn first).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// An empty deck.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Draw the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// The cards a player may currently play. Order carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; HAND_SIZE]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from explicit cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: SmallVec::from_slice(cards),
        }
    }

    /// Deal an opening hand from the top of a deck.
    pub fn deal(deck: &mut Deck) -> Self {
        let mut hand = Self::new();
        for _ in 0..HAND_SIZE {
            if let Some(card) = deck.draw() {
                hand.push(card);
            }
        }
        hand
    }

    /// Exact value + color membership.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Remove one copy of a card. Returns true if it was held.
    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(pos) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    #[test]
    fn test_full_deck_contents() {
        let deck = Deck::full(Player::Two);
        assert_eq!(deck.len(), DECK_SIZE);
        assert!(deck.cards().iter().all(|c| Player::Two.owns(c.color)));

        for color in [Color::Green, Color::Yellow] {
            let mut values: Vec<u8> = deck
                .cards()
                .iter()
                .filter(|c| c.color == color)
                .map(|c| c.value)
                .collect();
            values.sort_unstable();
            assert_eq!(values, (1..=9).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_shuffled_deck_is_permutation() {
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(Player::One, &mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        assert_ne!(deck, Deck::full(Player::One));

        let mut sorted = deck.cards().to_vec();
        sorted.sort_by_key(|c| (c.color, c.value));
        let mut expected = Deck::full(Player::One).cards().to_vec();
        expected.sort_by_key(|c| (c.color, c.value));
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_deal_and_draw() {
        let red = |v| Card::new(v, Color::Red).unwrap();
        let mut deck = Deck::from_cards(vec![red(1), red(2), red(3)]);

        let hand = Hand::deal(&mut deck);
        assert_eq!(hand.as_slice(), &[red(3), red(2)]);
        assert_eq!(deck.len(), 1);

        assert_eq!(deck.draw(), Some(red(1)));
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn test_deal_from_short_deck() {
        let mut deck = Deck::from_cards(vec![Card::new(5, Color::Blue).unwrap()]);
        let hand = Hand::deal(&mut deck);
        assert_eq!(hand.len(), 1);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_hand_remove_exact_match() {
        let blue5 = Card::new(5, Color::Blue).unwrap();
        let red5 = Card::new(5, Color::Red).unwrap();
        let mut hand = Hand::from_cards(&[blue5]);

        assert!(!hand.contains(red5));
        assert!(!hand.remove(red5));
        assert!(hand.remove(blue5));
        assert!(hand.is_empty());
    }
}
