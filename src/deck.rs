//! Deck pile store.
//!
//! [`DeckManager`] owns every card of a session in an arena indexed by
//! [`CardId`] and records, for each card, the one [`Pile`] it currently sits
//! in. Each pile keeps its cards in order, front first: the front of
//! [`Pile::Deck`] is the next card to deal and the front of a hand is the
//! next card to reveal.
//!
//! Moves check the recorded pile of the card before touching any ordering,
//! so a card is never in two piles at once and never in none.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::card::{self, Card, DECK_SIZE, Rank, Suit};
use crate::error::PileError;

/// Stable identity of a card within a [`DeckManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(pub usize);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The local player.
    Player,
    /// The opponent.
    Opponent,
}

/// A named pile of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pile {
    /// The draw pile.
    Deck,
    /// Cards retired from play.
    Discard,
    /// Cards currently revealed on the table.
    InUse,
    /// A player's private hand.
    Hand(Side),
}

const PILE_COUNT: usize = 5;

impl Pile {
    /// All piles tracked by the store.
    pub const ALL: [Self; PILE_COUNT] = [
        Self::Deck,
        Self::Discard,
        Self::InUse,
        Self::Hand(Side::Player),
        Self::Hand(Side::Opponent),
    ];

    const fn index(self) -> usize {
        match self {
            Self::Deck => 0,
            Self::Discard => 1,
            Self::InUse => 2,
            Self::Hand(Side::Player) => 3,
            Self::Hand(Side::Opponent) => 4,
        }
    }
}

/// Number of cards in each pile at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PileCounts {
    /// Cards in the draw pile.
    pub deck: usize,
    /// Cards in the discard pile.
    pub discard: usize,
    /// Cards on the table.
    pub in_use: usize,
    /// Cards in the player's hand.
    pub player_hand: usize,
    /// Cards in the opponent's hand.
    pub opponent_hand: usize,
}

impl PileCounts {
    /// Returns the number of cards across all piles.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.deck + self.discard + self.in_use + self.player_hand + self.opponent_hand
    }
}

/// One bit per suit and rank of the standard deck.
fn card_bit(card: Card) -> Option<u64> {
    let suit = Suit::ALL.iter().position(|&suit| suit == card.suit)?;
    let rank = Rank::from_u8(card.rank)?;
    Some(1_u64 << (suit * Rank::ALL.len() + usize::from(rank.value() - 1)))
}

/// Owns the cards of one session and tracks which pile each card is in.
#[derive(Debug, Clone)]
pub struct DeckManager {
    cards: Vec<Card>,
    locations: Vec<Pile>,
    piles: [VecDeque<CardId>; PILE_COUNT],
    rng: ChaCha8Rng,
}

impl DeckManager {
    /// Creates a store holding a canonical 52-card deck in [`Pile::Deck`].
    ///
    /// The deck starts in canonical order; the seed drives every later
    /// shuffle.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::DeckManager;
    ///
    /// let store = DeckManager::new(42);
    /// assert_eq!(store.count_deck(), 52);
    /// assert_eq!(store.count_all_decks(), 52);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_cards(card::standard_deck(), seed)
    }

    /// Creates a store from an arbitrary card list, all placed in
    /// [`Pile::Deck`] in the given order.
    ///
    /// Ids are assigned in list order. The list is not checked against the
    /// standard deck; a store built from a short, padded or duplicated list
    /// fails the full-deck check at session setup and gets regenerated there.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        let mut store = Self {
            cards: Vec::new(),
            locations: Vec::new(),
            piles: Default::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        store.replace_cards(cards);
        store
    }

    fn replace_cards(&mut self, cards: Vec<Card>) {
        for pile in &mut self.piles {
            pile.clear();
        }
        self.locations = alloc::vec![Pile::Deck; cards.len()];
        self.piles[Pile::Deck.index()] = (0..cards.len()).map(CardId).collect();
        self.cards = cards;
    }

    /// Returns the number of cards in the draw pile.
    #[must_use]
    pub fn count_deck(&self) -> usize {
        self.count(Pile::Deck)
    }

    /// Returns the number of cards in `pile`.
    #[must_use]
    pub fn count(&self, pile: Pile) -> usize {
        self.piles[pile.index()].len()
    }

    /// Returns the number of cards across all piles, hands included.
    #[must_use]
    pub fn count_all_decks(&self) -> usize {
        self.piles.iter().map(VecDeque::len).sum()
    }

    /// Returns a snapshot of every pile's size.
    #[must_use]
    pub fn counts(&self) -> PileCounts {
        PileCounts {
            deck: self.count(Pile::Deck),
            discard: self.count(Pile::Discard),
            in_use: self.count(Pile::InUse),
            player_hand: self.count(Pile::Hand(Side::Player)),
            opponent_hand: self.count(Pile::Hand(Side::Opponent)),
        }
    }

    /// Checks that the piles together hold exactly one full deck: 52 cards,
    /// one of each suit and rank.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::InvariantViolation`] with the total found.
    pub fn validate(&self) -> Result<(), PileError> {
        let total = self.count_all_decks();
        let violation = PileError::InvariantViolation { total };
        if total != DECK_SIZE {
            return Err(violation);
        }

        let mut seen = 0_u64;
        for pile in &self.piles {
            for id in pile {
                let bit = self
                    .cards
                    .get(id.0)
                    .and_then(|card| card_bit(*card))
                    .ok_or(violation)?;
                if seen & bit != 0 {
                    return Err(violation);
                }
                seen |= bit;
            }
        }
        Ok(())
    }

    /// Returns the card with the given id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.0)
    }

    /// Returns the pile the card currently sits in.
    #[must_use]
    pub fn pile_of(&self, id: CardId) -> Option<Pile> {
        self.locations.get(id.0).copied()
    }

    /// Returns the front card of `pile`.
    #[must_use]
    pub fn top(&self, pile: Pile) -> Option<CardId> {
        self.piles[pile.index()].front().copied()
    }

    /// Iterates over the cards of `pile`, front first.
    pub fn cards_in(&self, pile: Pile) -> impl Iterator<Item = (CardId, &Card)> + '_ {
        self.piles[pile.index()]
            .iter()
            .map(|&id| (id, &self.cards[id.0]))
    }

    /// Recomputes the value of every card from its rank.
    pub fn assign_values(&mut self) {
        card::assign_values(&mut self.cards);
    }

    /// Drops every card and regenerates a canonical 52-card deck in
    /// [`Pile::Deck`].
    ///
    /// This is the repair path for a store whose piles no longer hold a full
    /// deck. Card ids from before the call are invalidated.
    pub fn remove_all_and_create_new(&mut self) {
        warn!(
            total = self.count_all_decks(),
            "regenerating deck from scratch"
        );
        self.replace_cards(card::standard_deck());
    }

    /// Moves every pile back into [`Pile::Deck`] and shuffles it.
    pub fn shuffle_all_decks_together(&mut self) {
        let deck_index = Pile::Deck.index();
        for pile in Pile::ALL {
            if pile == Pile::Deck {
                continue;
            }
            let drained: Vec<CardId> = self.piles[pile.index()].drain(..).collect();
            for id in drained {
                self.locations[id.0] = Pile::Deck;
                self.piles[deck_index].push_back(id);
            }
        }
        self.shuffle_deck();
    }

    /// Shuffles [`Pile::Deck`] in place. Other piles are untouched.
    pub fn shuffle_deck(&mut self) {
        let deck = &mut self.piles[Pile::Deck.index()];
        deck.make_contiguous().shuffle(&mut self.rng);
        debug!(cards = deck.len(), "shuffled deck");
    }

    /// Moves one card from `from` to the back of `to`.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::CardNotFound`] if the card is not in `from`.
    pub fn move_card(&mut self, id: CardId, from: Pile, to: Pile) -> Result<(), PileError> {
        if self.pile_of(id) != Some(from) {
            return Err(PileError::CardNotFound {
                card: id,
                pile: from,
            });
        }

        let source = &mut self.piles[from.index()];
        let removed = if source.front() == Some(&id) {
            source.pop_front()
        } else if source.back() == Some(&id) {
            source.pop_back()
        } else {
            source
                .iter()
                .position(|&c| c == id)
                .and_then(|index| source.remove(index))
        };
        if removed.is_none() {
            return Err(PileError::CardNotFound {
                card: id,
                pile: from,
            });
        }

        self.piles[to.index()].push_back(id);
        self.locations[id.0] = to;
        debug!(card = %id, ?from, ?to, "moved card");
        Ok(())
    }

    /// Moves one card from `from` to [`Pile::InUse`].
    ///
    /// # Errors
    ///
    /// Returns [`PileError::CardNotFound`] if the card is not in `from`.
    pub fn move_card_to_in_use(&mut self, id: CardId, from: Pile) -> Result<(), PileError> {
        self.move_card(id, from, Pile::InUse)
    }

    /// Moves one card from `from` to [`Pile::Discard`].
    ///
    /// # Errors
    ///
    /// Returns [`PileError::CardNotFound`] if the card is not in `from`.
    pub fn move_card_to_discard(&mut self, id: CardId, from: Pile) -> Result<(), PileError> {
        self.move_card(id, from, Pile::Discard)
    }
}
