//! Shared helpers for integration tests.

#![expect(dead_code, reason = "each test binary uses a different subset")]

use warrs::{Card, CardId, DeckManager, Game, Pile, Side, Suit};

/// Installs a test-writer subscriber. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, then `warn`.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(tracing_subscriber::EnvFilter::new)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

pub fn find_in(store: &DeckManager, pile: Pile, suit: Suit, rank: u8) -> CardId {
    store
        .cards_in(pile)
        .find(|(_, c)| c.suit == suit && c.rank == rank)
        .map(|(id, _)| id)
        .expect("card should be in the pile")
}

/// Gathers every card back into the deck, then deals the given cards to
/// the hands in order. Cards not named stay in the deck.
pub fn script_hands(game: &Game, player: &[(Suit, u8)], opponent: &[(Suit, u8)]) {
    let mut store = game.store.lock();
    store.shuffle_all_decks_together();
    for (side, cards) in [(Side::Player, player), (Side::Opponent, opponent)] {
        for &(suit, rank) in cards {
            let id = find_in(&store, Pile::Deck, suit, rank);
            store.move_card(id, Pile::Deck, Pile::Hand(side)).unwrap();
        }
    }
}

/// Asserts that every card sits in exactly one pile and that the pile tags
/// agree with the pile contents.
pub fn assert_exclusive(store: &DeckManager) {
    let mut seen = std::collections::HashSet::new();
    for pile in Pile::ALL {
        for (id, _) in store.cards_in(pile) {
            assert!(seen.insert(id), "{id} appears in more than one pile");
            assert_eq!(store.pile_of(id), Some(pile));
        }
    }
    assert_eq!(seen.len(), store.count_all_decks());
}
