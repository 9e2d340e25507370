//! Game integration tests.

#![expect(clippy::float_cmp, reason = "volumes are stored, not computed")]

mod common;

use std::collections::HashSet;

use common::{assert_exclusive, card, find_in, init_logging, script_hands};
use warrs::{
    AudioCue, DECK_SIZE, DealError, DeckManager, Game, GameOptions, GameState, MenuError,
    Messages, Outcome, Pile, PileError, Resolution, ResolveError, RestartError, Score, SetupError,
    Side, Suit,
};

fn started(seed: u64) -> Game {
    init_logging();
    let game = Game::new(GameOptions::default(), seed);
    game.start().unwrap();
    game
}

fn expect_round(resolution: Resolution) -> warrs::RoundResult {
    match resolution {
        Resolution::Round(round) => round,
        Resolution::GameOver(result) => panic!("expected a scored round, got {result:?}"),
    }
}

fn expect_game_over(resolution: Resolution) -> warrs::GameResult {
    match resolution {
        Resolution::GameOver(result) => result,
        Resolution::Round(round) => panic!("expected game over, got {round:?}"),
    }
}

#[test]
fn start_splits_deck_between_hands() {
    init_logging();
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.state(), GameState::Idle);

    let report = game.start().unwrap();
    assert_eq!(report.counts.player_hand, 26);
    assert_eq!(report.counts.opponent_hand, 26);
    assert_eq!(report.counts.deck, 0);
    assert_eq!(report.counts.total(), DECK_SIZE);
    assert!(!report.repaired);
    assert_eq!(report.cue.cue, AudioCue::Shuffle);
    assert_eq!(report.cue.volume, 0.5);
    assert!(report.affordances.deal);
    assert!(!report.affordances.play_again);

    assert_eq!(game.state(), GameState::AwaitingDeal);
    assert_eq!(game.score(), Score::default());
    assert_exclusive(&game.store.lock());
}

#[test]
fn start_is_rejected_while_a_session_runs() {
    let game = started(2);
    assert_eq!(game.start().unwrap_err(), SetupError::InvalidState);
}

#[test]
fn requests_before_start_are_rejected() {
    let game = Game::new(GameOptions::default(), 3);
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.resolve().unwrap_err(), ResolveError::InvalidState);
    assert_eq!(game.restart().unwrap_err(), RestartError::InvalidState);
    assert_eq!(game.main_menu().unwrap_err(), MenuError::InvalidState);
}

#[test]
fn higher_player_card_wins_the_round() {
    let game = started(4);
    script_hands(
        &game,
        &[(Suit::Hearts, 10), (Suit::Clubs, 2)],
        &[(Suit::Spades, 7), (Suit::Clubs, 3)],
    );

    let reveal = game.deal().unwrap();
    assert_eq!(reveal.player.card, card(Suit::Hearts, 10));
    assert_eq!(reveal.opponent.card, card(Suit::Spades, 7));
    assert_eq!(reveal.counts.player_hand, 1);
    assert_eq!(reveal.counts.opponent_hand, 1);
    assert_eq!(reveal.counts.in_use, 2);
    assert!(!reveal.player_exhausted);
    assert_eq!(reveal.cue.cue, AudioCue::CardSlide);
    assert_eq!(game.state(), GameState::RoundInProgress);
    assert_eq!(game.score(), Score::default());

    let round = expect_round(game.resolve().unwrap());
    assert_eq!(round.outcome, Outcome::PlayerWin);
    assert_eq!(round.message, "You have won!");
    assert_eq!(round.cue.cue, AudioCue::RoundWin);
    assert_eq!(
        round.score,
        Score {
            player: 1,
            opponent: 0
        }
    );
    assert_eq!(game.state(), GameState::RoundResolved);
    assert_eq!(game.message(), "You have won!");
    assert!(round.affordances.deal);
}

#[test]
fn higher_opponent_card_wins_the_round() {
    let game = started(5);
    script_hands(
        &game,
        &[(Suit::Hearts, 1), (Suit::Clubs, 2)],
        &[(Suit::Spades, 13), (Suit::Clubs, 3)],
    );

    let (_, resolution) = game.play_round().unwrap();
    let round = expect_round(resolution);
    assert_eq!(round.outcome, Outcome::OpponentWin);
    assert_eq!(round.message, "Your Opponent has won!");
    assert_eq!(round.cue.cue, AudioCue::RoundLose);
    assert_eq!(
        game.score(),
        Score {
            player: 0,
            opponent: 1
        }
    );
}

#[test]
fn equal_values_are_a_draw_without_escalation() {
    let game = started(6);
    script_hands(
        &game,
        &[(Suit::Hearts, 5), (Suit::Clubs, 9)],
        &[(Suit::Spades, 5), (Suit::Clubs, 4)],
    );

    let (_, resolution) = game.play_round().unwrap();
    let round = expect_round(resolution);
    assert_eq!(round.outcome, Outcome::Draw);
    assert_eq!(round.message, "Draw!");
    assert_eq!(round.cue.cue, AudioCue::RoundDraw);
    assert_eq!(game.score(), Score::default());

    // The tie costs each side exactly one card.
    assert_eq!(round.counts.player_hand, 1);
    assert_eq!(round.counts.opponent_hand, 1);
}

#[test]
fn next_deal_retires_the_revealed_cards() {
    let game = started(7);
    script_hands(
        &game,
        &[(Suit::Hearts, 10), (Suit::Clubs, 2), (Suit::Hearts, 4)],
        &[(Suit::Spades, 7), (Suit::Clubs, 3), (Suit::Spades, 4)],
    );

    let (first, _) = game.play_round().unwrap();
    assert!(!game.message().is_empty());

    let second = game.deal().unwrap();
    assert!(game.message().is_empty());
    assert_eq!(second.counts.discard, 2);
    assert_eq!(second.counts.in_use, 2);

    let store = game.store.lock();
    assert_eq!(store.pile_of(first.player.id), Some(Pile::Discard));
    assert_eq!(store.pile_of(first.opponent.id), Some(Pile::Discard));
    assert_eq!(store.pile_of(second.player.id), Some(Pile::InUse));
    assert_exclusive(&store);
}

#[test]
fn deal_is_rejected_while_a_round_is_in_progress() {
    let game = started(8);
    game.deal().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.restart().unwrap_err(), RestartError::InvalidState);

    game.resolve().unwrap();
    assert_eq!(game.resolve().unwrap_err(), ResolveError::InvalidState);
}

#[test]
fn last_card_ends_the_game_without_scoring_it() {
    let game = started(9);
    script_hands(
        &game,
        &[(Suit::Hearts, 10), (Suit::Clubs, 2)],
        &[(Suit::Spades, 7), (Suit::Clubs, 3)],
    );

    expect_round(game.play_round().unwrap().1);

    let (reveal, resolution) = game.play_round().unwrap();
    assert!(reveal.player_exhausted);
    assert!(reveal.opponent_exhausted);

    let result = expect_game_over(resolution);
    assert_eq!(result.outcome, Outcome::PlayerWin);
    assert_eq!(
        result.score,
        Score {
            player: 1,
            opponent: 0
        }
    );
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
}

#[test]
fn final_outcome_follows_the_running_score() {
    let cases = [
        (5, 3, Outcome::PlayerWin, AudioCue::GameWin, "You have won the game!"),
        (
            4,
            4,
            Outcome::Draw,
            AudioCue::GameDraw,
            "You and Your Opponent had a Draw!",
        ),
        (
            2,
            6,
            Outcome::OpponentWin,
            AudioCue::GameLose,
            "Your Opponent has won the game!",
        ),
    ];

    for (player, opponent, outcome, cue, message) in cases {
        let game = started(10);
        script_hands(&game, &[(Suit::Hearts, 2)], &[(Suit::Spades, 13)]);
        *game.score.lock() = Score { player, opponent };

        let result = expect_game_over(game.play_round().unwrap().1);
        assert_eq!(result.outcome, outcome);
        assert_eq!(result.cue.cue, cue);
        assert_eq!(result.message, message);
        assert_eq!(result.score, Score { player, opponent });
        assert!(result.affordances.play_again);
        assert!(result.affordances.main_menu);
        assert!(!result.affordances.deal);
    }
}

#[test]
fn full_game_conserves_every_card() {
    let game = started(11);
    let mut deals = 0;

    while game.state() != GameState::GameOver {
        let (reveal, resolution) = game.play_round().unwrap();
        deals += 1;
        assert_eq!(reveal.counts.total(), DECK_SIZE);
        assert_eq!(reveal.counts.player_hand, reveal.counts.opponent_hand);
        assert_eq!(reveal.player.card.value(), reveal.player.card.rank);

        let store = game.store.lock();
        assert_exclusive(&store);
        assert_eq!(store.count_all_decks(), DECK_SIZE);
        drop(store);

        if let Resolution::Round(round) = resolution {
            assert_eq!(round.counts.total(), DECK_SIZE);
        }
    }

    assert_eq!(deals, 26);
    let score = game.score();
    assert!(score.player + score.opponent <= 25);
}

#[test]
fn restart_resplits_and_keeps_score() {
    let game = started(12);
    for _ in 0..5 {
        game.play_round().unwrap();
    }
    let score = game.score();

    let report = game.restart().unwrap();
    assert_eq!(report.counts.player_hand, 26);
    assert_eq!(report.counts.opponent_hand, 26);
    assert_eq!(report.counts.deck, 0);
    assert_eq!(report.counts.discard, 0);
    assert_eq!(report.counts.in_use, 0);
    assert_eq!(game.score(), score);
    assert_eq!(game.state(), GameState::AwaitingDeal);
    assert!(game.revealed().is_none());
    assert!(game.message().is_empty());
}

#[test]
fn restart_after_game_over_starts_a_new_game() {
    let game = started(13);
    while game.state() != GameState::GameOver {
        game.play_round().unwrap();
    }
    let score = game.score();

    for _ in 0..3 {
        let report = game.restart().unwrap();
        assert_eq!(report.counts.player_hand, 26);
        assert_eq!(report.counts.opponent_hand, 26);
        assert_eq!(report.counts.deck, 0);
    }
    assert_eq!(game.score(), score);
    assert_exclusive(&game.store.lock());
}

#[test]
fn main_menu_then_start_resets_score() {
    let game = started(14);
    assert_eq!(game.main_menu().unwrap_err(), MenuError::InvalidState);

    while game.state() != GameState::GameOver {
        game.play_round().unwrap();
    }
    game.main_menu().unwrap();
    assert_eq!(game.state(), GameState::MainMenu);
    assert_eq!(game.affordances(), GameState::MainMenu.affordances());

    let report = game.start().unwrap();
    assert_eq!(report.counts.player_hand, 26);
    assert_eq!(game.score(), Score::default());
    assert_eq!(game.state(), GameState::AwaitingDeal);
}

#[test]
fn diverged_hands_are_rejected() {
    let game = started(15);
    {
        let mut store = game.store.lock();
        let top = store.top(Pile::Hand(Side::Player)).unwrap();
        store.move_card_to_discard(top, Pile::Hand(Side::Player)).unwrap();
    }

    assert_eq!(
        game.deal().unwrap_err(),
        DealError::HandsDiverged {
            player: 25,
            opponent: 26
        }
    );
    assert_eq!(game.state(), GameState::AwaitingDeal);
    assert_eq!(game.score(), Score::default());
}

#[test]
fn refused_deal_leaves_the_resolved_round_on_the_table() {
    let game = started(20);
    let (reveal, _) = game.play_round().unwrap();
    let message = game.message();
    {
        let mut store = game.store.lock();
        let top = store.top(Pile::Hand(Side::Opponent)).unwrap();
        store.move_card_to_discard(top, Pile::Hand(Side::Opponent)).unwrap();
    }
    let before = game.counts();

    assert_eq!(
        game.deal().unwrap_err(),
        DealError::HandsDiverged {
            player: 25,
            opponent: 24
        }
    );
    assert_eq!(game.state(), GameState::RoundResolved);
    assert_eq!(game.counts(), before);
    assert_eq!(game.message(), message);
    let (player, opponent) = game.revealed().unwrap();
    assert_eq!(player.id, reveal.player.id);
    assert_eq!(opponent.id, reveal.opponent.id);
}

#[test]
fn missing_table_card_aborts_the_deal() {
    let game = started(16);
    let (reveal, _) = game.play_round().unwrap();
    let score = game.score();

    game.store
        .lock()
        .move_card_to_discard(reveal.player.id, Pile::InUse)
        .unwrap();

    assert_eq!(
        game.deal().unwrap_err(),
        DealError::Pile(PileError::CardNotFound {
            card: reveal.player.id,
            pile: Pile::InUse,
        })
    );
    assert_eq!(game.score(), score);
    assert_eq!(
        game.store.lock().pile_of(reveal.opponent.id),
        Some(Pile::InUse)
    );
}

#[test]
fn start_regenerates_a_malformed_deck() {
    init_logging();
    let cards = vec![card(Suit::Clubs, 2); 10];
    let game = Game::with_store(GameOptions::default(), DeckManager::from_cards(cards, 17));

    let report = game.start().unwrap();
    assert!(report.repaired);
    assert_eq!(report.counts.player_hand, 26);
    assert_eq!(report.counts.opponent_hand, 26);
    assert_exclusive(&game.store.lock());
}

#[test]
fn start_regenerates_a_deck_of_duplicates() {
    init_logging();
    let cards = vec![card(Suit::Clubs, 2); DECK_SIZE];
    let game = Game::with_store(GameOptions::default(), DeckManager::from_cards(cards, 19));

    let report = game.start().unwrap();
    assert!(report.repaired);
    assert_eq!(report.counts.total(), DECK_SIZE);

    let store = game.store.lock();
    assert!(store.validate().is_ok());
    let distinct: HashSet<(Suit, u8)> = [Pile::Hand(Side::Player), Pile::Hand(Side::Opponent)]
        .into_iter()
        .flat_map(|pile| store.cards_in(pile).map(|(_, c)| (c.suit, c.rank)))
        .collect();
    assert_eq!(distinct.len(), DECK_SIZE);
    assert_exclusive(&store);
}

#[test]
fn start_reassigns_overridden_values() {
    init_logging();
    let cards = warrs::card::standard_deck()
        .into_iter()
        .map(|c| c.with_value(99))
        .collect();
    let game = Game::with_store(GameOptions::default(), DeckManager::from_cards(cards, 18));
    game.start().unwrap();

    let store = game.store.lock();
    for pile in [Pile::Hand(Side::Player), Pile::Hand(Side::Opponent)] {
        for (_, c) in store.cards_in(pile) {
            assert_eq!(c.value(), c.rank);
        }
    }
}

#[test]
fn options_drive_messages_and_volumes() {
    init_logging();
    let messages = Messages {
        round_win: "Point to you".into(),
        ..Messages::default()
    };
    let options = GameOptions::default()
        .with_messages(messages)
        .with_cue_volume(AudioCue::RoundWin, 0.9)
        .with_cue_volume(AudioCue::CardSlide, 3.0);
    let game = Game::new(options, 19);
    game.start().unwrap();
    script_hands(
        &game,
        &[(Suit::Hearts, 12), (Suit::Clubs, 2)],
        &[(Suit::Spades, 11), (Suit::Clubs, 3)],
    );

    let (reveal, resolution) = game.play_round().unwrap();
    assert_eq!(reveal.cue.volume, 1.0);
    let round = expect_round(resolution);
    assert_eq!(round.message, "Point to you");
    assert_eq!(round.cue.volume, 0.9);
}

#[test]
fn revealed_cards_are_reported_until_the_next_deal() {
    let game = started(20);
    assert!(game.revealed().is_none());

    let (reveal, _) = game.play_round().unwrap();
    let (player, opponent) = game.revealed().unwrap();
    assert_eq!(player, reveal.player);
    assert_eq!(opponent, reveal.opponent);

    let store = game.store.lock();
    assert_eq!(
        find_in(&store, Pile::InUse, player.card.suit, player.card.rank),
        player.id
    );
}

#[test]
fn independent_games_do_not_share_state() {
    let first = started(21);
    let second = started(21);

    first.play_round().unwrap();
    assert_eq!(first.counts().player_hand, 25);
    assert_eq!(second.counts().player_hand, 26);
}

#[test]
fn concurrent_requests_never_interleave() {
    let game = started(22);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..20 {
                    match game.deal() {
                        Ok(_) | Err(DealError::Busy | DealError::InvalidState) => {}
                        Err(err) => panic!("unexpected deal error: {err}"),
                    }
                    match game.resolve() {
                        Ok(_) | Err(ResolveError::Busy | ResolveError::InvalidState) => {}
                        Err(err) => panic!("unexpected resolve error: {err}"),
                    }
                }
            });
        }
    });

    let counts = game.counts();
    assert_eq!(counts.total(), DECK_SIZE);
    assert_eq!(counts.player_hand, counts.opponent_hand);
    assert_exclusive(&game.store.lock());
}
