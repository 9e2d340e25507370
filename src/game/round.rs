use alloc::string::String;

use tracing::{debug, info};

use crate::cue::AudioCue;
use crate::deck::{CardId, DeckManager, Pile, Side};
use crate::error::{DealError, PileError, ResolveError};
use crate::result::{DealtCard, GameResult, Outcome, Resolution, Reveal, RoundResult};

use super::{Game, GameState};

fn dealt(store: &DeckManager, id: CardId) -> Result<DealtCard, PileError> {
    let card = store.card(id).copied().ok_or(PileError::CardNotFound {
        card: id,
        pile: Pile::InUse,
    })?;
    Ok(DealtCard { id, card })
}

/// Moves both revealed cards from the table to the discard pile.
///
/// Both cards are checked before either is moved, so a failure leaves the
/// table as it was.
pub(super) fn retire(
    store: &mut DeckManager,
    player: CardId,
    opponent: CardId,
) -> Result<(), PileError> {
    for id in [player, opponent] {
        if store.pile_of(id) != Some(Pile::InUse) {
            return Err(PileError::CardNotFound {
                card: id,
                pile: Pile::InUse,
            });
        }
    }
    store.move_card_to_discard(player, Pile::InUse)?;
    store.move_card_to_discard(opponent, Pile::InUse)?;
    Ok(())
}

impl Game {
    /// Deals a round: clears the previous round's cards off the table, then
    /// reveals the front card of each hand.
    ///
    /// Revealed cards move from the hands onto the table ([`Pile::InUse`]);
    /// the counts in the returned [`Reveal`] therefore show the face-down
    /// cards left in each hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal, another
    /// request is being processed, the hands are empty or hold different
    /// numbers of cards, or a pile move fails. On error the score is left
    /// untouched.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn deal(&self) -> Result<Reveal, DealError> {
        let Some(_gate) = self.gate.try_lock() else {
            return Err(DealError::Busy);
        };

        let mut state = self.state.lock();
        if !state.accepts_deal() {
            return Err(DealError::InvalidState);
        }

        let mut store = self.store.lock();
        let mut table = self.table.lock();

        // Every check runs before the previous pair is retired, so a refused
        // deal leaves the table as it was.
        let player_left = store.count(Pile::Hand(Side::Player));
        let opponent_left = store.count(Pile::Hand(Side::Opponent));
        if player_left != opponent_left {
            return Err(DealError::HandsDiverged {
                player: player_left,
                opponent: opponent_left,
            });
        }

        let (Some(player), Some(opponent)) = (
            store.top(Pile::Hand(Side::Player)),
            store.top(Pile::Hand(Side::Opponent)),
        ) else {
            return Err(DealError::HandEmpty);
        };

        if let Some((previous_player, previous_opponent)) = table.revealed {
            retire(&mut store, previous_player, previous_opponent)?;
            table.revealed = None;
            table.message.clear();
        }

        store.move_card_to_in_use(player, Pile::Hand(Side::Player))?;
        store.move_card_to_in_use(opponent, Pile::Hand(Side::Opponent))?;
        table.revealed = Some((player, opponent));
        drop(table);

        let counts = store.counts();
        let reveal = Reveal {
            player: dealt(&store, player)?,
            opponent: dealt(&store, opponent)?,
            counts,
            player_exhausted: counts.player_hand == 0,
            opponent_exhausted: counts.opponent_hand == 0,
            cue: self.options.cues.event(AudioCue::CardSlide),
            pause: self.options.wait_before_results,
        };
        drop(store);

        *state = GameState::RoundInProgress;
        debug!(
            player = %reveal.player.card,
            opponent = %reveal.opponent.card,
            left = counts.player_hand,
            "revealed cards"
        );
        Ok(reveal)
    }

    /// Resolves the revealed round.
    ///
    /// While both hands still hold face-down cards, the higher value takes
    /// the round and scores one point; equal values are a draw and score
    /// nothing. Ties never escalate. Once a hand has no face-down card
    /// left, the revealed pair is not compared: the game ends and the
    /// running score decides the final outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, another request is
    /// being processed, or a revealed card cannot be found.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn resolve(&self) -> Result<Resolution, ResolveError> {
        let Some(_gate) = self.gate.try_lock() else {
            return Err(ResolveError::Busy);
        };

        let mut state = self.state.lock();
        if *state != GameState::RoundInProgress {
            return Err(ResolveError::InvalidState);
        }

        let store = self.store.lock();
        let mut score = self.score.lock();
        let mut table = self.table.lock();

        let (player_id, opponent_id) = table.revealed.ok_or(ResolveError::InvalidState)?;
        let player = dealt(&store, player_id)?;
        let opponent = dealt(&store, opponent_id)?;
        let counts = store.counts();
        drop(store);

        if counts.player_hand == 0 || counts.opponent_hand == 0 {
            let outcome = Outcome::compare(score.player, score.opponent);
            let cue = match outcome {
                Outcome::PlayerWin => AudioCue::GameWin,
                Outcome::OpponentWin => AudioCue::GameLose,
                Outcome::Draw => AudioCue::GameDraw,
            };
            let message: String = self.options.messages.game(outcome).into();
            table.message.clone_from(&message);
            *state = GameState::GameOver;

            info!(
                ?outcome,
                player = score.player,
                opponent = score.opponent,
                "game over"
            );
            return Ok(Resolution::GameOver(GameResult {
                outcome,
                message,
                cue: self.options.cues.event(cue),
                score: *score,
                counts,
                affordances: GameState::GameOver.affordances(),
            }));
        }

        let outcome = Outcome::compare(player.card.value(), opponent.card.value());
        let cue = match outcome {
            Outcome::PlayerWin => {
                score.player += 1;
                AudioCue::RoundWin
            }
            Outcome::OpponentWin => {
                score.opponent += 1;
                AudioCue::RoundLose
            }
            Outcome::Draw => AudioCue::RoundDraw,
        };
        let message: String = self.options.messages.round(outcome).into();
        table.message.clone_from(&message);
        *state = GameState::RoundResolved;

        debug!(
            ?outcome,
            player = score.player,
            opponent = score.opponent,
            "round resolved"
        );
        Ok(Resolution::Round(RoundResult {
            outcome,
            message,
            cue: self.options.cues.event(cue),
            score: *score,
            player,
            opponent,
            counts,
            affordances: GameState::RoundResolved.affordances(),
        }))
    }

    /// Deals and resolves one round.
    ///
    /// # Errors
    ///
    /// Returns an error if dealing fails. Resolving right after a
    /// successful deal only fails on a concurrent request or a broken
    /// store, both reported as [`DealError`].
    pub fn play_round(&self) -> Result<(Reveal, Resolution), DealError> {
        let reveal = self.deal()?;
        let resolution = self.resolve().map_err(|err| match err {
            ResolveError::InvalidState => DealError::InvalidState,
            ResolveError::Busy => DealError::Busy,
            ResolveError::Pile(err) => DealError::Pile(err),
        })?;
        Ok((reveal, resolution))
    }
}
