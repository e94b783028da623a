//! A full match: the game plus turn order and history.

use im::Vector;
use log::info;

use crate::core::{Action, ActionRecord, GameError, PlayerId};

use super::engine::Game;
use super::outcome::{ActionOutcome, EndReason, GameStatus};
use super::turns::{TurnPhase, TurnTracker};

/// Drives one `Game` turn by turn.
///
/// `take` acts for whoever's turn it is. Rejected actions are reported and
/// do not use up the turn. When the last round runs out the game is ended
/// with [`EndReason::LastRoundComplete`].
#[derive(Clone, Debug)]
pub struct Match {
    game: Game,
    turns: TurnTracker,
    history: Vector<ActionRecord>,
}

impl Match {
    /// Wrap a freshly built game; player 1 acts first.
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            turns: TurnTracker::new(PlayerId::ONE),
            history: Vector::new(),
        }
    }

    /// A reproducible match.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Game::with_seed(seed))
    }

    /// Take `action` for the current player.
    pub fn take(&mut self, action: Action) -> Result<ActionOutcome, GameError> {
        if self.turns.is_over() {
            return Err(GameError::GameOver);
        }

        let player = self.turns.current();
        let outcome = self.game.apply(player, &action)?;
        self.history
            .push_back(ActionRecord::new(player, action, self.turns.turn()));

        if self.game.is_over() {
            self.turns.end();
        } else if self.turns.end_turn(outcome.missed_draw()) == TurnPhase::Ended {
            self.game.finish(EndReason::LastRoundComplete);
            info!("last round complete with {} points", self.game.score());
        }

        Ok(outcome)
    }

    /// The player who acts next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turns.current()
    }

    /// Current turn number, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turns.turn()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turns.phase()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_alternates_players_and_records_history() {
        let mut m = Match::with_seed(9);

        m.take(Action::Clue).unwrap();
        m.take(Action::Discard { card_index: 0 }).unwrap();

        let players: Vec<_> = m.history().iter().map(|r| r.player).collect();
        assert_eq!(players, vec![PlayerId::ONE, PlayerId::TWO]);
        assert_eq!(m.current_player(), PlayerId::ONE);
        assert_eq!(m.turn(), 3);
    }

    #[test]
    fn test_rejected_action_keeps_turn() {
        let mut m = Match::with_seed(9);

        assert_eq!(
            m.take(Action::Discard { card_index: 0 }),
            Err(GameError::AllTokensAlreadyHeld)
        );
        assert_eq!(m.current_player(), PlayerId::ONE);
        assert_eq!(m.turn(), 1);
        assert!(m.history().is_empty());
    }
}
