//! The scripted opening.

use crate::core::{Action, GameError, PlayerId};
use crate::game::{ActionOutcome, Game, Snapshot};

/// One step of the scripted demo.
#[derive(Clone, Debug)]
pub struct DemoStep {
    pub player: PlayerId,
    pub action: Action,
    pub result: Result<ActionOutcome, GameError>,
    pub snapshot: Snapshot,
}

/// Replay the fixed opening used for manual checks: player 1 plays their
/// first card five times, gives a clue, then discards their first card.
///
/// The script ignores turn order, so it drives a bare `Game`. Rejected
/// steps are kept in the log with their error.
pub fn scripted_demo(seed: u64) -> Vec<DemoStep> {
    let mut game = Game::with_seed(seed);
    let player = PlayerId::ONE;

    let script = std::iter::repeat(Action::Play { card_index: 0 })
        .take(5)
        .chain([Action::Clue, Action::Discard { card_index: 0 }]);

    script
        .map(|action| {
            let result = game.apply(player, &action);
            DemoStep {
                player,
                action,
                result,
                snapshot: game.snapshot(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_demo_has_seven_steps() {
        let steps = scripted_demo(1);

        assert_eq!(steps.len(), 7);
        assert!(steps.iter().all(|s| s.player == PlayerId::ONE));
        for step in &steps {
            assert_eq!(step.snapshot.total_cards(), 50);
        }
    }

    #[test]
    fn test_scripted_demo_is_reproducible() {
        let a: Vec<_> = scripted_demo(8).into_iter().map(|s| s.snapshot).collect();
        let b: Vec<_> = scripted_demo(8).into_iter().map(|s| s.snapshot).collect();

        assert_eq!(a, b);
    }

    #[test]
    fn test_clue_then_discard_balance_tokens() {
        for seed in 0..20 {
            let steps = scripted_demo(seed);
            let (clue, discard) = (&steps[5], &steps[6]);

            if steps[4].snapshot.status.is_over() {
                // Three misplays in the opening.
                assert_eq!(clue.result, Err(GameError::GameOver));
                assert_eq!(discard.result, Err(GameError::GameOver));
            } else {
                assert_eq!(clue.snapshot.clue_tokens, 7);
                assert!(discard.result.is_ok());
                assert_eq!(discard.snapshot.clue_tokens, 8);
            }
        }
    }
}
