//! Line-based play over any reader and writer.
//!
//! Each line is one command for whoever's turn it is: `play N`,
//! `discard N`, `clue`, `state` or `quit`. Cards are counted from 1.
//! Bad input and rejected actions are reported and the same player is
//! asked again.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::core::{Action, PlayerId};
use crate::game::{ActionOutcome, GameStatus, Match};

/// Run `session` from commands on `input` until the game ends, the input
/// runs out, or `quit` is read.
pub fn run_console<R: BufRead, W: Write>(
    session: &mut Match,
    input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "{}", session.game().snapshot())?;
    prompt(session, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();

        match command.to_ascii_lowercase().as_str() {
            "" => {}
            "quit" => break,
            "state" => writeln!(out, "{}", session.game().snapshot())?,
            _ => match command.parse::<Action>() {
                Err(e) => writeln!(out, "{}", e)?,
                Ok(action) => {
                    let player = session.current_player();
                    match session.take(action) {
                        Ok(outcome) => {
                            writeln!(out, "{}", describe(player, &outcome))?;
                            writeln!(out, "{}", session.game().snapshot())?;
                        }
                        Err(e) => {
                            debug!("{} tried to {}: {}", player, action, e);
                            writeln!(out, "{} cannot {}: {}", player, action, e)?;
                        }
                    }
                }
            },
        }

        if let GameStatus::Ended(reason) = session.status() {
            writeln!(out, "Game over ({}): {} points", reason, session.game().score())?;
            return Ok(());
        }
        prompt(session, &mut out)?;
    }

    Ok(())
}

fn prompt<W: Write>(session: &Match, out: &mut W) -> io::Result<()> {
    write!(out, "{}> ", session.current_player())?;
    out.flush()
}

fn describe(player: PlayerId, outcome: &ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Play(p) if p.successful => {
            let bonus = if p.bonus_token { ", regaining a clue" } else { "" };
            format!("{} played {}{}", player, p.card, bonus)
        }
        ActionOutcome::Play(p) => format!("{} misplayed {}", player, p.card),
        ActionOutcome::Discard(d) => format!(
            "{} discarded {} ({} clues)",
            player, d.card, d.clue_tokens
        ),
        ActionOutcome::Clue(c) => format!("{} gave a clue ({} left)", player, c.clue_tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Color};
    use crate::game::{EndReason, GameBuilder};
    use crate::zones::Deck;

    fn card(color: Color, number: u8) -> Card {
        Card::of(color, number).unwrap()
    }

    /// Player 1 holds R1..R5, player 2 holds five W4s, one B1 left to draw.
    fn session() -> Match {
        let mut order: Vec<Card> = [1, 2, 3, 4, 5].map(|n| card(Color::Red, n)).to_vec();
        order.extend([card(Color::White, 4); 5]);
        order.push(card(Color::Blue, 1));
        order.reverse();
        Match::new(GameBuilder::new().deck(Deck::from_cards(order)).build())
    }

    fn run(session: &mut Match, script: &str) -> String {
        let mut out = Vec::new();
        run_console(session, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_commands_alternate_players() {
        let mut m = session();
        let text = run(&mut m, "play 1\nclue\n");

        assert!(text.contains("Player 1 played R1"));
        assert!(text.contains("Player 2 gave a clue (7 left)"));
        assert_eq!(m.history().len(), 2);
        assert_eq!(m.current_player(), PlayerId::ONE);
    }

    #[test]
    fn test_bad_input_keeps_the_turn() {
        let mut m = session();
        let text = run(&mut m, "jump\ndiscard 1\n\nplay 9\n");

        assert!(text.contains("unknown command 'jump'"));
        assert!(text.contains("Player 1 cannot discard card 1"));
        assert!(text.contains("'9' is not a card number"));
        assert!(m.history().is_empty());
        assert_eq!(m.current_player(), PlayerId::ONE);
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut m = session();
        run(&mut m, "clue\nquit\nclue\n");

        assert_eq!(m.history().len(), 1);
    }

    #[test]
    fn test_runs_until_last_round_ends() {
        let mut m = session();
        // P1 draws the last card, P2 misplays without a draw, P1 plays R2
        // as the final turn, and the trailing clue is never read.
        let text = run(&mut m, "play 1\nplay 1\nplay 1\nclue\n");

        assert_eq!(m.status(), GameStatus::Ended(EndReason::LastRoundComplete));
        assert!(text.ends_with("Game over (last round complete): 2 points\n"));
        assert_eq!(m.history().len(), 3);
    }
}
