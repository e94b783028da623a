//! The game state machine.
//!
//! `Game` owns the deck, both hands, the discard pile, the board and the
//! token counters. Each action is one transition attempt: it either succeeds
//! completely or returns an error having changed nothing.
//!
//! Turn order and the last round are not tracked here; see
//! [`TurnTracker`](super::TurnTracker) and [`Match`](super::Match).

use im::Vector;
use log::{debug, info};

use crate::cards::Card;
use crate::core::config::{HAND_SIZE, MAX_CLUE_TOKENS, MAX_NUMBER, MAX_STRIKES};
use crate::core::{Action, GameError, GameRng, PlayerId, PlayerMap};
use crate::zones::{Board, Deck, Hand};

use super::outcome::{
    ActionOutcome, ClueOutcome, DiscardOutcome, EndReason, GameStatus, PlayOutcome,
};
use super::snapshot::Snapshot;

/// A two-player game in progress (or finished).
#[derive(Clone, Debug)]
pub struct Game {
    deck: Deck,
    hands: PlayerMap<Hand>,
    discard: Vector<Card>,
    board: Board,
    clue_tokens: u8,
    strikes: u8,
    status: GameStatus,
    seed: Option<u64>,
}

/// Builder for creating a `Game`.
///
/// ```
/// use hanabi_engine::game::GameBuilder;
///
/// let game = GameBuilder::new().seed(1).build();
/// assert_eq!(game.deck_size(), 40);
/// assert_eq!(game.clue_tokens(), 8);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    seed: Option<u64>,
    deck: Option<Deck>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed. Without one, a random seed is chosen.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Deal from this deck as-is instead of shuffling a fresh one.
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Shuffle (unless a deck was supplied) and deal both starting hands.
    ///
    /// A supplied deck is never shuffled, so the game has no seed and any
    /// seed given alongside it is ignored.
    pub fn build(self) -> Game {
        let (mut deck, seed) = match self.deck {
            Some(deck) => (deck, None),
            None => {
                let mut rng = match self.seed {
                    Some(seed) => GameRng::new(seed),
                    None => GameRng::from_entropy(),
                };
                let mut deck = Deck::new();
                deck.shuffle(&mut rng);
                (deck, Some(rng.seed()))
            }
        };

        let hands: PlayerMap<Hand> =
            PlayerMap::new(|_| deck.deal(HAND_SIZE).into_iter().collect());

        debug!("new game with seed {:?}, {} cards left to draw", seed, deck.size());

        Game {
            deck,
            hands,
            discard: Vector::new(),
            board: Board::new(),
            clue_tokens: MAX_CLUE_TOKENS,
            strikes: 0,
            status: GameStatus::InProgress,
            seed,
        }
    }
}

impl Game {
    /// Start a game from a randomly seeded shuffle.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder::new().build()
    }

    /// Start a reproducible game.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        GameBuilder::new().seed(seed).build()
    }

    // === Actions ===

    /// Play the card at `card_index` from `player`'s hand.
    ///
    /// The card lands on the board if it is exactly one higher than that
    /// color's current value; a 5 also returns a clue token (never above 8).
    /// Otherwise it goes to the discard pile and costs a strike, and the
    /// third strike ends the game. Either way the player draws a replacement
    /// while the deck lasts.
    pub fn action_play(
        &mut self,
        player: PlayerId,
        card_index: usize,
    ) -> Result<PlayOutcome, GameError> {
        self.ensure_in_progress()?;
        let card = self.hands[player].remove(card_index)?;

        let successful = self.is_playable(card);
        let mut bonus_token = false;
        let mut strikeout = false;

        if successful {
            self.board.play(card.color);
            if card.number.get() == MAX_NUMBER && self.clue_tokens < MAX_CLUE_TOKENS {
                self.clue_tokens += 1;
                bonus_token = true;
            }
            debug!("{} played {}", player, card);
        } else {
            self.discard.push_back(card);
            self.strikes += 1;
            debug!("{} misplayed {} (strike {})", player, card, self.strikes);
            if self.strikes >= MAX_STRIKES {
                strikeout = true;
                self.status = GameStatus::Ended(EndReason::Strikeout);
                info!("strikeout with {} points", self.score());
            }
        }

        let drew_replacement = self.draw_replacement(player)?;

        Ok(PlayOutcome {
            card,
            successful,
            bonus_token,
            strikeout,
            final_score: strikeout.then(|| self.score()),
            drew_replacement,
        })
    }

    /// Discard the card at `card_index` to regain a clue token.
    ///
    /// Not allowed while all eight tokens are held.
    pub fn action_discard(
        &mut self,
        player: PlayerId,
        card_index: usize,
    ) -> Result<DiscardOutcome, GameError> {
        self.ensure_in_progress()?;
        if self.clue_tokens >= MAX_CLUE_TOKENS {
            return Err(GameError::AllTokensAlreadyHeld);
        }
        let card = self.hands[player].remove(card_index)?;

        self.discard.push_back(card);
        self.clue_tokens += 1;
        debug!("{} discarded {} ({} clues)", player, card, self.clue_tokens);

        let drew_replacement = self.draw_replacement(player)?;

        Ok(DiscardOutcome {
            card,
            clue_tokens: self.clue_tokens,
            drew_replacement,
        })
    }

    /// Spend one clue token.
    ///
    /// Only the token is tracked; what the clue tells the other player is up
    /// to the players.
    pub fn action_clue(&mut self) -> Result<ClueOutcome, GameError> {
        self.ensure_in_progress()?;
        if self.clue_tokens == 0 {
            return Err(GameError::NoClueTokensAvailable);
        }
        self.clue_tokens -= 1;
        debug!("clue given ({} left)", self.clue_tokens);

        Ok(ClueOutcome {
            clue_tokens: self.clue_tokens,
        })
    }

    /// Apply any action for `player`.
    pub fn apply(&mut self, player: PlayerId, action: &Action) -> Result<ActionOutcome, GameError> {
        match *action {
            Action::Play { card_index } => {
                self.action_play(player, card_index).map(ActionOutcome::Play)
            }
            Action::Discard { card_index } => {
                self.action_discard(player, card_index).map(ActionOutcome::Discard)
            }
            Action::Clue => self.action_clue().map(ActionOutcome::Clue),
        }
    }

    /// Every action `player` could take right now without being rejected.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        if self.is_over() {
            return vec![];
        }

        let hand_size = self.hands[player].len();
        let mut actions: Vec<Action> = (0..hand_size)
            .map(|card_index| Action::Play { card_index })
            .collect();

        if self.clue_tokens < MAX_CLUE_TOKENS {
            actions.extend((0..hand_size).map(|card_index| Action::Discard { card_index }));
        }
        if self.clue_tokens > 0 {
            actions.push(Action::Clue);
        }

        actions
    }

    /// Whether `card` is the next number for its color.
    #[must_use]
    pub fn is_playable(&self, card: Card) -> bool {
        self.board.current_value(card.color) + 1 == card.number.get()
    }

    // === Queries ===

    /// Whether the draw pile is exhausted.
    #[must_use]
    pub fn deck_is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Cards left to draw.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.size()
    }

    /// Current board score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.board.score()
    }

    #[must_use]
    pub fn clue_tokens(&self) -> u8 {
        self.clue_tokens
    }

    #[must_use]
    pub fn strikes(&self) -> u8 {
        self.strikes
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// Discarded and misplayed cards, oldest first.
    #[must_use]
    pub fn discard(&self) -> &Vector<Card> {
        &self.discard
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Seed of the shuffle, for replaying this game.
    ///
    /// `None` when the game was dealt from a supplied deck.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Copy of the displayable state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            clue_tokens: self.clue_tokens,
            strikes: self.strikes,
            hands: self.hands.clone(),
            discard: self.discard.clone(),
            board: self.board,
            deck_size: self.deck.size(),
            status: self.status,
        }
    }

    /// End the game from outside, e.g. when the last round is over.
    ///
    /// A game that already ended keeps its original reason.
    pub(crate) fn finish(&mut self, reason: EndReason) {
        if !self.is_over() {
            self.status = GameStatus::Ended(reason);
        }
    }

    // === Internals ===

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.is_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    /// Refill `player`'s hand by one card if the deck allows it.
    fn draw_replacement(&mut self, player: PlayerId) -> Result<bool, GameError> {
        if self.deck.is_empty() {
            debug!("{} has no card to draw", player);
            return Ok(false);
        }
        let card = self.deck.draw()?;
        self.hands[player].push(card);
        Ok(true)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
