//! Application loop - current state, lookahead, and the single active animation
//!
//! The loop keeps the current [`GameState`] plus one precomputed successor per
//! direction, so a no-op input is rejected with a table lookup. At most one
//! animation is active; accepting a new input cancels it, tears its visual
//! objects down and starts playing the new state from frame 0.

use tracing::{debug, info};

use crate::animation::{Presenter, StateAnimation};
use crate::core::{slide, GameState, SimpleRng};
use crate::types::Direction;

/// Result of feeding one direction to [`App::handle_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// No-op direction, or the game is already over.
    Ignored,
    /// The slide was applied and its animation started.
    Accepted,
    /// No legal move is left, either after this slide or from the start.
    /// Reported once per game.
    GameOver,
}

/// Handle to the scheduled animation: the sequence and the next frame to play.
#[derive(Debug, Clone)]
struct ActiveAnimation {
    sequence: StateAnimation,
    next_frame: u32,
}

/// The application loop state.
#[derive(Debug, Clone)]
pub struct App {
    rng: SimpleRng,
    game: GameState,
    lookahead: [Option<GameState>; 4],
    animation: Option<ActiveAnimation>,
    game_over: bool,
    /// `GameOver` has been returned for the current game.
    game_over_reported: bool,
}

impl App {
    /// Create a new game from `seed`.
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }

    pub fn with_rng(mut rng: SimpleRng) -> Self {
        let game = GameState::new(&mut rng);
        let mut app = Self {
            rng,
            game,
            lookahead: Default::default(),
            animation: None,
            game_over: false,
            game_over_reported: false,
        };
        app.refresh_lookahead();
        app
    }

    /// Start from an arbitrary state (tests, replays).
    ///
    /// A state with no legal move is already over; the first input reports it.
    pub fn from_state(game: GameState, rng: SimpleRng) -> Self {
        let mut app = Self {
            rng,
            game,
            lookahead: Default::default(),
            animation: None,
            game_over: false,
            game_over_reported: false,
        };
        app.refresh_lookahead();
        app.game_over = app.lookahead.iter().all(Option::is_none);
        app
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Precomputed result of sliding the current state toward `direction`.
    pub fn lookahead(&self, direction: Direction) -> Option<&GameState> {
        self.lookahead[direction.index()].as_ref()
    }

    pub fn can_slide(&self, direction: Direction) -> bool {
        self.lookahead(direction).is_some()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// (Re)start playback of the current state from frame 0.
    ///
    /// Any active animation is cancelled and its objects cleared before the
    /// presenter is asked to build the new ones.
    pub fn start<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        if let Some(cancelled) = self.animation.take() {
            debug!(frame = cancelled.next_frame, "cancelling animation in flight");
        }
        presenter.clear();
        presenter.begin(&self.game);
        self.animation = Some(ActiveAnimation {
            sequence: StateAnimation::new(&self.game),
            next_frame: 0,
        });
    }

    /// Apply `direction` if it changes the board.
    pub fn handle_input<P: Presenter + ?Sized>(
        &mut self,
        direction: Direction,
        presenter: &mut P,
    ) -> InputOutcome {
        if self.game_over {
            if self.game_over_reported {
                return InputOutcome::Ignored;
            }
            return self.report_game_over();
        }
        let Some(next) = self.lookahead[direction.index()].take() else {
            debug!(%direction, "no-op slide ignored");
            return InputOutcome::Ignored;
        };

        self.game = next;
        debug!(
            %direction,
            action = self.game.action_count(),
            events = self.game.events().len(),
            tiles = self.game.board().tile_count(),
            "slide accepted"
        );
        self.start(presenter);
        self.refresh_lookahead();

        if self.lookahead.iter().all(Option::is_none) {
            self.game_over = true;
            return self.report_game_over();
        }
        InputOutcome::Accepted
    }

    fn report_game_over(&mut self) -> InputOutcome {
        self.game_over_reported = true;
        info!(
            actions = self.game.action_count(),
            best = self.game.board().tiles().map(|(_, v)| v).max().unwrap_or(0),
            "game over"
        );
        InputOutcome::GameOver
    }

    /// Advance the active animation by one frame.
    ///
    /// Returns whether an animation is still active, i.e. whether the host
    /// should schedule another tick.
    pub fn tick<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> bool {
        let Some(active) = self.animation.as_mut() else {
            return false;
        };
        if active.sequence.frame(active.next_frame, presenter) {
            self.animation = None;
            return false;
        }
        active.next_frame += 1;
        true
    }

    /// Throw the current game away and start a new one from the same RNG stream.
    pub fn restart<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        self.game = GameState::new(&mut self.rng);
        self.game_over = false;
        self.game_over_reported = false;
        info!("new game");
        self.start(presenter);
        self.refresh_lookahead();
    }

    fn refresh_lookahead(&mut self) {
        for direction in Direction::ALL {
            self.lookahead[direction.index()] = slide(&self.game, direction, &mut self.rng);
        }
        debug!(
            left = self.can_slide(Direction::Left),
            up = self.can_slide(Direction::Up),
            right = self.can_slide(Direction::Right),
            down = self.can_slide(Direction::Down),
            "lookahead refreshed"
        );
    }
}
