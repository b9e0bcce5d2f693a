use std::time::{Duration, Instant};

use rand::rngs::SmallRng;

use crate::config::UiConfig;
use crate::game::{seeded_rng, GameSession, Outcome, Session};
use crate::ui::screen::Screen;

/// Top-level UI state: the running round plus everything drawn for it.
pub struct App {
    should_quit: bool,
    game: GameSession<SmallRng>,
    screen: Screen,
    settings: UiConfig,
    seed: Option<u64>,
    round: u64,
}

impl App {
    /// Start the first round. With a seed every round is reproducible.
    pub fn new(settings: UiConfig, seed: Option<u64>) -> Self {
        let (game, screen) = Self::build_round(&settings, seed, 0);
        Self {
            should_quit: false,
            game,
            screen,
            settings,
            seed,
            round: 0,
        }
    }

    /// Start from a known session instead of a random draw.
    pub fn with_session(settings: UiConfig, session: Session) -> Self {
        let game = GameSession::from_parts(session, seeded_rng(None));
        let screen = Self::build_screen(&settings, None, 0);
        Self {
            should_quit: false,
            game,
            screen,
            settings,
            seed: None,
            round: 0,
        }
    }

    fn build_round(
        settings: &UiConfig,
        seed: Option<u64>,
        round: u64,
    ) -> (GameSession<SmallRng>, Screen) {
        let game_seed = seed.map(|s| s.wrapping_add(round.wrapping_mul(2)));
        let game = GameSession::initialize(seeded_rng(game_seed));
        (game, Self::build_screen(settings, seed, round))
    }

    fn build_screen(settings: &UiConfig, seed: Option<u64>, round: u64) -> Screen {
        let effect_seed = seed.map(|s| s.wrapping_add(round.wrapping_mul(2)).wrapping_add(1));
        Screen::new(
            Duration::from_secs(settings.toast_seconds),
            settings.confetti,
            seeded_rng(effect_seed),
        )
    }

    pub fn game(&self) -> &GameSession<SmallRng> {
        &self.game
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn type_char(&mut self, ch: char) {
        self.screen.type_char(ch);
    }

    pub fn backspace(&mut self) {
        self.screen.backspace();
    }

    /// Submit whatever is in the form. Does nothing while the field is locked.
    pub fn submit(&mut self) -> Option<Outcome> {
        if !self.screen.form().accepts_input() {
            return None;
        }
        let raw = self.screen.form().input().to_string();
        Some(self.game.submit_guess(&raw, &mut self.screen))
    }

    /// Activate "Play again?".
    ///
    /// Throws away the session and the screen and builds new ones, the
    /// equivalent of reloading the page. Returns false when the control is
    /// not on screen.
    pub fn reload(&mut self) -> bool {
        if !self.screen.restart_offered() {
            return false;
        }
        self.round += 1;
        let (game, screen) = Self::build_round(&self.settings, self.seed, self.round);
        self.game = game;
        self.screen = screen;
        tracing::info!(round = self.round, "Reloaded");
        true
    }

    /// Advances timers and animations. Returns true when the frame may have
    /// changed; an idle screen needs no redraw.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let animating = self.screen.is_animating();
        self.screen.on_tick(now);
        animating
    }
}
