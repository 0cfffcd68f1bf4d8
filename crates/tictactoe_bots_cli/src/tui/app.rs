//! Application state and logic.

use super::input::{self, Action};
use crate::config::GameConfig;
use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};
use tictactoe_bots::{Bot, GameSession, GameStatus, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Main application state.
pub struct App {
    session: GameSession,
    bot: Bot,
    human: Player,
    cursor: Position,
    bot_delay: Duration,
    bot_due: Option<Instant>,
    rng: StdRng,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates the app and starts the first game.
    pub fn new(config: &GameConfig, now: Instant) -> Self {
        let seed = *config.seed();
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let session = GameSession::start(&mut rng);
        let mut app = Self {
            session,
            bot: Bot::seeded(*config.strategy(), seed.map(|s| s.wrapping_add(1))),
            human: *config.human_mark(),
            cursor: Position::Center,
            bot_delay: Duration::from_millis(*config.bot_delay_ms()),
            bot_due: None,
            rng,
            status_message: String::new(),
            should_quit: false,
        };
        app.announce_start(now);
        app
    }

    /// The game in progress.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Mark the human plays.
    pub fn human(&self) -> Player {
        self.human
    }

    /// Square highlighted for keyboard selection.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Strategy name for the title bar.
    pub fn strategy_name(&self) -> String {
        self.bot.strategy().to_string()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the board accepts input from the human right now.
    pub fn is_human_turn(&self) -> bool {
        !self.session.is_over() && self.session.to_move() == self.human
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        let Some(action) = input::action_for(key, self.cursor) else {
            return;
        };
        debug!(?action, "Handling key");

        match action {
            Action::Quit => self.should_quit = true,
            Action::Restart => self.restart(now),
            Action::MoveCursor(pos) if self.is_human_turn() => self.cursor = pos,
            Action::Select if self.is_human_turn() => self.select(self.cursor.to_index(), now),
            Action::SelectIndex(index) if self.is_human_turn() => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.select(index, now)
            }
            _ => {}
        }
    }

    /// Plays the human's mark at `index`.
    #[instrument(skip(self, now))]
    pub fn select(&mut self, index: usize, now: Instant) {
        match self.session.play(self.human, index) {
            Ok(GameStatus::InProgress) => {
                self.status_message = "Bot's turn...".to_string();
                self.bot_due = Some(now + self.bot_delay);
            }
            Ok(status) => self.finish(status),
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.status_message = e.to_string();
            }
        }
    }

    /// Applies the bot's move once its delay has passed.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        let Some(due) = self.bot_due else {
            return Ok(());
        };
        if now < due || self.session.is_over() {
            return Ok(());
        }
        self.bot_due = None;

        let mark = self.human.opponent();
        let index = self
            .bot
            .choose_move(self.session.board(), mark)
            .context("Bot could not move")?;
        let status = self
            .session
            .play(mark, index)
            .context("Bot played an illegal move")?;
        debug!(position = index, ?status, "Bot move applied");

        if status == GameStatus::InProgress {
            self.status_message = match Position::from_index(index) {
                Some(pos) => format!("Bot played {}. Your turn.", pos),
                None => "Your turn.".to_string(),
            };
        } else {
            self.finish(status);
        }
        Ok(())
    }

    /// Starts a new game with a freshly drawn starting player.
    pub fn restart(&mut self, now: Instant) {
        debug!("Restarting game");
        self.session.restart(&mut self.rng);
        self.cursor = Position::Center;
        self.bot_due = None;
        self.announce_start(now);
    }

    fn announce_start(&mut self, now: Instant) {
        if self.session.starter() == self.human {
            self.status_message = "You will go first.".to_string();
        } else {
            self.status_message = "The bot will go first.".to_string();
            self.bot_due = Some(now + self.bot_delay);
        }
    }

    fn finish(&mut self, status: GameStatus) {
        self.bot_due = None;
        let outcome = match status {
            GameStatus::Won(winner) => format!("'{}' wins!", winner),
            GameStatus::Draw => "It's a tie!".to_string(),
            GameStatus::InProgress => return,
        };
        info!(%outcome, "Game over");
        self.status_message = format!("{} Press 'r' to play again or 'q' to quit.", outcome);
    }
}
