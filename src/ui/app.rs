use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::Backend, Terminal};

use crate::ai::Minimax;
use crate::config::UiConfig;
use crate::error::MoveError;
use crate::game::{GameOutcome, GameSession, Player, COLS};

/// A bot search running on a worker thread.
struct PendingMove {
    receiver: Receiver<Option<usize>>,
    started: Instant,
}

pub struct App {
    session: GameSession,
    players: (Player, Player),
    settings: UiConfig,
    rng: StdRng,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    pending: Option<PendingMove>,
}

impl App {
    pub fn new(player_one: Player, player_two: Player, settings: UiConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        App {
            session: GameSession::new(player_one.clone(), player_two.clone()),
            players: (player_one, player_two),
            settings,
            rng,
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
            pending: None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.poll_bot();
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.settings.poll_interval_ms))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.human_move();
            }
            KeyCode::Char('r') => {
                self.session = GameSession::new(self.players.0.clone(), self.players.1.clone());
                self.pending = None;
                self.selected_column = 3;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn human_move(&mut self) {
        if self.session.outcome().is_some() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.session.current().is_bot() {
            self.message = Some(format!("Wait for {} to move.", self.session.current().name()));
            return;
        }
        self.apply_move(self.selected_column);
    }

    /// Start a search when a bot is to move, and play its column once the
    /// worker has answered and the display delay has passed.
    fn poll_bot(&mut self) {
        if self.session.outcome().is_some() || !self.session.current().is_bot() {
            return;
        }

        let Some(pending) = &self.pending else {
            self.spawn_search();
            return;
        };

        if pending.started.elapsed() < Duration::from_millis(self.settings.bot_delay_ms) {
            return;
        }

        match pending.receiver.try_recv() {
            Ok(choice) => {
                self.pending = None;
                let board = self.session.board();
                // A childless search falls back to a random column, which may be full
                let col = choice
                    .filter(|&col| board.is_column_playable(col))
                    .or_else(|| board.legal_columns().first().copied());
                if let Some(col) = col {
                    self.selected_column = col;
                    self.apply_move(col);
                }
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                warn!("search worker exited without a move");
                self.pending = None;
                self.message = Some(format!("{} failed to pick a move.", self.session.current().name()));
            }
        }
    }

    fn spawn_search(&mut self) {
        let snapshot = self.session.clone();
        let seed: u64 = self.rng.random();
        let (tx, rx) = mpsc::channel();

        debug!("searching for {} (seed {seed})", snapshot.current().name());
        thread::spawn(move || {
            let mut search = Minimax::with_seed(seed);
            let _ = tx.send(search.minimax_strategy(&snapshot));
        });

        self.pending = Some(PendingMove {
            receiver: rx,
            started: Instant::now(),
        });
    }

    fn apply_move(&mut self, col: usize) {
        match self.session.submit_move(col) {
            Ok(()) => {
                if let Some(outcome) = self.session.outcome() {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(piece) => {
                            format!("{} wins!", self.session.player(piece).name())
                        }
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                }
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn(_)) => {
                self.message = Some("Invalid column!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.session,
            self.selected_column,
            &self.message,
            self.pending.is_some(),
        );
    }
}
