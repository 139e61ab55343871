use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{GameStatus, Player, Session, CELLS, SIDE};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    session: Session,
    cursor: usize,
    should_quit: bool,
    message: Option<String>,
    config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            session: Session::new(),
            cursor: 4, // Start in the center
            should_quit: false,
            message: None,
            config,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.config.ui.tick_rate_ms))? {
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
                if self.cursor % SIDE > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor % SIDE < SIDE - 1 {
                    self.cursor += 1;
                }
            }
            KeyCode::Up => {
                if self.cursor >= SIDE {
                    self.cursor -= SIDE;
                }
            }
            KeyCode::Down => {
                if self.cursor + SIDE < CELLS {
                    self.cursor += SIDE;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_mark(self.cursor);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let cell = c as usize - '1' as usize;
                self.cursor = cell;
                self.place_mark(cell);
            }
            KeyCode::Char('[') => {
                self.jump_back();
            }
            KeyCode::Char(']') => {
                self.jump_forward();
            }
            KeyCode::Char('r') => {
                self.session = Session::new();
                self.cursor = 4;
                self.message = Some("New game started!".to_string());
                tracing::debug!("session reset");
            }
            _ => {}
        }
    }

    /// Place the current player's mark at the given cell
    fn place_mark(&mut self, cell: usize) {
        match self.session.play(cell) {
            Ok(()) => match self.session.status() {
                GameStatus::Won(player) => {
                    self.message = Some(format!("{} wins!", self.player_name(player)));
                }
                GameStatus::Drawn => {
                    self.message = Some("It's a draw!".to_string());
                }
                GameStatus::InProgress(_) => {}
            },
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(MoveError::CellOccupied(_)) => {
                self.message = Some("That cell is taken!".to_string());
            }
            Err(MoveError::OutOfRange(_)) => {
                self.message = Some("Invalid cell!".to_string());
            }
        }
    }

    /// Step the view one move back in history
    fn jump_back(&mut self) {
        let viewed = self.session.history().move_number();
        if viewed > 0 {
            // In range by construction, so the jump cannot fail
            let _ = self.session.jump_to(viewed - 1);
        }
    }

    /// Step the view one move forward in history
    fn jump_forward(&mut self) {
        let history = self.session.history();
        if !history.is_at_latest() {
            let next = history.move_number() + 1;
            let _ = self.session.jump_to(next);
        }
    }

    fn player_name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.config.players.x_name,
            Player::O => &self.config.players.o_name,
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.cursor, &self.message, &self.config);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
