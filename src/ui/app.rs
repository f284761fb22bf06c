use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::ai::{Agent, MinimaxAgent};
use crate::config::AppConfig;
use crate::game::{GameOutcome, GameState, MoveError, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    SinglePlayer,
    TwoPlayer,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::SinglePlayer => "Single Player",
            GameMode::TwoPlayer => "Two Player",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    HowToPlay,
    Game,
}

pub const MENU_ITEMS: [&str; 4] = ["Single Player", "Two Player", "How to Play", "Quit"];

pub struct App {
    config: AppConfig,
    screen: Screen,
    menu_cursor: usize,
    mode: GameMode,
    game_state: GameState,
    selected_column: usize,
    /// Which side the human controls in single-player mode. Swapped on
    /// every rematch so the computer opens every other game.
    human_player: Player,
    ai: Box<dyn Agent>,
    /// When a computer move is scheduled to be played. While set, human
    /// drop input is ignored.
    ai_move_due: Option<Instant>,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let ai = Box::new(MinimaxAgent::with_config(config.search));
        App {
            config,
            screen: Screen::Menu,
            menu_cursor: 0,
            mode: GameMode::SinglePlayer,
            game_state: GameState::initial(),
            selected_column: 3, // Start in middle
            human_player: Player::Red,
            ai,
            ai_move_due: None,
            message: None,
            should_quit: false,
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
            self.play_pending_ai_move();
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match self.screen {
                    Screen::Menu => self.handle_menu_key(key),
                    Screen::HowToPlay => self.handle_how_to_play_key(key),
                    Screen::Game => self.handle_game_key(key),
                }
            }
        }
        Ok(())
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.menu_cursor = self.menu_cursor.checked_sub(1).unwrap_or(MENU_ITEMS.len() - 1);
            }
            KeyCode::Down => {
                self.menu_cursor = (self.menu_cursor + 1) % MENU_ITEMS.len();
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.menu_cursor {
                0 => self.start_game(GameMode::SinglePlayer),
                1 => self.start_game(GameMode::TwoPlayer),
                2 => self.screen = Screen::HowToPlay,
                _ => self.should_quit = true,
            },
            _ => {}
        }
    }

    fn handle_how_to_play_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('m') => {
                self.screen = Screen::Menu;
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Esc | KeyCode::Char('m') => {
                self.ai_move_due = None;
                self.screen = Screen::Menu;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_disc();
            }
            KeyCode::Char('r') => {
                self.reset_game();
            }
            _ => {}
        }
    }

    /// Start a fresh game from the menu. The human always opens the first
    /// single-player game as Red.
    fn start_game(&mut self, mode: GameMode) {
        self.mode = mode;
        self.human_player = Player::Red;
        self.game_state = GameState::initial();
        self.selected_column = 3;
        self.message = None;
        self.ai_move_due = None;
        self.screen = Screen::Game;
    }

    /// Rematch. In single-player mode the sides swap, so whoever went
    /// second last time opens the next game.
    fn reset_game(&mut self) {
        if self.mode == GameMode::SinglePlayer {
            self.human_player = self.human_player.other();
        }
        self.game_state = GameState::initial();
        self.selected_column = 3;
        self.message = Some("New game started!".to_string());
        self.ai_move_due = None;
        self.schedule_ai_move();
    }

    fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::SinglePlayer
            && !self.game_state.is_terminal()
            && self.game_state.current_player() != self.human_player
    }

    pub fn ai_thinking(&self) -> bool {
        self.ai_move_due.is_some()
    }

    /// Arm the think-delay timer if it is now the computer's turn.
    fn schedule_ai_move(&mut self) {
        if self.is_ai_turn() && self.ai_move_due.is_none() {
            self.ai_move_due =
                Some(Instant::now() + Duration::from_millis(self.config.ui.ai_delay_ms));
        }
    }

    /// Play the scheduled computer move once its delay has elapsed.
    fn play_pending_ai_move(&mut self) {
        let Some(due) = self.ai_move_due else {
            return;
        };
        if Instant::now() < due {
            return;
        }
        self.ai_move_due = None;
        if !self.is_ai_turn() {
            return;
        }
        let column = self.ai.select_action(&self.game_state);
        self.apply_move(column);
    }

    /// Drop a human disc in the selected column
    fn drop_disc(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' for a rematch.".to_string());
            return;
        }
        // No human moves while the computer's move is pending
        if self.ai_move_due.is_some() || self.is_ai_turn() {
            return;
        }
        self.apply_move(self.selected_column);
    }

    fn apply_move(&mut self, column: usize) {
        match self.game_state.apply_move_mut(column) {
            Ok(()) => {
                if let Some(outcome) = self.game_state.outcome() {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => {
                            format!("{} wins!", player.name())
                        }
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                } else {
                    self.schedule_ai_move();
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Menu => super::menu_view::render_menu(frame, self.menu_cursor),
            Screen::HowToPlay => super::menu_view::render_how_to_play(frame),
            Screen::Game => super::game_view::render(
                frame,
                &self.game_state,
                self.selected_column,
                &self.message,
                self.mode.label(),
                self.ai_thinking(),
            ),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
