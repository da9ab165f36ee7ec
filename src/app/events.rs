use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::core::App;
use crate::app::models::Tab;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    None,
    Submit,
    Quit,
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.kind != KeyEventKind::Press {
            return AppAction::None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => AppAction::Quit,
            KeyCode::Char('c') if ctrl => AppAction::Quit,
            KeyCode::Char('u') if ctrl => {
                self.clear_input();
                AppAction::None
            }
            KeyCode::Enter => {
                if self.can_submit() {
                    AppAction::Submit
                } else {
                    AppAction::None
                }
            }
            // tab navigation
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_tab();
                AppAction::None
            }
            KeyCode::Left => {
                self.select_tab(Tab::Tokens);
                AppAction::None
            }
            KeyCode::Right => {
                self.select_tab(Tab::Nfts);
                AppAction::None
            }
            // list navigation
            KeyCode::Up => {
                self.previous_item();
                AppAction::None
            }
            KeyCode::Down => {
                self.next_item();
                AppAction::None
            }
            KeyCode::Backspace => {
                self.input_backspace();
                AppAction::None
            }
            KeyCode::Char(c) if !ctrl => {
                self.input_char(c);
                AppAction::None
            }
            _ => AppAction::None,
        }
    }
}
