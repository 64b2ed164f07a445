//! Terminal panel state: the shared request panel plus form focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pkg_panel::RequestPanel;

/// Form element that receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    SecretName,
    SecretType,
    Justification,
    Submit,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::SecretName,
        Focus::SecretType,
        Focus::Justification,
        Focus::Submit,
    ];

    fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Network work requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Reload,
    Submit,
}

pub struct App {
    pub panel: RequestPanel,
    pub focus: Focus,
    pub last_refresh: Option<chrono::DateTime<chrono::Local>>,
    quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            panel: RequestPanel::new(),
            focus: Focus::default(),
            last_refresh: None,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('r') if ctrl => return Some(Action::Reload),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => match self.focus {
                Focus::Submit => return Some(Action::Submit),
                _ => self.focus = self.focus.next(),
            },
            KeyCode::Left if self.focus == Focus::SecretType => {
                let ty = self.panel.draft().secret_type.prev();
                self.panel.set_secret_type(ty);
            }
            KeyCode::Right if self.focus == Focus::SecretType => {
                let ty = self.panel.draft().secret_type.next();
                self.panel.set_secret_type(ty);
            }
            KeyCode::Char(c) if !ctrl => self.edit_text(|s| s.push(c)),
            KeyCode::Backspace => self.edit_text(|s| {
                s.pop();
            }),
            _ => {}
        }
        None
    }

    fn edit_text(&mut self, edit: impl FnOnce(&mut String)) {
        match self.focus {
            Focus::SecretName => {
                let mut value = self.panel.draft().secret_name.clone();
                edit(&mut value);
                self.panel.set_secret_name(value);
            }
            Focus::Justification => {
                let mut value = self.panel.draft().justification.clone();
                edit(&mut value);
                self.panel.set_justification(value);
            }
            Focus::SecretType | Focus::Submit => {}
        }
    }
}
