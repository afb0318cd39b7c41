//! Drives an [`App`] with synthetic key presses and renders it off-screen.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use donate_away::{App, Config};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

pub struct Driver {
    pub app: App,
}

impl Driver {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            app: App::new(config).expect("app starts"),
        }
    }

    pub fn press(&mut self, code: KeyCode) -> &mut Self {
        self.press_with(code, KeyModifiers::NONE)
    }

    pub fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) -> &mut Self {
        self.app
            .handle_event(Event::Key(KeyEvent::new(code, modifiers)))
            .expect("event handled");
        self
    }

    pub fn type_text(&mut self, text: &str) -> &mut Self {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
        self
    }

    pub fn tab(&mut self, times: usize) -> &mut Self {
        for _ in 0..times {
            self.press(KeyCode::Tab);
        }
        self
    }

    pub fn back_tab(&mut self, times: usize) -> &mut Self {
        for _ in 0..times {
            self.press(KeyCode::BackTab);
        }
        self
    }

    /// Switches the login role toggle to NGO and returns focus to the email
    /// field. Focus order: email, password, sign in, forgot, google, role.
    pub fn choose_ngo_role(&mut self) -> &mut Self {
        self.tab(5).press(KeyCode::Enter).back_tab(5)
    }

    /// Types credentials on the login screen, starting from the email field,
    /// and submits from the password field.
    pub fn sign_in(&mut self, email: &str, password: &str) -> &mut Self {
        self.type_text(email)
            .press(KeyCode::Enter)
            .type_text(password)
            .press(KeyCode::Enter)
    }

    /// Draws one frame and returns the buffer as text, one line per row.
    pub fn render(&mut self, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        terminal
            .draw(|frame| self.app.draw(frame))
            .expect("frame drawn");
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
