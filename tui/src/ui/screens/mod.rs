pub mod form;

use crossterm::event::KeyCode;
use ratatui::Frame;

pub enum Action {
    None,
    Quit,
}

pub enum Screen {
    Form(form::FormScreen),
}

impl Screen {
    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Form(s) => form::draw(f, s),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match self {
            Screen::Form(s) => form::handle_key(s, key),
        }
    }
}
