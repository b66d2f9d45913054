use crossterm::event::KeyCode;
use estimator::{Estimator, Field};
use ratatui::{widgets::Block, Frame};

use crate::state::form::FormState;
use crate::ui::{layout, theme::Theme, widgets};

use super::Action;

const LEFT_FIELDS: [Field; 3] = [Field::BedroomCount, Field::NetArea, Field::Floor];
const RIGHT_FIELDS: [Field; 3] = [Field::CenterDistance, Field::MetroDistance, Field::Age];

const HINTS: &[(&str, &str)] = &[
    ("tab / ↑↓", "move"),
    ("←→", "bedrooms"),
    ("enter", "predict"),
    ("esc", "quit"),
];

/// The property form together with the estimator it submits to.
pub struct FormScreen {
    pub state: FormState,
    estimator: Estimator,
}

impl FormScreen {
    pub fn new(estimator: Estimator) -> Self {
        Self {
            state: FormState::new(),
            estimator,
        }
    }
}

pub fn handle_key(screen: &mut FormScreen, key: KeyCode) -> Action {
    let state = &mut screen.state;

    match key {
        KeyCode::Esc => return Action::Quit,
        KeyCode::Tab | KeyCode::Down => state.focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.focus_prev(),
        KeyCode::Right => state.select_next(),
        KeyCode::Left => state.select_prev(),
        KeyCode::Backspace => state.backspace(),
        KeyCode::Enter => {
            state.submit(&screen.estimator);
        }
        KeyCode::Char(c) => state.push(c),
        _ => {}
    }

    Action::None
}

pub fn draw(f: &mut Frame, screen: &FormScreen) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = layout::centered_rect(90, 96, area);
    let (header, body, button, outcome, hints) = layout::vertical(outer);
    let (left, right) = layout::columns(body);

    f.render_widget(widgets::header(), header);

    for (column, title, fields) in [
        (left, "Size & Layout", LEFT_FIELDS),
        (right, "Location & Building", RIGHT_FIELDS),
    ] {
        let (title_area, inputs) = layout::column_fields(column);
        f.render_widget(widgets::section_title(title), title_area);
        for (field, input_area) in fields.into_iter().zip(inputs) {
            f.render_widget(widgets::field(&screen.state, field), input_area);
        }
    }

    f.render_widget(widgets::button(), button);
    f.render_widget(widgets::outcome(screen.state.outcome()), outcome);
    f.render_widget(widgets::hints(HINTS), hints);
}
