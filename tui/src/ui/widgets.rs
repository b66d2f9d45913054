use estimator::Field;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::form::{FormState, Outcome};

use super::theme::Theme;

pub const TITLE: &str = "Housing Resale Price Estimator";
pub const SUBTITLE: &str = "Enter property details below to estimate its resale price.";
pub const RESULT_LABEL: &str = "Predicted House Price";
pub const DISCLAIMER: &str =
    "Note: This is an estimate based on historical patterns; actual market prices may differ.";

pub fn header() -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(TITLE, Theme::title())),
        Line::from(Span::styled(SUBTITLE, Theme::text())),
    ];

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .style(Theme::card())
        .wrap(Wrap { trim: true })
}

pub fn section_title(title: &str) -> Paragraph<'_> {
    Paragraph::new(Span::styled(title, Theme::title()))
}

/// A single bordered input, showing its value or placeholder.
pub fn field(form: &FormState, field: Field) -> Paragraph<'_> {
    let focused = form.focus() == field;

    let value = match form.input().text(field) {
        Some(text) => text.to_string(),
        None => form
            .input()
            .bedroom_count
            .map(|n| n.to_string())
            .unwrap_or_default(),
    };

    let mut spans = Vec::new();
    if field.is_selection() && focused {
        spans.push(Span::styled("◀ ", Theme::muted()));
    }
    if value.is_empty() {
        spans.push(Span::styled(field.placeholder(), Theme::muted()));
    } else {
        spans.push(Span::styled(value, Theme::text()));
    }
    if field.is_selection() {
        if focused {
            spans.push(Span::styled(" ▶", Theme::muted()));
        }
    } else if focused {
        spans.push(Span::styled("█", Theme::cursor()));
    }

    let border = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {} ", field.caption()))
                .title_style(border),
        )
        .style(Theme::card())
}

pub fn button() -> Paragraph<'static> {
    Paragraph::new(Span::styled("Predict Price", Theme::button()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border_focused()),
        )
        .style(Theme::button())
}

/// The result panel: validation messages, the price, or a failure.
pub fn outcome(outcome: &Outcome) -> Paragraph<'_> {
    let (title, lines) = match outcome {
        Outcome::Pending => (
            " Result ",
            vec![Line::from(Span::styled(
                "Fill in the details and press enter to predict.",
                Theme::muted(),
            ))],
        ),
        Outcome::Invalid(messages) => (
            " Errors ",
            messages
                .iter()
                .map(|m| {
                    Line::from(vec![
                        Span::styled(" ✖ ", Theme::error()),
                        Span::styled(m.as_str(), Theme::error()),
                    ])
                })
                .collect(),
        ),
        Outcome::Estimated(price) => (
            " Result ",
            vec![
                Line::from(Span::styled(RESULT_LABEL, Theme::title())),
                Line::from(Span::styled(price.to_string(), Theme::metric())),
                Line::from(""),
                Line::from(Span::styled(DISCLAIMER, Theme::muted())),
            ],
        ),
        Outcome::Failed(reason) => (
            " Errors ",
            vec![Line::from(vec![
                Span::styled(" ✖ ", Theme::error()),
                Span::styled(reason.as_str(), Theme::error()),
            ])],
        ),
    };

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(title)
                .title_style(Theme::title()),
        )
        .style(Theme::card())
        .wrap(Wrap { trim: true })
}

pub fn hints(hints: &[(&str, &str)]) -> Paragraph<'static> {
    let spans = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(key.to_string(), Theme::title()),
                Span::styled(format!("  {action}    "), Theme::muted()),
            ]
        })
        .collect::<Vec<_>>();

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}
