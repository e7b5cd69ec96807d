//! Field rendering utilities for forms

use crate::state::{FormField, Gender, Interest};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a field: a bordered input whose bottom border carries the error
pub const FIELD_HEIGHT: u16 = 3;

fn border_style(is_active: bool, has_error: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else if has_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block(label: &str, is_active: bool, error: Option<&str>) -> Block<'static> {
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error.is_some()));
    match error {
        Some(message) => block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        ))),
        None => block,
    }
}

/// Draw a text-like field (text, email, number, date, password)
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
    mask_passwords: bool,
) {
    let display_value = field.display_value(mask_passwords);
    let content = if display_value.is_empty() && !is_active {
        Line::from(Span::styled(
            field.kind.placeholder(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let cursor = if is_active { "▌" } else { "" };
        Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = field_block(field.label, is_active, error);
    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Draw the gender selector
pub fn draw_select(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let selected = field.value.as_choice();

    let mut spans = Vec::new();
    if is_active {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
    }
    for (i, option) in Gender::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if selected == Some(*option) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(option.as_str(), style));
    }
    if is_active {
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
    }

    let block = field_block(field.label, is_active, error);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the interest checkboxes; `cursor` is highlighted while the field is focused
pub fn draw_checkboxes(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    cursor: Interest,
    error: Option<&str>,
) {
    let checked = field.value.as_tags();

    let mut spans = Vec::new();
    for (i, tag) in Interest::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let is_checked = checked.is_some_and(|tags| tags.contains(tag));
        let mark = if is_checked { "[x]" } else { "[ ]" };
        let style = if is_active && *tag == cursor {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::REVERSED)
        } else if is_checked {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("{mark} {}", tag.as_str()), style));
    }

    let block = field_block(field.label, is_active, error);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
