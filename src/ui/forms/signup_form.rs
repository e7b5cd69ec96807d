//! Signup form rendering

use super::field_renderer::{draw_checkboxes, draw_field, draw_select, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FieldName, InputKind};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Fields per grid row
const COLUMNS: usize = 3;

/// Draw the signup form: a grid of fields and the submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Signup ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = FieldName::ALL.len().div_ceil(COLUMNS);
    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); rows];
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Min(0)); // remaining space

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (row, names) in FieldName::ALL.chunks(COLUMNS).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(row_areas[row]);
        for (cell, name) in cells.iter().zip(names) {
            draw_cell(frame, *cell, app, *name);
        }
    }

    let submit_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(0)])
        .split(row_areas[rows]);
    render_action_button(
        frame,
        submit_row[0],
        "Submit form",
        app.state.form.is_submit_active(),
        Color::Green,
    );
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, name: FieldName) {
    let form = &app.state.form;
    let field = form.field(name);
    let is_active = form.active_name() == Some(name);
    let error = form.error_for(name);

    match field.kind {
        InputKind::Select => draw_select(frame, area, field, is_active, error),
        InputKind::Checkboxes => draw_checkboxes(
            frame,
            area,
            field,
            is_active,
            form.cursor_interest(),
            error,
        ),
        _ => draw_field(frame, area, field, is_active, error, app.state.mask_passwords),
    }
}
