//! Add-student form component

use crate::ui::utils::{centered_column, error_paragraph};
use crate::ui::views::{CreateForm, Field};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use strum::IntoEnumIterator;

const FORM_WIDTH: u16 = 48;

fn render_field(f: &mut Frame, area: Rect, form: &CreateForm, field: Field) {
    let focused = form.focus() == field;
    let value = form.value(field);

    let content = if value.is_empty() && !focused {
        Line::from(Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        ))
    } else if focused {
        Line::from(vec![
            Span::raw(value.to_string()),
            Span::styled("▏", Style::default().fg(Color::LightBlue)),
        ])
    } else {
        Line::from(value.to_string())
    };

    let border_color = if focused {
        Color::LightBlue
    } else {
        Color::DarkGray
    };
    let input = Paragraph::new(content).block(
        Block::default()
            .title(field.to_string())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(input, area);
}

pub fn render_student_form(f: &mut Frame, area: Rect, form: &CreateForm) {
    let block = Block::default()
        .title("ADD NEW STUDENT")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    let inner = centered_column(block.inner(area), FORM_WIDTH);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if form.error().is_some() { 3 } else { 0 }),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(inner);

    if let Some(error) = form.error() {
        f.render_widget(error_paragraph(error), chunks[0]);
    }

    for (i, field) in Field::iter().enumerate() {
        render_field(f, chunks[i + 1], form, field);
    }

    let button_style = if form.is_submitting() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightBlue)
            .add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(format!("[ {} ]", form.submit_label()))
        .alignment(Alignment::Center)
        .style(button_style);
    f.render_widget(button, chunks[5]);
}
