//! Rendering helpers shared by the view components

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Grades are always shown with two decimals.
pub fn format_grade(grade: f64) -> String {
    format!("{:.2}", grade)
}

/// Like [`format_grade`], with `-` when there is no value.
pub fn format_optional_grade(grade: Option<f64>) -> String {
    grade.map_or_else(|| "-".to_string(), format_grade)
}

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// A horizontally centered column of at most `width` cells.
pub fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .split(area)[1]
}

/// Placeholder shown while a view is in `Loading`.
pub fn loading_paragraph(tick: usize, what: &str) -> Paragraph<'static> {
    Paragraph::new(format!("{} Loading {}...", spinner_frame(tick), what))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::LightBlue))
}

/// Red banner for a failed operation.
pub fn error_paragraph(message: &str) -> Paragraph<'static> {
    Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::LightRed))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        )
}

/// Flattens a rendered buffer into text, one line per row.
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer
        .content()
        .chunks(buffer.area.width.max(1) as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
