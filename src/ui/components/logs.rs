//! Activity log panel component
//!
//! Renders forwarded log records, newest first

use crate::logging::LogLevel;
use crate::ui::app::App;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Error => Color::LightRed,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Info => Color::Green,
        LogLevel::Debug | LogLevel::Trace => Color::DarkGray,
    }
}

/// Trims "YYYY-MM-DD HH:MM:SS" down to "HH:MM:SS".
fn compact_time(timestamp: &str) -> &str {
    timestamp.split(' ').nth(1).unwrap_or(timestamp)
}

pub fn render_logs_panel(f: &mut Frame, area: Rect, app: &App) {
    // Borders take two rows
    let log_count = (area.height.saturating_sub(2) as usize).max(1);

    let log_lines: Vec<Line> = app
        .activity_logs()
        .iter()
        .rev()
        .take(log_count)
        .map(|event| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", compact_time(&event.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<8}", event.source()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    event.msg.clone(),
                    Style::default().fg(level_color(event.log_level)),
                ),
            ])
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("No activity yet")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(log_paragraph.block(logs_block).wrap(Wrap { trim: true }), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_time() {
        assert_eq!(compact_time("2024-05-01 13:45:10"), "13:45:10");
        assert_eq!(compact_time("garbled"), "garbled");
    }
}
