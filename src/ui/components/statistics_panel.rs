//! Statistics component
//!
//! Four cards: total as an integer, grades with two decimals.

use crate::api::models::StatisticsSummary;
use crate::ui::utils::{error_paragraph, format_grade, format_optional_grade, loading_paragraph};
use crate::ui::views::{Load, StatisticsView};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Label, rendered value and accent color of each card.
pub fn statistic_cards(stats: &StatisticsSummary) -> [(&'static str, String, Color); 4] {
    [
        ("Total Students", stats.total_students.to_string(), Color::LightBlue),
        ("Average Grade", format_grade(stats.average_grade), Color::LightGreen),
        ("Highest Grade", format_optional_grade(stats.highest_grade), Color::Yellow),
        ("Lowest Grade", format_optional_grade(stats.lowest_grade), Color::LightRed),
    ]
}

pub fn render_statistics(f: &mut Frame, area: Rect, view: &StatisticsView, tick: usize) {
    let block = Block::default()
        .title("STATISTICS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let stats = match view.state() {
        Load::Loading => {
            f.render_widget(loading_paragraph(tick, "statistics"), inner);
            return;
        }
        Load::Failed(message) => {
            f.render_widget(error_paragraph(message), inner);
            return;
        }
        Load::Ready(stats) => stats,
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Fill(1)])
        .split(inner);
    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);

    let cards = statistic_cards(stats).into_iter().zip(card_areas.iter());
    for ((label, value, color), card_area) in cards {
        let card = Paragraph::new(vec![
            Line::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Line::styled(label, Style::default().fg(color)),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(card, *card_area);
    }
}
