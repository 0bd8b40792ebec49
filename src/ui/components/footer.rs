//! Footer component
//!
//! Renders the key bindings that apply to the active view

use crate::ui::app::App;
use crate::ui::views::Tab;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn footer_text(app: &App) -> &'static str {
    match app.tab() {
        Tab::List if app.list().pending_delete().is_some() => "[Y] Delete | [N/Esc] Cancel",
        Tab::List => "[1-3] Views | [↑↓] Select | [D] Delete | [R] Reload | [Q] Quit",
        Tab::Create => "[Tab] Next field | [Enter] Add | [Esc] Back to list | [F1-F3] Views",
        Tab::Statistics => "[1-3] Views | [R] Reload | [Q] Quit",
    }
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(footer_text(app))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
