//! Main renderer

use super::app::App;
use super::components::{footer, header, logs, statistics_panel, student_form, student_table};
use super::views::Tab;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render(f: &mut Frame, app: &App) {
    if app.ui_config().with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(25),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], app);

    match app.tab() {
        Tab::List => {
            student_table::render_student_list(f, main_chunks[1], app.list(), app.tick())
        }
        Tab::Create => student_form::render_student_form(f, main_chunks[1], app.form()),
        Tab::Statistics => {
            statistics_panel::render_statistics(f, main_chunks[1], app.statistics(), app.tick())
        }
    }

    logs::render_logs_panel(f, main_chunks[2], app);
    footer::render_footer(f, main_chunks[3], app);
}
