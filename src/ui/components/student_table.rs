//! Student list component
//!
//! Renders the list view: spinner, failure banner, or the student table with
//! its delete prompt and inline error.

use crate::ui::utils::{error_paragraph, format_grade, loading_paragraph};
use crate::ui::views::{Load, StudentListView};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Row, Table, TableState};

pub fn render_student_list(f: &mut Frame, area: Rect, view: &StudentListView, tick: usize) {
    let block = Block::default()
        .title("STUDENT LIST")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let students = match view.state() {
        Load::Loading => {
            f.render_widget(loading_paragraph(tick, "students"), inner);
            return;
        }
        Load::Failed(message) => {
            f.render_widget(error_paragraph(message), inner);
            return;
        }
        Load::Ready(students) => students,
    };

    // Prompt or inline error above the table
    let banner = if let Some(student) = view.pending_delete() {
        Some(
            Paragraph::new(format!(
                "Are you sure you want to delete {}? [y/N]",
                student.name
            ))
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        )
    } else if view.is_deleting() {
        Some(Paragraph::new("Deleting...").style(Style::default().fg(Color::LightBlue)))
    } else {
        view.error()
            .map(|e| Paragraph::new(e.to_string()).style(Style::default().fg(Color::LightRed)))
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if banner.is_some() { 2 } else { 0 }),
            Constraint::Fill(1),
        ])
        .split(inner);

    if let Some(banner) = banner {
        f.render_widget(banner, chunks[0]);
    }

    if students.is_empty() {
        let empty = Paragraph::new("No students found")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let header = Row::new(vec!["NAME", "AGE", "GRADE"]).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = students
        .iter()
        .map(|s| {
            Row::new(vec![
                s.name.clone(),
                s.age.to_string(),
                format_grade(s.grade),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Fill(1),
            Constraint::Length(5),
            Constraint::Length(7),
        ],
    )
    .header(header)
    .row_highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("› ");

    let mut state = TableState::default().with_selected(Some(view.selected()));
    f.render_stateful_widget(table, chunks[1], &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::RequestError;
    use crate::api::models::Student;
    use crate::ui::utils::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(view: &StudentListView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|f| render_student_list(f, f.area(), view, 0))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_ready_list_shows_rows_with_two_decimal_grades() {
        let mut view = StudentListView::new();
        view.enter(0);
        view.apply_students(Ok(vec![Student {
            id: "1".to_string(),
            name: "Ada".to_string(),
            age: 30,
            grade: 3.95,
        }]));
        let text = draw(&view);
        assert!(text.contains("Ada"));
        assert!(text.contains("30"));
        assert!(text.contains("3.95"));
    }

    #[test]
    fn test_empty_and_failed_states() {
        let mut view = StudentListView::new();
        view.enter(0);
        assert!(draw(&view).contains("Loading students"));

        view.apply_students(Ok(vec![]));
        assert!(draw(&view).contains("No students found"));

        view.apply_students(Err(RequestError::Http {
            status: 500,
            message: String::new(),
        }));
        assert!(draw(&view).contains("Failed to load students"));
    }
}
