//! Main application state and UI loop
//!
//! Contains the App struct (the navigation shell) and main UI event handling logic

use crate::api::StudentApi;
use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, ui};
use crate::events::Event as ActivityEvent;
use crate::ui::dispatch::{Completion, Dispatcher, Request, Response, Ticket};
use crate::ui::renderer::render;
use crate::ui::views::{CreateForm, StatisticsView, StudentListView, Tab};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use log::debug;
use ratatui::{Terminal, backend::Backend};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub api_url: String,
}

impl UIConfig {
    pub fn new(with_background_color: bool, api_url: String) -> Self {
        Self {
            with_background_color,
            api_url,
        }
    }
}

/// Application state
pub struct App {
    /// The view currently shown.
    tab: Tab,

    /// Bumped every time a student is added; the list reloads when it lags.
    refresh: u64,

    list: StudentListView,
    form: CreateForm,
    statistics: StatisticsView,

    /// Activity logs for display (last MAX_ACTIVITY_LOGS events)
    activity_logs: VecDeque<ActivityEvent>,

    /// Runs API requests off the UI loop.
    dispatcher: Dispatcher,

    ui_config: UIConfig,

    /// Animation tick counter
    tick: usize,

    should_quit: bool,
}

impl App {
    /// Creates a new instance of the application. Nothing is fetched until [`App::start`].
    pub fn new(
        api: Arc<dyn StudentApi>,
        completion_sender: mpsc::Sender<Completion>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            tab: Tab::default(),
            refresh: 0,
            list: StudentListView::new(),
            form: CreateForm::new(),
            statistics: StatisticsView::new(),
            activity_logs: VecDeque::new(),
            dispatcher: Dispatcher::new(api, completion_sender),
            ui_config,
            tick: 0,
            should_quit: false,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    #[cfg(test)]
    pub fn refresh_count(&self) -> u64 {
        self.refresh
    }

    pub fn list(&self) -> &StudentListView {
        &self.list
    }

    pub fn form(&self) -> &CreateForm {
        &self.form
    }

    pub fn statistics(&self) -> &StatisticsView {
        &self.statistics
    }

    pub fn activity_logs(&self) -> &VecDeque<ActivityEvent> {
        &self.activity_logs
    }

    pub fn ui_config(&self) -> &UIConfig {
        &self.ui_config
    }

    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Enters the initial view.
    pub fn start(&mut self) {
        self.enter(self.tab);
    }

    /// Swaps the shown view. Selecting the active tab re-enters it.
    pub fn select(&mut self, tab: Tab) {
        self.leave(self.tab);
        self.tab = tab;
        self.enter(tab);
    }

    fn enter(&mut self, tab: Tab) {
        match tab {
            Tab::List => {
                let request = self.list.enter(self.refresh);
                self.dispatch(Tab::List, request);
            }
            Tab::Create => self.form.enter(),
            Tab::Statistics => {
                let request = self.statistics.enter();
                self.dispatch(Tab::Statistics, request);
            }
        }
    }

    fn leave(&mut self, tab: Tab) {
        match tab {
            Tab::List => self.list.leave(),
            Tab::Create => self.form.leave(),
            Tab::Statistics => self.statistics.leave(),
        }
    }

    fn generation(&self, tab: Tab) -> u64 {
        match tab {
            Tab::List => self.list.generation(),
            Tab::Create => self.form.generation(),
            Tab::Statistics => self.statistics.generation(),
        }
    }

    fn dispatch(&self, view: Tab, request: Request) {
        let ticket = Ticket {
            view,
            generation: self.generation(view),
        };
        self.dispatcher.dispatch(ticket, request);
    }

    /// Called when the form reports a created student.
    fn student_added(&mut self) {
        self.refresh += 1;
        if self.tab == Tab::List && self.list.needs_refresh(self.refresh) {
            let request = self.list.enter(self.refresh);
            self.dispatch(Tab::List, request);
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: ActivityEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Routes a finished request to the view that issued it.
    pub fn apply(&mut self, completion: Completion) {
        let Completion { ticket, response } = completion;

        // A created student exists regardless of where the user went since.
        if let Response::Created(Ok(_)) = &response {
            self.student_added();
        }

        if ticket.generation != self.generation(ticket.view) {
            debug!("Discarding stale response for {}", ticket.view);
            return;
        }

        match response {
            Response::Students(result) => self.list.apply_students(result),
            Response::Deleted { id, result } => self.list.apply_deleted(&id, result),
            Response::Created(result) => {
                self.form.apply_created(&result);
            }
            Response::Statistics(result) => self.statistics.apply_statistics(result),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::F(1) => return self.select(Tab::List),
            KeyCode::F(2) => return self.select(Tab::Create),
            KeyCode::F(3) => return self.select(Tab::Statistics),
            _ => {}
        }

        match self.tab {
            Tab::List => self.handle_list_key(key),
            Tab::Create => self.handle_form_key(key),
            Tab::Statistics => {
                self.handle_navigation_key(key);
            }
        }
    }

    /// Keys shared by the read-only views. Returns true if consumed.
    fn handle_navigation_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('1') => self.select(Tab::List),
            KeyCode::Char('2') => self.select(Tab::Create),
            KeyCode::Char('3') => self.select(Tab::Statistics),
            KeyCode::Char('r') => self.select(self.tab),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => return false,
        }
        true
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        if self.list.pending_delete().is_some() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    if let Some(request) = self.list.confirm_delete() {
                        self.dispatch(Tab::List, request);
                    }
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.list.cancel_delete()
                }
                _ => {}
            }
            return;
        }

        if self.handle_navigation_key(key) {
            return;
        }
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.list.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.list.select_previous(),
            KeyCode::Char('d') | KeyCode::Delete => {
                self.list.request_delete();
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.select(Tab::List),
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_previous(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => {
                if let Some(request) = self.form.submit() {
                    self.dispatch(Tab::Create, request);
                }
            }
            KeyCode::Char(c) => self.form.input(c),
            _ => {}
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the current view.
pub async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut completions: mpsc::Receiver<Completion>,
    mut activity: mpsc::Receiver<ActivityEvent>,
) -> std::io::Result<()> {
    let mut terminal_events = EventStream::new();
    let mut ticker = tokio::time::interval(ui::tick_rate());

    app.start();

    // UI event loop
    loop {
        terminal.draw(|f| render(f, &app))?;

        tokio::select! {
            maybe_event = terminal_events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => {
                    // Skip events that are not KeyEventKind::Press
                    if key.kind != KeyEventKind::Release {
                        app.handle_key(key);
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => return Ok(()),
            },
            Some(completion) = completions.recv() => app.apply(completion),
            Some(event) = activity.recv() => app.add_to_activity_log(event),
            _ = ticker.tick() => app.on_tick(),
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockStudentApi;
    use crate::api::models::{CreateStudentInput, DeleteConfirmation, StatisticsSummary, Student};
    use crate::ui::views::{Field, Load};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        text.chars().for_each(|c| app.handle_key(key(KeyCode::Char(c))));
    }

    fn student(id: &str, name: &str, age: i32, grade: f64) -> Student {
        Student {
            id: id.to_string(),
            name: name.to_string(),
            age,
            grade,
        }
    }

    fn ada() -> Student {
        student("1", "Ada", 30, 3.95)
    }

    fn app_with(api: MockStudentApi) -> (App, mpsc::Receiver<Completion>) {
        let (sender, receiver) = mpsc::channel(8);
        let ui_config = UIConfig::new(false, "http://localhost:3001/api".to_string());
        (App::new(Arc::new(api), sender, ui_config), receiver)
    }

    /// Waits for the next completion and feeds it to the app.
    async fn settle(app: &mut App, receiver: &mut mpsc::Receiver<Completion>) {
        let completion = receiver.recv().await.expect("completion");
        app.apply(completion);
    }

    fn listed_ids(app: &App) -> Vec<String> {
        match app.list().state() {
            Load::Ready(students) => students.iter().map(|s| s.id.clone()).collect(),
            other => panic!("list not ready: {:?}", other),
        }
    }

    #[tokio::test]
    // Adding a student and returning to the list fetches the list again and shows the new entry.
    async fn test_created_student_appears_after_fresh_fetch() {
        let mut api = MockStudentApi::new();
        let mut list_calls = 0;
        api.expect_list_students().times(2).returning(move || {
            list_calls += 1;
            if list_calls == 1 {
                Ok(vec![])
            } else {
                Ok(vec![ada()])
            }
        });
        api.expect_create_student()
            .withf(|input| *input == CreateStudentInput::new("Ada", 30, 3.95))
            .times(1)
            .returning(|_| Ok(ada()));

        let (mut app, mut receiver) = app_with(api);
        app.start();
        settle(&mut app, &mut receiver).await;
        assert!(listed_ids(&app).is_empty());

        app.select(Tab::Create);
        type_text(&mut app, "Ada");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "30");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "3.95");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.form().is_submitting());

        settle(&mut app, &mut receiver).await;
        assert!(!app.form().is_submitting());
        assert_eq!(app.form().draft(), CreateStudentInput::default());
        assert_eq!(app.refresh_count(), 1);

        app.select(Tab::List);
        assert!(app.list().state().is_loading());
        settle(&mut app, &mut receiver).await;
        assert_eq!(listed_ids(&app), vec!["1".to_string()]);
    }

    #[tokio::test]
    // Local validation failures never reach the API.
    async fn test_invalid_form_issues_no_request() {
        let mut api = MockStudentApi::new();
        api.expect_create_student().never();

        let (mut app, mut receiver) = app_with(api);
        app.select(Tab::Create);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.form().error(), Some("Name is required"));

        type_text(&mut app, "Ada");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "101");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.form().error(), Some("Age must be between 1 and 100"));
        assert_eq!(app.form().focus(), Field::Age);

        tokio::task::yield_now().await;
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    // Confirmed delete removes the chosen row; declining sends nothing.
    async fn test_delete_flow_through_keys() {
        let mut api = MockStudentApi::new();
        api.expect_list_students().times(1).returning(|| {
            Ok(vec![
                student("1", "Leon", 21, 3.75),
                student("2", "Claire", 22, 3.6),
                student("3", "Jill", 23, 3.85),
            ])
        });
        api.expect_delete_student()
            .withf(|id| id == "2")
            .times(1)
            .returning(|_| {
                Ok(DeleteConfirmation {
                    message: "Student deleted successfully".to_string(),
                })
            });

        let (mut app, mut receiver) = app_with(api);
        app.start();
        settle(&mut app, &mut receiver).await;

        app.handle_key(key(KeyCode::Char('j')));
        app.handle_key(key(KeyCode::Char('d')));
        app.handle_key(key(KeyCode::Char('n')));
        assert!(app.list().pending_delete().is_none());

        app.handle_key(key(KeyCode::Char('d')));
        // 'q' is not a quit while the prompt is open.
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Char('y')));
        settle(&mut app, &mut receiver).await;

        assert_eq!(listed_ids(&app), vec!["1".to_string(), "3".to_string()]);
    }

    #[tokio::test]
    // A response for a view the user already left has no effect.
    async fn test_stale_response_is_discarded() {
        let mut api = MockStudentApi::new();
        api.expect_list_students()
            .times(1)
            .returning(|| Ok(vec![ada()]));
        api.expect_get_statistics().times(1).returning(|| {
            Ok(StatisticsSummary {
                total_students: 1,
                average_grade: 3.95,
                highest_grade: Some(3.95),
                lowest_grade: Some(3.95),
            })
        });

        let (mut app, mut receiver) = app_with(api);
        app.start();
        app.select(Tab::Statistics);
        settle(&mut app, &mut receiver).await;
        settle(&mut app, &mut receiver).await;

        assert!(app.list().state().is_loading());
        assert!(matches!(app.statistics().state(), Load::Ready(_)));
    }

    #[tokio::test]
    // The refresh signal reloads the list immediately when it is on screen.
    async fn test_refresh_signal_reloads_visible_list() {
        let mut api = MockStudentApi::new();
        api.expect_list_students().times(2).returning(|| Ok(vec![ada()]));

        let (mut app, mut receiver) = app_with(api);
        app.start();
        settle(&mut app, &mut receiver).await;

        app.apply(Completion {
            ticket: Ticket {
                view: Tab::Create,
                generation: 0,
            },
            response: Response::Created(Ok(ada())),
        });
        assert_eq!(app.refresh_count(), 1);
        assert!(app.list().state().is_loading());

        settle(&mut app, &mut receiver).await;
        assert_eq!(listed_ids(&app), vec!["1".to_string()]);
    }

    #[tokio::test]
    // Number keys switch views from read-only tabs but are typed into the form.
    async fn test_keys_depend_on_active_view() {
        let mut api = MockStudentApi::new();
        api.expect_get_statistics().returning(|| {
            Err(crate::api::error::RequestError::Http {
                status: 500,
                message: String::new(),
            })
        });

        let (mut app, _receiver) = app_with(api);
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.tab(), Tab::Create);

        type_text(&mut app, "3q");
        assert_eq!(app.tab(), Tab::Create);
        assert!(!app.should_quit());
        assert_eq!(app.form().value(Field::Name), "3q");

        app.handle_key(key(KeyCode::F(3)));
        assert_eq!(app.tab(), Tab::Statistics);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }
}
