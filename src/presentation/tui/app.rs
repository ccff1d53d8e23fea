use std::io::{self, Stdout};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{ListState, Paragraph};
use ratatui::{Frame, Terminal};

use crate::application::config::expand_path;
use crate::application::services::report_pipeline::{ReportPipeline, has_report};
use crate::domain::entities::host_record::INDEX_PAGE;
use crate::domain::ports::viewer::ReportViewer;
use crate::presentation::tui::event::{InputMode, ShellState, StatusKind};
use crate::presentation::tui::widgets::directory_input::render_directory_input;
use crate::presentation::tui::widgets::file_list::render_file_list;
use crate::presentation::tui::widgets::status_line::render_status_line;

struct App<'a> {
    pipeline: &'a ReportPipeline<'a>,
    viewer: &'a dyn ReportViewer,
    report_date: NaiveDate,

    state: ShellState,
    mode: InputMode,
    directory: Option<PathBuf>,
    input: String,
    files: Vec<String>,
    list_state: ListState,
    index_path: Option<PathBuf>,

    status: String,
    status_kind: StatusKind,
    should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    fn new(
        pipeline: &'a ReportPipeline<'a>,
        viewer: &'a dyn ReportViewer,
        report_date: NaiveDate,
    ) -> Self {
        Self {
            pipeline,
            viewer,
            report_date,
            state: ShellState::default(),
            mode: InputMode::default(),
            directory: None,
            input: String::new(),
            files: Vec::new(),
            list_state: ListState::default(),
            index_path: None,
            status: "Press d to choose a log directory".to_string(),
            status_kind: StatusKind::Info,
            should_quit: false,
        }
    }

    fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = message.into();
        self.status_kind = kind;
    }

    /// Scans `dir` and moves to `DirectorySelected`, or `ReportGenerated`
    /// when an index page is already there. A failed scan keeps the previous state.
    fn select_directory(&mut self, dir: PathBuf) {
        let files = match self.pipeline.discover(&dir) {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!("Directory scan failed: {e}");
                self.set_status(StatusKind::Error, e.to_string());
                return;
            }
        };

        self.files = files
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        self.list_state
            .select(if self.files.is_empty() { None } else { Some(0) });

        if has_report(&dir) {
            self.state = ShellState::ReportGenerated;
            self.index_path = Some(dir.join(INDEX_PAGE));
        } else {
            self.state = ShellState::DirectorySelected;
            self.index_path = None;
        }

        let message = if self.files.is_empty() {
            format!("No log files in {}", dir.display())
        } else {
            format!("Found {} log file(s) in {}", self.files.len(), dir.display())
        };
        self.set_status(StatusKind::Info, message);
        self.directory = Some(dir);
    }

    fn rescan(&mut self) {
        match self.directory.clone() {
            Some(dir) => self.select_directory(dir),
            None => self.set_status(StatusKind::Error, "Select a directory first"),
        }
    }

    fn generate(&mut self) {
        let Some(dir) = self.directory.clone() else {
            self.set_status(StatusKind::Error, "Select a directory first");
            return;
        };

        match self.pipeline.generate(&dir, self.report_date) {
            Ok(outcome) => {
                let message = if outcome.skipped.is_empty() {
                    format!("Report generated for {} host(s)", outcome.records.len())
                } else {
                    format!(
                        "Report generated for {} host(s), {} file(s) skipped",
                        outcome.records.len(),
                        outcome.skipped.len()
                    )
                };
                self.state = ShellState::ReportGenerated;
                self.index_path = Some(outcome.index_path);
                self.set_status(StatusKind::Success, message);
            }
            Err(e) => {
                tracing::warn!("Report generation failed: {e}");
                if !has_report(&dir) {
                    self.state = ShellState::DirectorySelected;
                    self.index_path = None;
                }
                self.set_status(StatusKind::Error, e.to_string());
            }
        }
    }

    fn view(&mut self) {
        let Some(index) = self.index_path.clone().filter(|_| self.state.can_view()) else {
            self.set_status(StatusKind::Error, "Generate a report first");
            return;
        };
        match self.viewer.open(&index) {
            Ok(()) => self.set_status(StatusKind::Success, format!("Opened {}", index.display())),
            Err(e) => self.set_status(StatusKind::Error, e.to_string()),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            InputMode::EditingDirectory => self.handle_edit_key(key),
            InputMode::Normal => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('d') => self.start_editing(),
                KeyCode::Char('g') => self.generate(),
                KeyCode::Char('v') => self.view(),
                KeyCode::Char('r') => self.rescan(),
                KeyCode::Char('j') | KeyCode::Down => self.scroll_down(),
                KeyCode::Char('k') | KeyCode::Up => self.scroll_up(),
                _ => {}
            },
        }
    }

    fn start_editing(&mut self) {
        self.input = self
            .directory
            .as_deref()
            .map(|d| d.display().to_string())
            .unwrap_or_default();
        self.mode = InputMode::EditingDirectory;
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.mode = InputMode::Normal;
                let raw = self.input.trim().to_string();
                if raw.is_empty() {
                    self.set_status(StatusKind::Error, "Directory path is empty");
                } else {
                    self.select_directory(expand_path(&raw));
                }
            }
            KeyCode::Esc => {
                self.mode = InputMode::Normal;
                self.input.clear();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn scroll_down(&mut self) {
        let count = self.files.len();
        if count > 0 {
            let i = self
                .list_state
                .selected()
                .map_or(0, |i| if i >= count - 1 { 0 } else { i + 1 });
            self.list_state.select(Some(i));
        }
    }

    fn scroll_up(&mut self) {
        let count = self.files.len();
        if count > 0 {
            let i = self
                .list_state
                .selected()
                .map_or(count - 1, |i| if i == 0 { count - 1 } else { i - 1 });
            self.list_state.select(Some(i));
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [header_area, input_area, list_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .areas(frame.area());

        self.render_header(frame, header_area);

        let current = self.directory.as_deref().map(|d| d.display().to_string());
        render_directory_input(
            frame,
            current.as_deref(),
            &self.input,
            self.mode == InputMode::EditingDirectory,
            input_area,
        );
        render_file_list(frame, &self.files, &mut self.list_state, list_area);
        render_status_line(
            frame,
            &self.status,
            self.status_kind,
            self.state,
            self.mode,
            status_area,
        );
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled(
                " HOSTCHECK ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("│ "),
            Span::styled(format!("[{}]", self.state), Style::default().fg(Color::Yellow)),
            Span::raw(" │ "),
            Span::styled(
                self.report_date.format("%Y-%m-%d").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        frame.render_widget(Paragraph::new(header), area);
    }
}

/// Restore the terminal to its normal state.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        eprintln!("Failed to disable raw mode: {e}");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        eprintln!("Failed to leave alternate screen: {e}");
    }
}

/// Launch the interactive report shell, optionally starting in `start_dir`.
///
/// # Errors
///
/// Returns an error if terminal setup, rendering, or reading input fails.
/// Report and viewer failures only reach the status line.
pub fn run_shell(
    pipeline: &ReportPipeline<'_>,
    viewer: &dyn ReportViewer,
    start_dir: Option<&Path>,
    report_date: NaiveDate,
) -> anyhow::Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = create_terminal(backend, || {
        restore_terminal();
        let _ = std::panic::take_hook();
    })?;

    let mut app = App::new(pipeline, viewer, report_date);
    if let Some(dir) = start_dir {
        app.select_directory(dir.to_path_buf());
    }

    let result = run_app_loop(&mut terminal, &mut app);

    restore_terminal();
    let _ = terminal.show_cursor();
    let _ = std::panic::take_hook();

    result
}

/// Builds the terminal, running `teardown` first if that fails.
fn create_terminal<B: Backend>(backend: B, teardown: impl FnOnce()) -> anyhow::Result<Terminal<B>> {
    match Terminal::new(backend) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            teardown();
            Err(e).context("Failed to create terminal")
        }
    }
}

fn run_app_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<'_>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if let CrosstermEvent::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
