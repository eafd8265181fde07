use std::collections::BTreeSet;
use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::model::{BehaviorConfig, Config, TaskList};
use crate::ops::list_ops;

use super::input;
use super::render;
use super::theme::Theme;

/// Which control receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The new-task text field
    Input,
    /// The task list
    List,
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// A yes/no prompt is open (see `confirm_state`)
    Confirm,
    /// A message popup is open (see `notice`)
    Notice,
    Help,
}

/// What a confirmation prompt guards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Delete these list positions
    DeleteTasks { indices: Vec<usize> },
    /// Quit while tasks remain
    Exit,
}

#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub title: &'static str,
    pub message: String,
    pub action: ConfirmAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

impl NoticeLevel {
    pub fn title(self) -> &'static str {
        match self {
            NoticeLevel::Info => "Info",
            NoticeLevel::Warning => "Warning",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Main application state
pub struct App {
    pub tasks: TaskList,
    pub behavior: BehaviorConfig,
    pub show_key_hints: bool,
    pub theme: Theme,
    pub focus: Focus,
    pub mode: Mode,
    pub should_quit: bool,
    /// Text typed into the new-task field
    pub input: String,
    /// Byte offset of the cursor in `input`
    pub input_cursor: usize,
    /// Whole field selected (Ctrl+N); the next edit replaces it
    pub input_select_all: bool,
    /// List row under the cursor
    pub cursor: usize,
    /// First visible list row
    pub scroll_offset: usize,
    /// Start of a Shift+arrow range selection
    pub range_anchor: Option<usize>,
    /// Selected list rows
    pub selection: BTreeSet<usize>,
    pub confirm_state: Option<ConfirmState>,
    pub notice: Option<Notice>,
    /// Bottom-row status text
    pub status_message: String,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            tasks: TaskList::new(),
            behavior: config.behavior.clone(),
            show_key_hints: config.ui.show_key_hints,
            theme: Theme::from_config(&config.ui),
            focus: Focus::Input,
            mode: Mode::Normal,
            should_quit: false,
            input: String::new(),
            input_cursor: 0,
            input_select_all: false,
            cursor: 0,
            scroll_offset: 0,
            range_anchor: None,
            selection: BTreeSet::new(),
            confirm_state: None,
            notice: None,
            status_message: "Ready".to_string(),
        }
    }

    /// Add each seed through the normal validation. Returns how many were rejected.
    pub fn seed<S: AsRef<str>>(&mut self, seeds: &[S]) -> usize {
        let mut skipped = 0;
        for seed in seeds {
            if let Err(e) = list_ops::add_task(&mut self.tasks, seed.as_ref()) {
                debug!(seed = seed.as_ref(), error = %e, "seed task skipped");
                skipped += 1;
            }
        }
        if skipped > 0 {
            self.status_message = format!("Skipped {} seed task(s)", skipped);
        }
        skipped
    }

    /// The delete control is enabled only while something is selected
    pub fn delete_enabled(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Replace the selection with a single row and move the cursor there
    pub fn select_only(&mut self, index: usize) {
        self.selection.clear();
        if index < self.tasks.len() {
            self.selection.insert(index);
            self.cursor = index;
        }
        self.range_anchor = None;
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.range_anchor = None;
    }

    /// Drop selected rows that no longer exist and keep the cursor in range
    pub fn clamp_to_list(&mut self) {
        let len = self.tasks.len();
        self.selection.retain(|&i| i < len);
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
        if self.range_anchor.is_some_and(|a| a >= len) {
            self.range_anchor = None;
        }
    }

    pub fn open_notice(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notice = Some(Notice {
            level,
            message: message.into(),
        });
        self.mode = Mode::Notice;
    }

    pub fn open_confirm(&mut self, title: &'static str, message: String, action: ConfirmAction) {
        self.confirm_state = Some(ConfirmState {
            title,
            message,
            action,
        });
        self.mode = Mode::Confirm;
    }

    /// Focus the text field, optionally selecting its whole contents
    pub fn focus_input(&mut self, select_all: bool) {
        self.focus = Focus::Input;
        self.input_select_all = select_all && !self.input.is_empty();
        if !select_all {
            self.input_cursor = self.input.len();
        }
    }

    pub fn focus_list(&mut self) {
        self.focus = Focus::List;
        self.input_select_all = false;
        self.clamp_to_list();
    }

    /// Clear the text field after a successful add
    pub fn reset_input(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
        self.input_select_all = false;
    }
}

/// Run the TUI application
pub fn run(config: Config, seeds: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(&config);
    app.seed(seeds);
    info!(tasks = app.tasks.len(), "starting tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    info!(tasks = app.tasks.len(), "tui closed");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&Config::default())
    }

    #[test]
    fn test_new_app_is_ready() {
        let app = app();
        assert!(app.tasks.is_empty());
        assert_eq!(app.focus, Focus::Input);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.status_message, "Ready");
        assert!(!app.delete_enabled());
    }

    #[test]
    fn test_seed_skips_invalid() {
        let mut app = app();
        let skipped = app.seed(&["Buy milk", "buy milk", "  ", "Eggs"]);
        assert_eq!(skipped, 2);
        assert_eq!(app.tasks.len(), 2);
        assert_eq!(app.status_message, "Skipped 2 seed task(s)");
        assert!(app.selection.is_empty());
    }

    #[test]
    fn test_select_only_ignores_out_of_range() {
        let mut app = app();
        app.seed(&["A", "B"]);
        app.select_only(1);
        assert_eq!(app.selection, BTreeSet::from([1]));
        assert_eq!(app.cursor, 1);
        app.select_only(7);
        assert!(app.selection.is_empty());
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_clamp_to_list() {
        let mut app = app();
        app.seed(&["A", "B", "C"]);
        app.selection = BTreeSet::from([0, 2]);
        app.cursor = 2;
        list_ops::remove_at(&mut app.tasks, [2]);
        app.clamp_to_list();
        assert_eq!(app.selection, BTreeSet::from([0]));
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_focus_input_select_all_needs_text() {
        let mut app = app();
        app.focus_input(true);
        assert!(!app.input_select_all);
        app.input = "draft".into();
        app.focus_input(true);
        assert!(app.input_select_all);
    }
}
