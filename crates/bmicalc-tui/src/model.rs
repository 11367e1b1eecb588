//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use bmicalc_core::validation::{digits_only, Field};
use bmicalc_core::{evaluate, BmiResult, RawForm, Sex};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::{debug, info};

use crate::footer::render_footer;
use crate::form::{form_height, render_form, FormView};
use crate::header::render_header;
use crate::info::render_info;
use crate::keymap::{map_key, KeyAction};
use crate::messages::TuiMessage;
use crate::result_card::render_result;
use crate::styles::ColorTheme;

/// Focusable rows of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sex,
    Weight,
    Height,
    Age,
    Calculate,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Sex,
        Focus::Weight,
        Focus::Height,
        Focus::Age,
        Focus::Calculate,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next row, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Previous row, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Text field behind this row, if any.
    #[must_use]
    pub fn field(self) -> Option<Field> {
        match self {
            Self::Weight => Some(Field::Weight),
            Self::Height => Some(Field::Height),
            Self::Age => Some(Field::Age),
            Self::Sex | Self::Calculate => None,
        }
    }
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Selected sex, if any.
    pub sex: Option<Sex>,
    /// Weight field text.
    pub weight: String,
    /// Height field text.
    pub height: String,
    /// Age field text.
    pub age: String,
    /// Focused row.
    pub focus: Focus,
    /// Last successful evaluation.
    pub result: Option<BmiResult>,
    /// Validation message from the last failed calculation.
    pub error: Option<&'static str>,
    /// Whether the info dialog is open.
    pub show_info: bool,
    theme: ColorTheme,
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiApp {
    /// Create a new TUI app with an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            should_quit: false,
            sex: None,
            weight: String::new(),
            height: String::new(),
            age: String::new(),
            focus: Focus::default(),
            result: None,
            error: None,
            show_info: false,
            theme: ColorTheme::default(),
        }
    }

    /// Pre-fill the form, e.g. from command-line flags.
    #[must_use]
    pub fn with_form(mut self, form: &RawForm) -> Self {
        self.weight = form.weight.replace(',', ".");
        self.height = form.height.replace(',', ".");
        self.age = digits_only(&form.age);
        self.sex = form.sex;
        self
    }

    /// Current form contents.
    #[must_use]
    pub fn form(&self) -> RawForm {
        RawForm::new(
            self.weight.as_str(),
            self.height.as_str(),
            self.age.as_str(),
            self.sex,
        )
    }

    /// Handle a single message (Elm Update).
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::Resize { width, height } => {
                // Layout is recomputed from the frame on the next draw
                debug!(width, height, "terminal resized");
            }
            TuiMessage::Tick => {
                // Tick triggers re-render, nothing to update in model
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        if self.show_info {
            match action {
                KeyAction::Cancel => self.should_quit = true,
                KeyAction::Quit | KeyAction::Submit | KeyAction::ToggleInfo => {
                    self.show_info = false;
                }
                _ => {}
            }
            return;
        }

        match action {
            KeyAction::Quit | KeyAction::Cancel => self.should_quit = true,
            KeyAction::ToggleInfo => self.show_info = true,
            KeyAction::NextField => self.focus = self.focus.next(),
            KeyAction::PrevField => self.focus = self.focus.prev(),
            KeyAction::Left if self.focus == Focus::Sex => self.select_sex(Sex::Male),
            KeyAction::Right if self.focus == Focus::Sex => self.select_sex(Sex::Female),
            KeyAction::Submit => self.calculate(),
            KeyAction::Backspace => self.backspace(),
            KeyAction::Input(c) => self.input(c),
            KeyAction::Left | KeyAction::Right | KeyAction::None => {}
        }
    }

    fn select_sex(&mut self, sex: Sex) {
        if self.sex != Some(sex) {
            self.sex = Some(sex);
            self.error = None;
        }
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus.field()? {
            Field::Weight => Some(&mut self.weight),
            Field::Height => Some(&mut self.height),
            Field::Age => Some(&mut self.age),
            Field::Sex => None,
        }
    }

    fn backspace(&mut self) {
        if let Some(text) = self.focused_text() {
            if text.pop().is_some() {
                self.error = None;
            }
        }
    }

    fn input(&mut self, c: char) {
        match self.focus {
            Focus::Sex => match c.to_ascii_lowercase() {
                'h' | 'm' => self.select_sex(Sex::Male),
                'd' | 'f' => self.select_sex(Sex::Female),
                ' ' => self.select_sex(self.sex.map_or(Sex::Male, Sex::toggled)),
                _ => {}
            },
            Focus::Weight | Focus::Height => {
                let Some(text) = self.focused_text() else {
                    return;
                };
                let accepted = match c {
                    '0'..='9' => Some(c),
                    ',' | '.' if !text.contains('.') => Some('.'),
                    _ => None,
                };
                if let Some(c) = accepted {
                    text.push(c);
                    self.error = None;
                }
            }
            Focus::Age => {
                if c.is_ascii_digit() && self.age.len() < 3 {
                    self.age.push(c);
                    self.error = None;
                }
            }
            Focus::Calculate => {}
        }
    }

    /// Validate the form and evaluate it, or record the validation error.
    pub fn calculate(&mut self) {
        match self.form().validate() {
            Ok(input) => {
                let result = evaluate(&input);
                info!(
                    bmi = result.bmi,
                    classification = ?result.classification,
                    "evaluated form"
                );
                self.result = Some(result);
                self.error = None;
            }
            Err(err) => {
                debug!("form rejected: {err}");
                self.result = None;
                self.error = Some(err.user_message());
            }
        }
    }

    /// Compute the screen layout.
    ///
    /// The form grows with the number of lines the error message wraps to.
    /// Returns (header, form, result, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect, error: Option<&str>) -> (Rect, Rect, Rect, Rect) {
        let form = form_height(error, area.width);
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),    // header
                Constraint::Length(form), // form
                Constraint::Min(5),     // result
                Constraint::Length(2),  // footer
            ])
            .split(area);

        (outer[0], outer[1], outer[2], outer[3])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, form_area, result_area, footer_area) =
            Self::compute_layout(frame.area(), self.error);

        render_header(frame, header_area, &self.theme);
        render_form(
            frame,
            form_area,
            &FormView {
                sex: self.sex,
                weight: &self.weight,
                height: &self.height,
                age: &self.age,
                focus: self.focus,
                error: self.error,
            },
            &self.theme,
        );
        render_result(frame, result_area, self.result.as_ref(), &self.theme);
        render_footer(frame, footer_area);

        if self.show_info {
            render_info(frame, frame.area(), &self.theme);
        }
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update, render),
    /// and tears down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        let teardown = Self::teardown_terminal(&mut terminal);
        exit_status(result, teardown)
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            let msg = if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        TuiMessage::KeyPress(map_key(key))
                    }
                    Event::Resize(width, height) => TuiMessage::Resize { width, height },
                    _ => continue,
                }
            } else {
                TuiMessage::Tick
            };
            self.handle_message(msg);
        }
    }
}

/// A loop failure takes precedence over a teardown failure.
fn exit_status(event_loop: io::Result<()>, teardown: io::Result<()>) -> io::Result<()> {
    event_loop.and(teardown)
}
