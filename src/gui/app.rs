//! State of the interactive form: three duration fields, Start, Pause/Resume,
//! Help, and the modal dialog on top of them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::config::{DurationField, PhaseDurations};
use crate::notify::NotificationSink;
use crate::pomodoro::cycle::{PhaseCycle, Tick};
use crate::pomodoro::messages::{
    COMPLETION_MESSAGE, HELP_MESSAGE, INVALID_INPUT_MESSAGE, random_long_break_message,
};
use crate::pomodoro::phase::Phase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(DurationField),
    Start,
    PauseResume,
    Help,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Field(DurationField::Work),
        Focus::Field(DurationField::ShortBreak),
        Focus::Field(DurationField::LongBreak),
        Focus::Start,
        Focus::PauseResume,
        Focus::Help,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Error(String),
    Completion(String),
    Help,
}

impl Dialog {
    pub fn title(&self) -> &'static str {
        match self {
            Dialog::Error(_) => "Error",
            Dialog::Completion(_) => "Task complete",
            Dialog::Help => "Help",
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Dialog::Error(message) | Dialog::Completion(message) => message,
            Dialog::Help => HELP_MESSAGE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputField {
    pub field: DurationField,
    pub value: String,
}

pub struct App<S> {
    inputs: [InputField; 3],
    focus: Focus,
    cycle: Option<PhaseCycle>,
    completed: u32,
    dialog: Option<Dialog>,
    long_break_message: Option<&'static str>,
    sink: S,
    should_quit: bool,
}

impl<S: NotificationSink> App<S> {
    /// Prefills the form with `durations` expressed in minutes.
    pub fn new(durations: PhaseDurations, sink: S) -> Self {
        let field = |field: DurationField, phase: Phase| InputField {
            field,
            value: durations.minutes(phase).to_string(),
        };
        Self {
            inputs: [
                field(DurationField::Work, Phase::Working),
                field(DurationField::ShortBreak, Phase::ShortBreak),
                field(DurationField::LongBreak, Phase::LongBreak),
            ],
            focus: Focus::Field(DurationField::Work),
            cycle: None,
            completed: 0,
            dialog: None,
            long_break_message: None,
            sink,
            should_quit: false,
        }
    }

    pub fn inputs(&self) -> &[InputField; 3] {
        &self.inputs
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn cycle(&self) -> Option<&PhaseCycle> {
        self.cycle.as_ref()
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn long_break_message(&self) -> Option<&'static str> {
        self.long_break_message
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Called once per scheduler tick.
    pub fn on_tick(&mut self) {
        let Some(cycle) = self.cycle.as_mut() else {
            return;
        };
        let Tick::Completed(change) = cycle.tick() else {
            return;
        };
        self.completed = change.completed;
        self.long_break_message = match change.next {
            Phase::LongBreak => Some(random_long_break_message()),
            _ => None,
        };
        if change.finished_work() {
            self.sink.play_cue();
            self.sink.show_completion_dialog(COMPLETION_MESSAGE);
            self.dialog = Some(Dialog::Completion(COMPLETION_MESSAGE.to_string()));
        }
    }

    /// Parses the form and starts a fresh work phase. Invalid input leaves
    /// any running cycle untouched and opens the error dialog.
    pub fn start(&mut self) {
        let [work, short_break, long_break] = &self.inputs;
        match PhaseDurations::parse(&work.value, &short_break.value, &long_break.value) {
            Ok(durations) => {
                info!(?durations, completed = self.completed, "cycle started");
                self.cycle = Some(PhaseCycle::with_completed(durations, self.completed));
                self.long_break_message = None;
            }
            Err(e) => {
                debug!("rejected form input: {e}");
                self.dialog = Some(Dialog::Error(format!("{INVALID_INPUT_MESSAGE}\n\n{e}")));
            }
        }
    }

    /// No-op until a cycle has been started.
    pub fn toggle_pause(&mut self) {
        if let Some(cycle) = self.cycle.as_mut() {
            cycle.toggle_pause();
        }
    }

    pub fn show_help(&mut self) {
        self.dialog = Some(Dialog::Help);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if self.dialog.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dialog = None;
            }
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::F(1) => self.show_help(),
            KeyCode::F(2) => self.start(),
            KeyCode::F(3) => self.toggle_pause(),
            KeyCode::Enter => self.activate(),
            KeyCode::Esc => self.quit(),
            _ => match self.focus {
                Focus::Field(field) => self.edit_field(field, key.code),
                _ => self.handle_shortcut(key.code),
            },
        }
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Field(_) | Focus::Start => self.start(),
            Focus::PauseResume => self.toggle_pause(),
            Focus::Help => self.show_help(),
        }
    }

    fn edit_field(&mut self, field: DurationField, code: KeyCode) {
        let Some(input) = self.inputs.iter_mut().find(|input| input.field == field) else {
            return;
        };
        match code {
            KeyCode::Char(c) => input.value.push(c),
            KeyCode::Backspace => {
                input.value.pop();
            }
            _ => {}
        }
    }

    fn handle_shortcut(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(' ') => self.toggle_pause(),
            KeyCode::Char('?') => self.show_help(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }
}
