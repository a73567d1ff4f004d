use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::app::{App, Dialog, Focus};
use crate::notify::NotificationSink;
use crate::pomodoro::clock_face::format_remaining;
use crate::pomodoro::phase::Phase;

const TITLE: &str = " Pomodoro Timer ";
const KEY_HINTS: &str = "Tab move · Enter activate · F2 start · F3 pause · F1 help · Esc quit";

pub fn draw<S: NotificationSink>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(TITLE)
        .title_alignment(Alignment::Center);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    for (input, row) in app.inputs().iter().zip(rows.iter()) {
        let focused = app.focus() == Focus::Field(input.field);
        let field = Paragraph::new(input.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(input.field.label())
                .border_style(focus_style(focused)),
        );
        frame.render_widget(field, *row);
    }

    frame.render_widget(timer_label(app), rows[3]);
    render_buttons(frame, app, rows[4]);

    let hints = Paragraph::new(KEY_HINTS)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hints, rows[5]);

    if let Some(dialog) = app.dialog() {
        render_dialog(frame, dialog, area);
    }
}

fn timer_label<S: NotificationSink>(app: &App<S>) -> Paragraph<'static> {
    let mut lines = Vec::new();
    match app.cycle() {
        None => lines.push(Line::from("Press Start to begin")),
        Some(cycle) if cycle.is_paused() => lines.push(Line::from(Span::styled(
            "Paused",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))),
        Some(cycle) => {
            let phase = cycle.phase();
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} {}", phase.emoji(), phase.as_str()),
                    Style::default()
                        .fg(phase_color(phase))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  Remaining {}", format_remaining(cycle.remaining()))),
            ]));
        }
    }
    lines.push(Line::from(format!("Pomodoros completed: {}", app.completed())));
    if let Some(message) = app.long_break_message() {
        lines.push(Line::from(Span::styled(
            message,
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

fn render_buttons<S: NotificationSink>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let pause_label = match app.cycle() {
        Some(cycle) if cycle.is_paused() => "Resume",
        _ => "Pause/Resume",
    };
    let buttons = [
        (Focus::Start, "Start"),
        (Focus::PauseResume, pause_label),
        (Focus::Help, "Help"),
    ];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for ((focus, label), column) in buttons.into_iter().zip(columns.iter()) {
        let focused = app.focus() == focus;
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(focus_style(focused))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(focus_style(focused)),
            );
        frame.render_widget(button, *column);
    }
}

fn render_dialog(frame: &mut Frame, dialog: &Dialog, area: Rect) {
    let popup = centered_rect(60, 50, area);
    let border = match dialog {
        Dialog::Error(_) => Color::Red,
        Dialog::Completion(_) => Color::Green,
        Dialog::Help => Color::Cyan,
    };
    let mut text: Vec<Line> = dialog.body().lines().map(Line::from).collect();
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "[ OK ]  Enter / Esc",
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", dialog.title()))
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Working => Color::Red,
        Phase::ShortBreak => Color::Green,
        Phase::LongBreak => Color::Blue,
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
