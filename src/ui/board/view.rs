//! Stateless rendering for the interactive board.
//!
//! Everything drawn here is derived from `BoardApp` on each frame; the
//! displayed collection is rebuilt wholesale after every mutation.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::date;

use super::app::{BoardApp, Mode, StatusKind};

const COLOR_TEXT: Color = Color::Rgb(234, 236, 239);
const COLOR_MUTED: Color = Color::Rgb(160, 165, 172);
const COLOR_MUTED_DARK: Color = Color::Rgb(118, 124, 130);
const COLOR_BG_MUTED: Color = Color::Rgb(52, 56, 60);
const COLOR_INFO: Color = Color::Rgb(116, 198, 219);
const COLOR_WARNING: Color = Color::Rgb(244, 200, 98);
const COLOR_ERROR: Color = Color::Rgb(255, 107, 107);
const COLOR_SUCCESS: Color = Color::Rgb(126, 210, 146);
const COLOR_ACCENT: Color = Color::Rgb(122, 170, 255);
const COLOR_BORDER_LIST: Color = Color::Rgb(92, 126, 166);

pub fn render(frame: &mut Frame, board: &mut BoardApp) {
    let area = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(area);

    render_header(frame, board, chunks[0]);
    render_groups(frame, board, chunks[1]);
    render_footer(frame, board, chunks[2]);

    match &board.mode {
        Mode::AddTeammate { input } => {
            render_input_modal(frame, area, "Add teammate", "name", input);
        }
        Mode::AssignText { input } => {
            render_input_modal(frame, area, "New task", "task text", input);
        }
        Mode::AssignDue { input, .. } => {
            render_input_modal(frame, area, "New task", "due date (YYYY-MM-DD)", input);
        }
        Mode::SelectTeammate { index } => {
            render_selector_modal(frame, area, board, *index);
        }
        Mode::ConfirmReset => {
            render_reset_confirm_modal(frame, area);
        }
        Mode::Normal => {}
    }

    if board.show_help {
        render_help_modal(frame, area);
    }
}

fn render_header(frame: &mut Frame, board: &BoardApp, area: Rect) {
    let selected = board.app.selection().name().is_some();
    let selector_style = if selected {
        Style::default()
            .fg(COLOR_SUCCESS)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(COLOR_MUTED)
            .add_modifier(Modifier::ITALIC)
    };

    let line = Line::from(vec![
        Span::styled(
            "crew board",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  |  ", Style::default().fg(COLOR_MUTED_DARK)),
        Span::styled(board.selector_label().to_string(), selector_style),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(COLOR_BG_MUTED)),
    );
    frame.render_widget(widget, area);
}

fn render_groups(frame: &mut Frame, board: &BoardApp, area: Rect) {
    if board.app.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Nothing to do",
                Style::default()
                    .fg(COLOR_MUTED)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "press a to add a teammate, then n to assign a task",
                Style::default().fg(COLOR_MUTED_DARK),
            )),
        ];
        let widget = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(widget, area);
        return;
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut row = 0usize;
    for group in board.app.board().groups() {
        lines.push(Line::from(Span::styled(
            group.teammate.clone(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )));
        for (position, task) in group.tasks.iter().enumerate() {
            let mark = if task.completed { "x" } else { " " };
            let mut text_style = Style::default().fg(COLOR_TEXT);
            if task.completed {
                text_style = Style::default()
                    .fg(COLOR_MUTED)
                    .add_modifier(Modifier::CROSSED_OUT);
            }
            let mut spans = vec![
                Span::styled(
                    format!("  {}. ", position + 1),
                    Style::default().fg(COLOR_MUTED_DARK),
                ),
                Span::styled(format!("[{mark}] "), Style::default().fg(COLOR_SUCCESS)),
                Span::styled(task.text.clone(), text_style),
                Span::styled(
                    format!("  due {}", date::format_day(task.due)),
                    Style::default().fg(COLOR_WARNING),
                ),
            ];
            if row == board.cursor {
                for span in &mut spans {
                    span.style = span.style.add_modifier(Modifier::REVERSED);
                }
            }
            lines.push(Line::from(spans));
            row += 1;
        }
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn render_footer(frame: &mut Frame, board: &BoardApp, area: Rect) {
    let hint = board.footer_hint();
    let hint_span = Span::styled(hint, Style::default().fg(COLOR_INFO));
    let line = if let Some((status, kind)) = board.status_line() {
        let status_style = match kind {
            StatusKind::Error => Style::default()
                .fg(COLOR_ERROR)
                .add_modifier(Modifier::BOLD),
            StatusKind::Info => Style::default().fg(COLOR_WARNING),
        };
        Line::from(vec![
            hint_span,
            Span::raw("  |  "),
            Span::styled(status.clone(), status_style),
        ])
    } else {
        Line::from(hint_span)
    };
    let counts_line = Line::from(Span::styled(
        board.counts_summary(),
        Style::default().fg(COLOR_ACCENT),
    ));
    let widget = Paragraph::new(vec![line, counts_line])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(COLOR_BORDER_LIST)),
        );
    frame.render_widget(widget, area);
}

fn render_input_modal(frame: &mut Frame, area: Rect, title: &str, label: &str, input: &str) {
    let content_width = area.width.saturating_sub(8).min(48);
    let modal = centered_rect(content_width, 5, area);
    frame.render_widget(Clear, modal);

    let lines = vec![
        Line::from(Span::styled(
            format!("{label}:"),
            Style::default().fg(COLOR_MUTED_DARK),
        )),
        Line::from(vec![
            Span::styled(input.to_string(), Style::default().fg(COLOR_TEXT)),
            Span::styled("_", Style::default().fg(COLOR_INFO)),
        ]),
        Line::from(Span::styled(
            "enter confirm  esc cancel",
            Style::default().fg(COLOR_MUTED_DARK),
        )),
    ];

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, modal);
}

fn render_selector_modal(frame: &mut Frame, area: Rect, board: &BoardApp, index: usize) {
    let options = board.selector_options();
    let content_width = 30u16.min(area.width.saturating_sub(6));
    let height = (options.len() as u16 + 4).min(area.height.saturating_sub(4));
    let modal = centered_rect(content_width, height, area);
    frame.render_widget(Clear, modal);

    let mut lines: Vec<Line<'static>> = Vec::new();
    for (idx, option) in options.iter().enumerate() {
        // The placeholder entry sits first and reads differently.
        let base_style = if idx == 0 {
            Style::default()
                .fg(COLOR_MUTED)
                .add_modifier(Modifier::ITALIC)
        } else {
            Style::default().fg(COLOR_TEXT)
        };
        let mut span = Span::styled(option.clone(), base_style);
        if idx == index {
            span.style = span.style.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::from(span));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "enter choose  esc cancel",
        Style::default().fg(COLOR_MUTED_DARK),
    )));

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Teammate"))
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, modal);
}

fn render_reset_confirm_modal(frame: &mut Frame, area: Rect) {
    let content_width = area.width.saturating_sub(8).min(48);
    let modal = centered_rect(content_width, 7, area);
    frame.render_widget(Clear, modal);

    let lines = vec![
        Line::from(Span::styled(
            "Reset the board?",
            Style::default()
                .fg(COLOR_ERROR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Every teammate and task will be removed.",
            Style::default().fg(COLOR_WARNING),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "y confirm  esc cancel",
            Style::default().fg(COLOR_MUTED_DARK),
        )),
    ];

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Reset"))
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, modal);
}

fn render_help_modal(frame: &mut Frame, area: Rect) {
    let content_width = area.width.saturating_sub(8).min(52);
    let modal = centered_rect(content_width, 14, area);
    frame.render_widget(Clear, modal);

    let entries = [
        ("j/k", "move between tasks"),
        ("space", "toggle completion"),
        ("a", "add a teammate"),
        ("s", "choose the assignee"),
        ("n", "assign a task to the chosen teammate"),
        ("c", "clear completed tasks"),
        ("R", "reset the whole board"),
        ("q", "quit"),
    ];

    let mut lines: Vec<Line<'static>> = Vec::new();
    for (key, action) in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{key:<8}"),
                Style::default()
                    .fg(COLOR_INFO)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(action.to_string(), Style::default().fg(COLOR_TEXT)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "? close help",
        Style::default().fg(COLOR_MUTED_DARK),
    )));

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, modal);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
