//! Screen layout and rendering
//!
//! Pure view code: everything here reads the controller's derived values and
//! paints the single screen of timer header, current-activity banner and
//! agenda list.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph};

use crate::state::{ItemStatus, ScheduleTimer};
use crate::utils::format_clock;

use super::UiState;
use super::theme::Theme;

pub fn draw(frame: &mut Frame, timer: &ScheduleTimer, ui: &mut UiState) {
    let theme = ui.theme();
    let areas = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Min(5),
        Constraint::Length(2),
    ])
    .split(frame.area());

    draw_header(frame, areas[0], timer, &theme);
    draw_banner(frame, areas[1], timer, &theme);
    draw_agenda(frame, areas[2], timer, ui, &theme);
    draw_footer(frame, areas[3], ui, &theme);
}

/// Timer header: agenda title, wall clock, countdown readout and progress.
fn draw_header(frame: &mut Frame, area: Rect, timer: &ScheduleTimer, theme: &Theme) {
    let agenda = timer.agenda();
    let state = timer.state();

    let mut title = vec![Span::styled(
        format!(" {} ", agenda.title()),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(subtitle) = agenda.subtitle() {
        title.push(Span::styled(
            format!("· {} ", subtitle),
            Style::default().fg(theme.text_muted),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Line::from(title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    let clock = Line::from(vec![
        Span::styled("Clock     ", Style::default().fg(theme.text_muted)),
        Span::styled(
            format_clock(&state.wall_clock_now),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(clock), rows[0]);

    let urgent = timer.is_urgent();
    let mut countdown_style = theme.countdown_style(urgent);
    if urgent && state.remaining_seconds % 2 == 1 {
        // Pulse on alternating seconds during the final minute
        countdown_style = countdown_style.add_modifier(Modifier::REVERSED);
    }
    let run_state = if state.is_running {
        Span::styled("▶ running", Style::default().fg(theme.success))
    } else if state.is_expired() {
        Span::styled("■ expired", Style::default().fg(theme.urgent))
    } else {
        Span::styled("⏸ paused", Style::default().fg(theme.text_muted))
    };
    let countdown = Line::from(vec![
        Span::styled("Countdown ", Style::default().fg(theme.text_muted)),
        Span::styled(timer.formatted_countdown(), countdown_style),
        Span::raw("  "),
        run_state,
    ]);
    frame.render_widget(Paragraph::new(countdown), rows[1]);

    let progress = timer.progress_percent();
    let gauge_color = if urgent { theme.urgent } else { theme.accent };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(gauge_color))
        .ratio(progress / 100.0)
        .label(Span::styled(
            format!("{}%", progress.round() as u8),
            Style::default().fg(theme.text),
        ));
    frame.render_widget(gauge, rows[2]);
}

/// Current-activity banner: label, time span, duration and remaining time.
fn draw_banner(frame: &mut Frame, area: Rect, timer: &ScheduleTimer, theme: &Theme) {
    let item = timer.current_item();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.category_color(item.category)))
        .title(Span::styled(
            " Current ",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            item.label.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{}  ({} minutes)", item.time_span(), item.duration_minutes()),
            Style::default().fg(theme.text_muted),
        )),
        Line::from(vec![
            Span::styled("remaining ", Style::default().fg(theme.text_muted)),
            Span::styled(
                timer.formatted_countdown(),
                theme.countdown_style(timer.is_urgent()),
            ),
            Span::styled(
                format!("  ·  {}% elapsed", timer.progress_percent().round() as u8),
                Style::default().fg(theme.text_muted),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// The agenda list; keeps the current selection visible.
fn draw_agenda(frame: &mut Frame, area: Rect, timer: &ScheduleTimer, ui: &mut UiState, theme: &Theme) {
    let selected = timer.state().selected_id;

    let rows: Vec<ListItem> = timer
        .agenda()
        .items()
        .iter()
        .map(|item| {
            let status = timer.item_status(item);
            let (badge, badge_style) = theme.status_badge(status);
            let (label_style, time_style) = match status {
                ItemStatus::Current => (
                    Style::default()
                        .fg(theme.highlight_fg)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(theme.highlight_fg),
                ),
                _ => (
                    Style::default(),
                    Style::default().fg(theme.text_muted),
                ),
            };

            let line = Line::from(vec![
                Span::styled(
                    format!(" {:>2} ", item.id),
                    Style::default().fg(theme.category_color(item.category)),
                ),
                Span::styled(format!("{:<28}", item.label), label_style),
                Span::styled(item.time_span(), time_style),
                Span::raw("  "),
                Span::styled(badge, badge_style),
            ]);
            ListItem::new(line).style(theme.item_style(status))
        })
        .collect();

    let list = List::new(rows).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(
                " Agenda ",
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
    );

    ui.list.select(Some(selected as usize - 1));
    frame.render_stateful_widget(list, area, &mut ui.list);
}

/// Key hints plus the pending digit entry or the latest command notice.
fn draw_footer(frame: &mut Frame, area: Rect, ui: &UiState, theme: &Theme) {
    let key = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
    let plain = Style::default().fg(theme.text_muted);

    let hints = Line::from(vec![
        Span::styled(" space", key),
        Span::styled(" start/stop  ", plain),
        Span::styled("r", key),
        Span::styled(" reset  ", plain),
        Span::styled("←/→", key),
        Span::styled(" prev/next  ", plain),
        Span::styled("digits+enter", key),
        Span::styled(" jump  ", plain),
        Span::styled("t", key),
        Span::styled(" theme  ", plain),
        Span::styled("q", key),
        Span::styled(" quit", plain),
    ]);

    let status = if !ui.entry.is_empty() {
        Line::from(Span::styled(
            format!(" select: {}▏", ui.entry.as_str()),
            Style::default().fg(theme.accent),
        ))
    } else if let Some(notice) = &ui.notice {
        Line::from(Span::styled(
            format!(" {}", notice),
            Style::default().fg(theme.urgent),
        ))
    } else {
        Line::default()
    };

    frame.render_widget(Paragraph::new(vec![hints, status]), area);
}
