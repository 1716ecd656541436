use chrono::{Datelike, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Row, Table},
    Frame,
};
use studytrack_core::{format_duration, month_name, Weekday};

use crate::tui::app::App;

struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    done: Color,
    warn: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    done: Color::Green,
    warn: Color::Yellow,
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    draw_header(f, app, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[1]);

    draw_day_table(f, app, content_chunks[0]);
    draw_summary(f, app, content_chunks[1]);

    let footer = Paragraph::new(
        "j/k: Day | Space: +30min | h/l: View week | n: Next week | r: Reset | q: Quit",
    )
    .style(Style::default().fg(THEME.muted))
    .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let state = app.service.state();
    let week_label = if state.viewing_week == state.current_week {
        format!("Week {}", state.current_week)
    } else {
        format!("Week {} (viewing, {} open)", state.viewing_week, state.current_week)
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "STUDYTRACK",
            Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(week_label, Style::default().fg(THEME.text)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(header, area);
}

fn draw_day_table(f: &mut Frame, app: &mut App, area: Rect) {
    let state = app.service.state();

    let rows: Vec<Row> = Weekday::ALL
        .iter()
        .map(|day| {
            let minutes = state.weekly_minutes.get(*day);
            let progress = state.day_progress(*day);
            let progress_style = if progress >= 100.0 {
                Style::default().fg(THEME.done)
            } else if progress > 0.0 {
                Style::default().fg(THEME.warn)
            } else {
                Style::default().fg(THEME.muted)
            };

            Row::new(vec![
                Span::styled(day.label(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format_duration(minutes)),
                Span::styled(format!("{:.0}%", progress), progress_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),  // Day
            Constraint::Length(8),  // Studied
            Constraint::Min(6),     // Progress
        ],
    )
    .header(Row::new(vec!["Day", "Time", "Goal"]).style(Style::default().fg(THEME.warn)))
    .block(
        Block::default()
            .title(" Days ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_summary(f: &mut Frame, app: &App, area: Rect) {
    let state = app.service.state();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Weekly gauge
            Constraint::Length(3), // Monthly gauge
            Constraint::Min(1),    // History
        ])
        .split(area);

    let weekly = state.weekly_progress();
    let weekly_gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" Week: {} ", format_duration(state.weekly_total())))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(if weekly >= 100.0 { THEME.done } else { THEME.primary }))
        .ratio((weekly / 100.0).min(1.0))
        .label(format!("{:.0}%", weekly));
    f.render_widget(weekly_gauge, chunks[0]);

    let monthly = state.monthly_progress();
    let monthly_gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(
                    " {}: {} ",
                    month_name(Local::now().month0()),
                    format_duration(state.monthly_minutes)
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(if monthly >= 100.0 { THEME.done } else { THEME.primary }))
        .ratio((monthly / 100.0).min(1.0))
        .label(format!("{:.0}%", monthly));
    f.render_widget(monthly_gauge, chunks[1]);

    let mut history_lines = Vec::new();
    if state.week_history.is_empty() {
        history_lines.push(Line::from(Span::styled(
            "No closed weeks yet.",
            Style::default().fg(THEME.muted),
        )));
    } else {
        for entry in &state.week_history {
            history_lines.push(Line::from(vec![
                Span::styled(
                    format!("Week {:<3}", entry.week),
                    Style::default().fg(THEME.text).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{:<8}", format_duration(entry.minutes))),
                Span::styled(entry.date.clone(), Style::default().fg(THEME.muted)),
            ]));
        }
    }

    let history = Paragraph::new(history_lines).block(
        Block::default()
            .title(" History ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(history, chunks[2]);
}
