mod modules;
mod parts;
mod quiz;
mod setup;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{App, NoticeLevel};
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Fill(1),   // Screen
        Constraint::Length(1), // Notice
    ])
    .split(area);

    render_header(frame, chunks[0], app);

    match app.state {
        AppState::Modules => modules::render(frame, chunks[1], app),
        AppState::Parts => parts::render(frame, chunks[1], app),
        AppState::TestSetup => setup::render(frame, chunks[1], app),
        AppState::Quiz => quiz::render(frame, chunks[1], app),
    }

    render_notice(frame, chunks[2], app);

    if app.is_loading() {
        render_loading(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Span::styled(
        app.title(),
        Style::default().fg(Color::White).bold(),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Quiz ")
            .title_style(Style::default().fg(Color::Cyan).bold()),
    );
    frame.render_widget(header, area);
}

fn render_notice(frame: &mut Frame, area: Rect, app: &App) {
    let Some(notice) = app.notice() else {
        return;
    };
    let color = match notice.level {
        NoticeLevel::Info => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    };
    let widget = Paragraph::new(notice.message.as_str())
        .alignment(Alignment::Center)
        .fg(color)
        .bold();
    frame.render_widget(widget, area);
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let popup = centered(area, 30, 5);
    frame.render_widget(Clear, popup);

    let widget = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow).bold(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, popup);
}

/// A `width` x `height` rectangle centered in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);
    Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .split(vertical[1])[1]
}

/// One selectable list row with a cursor marker.
fn list_line<'a>(text: impl Into<String>, selected: bool, trailing: Option<Span<'a>>) -> Line<'a> {
    let style = if selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let marker = if selected { ">" } else { " " };

    let mut spans = vec![
        Span::styled(format!(" {} ", marker), style),
        Span::styled(text.into(), style),
    ];
    spans.extend(trailing);
    Line::from(spans)
}

fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
