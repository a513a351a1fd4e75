use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::render_controls;
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),   // Module checkboxes
        Constraint::Length(3), // Count input
        Constraint::Length(1), // Controls
    ])
    .margin(1)
    .split(area);

    let setup = app.setup();
    let lines: Vec<Line> = app
        .modules()
        .iter()
        .zip(&setup.selected)
        .enumerate()
        .map(|(index, (module, checked))| {
            let is_cursor = index == setup.cursor;
            let style = if is_cursor {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let checkbox = if *checked { "[x]" } else { "[ ]" };

            Line::from(vec![
                Span::styled(if is_cursor { " > " } else { "   " }, style),
                Span::styled(format!("{} ", checkbox), style),
                Span::styled(module.name.as_str(), style),
            ])
        })
        .collect();

    let modules = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Modules ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(modules, chunks[0]);

    let count = Paragraph::new(format!("{}_", setup.count_input))
        .fg(Color::White)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(" Number of questions ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(count, chunks[1]);

    render_controls(
        frame,
        chunks[2],
        "j/k navigate  ·  space toggle  ·  0-9 count  ·  enter start  ·  esc back",
    );
}
