use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::{list_line, render_controls};
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
        .margin(1)
        .split(area);

    let cursor = app.home_cursor();
    let mut lines: Vec<Line> = Vec::with_capacity(app.home_entries() * 2);
    for (index, module) in app.modules().iter().enumerate() {
        lines.push(list_line(module.name.as_str(), index == cursor, None));
        lines.push(Line::from(""));
    }

    let custom_index = app.modules().len();
    lines.push(list_line(
        "Custom test",
        cursor == custom_index,
        Some(Span::styled(
            "  random questions across modules",
            Style::default().fg(Color::DarkGray),
        )),
    ));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Modules ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, chunks[0]);

    render_controls(frame, chunks[1], "j/k navigate  ·  enter open  ·  q quit");
}
