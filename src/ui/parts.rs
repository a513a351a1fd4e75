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

    let parts = app.loaded_module().map_or(&[][..], |loaded| loaded.parts.as_slice());

    let lines: Vec<Line> = if parts.is_empty() {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "No questions found in this module.",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    } else {
        parts
            .iter()
            .enumerate()
            .map(|(index, part)| {
                list_line(
                    part.label.as_str(),
                    index == app.part_cursor(),
                    Some(Span::styled(
                        format!("  {} questions", part.len()),
                        Style::default().fg(Color::DarkGray),
                    )),
                )
            })
            .collect()
    };

    let widget = Paragraph::new(lines)
        .alignment(if parts.is_empty() {
            Alignment::Center
        } else {
            Alignment::Left
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(" Parts ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, chunks[0]);

    render_controls(
        frame,
        chunks[1],
        "j/k navigate  ·  enter start  ·  esc back  ·  q quit",
    );
}
