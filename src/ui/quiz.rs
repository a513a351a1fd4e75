use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use super::render_controls;
use crate::app::{App, QuestionView};
use crate::models::QuestionRecord;
use crate::quiz::{AnswerResult, Outcome, QuizSession};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1), // Status and position
        Constraint::Length(1), // Progress bar
        Constraint::Length(4), // Question text
        Constraint::Min(6),    // Options
        Constraint::Length(1), // Feedback
        Constraint::Length(palette_height(session.len(), area.width)),
        Constraint::Length(1), // Controls or jump prompt
    ])
    .margin(1)
    .split(area);

    render_status(frame, chunks[0], session);
    render_progress(frame, chunks[1], session);
    render_question_text(frame, chunks[2], &session.current().prompt);
    render_options(
        frame,
        chunks[3],
        session.current(),
        app.question_view(),
        session.is_locked(),
    );
    render_feedback(frame, chunks[4], app.question_view());
    render_palette(frame, chunks[5], session);

    match app.jump_input() {
        Some(input) => render_jump_prompt(frame, chunks[6], input, session.len()),
        None => render_controls(frame, chunks[6], &controls_text(session)),
    }
}

/// Rows needed to show one cell per question, plus borders.
fn palette_height(questions: usize, width: u16) -> u16 {
    let per_row = usize::from(width.saturating_sub(4) / PALETTE_CELL).max(1);
    let rows = questions.div_ceil(per_row).clamp(1, 6);
    rows as u16 + 2
}

fn render_status(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let (status, color) = if session.is_locked() {
        ("Completed", Color::Green)
    } else {
        ("Not completed", Color::DarkGray)
    };

    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);
    frame.render_widget(Paragraph::new(status).fg(color), halves[0]);

    let position = format!(
        "{}/{}  ·  {} completed",
        session.current_index() + 1,
        session.len(),
        session.completed_count()
    );
    frame.render_widget(
        Paragraph::new(position)
            .alignment(Alignment::Right)
            .fg(Color::DarkGray),
        halves[1],
    );
}

fn render_progress(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let ratio = session.progress_fraction().clamp(0.0, 1.0);
    let widget = Gauge::default()
        .ratio(ratio)
        .label(format!("{:.0}%", ratio * 100.0))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray));
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &QuestionRecord,
    view: &QuestionView,
    locked: bool,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(view.order.len() * 2);

    for (index, label) in view.order.iter().enumerate() {
        let Some(text) = question.option(*label) else {
            continue;
        };
        let is_cursor = index == view.cursor && !locked;

        let style = if locked && *label == question.answer {
            Style::default().fg(Color::Green).bold()
        } else if view.wrong_picks.contains(label) {
            Style::default().fg(Color::Red)
        } else if locked {
            Style::default().fg(Color::DarkGray)
        } else if is_cursor {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_cursor { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(text, style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let line = match view.feedback {
        Some(AnswerResult::Correct) => Span::styled(
            "✓ Correct!",
            Style::default().fg(Color::Green).bold(),
        ),
        Some(AnswerResult::Wrong) => Span::styled(
            "✗ Wrong, try again!",
            Style::default().fg(Color::Red).bold(),
        ),
        None => return,
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn palette_style(outcome: Outcome) -> Style {
    match outcome {
        Outcome::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        Outcome::Wrong => Style::default().fg(Color::White).bg(Color::Red),
        Outcome::Unanswered => Style::default().fg(Color::Gray),
    }
}

/// Width of one palette cell: a right-aligned number plus spacing.
const PALETTE_CELL: u16 = 5;

fn render_palette(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .title_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);

    let per_row = usize::from(inner.width / PALETTE_CELL).max(1);
    let visible_rows = usize::from(inner.height).max(1);
    let current = session.current_index();
    let first_row = (current / per_row).saturating_sub(visible_rows - 1);

    let outcomes = session.all_results();
    let start = (first_row * per_row).min(outcomes.len());
    let end = (start + visible_rows * per_row).min(outcomes.len());

    let lines: Vec<Line> = outcomes[start..end]
        .chunks(per_row)
        .enumerate()
        .map(|(row, cells)| {
            let spans = cells.iter().enumerate().flat_map(|(col, outcome)| {
                let index = start + row * per_row + col;
                let mut style = palette_style(*outcome);
                if index == current {
                    style = style.bold().add_modifier(Modifier::REVERSED);
                }
                [
                    Span::styled(format!("{:>3} ", index + 1), style),
                    Span::raw(" "),
                ]
            });
            Line::from(spans.collect::<Vec<_>>())
        })
        .collect();

    let title = if start == 0 && end == outcomes.len() {
        " Questions ".to_string()
    } else {
        format!(" Questions {}-{} of {} ", start + 1, end, outcomes.len())
    };

    frame.render_widget(Paragraph::new(lines).block(block.title(title)), area);
}

fn controls_text(session: &QuizSession) -> String {
    let prev = if session.is_first() { "" } else { "← prev  ·  " };
    let next = if session.is_last() { "" } else { "→ next  ·  " };
    let answer = if session.is_locked() {
        ""
    } else {
        "j/k choose  ·  enter or a-d answer  ·  "
    };
    format!("{}{}{}: jump  ·  esc back  ·  q quit", prev, next, answer)
}

fn render_jump_prompt(frame: &mut Frame, area: Rect, input: &str, total: usize) {
    let widget = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Go to question (1-{}): ", total),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(format!("{}_", input), Style::default().fg(Color::White).bold()),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::LoadOutcome;
    use crate::data::Catalog;
    use crate::models::OptionLabel;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn quiz_app(len: usize) -> App {
        let questions = (0..len)
            .map(|i| {
                QuestionRecord::new(
                    format!("Q{}", i + 1),
                    [Some("x".into()), Some("y".into()), None, None],
                    OptionLabel::A,
                )
            })
            .collect();
        let mut app = App::new(Catalog::default());
        app.finish_load(LoadOutcome::CustomTest(Ok(questions)));
        app
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_palette_scrolls_to_current_question() {
        let mut app = quiz_app(200);
        app.jump_to(149);

        let screen = draw(&app);
        assert!(screen.contains("150/200"));
        assert!(screen.contains("150 "));
        assert!(!screen.contains("  1  "));
    }

    #[test]
    fn test_short_palette_shows_every_question() {
        let app = quiz_app(12);
        let screen = draw(&app);
        assert!(screen.contains(" Questions "));
        assert!(screen.contains("  1 "));
        assert!(screen.contains(" 12 "));
        assert!(!screen.contains(" of 12 "));
    }

    #[test]
    fn test_palette_height_is_capped() {
        assert_eq!(palette_height(10, 80), 3);
        assert_eq!(palette_height(500, 80), 8);
    }
}
