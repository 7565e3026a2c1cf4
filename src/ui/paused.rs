use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
    ])
    .split(area);

    let stat = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:>16}  ", label), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{:<8}", value), Style::default().fg(Color::White).bold()),
        ])
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME PAUSED",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from("Take your time! Resume when you're ready.".fg(Color::Gray)),
        Line::from(""),
        stat("Current Score", app.score().to_string()),
        stat("Question", app.current_question_number().to_string()),
        stat("Remaining", app.remaining_questions().to_string()),
        stat("Time Left", app.countdown().display()),
        Line::from(""),
        Line::from("p resume  ·  m main menu  ·  s end game  ·  q quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}
