use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
    ])
    .split(area);

    let status = if app.is_loading() {
        Line::from("Loading questions...".fg(Color::Yellow))
    } else {
        Line::from(
            format!(
                "{} Questions · {}s Time Limit · Multiple Choice",
                app.total_questions(),
                app.countdown().duration()
            )
            .fg(Color::DarkGray),
        )
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "CODE QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Test your coding knowledge".fg(Color::Gray)),
        Line::from(""),
        status,
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
        Line::from(""),
        Line::from("r reload questions  ·  q quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
