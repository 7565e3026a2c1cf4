use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::scoreboard::{ScoreTier, Summary};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let summary = app.summary();
    let grade_color = get_grade_color(summary.tier);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], &summary, grade_color);
    render_details(frame, chunks[2], &summary);
    render_controls(frame, chunks[3]);
}

fn get_grade_color(tier: ScoreTier) -> Color {
    match tier {
        ScoreTier::Excellent => Color::Green,
        ScoreTier::Great => Color::Cyan,
        ScoreTier::Good => Color::Yellow,
        ScoreTier::Studying | ScoreTier::Practice => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, summary: &Summary, grade_color: Color) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME COMPLETE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({}%)",
                summary.score, summary.total_questions, summary.percentage
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(Span::styled(summary.message(), Style::default().fg(grade_color))),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_details(frame: &mut Frame, area: Rect, summary: &Summary) {
    let row = |label: &'static str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("{:<28}", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(color).bold()),
        ])
    };

    let mut lines = vec![
        row("Accuracy", format!("{}%", summary.accuracy), Color::White),
        row("Correct Answers", summary.correct.to_string(), Color::Green),
        row("Incorrect Answers", summary.incorrect.to_string(), Color::Red),
        row("Time Elapsed", summary.elapsed.clone(), Color::White),
    ];
    if let Some(average) = &summary.average_per_question {
        lines.push(row("Average Time per Question", average.clone(), Color::White));
    }

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::new(4, 4, 1, 0)));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("enter Play again  ·  m main menu  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
