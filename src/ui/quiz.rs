use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::presenter::{ChoiceState, PresentedQuestion};
use crate::timer::TimerSeverity;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (Some(question), Some(presented)) = (app.current_question(), app.presented()) else {
        let waiting = Paragraph::new("Waiting for question...")
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(waiting, area);
        return;
    };

    let code = question.code_snippet.as_deref();
    let chunks = create_layout(area, code.is_some());

    render_status(frame, chunks[0], app);
    render_question_text(frame, chunks[1], &question.question_text);

    let mut next = 2;
    if let Some(code) = code {
        render_code_block(frame, chunks[next], code);
        next += 1;
    }

    render_options(frame, chunks[next], presented, app.highlighted());
    render_result(frame, chunks[next + 1], presented);
    render_controls(frame, chunks[next + 2]);
}

fn create_layout(area: Rect, has_code: bool) -> std::rc::Rc<[Rect]> {
    if has_code {
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(10),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .margin(1)
        .split(area)
    } else {
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .margin(2)
        .split(area)
    }
}

fn timer_color(severity: TimerSeverity) -> Color {
    match severity {
        TimerSeverity::Normal => Color::Green,
        TimerSeverity::Warning => Color::Yellow,
        TimerSeverity::Danger => Color::Red,
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let countdown = app.countdown();
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", countdown.display()),
            Style::default().fg(timer_color(countdown.severity())).bold(),
        ),
        Span::styled(
            format!(
                "   Question {} of {}  ·  {}% ",
                app.current_question_number(),
                app.total_questions(),
                app.progress_percent()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let mut content = vec![Line::from("What does this mean?".fg(Color::Cyan).bold())];
    content.extend(
        text.lines()
            .map(|line| Line::styled(line, Style::default().fg(Color::White))),
    );
    let widget = Paragraph::new(content).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_code_block(frame: &mut Frame, area: Rect, code: &str) {
    let code_lines: Vec<Line> = code
        .lines()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Yellow))))
        .collect();

    let widget = Paragraph::new(code_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Code ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn choice_style(state: ChoiceState, is_highlighted: bool) -> Style {
    match state {
        ChoiceState::Correct => Style::default().fg(Color::Green).bold(),
        ChoiceState::Incorrect => Style::default().fg(Color::Red).bold(),
        ChoiceState::Idle if is_highlighted => Style::default().fg(Color::Cyan).bold(),
        ChoiceState::Idle => Style::default().fg(Color::Gray),
    }
}

fn render_options(frame: &mut Frame, area: Rect, presented: &PresentedQuestion, highlighted: usize) {
    let answered = presented.is_answered();
    let mut lines: Vec<Line> = Vec::with_capacity(presented.choices().len() * 2);

    for (index, choice) in presented.choices().iter().enumerate() {
        let is_highlighted = !answered && index == highlighted;
        let style = choice_style(presented.choice_state(index), is_highlighted);
        let marker = match presented.choice_state(index) {
            ChoiceState::Correct => "+",
            ChoiceState::Incorrect => "-",
            ChoiceState::Idle if is_highlighted => ">",
            ChoiceState::Idle => " ",
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index % OPTION_LABELS.len()]), style),
            Span::styled(choice.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(" Options ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_result(frame: &mut Frame, area: Rect, presented: &PresentedQuestion) {
    let Some(selected) = presented.selected() else {
        return;
    };

    let line = if presented.choice_state(selected) == ChoiceState::Correct {
        Line::from("Correct!".fg(Color::Green).bold())
    } else {
        Line::from(vec![
            "Incorrect. ".fg(Color::Red).bold(),
            Span::styled(
                format!("The correct answer was: {}", presented.correct_answer()),
                Style::default().fg(Color::Gray),
            ),
        ])
    };

    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter select  ·  p pause  ·  s stop  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
