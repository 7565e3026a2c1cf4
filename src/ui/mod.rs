mod menu;
mod paused;
mod quiz;
mod result;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::GameMode;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let [header, notice, body] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(if app.notice().is_some() { 1 } else { 0 }),
        Constraint::Fill(1),
    ])
    .areas(area);

    render_header(frame, header, app);
    if let Some(message) = app.notice() {
        render_notice(frame, notice, message);
    }

    match app.mode {
        GameMode::Menu => menu::render(frame, body, app),
        GameMode::Playing => quiz::render(frame, body, app),
        GameMode::Paused => paused::render(frame, body, app),
        GameMode::Finished => result::render(frame, body, app),
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    if !matches!(app.mode, GameMode::Playing | GameMode::Paused) {
        return;
    }
    let score = format!("Score: {} / {} ", app.score(), app.total_questions());
    let widget = Paragraph::new(score)
        .alignment(Alignment::Right)
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(widget, area);
}

fn render_notice(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(vec![
        Span::styled(message, Style::default().fg(Color::Red).bold()),
        Span::styled("  r retry", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::backend::TestBackend;

    use super::*;
    use crate::config::GameSettings;
    use crate::data::{FakeSource, Reply, sample_questions};
    use crate::scheduler::Scheduler;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        let (scheduler, _rx) = Scheduler::new();
        let source = Arc::new(FakeSource::new(Reply::Fail, Reply::Fail));
        App::new(GameSettings::default(), source, scheduler)
            .with_seed(2)
            .with_questions(sample_questions())
    }

    #[tokio::test(start_paused = true)]
    async fn test_renders_every_mode() {
        let mut app = app();
        assert!(screen_text(&app).contains("CODE QUIZ"));

        app.start().unwrap();
        let playing = screen_text(&app);
        assert!(playing.contains("Score: 0 / 5"));
        assert!(playing.contains("1:00"));

        app.select_highlighted();
        let answered = screen_text(&app);
        assert!(answered.contains("Correct!") || answered.contains("Incorrect."));

        app.pause();
        assert!(screen_text(&app).contains("PAUSED"));

        app.stop();
        let finished = screen_text(&app);
        assert!(finished.contains("GAME COMPLETE"));
        assert!(finished.contains("Play again"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_notice_is_shown_in_menu() {
        let mut app = app().with_questions(Vec::new());
        let _ = app.start();
        assert!(screen_text(&app).contains("No questions available"));
    }
}
