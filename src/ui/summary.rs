//! Card showing the last submitted contact

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let title = match &app.state.last_submission {
        Some(submission) => format!(
            " Last submitted {} UTC ",
            submission.submitted_at.format("%H:%M:%S")
        ),
        None => " Last submitted ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = match &app.state.last_submission {
        Some(submission) => {
            let lines: Vec<Line> = submission
                .summary()
                .lines()
                .map(|l| Line::from(l.to_string()))
                .collect();
            Paragraph::new(lines)
        }
        None => Paragraph::new("Nothing submitted yet.").style(Style::default().fg(Color::DarkGray)),
    };

    frame.render_widget(paragraph.block(block), area);
}
