//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Horizontal padding inside the border (both sides together)
const PADDING: u16 = 4;

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub accent: Color,
    /// Message content, `\n` separates paragraphs
    pub message: &'a str,
    /// Hint text shown at the bottom
    pub hint: Vec<Span<'a>>,
    pub max_width: u16,
}

/// Standard "Press Enter or Esc to dismiss" hint
pub fn dismiss_hint<'a>() -> Vec<Span<'a>> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ]
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let max_line_width = config.max_width.saturating_sub(PADDING) as usize;
    let wrapped_lines = wrap_text(config.message, max_line_width);
    let dialog_area = dialog_rect(frame.area(), &config, &wrapped_lines);

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped_lines.into_iter().map(Line::from));
    if !config.hint.is_empty() {
        content.push(Line::from(""));
        content.push(Line::from(config.hint));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.accent))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Size the dialog to its content and center it in `area`
fn dialog_rect(area: Rect, config: &DialogConfig, lines: &[String]) -> Rect {
    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;
    let width = (content_width + PADDING + 2)
        .min(config.max_width)
        .min(area.width);

    // title + blank + message + (blank + hint) + borders
    let hint_lines = if config.hint.is_empty() { 0 } else { 2 };
    let height = (2 + lines.len() as u16 + hint_lines + 2)
        .max(5)
        .min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            if current_len + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
