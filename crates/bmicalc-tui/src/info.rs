//! "What is BMI" dialog drawn over the form.

use bmicalc_core::about::{ABOUT_PARAGRAPHS, ABOUT_TITLE};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Rect of `percent_x` × `percent_y` centered in `area`.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Render the dialog centered in `area`.
pub fn render_info(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let popup = centered_rect(70, 70, area);

    let mut lines = Vec::new();
    for paragraph in ABOUT_PARAGRAPHS {
        lines.push(Line::from(paragraph));
        lines.push(Line::default());
    }
    lines.push(
        Line::from(Span::styled("[ Entesos ]", theme.selected_style()))
            .alignment(Alignment::Center),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {ABOUT_TITLE} "))
        .title_style(theme.header_style())
        .border_style(theme.header_style());

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        popup,
    );
}
