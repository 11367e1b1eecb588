//! TUI header panel.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Screen title.
pub const TITLE: &str = "Calculadora d'IMC Avançada";

/// Subtitle under the title.
pub const SUBTITLE: &str = "Introdueix les teves dades";

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let text = vec![
        Line::from(vec![
            Span::styled(TITLE, theme.header_style()),
            Span::styled("  [?] info", theme.muted_style()),
        ]),
        Line::from(Span::styled(SUBTITLE, theme.muted_style())),
    ];

    let block = Block::default().borders(Borders::BOTTOM);
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
