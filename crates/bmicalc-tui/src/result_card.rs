//! Result card: BMI value, classification, healthy range, and advice.

use bmicalc_core::BmiResult;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::styles::{tag_color, ColorTheme};

/// Placeholder shown before the first calculation.
pub const EMPTY_HINT: &str = "Omple el formulari i prem CALCULAR.";

fn result_lines(result: &BmiResult, theme: &ColorTheme) -> Vec<Line<'static>> {
    let color = Style::default()
        .fg(tag_color(result.color))
        .add_modifier(Modifier::BOLD);
    let section = theme.muted_style().add_modifier(Modifier::BOLD);
    vec![
        Line::from("El teu IMC és"),
        Line::from(Span::styled(format!("{:.2}", result.bmi), color)),
        Line::from(Span::styled(result.classification.label(), color)),
        Line::default(),
        Line::from(Span::styled("Rang de Pes Saludable Estàndard", section)),
        Line::from(result.healthy_weight_range.describe()),
        Line::default(),
        Line::from(Span::styled("Consell Personalitzat", section)),
        Line::from(result.advice.text()),
    ]
}

/// Render the result card, or a hint when there is no result yet.
pub fn render_result(
    frame: &mut Frame,
    area: Rect,
    result: Option<&BmiResult>,
    theme: &ColorTheme,
) {
    let (lines, border) = match result {
        Some(result) => (
            result_lines(result, theme),
            Style::default().fg(tag_color(result.color)),
        ),
        None => (
            vec![Line::from(Span::styled(EMPTY_HINT, theme.muted_style()))],
            theme.muted_style(),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Resultat ")
        .border_style(border);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
