//! Input form panel: sex selector, three text fields, and the calculate button.

use bmicalc_core::validation::Field;
use bmicalc_core::Sex;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::Focus;
use crate::styles::ColorTheme;

/// Label column width.
const LABEL_WIDTH: usize = 17;

/// Rows taken by the form without an error message, borders included.
const BASE_HEIGHT: u16 = 9;

/// What the form shows.
#[derive(Debug, Clone, Copy)]
pub struct FormView<'a> {
    pub sex: Option<Sex>,
    pub weight: &'a str,
    pub height: &'a str,
    pub age: &'a str,
    pub focus: Focus,
    pub error: Option<&'a str>,
}

fn marker(focused: bool) -> &'static str {
    if focused {
        "› "
    } else {
        "  "
    }
}

fn label_style(focused: bool, theme: &ColorTheme) -> Style {
    if focused {
        theme.focus_style()
    } else {
        theme.text_style()
    }
}

fn sex_line<'a>(view: &FormView<'a>, theme: &ColorTheme) -> Line<'a> {
    let focused = view.focus == Focus::Sex;
    let mut spans = vec![
        Span::styled(marker(focused), theme.focus_style()),
        Span::styled(
            format!("{:<LABEL_WIDTH$}", Field::Sex.label()),
            label_style(focused, theme),
        ),
    ];
    for sex in Sex::ALL {
        let style = if view.sex == Some(sex) {
            theme.selected_style()
        } else {
            theme.unselected_style()
        };
        spans.push(Span::styled(format!(" {} ", sex.label()), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn text_line<'a>(field: Field, value: &'a str, focus: Focus, theme: &ColorTheme) -> Line<'a> {
    let focused = focus.field() == Some(field);
    let cursor = if focused { "_" } else { "" };
    Line::from(vec![
        Span::styled(marker(focused), theme.focus_style()),
        Span::styled(
            format!("{:<LABEL_WIDTH$}", field.label()),
            label_style(focused, theme),
        ),
        Span::styled(value, theme.text_style()),
        Span::styled(cursor, theme.focus_style()),
    ])
}

fn button_line(focused: bool, theme: &ColorTheme) -> Line<'static> {
    let style = if focused {
        theme.selected_style()
    } else {
        theme.header_style().add_modifier(Modifier::REVERSED)
    };
    Line::from(Span::styled("  CALCULAR  ", style)).alignment(Alignment::Center)
}

/// Greedy word wrap of `text` into lines at most `width` characters wide.
///
/// Words longer than `width` are split.
#[must_use]
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            lines.push(chars.drain(..width).collect());
        }
        let len = chars.len();
        if len == 0 {
            continue;
        }
        if current_len > 0 && current_len + 1 + len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(chars);
        current_len += len;
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Inner text width of a bordered panel `width` columns wide.
fn inner_width(width: u16) -> usize {
    usize::from(width.saturating_sub(2))
}

/// Height the form needs in a panel `width` columns wide.
#[must_use]
pub fn form_height(error: Option<&str>, width: u16) -> u16 {
    let error_lines = error.map_or(0, |e| wrap_words(e, inner_width(width)).len());
    BASE_HEIGHT.saturating_add(u16::try_from(error_lines).unwrap_or(u16::MAX))
}

/// Render the form panel.
pub fn render_form(frame: &mut Frame, area: Rect, view: &FormView<'_>, theme: &ColorTheme) {
    let mut lines = vec![
        sex_line(view, theme),
        Line::default(),
        text_line(Field::Weight, view.weight, view.focus, theme),
        text_line(Field::Height, view.height, view.focus, theme),
        text_line(Field::Age, view.age, view.focus, theme),
        Line::default(),
    ];
    if let Some(error) = view.error {
        for part in wrap_words(error, inner_width(area.width)) {
            lines.push(
                Line::from(Span::styled(part, theme.error_style())).alignment(Alignment::Center),
            );
        }
    }
    lines.push(button_line(view.focus == Focus::Calculate, theme));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Dades ")
        .border_style(theme.muted_style());
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
