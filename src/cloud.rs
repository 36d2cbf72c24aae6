//! Word-cloud rendering - pure layout from (word, weight) pairs to styled lines

use ratatui::prelude::*;

use crate::models::WordFrequency;

/// Rows a card reserves for its cloud
pub const CLOUD_HEIGHT: u16 = 4;

/// Shown when an article has no word-frequency data
pub const EMPTY_CLOUD_TEXT: &str = "No word cloud data available";

/// Fixed palette cycled across words
const PALETTE: [Color; 6] = [
    Color::Blue,
    Color::Yellow,
    Color::Green,
    Color::Red,
    Color::Magenta,
    Color::Cyan,
];

/// Lay out a word cloud into at most [`CLOUD_HEIGHT`] rows of `width` cells.
///
/// Weight maps to an emphasis tier on a square-root scale between the
/// batch's bounds, the terminal stand-in for font size; color cycles
/// through the fixed palette. An empty input renders the placeholder
/// instead of an empty canvas.
pub fn cloud_lines(words: &[WordFrequency], width: u16) -> Vec<Line<'static>> {
    if words.is_empty() {
        return vec![Line::from(Span::styled(
            EMPTY_CLOUD_TEXT,
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let (min, max) = weight_bounds(words);
    let width = width.max(1) as usize;

    let mut lines: Vec<Line> = Vec::new();
    let mut spans: Vec<Span> = Vec::new();
    let mut line_len = 0usize;

    for (i, word) in words.iter().enumerate() {
        let len = word.text.chars().count();
        let sep = usize::from(!spans.is_empty());

        if !spans.is_empty() && line_len + sep + len > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            line_len = 0;
            if lines.len() >= CLOUD_HEIGHT as usize {
                // Fixed viewport; words past it are clipped
                return lines;
            }
        }

        if !spans.is_empty() {
            spans.push(Span::raw(" "));
            line_len += 1;
        }
        spans.push(Span::styled(
            word.text.clone(),
            weight_style(word.value, min, max, i),
        ));
        line_len += len;
    }

    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }

    lines
}

fn weight_bounds(words: &[WordFrequency]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for word in words {
        min = min.min(word.value);
        max = max.max(word.value);
    }
    (min, max)
}

/// Map a weight to its style: sqrt-scaled emphasis tier plus the cycled
/// palette color
fn weight_style(value: f64, min: f64, max: f64, index: usize) -> Style {
    let t = if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0).sqrt()
    } else {
        1.0
    };

    let style = Style::default().fg(PALETTE[index % PALETTE.len()]);
    match (t * 3.0).round() as u8 {
        0 => style.add_modifier(Modifier::DIM),
        1 => style,
        2 => style.add_modifier(Modifier::BOLD),
        _ => style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    }
}
