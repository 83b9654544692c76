use std::sync::Arc;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use showcase_core::catalog::MediaItem;
use showcase_core::reveal::VisualState;

use super::text::{apply_reveal, fit_line, swatch_line, truncate_str};
use crate::theme::Theme;

/// Rows taken by one card, borders included
pub const CARD_HEIGHT: usize = 8;
const MIN_CARD_WIDTH: usize = 28;
const MAX_COLUMNS: usize = 3;
const GAP: usize = 2;

/// Number of card columns that fit in `width`
pub fn columns_for(width: usize) -> usize {
    ((width + GAP) / (MIN_CARD_WIDTH + GAP)).clamp(1, MAX_COLUMNS)
}

/// Lay items out in a grid, each card sampled through `state_of(position)`
pub fn grid<'a>(
    items: impl Iterator<Item = &'a Arc<MediaItem>>,
    selected: Option<usize>,
    state_of: impl Fn(usize) -> VisualState,
    theme: &Theme,
    width: usize,
) -> Vec<Line<'static>> {
    let columns = columns_for(width);
    let card_width = (width.saturating_sub(GAP * (columns - 1)) / columns).max(8);
    let items: Vec<&Arc<MediaItem>> = items.collect();

    let mut lines = Vec::new();
    for (row, chunk) in items.chunks(columns).enumerate() {
        let cards: Vec<Vec<Line<'static>>> = chunk
            .iter()
            .enumerate()
            .map(|(col, item)| {
                let position = row * columns + col;
                let card = card(item, selected == Some(position), theme, card_width);
                apply_reveal(card, state_of(position), theme, card_width)
                    .into_iter()
                    .map(|line| fit_line(line, card_width))
                    .collect()
            })
            .collect();

        for i in 0..CARD_HEIGHT {
            let mut spans: Vec<Span<'static>> = Vec::new();
            for (col, card) in cards.iter().enumerate() {
                if col > 0 {
                    spans.push(Span::raw(" ".repeat(GAP)));
                }
                if let Some(line) = card.get(i) {
                    spans.extend(line.spans.iter().cloned());
                }
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::default());
    }
    lines
}

/// One bordered card: media swatch, title, meta, description, tags
pub fn card(item: &MediaItem, selected: bool, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let border = if selected {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.grey0)
    };
    let body_bg = if selected { theme.selection } else { theme.bg1 };

    let row = |content: Line<'static>| -> Line<'static> {
        let mut spans = vec![Span::styled("│ ", border)];
        let fitted = fit_line(content, inner);
        spans.extend(
            fitted
                .spans
                .into_iter()
                .map(|s| {
                    let style = s.style.bg(s.style.bg.unwrap_or(body_bg));
                    Span::styled(s.content, style)
                }),
        );
        spans.push(Span::styled(" │", border));
        Line::from(spans)
    };

    let placeholder = item.placeholder();
    let media = match (item.video(), item.image.as_deref()) {
        (Some(_), _) => swatch_line("▶", theme.placeholder(placeholder.hue), theme.fg1, inner),
        (None, Some(_)) => swatch_line(
            &format!("▣ {}", placeholder.initials),
            theme.placeholder(placeholder.hue),
            theme.fg1,
            inner,
        ),
        (None, None) => swatch_line(
            &placeholder.initials,
            theme.placeholder(placeholder.hue),
            theme.bg0,
            inner,
        ),
    };

    let mut title = vec![Span::styled(
        truncate_str(&item.title, inner.saturating_sub(2)),
        Style::default().fg(theme.fg1).add_modifier(Modifier::BOLD),
    )];
    if item.featured {
        title.push(Span::styled(" ★", Style::default().fg(theme.yellow)));
    }

    let meta = match item.project() {
        Some(project) => format!(
            "{} · {}",
            item.category_label(),
            project.date.format("%b %Y")
        ),
        None => item.category_label().to_string(),
    };

    let tags = item
        .tags
        .iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ");

    vec![
        Line::from(vec![
            Span::styled("╭", border),
            Span::styled("─".repeat(width.saturating_sub(2)), border),
            Span::styled("╮", border),
        ]),
        row(media),
        row(Line::from(title)),
        row(Line::from(Span::styled(meta, Style::default().fg(theme.aqua)))),
        row(Line::from(Span::styled(
            truncate_str(&item.description, inner),
            Style::default().fg(theme.grey2),
        ))),
        row(Line::from(Span::styled(
            truncate_str(&tags, inner),
            Style::default().fg(theme.purple),
        ))),
        row(Line::default()),
        Line::from(vec![
            Span::styled("╰", border),
            Span::styled("─".repeat(width.saturating_sub(2)), border),
            Span::styled("╯", border),
        ]),
    ]
}
