use std::time::Instant;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::text::{apply_reveal, center, wrap};
use crate::app::{App, RevealPart, HEADER_ROWS};
use crate::page::Section;

pub struct HeroWidget;

impl HeroWidget {
    /// Full-screen landing block: title, subtitle, description, call to action
    pub fn lines(app: &App, width: usize, now: Instant) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let hero = &app.content.hero;
        let state = |child| app.reveal_state(Section::Hero, RevealPart::Body, child, now);

        let mut lines: Vec<Line<'static>> = vec![
            center(
                Line::from(Span::styled(
                    format!("✦ {}", app.content.site.name),
                    Style::default().fg(theme.grey1),
                )),
                width,
            ),
            Line::default(),
        ];
        lines.resize(HEADER_ROWS as usize, Line::default());

        // Title, one gradient line per source line
        let title: Vec<Line<'static>> = hero
            .title
            .lines()
            .map(|row| {
                let letters: Vec<char> = row.to_uppercase().chars().collect();
                let n = letters.len().max(1);
                let spans: Vec<Span<'static>> = letters
                    .iter()
                    .enumerate()
                    .map(|(i, ch)| {
                        Span::styled(
                            format!("{} ", ch),
                            Style::default()
                                .fg(theme.gradient(i as f64 / n as f64))
                                .add_modifier(Modifier::BOLD),
                        )
                    })
                    .collect();
                center(Line::from(spans), width)
            })
            .chain(std::iter::once(Line::default()))
            .collect();
        lines.extend(apply_reveal(title, state(0), theme, width));

        let subtitle = vec![
            center(
                Line::from(Span::styled(
                    hero.subtitle.clone(),
                    Style::default().fg(theme.blue).add_modifier(Modifier::ITALIC),
                )),
                width,
            ),
            Line::default(),
        ];
        lines.extend(apply_reveal(subtitle, state(1), theme, width));

        let text_width = width.saturating_sub(8).min(72);
        let mut description: Vec<Line<'static>> = wrap(&hero.description, text_width)
            .into_iter()
            .map(|row| {
                center(
                    Line::from(Span::styled(row, Style::default().fg(theme.fg0))),
                    width,
                )
            })
            .collect();
        description.push(Line::default());
        lines.extend(apply_reveal(description, state(2), theme, width));

        let mut links: Vec<Span<'static>> = Vec::new();
        for (i, link) in app.content.site.links.iter().enumerate() {
            if i > 0 {
                links.push(Span::styled("  ", Style::default()));
            }
            links.push(Span::styled(link.name.clone(), Style::default().fg(theme.grey2)));
        }
        let cta = vec![
            center(
                Line::from(vec![
                    Span::styled(
                        format!(" {} → ", hero.cta_text),
                        Style::default()
                            .fg(theme.bg0)
                            .bg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("  (J) ", Style::default().fg(theme.grey0)),
                ]),
                width,
            ),
            Line::default(),
            center(Line::from(links), width),
        ];
        lines.extend(apply_reveal(cta, state(3), theme, width));

        // Fill the viewport and park the scroll indicator at the bottom
        let target = (app.viewport_height as usize).max(lines.len() + 3);
        lines.resize(target - 2, Line::default());
        lines.push(center(
            Line::from(Span::styled(
                "Scroll to explore ↓",
                Style::default().fg(theme.grey1),
            )),
            width,
        ));
        lines.push(Line::default());
        lines
    }
}
