use std::time::Instant;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use showcase_core::catalog::Placeholder;

use super::text::{apply_reveal, section_header, swatch_line, wrap};
use crate::app::{App, RevealPart, Stat};
use crate::page::Section;

const PORTRAIT_WIDTH: usize = 12;

pub struct AboutWidget;

impl AboutWidget {
    pub fn lines(app: &App, width: usize, now: Instant) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let about = &app.content.about;
        let state = |child| app.reveal_state(Section::About, RevealPart::Body, child, now);
        let text_width = width.saturating_sub(6).min(90);

        let mut lines = section_header(
            "About Me",
            &format!("{} · {}", about.name, about.title),
            None,
            theme,
            width,
        );

        // Portrait beside the bio
        let portrait_color = match &about.image {
            Some(_) => theme.bg3,
            None => theme.placeholder(Placeholder::new("about", &about.name).hue),
        };
        let initials = Placeholder::new("about", &about.name).initials;
        let bio_width = text_width.saturating_sub(PORTRAIT_WIDTH + 3);
        let bio = wrap(&about.bio, bio_width);
        let rows = bio.len().max(5);
        let mut intro: Vec<Line<'static>> = Vec::with_capacity(rows + 1);
        for i in 0..rows {
            let mut spans = vec![Span::raw("  ")];
            let portrait = if i == 2 { initials.as_str() } else { "" };
            spans.extend(swatch_line(portrait, portrait_color, theme.bg0, PORTRAIT_WIDTH).spans);
            spans.push(Span::raw("  "));
            if let Some(row) = bio.get(i) {
                spans.push(Span::styled(row.clone(), Style::default().fg(theme.fg0)));
            }
            intro.push(Line::from(spans));
        }
        intro.push(Line::default());
        lines.extend(apply_reveal(intro, state(0), theme, width));

        let mut skills = vec![Line::from(Span::styled(
            "  Skills & Expertise",
            Style::default().fg(theme.fg1).add_modifier(Modifier::BOLD),
        ))];
        let mut row: Vec<Span<'static>> = vec![Span::raw("  ")];
        let mut row_width = 2;
        for skill in &about.skills {
            let chip = format!(" {} ", skill);
            let chip_width = chip.chars().count() + 1;
            if row_width + chip_width > text_width && row.len() > 1 {
                skills.push(Line::from(std::mem::replace(&mut row, vec![Span::raw("  ")])));
                row_width = 2;
            }
            row.push(Span::styled(chip, Style::default().fg(theme.aqua).bg(theme.bg2)));
            row.push(Span::raw(" "));
            row_width += chip_width;
        }
        skills.push(Line::from(row));
        skills.push(Line::default());
        lines.extend(apply_reveal(skills, state(1), theme, width));

        lines.extend(apply_reveal(Self::stats(app), state(2), theme, width));
        lines.push(Line::default());
        lines
    }

    /// Counter tiles followed by any extra static stats
    fn stats(app: &App) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let about = &app.content.about;

        let counters = [
            (Stat::Experience, about.experience),
            (Stat::Projects, about.projects),
            (Stat::Clients, about.clients),
        ];
        let mut values = Vec::new();
        let mut labels = Vec::new();
        for (i, (stat, target)) in counters.into_iter().enumerate() {
            let (label, suffix) = about
                .stats
                .iter()
                .find(|s| s.value == target)
                .map(|s| (s.label.clone(), s.suffix.clone()))
                .unwrap_or_else(|| (default_label(stat).to_string(), "+".to_string()));
            values.push(Span::styled(
                format!("  {:>6}{:<12}", app.counter_value(stat), suffix),
                Style::default()
                    .fg(theme.gradient(i as f64 / 2.0))
                    .add_modifier(Modifier::BOLD),
            ));
            labels.push(Span::styled(
                format!("  {:<18}", label),
                Style::default().fg(theme.grey2),
            ));
        }

        // Remaining stats have no counter and show their value directly
        let counted = [about.experience, about.projects, about.clients];
        for stat in about.stats.iter().filter(|s| !counted.contains(&s.value)) {
            values.push(Span::styled(
                format!("  {:>6}{:<12}", stat.value, stat.suffix),
                Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD),
            ));
            labels.push(Span::styled(
                format!("  {:<18}", stat.label),
                Style::default().fg(theme.grey2),
            ));
        }

        vec![Line::from(values), Line::from(labels)]
    }
}

fn default_label(stat: Stat) -> &'static str {
    match stat {
        Stat::Experience => "Years Experience",
        Stat::Projects => "Projects Completed",
        Stat::Clients => "Happy Clients",
    }
}
