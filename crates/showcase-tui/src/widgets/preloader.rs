use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use showcase_core::preloader::{Preloader, PreloaderPhase};

use crate::theme::Theme;

const BAR_WIDTH: usize = 40;

pub struct PreloaderWidget;

impl PreloaderWidget {
    /// Full-screen loading view. Fades out while the preloader is exiting.
    pub fn render(frame: &mut Frame, preloader: &Preloader, theme: &Theme, now: Instant) {
        let area = frame.area();
        let opacity = match preloader.phase() {
            PreloaderPhase::Exiting { .. } => 1.0 - preloader.exit_progress(now),
            _ => 1.0,
        };

        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);

        let lines = Self::lines(preloader, theme, opacity);
        let top = area.height.saturating_sub(lines.len() as u16) / 2;
        let body = Rect::new(area.x, area.y + top, area.width, area.height.saturating_sub(top));
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
    }

    fn lines(preloader: &Preloader, theme: &Theme, opacity: f64) -> Vec<Line<'static>> {
        let progress = preloader.progress().clamp(0.0, 100.0);
        let filled = ((progress / 100.0) * BAR_WIDTH as f64).round() as usize;

        let bar: Vec<Span<'static>> = (0..BAR_WIDTH)
            .map(|i| {
                if i < filled {
                    let color = theme.gradient(i as f64 / BAR_WIDTH as f64);
                    Span::styled("━", Style::default().fg(theme.fade(color, opacity)))
                } else {
                    Span::styled("━", Style::default().fg(theme.fade(theme.bg3, opacity)))
                }
            })
            .collect();

        vec![
            Line::from(Span::styled(
                "L O A D I N G",
                Style::default()
                    .fg(theme.fade(theme.fg1, opacity))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(bar),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    format!("{:>3.0}%  ", progress),
                    Style::default().fg(theme.fade(theme.accent, opacity)),
                ),
                Span::styled(
                    preloader.stage(),
                    Style::default().fg(theme.fade(theme.grey2, opacity)),
                ),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "press any key to skip",
                Style::default().fg(theme.fade(theme.grey0, opacity)),
            )),
        ]
    }
}
