use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::modal::centered_rect;
use crate::theme::Theme;

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Page",
        &[
            ("j/k ↓/↑", "Scroll"),
            ("Ctrl-d/u", "Half page"),
            ("J/K Tab", "Next/previous section"),
            ("gg G", "Top/bottom"),
            ("t Home", "Back to top"),
        ],
    ),
    (
        "Projects & Gallery",
        &[
            ("h/l", "Select card"),
            ("]/[ f/F", "Next/previous category"),
            ("Enter", "Open details"),
        ],
    ),
    (
        "Details",
        &[
            ("h/l n/p", "Previous/next image"),
            ("1-9", "Jump to image"),
            ("j/k", "Scroll text"),
            ("o", "Open media"),
            ("Esc q", "Close (or click outside)"),
        ],
    ),
    (
        "Contact",
        &[
            ("Enter i", "Edit form"),
            ("Tab", "Next field"),
            ("Enter Ctrl-s", "Send"),
            ("x", "Dismiss error"),
            ("o", "Email me"),
        ],
    ),
];

pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut Frame, theme: &Theme) {
        let lines = Self::lines(theme);
        let area = frame.area();
        let popup = centered_rect(
            52.min(area.width),
            (lines.len() as u16 + 2).min(area.height),
            area,
        );

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }

    fn lines(theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (group, keys) in BINDINGS {
            lines.push(Line::from(Span::styled(
                format!(" {}", group),
                Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD),
            )));
            for (key, desc) in keys.iter() {
                lines.push(Line::from(vec![
                    Span::styled(format!("   {:<14}", key), Style::default().fg(theme.green)),
                    Span::styled(desc.to_string(), Style::default().fg(theme.fg0)),
                ]));
            }
        }
        lines.push(Line::from(Span::styled(
            " any key to close",
            Style::default().fg(theme.grey0),
        )));
        lines
    }
}
