use std::time::Instant;

use chrono::{Datelike, Local};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use showcase_core::contact::{ContactField, SubmitStatus};

use super::text::{apply_reveal, center, fit_line, section_header, wrap};
use crate::app::{App, Mode, RevealPart};
use crate::page::Section;
use crate::theme::Theme;

/// Visible rows of the message box
const MESSAGE_ROWS: usize = 4;

pub struct ContactWidget;

impl ContactWidget {
    pub fn lines(app: &App, width: usize, now: Instant) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let state = |child| app.reveal_state(Section::Contact, RevealPart::Body, child, now);
        let field_width = width.saturating_sub(8).min(64);

        let mut lines = section_header(
            "Let's Connect",
            "Ready to bring your ideas to life? Let's discuss your project and create something amazing together.",
            None,
            theme,
            width,
        );

        for (i, field) in ContactField::ALL.into_iter().enumerate() {
            let block = Self::field(app, field, field_width);
            lines.extend(apply_reveal(block, state(i), theme, width));
        }

        let mut tail = Self::submit_row(app);
        tail.extend(Self::info(app));
        lines.extend(apply_reveal(tail, state(ContactField::ALL.len()), theme, width));

        lines.extend(Self::footer(app, width));
        lines
    }

    fn field(app: &App, field: ContactField, width: usize) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let focused = app.mode == Mode::EditContact && app.contact_field == field;
        let error = app.contact.errors().get(field);
        let value = app.contact.draft().field(field);

        let border = match (focused, error) {
            (true, _) => Style::default().fg(theme.accent),
            (false, Some(_)) => Style::default().fg(theme.error),
            (false, None) => Style::default().fg(theme.grey0),
        };
        let inner = width.saturating_sub(4);

        let mut lines = vec![Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{} *", field.label()),
                Style::default().fg(theme.fg1).add_modifier(Modifier::BOLD),
            ),
        ])];

        let mut rows = match field {
            ContactField::Message => {
                let mut rows = wrap(value, inner.saturating_sub(1));
                // Keep the cursor row in view
                let skip = rows.len().saturating_sub(MESSAGE_ROWS);
                rows.drain(..skip);
                rows.resize(MESSAGE_ROWS, String::new());
                rows
            }
            _ => vec![tail_fit(value, inner.saturating_sub(1))],
        };
        if focused {
            let last = match field {
                ContactField::Message => rows
                    .iter()
                    .rposition(|r| !r.is_empty())
                    .unwrap_or(0),
                _ => 0,
            };
            rows[last].push('▏');
        }

        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("╭", border),
            Span::styled("─".repeat(width.saturating_sub(2)), border),
            Span::styled("╮", border),
        ]));
        for row in rows {
            let content = fit_line(
                Line::from(Span::styled(row, Style::default().fg(theme.fg0))),
                inner,
            );
            let mut spans = vec![Span::raw("  "), Span::styled("│ ", border)];
            spans.extend(content.spans);
            spans.push(Span::styled(" │", border));
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("╰", border),
            Span::styled("─".repeat(width.saturating_sub(2)), border),
            Span::styled("╯", border),
        ]));

        match error {
            Some(message) => lines.push(Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(theme.error),
            ))),
            None => lines.push(Line::default()),
        }
        lines
    }

    /// Send button plus the status banner
    fn submit_row(app: &App) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let label = if app.contact.is_submitting() {
            " Sending... "
        } else {
            " Send Message "
        };

        let mut lines = vec![Line::from(vec![
            Span::raw("  "),
            Span::styled(
                label,
                Style::default()
                    .fg(theme.bg0)
                    .bg(theme.gradient(0.5))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Enter/i: edit  Ctrl-s: send", Style::default().fg(theme.grey0)),
        ])];

        if let Some(banner) = banner(app.contact.status(), theme) {
            lines.push(Line::default());
            lines.push(banner);
        }
        lines.push(Line::default());
        lines
    }

    fn info(app: &App) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let contact = &app.content.contact;

        let entry = |icon: &str, value: &str| {
            Line::from(vec![
                Span::styled(format!("  {} ", icon), Style::default().fg(theme.accent)),
                Span::styled(value.to_string(), Style::default().fg(theme.fg0)),
            ])
        };

        let mut lines = vec![Line::from(Span::styled(
            "  Get in Touch",
            Style::default().fg(theme.fg1).add_modifier(Modifier::BOLD),
        ))];
        lines.push(entry("✉", &contact.email));
        if let Some(phone) = &contact.phone {
            lines.push(entry("☎", phone));
        }
        if let Some(location) = &contact.location {
            lines.push(entry("⌖", location));
        }
        lines.push(Line::from(Span::styled(
            "  Available for remote work worldwide",
            Style::default().fg(theme.green),
        )));
        lines.push(Line::default());
        lines
    }

    fn footer(app: &App, width: usize) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let site = &app.content.site;
        let links = site
            .links
            .iter()
            .map(|l| l.name.as_str())
            .collect::<Vec<_>>()
            .join(" · ");

        vec![
            Line::from(Span::styled(
                "─".repeat(width),
                Style::default().fg(theme.bg3),
            )),
            center(
                Line::from(Span::styled(links, Style::default().fg(theme.grey2))),
                width,
            ),
            center(
                Line::from(Span::styled(
                    format!("© {} {}. All rights reserved.", Local::now().year(), site.name),
                    Style::default().fg(theme.grey0),
                )),
                width,
            ),
            Line::default(),
        ]
    }
}

fn banner(status: &SubmitStatus, theme: &Theme) -> Option<Line<'static>> {
    match status {
        SubmitStatus::Success { .. } => Some(Line::from(Span::styled(
            "  ✓ Message sent successfully!",
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        ))),
        SubmitStatus::Error { .. } => Some(Line::from(vec![
            Span::styled(
                "  ✗ Failed to send message. Please try again.",
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (x: dismiss)", Style::default().fg(theme.grey0)),
        ])),
        SubmitStatus::Idle | SubmitStatus::Submitting => None,
    }
}

/// Last `width` characters of a single-line value, so typing stays visible
fn tail_fit(value: &str, width: usize) -> String {
    let count = value.chars().count();
    value.chars().skip(count.saturating_sub(width)).collect()
}
