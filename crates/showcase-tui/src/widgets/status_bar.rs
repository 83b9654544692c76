use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};
use crate::page::Section;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let section = app.current_section();

        let mode_str = if app.active_modal().is_some() {
            "DETAIL"
        } else {
            match app.mode {
                Mode::Browse => "BROWSE",
                Mode::EditContact => "INSERT",
                Mode::Help => "HELP",
            }
        };

        let filter = match section {
            Section::Projects => Some(&app.projects),
            Section::Gallery => Some(&app.designs),
            _ => None,
        }
        .map(|engine| format!(" | Filter: {} ({})", engine.active().id(), engine.visible_len()))
        .unwrap_or_default();

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {} ", msg)
        } else {
            format!(" {} | {}{}", mode_str, section.title(), filter)
        };

        let help_hint = match (app.active_modal().is_some(), app.mode) {
            (true, _) => " Esc:close h/l:image o:open ",
            (false, Mode::EditContact) => " Tab:field Enter:send Esc:done ",
            _ if app.show_back_to_top() => " t:top J/K:sections ?:help q:quit ",
            _ => " j/k:scroll J/K:sections ?:help q:quit ",
        };

        let padding_len = (area.width as usize)
            .saturating_sub(status_text.chars().count() + help_hint.chars().count());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.grey2).bg(theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Top navigation bar: site name and section links, current one highlighted
pub struct NavBarWidget;

impl NavBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let current = app.current_section();

        let mut spans = vec![
            Span::styled(
                format!(" {} ", app.content.site.name),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];
        for section in Section::ALL {
            let style = if section == current {
                Style::default()
                    .fg(theme.fg1)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.grey1)
            };
            spans.push(Span::styled(format!(" {} ", section.title()), style));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg1)),
            area,
        );
    }
}
