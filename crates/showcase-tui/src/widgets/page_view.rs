use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::text::apply_reveal;
use super::{AboutWidget, ContactWidget, GalleryWidget, HeroWidget, ProjectsWidget};
use crate::app::{App, RevealPart};
use crate::page::{PageLayout, Section};

pub struct PageWidget;

impl PageWidget {
    /// Compose every section, record the page geometry and draw the visible slice
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
        app.viewport_height = area.height;
        let (lines, layout) = Self::compose(app, area.width as usize, now);
        app.set_layout(layout, area.height);

        let scroll = app.scroll.current_scroll().min(app.max_scroll()) as usize;
        let visible: Vec<Line<'static>> = lines
            .into_iter()
            .skip(scroll)
            .take(area.height as usize)
            .collect();

        let theme = &app.theme;
        frame.render_widget(
            Paragraph::new(visible).style(Style::default().bg(theme.bg0).fg(theme.fg0)),
            area,
        );

        if app.show_back_to_top() && area.width > 12 && area.height > 0 {
            let label = " ↑ top (t) ";
            let width = label.chars().count() as u16;
            let corner = Rect::new(
                area.x + area.width - width - 1,
                area.y + area.height - 1,
                width,
                1,
            );
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    label,
                    Style::default()
                        .fg(theme.bg0)
                        .bg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ))),
                corner,
            );
        }
    }

    /// All page lines plus the section spans they occupy
    pub fn compose(app: &App, width: usize, now: Instant) -> (Vec<Line<'static>>, PageLayout) {
        let mut lines = Vec::new();
        let mut heights = Vec::with_capacity(Section::ALL.len());

        for section in Section::ALL {
            let block = match section {
                Section::Hero => HeroWidget::lines(app, width, now),
                Section::About => AboutWidget::lines(app, width, now),
                Section::Projects => ProjectsWidget::lines(app, width, now),
                Section::Gallery => GalleryWidget::lines(app, width, now),
                Section::Contact => ContactWidget::lines(app, width, now),
            };
            let state = app.reveal_state(section, RevealPart::Section, 0, now);
            let block = apply_reveal(block, state, &app.theme, width);
            heights.push((section, block.len() as u16));
            lines.extend(block);
        }

        (lines, PageLayout::from_heights(&heights))
    }
}
