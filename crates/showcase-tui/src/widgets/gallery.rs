use std::time::Instant;

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::cards;
use super::text::{center, section_header, tabs_line};
use crate::app::{App, RevealPart};
use crate::page::Section;

pub struct GalleryWidget;

impl GalleryWidget {
    pub fn lines(app: &App, width: usize, now: Instant) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let engine = &app.designs;
        let tabs = tabs_line(&engine.options(), engine.active().id(), theme);

        let mut lines = section_header(
            "Design Gallery",
            "A curated collection of visual designs, illustrations, and creative concepts that showcase artistic vision and technical expertise.",
            Some(tabs),
            theme,
            width,
        );

        if engine.is_empty() {
            let empty = vec![
                Line::default(),
                center(
                    Line::from(Span::styled("No designs found", Style::default().fg(theme.fg1))),
                    width,
                ),
                center(
                    Line::from(Span::styled(
                        "Try selecting a different category",
                        Style::default().fg(theme.grey1),
                    )),
                    width,
                ),
                Line::default(),
            ];
            lines.extend(empty);
            return lines;
        }

        let selected = (app.current_section() == Section::Gallery).then_some(app.selected_design);
        lines.extend(cards::grid(
            engine.visible(),
            selected,
            |position| app.reveal_state(Section::Gallery, RevealPart::Body, position, now),
            theme,
            width,
        ));
        lines
    }
}
