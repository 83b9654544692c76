use std::time::Instant;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::cards;
use super::text::{center, section_header, tabs_line};
use crate::app::{App, RevealPart};
use crate::page::Section;

pub struct ProjectsWidget;

impl ProjectsWidget {
    pub fn lines(app: &App, width: usize, now: Instant) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let engine = &app.projects;
        let tabs = tabs_line(&engine.options(), engine.active().id(), theme);

        let mut lines = section_header(
            "Featured Projects",
            "A showcase of my most impactful work, featuring interactive experiences, stunning visuals, and innovative solutions.",
            Some(tabs),
            theme,
            width,
        );

        if engine.is_empty() {
            let empty = vec![
                center(
                    Line::from(Span::styled("No projects found", Style::default().fg(theme.fg1))),
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

        let selected = (app.current_section() == Section::Projects).then_some(app.selected_project);
        let state_of =
            |position: usize| app.reveal_state(Section::Projects, RevealPart::Body, position, now);

        // Featured block, then the rest under their own heading
        let split = engine.featured_len();
        if split == 0 || split == engine.visible_len() {
            lines.extend(cards::grid(engine.visible(), selected, &state_of, theme, width));
            return lines;
        }

        lines.extend(cards::grid(
            engine.visible().take(split),
            selected,
            &state_of,
            theme,
            width,
        ));
        lines.push(center(
            Line::from(Span::styled(
                "More Work",
                Style::default().fg(theme.fg1).add_modifier(Modifier::BOLD),
            )),
            width,
        ));
        lines.push(Line::default());
        lines.extend(cards::grid(
            engine.visible().skip(split),
            selected.and_then(|s| s.checked_sub(split)),
            |position| state_of(position + split),
            theme,
            width,
        ));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;

    fn text(lines: &[Line<'static>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_more_work_follows_featured_block() {
        let mut app = test_app();
        let rows = text(&ProjectsWidget::lines(&app, 100, Instant::now()));
        assert!(rows.iter().any(|row| row.contains("More Work")));

        let category = app.projects.catalog().categories()[0].id.clone();
        app.projects.set_category(&category).unwrap();
        let rows = text(&ProjectsWidget::lines(&app, 100, Instant::now()));
        assert!(!rows.iter().any(|row| row.contains("More Work")));
    }
}
