use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use showcase_core::catalog::{MediaDisplay, MediaItem};
use showcase_core::gallery::Carousel;

use super::text::{swatch_line, truncate_str};
use crate::app::App;
use crate::theme::Theme;

const MEDIA_ROWS: u16 = 5;

pub struct ModalWidget;

impl ModalWidget {
    /// Render the open detail modal over a dimmed page and record its area
    pub fn render(frame: &mut Frame, app: &mut App) {
        let Some(modal) = app.active_modal() else {
            app.modal_area = None;
            return;
        };
        let Some(item) = modal.item().cloned() else {
            return;
        };
        let carousel = modal.carousel().cloned();
        let display = modal.display().map(display_owned);
        let theme = app.theme.clone();

        let area = frame.area();
        dim_backdrop(frame, &theme);

        let popup_width = (area.width * 4 / 5).clamp(20.min(area.width), 100);
        let popup_height = (area.height * 5 / 6).max(10.min(area.height));
        let popup_area = centered_rect(popup_width, popup_height, area);
        app.modal_area = Some(popup_area);

        frame.render_widget(Clear, popup_area);

        let title = truncate_str(&item.title, popup_width.saturating_sub(6) as usize);
        let block = Block::default()
            .title(format!(" {} ", title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(MEDIA_ROWS), // Media
                Constraint::Length(1),          // Carousel indicator
                Constraint::Min(1),             // Details
                Constraint::Length(1),          // Hint
            ])
            .split(inner);

        let media_width = chunks[0].width as usize;
        let media = media_lines(display.as_ref(), &item, &theme, media_width, MEDIA_ROWS as usize);
        frame.render_widget(Paragraph::new(media), chunks[0]);

        if let Some(line) = carousel.as_ref().and_then(|c| indicator(c, &theme)) {
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), chunks[1]);
        }

        let details = detail_lines(&item, &theme);
        let max_scroll = (details.len() as u16).saturating_sub(chunks[2].height);
        app.modal_scroll = app.modal_scroll.min(max_scroll);
        let paragraph = Paragraph::new(details)
            .wrap(Wrap { trim: false })
            .scroll((app.modal_scroll, 0));
        frame.render_widget(paragraph, chunks[2]);

        let hint = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(theme.grey1)),
            Span::styled("Esc", Style::default().fg(theme.error).add_modifier(Modifier::BOLD)),
            Span::styled("] close  [", Style::default().fg(theme.grey1)),
            Span::styled("h/l", Style::default().fg(theme.green).add_modifier(Modifier::BOLD)),
            Span::styled("] image  [", Style::default().fg(theme.grey1)),
            Span::styled("1-9", Style::default().fg(theme.green).add_modifier(Modifier::BOLD)),
            Span::styled("] jump  [", Style::default().fg(theme.grey1)),
            Span::styled("j/k", Style::default().fg(theme.green).add_modifier(Modifier::BOLD)),
            Span::styled("] scroll  [", Style::default().fg(theme.grey1)),
            Span::styled("o", Style::default().fg(theme.green).add_modifier(Modifier::BOLD)),
            Span::styled("] open", Style::default().fg(theme.grey1)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[3]);
    }
}

/// Owned copy of the media to show, detached from the modal borrow
#[derive(Debug, Clone, PartialEq)]
enum Media {
    Video(String),
    Image(String),
    Placeholder { initials: String, hue: u16 },
}

fn display_owned(display: MediaDisplay<'_>) -> Media {
    match display {
        MediaDisplay::Video(url) => Media::Video(url.to_string()),
        MediaDisplay::Image(url) => Media::Image(url.to_string()),
        MediaDisplay::Placeholder(p) => Media::Placeholder {
            initials: p.initials,
            hue: p.hue,
        },
    }
}

/// Fade every cell of the page under the modal
fn dim_backdrop(frame: &mut Frame, theme: &Theme) {
    for cell in frame.buffer_mut().content.iter_mut() {
        cell.fg = theme.fade(cell.fg, 0.35);
        cell.bg = theme.backdrop;
    }
}

fn media_lines(
    media: Option<&Media>,
    item: &MediaItem,
    theme: &Theme,
    width: usize,
    rows: usize,
) -> Vec<Line<'static>> {
    let placeholder = item.placeholder();
    let color = theme.placeholder(placeholder.hue);
    let (label, color) = match media {
        Some(Media::Video(url)) => (format!("▶  {}", url), color),
        Some(Media::Image(url)) => (format!("▣  {}", url), color),
        Some(Media::Placeholder { initials, hue }) => (initials.clone(), theme.placeholder(*hue)),
        None => (placeholder.initials, color),
    };
    let label = truncate_str(&label, width.saturating_sub(2));

    (0..rows)
        .map(|row| {
            let text = if row == rows / 2 { label.as_str() } else { "" };
            swatch_line(text, color, theme.fg1, width)
        })
        .collect()
}

/// "‹ 2/5 ›  ○ ● ○ ○ ○" for multi-frame galleries
fn indicator(carousel: &Carousel, theme: &Theme) -> Option<Line<'static>> {
    if carousel.is_single_frame() {
        return None;
    }
    let mut spans = vec![Span::styled(
        format!("‹ {}/{} ›  ", carousel.index() + 1, carousel.len()),
        Style::default().fg(theme.fg1),
    )];
    for i in 0..carousel.len() {
        let (dot, color) = if i == carousel.index() {
            ("● ", theme.accent)
        } else {
            ("○ ", theme.grey0)
        };
        spans.push(Span::styled(dot, Style::default().fg(color)));
    }
    Some(Line::from(spans))
}

fn detail_lines(item: &MediaItem, theme: &Theme) -> Vec<Line<'static>> {
    let heading = |text: &str| {
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(theme.fg1).add_modifier(Modifier::BOLD),
        ))
    };
    let body = |text: &str| {
        Line::from(Span::styled(text.to_string(), Style::default().fg(theme.fg0)))
    };

    let mut meta = vec![Span::styled(
        item.category_label().to_string(),
        Style::default().fg(theme.aqua),
    )];
    if item.featured {
        meta.push(Span::styled("  ★ Featured", Style::default().fg(theme.yellow)));
    }

    let mut lines = vec![Line::from(meta), Line::default(), body(item.description.as_str())];

    if let Some(project) = item.project() {
        lines.push(Line::default());
        if let Some(client) = &project.client {
            lines.push(Line::from(vec![
                Span::styled("Client  ", Style::default().fg(theme.grey1)),
                Span::styled(client.clone(), Style::default().fg(theme.fg0)),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled("Date    ", Style::default().fg(theme.grey1)),
            Span::styled(
                project.date.format("%B %Y").to_string(),
                Style::default().fg(theme.fg0),
            ),
        ]));
        if !project.technologies.is_empty() {
            let mut spans = vec![Span::styled("Tech    ", Style::default().fg(theme.grey1))];
            for tech in &project.technologies {
                spans.push(Span::styled(
                    format!(" {} ", tech),
                    Style::default().fg(theme.blue).bg(theme.bg2),
                ));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
    }

    if !item.tags.is_empty() {
        lines.push(Line::default());
        let tags = item
            .tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(Line::from(Span::styled(tags, Style::default().fg(theme.purple))));
    }

    if let Some(study) = item.case_study() {
        for (title, text) in [
            ("Overview", &study.overview),
            ("Challenge", &study.challenge),
            ("Solution", &study.solution),
            ("Results", &study.results),
        ] {
            lines.push(Line::default());
            lines.push(heading(title));
            lines.push(body(text.as_str()));
        }
        if !study.process.is_empty() {
            lines.push(Line::default());
            lines.push(heading("Process"));
            for (i, step) in study.process.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(theme.accent)),
                    Span::styled(step.clone(), Style::default().fg(theme.fg0)),
                ]));
            }
        }
    }

    lines
}

/// Helper function to create a centered rect
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::SiteContent;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(50, 20, area), Rect::new(25, 10, 50, 20));
        // Never larger than the screen
        assert_eq!(centered_rect(200, 80, area), Rect::new(0, 0, 100, 40));
    }

    #[test]
    fn test_indicator_hidden_for_single_frame() {
        let theme = Theme::default();
        let single = Carousel::new("x", vec!["a.jpg".into()]).unwrap();
        assert!(indicator(&single, &theme).is_none());

        let mut multi = Carousel::new("x", vec!["a".into(), "b".into(), "c".into()]).unwrap();
        multi.next();
        let line = indicator(&multi, &theme).unwrap();
        assert_eq!(line.spans[0].content, "‹ 2/3 ›  ");
        assert_eq!(line.spans[2].content, "● ");
    }

    #[test]
    fn test_project_details_include_case_study() {
        let content = SiteContent::bundled().unwrap();
        let theme = Theme::default();
        let item = content
            .projects
            .items()
            .iter()
            .find(|p| p.case_study().is_some())
            .unwrap();
        let lines = detail_lines(item, &theme);
        assert!(lines
            .iter()
            .any(|l| l.spans.iter().any(|s| s.content == "Overview")));
    }

    #[test]
    fn test_placeholder_media_uses_initials() {
        let content = SiteContent::bundled().unwrap();
        let theme = Theme::default();
        let item = content.designs.get(0).unwrap();
        let media = Media::Placeholder {
            initials: "AB".into(),
            hue: 10,
        };
        let lines = media_lines(Some(&media), item, &theme, 20, 5);
        assert_eq!(lines.len(), 5);
        assert!(lines[2].spans.iter().any(|s| s.content == "AB"));
    }
}
