//! Line-building helpers shared by the section widgets

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use showcase_core::reveal::VisualState;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::HEADER_ROWS;
use crate::theme::Theme;

/// Wrap text respecting unicode character widths, breaking on spaces when possible
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut result = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= max_width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                result.push(std::mem::take(&mut current));
                current_width = 0;
            }

            // Hard-break words longer than a line
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(1);
                if current_width + ch_width > max_width && !current.is_empty() {
                    result.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        result.push(current);
    }

    if result.is_empty() {
        result.push(String::new());
    }
    result
}

/// Truncate a string to a display width with ellipsis
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(1);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    if max_width > 0 {
        out.push('…');
    }
    out
}

/// Pad or cut a line to exactly `width` columns
pub fn fit_line(line: Line<'static>, width: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(line.spans.len() + 1);
    let mut used = 0;

    for span in line.spans {
        if used >= width {
            break;
        }
        let span_width = span.content.width();
        if used + span_width <= width {
            used += span_width;
            spans.push(span);
        } else {
            let mut cut = String::new();
            for ch in span.content.chars() {
                let w = ch.width().unwrap_or(1);
                if used + w > width {
                    break;
                }
                cut.push(ch);
                used += w;
            }
            spans.push(Span::styled(cut, span.style));
        }
    }

    if used < width {
        spans.push(Span::raw(" ".repeat(width - used)));
    }
    Line::from(spans).style(line.style)
}

/// Center a line within `width` columns
pub fn center(line: Line<'static>, width: usize) -> Line<'static> {
    let pad = width.saturating_sub(line.width()) / 2;
    if pad == 0 {
        return line;
    }
    let mut spans = vec![Span::raw(" ".repeat(pad))];
    spans.extend(line.spans);
    Line::from(spans).style(line.style)
}

/// Render a reveal state onto a block of lines.
///
/// The block keeps its height: the vertical offset pushes content down and
/// clips the bottom, opacity fades colors into the page background and a
/// scale below 1 indents the block.
pub fn apply_reveal(
    lines: Vec<Line<'static>>,
    state: VisualState,
    theme: &Theme,
    width: usize,
) -> Vec<Line<'static>> {
    if state == VisualState::RESTING {
        return lines;
    }

    let height = lines.len();
    let shift = (state.offset_y.max(0.0).round() as usize).min(height);
    let indent = ((1.0 - state.scale).max(0.0) * width as f64 / 2.0).round() as usize;

    let mut out: Vec<Line<'static>> = Vec::with_capacity(height);
    out.extend(std::iter::repeat_with(Line::default).take(shift));

    for line in lines.into_iter().take(height - shift) {
        let line_fg = line.style.fg;
        let mut spans: Vec<Span<'static>> = Vec::with_capacity(line.spans.len() + 1);
        if indent > 0 {
            spans.push(Span::raw(" ".repeat(indent)));
        }
        for span in line.spans {
            let fg = span.style.fg.or(line_fg).unwrap_or(theme.fg0);
            let mut style = span.style.fg(theme.fade(fg, state.opacity));
            if let Some(bg) = span.style.bg {
                style = style.bg(theme.fade(bg, state.opacity));
            }
            spans.push(Span::styled(span.content, style));
        }
        out.push(Line::from(spans));
    }

    out
}

/// Heading block of a section: title, subtitle, optional tabs, spacer.
/// Always `HEADER_ROWS` tall so the body starts where the app expects it.
pub fn section_header(
    title: &str,
    subtitle: &str,
    tabs: Option<Line<'static>>,
    theme: &Theme,
    width: usize,
) -> Vec<Line<'static>> {
    let title_len = title.chars().count().max(1);
    let title_spans: Vec<Span<'static>> = title
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            Span::styled(
                ch.to_string(),
                Style::default()
                    .fg(theme.gradient(i as f64 / title_len as f64))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    let mut lines = vec![
        center(Line::from(title_spans), width),
        center(
            Line::from(Span::styled(
                truncate_str(subtitle, width.saturating_sub(4)),
                Style::default().fg(theme.grey2),
            )),
            width,
        ),
        tabs.map(|t| center(t, width)).unwrap_or_default(),
        Line::default(),
    ];
    lines.truncate(HEADER_ROWS as usize);
    lines
}

/// Filter tab strip with the active option highlighted
pub fn tabs_line(options: &[(&str, &str)], active: &str, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (id, label)) in options.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(theme.grey0)));
        }
        let style = if *id == active {
            Style::default()
                .fg(theme.bg0)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.grey2)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
    }
    Line::from(spans)
}

/// Solid color block with centered initials
pub fn swatch_line(initials: &str, color: Color, fg: Color, width: usize) -> Line<'static> {
    let text_width = initials.width();
    let left = width.saturating_sub(text_width) / 2;
    let right = width.saturating_sub(text_width + left);
    Line::from(vec![
        Span::styled(" ".repeat(left), Style::default().bg(color)),
        Span::styled(
            initials.to_string(),
            Style::default()
                .fg(fg)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ".repeat(right), Style::default().bg(color)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap("Crafting cinematic digital experiences", 16);
        assert_eq!(lines, vec!["Crafting", "cinematic", "digital", "experiences"]);
        assert!(lines.iter().all(|l| l.width() <= 16));
    }

    #[test]
    fn test_wrap_hard_breaks_long_words() {
        let lines = wrap("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_cjk_width() {
        let lines = wrap("你好世界", 4);
        assert_eq!(lines, vec!["你好", "世界"]);
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("Floating Island", 8), "Floatin…");
    }

    #[test]
    fn test_fit_line_pads_and_cuts() {
        let line = fit_line(Line::from("abc"), 5);
        assert_eq!(line.width(), 5);
        let line = fit_line(Line::from(vec![Span::raw("abc"), Span::raw("def")]), 4);
        assert_eq!(line.width(), 4);
    }

    #[test]
    fn test_apply_reveal_keeps_height() {
        let theme = Theme::default();
        let lines: Vec<Line<'static>> = (0..5).map(|i| Line::from(i.to_string())).collect();

        let hidden = apply_reveal(lines.clone(), VisualState::hidden(2.0), &theme, 20);
        assert_eq!(hidden.len(), 5);
        assert_eq!(hidden[0].width(), 0);
        assert_eq!(hidden[2].spans[0].content, "0");
        assert_eq!(hidden[2].spans[0].style.fg, Some(theme.bg0));

        let resting = apply_reveal(lines, VisualState::RESTING, &theme, 20);
        assert_eq!(resting[0].spans[0].content, "0");
    }

    #[test]
    fn test_apply_reveal_scale_indents() {
        let theme = Theme::default();
        let state = VisualState::RESTING.with_scale(0.9);
        let lines = apply_reveal(vec![Line::from("x")], state, &theme, 40);
        assert_eq!(lines[0].spans[0].content, "  ");
    }

    #[test]
    fn test_section_header_height() {
        let theme = Theme::default();
        let lines = section_header("About Me", "Sub", None, &theme, 40);
        assert_eq!(lines.len(), HEADER_ROWS as usize);
    }
}
