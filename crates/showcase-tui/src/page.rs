//! Page composition: section order and vertical geometry

/// Page sections, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Projects,
    Gallery,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Gallery,
        Section::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Gallery => "Gallery",
            Section::Contact => "Contact",
        }
    }

    /// Reveal scope name
    pub fn scope(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Gallery => "gallery",
            Section::Contact => "contact",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Section {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    pub fn previous(&self) -> Section {
        Self::ALL[self.index().saturating_sub(1)]
    }
}

/// Rows occupied by one section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub top: u16,
    pub height: u16,
}

impl SectionSpan {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// Section spans stacked in page order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    spans: Vec<SectionSpan>,
}

impl PageLayout {
    /// Stack sections with the given heights, in the order given
    pub fn from_heights(heights: &[(Section, u16)]) -> Self {
        let mut top = 0u16;
        let spans = heights
            .iter()
            .map(|&(section, height)| {
                let span = SectionSpan {
                    section,
                    top,
                    height,
                };
                top = top.saturating_add(height);
                span
            })
            .collect();
        Self { spans }
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn span(&self, section: Section) -> Option<SectionSpan> {
        self.spans.iter().find(|s| s.section == section).copied()
    }

    pub fn total_height(&self) -> u16 {
        self.spans.last().map(|s| s.bottom()).unwrap_or(0)
    }

    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.total_height().saturating_sub(viewport_height)
    }

    /// Section under row `row` of the page
    pub fn section_at(&self, row: u16) -> Option<Section> {
        self.spans
            .iter()
            .find(|s| row >= s.top && row < s.bottom())
            .or_else(|| self.spans.last())
            .map(|s| s.section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        PageLayout::from_heights(&[
            (Section::Hero, 20),
            (Section::About, 30),
            (Section::Projects, 40),
            (Section::Gallery, 25),
            (Section::Contact, 35),
        ])
    }

    #[test]
    fn test_spans_stack() {
        let layout = layout();
        assert_eq!(layout.span(Section::Projects).unwrap().top, 50);
        assert_eq!(layout.total_height(), 150);
        assert_eq!(layout.max_scroll(40), 110);
        assert_eq!(layout.max_scroll(400), 0);
    }

    #[test]
    fn test_section_at() {
        let layout = layout();
        assert_eq!(layout.section_at(0), Some(Section::Hero));
        assert_eq!(layout.section_at(20), Some(Section::About));
        assert_eq!(layout.section_at(149), Some(Section::Contact));
        assert_eq!(layout.section_at(500), Some(Section::Contact));
        assert_eq!(PageLayout::default().section_at(0), None);
    }

    #[test]
    fn test_section_navigation_saturates() {
        assert_eq!(Section::Hero.previous(), Section::Hero);
        assert_eq!(Section::Hero.next(), Section::About);
        assert_eq!(Section::Contact.next(), Section::Contact);
    }
}
