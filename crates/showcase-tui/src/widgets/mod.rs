mod about;
mod cards;
mod contact;
mod gallery;
mod help;
mod hero;
mod modal;
mod page_view;
mod preloader;
mod projects;
mod status_bar;
pub mod text;

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, Mode};

pub use about::AboutWidget;
pub use contact::ContactWidget;
pub use gallery::GalleryWidget;
pub use help::HelpWidget;
pub use hero::HeroWidget;
pub use modal::ModalWidget;
pub use page_view::PageWidget;
pub use preloader::PreloaderWidget;
pub use projects::ProjectsWidget;
pub use status_bar::{NavBarWidget, StatusBarWidget};

/// Draw one frame of the whole UI
pub fn draw(frame: &mut Frame, app: &mut App, now: Instant) {
    if let Some(preloader) = app.preloader.as_ref().filter(|p| p.is_visible()) {
        PreloaderWidget::render(frame, preloader, &app.theme, now);
        return;
    }

    // Nav bar + page + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    PageWidget::render(frame, main_layout[1], app, now);
    NavBarWidget::render(frame, main_layout[0], app);
    StatusBarWidget::render(frame, main_layout[2], app);

    if app.active_modal().is_some() {
        ModalWidget::render(frame, app);
    } else {
        app.modal_area = None;
        if app.mode == Mode::Help {
            HelpWidget::render(frame, &app.theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crate::input::Action;
    use crate::page::Section;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_records_layout() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        let now = Instant::now();

        terminal.draw(|frame| draw(frame, &mut app, now)).unwrap();

        assert_eq!(app.viewport_height, 30);
        assert_eq!(app.layout.spans().len(), Section::ALL.len());
        // Hero fills the first screen
        assert!(app.layout.span(Section::Hero).unwrap().height >= 30);
        assert!(buffer_text(&terminal).contains("Creative Studio"));
    }

    #[test]
    fn test_draw_modal_records_area() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        let now = Instant::now();
        terminal.draw(|frame| draw(frame, &mut app, now)).unwrap();

        app.scroll_to_section(Section::Gallery, now);
        app.update(now);
        app.apply(Action::Open, now);
        terminal.draw(|frame| draw(frame, &mut app, now)).unwrap();

        let area = app.modal_area.unwrap();
        assert!(area.width <= 100 && area.height <= 32);
        // A click in the corner lands on the backdrop
        assert!(app.handle_click(0, 0));
        terminal.draw(|frame| draw(frame, &mut app, now)).unwrap();
        assert!(app.modal_area.is_none());
    }

    #[test]
    fn test_draw_empty_gallery_state() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let now = Instant::now();
        app.designs.set_category("branding").unwrap();
        terminal.draw(|frame| draw(frame, &mut app, now)).unwrap();

        app.scroll_to_section(Section::Gallery, now);
        app.update(now);
        // Sample after the entrance has settled
        let later = now + Duration::from_secs(5);
        terminal.draw(|frame| draw(frame, &mut app, later)).unwrap();
        assert!(buffer_text(&terminal).contains("No designs found"));
    }
}
