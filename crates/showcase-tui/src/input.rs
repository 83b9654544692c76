use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::page::Section;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    // Page navigation
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    NextSection,
    PrevSection,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    BackToTop,
    // Grids
    SelectNext,
    SelectPrev,
    NextCategory,
    PrevCategory,
    Open,
    // Modal
    CloseModal,
    NextImage,
    PrevImage,
    JumpToImage(usize),
    DetailDown,
    DetailUp,
    OpenExternal,
    // Contact form
    EditContact,
    NextField,
    PrevField,
    InputChar(char),
    Backspace,
    Submit,
    DismissBanner,
    ExitMode,
    Help,
    SkipPreloader,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if app.preloader_visible() {
        return match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            _ => Action::SkipPreloader,
        };
    }

    // Modal owns the keyboard while open
    if app.active_modal().is_some() {
        return handle_modal_mode(key);
    }

    match app.mode {
        Mode::EditContact => return handle_input_mode(key),
        Mode::Help => {
            // Any key exits help
            return Action::ExitMode;
        }
        Mode::Browse => {}
    }

    let section = app.current_section();
    let in_grid = matches!(section, Section::Projects | Section::Gallery);

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Page scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,
        (KeyCode::PageDown, _) => Action::ScrollHalfPageDown,
        (KeyCode::PageUp, _) => Action::ScrollHalfPageUp,

        // Section jumps
        (KeyCode::Char('J'), KeyModifiers::SHIFT) => Action::NextSection,
        (KeyCode::Char('K'), KeyModifiers::SHIFT) => Action::PrevSection,
        (KeyCode::Tab, KeyModifiers::NONE) => Action::NextSection,
        (KeyCode::BackTab, _) => Action::PrevSection,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,
        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::BackToTop,
        (KeyCode::Home, _) => Action::BackToTop,

        // Grid selection and filters
        (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, KeyModifiers::NONE)
            if in_grid =>
        {
            Action::SelectNext
        }
        (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, KeyModifiers::NONE)
            if in_grid =>
        {
            Action::SelectPrev
        }
        (KeyCode::Char(']'), KeyModifiers::NONE) | (KeyCode::Char('f'), KeyModifiers::NONE)
            if in_grid =>
        {
            Action::NextCategory
        }
        (KeyCode::Char('['), KeyModifiers::NONE) | (KeyCode::Char('F'), KeyModifiers::SHIFT)
            if in_grid =>
        {
            Action::PrevCategory
        }
        (KeyCode::Enter, KeyModifiers::NONE) if in_grid => Action::Open,

        // Contact
        (KeyCode::Enter, KeyModifiers::NONE) | (KeyCode::Char('i'), KeyModifiers::NONE)
            if section == Section::Contact =>
        {
            Action::EditContact
        }
        (KeyCode::Char('x'), KeyModifiers::NONE) => Action::DismissBanner,
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::OpenExternal,

        (KeyCode::Char('?'), _) => Action::Help,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::ExitMode,

        _ => Action::None,
    }
}

/// Handle key events while a detail modal is open
fn handle_modal_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => Action::CloseModal,
        (KeyCode::Char('l'), KeyModifiers::NONE)
        | (KeyCode::Right, _)
        | (KeyCode::Char('n'), KeyModifiers::NONE)
        | (KeyCode::Char(' '), KeyModifiers::NONE) => Action::NextImage,
        (KeyCode::Char('h'), KeyModifiers::NONE)
        | (KeyCode::Left, _)
        | (KeyCode::Char('p'), KeyModifiers::NONE) => Action::PrevImage,
        (KeyCode::Char(c), KeyModifiers::NONE) if c.is_ascii_digit() && c != '0' => {
            Action::JumpToImage(c as usize - '1' as usize)
        }
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::DetailDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::DetailUp,
        (KeyCode::Char('o'), KeyModifiers::NONE) | (KeyCode::Enter, _) => Action::OpenExternal,
        _ => Action::None,
    }
}

/// Handle key events while editing the contact form
fn handle_input_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::Submit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Tab, _) | (KeyCode::Down, _) => Action::NextField,
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => Action::PrevField,
        (KeyCode::Esc, _) => Action::ExitMode,
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Char(c), _) => Action::InputChar(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use std::time::Instant;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_modal_keys() {
        let mut app = test_app();
        let now = Instant::now();
        app.scroll_to_section(Section::Gallery, now);
        app.update(now);
        app.apply(Action::Open, now);
        assert!(app.active_modal().is_some());

        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::CloseModal);
        assert_eq!(handle_key_event(key(KeyCode::Right), &app), Action::NextImage);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('3')), &app),
            Action::JumpToImage(2)
        );
        // Scrolling keys move the detail text, not the page
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app), Action::DetailDown);
        assert_eq!(handle_key_event(key(KeyCode::Char('G')), &app), Action::None);
    }

    #[test]
    fn test_grid_keys_only_in_grid_sections() {
        let mut app = test_app();
        let now = Instant::now();
        assert_eq!(handle_key_event(key(KeyCode::Char('l')), &app), Action::None);

        app.scroll_to_section(Section::Projects, now);
        app.update(now);
        assert_eq!(handle_key_event(key(KeyCode::Char('l')), &app), Action::SelectNext);
        assert_eq!(handle_key_event(key(KeyCode::Char(']')), &app), Action::NextCategory);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app), Action::Open);
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = test_app();
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app), Action::JumpToTop);
    }

    #[test]
    fn test_contact_editing_captures_text() {
        let mut app = test_app();
        let now = Instant::now();
        app.scroll_to_section(Section::Contact, now);
        app.update(now);
        app.apply(Action::EditContact, now);

        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app), Action::InputChar('q'));
        assert_eq!(handle_key_event(key(KeyCode::Tab), &app), Action::NextField);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::ExitMode);
    }
}
