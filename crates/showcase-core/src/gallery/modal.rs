use std::sync::Arc;

use super::carousel::Carousel;
use super::scroll_lock::{ScrollLock, ScrollLockGuard};
use crate::catalog::{MediaDisplay, MediaItem};
use crate::{Error, Result};

/// How a modal was dismissed. Every variant runs the same close path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Explicit close control
    Button,
    /// Click outside the content area
    Backdrop,
    /// Keyboard dismissal
    Escape,
    /// Owning view went away while open
    Teardown,
}

/// State held while a detail overlay is showing
#[derive(Debug)]
pub struct OpenModal {
    item: Arc<MediaItem>,
    /// `None` only when the item has neither gallery nor image
    carousel: Option<Carousel>,
    _lock: ScrollLockGuard,
}

impl OpenModal {
    pub fn item(&self) -> &Arc<MediaItem> {
        &self.item
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    pub fn display(&self) -> MediaDisplay<'_> {
        self.item.display(self.carousel.as_ref().map(|c| c.current()))
    }
}

#[derive(Debug, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(OpenModal),
}

/// Open/closed state machine of a detail overlay.
///
/// The page scroll lock is held exactly while the session is open; it is
/// released on close and when the session is dropped.
#[derive(Debug)]
pub struct ModalSession {
    lock: ScrollLock,
    state: ModalState,
}

impl ModalSession {
    pub fn new(lock: ScrollLock) -> Self {
        Self {
            lock,
            state: ModalState::Closed,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn open_modal(&self) -> Option<&OpenModal> {
        match &self.state {
            ModalState::Open(open) => Some(open),
            ModalState::Closed => None,
        }
    }

    pub fn item(&self) -> Option<&Arc<MediaItem>> {
        self.open_modal().map(OpenModal::item)
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.open_modal().and_then(OpenModal::carousel)
    }

    pub fn display(&self) -> Option<MediaDisplay<'_>> {
        self.open_modal().map(OpenModal::display)
    }

    /// Show `item`, replacing whatever was open. The carousel always starts
    /// at the first frame of the new item.
    pub fn open(&mut self, item: Arc<MediaItem>) {
        let frames = item.frames();
        let carousel = if frames.is_empty() {
            tracing::warn!("Item '{}' has no gallery or image", item.id);
            None
        } else {
            Carousel::new(&item.id, frames).ok()
        };

        tracing::debug!("Modal open: '{}'", item.id);

        // New guard is taken before the old state drops
        self.state = ModalState::Open(OpenModal {
            item,
            carousel,
            _lock: self.lock.acquire(),
        });
    }

    /// Close the overlay. Returns false if it was already closed.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        match std::mem::take(&mut self.state) {
            ModalState::Open(open) => {
                tracing::debug!("Modal close ({:?}): '{}'", reason, open.item.id);
                true
            }
            ModalState::Closed => false,
        }
    }

    /// Backdrop click; same path as the close control
    pub fn dismiss_backdrop(&mut self) -> bool {
        self.close(CloseReason::Backdrop)
    }

    fn carousel_mut(&mut self) -> Option<&mut Carousel> {
        match &mut self.state {
            ModalState::Open(open) => open.carousel.as_mut(),
            ModalState::Closed => None,
        }
    }

    /// Next frame of the open item, if any
    pub fn next_image(&mut self) -> Option<usize> {
        self.carousel_mut().map(Carousel::next)
    }

    /// Previous frame of the open item, if any
    pub fn previous_image(&mut self) -> Option<usize> {
        self.carousel_mut().map(Carousel::previous)
    }

    /// Jump to frame `k` of the open item
    pub fn jump_to(&mut self, k: usize) -> Result<usize> {
        match self.carousel_mut() {
            Some(carousel) => carousel.jump_to(k),
            None => Err(Error::OutOfRange { index: k, len: 0 }),
        }
    }
}

impl Drop for ModalSession {
    fn drop(&mut self) {
        self.close(CloseReason::Teardown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DesignCategory;
    use crate::test_helpers::{design, project};

    fn session() -> (ScrollLock, ModalSession) {
        let lock = ScrollLock::new();
        (lock.clone(), ModalSession::new(lock))
    }

    #[test]
    fn test_open_resets_carousel_and_locks() {
        let (lock, mut modal) = session();
        let item = Arc::new(project("p", "Web", Some(&["a", "b", "c"])));
        modal.open(item);
        assert!(lock.is_engaged());
        assert_eq!(modal.carousel().unwrap().index(), 0);

        let seq: Vec<_> = (0..3).map(|_| modal.next_image().unwrap()).collect();
        assert_eq!(seq, [1, 2, 0]);
    }

    #[test]
    fn test_close_releases_lock() {
        let (lock, mut modal) = session();
        modal.open(Arc::new(project("p", "Web", None)));
        assert!(modal.close(CloseReason::Button));
        assert!(!lock.is_engaged());
        assert!(!modal.is_open());
        assert!(!modal.close(CloseReason::Button));
    }

    #[test]
    fn test_backdrop_converges_on_close() {
        let (lock, mut modal) = session();
        modal.open(Arc::new(project("p", "Web", None)));
        assert!(modal.dismiss_backdrop());
        assert!(!lock.is_engaged());
        assert!(modal.item().is_none());
    }

    #[test]
    fn test_open_other_item_replaces_state() {
        let (lock, mut modal) = session();
        modal.open(Arc::new(project("a", "Web", Some(&["a1", "a2", "a3"]))));
        modal.next_image();
        modal.next_image();

        modal.open(Arc::new(project("b", "Web", Some(&["b1", "b2"]))));
        assert!(lock.is_engaged());
        let carousel = modal.carousel().unwrap();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.frames(), ["b1".to_string(), "b2".to_string()]);
        assert_eq!(modal.item().unwrap().id, "b");

        modal.close(CloseReason::Escape);
        assert!(!lock.is_engaged());
    }

    #[test]
    fn test_drop_while_open_releases_lock() {
        let (lock, mut modal) = session();
        modal.open(Arc::new(project("p", "Web", None)));
        assert!(lock.is_engaged());
        drop(modal);
        assert!(!lock.is_engaged());
    }

    #[test]
    fn test_two_sessions_share_one_lock() {
        let lock = ScrollLock::new();
        let mut projects = ModalSession::new(lock.clone());
        let mut designs = ModalSession::new(lock.clone());
        projects.open(Arc::new(project("p", "Web", None)));
        designs.open(Arc::new(design("d", "Floating Island", DesignCategory::ThreeD)));
        projects.close(CloseReason::Button);
        assert!(lock.is_engaged());
        designs.close(CloseReason::Button);
        assert!(!lock.is_engaged());
    }

    #[test]
    fn test_item_without_gallery_is_single_frame() {
        let (_lock, mut modal) = session();
        modal.open(Arc::new(design("d", "Floating Island", DesignCategory::ThreeD)));
        let carousel = modal.carousel().unwrap();
        assert!(carousel.is_single_frame());
        assert_eq!(modal.next_image(), Some(0));
        assert_eq!(modal.previous_image(), Some(0));
    }

    #[test]
    fn test_item_without_media_shows_placeholder() {
        let (lock, mut modal) = session();
        let mut item = design("d", "Floating Island", DesignCategory::ThreeD);
        item.image = None;
        modal.open(Arc::new(item));
        assert!(lock.is_engaged());
        assert!(modal.carousel().is_none());
        assert_eq!(modal.next_image(), None);
        match modal.display().unwrap() {
            MediaDisplay::Placeholder(p) => assert_eq!(p.initials, "FI"),
            other => panic!("expected placeholder, got {:?}", other),
        }
    }

    #[test]
    fn test_jump_when_closed_fails() {
        let (_lock, mut modal) = session();
        assert!(matches!(
            modal.jump_to(0),
            Err(Error::OutOfRange { index: 0, len: 0 })
        ));
    }
}
