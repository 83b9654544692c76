//! Gallery interaction core: category filtering, the detail modal, its image
//! carousel and the page scroll lock the modal holds while open.

mod carousel;
mod filter;
mod modal;
mod scroll_lock;

pub use carousel::Carousel;
pub use filter::{filter_indices, CategoryFilter, FilterEngine, ALL_CATEGORIES};
pub use modal::{CloseReason, ModalSession, ModalState, OpenModal};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
