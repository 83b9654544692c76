use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use ratatui::layout::{Position, Rect};

use showcase_core::catalog::{MediaDisplay, MediaItem, SiteContent};
use showcase_core::contact::{ContactField, ContactForm, ContactMessage, SubmitStatus};
use showcase_core::gallery::{CloseReason, FilterEngine, ModalSession, ScrollLock};
use showcase_core::preloader::Preloader;
use showcase_core::reveal::{
    Bounds, CounterId, CounterSpec, EasingType, ReplayPolicy, RevealEngine, RevealSpec, ScopeId,
    TargetId, Viewport, VisualState,
};
use showcase_core::{AppConfig, Error};

use crate::event::ContactResult;
use crate::input::Action;
use crate::page::{PageLayout, Section};
use crate::scroll::{ScrollAnimator, ScrollConfigExt};
use crate::theme::Theme;
use crate::themes::load_theme;

/// Rows above a section's body (heading, subtitle, filter tabs, spacer)
pub const HEADER_ROWS: u16 = 4;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal page browsing
    Browse,
    /// Typing into the contact form
    EditContact,
    /// Help overlay
    Help,
}

/// Animated part of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealPart {
    /// The whole section block
    Section,
    /// Staggered body children
    Body,
}

/// Stat counters shown in the about section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Experience,
    Projects,
    Clients,
}

/// Side effects the event loop performs for the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    None,
    /// Deliver a validated contact message on a background task
    SubmitContact(ContactMessage),
    /// Hand a locator to the system opener
    OpenExternal(String),
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Site copy: hero, about, contact details
    pub content: Arc<SiteContent>,
    pub theme: Theme,
    pub mode: Mode,
    /// Project grid filter
    pub projects: FilterEngine,
    /// Design gallery filter
    pub designs: FilterEngine,
    /// Selected position in the visible project grid
    pub selected_project: usize,
    /// Selected position in the visible design grid
    pub selected_design: usize,
    scroll_lock: ScrollLock,
    pub project_modal: ModalSession,
    pub design_modal: ModalSession,
    pub reveal: RevealEngine,
    scopes: HashMap<Section, ScopeId>,
    grid_scopes: HashMap<Section, ScopeId>,
    targets: HashMap<(Section, RevealPart), TargetId>,
    counters: HashMap<Stat, CounterId>,
    pub contact: ContactForm,
    pub contact_field: ContactField,
    pub preloader: Option<Preloader>,
    pub scroll: ScrollAnimator,
    pub layout: PageLayout,
    pub viewport_height: u16,
    /// Screen area of the open modal (set while drawing)
    pub modal_area: Option<Rect>,
    /// Scroll offset of the modal detail text
    pub modal_scroll: u16,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Arc<AppConfig>, content: SiteContent, now: Instant) -> Result<Self> {
        let scroll_lock = ScrollLock::new();
        let preloader = config.ui.preloader.then(|| Preloader::new(now));
        let scroll = ScrollAnimator::new(config.ui.scroll.with_motion(config.animation.enabled))
            .with_lock(scroll_lock.clone());

        let mut app = Self {
            projects: FilterEngine::new(content.projects.clone()).with_featured_first(),
            designs: FilterEngine::new(content.designs.clone()),
            content: Arc::new(content),
            theme: load_theme(&config.ui.theme),
            mode: Mode::Browse,
            selected_project: 0,
            selected_design: 0,
            project_modal: ModalSession::new(scroll_lock.clone()),
            design_modal: ModalSession::new(scroll_lock.clone()),
            scroll_lock,
            reveal: RevealEngine::from_config(&config.animation),
            scopes: HashMap::new(),
            grid_scopes: HashMap::new(),
            targets: HashMap::new(),
            counters: HashMap::new(),
            contact: ContactForm::from_config(&config.contact),
            contact_field: ContactField::Name,
            preloader,
            scroll,
            layout: PageLayout::default(),
            viewport_height: 0,
            modal_area: None,
            modal_scroll: 0,
            pending_key: None,
            status_message: None,
            should_quit: false,
            config,
        };

        app.mount_sections()?;
        Ok(app)
    }

    fn spec(&self, offset: f64, duration_ms: u64, easing: EasingType) -> RevealSpec {
        RevealSpec::fade_up(offset, duration_ms, easing).configured(&self.config.animation)
    }

    fn mount_sections(&mut self) -> Result<()> {
        for section in Section::ALL {
            let scope = self.reveal.mount(section.scope())?;
            self.scopes.insert(section, scope);

            let (section_spec, body_spec, children) = match section {
                Section::Hero => (
                    self.spec(0.0, 200, EasingType::Power2Out)
                        .with_replay(ReplayPolicy::Once),
                    self.spec(3.0, 600, EasingType::Power2Out)
                        .with_stagger(200)
                        .with_initial_scale(0.97)
                        .with_replay(ReplayPolicy::Once),
                    4,
                ),
                Section::About => (
                    self.spec(3.0, 600, EasingType::Power2Out),
                    self.spec(2.0, 400, EasingType::Power2Out).with_stagger(80),
                    3,
                ),
                Section::Contact => (
                    self.spec(4.0, 1000, EasingType::Power3Out),
                    self.spec(2.0, 800, EasingType::Power3Out).with_stagger(100),
                    ContactField::ALL.len() + 1,
                ),
                Section::Projects | Section::Gallery => {
                    let spec = self.spec(4.0, 1000, EasingType::Power3Out);
                    let id = self.reveal.register(scope, "section", spec, 1)?;
                    self.targets.insert((section, RevealPart::Section), id);
                    self.mount_grid(section)?;
                    continue;
                }
            };

            let id = self.reveal.register(scope, "section", section_spec, 1)?;
            self.targets.insert((section, RevealPart::Section), id);
            let id = self.reveal.register(scope, "body", body_spec, children)?;
            self.targets.insert((section, RevealPart::Body), id);
        }

        // Counters start the first time the about body enters
        if let Some(&body) = self.targets.get(&(Section::About, RevealPart::Body)) {
            let about = &self.content.about;
            for (stat, target) in [
                (Stat::Experience, about.experience),
                (Stat::Projects, about.projects),
                (Stat::Clients, about.clients),
            ] {
                let spec = CounterSpec::from_config(target, &self.config.counter);
                let id = self.reveal.attach_counter(body, spec)?;
                self.counters.insert(stat, id);
            }
        }

        Ok(())
    }

    /// (Re)mount the card grid of a section so its cards replay their entrance
    fn mount_grid(&mut self, section: Section) -> Result<()> {
        if let Some(scope) = self.grid_scopes.remove(&section) {
            self.reveal.unmount(scope)?;
        }

        let (name, stagger, children) = match section {
            Section::Projects => ("projects-grid", 200, self.projects.visible_len()),
            Section::Gallery => ("gallery-grid", 100, self.designs.visible_len()),
            _ => return Ok(()),
        };

        let scope = self.reveal.mount(name)?;
        let spec = self
            .spec(2.0, 800, EasingType::Power3Out)
            .with_stagger(stagger);
        let id = self.reveal.register(scope, "cards", spec, children)?;
        self.grid_scopes.insert(section, scope);
        self.targets.insert((section, RevealPart::Body), id);
        Ok(())
    }

    /// Unmount every reveal scope and close the modals
    pub fn teardown(&mut self) {
        self.project_modal.close(CloseReason::Teardown);
        self.design_modal.close(CloseReason::Teardown);

        let scopes: Vec<ScopeId> = self
            .scopes
            .drain()
            .chain(self.grid_scopes.drain())
            .map(|(_, scope)| scope)
            .collect();
        for scope in scopes {
            if let Err(e) = self.reveal.unmount(scope) {
                tracing::warn!("Failed to unmount reveal scope: {}", e);
            }
        }
        self.targets.clear();
        self.counters.clear();
    }

    /// Interpolated reveal state of a section part
    pub fn reveal_state(
        &self,
        section: Section,
        part: RevealPart,
        child: usize,
        now: Instant,
    ) -> VisualState {
        self.targets
            .get(&(section, part))
            .and_then(|&id| self.reveal.sample(id, child, now).ok())
            .unwrap_or(VisualState::RESTING)
    }

    /// Displayed value of an about counter
    pub fn counter_value(&self, stat: Stat) -> u64 {
        self.counters
            .get(&stat)
            .and_then(|&id| self.reveal.counter_value(id).ok())
            .unwrap_or(0)
    }

    pub fn preloader_visible(&self) -> bool {
        self.preloader.as_ref().is_some_and(|p| p.is_visible())
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_engaged()
    }

    /// The open detail modal, if any
    pub fn active_modal(&self) -> Option<&ModalSession> {
        if self.project_modal.is_open() {
            Some(&self.project_modal)
        } else if self.design_modal.is_open() {
            Some(&self.design_modal)
        } else {
            None
        }
    }

    fn active_modal_mut(&mut self) -> Option<&mut ModalSession> {
        if self.project_modal.is_open() {
            Some(&mut self.project_modal)
        } else if self.design_modal.is_open() {
            Some(&mut self.design_modal)
        } else {
            None
        }
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout.max_scroll(self.viewport_height)
    }

    /// Section the reader is looking at
    pub fn current_section(&self) -> Section {
        let scroll = self.scroll.current_scroll();
        let max_scroll = self.max_scroll();
        if max_scroll > 0 && scroll >= max_scroll {
            return Section::Contact;
        }
        self.layout
            .section_at(scroll.saturating_add(self.viewport_height / 3))
            .unwrap_or(Section::Hero)
    }

    pub fn show_back_to_top(&self) -> bool {
        self.scroll.current_scroll() > self.config.ui.back_to_top_rows
    }

    /// Record the geometry produced by the last draw
    pub fn set_layout(&mut self, layout: PageLayout, viewport_height: u16) {
        self.layout = layout;
        self.viewport_height = viewport_height;
    }

    pub fn scroll_to_section(&mut self, section: Section, now: Instant) {
        if let Some(span) = self.layout.span(section) {
            let max_scroll = self.max_scroll();
            self.scroll.scroll_to(span.top, max_scroll, now);
        }
    }

    /// Per-frame update: timers, scroll animation and reveal observation.
    /// Returns true while anything is still moving.
    pub fn update(&mut self, now: Instant) -> bool {
        if let Some(preloader) = self.preloader.as_mut() {
            preloader.tick(now);
            if preloader.is_visible() {
                return true;
            }
        }

        self.contact.tick(now);
        let max_scroll = self.max_scroll();
        self.scroll.update(max_scroll, now);
        self.observe_reveals(now);
        self.reveal.tick(now);

        self.needs_fast_update(now)
    }

    pub fn needs_fast_update(&self, now: Instant) -> bool {
        self.preloader_visible() || self.scroll.needs_update() || self.reveal.is_animating(now)
    }

    fn observe_reveals(&mut self, now: Instant) {
        let viewport = Viewport::new(
            self.scroll.current_scroll() as f64,
            self.viewport_height as f64,
        );

        for span in self.layout.spans().to_vec() {
            for part in [RevealPart::Section, RevealPart::Body] {
                let Some(&id) = self.targets.get(&(span.section, part)) else {
                    continue;
                };
                let bounds = match part {
                    RevealPart::Section => Bounds::new(span.top as f64, span.height as f64),
                    RevealPart::Body => Bounds::new(
                        span.top.saturating_add(HEADER_ROWS) as f64,
                        span.height.saturating_sub(HEADER_ROWS) as f64,
                    ),
                };
                if let Err(e) = self.reveal.observe(id, bounds, viewport, now) {
                    tracing::warn!("Reveal observation failed: {}", e);
                }
            }
        }
    }

    /// Item at the grid selection of the current section
    pub fn selected_item(&self) -> Option<&Arc<MediaItem>> {
        match self.current_section() {
            Section::Projects => self.projects.visible_item(self.selected_project),
            Section::Gallery => self.designs.visible_item(self.selected_design),
            _ => None,
        }
    }

    fn move_selection(&mut self, forward: bool) {
        let (selected, len) = match self.current_section() {
            Section::Projects => (&mut self.selected_project, self.projects.visible_len()),
            Section::Gallery => (&mut self.selected_design, self.designs.visible_len()),
            _ => return,
        };
        if len == 0 {
            return;
        }
        *selected = if forward {
            (*selected + 1) % len
        } else {
            (*selected + len - 1) % len
        };
    }

    fn cycle_category(&mut self, forward: bool) -> Result<()> {
        let section = self.current_section();
        let engine = match section {
            Section::Projects => &mut self.projects,
            Section::Gallery => &mut self.designs,
            _ => return Ok(()),
        };

        if engine.cycle(forward)? {
            let label = engine
                .options()
                .into_iter()
                .find(|(id, _)| *id == engine.active().id())
                .map(|(_, label)| label.to_string())
                .unwrap_or_default();
            match section {
                Section::Projects => self.selected_project = 0,
                _ => self.selected_design = 0,
            }
            self.mount_grid(section)?;
            self.set_status(format!("Filter: {}", label));
        }
        Ok(())
    }

    /// Open the detail modal for the selected card
    pub fn open_selected(&mut self) -> bool {
        let section = self.current_section();
        let Some(item) = self.selected_item().cloned() else {
            return false;
        };
        self.scroll.cancel();
        self.modal_scroll = 0;
        match section {
            Section::Projects => self.project_modal.open(item),
            _ => self.design_modal.open(item),
        }
        true
    }

    pub fn close_modal(&mut self, reason: CloseReason) -> bool {
        match self.active_modal_mut() {
            Some(modal) => {
                let closed = modal.close(reason);
                self.modal_area = None;
                closed
            }
            None => false,
        }
    }

    /// Mouse click at a screen cell. Clicks outside the modal dismiss it.
    pub fn handle_click(&mut self, column: u16, row: u16) -> bool {
        let Some(area) = self.modal_area else {
            return false;
        };
        if area.contains(Position::new(column, row)) {
            return false;
        }
        let dismissed = self
            .active_modal_mut()
            .map(|m| m.dismiss_backdrop())
            .unwrap_or(false);
        if dismissed {
            self.modal_area = None;
        }
        dismissed
    }

    /// Locator the system opener should receive for the current context
    fn external_target(&self) -> Option<String> {
        if let Some(modal) = self.active_modal() {
            return match modal.display()? {
                MediaDisplay::Video(url) | MediaDisplay::Image(url) => Some(url.to_string()),
                MediaDisplay::Placeholder(_) => None,
            };
        }
        match self.current_section() {
            Section::Contact => Some(format!("mailto:{}", self.content.contact.email)),
            Section::Hero => self.content.site.url.clone(),
            _ => None,
        }
    }

    /// Apply an input action
    pub fn apply(&mut self, action: Action, now: Instant) -> AppCommand {
        // Clear pending key on any action except PendingG
        if action != Action::PendingG {
            self.pending_key = None;
        }

        // Page moves are ignored by the scroller while a modal holds the lock
        let max_scroll = self.max_scroll();

        match action {
            Action::Quit => self.should_quit = true,
            Action::SkipPreloader => {
                if let Some(preloader) = self.preloader.as_mut() {
                    preloader.skip();
                }
            }
            Action::ScrollDown => self.scroll.scroll_down(max_scroll),
            Action::ScrollUp => self.scroll.scroll_up(max_scroll),
            Action::ScrollHalfPageDown => {
                self.scroll.scroll_half_page_down(self.viewport_height, max_scroll)
            }
            Action::ScrollHalfPageUp => {
                self.scroll.scroll_half_page_up(self.viewport_height, max_scroll)
            }
            Action::NextSection => {
                let next = self.current_section().next();
                self.scroll_to_section(next, now);
            }
            Action::PrevSection => {
                let section = self.current_section();
                let at_top = self
                    .layout
                    .span(section)
                    .is_some_and(|s| self.scroll.current_scroll() <= s.top);
                let target = if at_top { section.previous() } else { section };
                self.scroll_to_section(target, now);
            }
            Action::PendingG => self.pending_key = Some('g'),
            Action::JumpToTop | Action::BackToTop => {
                self.scroll.scroll_to(0, max_scroll, now)
            }
            Action::JumpToBottom => {
                self.scroll.scroll_to(max_scroll, max_scroll, now)
            }
            Action::SelectNext => self.move_selection(true),
            Action::SelectPrev => self.move_selection(false),
            Action::NextCategory | Action::PrevCategory => {
                if let Err(e) = self.cycle_category(action == Action::NextCategory) {
                    self.set_status(format!("Filter failed: {}", e));
                }
            }
            Action::Open => {
                if !self.open_selected() {
                    self.set_status("Nothing selected");
                }
            }
            Action::CloseModal => {
                self.close_modal(CloseReason::Escape);
            }
            Action::NextImage => {
                if let Some(modal) = self.active_modal_mut() {
                    modal.next_image();
                }
            }
            Action::PrevImage => {
                if let Some(modal) = self.active_modal_mut() {
                    modal.previous_image();
                }
            }
            Action::JumpToImage(index) => {
                let result = self.active_modal_mut().map(|m| m.jump_to(index));
                if let Some(Err(e)) = result {
                    self.set_status(e.to_string());
                }
            }
            Action::DetailDown => self.modal_scroll = self.modal_scroll.saturating_add(1),
            Action::DetailUp => self.modal_scroll = self.modal_scroll.saturating_sub(1),
            Action::OpenExternal => match self.external_target() {
                Some(target) => return AppCommand::OpenExternal(target),
                None => self.set_status("Nothing to open"),
            },
            Action::EditContact => {
                self.mode = Mode::EditContact;
                self.set_status("Editing contact form (Tab: next field, Enter: send, Esc: done)");
            }
            Action::NextField => self.contact_field = self.contact_field.next(),
            Action::PrevField => self.contact_field = self.contact_field.previous(),
            Action::InputChar(c) => self.contact.push_char(self.contact_field, c),
            Action::Backspace => self.contact.pop_char(self.contact_field),
            Action::Submit => return self.submit_contact(),
            Action::DismissBanner => {
                self.contact.dismiss_error();
            }
            Action::Help => self.mode = Mode::Help,
            Action::ExitMode => {
                self.mode = Mode::Browse;
                self.clear_status();
            }
            _ => {}
        }

        AppCommand::None
    }

    fn submit_contact(&mut self) -> AppCommand {
        match self.contact.begin_submit() {
            Ok(message) => {
                self.mode = Mode::Browse;
                self.set_status("Sending message...");
                AppCommand::SubmitContact(message)
            }
            Err(Error::Validation(_)) => {
                // Jump to the first invalid field
                if let Some((field, _)) = self.contact.errors().iter().next() {
                    self.contact_field = field;
                }
                self.set_status("Please fix the highlighted fields");
                AppCommand::None
            }
            Err(e) => {
                self.set_status(e.to_string());
                AppCommand::None
            }
        }
    }

    /// Record the outcome of a background submission
    pub fn finish_contact(&mut self, result: ContactResult, now: Instant) {
        let outcome = match result {
            ContactResult::Delivered => Ok(()),
            ContactResult::Failed { error } => Err(Error::Submission(error)),
        };
        self.contact.finish(outcome, now);
        match self.contact.status() {
            SubmitStatus::Success { .. } => {
                self.contact_field = ContactField::Name;
                self.set_status("Message sent");
            }
            SubmitStatus::Error { .. } => self.set_status("Message failed to send"),
            _ => {}
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
