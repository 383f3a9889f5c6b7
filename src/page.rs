//! Scroll and menu behaviors of the page hosting the backdrop. Each struct
//! is an independent state machine over scalar inputs; none holds element
//! references, so a missing element means the struct is simply never built.

pub const HEADER_SHADOW_OFFSET: f32 = 50.;
pub const HERO_PARALLAX_FACTOR: f32 = 0.5;
pub const HERO_FADE_DISTANCE: f32 = 600.;
pub const SCROLL_TOP_OFFSET: f32 = 500.;
pub const REVEAL_RATIO: f32 = 0.1;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    // An open menu keeps the page from scrolling underneath it.
    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn on_escape(&mut self) {
        self.open = false;
    }

    // Document-level click: closes only when the click landed outside both
    // the menu container and the trigger that opened it.
    pub fn on_document_click(&mut self, inside_menu: bool, on_trigger: bool) {
        if self.open && !inside_menu && !on_trigger {
            self.open = false;
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HeaderShadow {
    Resting,
    Raised,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Section {
    pub top: f32,
    pub height: f32,
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PageScroll {
    offset: f32,
}

impl PageScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset.max(0.);
    }

    pub fn header_shadow(&self) -> HeaderShadow {
        if self.offset > HEADER_SHADOW_OFFSET {
            HeaderShadow::Raised
        } else {
            HeaderShadow::Resting
        }
    }

    pub fn hero_translate(&self) -> f32 {
        self.offset * HERO_PARALLAX_FACTOR
    }

    pub fn hero_opacity(&self) -> f32 {
        (1. - self.offset / HERO_FADE_DISTANCE).clamp(0., 1.)
    }

    pub fn scroll_top_visible(&self) -> bool {
        self.offset > SCROLL_TOP_OFFSET
    }

    pub fn active_section(&self, sections: &[Section]) -> Option<usize> {
        sections
            .iter()
            .rposition(|s| self.offset >= s.top && self.offset < s.top + s.height)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Reveal {
    threshold: f32,
    revealed: bool,
}

impl Default for Reveal {
    fn default() -> Self {
        Self {
            threshold: REVEAL_RATIO,
            revealed: false,
        }
    }
}

impl Reveal {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    // Latches on the first crossing; returns true only on that transition.
    pub fn observe(&mut self, visible_ratio: f32) -> bool {
        if self.revealed || visible_ratio < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SmoothScroll {
    position: f32,
    target: f32,
}

impl SmoothScroll {
    const EASE: f32 = 0.2;
    const SNAP: f32 = 0.5;

    pub fn at(position: f32) -> Self {
        Self {
            position,
            target: position,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn scroll_to(&mut self, target: f32) {
        self.target = target.max(0.);
    }

    pub fn done(&self) -> bool {
        self.position == self.target
    }

    pub fn tick(&mut self) {
        let remaining = self.target - self.position;
        if remaining.abs() <= Self::SNAP {
            self.position = self.target;
        } else {
            self.position += remaining * Self::EASE;
        }
    }
}
