//! Developer debug overlay.
//!
//! When the process-wide [`DebugFlag`] is on, the rich renderer wraps a
//! phrase's output in exactly one [`DebugOverlay`]. The overlay never touches
//! the wrapped nodes. It adds a 1px inset highlight and a panel with the
//! phrase's group and key that opens on hover, click or touch.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::rich::RichNode;
use crate::types::DebugInfo;

/// Width of the highlight drawn inside the overlay's bounds.
pub const HIGHLIGHT_INSET_PX: u8 = 1;

/// Shared on/off switch for debug instrumentation.
///
/// Clones share the same flag, so a developer tool can toggle it while
/// render calls read it.
#[derive(Debug, Clone, Default)]
pub struct DebugFlag(Arc<AtomicBool>);

impl DebugFlag {
    pub fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::Release);
    }

    pub fn enable(&self) {
        self.set(true);
    }

    pub fn disable(&self) {
        self.set(false);
    }

    /// Flips the flag and returns the new value.
    pub fn toggle(&self) -> bool {
        !self.0.fetch_xor(true, Ordering::AcqRel)
    }
}

/// Visibility of the overlay's info panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Hidden,
    Shown,
}

/// Pointer input delivered to an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    PointerEnter,
    PointerLeave,
    Click,
    TouchStart,
    /// Click on the panel's close control.
    Close,
}

impl OverlayState {
    pub fn transition(self, event: OverlayEvent) -> OverlayState {
        match event {
            OverlayEvent::PointerEnter | OverlayEvent::Click | OverlayEvent::TouchStart => {
                OverlayState::Shown
            }
            OverlayEvent::PointerLeave | OverlayEvent::Close => OverlayState::Hidden,
        }
    }
}

/// The single wrapper layer added around a phrase in debug mode.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugOverlay {
    pub info: DebugInfo,
    pub state: OverlayState,
    pub children: Vec<RichNode>,
}

impl DebugOverlay {
    /// Wraps `children`; every new overlay starts hidden.
    pub fn new(info: DebugInfo, children: Vec<RichNode>) -> Self {
        Self {
            info,
            state: OverlayState::Hidden,
            children,
        }
    }

    pub fn highlight_inset_px(&self) -> u8 {
        HIGHLIGHT_INSET_PX
    }

    pub fn handle(&mut self, event: OverlayEvent) -> OverlayState {
        self.state = self.state.transition(event);
        self.state
    }

    /// Panel contents while shown.
    pub fn panel(&self) -> Option<&DebugInfo> {
        match self.state {
            OverlayState::Shown => Some(&self.info),
            OverlayState::Hidden => None,
        }
    }
}
