//! Host link interception.

/// How activating a rendered link behaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkBehavior {
    /// In-page navigation handled by the host's router.
    #[default]
    Navigate,
    /// Handed to the host's [`LinkOpener`] instead of navigating.
    Intercept,
}

/// Host-supplied function that opens intercepted links, for example in an
/// external browser.
pub trait LinkOpener {
    fn open_link(&self, href: &str);
}

impl<F: Fn(&str)> LinkOpener for F {
    fn open_link(&self, href: &str) {
        self(href);
    }
}

/// Result of activating a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkActivation {
    /// The host should navigate to this target.
    Navigate(String),
    /// The opener was called.
    Opened,
}
