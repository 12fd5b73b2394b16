use std::time::Duration;

use gtk4::glib;

/// One-shot main-loop timer that is cancelled when dropped.
///
/// The callback must call [`HideTimer::disarm`] on its own handle before
/// returning, since GLib frees a fired source by itself. Callbacks also
/// compare the game id they were scheduled for as a second safeguard.
pub struct HideTimer {
    source: Option<glib::SourceId>,
}

impl HideTimer {
    pub fn schedule<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        HideTimer {
            source: Some(glib::timeout_add_local_once(delay, callback)),
        }
    }

    pub fn disarm(mut self) {
        self.source.take();
    }
}

impl Drop for HideTimer {
    fn drop(&mut self) {
        if let Some(source) = self.source.take() {
            source.remove();
        }
    }
}
