use gtk4 as gtk;

use memory_match::color::Rgb;

/// Settings shared by every view for the lifetime of the window.
///
/// The background is pushed to a display-wide stylesheet, so views only
/// need the `memory-view` class to follow it.
pub struct Preferences {
    background: Rgb,
    css_provider: gtk::CssProvider,
}

impl Preferences {
    pub fn new(background: Rgb) -> Self {
        let css_provider = gtk::CssProvider::new();
        if let Some(display) = gtk::gdk::Display::default() {
            gtk::style_context_add_provider_for_display(
                &display,
                &css_provider,
                gtk::STYLE_PROVIDER_PRIORITY_APPLICATION + 1,
            );
        } else {
            tracing::warn!("no default display; background color will not be applied");
        }
        let prefs = Preferences {
            background,
            css_provider,
        };
        prefs.apply();
        prefs
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn set_background(&mut self, color: Rgb) {
        self.background = color;
        self.apply();
    }

    fn apply(&self) {
        self.css_provider.load_from_data(&format!(
            ".memory-view {{ background-color: {background}; color: {text}; }}",
            background = self.background,
            text = self.background.contrasting_text(),
        ));
    }
}
