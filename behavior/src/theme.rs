//! Theme state: initial resolution, toggling, and OS mirroring.
//!
//! The `data-theme` attribute on the document root is the single source of
//! truth for the applied theme; [`ThemeCore`] only tracks whether the user
//! has made an explicit choice. Toggling therefore takes the live applied
//! theme as input rather than caching one, so the flip is always relative
//! to what the page actually shows.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key for the persisted theme preference.
pub const STORAGE_KEY: &str = "preferred-theme";

/// The two visual themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The string form used for both storage and the `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than the two known strings is
    /// treated as no stored preference.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Interpret a live `data-theme` attribute value. Only an explicit
    /// `"light"` counts as light; a missing or unknown attribute is dark,
    /// matching how the stylesheet defaults.
    #[must_use]
    pub fn from_attr(attr: Option<&str>) -> Self {
        if attr == Some("light") { Self::Light } else { Self::Dark }
    }

    /// The other theme.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Tracks whether the user has made an explicit theme choice this page
/// lifetime. OS scheme changes only apply while they have not.
#[derive(Debug)]
pub struct ThemeCore {
    has_user_preference: bool,
}

impl ThemeCore {
    /// Resolve the initial theme: stored preference first, then the OS
    /// scheme. A stored value counts as an explicit preference; the OS
    /// fallback does not.
    #[must_use]
    pub fn initial(stored: Option<Theme>, os_prefers_dark: bool) -> (Self, Theme) {
        let core = Self { has_user_preference: stored.is_some() };
        let theme = stored.unwrap_or(if os_prefers_dark { Theme::Dark } else { Theme::Light });
        (core, theme)
    }

    /// Flip the currently applied theme and record the choice as explicit.
    /// The caller persists the returned theme.
    pub fn toggle(&mut self, applied: Theme) -> Theme {
        self.has_user_preference = true;
        applied.flipped()
    }

    /// An OS scheme change arrived. Returns the theme to apply, or `None`
    /// once an explicit user choice has been recorded.
    #[must_use]
    pub fn os_change(&self, prefers_dark: bool) -> Option<Theme> {
        if self.has_user_preference {
            None
        } else {
            Some(if prefers_dark { Theme::Dark } else { Theme::Light })
        }
    }

    /// Whether an explicit user choice has been recorded.
    #[must_use]
    pub fn has_user_preference(&self) -> bool {
        self.has_user_preference
    }
}

/// Everything the toggle button shows for a given applied theme.
///
/// Pure data so the DOM refresh in the client is a straight copy and the
/// strings stay testable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleUi {
    /// Text for the nested `.theme-toggle__label` element.
    pub label: &'static str,
    /// Full class string for the nested icon element.
    pub icon_class: &'static str,
    /// Value for the button's `aria-pressed` attribute.
    pub aria_pressed: &'static str,
    /// Value for the button's `aria-label` attribute; names the mode the
    /// button switches *to*.
    pub aria_label: &'static str,
    /// Whether the button wears `btn-outline-light` (dark theme) as opposed
    /// to `btn-outline-dark` (light theme).
    pub outline_light: bool,
}

impl ToggleUi {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                label: "Dark",
                icon_class: "bi bi-moon-stars-fill",
                aria_pressed: "true",
                aria_label: "Switch to light mode",
                outline_light: true,
            },
            Theme::Light => Self {
                label: "Light",
                icon_class: "bi bi-sun-fill",
                aria_pressed: "false",
                aria_label: "Switch to dark mode",
                outline_light: false,
            },
        }
    }
}
