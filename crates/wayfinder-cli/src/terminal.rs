//! Terminal styling and capability detection.
//!
//! Colour codes are resolved once into a [`ColorPalette`]; renderers only ever
//! interpolate palette fields, so a plain palette yields uncoloured output
//! without any branching at the call sites.

use wayfinder_lib::TransitKind;

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    // Tag colors (bold reverse video badges)
    /// Bold reverse green for STRT tags.
    pub const TAG_START: &str = "\x1b[1;7;32m";
    /// Bold reverse yellow for STRS tags.
    pub const TAG_STAIRS: &str = "\x1b[1;7;33m";
    /// Bold reverse cyan for LIFT tags.
    pub const TAG_LIFT: &str = "\x1b[1;7;36m";
    /// Bold reverse blue for FLOR tags.
    pub const TAG_FLOOR: &str = "\x1b[1;7;34m";
    /// Reverse gray for WALK tags.
    pub const TAG_WALK: &str = "\x1b[7;90m";
    /// Bold reverse magenta for GOAL tags.
    pub const TAG_GOAL: &str = "\x1b[1;7;35m";

    /// Bright bold white for place names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for floor labels and decorations.
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for the logo border.
    pub const CYAN: &str = "\x1b[36m";
    /// Orange (256-color) for the logo text.
    pub const ORANGE: &str = "\x1b[38;5;208m";
}

/// Resolved color codes, either ANSI sequences or empty strings.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_start: &'static str,
    pub tag_stairs: &'static str,
    pub tag_lift: &'static str,
    pub tag_floor: &'static str,
    pub tag_walk: &'static str,
    pub tag_goal: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub orange: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_start: colors::TAG_START,
            tag_stairs: colors::TAG_STAIRS,
            tag_lift: colors::TAG_LIFT,
            tag_floor: colors::TAG_FLOOR,
            tag_walk: colors::TAG_WALK,
            tag_goal: colors::TAG_GOAL,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            orange: colors::ORANGE,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_start: "",
            tag_stairs: "",
            tag_lift: "",
            tag_floor: "",
            tag_walk: "",
            tag_goal: "",
            white_bold: "",
            gray: "",
            cyan: "",
            orange: "",
        }
    }

    /// Palette matching what the current terminal supports.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Badge color for a step taken with `kind`.
    #[must_use]
    pub const fn transit_color(&self, kind: TransitKind) -> &'static str {
        match kind {
            TransitKind::Stairs => self.tag_stairs,
            TransitKind::Lift => self.tag_lift,
            TransitKind::FloorChange => self.tag_floor,
            TransitKind::SameFloor => self.tag_walk,
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Four-letter badge text for a step taken with `kind`.
#[must_use]
pub const fn transit_tag(kind: TransitKind) -> &'static str {
    match kind {
        TransitKind::Stairs => "STRS",
        TransitKind::Lift => "LIFT",
        TransitKind::FloorChange => "FLOR",
        TransitKind::SameFloor => "WALK",
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Honours `NO_COLOR` (https://no-color.org/) and `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Check if the locale advertises UTF-8 through `LANG` or `LC_ALL`.
#[must_use]
pub fn supports_unicode() -> bool {
    let advertises_utf = |var: &str| {
        std::env::var(var)
            .map(|value| value.to_uppercase().contains("UTF"))
            .unwrap_or(false)
    };
    if advertises_utf("LANG") || advertises_utf("LC_ALL") {
        return true;
    }
    #[cfg(windows)]
    {
        return std::env::var("TERM")
            .map(|term| !term.eq_ignore_ascii_case("dumb"))
            .unwrap_or(true);
    }
    #[cfg(not(windows))]
    {
        false
    }
}
