//! Terminal styling for repograph output
//!
//! Text is styled by role through [`Stylize`]; lanes of the commit graph are
//! painted in their lineage's hex color with [`lineage`]. Whether anything is
//! actually colored is left to `owo-colors`, which honors `NO_COLOR`,
//! `CLICOLOR`, `CLICOLOR_FORCE` and TTY detection per stream.
//!
//! | Role       | Look   | Stream | Used for                            |
//! |------------|--------|--------|-------------------------------------|
//! | `accent`   | cyan   | stdout | SHAs, names, counts                 |
//! | `muted`    | dim    | stdout | authors, dates, footnotes           |
//! | `emphasis` | bold   | stdout | section headers                     |
//! | `error`    | red    | stderr | command failures                    |

use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Style};
use repograph::graph::hex_to_rgb;
use std::fmt;
use std::sync::LazyLock;

pub use owo_colors::Stream;

/// Semantic role of a piece of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Accent,
    Success,
    Muted,
    Emphasis,
    Error,
}

impl Role {
    const fn style(self) -> Style {
        match self {
            Self::Accent => Style::new().cyan(),
            Self::Success => Style::new().green(),
            Self::Muted => Style::new().dimmed(),
            Self::Emphasis => Style::new().bold(),
            Self::Error => Style::new().red(),
        }
    }

    const fn stream(self) -> Stream {
        match self {
            Self::Error => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

/// Value rendered with a style when the target stream supports color
#[derive(Debug, Clone)]
pub struct Painted<T> {
    value: T,
    style: Style,
    stream: Stream,
}

impl<T> Painted<T> {
    const fn as_role(value: T, role: Role) -> Self {
        Self {
            value,
            style: role.style(),
            stream: role.stream(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.style;
        fmt::Display::fmt(
            &self.value.if_supports_color(self.stream, |v| v.style(style)),
            f,
        )
    }
}

/// Role-based styling for anything printable
pub trait Stylize: fmt::Display {
    /// Cyan, for the values a reader scans for
    fn accent(&self) -> Painted<&Self> {
        Painted::as_role(self, Role::Accent)
    }

    /// Dim, for secondary details
    fn muted(&self) -> Painted<&Self> {
        Painted::as_role(self, Role::Muted)
    }

    /// Bold, for headers
    fn emphasis(&self) -> Painted<&Self> {
        Painted::as_role(self, Role::Emphasis)
    }

    /// Red on stderr
    fn error(&self) -> Painted<&Self> {
        Painted::as_role(self, Role::Error)
    }
}

impl<T: fmt::Display + ?Sized> Stylize for T {}

/// Paint `value` in a lineage's hex color; colors that fail to parse paint nothing
pub fn lineage<T: fmt::Display>(value: T, hex: &str) -> Painted<T> {
    let style = match hex_to_rgb(hex) {
        Some((r, g, b)) => Style::new().truecolor(r, g, b),
        None => Style::new(),
    };
    Painted {
        value,
        style,
        stream: Stream::Stdout,
    }
}

/// Success mark
pub const CHECK: &str = "✓";
/// Failure mark
pub const CROSS: &str = "✗";
/// Ordinary commit on its lane
pub const COMMIT: &str = "●";
/// Merge commit on its lane
pub const MERGE: &str = "◆";
/// Lane passing through a row
pub const PIPE: &str = "│";
/// Protected branch
pub const LOCK: &str = "⚿";

/// Green [`CHECK`]
pub const fn check() -> Painted<&'static str> {
    Painted::as_role(CHECK, Role::Success)
}

/// Red [`CROSS`], for stderr
pub const fn cross() -> Painted<&'static str> {
    Painted::as_role(CROSS, Role::Error)
}

/// `text` as an OSC 8 link to `url` where the terminal supports it
///
/// Empty URLs and terminals without link support get the bare text.
pub fn hyperlink(stream: Stream, text: &str, url: &str) -> String {
    let target = match stream {
        Stream::Stdout => supports_hyperlinks::Stream::Stdout,
        Stream::Stderr => supports_hyperlinks::Stream::Stderr,
    };
    if url.is_empty() || !supports_hyperlinks::on(target) {
        return text.to_string();
    }
    terminal_link::Link::new(text, url).to_string()
}

static SPINNER: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}")
        .expect("spinner template is a literal")
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
});

/// Spinner shown while repository data is being fetched
pub fn spinner_style() -> ProgressStyle {
    SPINNER.clone()
}
