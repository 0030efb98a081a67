//! TUI constants: colors, timing, and scroll amounts.

use ratatui::style::Color;

/// Accent green color (#98FB98).
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Error red for validation messages.
pub(super) const ERROR: Color = Color::Rgb(255, 121, 121);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;

/// How long the "Copied" toast stays visible.
pub(crate) const COPY_TOAST_MS: u64 = 1500;

/// Sample text shown in the settings panel preview.
pub(super) const PREVIEW_TEXT: &str = "Bionic reading guides the eye through text.";

/// Minimalist logo (single character).
pub(super) const LOGO: &str = "◆";
