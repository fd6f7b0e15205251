//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the copy shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "^S:submit";

/// Clear shortcut display for help text
pub const CLEAR_SHORTCUT: &str = "^R:clear";

/// Copy last contact shortcut display
/// - macOS: "Cmd+Y"
/// - Linux/Windows: "^Y"
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Cmd+Y:copy";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "^Y:copy";
