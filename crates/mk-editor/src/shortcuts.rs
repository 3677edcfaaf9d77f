//! Keyboard shortcut mapping.
//!
//! Maps `KeyboardEvent.key` values to semantic `ShortcutAction`s. Only bare
//! keys are bound; anything chorded with Ctrl or ⌘ is left to the host
//! (copy, paste, browser shortcuts).

use crate::input::Modifiers;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    AddRectangle,
    AddText,
    /// Remove the selected element.
    Delete,
    Deselect,
}

/// Resolves key events into shortcut actions.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action, or `None` if it has no binding.
    pub fn resolve(key: &str, modifiers: &Modifiers) -> Option<ShortcutAction> {
        if modifiers.command() {
            return None;
        }

        match key {
            "r" | "R" => Some(ShortcutAction::AddRectangle),
            "t" | "T" => Some(ShortcutAction::AddText),
            "Delete" | "Backspace" => Some(ShortcutAction::Delete),
            "Escape" => Some(ShortcutAction::Deselect),
            _ => None,
        }
    }
}
