pub mod config;
pub mod editor;
pub mod input;
pub mod panel;
pub mod shortcuts;
pub mod sync;
pub mod tools;

pub use config::{EditorConfig, TEXT_PLACEHOLDER};
pub use editor::{Editor, EditorSnapshot};
pub use input::{InputEvent, Modifiers, PointerTarget};
pub use panel::{PanelEntry, PanelField};
pub use shortcuts::{ShortcutAction, ShortcutMap};
pub use sync::{Mutation, SyncEngine};
