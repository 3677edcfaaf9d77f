pub mod emitter;
pub mod geometry;
pub mod guides;
pub mod id;
pub mod model;
pub mod parser;
pub mod store;
pub mod style;

pub use emitter::serialize;
pub use geometry::{Geometry, MIN_ELEMENT_SIZE, ResizeDirection};
pub use guides::{Guide, GuideAxis, guides};
pub use id::ElementId;
pub use model::*;
pub use store::ElementStore;
pub use style::{PatchKey, StylePatch, merge};
