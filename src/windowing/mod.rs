pub mod events;

pub use events::{EventKind, EventTranslator};
