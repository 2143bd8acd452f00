pub mod keys;
pub mod queue;
pub mod state;

pub use keys::{Control, Key, MouseButton};
pub use queue::{InputEvent, InputQueue};
pub use state::{InputState, PressTracker};
