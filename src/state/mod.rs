pub mod combo;
pub mod screen;
pub mod story_cursor;

pub use combo::{ClickReward, ComboState};
pub use screen::{Navigator, Screen};
pub use story_cursor::{StoryCursor, StoryPhase};
