//! Preview core: pure per-view state machine for the live preview.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{LoadPhase, ViewState};
pub use update::update;
pub use view_model::{preview_title, PreviewViewModel};
