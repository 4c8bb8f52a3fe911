//! Preview app: host-facing wiring around the core state machine.
mod config;
mod session;
mod surface;

pub use config::{load_config, PreviewConfig, CONFIG_FILENAME};
pub use session::PreviewSession;
pub use surface::{RenderSurface, ScriptRequest};
