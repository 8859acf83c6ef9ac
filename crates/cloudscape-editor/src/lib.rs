//! Cloudscape Editor - Viewport camera animator for the volumetric clouds tools
//!
//! Animates the current viewport camera with constant linear and angular
//! velocities entered in a small dialog. The host editor is reached through
//! the traits in [`host`] and the tick bus in [`tick`]; [`SimulatedEditor`]
//! implements all of them in-process.

mod animator;
mod dialog;
mod error;
pub mod host;
mod input;
mod simulated;
pub mod tick;

pub use animator::{AnimationSession, AnimationState, CameraAnimator, CameraMotion};
pub use dialog::{CameraAnimatorDialog, DialogAction, DialogStatus, DIALOG_TITLE};
pub use error::EditorError;
pub use host::{BackgroundUpdate, EditorHost, BACKGROUND_UPDATE_PERIOD_CVAR};
pub use input::{Vector3Field, ANGULAR_VELOCITY_LIMIT, LINEAR_VELOCITY_LIMIT};
pub use simulated::SimulatedEditor;
pub use tick::{TickBus, TickDispatcher, TickHandler, TickHandlerId};
