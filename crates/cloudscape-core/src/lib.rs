//! Cloudscape Core - Shared types and math for the Cloudscape editor tools
//!
//! This crate provides the foundational types used by the editor tooling:
//! - Mathematical primitives (re-exported from glam)
//! - Transform and entity handles for the host scene
//! - Constant-velocity motion stepping with Euler-degree rotations
//! - Frame clock for the editor tick loop

pub mod motion;
pub mod time;
pub mod types;

pub use glam::{Quat, Vec3};
pub use motion::{quat_from_euler_degrees, step_transform, VelocityState};
pub use time::{FrameClock, TimeConfig};
pub use types::{EntityId, Transform};
