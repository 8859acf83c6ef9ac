//! Host editor collaborators
//!
//! The animator never owns the camera or the console variables; it talks to
//! the host through these traits.

use std::collections::HashMap;

use cloudscape_core::{EntityId, Transform};

use crate::tick::TickBus;

/// Console variable controlling ticking while the editor window is unfocused.
pub const BACKGROUND_UPDATE_PERIOD_CVAR: &str = "ed_backgroundUpdatePeriod";

/// Query for the camera the active viewport renders from.
pub trait EditorCameraRequests {
    fn current_view_entity(&self) -> Option<EntityId>;
}

/// World transform get/set for scene entities.
pub trait TransformRequests {
    fn world_transform(&self, entity: EntityId) -> Option<Transform>;

    /// Returns false if the entity does not exist.
    fn set_world_transform(&mut self, entity: EntityId, transform: Transform) -> bool;
}

/// Integer console variables of the host.
pub trait ConsoleVariables {
    fn cvar_integer(&self, name: &str) -> Option<i64>;
    fn set_cvar_integer(&mut self, name: &str, value: i64);
}

/// Everything the camera animator needs from the host editor.
pub trait EditorHost: TickBus + EditorCameraRequests + ConsoleVariables {}

impl<T: TickBus + EditorCameraRequests + ConsoleVariables + ?Sized> EditorHost for T {}

/// Whether the tick bus keeps running while the editor is unfocused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundUpdate {
    /// No ticks while unfocused (`0`)
    Paused,
    /// Tick every frame while unfocused (`-1`)
    Continuous,
    /// Tick once per period, in milliseconds, while unfocused
    Periodic(u32),
}

impl BackgroundUpdate {
    /// Decode the console variable value. Other negative values behave like `-1`.
    pub fn from_cvar(value: i64) -> Self {
        match value {
            0 => Self::Paused,
            v if v < 0 => Self::Continuous,
            v => Self::Periodic(u32::try_from(v).unwrap_or(u32::MAX)),
        }
    }

    pub fn to_cvar(self) -> i64 {
        match self {
            Self::Paused => 0,
            Self::Continuous => -1,
            Self::Periodic(ms) => i64::from(ms),
        }
    }

    /// Read the current policy, defaulting to `Paused` when the variable is unset.
    pub fn read<C: ConsoleVariables + ?Sized>(cvars: &C) -> Self {
        cvars
            .cvar_integer(BACKGROUND_UPDATE_PERIOD_CVAR)
            .map(Self::from_cvar)
            .unwrap_or(Self::Paused)
    }

    pub fn apply<C: ConsoleVariables + ?Sized>(self, cvars: &mut C) {
        cvars.set_cvar_integer(BACKGROUND_UPDATE_PERIOD_CVAR, self.to_cvar());
    }
}

impl Default for BackgroundUpdate {
    fn default() -> Self {
        Self::Paused
    }
}

/// In-memory transform storage keyed by entity.
#[derive(Debug, Default)]
pub struct SceneTransforms {
    transforms: HashMap<EntityId, Transform>,
}

impl SceneTransforms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity with the given transform and return its id.
    pub fn spawn(&mut self, transform: Transform) -> EntityId {
        let entity = EntityId::new();
        self.transforms.insert(entity, transform);
        entity
    }

    /// Insert or replace the transform of a known entity.
    pub fn insert(&mut self, entity: EntityId, transform: Transform) {
        self.transforms.insert(entity, transform);
    }

    pub fn despawn(&mut self, entity: EntityId) -> Option<Transform> {
        self.transforms.remove(&entity)
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl TransformRequests for SceneTransforms {
    fn world_transform(&self, entity: EntityId) -> Option<Transform> {
        self.transforms.get(&entity).copied()
    }

    fn set_world_transform(&mut self, entity: EntityId, transform: Transform) -> bool {
        match self.transforms.get_mut(&entity) {
            Some(slot) => {
                *slot = transform;
                true
            }
            None => false,
        }
    }
}

/// In-memory console variable table.
#[derive(Debug, Default)]
pub struct CvarRegistry {
    integers: HashMap<String, i64>,
}

impl CvarRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConsoleVariables for CvarRegistry {
    fn cvar_integer(&self, name: &str) -> Option<i64> {
        self.integers.get(name).copied()
    }

    fn set_cvar_integer(&mut self, name: &str, value: i64) {
        self.integers.insert(name.to_string(), value);
    }
}
