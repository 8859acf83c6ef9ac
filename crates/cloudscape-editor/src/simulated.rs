//! In-process editor host
//!
//! Stands in for the real editor: owns a scene, a view camera, console
//! variables, and a tick bus driven by a frame clock. Honors the background
//! update period while the window is unfocused.

use cloudscape_core::{EntityId, FrameClock, TimeConfig, Transform};

use crate::error::EditorError;
use crate::host::{
    BackgroundUpdate, ConsoleVariables, CvarRegistry, EditorCameraRequests, SceneTransforms,
};
use crate::tick::{TickBus, TickDispatcher, TickHandler, TickHandlerId};

pub struct SimulatedEditor {
    scene: SceneTransforms,
    view_camera: Option<EntityId>,
    cvars: CvarRegistry,
    tick_bus: TickDispatcher,
    clock: FrameClock,
    focused: bool,
    /// Seconds of unfocused time since the last periodic background tick
    background_elapsed: f32,
}

impl SimulatedEditor {
    pub fn new() -> Self {
        Self::with_time_config(TimeConfig::default())
    }

    pub fn with_time_config(config: TimeConfig) -> Self {
        Self {
            scene: SceneTransforms::new(),
            view_camera: None,
            cvars: CvarRegistry::new(),
            tick_bus: TickDispatcher::new(),
            clock: FrameClock::new(config),
            focused: true,
            background_elapsed: 0.0,
        }
    }

    /// Add a camera entity and make it the current view camera.
    pub fn spawn_camera(&mut self, transform: Transform) -> EntityId {
        let camera = self.scene.spawn(transform);
        self.view_camera = Some(camera);
        camera
    }

    pub fn set_view_camera(&mut self, camera: Option<EntityId>) {
        self.view_camera = camera;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.background_elapsed = 0.0;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn scene(&self) -> &SceneTransforms {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SceneTransforms {
        &mut self.scene
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn tick_bus_mut(&mut self) -> &mut TickDispatcher {
        &mut self.tick_bus
    }

    /// Dispatch one tick with exactly `delta_time`, bypassing clock and focus.
    pub fn tick(&mut self, delta_time: f32) {
        self.tick_bus.dispatch(delta_time, &mut self.scene);
    }

    /// Run one host frame of `raw_delta` seconds.
    ///
    /// Returns true if the tick bus was dispatched this frame.
    pub fn advance_frame(&mut self, raw_delta: f32) -> bool {
        let delta_time = self.clock.update(raw_delta);

        if self.focused {
            self.tick(delta_time);
            return true;
        }

        match BackgroundUpdate::read(&self.cvars) {
            BackgroundUpdate::Paused => false,
            BackgroundUpdate::Continuous => {
                self.tick(delta_time);
                true
            }
            BackgroundUpdate::Periodic(period_ms) => {
                self.background_elapsed += delta_time;
                let period = period_ms as f32 / 1000.0;
                if self.background_elapsed < period {
                    return false;
                }
                let elapsed = std::mem::take(&mut self.background_elapsed);
                self.tick(elapsed);
                true
            }
        }
    }
}

impl Default for SimulatedEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TickBus for SimulatedEditor {
    fn connect(&mut self, handler: Box<dyn TickHandler>) -> Result<TickHandlerId, EditorError> {
        self.tick_bus.connect(handler)
    }

    fn disconnect(&mut self, id: TickHandlerId) -> bool {
        self.tick_bus.disconnect(id)
    }

    fn handler_count(&self) -> usize {
        self.tick_bus.handler_count()
    }
}

impl EditorCameraRequests for SimulatedEditor {
    fn current_view_entity(&self) -> Option<EntityId> {
        self.view_camera
    }
}

impl ConsoleVariables for SimulatedEditor {
    fn cvar_integer(&self, name: &str) -> Option<i64> {
        self.cvars.cvar_integer(name)
    }

    fn set_cvar_integer(&mut self, name: &str, value: i64) {
        self.cvars.set_cvar_integer(name, value);
    }
}
