//! Viewport camera animation
//!
//! Moves the current viewport camera with a constant linear and angular
//! velocity. Each tick advances the camera's world transform by one Euler
//! step of the elapsed frame time.

use cloudscape_core::{step_transform, EntityId, Transform, VelocityState};
use tracing::{debug, info};

use crate::error::EditorError;
use crate::host::{BackgroundUpdate, EditorHost, TransformRequests};
use crate::tick::{TickHandler, TickHandlerId};

/// Whether a camera animation is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Animating,
}

/// Tick handler that moves one camera entity.
#[derive(Debug, Clone, Copy)]
pub struct CameraMotion {
    camera: EntityId,
    velocity: VelocityState,
}

impl CameraMotion {
    pub fn new(camera: EntityId, velocity: VelocityState) -> Self {
        Self { camera, velocity }
    }

    /// Advance the camera by `delta_time` seconds and return its new transform.
    pub fn advance(
        &self,
        delta_time: f32,
        transforms: &mut dyn TransformRequests,
    ) -> Result<Transform, EditorError> {
        let current = transforms
            .world_transform(self.camera)
            .ok_or(EditorError::CameraUnavailable)?;
        let next = step_transform(&current, &self.velocity, delta_time);
        if !transforms.set_world_transform(self.camera, next) {
            return Err(EditorError::CameraUnavailable);
        }
        Ok(next)
    }
}

impl TickHandler for CameraMotion {
    fn on_tick(&mut self, delta_time: f32, transforms: &mut dyn TransformRequests) {
        // A missing camera is transient: skip the frame, keep the session.
        if let Err(e) = self.advance(delta_time, transforms) {
            debug!("Skipping camera animation frame for {}: {}", self.camera, e);
        }
    }
}

/// A running camera animation: one tick subscription for one camera.
///
/// Created by [`AnimationSession::start`] and ended by [`AnimationSession::stop`].
/// Dropping a session does not disconnect it: the handler keeps moving the
/// camera on every tick. [`CameraAnimator`] is the supported owner
/// and stops its session on replace and on stop.
#[must_use = "dropping a session without calling stop leaves its tick handler connected"]
#[derive(Debug)]
pub struct AnimationSession {
    camera: EntityId,
    velocity: VelocityState,
    handler: TickHandlerId,
}

impl AnimationSession {
    /// Start animating the host's current view camera.
    ///
    /// Keeps the host ticking while its window is unfocused for as long as the
    /// session runs.
    pub fn start<H: EditorHost + ?Sized>(
        host: &mut H,
        velocity: VelocityState,
    ) -> Result<Self, EditorError> {
        let camera = host
            .current_view_entity()
            .ok_or(EditorError::CameraUnavailable)?;

        info!("linear velocity={}", velocity.linear);
        info!("angular velocity={}", velocity.angular);
        if velocity.is_zero() {
            debug!("Both velocities are zero, camera {} will not move", camera);
        }

        let handler = host.connect(Box::new(CameraMotion::new(camera, velocity)))?;
        BackgroundUpdate::Continuous.apply(host);

        info!("Started camera animation!");
        Ok(Self {
            camera,
            velocity,
            handler,
        })
    }

    /// Disconnect the tick handler and stop ticking while unfocused.
    pub fn stop<H: EditorHost + ?Sized>(self, host: &mut H) {
        host.disconnect(self.handler);
        BackgroundUpdate::Paused.apply(host);
        info!("Stopped camera animation!");
    }

    pub fn camera(&self) -> EntityId {
        self.camera
    }

    pub fn velocity(&self) -> VelocityState {
        self.velocity
    }

    pub fn handler(&self) -> TickHandlerId {
        self.handler
    }
}

/// Owns at most one [`AnimationSession`].
///
/// Starting while animating replaces the running session, so the camera is
/// never driven by two tick handlers at once.
#[derive(Debug, Default)]
pub struct CameraAnimator {
    session: Option<AnimationSession>,
}

impl CameraAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start<H: EditorHost + ?Sized>(
        &mut self,
        host: &mut H,
        velocity: VelocityState,
    ) -> Result<(), EditorError> {
        self.stop(host);
        self.session = Some(AnimationSession::start(host, velocity)?);
        Ok(())
    }

    /// Stop the running session. Returns false if there was nothing to stop.
    pub fn stop<H: EditorHost + ?Sized>(&mut self, host: &mut H) -> bool {
        match self.session.take() {
            Some(session) => {
                session.stop(host);
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> AnimationState {
        if self.session.is_some() {
            AnimationState::Animating
        } else {
            AnimationState::Idle
        }
    }

    pub fn session(&self) -> Option<&AnimationSession> {
        self.session.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;
    use crate::host::{ConsoleVariables, BACKGROUND_UPDATE_PERIOD_CVAR};
    use crate::simulated::SimulatedEditor;
    use crate::tick::TickBus;

    fn editor_with_camera(start: Transform) -> (SimulatedEditor, EntityId) {
        let mut editor = SimulatedEditor::new();
        let camera = editor.spawn_camera(start);
        (editor, camera)
    }

    fn position(editor: &SimulatedEditor, camera: EntityId) -> Vec3 {
        editor.scene().world_transform(camera).unwrap().position
    }

    #[test]
    fn test_tick_moves_camera() {
        let (mut editor, camera) = editor_with_camera(Transform::default());
        let mut animator = CameraAnimator::new();
        animator
            .start(&mut editor, VelocityState::new(Vec3::X, Vec3::ZERO))
            .unwrap();

        editor.tick(2.0);
        assert!(position(&editor, camera).abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_tick_rotates_camera() {
        let (mut editor, camera) = editor_with_camera(Transform::default());
        let mut animator = CameraAnimator::new();
        animator
            .start(
                &mut editor,
                VelocityState::new(Vec3::ZERO, Vec3::new(0.0, 90.0, 0.0)),
            )
            .unwrap();

        editor.tick(1.0);
        let rotation = editor.scene().world_transform(camera).unwrap().rotation;
        let expected = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        assert!(rotation.abs_diff_eq(expected, 1e-5) || rotation.abs_diff_eq(-expected, 1e-5));
    }

    #[test]
    fn test_zero_delta_leaves_camera_unchanged() {
        let start = Transform::from_position_rotation(
            Vec3::new(5.0, 6.0, 7.0),
            Quat::from_rotation_z(0.4),
        );
        let (mut editor, camera) = editor_with_camera(start);
        let mut animator = CameraAnimator::new();
        animator
            .start(
                &mut editor,
                VelocityState::new(Vec3::splat(3.0), Vec3::splat(45.0)),
            )
            .unwrap();

        editor.tick(0.0);
        let after = editor.scene().world_transform(camera).unwrap();
        assert_eq!(after.position, start.position);
        assert!(after.rotation.abs_diff_eq(start.rotation, 1e-6));
    }

    #[test]
    fn test_start_subscribes_and_enables_background_ticking() {
        let (mut editor, camera) = editor_with_camera(Transform::default());
        let mut animator = CameraAnimator::new();
        assert_eq!(animator.state(), AnimationState::Idle);

        let velocity = VelocityState::new(Vec3::Y, Vec3::Z);
        animator.start(&mut editor, velocity).unwrap();

        assert_eq!(animator.state(), AnimationState::Animating);
        assert_eq!(editor.handler_count(), 1);
        assert_eq!(editor.cvar_integer(BACKGROUND_UPDATE_PERIOD_CVAR), Some(-1));

        let session = animator.session().unwrap();
        assert_eq!(session.camera(), camera);
        assert_eq!(session.velocity(), velocity);
    }

    #[test]
    fn test_restart_does_not_stack_subscriptions() {
        let (mut editor, camera) = editor_with_camera(Transform::default());
        let mut animator = CameraAnimator::new();
        let velocity = VelocityState::new(Vec3::X, Vec3::ZERO);

        animator.start(&mut editor, velocity).unwrap();
        let first = animator.session().unwrap().handler();
        animator.start(&mut editor, velocity).unwrap();
        assert_ne!(animator.session().unwrap().handler(), first);
        assert_eq!(editor.handler_count(), 1);

        for _ in 0..10 {
            editor.tick(1.0);
        }
        assert!(position(&editor, camera).abs_diff_eq(Vec3::new(10.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let (mut editor, _) = editor_with_camera(Transform::default());
        let mut animator = CameraAnimator::new();
        animator
            .start(&mut editor, VelocityState::new(Vec3::X, Vec3::ZERO))
            .unwrap();

        assert!(animator.stop(&mut editor));
        assert_eq!(editor.cvar_integer(BACKGROUND_UPDATE_PERIOD_CVAR), Some(0));

        // A second stop must not touch the console variable again.
        editor.set_cvar_integer(BACKGROUND_UPDATE_PERIOD_CVAR, 500);
        assert!(!animator.stop(&mut editor));
        assert_eq!(editor.cvar_integer(BACKGROUND_UPDATE_PERIOD_CVAR), Some(500));
        assert_eq!(editor.handler_count(), 0);
        assert_eq!(animator.state(), AnimationState::Idle);
    }

    #[test]
    fn test_session_stop_releases_handler() {
        let (mut editor, camera) = editor_with_camera(Transform::default());
        let session =
            AnimationSession::start(&mut editor, VelocityState::new(Vec3::X, Vec3::ZERO)).unwrap();
        assert_eq!(session.camera(), camera);
        assert_eq!(editor.handler_count(), 1);

        session.stop(&mut editor);
        assert_eq!(editor.handler_count(), 0);
        assert_eq!(editor.cvar_integer(BACKGROUND_UPDATE_PERIOD_CVAR), Some(0));

        editor.tick(1.0);
        assert_eq!(position(&editor, camera), Vec3::ZERO);
    }

    #[test]
    fn test_animator_stop_releases_replaced_handlers() {
        let (mut editor, _) = editor_with_camera(Transform::default());
        let mut animator = CameraAnimator::new();
        animator
            .start(&mut editor, VelocityState::new(Vec3::X, Vec3::ZERO))
            .unwrap();
        let first = animator.session().unwrap().handler();
        animator
            .start(&mut editor, VelocityState::new(Vec3::Y, Vec3::ZERO))
            .unwrap();
        assert_ne!(animator.session().unwrap().handler(), first);
        assert_eq!(editor.handler_count(), 1);

        assert!(animator.stop(&mut editor));
        assert_eq!(editor.handler_count(), 0);
        assert!(animator.session().is_none());
    }

    #[test]
    fn test_stop_before_start_is_noop() {
        let mut editor = SimulatedEditor::new();
        let mut animator = CameraAnimator::new();
        assert!(!animator.stop(&mut editor));
        assert_eq!(editor.cvar_integer(BACKGROUND_UPDATE_PERIOD_CVAR), None);
    }

    #[test]
    fn test_ticks_after_stop_have_no_effect() {
        let (mut editor, camera) = editor_with_camera(Transform::default());
        let mut animator = CameraAnimator::new();
        animator
            .start(&mut editor, VelocityState::new(Vec3::X, Vec3::splat(10.0)))
            .unwrap();

        editor.tick(0.5);
        animator.stop(&mut editor);
        let stopped = editor.scene().world_transform(camera).unwrap();

        editor.tick(0.5);
        assert_eq!(editor.scene().world_transform(camera).unwrap(), stopped);
    }

    #[test]
    fn test_start_without_camera_fails() {
        let mut editor = SimulatedEditor::new();
        let mut animator = CameraAnimator::new();

        let result = animator.start(&mut editor, VelocityState::default());
        assert_eq!(result, Err(EditorError::CameraUnavailable));
        assert_eq!(animator.state(), AnimationState::Idle);
        assert_eq!(editor.handler_count(), 0);
        assert_eq!(editor.cvar_integer(BACKGROUND_UPDATE_PERIOD_CVAR), None);
    }

    #[test]
    fn test_start_with_closed_tick_bus_fails() {
        let (mut editor, _) = editor_with_camera(Transform::default());
        editor.tick_bus_mut().shutdown();
        let mut animator = CameraAnimator::new();

        let result = animator.start(&mut editor, VelocityState::default());
        assert_eq!(result, Err(EditorError::TickBusUnavailable));
        assert_eq!(animator.state(), AnimationState::Idle);
        assert_eq!(editor.cvar_integer(BACKGROUND_UPDATE_PERIOD_CVAR), None);
    }

    #[test]
    fn test_missing_camera_skips_frame_and_keeps_session() {
        let (mut editor, camera) = editor_with_camera(Transform::default());
        let mut animator = CameraAnimator::new();
        animator
            .start(&mut editor, VelocityState::new(Vec3::X, Vec3::ZERO))
            .unwrap();

        let saved = editor.scene_mut().despawn(camera).unwrap();
        editor.tick(1.0);
        assert_eq!(animator.state(), AnimationState::Animating);
        assert_eq!(editor.handler_count(), 1);

        // Same entity comes back: animation resumes from where it was.
        editor.scene_mut().insert(camera, saved);
        editor.tick(1.0);
        assert!(position(&editor, camera).abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn test_advance_reports_missing_camera() {
        let mut scene = crate::host::SceneTransforms::new();
        let motion = CameraMotion::new(EntityId::new(), VelocityState::default());
        assert_eq!(
            motion.advance(0.1, &mut scene),
            Err(EditorError::CameraUnavailable)
        );
    }
}
