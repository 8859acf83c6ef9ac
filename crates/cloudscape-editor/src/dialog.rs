//! Camera animator dialog UI

use egui::{Color32, RichText, TextEdit, Ui};
use tracing::warn;

use cloudscape_core::VelocityState;

use crate::animator::{AnimationState, CameraAnimator};
use crate::error::EditorError;
use crate::host::EditorHost;
use crate::input::Vector3Field;

pub const DIALOG_TITLE: &str = "Camera Animator Dialog";

/// What the user asked for this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogAction {
    #[default]
    None,
    Animate,
    Stop,
}

/// Line shown under the buttons
#[derive(Debug, Clone, PartialEq)]
pub enum DialogStatus {
    Info(String),
    Error(String),
}

/// Velocity inputs plus the animator they drive
pub struct CameraAnimatorDialog {
    pub linear_velocity: Vector3Field,
    pub angular_velocity: Vector3Field,
    animator: CameraAnimator,
    status: Option<DialogStatus>,
}

impl CameraAnimatorDialog {
    pub fn new() -> Self {
        Self {
            linear_velocity: Vector3Field::linear_velocity(),
            angular_velocity: Vector3Field::angular_velocity(),
            animator: CameraAnimator::new(),
            status: None,
        }
    }

    pub fn status(&self) -> Option<&DialogStatus> {
        self.status.as_ref()
    }

    /// Show the dialog as a floating window
    pub fn show(&mut self, ctx: &egui::Context) -> DialogAction {
        egui::Window::new(DIALOG_TITLE)
            .resizable(false)
            .show(ctx, |ui| self.render(ui))
            .and_then(|response| response.inner)
            .unwrap_or_default()
    }

    /// Render the dialog body and return the button pressed, if any
    pub fn render(&mut self, ui: &mut Ui) -> DialogAction {
        let mut action = DialogAction::None;

        ui.label("Linear Velocity [m/s]");
        vector3_row(ui, &mut self.linear_velocity);
        ui.add_space(8.0);

        ui.label("Angular Velocity [deg/s]");
        vector3_row(ui, &mut self.angular_velocity);
        ui.add_space(8.0);

        if ui.button("Animate").clicked() {
            action = DialogAction::Animate;
        }
        if ui.button("Stop").clicked() {
            action = DialogAction::Stop;
        }

        match &self.status {
            Some(DialogStatus::Info(text)) => {
                ui.label(RichText::new(text).color(Color32::from_rgb(160, 200, 160)));
            }
            Some(DialogStatus::Error(text)) => {
                ui.label(RichText::new(text).color(Color32::from_rgb(230, 90, 90)));
            }
            None => {}
        }

        action
    }

    /// Apply a button press against the host editor
    pub fn handle_action<H: EditorHost + ?Sized>(&mut self, action: DialogAction, host: &mut H) {
        match action {
            DialogAction::None => {}
            DialogAction::Animate => self.animate(host),
            DialogAction::Stop => {
                if self.animator.stop(host) {
                    self.status = Some(DialogStatus::Info("Stopped camera animation".to_string()));
                }
            }
        }
    }

    fn animate<H: EditorHost + ?Sized>(&mut self, host: &mut H) {
        self.status = Some(match self.try_animate(host) {
            Ok(()) => DialogStatus::Info("Camera animation running".to_string()),
            Err(e) => {
                warn!("Could not start camera animation: {}", e);
                DialogStatus::Error(e.to_string())
            }
        });
    }

    fn try_animate<H: EditorHost + ?Sized>(&mut self, host: &mut H) -> Result<(), EditorError> {
        let velocity = VelocityState::new(
            self.linear_velocity.parse()?,
            self.angular_velocity.parse()?,
        );
        self.animator.start(host, velocity)
    }

    pub fn is_animating(&self) -> bool {
        self.animator.state() == AnimationState::Animating
    }
}

impl Default for CameraAnimatorDialog {
    fn default() -> Self {
        Self::new()
    }
}

fn vector3_row(ui: &mut Ui, field: &mut Vector3Field) {
    ui.horizontal(|ui| {
        for (axis, text) in field.axes_mut() {
            ui.label(axis.to_string());
            ui.add(TextEdit::singleline(text).desired_width(64.0));
        }
    });
}
