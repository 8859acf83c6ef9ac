//! Cloudscape Tools - headless driver for the viewport camera animator
//!
//! Runs the camera animator against an in-process editor for the number of
//! frames configured in the settings file and reports where the camera ends up.

mod settings;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cloudscape_core::{Transform, VelocityState};
use cloudscape_editor::host::TransformRequests;
use cloudscape_editor::{BackgroundUpdate, CameraAnimator, SimulatedEditor, Vector3Field};

use settings::{AnimationSettings, ToolSettings};

/// Validate the configured velocities the same way the dialog does
fn velocity_from_settings(animation: &AnimationSettings) -> Result<VelocityState> {
    let mut linear = Vector3Field::linear_velocity();
    linear.set(animation.linear_velocity);
    let mut angular = Vector3Field::angular_velocity();
    angular.set(animation.angular_velocity);

    Ok(VelocityState::new(
        linear.parse().context("Invalid linear velocity in settings")?,
        angular.parse().context("Invalid angular velocity in settings")?,
    ))
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    info!("Starting Cloudscape tools...");

    let settings = ToolSettings::load_or_init();
    let animation = &settings.animation;
    let velocity = velocity_from_settings(animation)?;

    let mut editor = SimulatedEditor::with_time_config(settings.time.clone());
    let camera = editor.spawn_camera(Transform::default());
    editor.set_focused(animation.focused);

    let mut animator = CameraAnimator::new();
    animator
        .start(&mut editor, velocity)
        .context("Failed to start camera animation")?;
    info!(
        "Background update policy: {:?}",
        BackgroundUpdate::read(&editor)
    );

    let frame_delta = animation.frame_delta();
    let mut ticked = 0u32;
    for _ in 0..animation.frames {
        if editor.advance_frame(frame_delta) {
            ticked += 1;
        }
    }

    animator.stop(&mut editor);

    let clock = editor.clock();
    info!(
        "Ran {} frames ({} ticked) over {:.3}s",
        clock.frame_count, ticked, clock.total_time
    );

    let final_transform = editor
        .scene()
        .world_transform(camera)
        .context("Camera disappeared from the scene")?;
    info!(
        "Camera {} at {} facing {}",
        camera,
        final_transform.position,
        final_transform.forward()
    );

    if let Some(kernel) = &settings.noise_kernel {
        info!("Generating {} table with {} vectors", kernel.array_name, kernel.count.max(1));
        println!("{}", kernel.generate());
    }

    Ok(())
}
