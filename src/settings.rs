//! Tool settings with persistence
//!
//! Settings are saved to `~/.config/cloudscape-tools/settings.toml`

use std::fs;
use std::path::{Path, PathBuf};

use cloudscape_core::TimeConfig;
use cloudscape_noise::NoiseKernelConfig;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// All tool settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub animation: AnimationSettings,
    pub time: TimeConfig,
    /// NOISE_KERNEL table to print after the run, if present
    pub noise_kernel: Option<NoiseKernelConfig>,
}

impl ToolSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cloudscape-tools"))
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from the config directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load settings, writing a default file for the user to edit when none exists
    pub fn load_or_init() -> Self {
        let settings = Self::load();
        if Self::settings_path().is_some_and(|path| !path.exists()) {
            if let Err(e) = settings.save() {
                warn!("Failed to write default settings: {}", e);
            }
        }
        settings
    }

    /// Load settings from `path`, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to the config directory
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(path) = Self::settings_path() else {
            anyhow::bail!("Could not determine config directory");
        };
        self.save_to(&path)
    }

    /// Save settings to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// Headless camera animation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Linear velocity in m/s
    pub linear_velocity: Vec3,
    /// Angular velocity in deg/s
    pub angular_velocity: Vec3,
    /// Simulated frames per second
    pub frame_rate: f32,
    /// Number of frames to run
    pub frames: u32,
    /// Whether the simulated editor window has focus
    pub focused: bool,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            linear_velocity: Vec3::new(0.0, 5.0, 0.0),
            angular_velocity: Vec3::new(0.0, 0.0, 10.0),
            frame_rate: 60.0,
            frames: 600,
            focused: true,
        }
    }
}

impl AnimationSettings {
    /// Seconds per simulated frame
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.frame_rate.max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: ToolSettings = toml::from_str(
            r#"
            [animation]
            linear_velocity = [1.0, 2.0, 3.0]
            frames = 10
            "#,
        )
        .unwrap();

        assert_eq!(settings.animation.linear_velocity, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(settings.animation.frames, 10);
        assert_eq!(settings.animation.frame_rate, 60.0);
        assert_eq!(settings.time.max_delta_time, 0.25);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("cloudscape-tools-{}", std::process::id()))
            .join("settings.toml");
        let mut settings = ToolSettings::default();
        settings.animation.focused = false;
        settings.time.time_scale = 0.5;

        settings.save_to(&path).unwrap();
        let loaded = ToolSettings::load_from(&path);
        let _ = fs::remove_dir_all(path.parent().unwrap());

        assert!(!loaded.animation.focused);
        assert_eq!(loaded.time.time_scale, 0.5);
    }

    #[test]
    fn test_noise_kernel_section() {
        let settings: ToolSettings = toml::from_str(
            r#"
            [noise_kernel]
            count = 8
            seed = 1234
            "#,
        )
        .unwrap();

        let kernel = settings.noise_kernel.unwrap();
        assert_eq!(kernel.array_name, "NOISE_KERNEL");
        assert_eq!(kernel.count, 8);
        assert_eq!(kernel.seed, Some(1234));
        assert!(kernel.generate().contains("NOISE_KERNEL[8]"));

        let without: ToolSettings = toml::from_str("").unwrap();
        assert!(without.noise_kernel.is_none());
    }

    #[test]
    fn test_noise_kernel_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("cloudscape-tools-kernel-{}", std::process::id()))
            .join("settings.toml");
        let settings = ToolSettings {
            noise_kernel: Some(NoiseKernelConfig {
                array_name: "CONE_KERNEL".to_string(),
                count: 4,
                seed: Some(7),
            }),
            ..Default::default()
        };

        settings.save_to(&path).unwrap();
        let loaded = ToolSettings::load_from(&path);
        let _ = fs::remove_dir_all(path.parent().unwrap());

        assert_eq!(loaded.noise_kernel, settings.noise_kernel);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = ToolSettings::load_from(Path::new("/nonexistent/cloudscape/settings.toml"));
        assert_eq!(settings.animation.frames, 600);
    }

    #[test]
    fn test_frame_delta_guards_low_rates() {
        let mut animation = AnimationSettings::default();
        assert!((animation.frame_delta() - 1.0 / 60.0).abs() < 1e-6);
        animation.frame_rate = 0.0;
        assert_eq!(animation.frame_delta(), 1.0);
    }
}
