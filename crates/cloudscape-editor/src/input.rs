//! Text entry for three-component vectors
//!
//! Values are bounded to `[-abs_max, abs_max]` with at most three decimals.

use glam::Vec3;

use crate::error::EditorError;

/// Largest accepted linear velocity component, in m/s.
pub const LINEAR_VELOCITY_LIMIT: f32 = 100.0;
/// Largest accepted angular velocity component, in deg/s.
pub const ANGULAR_VELOCITY_LIMIT: f32 = 359.0;
/// Decimals accepted and displayed per component.
pub const DECIMALS: usize = 3;

const AXES: [char; 3] = ['X', 'Y', 'Z'];

/// Editable X/Y/Z text boxes backing a `Vec3`
#[derive(Debug, Clone, PartialEq)]
pub struct Vector3Field {
    /// Text of the X, Y and Z boxes
    pub text: [String; 3],
    abs_max: f32,
}

impl Vector3Field {
    pub fn new(abs_max: f32) -> Self {
        Self {
            text: std::array::from_fn(|_| "0.0".to_string()),
            abs_max,
        }
    }

    pub fn linear_velocity() -> Self {
        Self::new(LINEAR_VELOCITY_LIMIT)
    }

    pub fn angular_velocity() -> Self {
        Self::new(ANGULAR_VELOCITY_LIMIT)
    }

    pub fn abs_max(&self) -> f32 {
        self.abs_max
    }

    /// Axis label and mutable text of each box, in X/Y/Z order.
    pub fn axes_mut(&mut self) -> impl Iterator<Item = (char, &mut String)> {
        AXES.into_iter().zip(self.text.iter_mut())
    }

    /// Parse all three boxes.
    pub fn parse(&self) -> Result<Vec3, EditorError> {
        let mut values = [0.0f32; 3];
        for ((value, axis), text) in values.iter_mut().zip(AXES).zip(&self.text) {
            *value = parse_component(axis, text, self.abs_max)?;
        }
        Ok(Vec3::from_array(values))
    }

    /// Overwrite the boxes with `value`, three decimals each.
    pub fn set(&mut self, value: Vec3) {
        for (text, component) in self.text.iter_mut().zip(value.to_array()) {
            *text = format!("{:.*}", DECIMALS, component);
        }
    }
}

fn parse_component(axis: char, text: &str, abs_max: f32) -> Result<f32, EditorError> {
    let invalid = |reason: String| EditorError::InvalidInput {
        axis,
        text: text.to_string(),
        reason,
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(invalid("value is empty".to_string()));
    }

    let value: f32 = trimmed
        .parse()
        .map_err(|_| invalid("not a number".to_string()))?;
    if !value.is_finite() {
        return Err(invalid("not a finite number".to_string()));
    }
    if value.abs() > abs_max {
        return Err(invalid(format!("must be within ±{}", abs_max)));
    }

    let mantissa = trimmed.split(['e', 'E']).next().unwrap_or(trimmed);
    if let Some((_, fraction)) = mantissa.split_once('.') {
        if fraction.len() > DECIMALS {
            return Err(invalid(format!("at most {} decimals", DECIMALS)));
        }
    }

    Ok(value)
}
