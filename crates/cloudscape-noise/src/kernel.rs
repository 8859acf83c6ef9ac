use std::fmt::Write;

use glam::DVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

const INDENT: &str = "    ";

/// Settings for one generated kernel table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseKernelConfig {
    /// Name of the shader array
    pub array_name: String,
    /// Number of vectors; values below 1 produce a single vector
    pub count: usize,
    /// Fixed seed for reproducible tables, entropy when unset
    pub seed: Option<u64>,
}

impl Default for NoiseKernelConfig {
    fn default() -> Self {
        Self {
            array_name: "NOISE_KERNEL".to_string(),
            count: 6,
            seed: None,
        }
    }
}

impl NoiseKernelConfig {
    /// Generate the vectors and return the shader text.
    pub fn generate(&self) -> String {
        let seed = self.seed.unwrap_or_else(rand::random);
        debug!("Generating {} with {} vectors, seed {}", self.array_name, self.count, seed);
        format_shader_array(&self.array_name, &generate_kernel(self.count, seed))
    }
}

/// Sample `max(1, count)` random unit vectors.
///
/// Each component is drawn uniformly from `[-1, 1)` before normalizing, so
/// the directions are biased towards the cube's diagonals.
pub fn generate_kernel(count: usize, seed: u64) -> Vec<DVec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count.max(1)).map(|_| random_unit_vector(&mut rng)).collect()
}

fn random_unit_vector<R: Rng>(rng: &mut R) -> DVec3 {
    loop {
        let v = DVec3::new(
            rng.gen::<f64>() * 2.0 - 1.0,
            rng.gen::<f64>() * 2.0 - 1.0,
            rng.gen::<f64>() * 2.0 - 1.0,
        );
        // Redraw the (practically impossible) zero vector
        if let Some(unit) = v.try_normalize() {
            return unit;
        }
    }
}

/// Format vectors as a shader array literal with eight decimals per component.
pub fn format_shader_array(array_name: &str, vectors: &[DVec3]) -> String {
    let mut text = format!(
        "{INDENT}static const float3 {}[{}] = {{\n",
        array_name,
        vectors.len()
    );
    for v in vectors {
        let _ = writeln!(
            text,
            "{INDENT}{INDENT}float3({:.8}, {:.8}, {:.8}),",
            v.x, v.y, v.z
        );
    }
    text.push_str(INDENT);
    text.push_str("};\n");
    text
}
