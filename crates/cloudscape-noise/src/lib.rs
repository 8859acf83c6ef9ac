//! Cloudscape Noise - NOISE_KERNEL table generation
//!
//! Samples random unit vectors and formats them as a `static const float3`
//! array for the cloudscape shader source.

mod kernel;

pub use kernel::{format_shader_array, generate_kernel, NoiseKernelConfig};
