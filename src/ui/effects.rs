//! WGPU shader system for visual effects
//!
//! Provides the custom shader widget rendering the drawer's radial
//! gradient backdrop, with dithering to avoid banding in the falloff.

pub mod background;

pub use background::RadialGradientProgram;
