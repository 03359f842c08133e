pub mod analysis;
#[cfg(feature = "desktop")]
pub mod camera;
pub mod config;
pub mod pose;
pub mod posture;
pub mod render;
