#[cfg(feature = "desktop")]
pub mod overlay;
pub mod skeleton;
pub mod style;
#[cfg(feature = "desktop")]
pub mod window;

#[cfg(feature = "desktop")]
pub use overlay::{add_title_banner, compose_frame, draw_skeleton, draw_verdicts};
pub use skeleton::SKELETON_CONNECTIONS;
#[cfg(feature = "desktop")]
pub use window::MinifbRenderer;
