#[cfg(feature = "desktop")]
pub mod detector;
pub mod keypoint;
pub mod movenet;
#[cfg(feature = "desktop")]
pub mod preprocess;

#[cfg(feature = "desktop")]
pub use detector::{MoveNetDetector, PoseEstimator};
pub use keypoint::{KeypointIndex, Landmark, Skeleton};
pub use movenet::decode_single_pose;
#[cfg(feature = "desktop")]
pub use preprocess::preprocess_for_movenet;
