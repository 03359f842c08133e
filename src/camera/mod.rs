pub mod capture;

pub use capture::{OpenCvCamera, FRAME_HEIGHT, FRAME_WIDTH};
