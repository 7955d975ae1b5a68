pub mod calibration;
pub mod compass;
pub mod config;
pub mod filter;
pub mod lsm303;
pub mod orientation;
pub mod sensor;
pub mod vector;

// Re-export commonly used types
pub use calibration::AxisCalibrator;
pub use filter::LowPassFilter;
pub use orientation::{OrientationEngine, Pointing};
pub use sensor::SensorDriver;
pub use vector::Vec3;

#[cfg(test)]
pub(crate) mod mocks;
