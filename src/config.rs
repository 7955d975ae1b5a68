use crate::lsm303::SensorVariant;
use crate::sensor::Mounting;

// ** SENSOR CONFIGURATION ** //

/// Which of the two supported sensor boards is fitted.
pub const SENSOR_VARIANT: SensorVariant = SensorVariant::Lsm303d;

/// How the sensor board is bolted to the antenna boom.
pub const MOUNTING: Mounting = Mounting::BOOM_TOP;

/// Low pass filter coefficient for all six sensor channels.
/// Decrease to increase damping (slower, smoother response).
pub const SENSOR_ALPHA: f64 = 0.1;

// ** POINTING CONFIGURATION ** //

/// Magnetic declination for this location (degrees).
/// Added to the raw azimuth to report true instead of magnetic bearings;
/// leave at 0.0 for magnetic bearings.
pub const MAGNETIC_DECLINATION: f64 = 0.0;

// ** MAIN CONFIGURATION ** //

/// How long the operator has to swing the antenna through all
/// orientations during the startup calibration session.
pub const CALIBRATION_SECS: u64 = 60;

/// Sensor polling interval (10Hz).
pub const POLL_INTERVAL_MS: u64 = 100;

pub const STATUS_UPDATE_INTERVAL_SECS: u64 = 1;
