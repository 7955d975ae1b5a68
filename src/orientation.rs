use std::error::Error;
use std::fmt;

use crate::calibration::AxisCalibrator;
use crate::filter::LowPassFilter;
use crate::sensor::{Mounting, SensorDriver};
use crate::vector::Vec3;

/// Startup read cycles used to settle the filter transients.
const STARTUP_READS: usize = 50;

/// Calibration state derived from the six per-axis calibrators.
///
/// `me`/`ge` are the per-axis offsets (hard-iron/DC error) and `ms`/`gs`
/// the per-axis scale factors of the magnetometer and accelerometer.
#[derive(Clone, Copy, Debug)]
pub struct CalibrationSet {
    /// Magnetic declination in degrees, added to the raw azimuth to
    /// convert a magnetic bearing to a true bearing.
    pub declination: f64,
    pub me: Vec3,
    pub ge: Vec3,
    pub ms: Vec3,
    pub gs: Vec3,
}

impl CalibrationSet {
    fn new(declination: f64) -> Self {
        Self {
            declination,
            me: Vec3::ZERO,
            ge: Vec3::ZERO,
            ms: Vec3::ZERO,
            gs: Vec3::ZERO,
        }
    }

    /// True once every axis has observed two distinct extrema, so the
    /// calibrated-value division is well defined on all six channels.
    pub fn is_ready(&self) -> bool {
        self.ms.i != 0.0
            && self.ms.j != 0.0
            && self.ms.k != 0.0
            && self.gs.i != 0.0
            && self.gs.j != 0.0
            && self.gs.k != 0.0
    }
}

/// Antenna pointing angles in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointing {
    /// Horizontal angle in `(-180°, 180°]`, 0° = north.
    pub azimuth: f64,
    /// Vertical angle relative to horizontal.
    pub elevation: f64,
}

impl fmt::Display for Pointing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "az {:.1}° el {:.1}°", self.azimuth, self.elevation)
    }
}

/// Combines calibrated magnetometer and accelerometer readings into the
/// antenna's azimuth and elevation.
///
/// The engine owns one calibrator and one low-pass filter per channel.
/// During a calibration session (started with [`start_calibration`]) the
/// antenna is swung through all orientations while [`calibrate`] is called
/// once per read cycle; the running extrema of each axis yield the offset
/// and scale corrections applied by [`az_el`].
///
/// [`start_calibration`]: OrientationEngine::start_calibration
/// [`calibrate`]: OrientationEngine::calibrate
/// [`az_el`]: OrientationEngine::az_el
pub struct OrientationEngine {
    driver: Box<dyn SensorDriver>,
    mounting: Mounting,
    cal: CalibrationSet,
    cal_mx: AxisCalibrator,
    cal_my: AxisCalibrator,
    cal_mz: AxisCalibrator,
    cal_gx: AxisCalibrator,
    cal_gy: AxisCalibrator,
    cal_gz: AxisCalibrator,
    fil_mx: LowPassFilter,
    fil_my: LowPassFilter,
    fil_mz: LowPassFilter,
    fil_gx: LowPassFilter,
    fil_gy: LowPassFilter,
    fil_gz: LowPassFilter,
    raw_mag: Vec3,
    raw_gravity: Vec3,
    mag: Vec3,
    gravity: Vec3,
    azimuth: f64,
    elevation: f64,
}

impl OrientationEngine {
    pub fn new(
        driver: Box<dyn SensorDriver>,
        mounting: Mounting,
        alpha: f64,
        declination: f64,
    ) -> Self {
        Self {
            driver,
            mounting,
            cal: CalibrationSet::new(declination),
            cal_mx: AxisCalibrator::new(),
            cal_my: AxisCalibrator::new(),
            cal_mz: AxisCalibrator::new(),
            cal_gx: AxisCalibrator::new(),
            cal_gy: AxisCalibrator::new(),
            cal_gz: AxisCalibrator::new(),
            fil_mx: LowPassFilter::new(alpha),
            fil_my: LowPassFilter::new(alpha),
            fil_mz: LowPassFilter::new(alpha),
            fil_gx: LowPassFilter::new(alpha),
            fil_gy: LowPassFilter::new(alpha),
            fil_gz: LowPassFilter::new(alpha),
            raw_mag: Vec3::ZERO,
            raw_gravity: Vec3::ZERO,
            mag: Vec3::ZERO,
            gravity: Vec3::ZERO,
            azimuth: 0.0,
            elevation: 0.0,
        }
    }

    /// One-time startup: configure the sensor, then run enough read cycles
    /// for the filter startup transients to decay.
    pub fn begin(&mut self) -> Result<(), Box<dyn Error>> {
        self.driver.reset()?;
        for _ in 0..STARTUP_READS {
            self.read_raw();
        }
        Ok(())
    }

    /// Start a calibration session, discarding all previously observed
    /// extrema.
    pub fn start_calibration(&mut self) {
        self.cal_mx.reset();
        self.cal_my.reset();
        self.cal_mz.reset();
        self.cal_gx.reset();
        self.cal_gy.reset();
        self.cal_gz.reset();
    }

    /// Feed the current filtered readings to the per-axis calibrators.
    /// The derived offset and scale vectors are rebuilt only when at least
    /// one axis observed a new extremum; the return value reports that.
    pub fn calibrate(&mut self) -> bool {
        let mut changed = self.cal_mx.sample(self.mag.i, false);
        changed = self.cal_my.sample(self.mag.j, changed);
        changed = self.cal_mz.sample(self.mag.k, changed);
        changed = self.cal_gx.sample(self.gravity.i, changed);
        changed = self.cal_gy.sample(self.gravity.j, changed);
        changed = self.cal_gz.sample(self.gravity.k, changed);
        if changed {
            self.cal.me = Vec3::new(
                self.cal_mx.offset(),
                self.cal_my.offset(),
                self.cal_mz.offset(),
            );
            self.cal.ge = Vec3::new(
                self.cal_gx.offset(),
                self.cal_gy.offset(),
                self.cal_gz.offset(),
            );
            self.cal.ms = Vec3::new(
                self.cal_mx.scale(),
                self.cal_my.scale(),
                self.cal_mz.scale(),
            );
            self.cal.gs = Vec3::new(
                self.cal_gx.scale(),
                self.cal_gy.scale(),
                self.cal_gz.scale(),
            );
        }
        changed
    }

    /// Read one magnetometer and one accelerometer sample, apply the
    /// mounting axis transform and low-pass filter each channel.
    ///
    /// The sensor is reinitialized before every read as it is inclined to
    /// lock up after running a long time. A failed read keeps the previous
    /// values; the fusion simply proceeds with stale data.
    pub fn read_raw(&mut self) {
        self.driver.reset().ok();
        if let Ok(sample) = self.driver.read_magnetometer() {
            let m = self.mounting.magnetometer.apply(sample);
            self.raw_mag = m;
            self.mag = Vec3::new(
                self.fil_mx.update(m.i),
                self.fil_my.update(m.j),
                self.fil_mz.update(m.k),
            );
        }
        if let Ok(sample) = self.driver.read_accel() {
            let g = self.mounting.accelerometer.apply(sample);
            self.raw_gravity = g;
            self.gravity = Vec3::new(
                self.fil_gx.update(g.i),
                self.fil_gy.update(g.j),
                self.fil_gz.update(g.k),
            );
        }
    }

    /// Read the sensor and compute the antenna pointing angles.
    ///
    /// Fails while any axis scale is still zero (no calibration session has
    /// observed two distinct extrema on it) and when the calibrated field
    /// vectors give no horizontal reference (zero or parallel). Angles are
    /// never produced from degenerate input.
    pub fn az_el(&mut self) -> Result<Pointing, Box<dyn Error>> {
        self.read_raw();

        if !self.cal.is_ready() {
            return Err("not calibrated: run a calibration session first".into());
        }

        // Unit vectors of the earth's magnetic and gravitational fields:
        // for each component subtract the offset and divide by the scale.
        let m = ((self.mag - self.cal.me) / self.cal.ms).unit();
        let g = ((self.gravity - self.cal.ge) / self.cal.gs).unit();
        if m == Vec3::ZERO || g == Vec3::ZERO {
            return Err("degenerate sensor reading: zero field vector".into());
        }

        // The antenna axes are the main reference axes; Y is the boresight.
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);

        // Magnetic ground axes relative to the antenna axes.
        let east = g.cross(m);
        if east.magnitude() == 0.0 {
            return Err("magnetic field parallel to gravity: no horizontal reference".into());
        }
        let north = east.cross(g);
        let up = -g;

        // Scalar projections of the antenna axes onto the ground axes.
        let xn = x.dot(north);
        let xe = x.dot(east);
        let yu = y.dot(up);
        let zu = z.dot(up);

        let mut azimuth = (-xn).atan2(xe).to_degrees() + self.cal.declination;
        while azimuth > 180.0 {
            azimuth -= 360.0;
        }
        while azimuth <= -180.0 {
            azimuth += 360.0;
        }
        let elevation = yu.atan2(zu).to_degrees();

        self.azimuth = azimuth;
        self.elevation = elevation;
        Ok(Pointing { azimuth, elevation })
    }

    /// Externally supplied declination; 0 keeps magnetic bearings.
    pub fn set_declination(&mut self, declination: f64) {
        self.cal.declination = declination;
    }

    pub fn calibration(&self) -> &CalibrationSet {
        &self.cal
    }

    /// Latest filtered, axis-corrected magnetometer reading.
    pub fn magnetic_reading(&self) -> Vec3 {
        self.mag
    }

    /// Latest filtered, axis-corrected gravity reading.
    pub fn gravity_reading(&self) -> Vec3 {
        self.gravity
    }

    /// Latest unfiltered, axis-corrected magnetometer reading.
    pub fn raw_magnetic_reading(&self) -> Vec3 {
        self.raw_mag
    }

    /// Latest unfiltered, axis-corrected gravity reading.
    pub fn raw_gravity_reading(&self) -> Vec3 {
        self.raw_gravity
    }

    /// Last computed pointing angles.
    pub fn pointing(&self) -> Pointing {
        Pointing {
            azimuth: self.azimuth,
            elevation: self.elevation,
        }
    }
}
