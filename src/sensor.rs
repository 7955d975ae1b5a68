use std::error::Error;

use crate::vector::Vec3;

/// One raw tri-axis sample in device-native units.
pub type RawSample = (i16, i16, i16);

/// Access to one magnetometer/accelerometer pair, one implementation per
/// supported chip variant. The orientation engine only ever asks for the
/// next sample; register maps and bus details stay behind this seam.
pub trait SensorDriver {
    /// Reinitialize the bus and rewrite the control registers. Called once
    /// at startup and again before every read, because the sensor is
    /// inclined to lock up after running a long time.
    fn reset(&mut self) -> Result<(), Box<dyn Error>>;

    /// Read one accelerometer sample in the device frame.
    fn read_accel(&mut self) -> Result<RawSample, Box<dyn Error>>;

    /// Read one magnetometer sample in the device frame.
    fn read_magnetometer(&mut self) -> Result<RawSample, Box<dyn Error>>;
}

/// One reference-frame component drawn from a device axis, possibly
/// sign-flipped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Axis {
    X,
    NegX,
    Y,
    NegY,
    Z,
    NegZ,
}

impl Axis {
    fn pick(&self, (x, y, z): (f64, f64, f64)) -> f64 {
        match self {
            Axis::X => x,
            Axis::NegX => -x,
            Axis::Y => y,
            Axis::NegY => -y,
            Axis::Z => z,
            Axis::NegZ => -z,
        }
    }
}

/// Static remap from the sensor's device axes to the antenna reference
/// axes. This depends only on how the sensor board is bolted to the boom;
/// it is configuration, never computed.
#[derive(Clone, Copy, Debug)]
pub struct AxisTransform {
    pub x: Axis,
    pub y: Axis,
    pub z: Axis,
}

impl AxisTransform {
    pub const IDENTITY: AxisTransform = AxisTransform {
        x: Axis::X,
        y: Axis::Y,
        z: Axis::Z,
    };

    pub fn apply(&self, sample: RawSample) -> Vec3 {
        let s = (sample.0 as f64, sample.1 as f64, sample.2 as f64);
        Vec3::new(self.x.pick(s), self.y.pick(s), self.z.pick(s))
    }
}

/// The two per-sensor transforms for one physical mounting.
#[derive(Clone, Copy, Debug)]
pub struct Mounting {
    pub magnetometer: AxisTransform,
    pub accelerometer: AxisTransform,
}

impl Mounting {
    pub const IDENTITY: Mounting = Mounting {
        magnetometer: AxisTransform::IDENTITY,
        accelerometer: AxisTransform::IDENTITY,
    };

    /// Sensor board flat on top of the boom, long side parallel to it.
    /// The device axes (X', Y', Z') map to the reference axes as
    /// MX = -MY', MY = MX', MZ = MZ', and the gravity vector is the
    /// opposite of the device acceleration: GX = AY', GY = -AX', GZ = -AZ'.
    pub const BOOM_TOP: Mounting = Mounting {
        magnetometer: AxisTransform {
            x: Axis::NegY,
            y: Axis::X,
            z: Axis::Z,
        },
        accelerometer: AxisTransform {
            x: Axis::Y,
            y: Axis::NegX,
            z: Axis::NegZ,
        },
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transform() {
        let v = AxisTransform::IDENTITY.apply((100, -200, 300));
        assert_eq!(v, Vec3::new(100.0, -200.0, 300.0));
    }

    #[test]
    fn test_boom_top_magnetometer_remap() {
        let v = Mounting::BOOM_TOP.magnetometer.apply((10, 20, 30));
        assert_eq!(v, Vec3::new(-20.0, 10.0, 30.0));
    }

    #[test]
    fn test_boom_top_gravity_remap() {
        // Device at rest reads +1g on its Z axis; gravity points down the
        // reference Z axis.
        let v = Mounting::BOOM_TOP.accelerometer.apply((0, 0, 1000));
        assert_eq!(v, Vec3::new(0.0, 0.0, -1000.0));
    }
}
