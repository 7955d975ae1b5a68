use rppal::i2c::I2c;
use std::error::Error;

use crate::sensor::{RawSample, SensorDriver};

// LSM303D registers
const LSM303D_ADDRESS: u16 = 0b0011101;
const LSM303D_WHO_AM_I: u8 = 0x0F;
const LSM303D_DEVICE_ID: u8 = 0x49;
const LSM303D_OUT_X_L_A: u8 = 0x28;
const LSM303D_OUT_X_L_M: u8 = 0x08;
const LSM303D_CTRL1: u8 = 0x20;
const LSM303D_CTRL2: u8 = 0x21;
const LSM303D_CTRL5: u8 = 0x24;
const LSM303D_CTRL6: u8 = 0x25;
const LSM303D_CTRL7: u8 = 0x26;

// LSM303DLHC registers (separate accelerometer and magnetometer addresses)
const LSM303DLHC_ADDRESS_A: u16 = 0b0011001;
const LSM303DLHC_ADDRESS_M: u16 = 0b0011110;
const LSM303DLHC_OUT_X_L_A: u8 = 0x28;
const LSM303DLHC_OUT_X_H_M: u8 = 0x03;
const LSM303DLHC_CTRL_REG1_A: u8 = 0x20;
const LSM303DLHC_CTRL_REG4_A: u8 = 0x23;
const LSM303DLHC_CRA_REG_M: u8 = 0x00;
const LSM303DLHC_CRB_REG_M: u8 = 0x01;
const LSM303DLHC_MR_REG_M: u8 = 0x02;

/// The two supported LSM303 chip variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SensorVariant {
    Lsm303d,
    Lsm303dlhc,
}

impl SensorVariant {
    /// Open the I2C bus and hand back the driver for this chip.
    pub fn open(self) -> Result<Box<dyn SensorDriver>, Box<dyn Error>> {
        match self {
            SensorVariant::Lsm303d => Ok(Box::new(Lsm303d::new()?)),
            SensorVariant::Lsm303dlhc => Ok(Box::new(Lsm303dlhc::new()?)),
        }
    }
}

fn read_block(i2c: &mut I2c, base: u8) -> Result<[u8; 6], Box<dyn Error>> {
    let mut data = [0u8; 6];
    for (i, item) in data.iter_mut().enumerate() {
        *item = i2c.smbus_read_byte(base + i as u8)?;
    }
    Ok(data)
}

/// LSM303D 3D accelerometer/magnetometer, both sensors behind one address.
pub struct Lsm303d {
    i2c: I2c,
}

impl Lsm303d {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let mut sensor = Self { i2c: I2c::new()? };
        sensor.i2c.set_slave_address(LSM303D_ADDRESS)?;

        let who_am_i = sensor.i2c.smbus_read_byte(LSM303D_WHO_AM_I)?;
        if who_am_i != LSM303D_DEVICE_ID {
            return Err(format!(
                "Wrong device ID: 0x{:02X}, expected 0x{:02X}",
                who_am_i, LSM303D_DEVICE_ID
            )
            .into());
        }

        sensor.reset()?;
        Ok(sensor)
    }
}

impl SensorDriver for Lsm303d {
    fn reset(&mut self) -> Result<(), Box<dyn Error>> {
        // Reinitialise the bus along with the sensor
        self.i2c = I2c::new()?;
        self.i2c.set_slave_address(LSM303D_ADDRESS)?;

        // Acc output data rate = 50Hz, all Acc axes enabled
        self.i2c.smbus_write_byte(LSM303D_CTRL1, 0b0101_0111)?;
        // Acc full scale = +/- 2g
        self.i2c.smbus_write_byte(LSM303D_CTRL2, 0b0000_0000)?;
        // Mag output data rate = 6.25Hz, Mag resolution = high
        self.i2c.smbus_write_byte(LSM303D_CTRL5, 0b0110_0100)?;
        // Mag full scale = +/- 4 gauss
        self.i2c.smbus_write_byte(LSM303D_CTRL6, 0b0010_0000)?;
        // Mag low power mode = Off, Mag sensor mode = Continuous-conversion
        self.i2c.smbus_write_byte(LSM303D_CTRL7, 0b0000_0000)?;
        Ok(())
    }

    fn read_accel(&mut self) -> Result<RawSample, Box<dyn Error>> {
        let data = read_block(&mut self.i2c, LSM303D_OUT_X_L_A)?;
        Ok((
            i16::from_le_bytes([data[0], data[1]]),
            i16::from_le_bytes([data[2], data[3]]),
            i16::from_le_bytes([data[4], data[5]]),
        ))
    }

    fn read_magnetometer(&mut self) -> Result<RawSample, Box<dyn Error>> {
        let data = read_block(&mut self.i2c, LSM303D_OUT_X_L_M)?;
        Ok((
            i16::from_le_bytes([data[0], data[1]]),
            i16::from_le_bytes([data[2], data[3]]),
            i16::from_le_bytes([data[4], data[5]]),
        ))
    }
}

/// LSM303DLHC 3D accelerometer/magnetometer. The two sensors answer on
/// separate addresses and the magnetometer outputs are big-endian in
/// X, Z, Y register order.
pub struct Lsm303dlhc {
    i2c: I2c,
}

impl Lsm303dlhc {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        // The DLHC has no WHO_AM_I register; a failed first register write
        // is the earliest sign the chip is absent.
        let mut sensor = Self { i2c: I2c::new()? };
        sensor.reset()?;
        Ok(sensor)
    }
}

impl SensorDriver for Lsm303dlhc {
    fn reset(&mut self) -> Result<(), Box<dyn Error>> {
        // Reinitialise the bus along with the sensor
        self.i2c = I2c::new()?;

        self.i2c.set_slave_address(LSM303DLHC_ADDRESS_A)?;
        // Acc output data rate = 50Hz, all Acc axes enabled
        self.i2c.smbus_write_byte(LSM303DLHC_CTRL_REG1_A, 0b0100_0111)?;
        // Acc full scale = +/- 2g, High Resolution Enable
        self.i2c.smbus_write_byte(LSM303DLHC_CTRL_REG4_A, 0b0000_1000)?;

        self.i2c.set_slave_address(LSM303DLHC_ADDRESS_M)?;
        // Mag output data rate = 30Hz
        self.i2c.smbus_write_byte(LSM303DLHC_CRA_REG_M, 0b0001_1000)?;
        // Mag full scale = +/- 1.3 gauss
        self.i2c.smbus_write_byte(LSM303DLHC_CRB_REG_M, 0b0010_1000)?;
        // Mag continuous conversion mode
        self.i2c.smbus_write_byte(LSM303DLHC_MR_REG_M, 0b0000_0000)?;
        Ok(())
    }

    fn read_accel(&mut self) -> Result<RawSample, Box<dyn Error>> {
        self.i2c.set_slave_address(LSM303DLHC_ADDRESS_A)?;
        let data = read_block(&mut self.i2c, LSM303DLHC_OUT_X_L_A)?;
        Ok((
            i16::from_le_bytes([data[0], data[1]]),
            i16::from_le_bytes([data[2], data[3]]),
            i16::from_le_bytes([data[4], data[5]]),
        ))
    }

    fn read_magnetometer(&mut self) -> Result<RawSample, Box<dyn Error>> {
        self.i2c.set_slave_address(LSM303DLHC_ADDRESS_M)?;
        let data = read_block(&mut self.i2c, LSM303DLHC_OUT_X_H_M)?;
        Ok((
            i16::from_be_bytes([data[0], data[1]]),
            i16::from_be_bytes([data[4], data[5]]),
            i16::from_be_bytes([data[2], data[3]]),
        ))
    }
}
