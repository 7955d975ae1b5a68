// This file is only compiled during tests

use std::collections::VecDeque;
use std::error::Error;

use crate::sensor::{RawSample, SensorDriver};

/// Scripted sensor driver: each read pops the next queued outcome; once a
/// queue runs dry the last successful sample repeats, like a chip whose
/// output registers hold their values between conversions. An `Err` entry
/// simulates one failed bus transaction.
pub struct MockSensor {
    magnetometer: VecDeque<Result<RawSample, String>>,
    accel: VecDeque<Result<RawSample, String>>,
    last_magnetometer: RawSample,
    last_accel: RawSample,
}

impl MockSensor {
    pub fn new() -> Self {
        Self {
            magnetometer: VecDeque::new(),
            accel: VecDeque::new(),
            last_magnetometer: (0, 0, 0),
            last_accel: (0, 0, 0),
        }
    }

    pub fn push_magnetometer(&mut self, outcome: Result<RawSample, String>) {
        self.magnetometer.push_back(outcome);
    }

    pub fn push_accel(&mut self, outcome: Result<RawSample, String>) {
        self.accel.push_back(outcome);
    }
}

impl SensorDriver for MockSensor {
    fn reset(&mut self) -> Result<(), Box<dyn Error>> {
        Ok(())
    }

    fn read_magnetometer(&mut self) -> Result<RawSample, Box<dyn Error>> {
        match self.magnetometer.pop_front() {
            Some(Ok(sample)) => {
                self.last_magnetometer = sample;
                Ok(sample)
            }
            Some(Err(message)) => Err(message.into()),
            None => Ok(self.last_magnetometer),
        }
    }

    fn read_accel(&mut self) -> Result<RawSample, Box<dyn Error>> {
        match self.accel.pop_front() {
            Some(Ok(sample)) => {
                self.last_accel = sample;
                Ok(sample)
            }
            Some(Err(message)) => Err(message.into()),
            None => Ok(self.last_accel),
        }
    }
}
