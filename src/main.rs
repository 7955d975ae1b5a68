use std::thread;
use std::time::{Duration, Instant};

use rotator_rs::OrientationEngine;
use rotator_rs::compass::azimuth_to_direction;
use rotator_rs::config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Starting Antenna Pointing System...");

    let driver = config::SENSOR_VARIANT.open()?;
    println!("✓ Sensor ({:?}) initialized", config::SENSOR_VARIANT);

    let mut engine = OrientationEngine::new(
        driver,
        config::MOUNTING,
        config::SENSOR_ALPHA,
        config::MAGNETIC_DECLINATION,
    );

    print!("Settling filters...");
    std::io::Write::flush(&mut std::io::stdout()).ok();
    engine.begin()?;
    println!(" done");

    // Calibration is volatile; every start needs a fresh session.
    println!("\nCalibration session ({} seconds):", config::CALIBRATION_SECS);
    println!("Slowly swing the antenna through ALL orientations -");
    println!("full azimuth circles at several elevations.\n");

    engine.start_calibration();
    let session_start = Instant::now();
    let mut updates = 0u32;

    while session_start.elapsed() < Duration::from_secs(config::CALIBRATION_SECS) {
        engine.read_raw();
        if engine.calibrate() {
            updates += 1;
        }
        thread::sleep(Duration::from_millis(config::POLL_INTERVAL_MS));
    }

    let cal = engine.calibration();
    println!("✓ Calibration session complete ({} extrema updates)", updates);
    println!("  mag offset: {}  scale: {}", cal.me, cal.ms);
    println!("  acc offset: {}  scale: {}", cal.ge, cal.gs);

    if !cal.is_ready() {
        return Err("calibration incomplete: at least one axis saw no range - \
                    swing the antenna further and restart"
            .into());
    }

    println!("\nPointing loop started.\n");
    let mut last_status_update = Instant::now();

    loop {
        match engine.az_el() {
            Ok(pointing) => {
                if last_status_update.elapsed()
                    >= Duration::from_secs(config::STATUS_UPDATE_INTERVAL_SECS)
                {
                    let (direction, heading) = azimuth_to_direction(pointing.azimuth);
                    println!("{}  ({:.1}° {})", pointing, heading, direction);
                    last_status_update = Instant::now();
                }
            }
            Err(e) => {
                println!("⚠ No pointing solution: {}", e);
            }
        }

        thread::sleep(Duration::from_millis(config::POLL_INTERVAL_MS));
    }
}
