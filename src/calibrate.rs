use std::thread;
use std::time::Duration;

use rotator_rs::OrientationEngine;
use rotator_rs::config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║     Antenna Sensor Calibration Tool                  ║");
    println!("╚══════════════════════════════════════════════════════╝\n");

    println!("Instructions:");
    println!("1. Slowly swing the antenna through FULL azimuth circles");
    println!("2. Repeat at several elevations, including straight up");
    println!("3. Keep going until the offsets stop moving");
    println!("4. Press Ctrl+C when done\n");

    println!("Starting in 5 seconds...\n");
    thread::sleep(Duration::from_secs(5));

    let driver = config::SENSOR_VARIANT.open()?;
    let mut engine = OrientationEngine::new(
        driver,
        config::MOUNTING,
        config::SENSOR_ALPHA,
        config::MAGNETIC_DECLINATION,
    );
    engine.begin()?;
    engine.start_calibration();

    let mut sample_count = 0;

    println!("Collecting samples... (SWING NOW!)");
    println!(
        "\n{:^8} | {:^26} | {:^26}",
        "Sample", "Mag offset / scale", "Acc offset / scale"
    );
    println!("{:-<8}-+-{:-<26}-+-{:-<26}", "", "", "");

    loop {
        engine.read_raw();
        engine.calibrate();
        sample_count += 1;

        // Print update every 10 samples
        if sample_count % 10 == 0 {
            let cal = engine.calibration();
            println!(
                "{:^8} | {} / {} | {} / {}",
                sample_count, cal.me, cal.ms, cal.ge, cal.gs
            );
        }

        thread::sleep(Duration::from_millis(config::POLL_INTERVAL_MS));
    }
}
