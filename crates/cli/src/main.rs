use std::path::PathBuf;

use anyhow::Result;

use scrollweave_core::driver::{DriverOptions, FrameDriver};
use scrollweave_protocol::MotionPreference;

fn main() -> Result<()> {
    env_logger::init();

    let mut steps: u32 = 10;
    let mut motion = MotionPreference::Full;
    let mut path: Option<PathBuf> = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--reduced-motion" => motion = MotionPreference::Reduced,
            other if path.is_none() => path = Some(PathBuf::from(other)),
            other => steps = other.parse::<u32>()?.max(1),
        }
    }

    let Some(path) = path else {
        eprintln!("Usage: scrollweave <scene.json|scene.toml> [steps] [--reduced-motion]");
        std::process::exit(1);
    };

    let data = std::fs::read(&path)?;
    let scene = scrollweave_core::config::load_scene(&data)?;
    log::info!(
        "loaded scene {:?} with {} timelines",
        scene.name(),
        scene.len()
    );

    let mut driver = FrameDriver::new(DriverOptions { motion });
    let id = driver.mount(scene);

    // Headless play: sweep progress 0..=1 and print each frame's command
    // list as a JSON line.
    for step in 0..=steps {
        let progress = f64::from(step) / f64::from(steps);
        driver.queue_progress(id, progress);
        let commands = driver.tick();
        let line = serde_json::to_string(&serde_json::json!({
            "progress": progress,
            "commands": commands,
        }))?;
        println!("{line}");
    }

    Ok(())
}
