//! Headless tour driver: loads a marker directory and flies through the
//! requested districts, logging every frame instead of drawing it.
//!
//! Usage: `vantage <markers-dir> [options.toml] <district>...`

use std::path::Path;
use std::time::Duration;

use glam::Vec3;
use vantage::camera::{CameraState, FogRange};
use vantage::options::Options;
use vantage::tour::{OrbitInput, SceneRenderer, TourController, TourState, ViewLayer};
use vantage::viewpoint::{NavigationTarget, ViewpointStore};
use web_time::Instant;

/// Longest a single flight may take before the driver gives up on it.
const FLIGHT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
struct LogRenderer {
    camera: Option<CameraState>,
    fog: Option<FogRange>,
    frames: u64,
}

impl SceneRenderer for LogRenderer {
    fn set_camera(&mut self, camera: &CameraState) {
        self.camera = Some(*camera);
    }

    fn set_fog(&mut self, fog: FogRange) {
        self.fog = Some(fog);
    }

    fn render(&mut self) {
        self.frames += 1;
        if let (Some(camera), Some(fog)) = (self.camera, self.fog) {
            log::debug!(
                "frame {}: eye {:.1} look {:.1} fog {:.0}..{:.0}",
                self.frames,
                camera.position,
                camera.look_at,
                fog.near,
                fog.far
            );
        }
    }
}

/// Orbit controls that stay wherever the last frame left the camera.
struct ParkedOrbit {
    enabled: bool,
    position: Vec3,
    target: Vec3,
}

impl OrbitInput for ParkedOrbit {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        log::debug!("orbit input {}", if enabled { "on" } else { "off" });
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn target(&self) -> Vec3 {
        self.target
    }

    fn sync(&mut self, camera: &CameraState) {
        self.position = camera.position;
        self.target = camera.look_at;
    }
}

struct LogCards;

impl ViewLayer for LogCards {
    fn arrived(&mut self, target: &NavigationTarget) {
        log::info!("Showing info cards for {target}");
    }
}

fn load_options(path: Option<&str>) -> Options {
    let Some(path) = path else {
        return Options::default();
    };
    match Options::load(Path::new(path)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}; falling back to defaults");
            Options::default()
        }
    }
}

fn fly(tour: &mut TourController<LogRenderer, ParkedOrbit, LogCards>, clock: Instant, name: &str) {
    if tour.navigate_to(name).is_err() {
        return;
    }

    let started = Instant::now();
    while tour.state() == TourState::Transitioning {
        if started.elapsed() > FLIGHT_TIMEOUT {
            log::error!("Flight to {name} timed out");
            return;
        }
        let now_ms = clock.elapsed().as_secs_f64() * 1000.0;
        if tour.on_animation_frame(now_ms).is_none() {
            std::thread::sleep(Duration::from_millis(1));
        }
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(markers) = args.next() else {
        log::error!("Usage: vantage <markers-dir> [options.toml] <district>...");
        std::process::exit(1);
    };
    let mut rest: Vec<String> = args.collect();
    let options_path = rest
        .first()
        .filter(|arg| Path::new(arg.as_str()).extension().is_some_and(|ext| ext == "toml"))
        .cloned();
    if options_path.is_some() {
        let _ = rest.remove(0);
    }
    let options = load_options(options_path.as_deref());

    let loaded = match ViewpointStore::load_dir(Path::new(&markers), options.markers.axis) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let home = CameraState::default();
    let orbit = ParkedOrbit {
        enabled: true,
        position: home.position,
        target: home.look_at,
    };
    let mut tour =
        TourController::new(loaded.store, &options, LogRenderer::default(), orbit, LogCards);

    let clock = Instant::now();
    for name in &rest {
        fly(&mut tour, clock, name);
    }

    log::info!(
        "Tour done: {} frames at ~{:.0} fps, {} unresolved, {} superseded, orbit {}",
        tour.renderer().frames,
        tour.fps(),
        tour.resolution_failures(),
        tour.supersessions(),
        if tour.orbit().enabled { "on" } else { "off" }
    );
}
