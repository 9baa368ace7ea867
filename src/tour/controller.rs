//! The tour controller and its frame loop.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::interfaces::{OrbitInput, SceneRenderer, ViewLayer};
use crate::animation::{Superseded, TransitionEngine, TransitionSession};
use crate::camera::{CameraAuthority, CameraState, Envelope, FogModel, FogRange};
use crate::error::ResolutionError;
use crate::options::{Options, TransitionOptions};
use crate::util::frame_timing::FramePacer;
use crate::viewpoint::{Destination, NavigationTarget, ViewpointStore};

/// Externally visible tour state. Supersession stays in `Transitioning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourState {
    /// The user holds the camera.
    Idle,
    /// A flight is in progress.
    Transitioning,
}

/// A navigation request that started a flight.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationStarted {
    /// Where the flight goes.
    pub destination: Destination,
    /// The flight this one replaced, if any.
    pub superseded: Option<Superseded>,
}

/// What one frame produced.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Constrained camera handed to the renderer.
    pub camera: CameraState,
    /// Fog handed to the renderer.
    pub fog: FogRange,
    /// Who wrote the camera this frame.
    pub authority: CameraAuthority,
    /// Navigation that landed this frame.
    pub arrived: Option<NavigationTarget>,
}

/// Drives the guided tour over a loaded viewpoint catalogue.
///
/// Owns the camera and the three host collaborators, so every component
/// call goes through one explicit context instead of shared globals.
pub struct TourController<R, O, V> {
    store: ViewpointStore,
    resolved: FxHashMap<String, Destination>,
    envelope: Envelope,
    fog: FogModel,
    transition: TransitionOptions,
    pacer: FramePacer,

    engine: TransitionEngine,
    camera: CameraState,
    authority: CameraAuthority,
    active: Option<NavigationTarget>,
    // Filled by completion hooks, drained by `frame`.
    arrivals: Rc<RefCell<VecDeque<NavigationTarget>>>,

    resolution_failures: u64,
    supersessions: u64,

    renderer: R,
    orbit: O,
    view: V,
}

impl<R, O, V> TourController<R, O, V>
where
    R: SceneRenderer,
    O: OrbitInput,
    V: ViewLayer,
{
    /// Build a controller. The camera starts wherever the orbit controls
    /// are, under user authority.
    pub fn new(
        store: ViewpointStore,
        options: &Options,
        renderer: R,
        mut orbit: O,
        view: V,
    ) -> Self {
        orbit.set_enabled(true);
        let camera = CameraState::looking_at(orbit.position(), orbit.target());
        if store.is_empty() {
            log::warn!("Tour started with no viewpoints; navigation will no-op");
        }

        Self {
            store,
            resolved: FxHashMap::default(),
            envelope: Envelope::new(&options.envelope),
            fog: FogModel::new(&options.fog),
            transition: options.transition.clone(),
            pacer: FramePacer::new(options.frame.target_fps),
            engine: TransitionEngine::new(),
            camera,
            authority: CameraAuthority::User,
            active: None,
            arrivals: Rc::new(RefCell::new(VecDeque::new())),
            resolution_failures: 0,
            supersessions: 0,
            renderer,
            orbit,
            view,
        }
    }

    /// Fly to a district or page.
    ///
    /// An unknown name is reported and ignored: the camera, its authority
    /// and any flight in progress are left exactly as they were. A known
    /// name takes the camera from the user (or from the flight it
    /// supersedes) and starts a new flight from the current pose.
    pub fn navigate_to(
        &mut self,
        target: impl Into<NavigationTarget>,
    ) -> Result<NavigationStarted, ResolutionError> {
        let target = target.into();
        let destination = match self.resolve(&target) {
            Ok(destination) => destination,
            Err(e) => {
                self.resolution_failures += 1;
                log::warn!("Navigation ignored: {e}");
                return Err(e);
            }
        };

        // Under user authority the orbit holds the live pose.
        let start = if self.authority == CameraAuthority::User {
            let pose = CameraState::looking_at(
                self.envelope.constrain(self.orbit.position()),
                self.orbit.target(),
            );
            self.orbit.set_enabled(false);
            self.authority = CameraAuthority::Tour;
            pose
        } else {
            self.camera
        };

        let arrivals = Rc::clone(&self.arrivals);
        let landed = target.clone();
        let session = TransitionSession::begin(
            &start,
            destination.placement,
            &self.transition,
        )
        .with_easing(self.transition.easing)
        .on_complete(move |_| arrivals.borrow_mut().push_back(landed));

        let superseded = self.engine.begin(session);
        if superseded.is_some() {
            self.supersessions += 1;
        }

        log::info!(
            "Flying to {target} (marker {})",
            destination.camera_marker
        );
        self.active = Some(target);

        Ok(NavigationStarted {
            destination,
            superseded,
        })
    }

    fn resolve(
        &mut self,
        target: &NavigationTarget,
    ) -> Result<Destination, ResolutionError> {
        let key = target.name().to_lowercase();
        if let Some(destination) = self.resolved.get(&key) {
            return Ok(Destination {
                target: target.clone(),
                ..destination.clone()
            });
        }
        let destination = self.store.resolve(target)?;
        let _ = self.resolved.insert(key, destination.clone());
        Ok(destination)
    }

    /// Run one frame at `now_ms` if the frame pacer lets it through.
    pub fn on_animation_frame(&mut self, now_ms: f64) -> Option<FrameReport> {
        if !self.pacer.accept(now_ms) {
            return None;
        }
        Some(self.frame(now_ms))
    }

    /// Run one frame at `now_ms`, unpaced.
    pub fn frame(&mut self, now_ms: f64) -> FrameReport {
        let authority = self.authority;
        let mut camera = match self.engine.tick(now_ms) {
            Some(outcome) => outcome.state,
            None if authority == CameraAuthority::User => {
                CameraState::looking_at(self.orbit.position(), self.orbit.target())
            }
            None => self.camera,
        };

        let constrained = self.envelope.constrain(camera.position);
        // A pulled eye re-aims at its target.
        if constrained != camera.position {
            camera = CameraState::looking_at(constrained, camera.look_at);
        }
        self.camera = camera;

        let fog = self.fog.compute_fog(camera.position);
        self.renderer.set_camera(&camera);
        self.renderer.set_fog(fog);
        self.renderer.render();
        self.orbit.sync(&camera);

        let arrived = self.arrivals.borrow_mut().pop_front();
        if let Some(target) = &arrived {
            self.land(target);
        }

        FrameReport {
            camera,
            fog,
            authority,
            arrived,
        }
    }

    fn land(&mut self, target: &NavigationTarget) {
        self.authority = CameraAuthority::User;
        self.active = None;
        self.orbit.set_enabled(true);
        log::info!("Arrived at {target}");
        self.view.arrived(target);
    }

    /// Current tour state.
    #[must_use]
    pub fn state(&self) -> TourState {
        if self.engine.is_active() {
            TourState::Transitioning
        } else {
            TourState::Idle
        }
    }

    /// Target of the flight in progress.
    #[must_use]
    pub fn active_target(&self) -> Option<&NavigationTarget> {
        self.active.as_ref()
    }

    /// Raw progress of the flight in progress.
    #[must_use]
    pub fn progress(&self) -> Option<f32> {
        self.engine.session().map(TransitionSession::progress)
    }

    /// Camera as of the last frame.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Who writes the camera next frame.
    #[must_use]
    pub fn authority(&self) -> CameraAuthority {
        self.authority
    }

    /// The viewpoint catalogue.
    #[must_use]
    pub fn store(&self) -> &ViewpointStore {
        &self.store
    }

    /// Requests that could not be resolved so far.
    #[must_use]
    pub fn resolution_failures(&self) -> u64 {
        self.resolution_failures
    }

    /// Flights replaced before they landed so far.
    #[must_use]
    pub fn supersessions(&self) -> u64 {
        self.supersessions
    }

    /// Smoothed frame rate from the pacer.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.pacer.fps()
    }

    /// The scene renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The orbit controls.
    #[must_use]
    pub fn orbit(&self) -> &O {
        &self.orbit
    }

    /// Mutable orbit controls, for feeding user input.
    pub fn orbit_mut(&mut self) -> &mut O {
        &mut self.orbit
    }

    /// The view layer.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::error::ResolutionErrorKind;
    use crate::viewpoint::{AxisConvention, RawRecord};

    #[derive(Default)]
    struct Recorder {
        cameras: Vec<CameraState>,
        fogs: Vec<FogRange>,
        renders: usize,
    }

    impl SceneRenderer for Recorder {
        fn set_camera(&mut self, camera: &CameraState) {
            self.cameras.push(*camera);
        }
        fn set_fog(&mut self, fog: FogRange) {
            self.fogs.push(fog);
        }
        fn render(&mut self) {
            self.renders += 1;
        }
    }

    struct Orbit {
        enabled: bool,
        position: Vec3,
        target: Vec3,
        toggles: Vec<bool>,
    }

    impl Orbit {
        fn at(position: Vec3) -> Self {
            Self {
                enabled: false,
                position,
                target: Vec3::ZERO,
                toggles: Vec::new(),
            }
        }
    }

    impl OrbitInput for Orbit {
        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
            self.toggles.push(enabled);
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

    #[derive(Default)]
    struct Cards {
        shown: Vec<String>,
    }

    impl ViewLayer for Cards {
        fn arrived(&mut self, target: &NavigationTarget) {
            self.shown.push(target.name().to_owned());
        }
    }

    type Tour = TourController<Recorder, Orbit, Cards>;

    const HOME: Vec3 = Vec3::new(300.0, 500.0, 0.0);

    fn store() -> ViewpointStore {
        let raw = |json: &str| serde_json::from_str::<RawRecord>(json).unwrap();
        let records = vec![
            (
                "district1_camera".to_owned(),
                raw(r#"{"camera":{"x":0,"y":500,"z":400},"target":{"x":0,"y":0,"z":0}}"#),
            ),
            (
                "district1_subject".to_owned(),
                raw(r#"{"subject":{"x":5,"y":10,"z":5}}"#),
            ),
            (
                "district2_camera".to_owned(),
                raw(r#"{"camera":{"x":-400,"y":600,"z":-100},"target":{"x":-300,"y":0,"z":0}}"#),
            ),
            (
                "district2_subject".to_owned(),
                raw(r#"{"subject":{"x":-310,"y":15,"z":5}}"#),
            ),
        ];
        ViewpointStore::load(records, AxisConvention::YUp).store
    }

    fn tour_with(options: &Options) -> Tour {
        TourController::new(
            store(),
            options,
            Recorder::default(),
            Orbit::at(HOME),
            Cards::default(),
        )
    }

    fn tour() -> Tour {
        tour_with(&Options::default())
    }

    fn run(tour: &mut Tour, from_ms: f64, to_ms: f64, step_ms: f64) {
        let mut now = from_ms;
        while now <= to_ms {
            let _ = tour.frame(now);
            now += step_ms;
        }
    }

    #[test]
    fn unknown_target_leaves_everything_alone() {
        let mut tour = tour();
        let _ = tour.frame(0.0);
        let before = *tour.camera();

        let err = tour.navigate_to("unknownDistrict").unwrap_err();
        assert_eq!(err.kind, ResolutionErrorKind::UnknownTarget);
        assert_eq!(tour.resolution_failures(), 1);
        assert_eq!(tour.camera().position.to_array(), before.position.to_array());
        assert_eq!(tour.camera().orientation.to_array(), before.orientation.to_array());
        assert_eq!(tour.camera().look_at.to_array(), before.look_at.to_array());
        assert_eq!(tour.state(), TourState::Idle);
        assert_eq!(tour.authority(), CameraAuthority::User);
        assert!(tour.orbit().enabled);
    }

    #[test]
    fn flight_takes_and_returns_the_camera() {
        let mut tour = tour();
        let started = tour.navigate_to("district1").unwrap();
        assert!(started.superseded.is_none());
        assert_eq!(tour.state(), TourState::Transitioning);
        assert_eq!(tour.authority(), CameraAuthority::Tour);
        assert!(!tour.orbit().enabled);

        run(&mut tour, 0.0, 1900.0, 100.0);
        assert!(tour.view().shown.is_empty());
        assert_eq!(tour.active_target().map(NavigationTarget::name), Some("district1"));

        let report = tour.frame(2000.0);
        assert_eq!(report.arrived, Some(NavigationTarget::new("district1")));
        assert_eq!(report.authority, CameraAuthority::Tour);
        assert_eq!(report.camera.position, Vec3::new(0.0, 500.0, 400.0));
        assert_eq!(tour.view().shown, ["district1"]);
        assert_eq!(tour.state(), TourState::Idle);
        assert_eq!(tour.authority(), CameraAuthority::User);
        assert_eq!(tour.orbit().toggles, [true, false, true]);

        // the user picks up exactly where the flight landed
        let after = tour.frame(2100.0);
        assert_eq!(after.authority, CameraAuthority::User);
        assert_eq!(after.camera.position, Vec3::new(0.0, 500.0, 400.0));
        assert_eq!(tour.view().shown.len(), 1);
    }

    #[test]
    fn flight_starts_from_where_the_user_left_the_orbit() {
        let mut tour = tour();
        let _ = tour.frame(0.0);
        assert_eq!(tour.camera().position, HOME);

        let moved = Vec3::new(-300.0, 600.0, 100.0);
        tour.orbit_mut().position = moved;
        let _ = tour.navigate_to("district1").unwrap();

        // first flight frame is at t = 0, so it sits on the start pose
        let report = tour.frame(16.0);
        assert!((report.camera.position - moved).length() < 1e-3);
        assert_ne!(report.camera.position, HOME);
    }

    #[test]
    fn constrained_flight_keeps_looking_at_its_target() {
        let mut tour = tour();
        tour.orbit_mut().position = Vec3::new(0.0, 1500.0, 900.0);
        let _ = tour.navigate_to("district1").unwrap();
        let _ = tour.frame(0.0);
        let report = tour.frame(100.0);
        assert_eq!(report.authority, CameraAuthority::Tour);
        let expected = CameraState::looking_at(report.camera.position, report.camera.look_at);
        assert!(report.camera.orientation.angle_between(expected.orientation) < 1e-4);
    }

    #[test]
    fn superseded_flight_never_shows_its_card() {
        let mut tour = tour();
        let _ = tour.navigate_to("district1").unwrap();
        run(&mut tour, 0.0, 800.0, 100.0);
        assert!(tour.progress().unwrap() > 0.0);

        let started = tour.navigate_to("district2").unwrap();
        assert!(started.superseded.is_some());
        assert_eq!(started.destination.subject, Vec3::new(-310.0, 15.0, 5.0));
        assert_eq!(tour.supersessions(), 1);
        assert_eq!(tour.state(), TourState::Transitioning);
        // orbit input stays off across the handover
        assert_eq!(tour.orbit().toggles, [true, false]);

        run(&mut tour, 900.0, 3000.0, 100.0);
        assert_eq!(tour.view().shown, ["district2"]);
        assert_eq!(tour.camera().position, Vec3::new(-400.0, 600.0, -100.0));
        assert_eq!(tour.camera().look_at, Vec3::new(-300.0, 0.0, 0.0));
    }

    #[test]
    fn zero_duration_lands_on_the_next_frame() {
        let mut options = Options::default();
        options.transition.position_duration_ms = 0.0;
        options.transition.target_duration_ms = 0.0;
        let mut tour = tour_with(&options);

        let _ = tour.navigate_to("District2").unwrap();
        let report = tour.frame(42.0);
        assert_eq!(report.arrived, Some(NavigationTarget::new("District2")));
        assert_eq!(tour.state(), TourState::Idle);
    }

    #[test]
    fn arrival_waits_for_the_slower_tween() {
        let mut options = Options::default();
        options.transition.position_duration_ms = 500.0;
        options.transition.target_duration_ms = 1500.0;
        let mut tour = tour_with(&options);

        let _ = tour.navigate_to("district1").unwrap();
        run(&mut tour, 0.0, 1400.0, 100.0);
        assert!(tour.view().shown.is_empty());
        assert_eq!(tour.camera().position, Vec3::new(0.0, 500.0, 400.0));

        let report = tour.frame(1500.0);
        assert!(report.arrived.is_some());
    }

    #[test]
    fn free_orbit_is_constrained_every_frame() {
        let mut tour = tour();
        tour.orbit_mut().position = Vec3::new(4000.0, 700.0, 3000.0);
        for i in 0..30 {
            let report = tour.frame(f64::from(i) * 16.0);
            let horizontal = (report.camera.position.x.powi(2)
                + report.camera.position.z.powi(2))
            .sqrt();
            assert!((horizontal - 1200.0).abs() < 1e-2);
        }
        assert_eq!(tour.renderer().renders, 30);
        assert_eq!(tour.orbit().position, tour.camera().position);
    }

    #[test]
    fn renderer_gets_fog_for_the_constrained_camera() {
        let mut tour = tour();
        let report = tour.frame(0.0);
        let expected = FogModel::default().compute_fog(report.camera.position);
        assert_eq!(report.fog, expected);
        assert_eq!(tour.renderer().fogs, [expected]);
        assert_eq!(tour.renderer().cameras, [report.camera]);
    }

    #[test]
    fn animation_frames_are_paced() {
        let mut tour = tour();
        assert!(tour.on_animation_frame(0.0).is_some());
        assert!(tour.on_animation_frame(5.0).is_none());
        assert!(tour.on_animation_frame(17.0).is_some());
        assert_eq!(tour.renderer().renders, 2);
    }

    #[test]
    fn repeated_requests_resolve_the_same_way() {
        let mut tour = tour();
        let a = tour.navigate_to("district2").unwrap();
        let b = tour.navigate_to("DISTRICT2").unwrap();
        assert_eq!(a.destination.camera_marker, b.destination.camera_marker);
        assert_eq!(b.destination.target.name(), "DISTRICT2");
    }
}
