//! Named viewpoints and the store that loads and resolves them.
//!
//! Viewpoints come from marker records, one per marker id. The store keeps
//! them in load order, because navigation resolution takes the first
//! matching marker (see [`matching`]).

pub mod matching;
pub mod record;

use std::fmt;
use std::path::Path;

use glam::Vec3;
use rustc_hash::FxHashMap;

use self::matching::{AreaPattern, MarkerRole};
pub use self::record::{AxisConvention, RawNumber, RawRecord, RawVec3};
use crate::error::{
    LoadError, LoadErrorKind, ResolutionError, ResolutionErrorKind, VantageError,
};

/// Camera position paired with the point it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Camera position.
    pub position: Vec3,
    /// Look-at target.
    pub look_at: Vec3,
}

/// A loaded marker. Immutable for the life of the tour.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewpoint {
    /// Marker id.
    pub id: String,
    /// Camera placement, if the marker is a camera marker.
    pub placement: Option<Placement>,
    /// Point of interest distinct from the look-at target.
    pub subject: Option<Vec3>,
}

impl Viewpoint {
    /// Camera position, if any.
    #[must_use]
    pub fn camera_position(&self) -> Option<Vec3> {
        self.placement.map(|p| p.position)
    }

    /// Look-at target, if any.
    #[must_use]
    pub fn look_at_target(&self) -> Option<Vec3> {
        self.placement.map(|p| p.look_at)
    }
}

/// A district or page name a tour can navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationTarget(String);

impl NavigationTarget {
    /// Wrap a district or page name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name as requested.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NavigationTarget {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Where a navigation request leads.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    /// The request this was resolved from.
    pub target: NavigationTarget,
    /// Id of the camera marker that matched.
    pub camera_marker: String,
    /// Camera placement to fly to.
    pub placement: Placement,
    /// Framing subject, from the camera marker or its subject marker.
    pub subject: Vec3,
}

/// Result of a batch load: whatever loaded, plus one error per skipped
/// record.
#[derive(Debug, Default)]
pub struct Loaded {
    /// Successfully loaded viewpoints.
    pub store: ViewpointStore,
    /// Records that were skipped.
    pub errors: Vec<LoadError>,
}

/// Load-ordered viewpoint catalogue with an id index.
#[derive(Debug, Clone, Default)]
pub struct ViewpointStore {
    viewpoints: Vec<Viewpoint>,
    index: FxHashMap<String, usize>,
}

impl ViewpointStore {
    /// Load a batch of raw records. Bad records are skipped and reported;
    /// they never abort the batch.
    pub fn load<I>(records: I, axis: AxisConvention) -> Loaded
    where
        I: IntoIterator<Item = (String, RawRecord)>,
    {
        Self::load_results(
            records.into_iter().map(|(id, record)| (id, Ok(record))),
            axis,
        )
    }

    /// Load every `*.json` file in `dir`, in file-name order. The file stem
    /// is the marker id.
    pub fn load_dir(
        dir: &Path,
        axis: AxisConvention,
    ) -> Result<Loaded, VantageError> {
        let entries = std::fs::read_dir(dir).map_err(|source| {
            VantageError::MarkerDirectory {
                path: dir.to_path_buf(),
                source,
            }
        })?;

        let mut files: Vec<_> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();

        let records = files.iter().filter_map(|path| {
            let id = path.file_stem()?.to_str()?.to_owned();
            let record = std::fs::read_to_string(path)
                .map_err(|e| {
                    LoadError::new(&id, LoadErrorKind::Unreadable(e.to_string()))
                })
                .and_then(|json| RawRecord::from_json(&id, &json));
            Some((id, record))
        });

        let loaded = Self::load_results(records, axis);
        log::info!(
            "Loaded {} markers from {} ({} skipped)",
            loaded.store.len(),
            dir.display(),
            loaded.errors.len()
        );
        Ok(loaded)
    }

    fn load_results<I>(records: I, axis: AxisConvention) -> Loaded
    where
        I: IntoIterator<Item = (String, Result<RawRecord, LoadError>)>,
    {
        let mut loaded = Loaded::default();
        for (id, record) in records {
            let result = record
                .and_then(|r| r.into_viewpoint(&id, axis))
                .and_then(|vp| loaded.store.insert(vp));
            if let Err(e) = result {
                log::warn!("Skipping marker: {e}");
                loaded.errors.push(e);
            }
        }
        loaded
    }

    fn insert(&mut self, viewpoint: Viewpoint) -> Result<(), LoadError> {
        if self.index.contains_key(&viewpoint.id) {
            return Err(LoadError::new(viewpoint.id, LoadErrorKind::DuplicateId));
        }
        let _ = self
            .index
            .insert(viewpoint.id.clone(), self.viewpoints.len());
        self.viewpoints.push(viewpoint);
        Ok(())
    }

    /// Viewpoint with exactly this marker id.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&Viewpoint> {
        self.index.get(id).map(|&i| &self.viewpoints[i])
    }

    /// Resolve a district/page name to a destination via fuzzy matching.
    ///
    /// The first camera marker (in load order) that matches supplies the
    /// placement. The subject comes from that marker or, failing that, the
    /// first matching subject marker. A district needs both, so a missing
    /// subject fails the request.
    pub fn resolve(
        &self,
        target: &NavigationTarget,
    ) -> Result<Destination, ResolutionError> {
        let pattern = AreaPattern::new(target.name());
        let fail = |kind| ResolutionError {
            target: target.name().to_owned(),
            kind,
        };

        let camera = self
            .viewpoints
            .iter()
            .find(|vp| pattern.matches(&vp.id, MarkerRole::Camera))
            .ok_or_else(|| fail(ResolutionErrorKind::UnknownTarget))?;
        let placement = camera
            .placement
            .ok_or_else(|| fail(ResolutionErrorKind::NoPlacement))?;

        let subject = camera.subject.or_else(|| {
            self.viewpoints
                .iter()
                .filter(|vp| pattern.matches(&vp.id, MarkerRole::Subject))
                .find_map(|vp| vp.subject)
        });
        let subject =
            subject.ok_or_else(|| fail(ResolutionErrorKind::MissingSubject))?;

        Ok(Destination {
            target: target.clone(),
            camera_marker: camera.id.clone(),
            placement,
            subject,
        })
    }

    /// Viewpoints in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Viewpoint> {
        self.viewpoints.iter()
    }

    /// Number of loaded viewpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.viewpoints.len()
    }

    /// Whether nothing loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.viewpoints.is_empty()
    }
}
