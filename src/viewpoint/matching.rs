//! Fuzzy navigation-name matching against marker ids.
//!
//! Marker ids encode a subject area and a role, e.g. `district4_camera` or
//! `inner_harbor_subject`. A request matches a marker when the lowercased id
//! contains both the role token and the request's area token. For simple
//! names the area token is the request itself. Compound request names in
//! [`ALIAS_RULES`] instead look for a shorter token, because their markers
//! were never keyed by the full compound name.

/// Role half of a marker id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    /// Marker carrying the camera placement.
    Camera,
    /// Marker carrying the subject point.
    Subject,
}

impl MarkerRole {
    /// Token the marker id must contain.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Subject => "subject",
        }
    }
}

/// A compound request name and the marker token it is matched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasRule {
    /// Compound request, lowercase with separators removed.
    pub request: &'static str,
    /// Token searched for in marker ids instead of the request.
    pub marker_token: &'static str,
}

/// Compound names that match on a shorter marker token.
pub const ALIAS_RULES: &[AliasRule] = &[
    AliasRule {
        request: "deliverydrivers",
        marker_token: "delivery",
    },
    AliasRule {
        request: "innerharbor",
        marker_token: "harbor",
    },
];

/// A request prepared for matching against many marker ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaPattern {
    token: String,
    alias: Option<&'static AliasRule>,
}

impl AreaPattern {
    /// Prepare `request`, consulting [`ALIAS_RULES`].
    #[must_use]
    pub fn new(request: &str) -> Self {
        let lowered = request.to_lowercase();
        let compact: String = lowered
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();

        match ALIAS_RULES.iter().find(|rule| rule.request == compact) {
            Some(rule) => Self {
                token: rule.marker_token.to_owned(),
                alias: Some(rule),
            },
            None => Self {
                token: lowered,
                alias: None,
            },
        }
    }

    /// Token searched for in marker ids.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Alias rule applied, if the request was a known compound name.
    #[must_use]
    pub fn alias(&self) -> Option<&'static AliasRule> {
        self.alias
    }

    /// Whether marker `id` matches this area in `role`.
    #[must_use]
    pub fn matches(&self, id: &str, role: MarkerRole) -> bool {
        let id = id.to_lowercase();
        id.contains(role.token()) && id.contains(self.token.as_str())
    }
}
