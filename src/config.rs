//! Configuration for line mining.

/// Geometry filters and clustering tolerance applied while assembling lines
/// from page fragments.
///
/// Margins are expressed in document units and filter fragments *before*
/// vertical clustering. All margins default to zero except `bottom_margin`,
/// which defaults to excluding the footer band court-reporter software prints
/// under the transcript body.
#[derive(Debug, Clone)]
pub struct MinerConfig {
    /// Fragments whose left edge is not strictly greater than this are dropped.
    pub left_margin: f32,

    /// Width of the excluded band along the right page edge (0 = disabled).
    pub right_margin: f32,

    /// Height of the excluded band along the top page edge (0 = disabled).
    pub top_margin: f32,

    /// Fragments whose bottom edge is not strictly greater than this are
    /// dropped (0 = disabled).
    pub bottom_margin: f32,

    /// Vertical distance tolerance for two fragments to count as the same
    /// line.
    pub fudge_factor: f32,
}

/// Footer band height that works for the common deposition layout.
const DEFAULT_BOTTOM_MARGIN: f32 = 53.0;

/// Default vertical clustering tolerance in document units.
const DEFAULT_FUDGE_FACTOR: f32 = 10.0;

impl Default for MinerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MinerConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self {
            left_margin: 0.0,
            right_margin: 0.0,
            top_margin: 0.0,
            bottom_margin: DEFAULT_BOTTOM_MARGIN,
            fudge_factor: DEFAULT_FUDGE_FACTOR,
        }
    }

    /// Set the left margin.
    pub fn with_left_margin(mut self, margin: f32) -> Self {
        self.left_margin = margin;
        self
    }

    /// Set the right margin.
    pub fn with_right_margin(mut self, margin: f32) -> Self {
        self.right_margin = margin;
        self
    }

    /// Set the top margin.
    pub fn with_top_margin(mut self, margin: f32) -> Self {
        self.top_margin = margin;
        self
    }

    /// Set the bottom margin.
    pub fn with_bottom_margin(mut self, margin: f32) -> Self {
        self.bottom_margin = margin;
        self
    }

    /// Set the vertical clustering tolerance.
    pub fn with_fudge_factor(mut self, fudge: f32) -> Self {
        self.fudge_factor = fudge;
        self
    }
}
