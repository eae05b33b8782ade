use anyhow::anyhow;
use serde::Deserialize;

/// Tuning knobs for the normalization pipeline. All fields have defaults, so
/// a config file only needs to name the ones it changes.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Simplification deviation bound, in coordinate units. Zero disables
    /// simplification.
    pub tolerance: f64,
    /// Grid cell edge length for snapping, in coordinate units.
    pub grid_size: f64,
    /// Polygons with a planar area below this are dropped.
    pub min_area: f64,
    /// Ring vertex cap, excluding the closing duplicate.
    pub max_vertices: usize,
    /// Maximum deviation (degrees) from a right-angle target before a vertex
    /// is corrected.
    pub angle_tolerance: f64,
    /// Force every edge to be axis-aligned with a final straightening pass.
    pub force_orthogonal: bool,
    /// Halve vertex adjustments to track the original outline more closely.
    pub preserve_shape: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            tolerance: 0.0001,
            grid_size: 0.0001,
            min_area: 0.000001,
            max_vertices: 20,
            angle_tolerance: 15.0,
            force_orthogonal: true,
            preserve_shape: false,
        }
    }
}

impl NormalizeOptions {
    /// Check that all options are within their domains. Called once per
    /// batch, before any per-feature work.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.tolerance >= 0.0) {
            return Err(anyhow!(
                "tolerance must be >= 0, got {}",
                self.tolerance
            ));
        }
        if !(self.grid_size > 0.0) {
            return Err(anyhow!(
                "grid_size must be > 0, got {}",
                self.grid_size
            ));
        }
        if !(self.min_area >= 0.0) {
            return Err(anyhow!("min_area must be >= 0, got {}", self.min_area));
        }
        if self.max_vertices < 3 {
            return Err(anyhow!(
                "max_vertices must be >= 3, got {}",
                self.max_vertices
            ));
        }
        Ok(())
    }
}
