//! Builder configuration.
//!
//! Policy
//! - The default is exact arithmetic on the orientation determinant, which is
//!   what the merge invariants are stated against. A positive `eps_det` treats
//!   nearly collinear triples as collinear. The links still form one mutual
//!   cycle, but the bridge walks may stop early inside the band, so points
//!   near a seam can be kept or dropped against the exact hull.

/// Tolerances for the hull builder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// Collinearity band for the orientation determinant: `|det| <= eps_det`.
    pub eps_det: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self { eps_det: 0.0 }
    }
}

impl HullCfg {
    #[inline]
    pub fn with_eps_det(eps_det: f64) -> Self {
        Self {
            eps_det: eps_det.max(0.0),
        }
    }
}
