use glam::{Mat4, Vec3};

/// Axis-aligned bounding box (min / max corners).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// A box that contains nothing; `union` with any finite box yields that box.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::MAX),
            max: Vec3::splat(f32::MIN),
        }
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Transforms the two corners and min/max-accumulates them.
    ///
    /// This deliberately tracks only the corner pair, not all eight corners,
    /// matching the fit solver's corner-based extent computation.
    #[must_use]
    pub fn transformed_corners(&self, matrix: &Mat4) -> Self {
        let a = matrix.transform_point3(self.min);
        let b = matrix.transform_point3(self.max);
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min.cmple(self.max).all()
    }
}
