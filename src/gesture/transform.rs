//! Gesture Accumulator
//!
//! Folds relative gesture deltas into the absolute transform of one element:
//! - Translation: added to `position`
//! - Scale: multiplied into `scale`
//! - Rotation: added to `rotation` (degrees)
//!
//! Nothing is clamped or wrapped. A pinch can drive `scale` to zero or below
//! and `rotation` grows without bound.

use std::ops::Add;

/// 2D vector in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Snap to whole pixels for layout.
    pub fn rounded(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// One incremental update reported by the host between two pointer samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureDelta {
    pub translation: Offset,
    /// Multiplicative zoom step
    pub scale_factor: f32,
    /// Additive rotation step in degrees
    pub rotation_delta: f32,
}

impl Default for GestureDelta {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl GestureDelta {
    pub const IDENTITY: GestureDelta = GestureDelta {
        translation: Offset::ZERO,
        scale_factor: 1.0,
        rotation_delta: 0.0,
    };

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            translation: Offset::new(x, y),
            ..Self::IDENTITY
        }
    }

    pub fn scale(factor: f32) -> Self {
        Self {
            scale_factor: factor,
            ..Self::IDENTITY
        }
    }

    pub fn rotate(degrees: f32) -> Self {
        Self {
            rotation_delta: degrees,
            ..Self::IDENTITY
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Absolute transform of an element, accumulated from the identity origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub position: Offset,
    pub scale: f32,
    /// Degrees, clockwise on screen
    pub rotation: f32,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformState {
    pub const IDENTITY: TransformState = TransformState {
        position: Offset::ZERO,
        scale: 1.0,
        rotation: 0.0,
    };

    /// Fold every delta into the identity transform, left to right.
    pub fn fold<I>(deltas: I) -> Self
    where
        I: IntoIterator<Item = GestureDelta>,
    {
        deltas.into_iter().fold(Self::IDENTITY, apply_delta)
    }

    /// Corners of a `size` rectangle centered on `center` after scaling and
    /// rotating about that center, then translating by `position`.
    ///
    /// Order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self, center: Offset, size: Offset) -> [Offset; 4] {
        let hw = size.x * 0.5 * self.scale;
        let hh = size.y * 0.5 * self.scale;
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let origin = center + self.position;

        [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)].map(|(x, y)| {
            Offset::new(origin.x + x * cos - y * sin, origin.y + x * sin + y * cos)
        })
    }
}

/// Compose one delta into the running transform. Total: every input is
/// accepted as-is.
pub fn apply_delta(current: TransformState, delta: GestureDelta) -> TransformState {
    TransformState {
        position: current.position + delta.translation,
        scale: current.scale * delta.scale_factor,
        rotation: current.rotation + delta.rotation_delta,
    }
}

/// Drag orientation for single-axis gestures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Single-axis accumulator: the `position`-only restriction of
/// [`apply_delta`] with scale and rotation pinned at identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDrag {
    pub axis: Axis,
    pub offset: f32,
}

impl AxisDrag {
    pub fn new(axis: Axis) -> Self {
        Self { axis, offset: 0.0 }
    }

    /// Add `delta` along the axis and return how much was consumed (all of it).
    pub fn apply(&mut self, delta: f32) -> f32 {
        self.offset += delta;
        delta
    }

    /// Project a 2D delta onto the axis, dropping the orthogonal part.
    pub fn apply_vector(&mut self, delta: Offset) -> f32 {
        match self.axis {
            Axis::Horizontal => self.apply(delta.x),
            Axis::Vertical => self.apply(delta.y),
        }
    }

    pub fn offset_vector(&self) -> Offset {
        match self.axis {
            Axis::Horizontal => Offset::new(self.offset, 0.0),
            Axis::Vertical => Offset::new(0.0, self.offset),
        }
    }

    /// The equivalent full transform.
    pub fn transform(&self) -> TransformState {
        TransformState {
            position: self.offset_vector(),
            ..TransformState::IDENTITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_translation_only() {
        let t = apply_delta(TransformState::IDENTITY, GestureDelta::translate(10.0, 0.0));
        assert_eq!(t.position, Offset::new(10.0, 0.0));
        assert!(close(t.scale, 1.0));
        assert!(close(t.rotation, 0.0));
    }

    #[test]
    fn test_scale_multiplies() {
        let t = TransformState::fold([GestureDelta::scale(1.5), GestureDelta::scale(2.0)]);
        assert!(close(t.scale, 3.0));
    }

    #[test]
    fn test_rotation_cancels() {
        let t = TransformState::fold([GestureDelta::rotate(45.0), GestureDelta::rotate(-45.0)]);
        assert!(close(t.rotation, 0.0));
    }

    #[test]
    fn test_drag_sequence_returns_home() {
        let t = TransformState::fold([
            GestureDelta::translate(5.0, 0.0),
            GestureDelta::translate(0.0, 5.0),
            GestureDelta::translate(-5.0, -5.0),
        ]);
        assert!(close(t.position.x, 0.0));
        assert!(close(t.position.y, 0.0));
    }

    #[test]
    fn test_identity_delta_is_noop() {
        let start = TransformState {
            position: Offset::new(3.0, -7.5),
            scale: 0.25,
            rotation: 190.0,
        };
        assert_eq!(apply_delta(start, GestureDelta::IDENTITY), start);
        assert!(GestureDelta::default().is_identity());
        assert!(!GestureDelta::scale(1.01).is_identity());
    }

    #[test]
    fn test_fold_matches_closed_form() {
        let deltas = [
            GestureDelta {
                translation: Offset::new(1.0, 2.0),
                scale_factor: 1.25,
                rotation_delta: 10.0,
            },
            GestureDelta {
                translation: Offset::new(-4.0, 0.5),
                scale_factor: 0.8,
                rotation_delta: 35.0,
            },
            GestureDelta {
                translation: Offset::new(2.5, 2.5),
                scale_factor: 2.0,
                rotation_delta: -5.0,
            },
        ];
        let t = TransformState::fold(deltas);

        let sum_x: f32 = deltas.iter().map(|d| d.translation.x).sum();
        let sum_y: f32 = deltas.iter().map(|d| d.translation.y).sum();
        let product: f32 = deltas.iter().map(|d| d.scale_factor).product();
        let angle: f32 = deltas.iter().map(|d| d.rotation_delta).sum();

        assert!(close(t.position.x, sum_x));
        assert!(close(t.position.y, sum_y));
        assert!(close(t.scale, product));
        assert!(close(t.rotation, angle));
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = GestureDelta {
            translation: Offset::new(3.0, -1.0),
            scale_factor: 1.5,
            rotation_delta: 20.0,
        };
        let b = GestureDelta {
            translation: Offset::new(-2.0, 4.0),
            scale_factor: 0.5,
            rotation_delta: -70.0,
        };
        let ab = TransformState::fold([a, b]);
        let ba = TransformState::fold([b, a]);
        assert!(close(ab.position.x, ba.position.x));
        assert!(close(ab.position.y, ba.position.y));
        assert!(close(ab.scale, ba.scale));
        assert!(close(ab.rotation, ba.rotation));
    }

    #[test]
    fn test_scale_is_not_clamped() {
        let t = TransformState::fold([GestureDelta::scale(0.0)]);
        assert!(close(t.scale, 0.0));
        let t = TransformState::fold([GestureDelta::scale(-2.0)]);
        assert!(close(t.scale, -2.0));
        let t = TransformState::fold([GestureDelta::rotate(300.0), GestureDelta::rotate(300.0)]);
        assert!(close(t.rotation, 600.0));
    }

    #[test]
    fn test_corners_identity() {
        let c = TransformState::IDENTITY.corners(Offset::new(50.0, 50.0), Offset::new(100.0, 100.0));
        assert_eq!(c[0], Offset::new(0.0, 0.0));
        assert_eq!(c[2], Offset::new(100.0, 100.0));
    }

    #[test]
    fn test_corners_scaled_rotated_translated() {
        let t = TransformState {
            position: Offset::new(10.0, 0.0),
            scale: 2.0,
            rotation: 90.0,
        };
        let c = t.corners(Offset::ZERO, Offset::new(2.0, 2.0));
        // Top-left (-2, -2) rotated 90 degrees lands at (2, -2), then shifted by 10.
        assert!(close(c[0].x, 12.0));
        assert!(close(c[0].y, -2.0));
    }

    #[test]
    fn test_axis_drag_ignores_other_axis() {
        let mut h = AxisDrag::new(Axis::Horizontal);
        h.apply_vector(Offset::new(12.0, 99.0));
        h.apply_vector(Offset::new(-2.0, -40.0));
        assert!(close(h.offset, 10.0));
        assert_eq!(h.offset_vector(), Offset::new(10.0, 0.0));

        let mut v = AxisDrag::new(Axis::Vertical);
        let consumed = v.apply(7.5);
        assert!(close(consumed, 7.5));
        assert_eq!(v.transform().position, Offset::new(0.0, 7.5));
        assert!(close(v.transform().scale, 1.0));
    }

    #[test]
    fn test_offset_rounding() {
        assert_eq!(Offset::new(1.4, -2.6).rounded(), (1, -3));
    }
}
