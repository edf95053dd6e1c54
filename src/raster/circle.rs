//! Bresenham (midpoint) circle rasterizer.

use crate::geometry::{snap, PixelPoint};

/// Reflect an octant offset `(x, y)` about `center` into all eight octants.
///
/// The order is fixed: `(-x,+y) (+x,-y) (+x,+y) (-x,-y) (+y,+x) (-y,+x)
/// (+y,-x) (-y,-x)`. Offsets on an axis or diagonal produce duplicates.
#[must_use]
pub fn plot_octant_mirror(center: PixelPoint, x: i32, y: i32) -> [PixelPoint; 8] {
    let at = |dx: i32, dy: i32| {
        PixelPoint::new(center.x.saturating_add(dx), center.y.saturating_add(dy))
    };
    [
        at(-x, y),
        at(x, -y),
        at(x, y),
        at(-x, -y),
        at(y, x),
        at(-y, x),
        at(y, -x),
        at(-y, -x),
    ]
}

/// Lazy circle walk over the first octant (`x` from 0 while `x < y`).
///
/// The decision parameter starts at `3 - 2r`; a negative value adds
/// `4x + 6`, otherwise `4(x - y) + 10` is added and `y` steps inward. Every
/// octant point is emitted as its eight mirrors.
#[derive(Debug, Clone)]
pub struct BresenhamCircle {
    center: PixelPoint,
    radius: i32,
    x: i32,
    y: i32,
    decision: i64,
    mirror: [PixelPoint; 8],
    slot: usize,
}

impl BresenhamCircle {
    /// Prepare a circle walk. The radius is rounded half to even; negative
    /// and NaN radii collapse to 0.
    #[must_use]
    pub fn new(center: PixelPoint, radius: f64) -> Self {
        let r = snap(radius.max(0.0)).max(0);
        Self {
            center,
            radius: r,
            x: 0,
            y: r,
            decision: 3 - 2 * i64::from(r),
            mirror: plot_octant_mirror(center, 0, r),
            slot: 0,
        }
    }

    /// Integer radius actually walked.
    #[must_use]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    fn advance(&mut self) -> bool {
        if self.x >= self.y {
            return false;
        }
        let x = i64::from(self.x);
        let y = i64::from(self.y);
        if self.decision < 0 {
            self.decision += 4 * x + 6;
        } else {
            self.decision += 4 * (x - y) + 10;
            self.y -= 1;
        }
        self.x += 1;
        self.mirror = plot_octant_mirror(self.center, self.x, self.y);
        self.slot = 0;
        true
    }
}

impl Iterator for BresenhamCircle {
    type Item = PixelPoint;

    fn next(&mut self) -> Option<PixelPoint> {
        if self.slot == self.mirror.len() && !self.advance() {
            return None;
        }
        let p = self.mirror[self.slot];
        self.slot += 1;
        Some(p)
    }
}

/// Rasterize a circle outline with Bresenham's algorithm.
#[must_use]
pub fn rasterize_circle_bresenham(center: PixelPoint, radius: f64) -> BresenhamCircle {
    BresenhamCircle::new(center, radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn pixel_set(c: PixelPoint, r: f64) -> BTreeSet<PixelPoint> {
        rasterize_circle_bresenham(c, r).collect()
    }

    #[test]
    fn test_zero_radius_is_center_only() {
        let c = PixelPoint::new(4, -2);
        let pixels: Vec<_> = rasterize_circle_bresenham(c, 0.0).collect();
        assert_eq!(pixels.len(), 8);
        assert!(pixels.iter().all(|&p| p == c));
    }

    #[test]
    fn test_negative_and_nan_radius_degenerate() {
        let c = PixelPoint::new(0, 0);
        assert_eq!(pixel_set(c, -4.0), BTreeSet::from([c]));
        assert_eq!(pixel_set(c, f64::NAN), BTreeSet::from([c]));
    }

    #[test]
    fn test_radius_one_terminates() {
        let set = pixel_set(PixelPoint::new(0, 0), 1.0);
        assert!(set.contains(&PixelPoint::new(0, 1)));
        assert!(set.contains(&PixelPoint::new(-1, 0)));
        assert!(set.len() <= 8);
    }

    #[test]
    fn test_radius_five_octant_points() {
        let set = pixel_set(PixelPoint::new(0, 0), 5.0);
        for p in plot_octant_mirror(PixelPoint::new(0, 0), 0, 5) {
            assert!(set.contains(&p), "missing axis point {p:?}");
        }
        for p in [(1, 5), (2, 5), (3, 4), (4, 3)] {
            assert!(set.contains(&PixelPoint::from(p)), "missing {p:?}");
        }
        assert!(set.iter().all(|p| {
            let d = f64::from(p.x * p.x + p.y * p.y).sqrt();
            d <= 6.0
        }));
    }

    #[test]
    fn test_symmetric_under_octant_reflections() {
        let c = PixelPoint::new(10, 20);
        let set = pixel_set(c, 13.0);
        for p in &set {
            let (x, y) = (p.x - c.x, p.y - c.y);
            for m in plot_octant_mirror(c, x, y) {
                assert!(set.contains(&m), "{m:?} missing as mirror of {p:?}");
            }
        }
    }

    #[test]
    fn test_fractional_radius_rounds() {
        assert_eq!(rasterize_circle_bresenham(PixelPoint::new(0, 0), 4.6).radius(), 5);
        assert_eq!(rasterize_circle_bresenham(PixelPoint::new(3, 3), 2.5).radius(), 2);
    }

    #[test]
    fn test_clone_replays() {
        let walk = rasterize_circle_bresenham(PixelPoint::new(1, 1), 7.0);
        let a: Vec<_> = walk.clone().collect();
        let b: Vec<_> = walk.collect();
        assert_eq!(a, b);
    }
}
