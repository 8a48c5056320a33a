//! Geometry model: valid snap offsets and translation bounds
//!
//! Recomputed wholesale on attach and on (debounced) resize. The snap-point
//! sequence is the single source of truth for every translation the track is
//! allowed to rest at: dragging, inertia, buttons, and keyboard all resolve
//! through it.

use glide_platform::SurfaceMetrics;
use smallvec::{smallvec, SmallVec};

/// Derived carousel geometry
///
/// Invariants for every computed instance:
///
/// - `snap_points.len() == max_index + 1`
/// - `snap_points[0] == 0.0`
/// - the sequence is monotonically non-increasing
/// - the last point equals `container_width - track_width` (<= 0), so the
///   final page always sits flush with the track's right edge even when
///   that breaks uniform step spacing
#[derive(Clone, Debug)]
pub struct Geometry {
    /// Visible container width
    pub container_width: f32,
    /// Full track width
    pub track_width: f32,
    /// Width of one navigation step (item width + gap)
    pub step_width: f32,
    /// Whole items visible at once
    pub visible_count: usize,
    /// Highest reachable snap index
    pub max_index: usize,
    /// Allowed resting translations, one per reachable index
    pub snap_points: SmallVec<[f32; 8]>,
    /// Whether the content overflows the container at all
    pub scrollable: bool,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::non_scrollable(0.0, 0.0)
    }
}

impl Geometry {
    /// Compute geometry from a surface measurement
    pub fn compute(metrics: &SurfaceMetrics) -> Self {
        if metrics.item_count == 0 || metrics.container_width >= metrics.track_width {
            return Self::non_scrollable(metrics.container_width, metrics.track_width);
        }

        let step_width = metrics.step_width();
        if step_width <= 0.0 {
            // Degenerate zero-width items; treat as static content
            return Self::non_scrollable(metrics.container_width, metrics.track_width);
        }

        let visible_count = (metrics.container_width / step_width).floor() as usize;
        let max_index = metrics.item_count.saturating_sub(visible_count);

        let mut snap_points: SmallVec<[f32; 8]> = SmallVec::with_capacity(max_index + 1);
        for i in 0..max_index {
            snap_points.push(-(i as f32) * step_width);
        }
        // The last page is forced flush with the track's right edge, even
        // when track_width is not an exact multiple of step_width.
        snap_points.push(metrics.container_width - metrics.track_width);

        Self {
            container_width: metrics.container_width,
            track_width: metrics.track_width,
            step_width,
            visible_count,
            max_index,
            snap_points,
            scrollable: true,
        }
    }

    fn non_scrollable(container_width: f32, track_width: f32) -> Self {
        Self {
            container_width,
            track_width,
            step_width: 0.0,
            visible_count: 0,
            max_index: 0,
            snap_points: smallvec![0.0],
            scrollable: false,
        }
    }

    /// Upper translation bound (first snap point)
    pub fn max_translate(&self) -> f32 {
        0.0
    }

    /// Lower translation bound (last snap point, <= 0)
    pub fn min_translate(&self) -> f32 {
        *self.snap_points.last().unwrap_or(&0.0)
    }

    /// Whether a translation lies outside the resting bounds
    pub fn is_out_of_bounds(&self, translate: f32) -> bool {
        translate > self.max_translate() || translate < self.min_translate()
    }

    /// Resting translation for a snap index
    ///
    /// Indices beyond `max_index` resolve to the last point; this is the
    /// only place an index is converted to a translation.
    pub fn snap_point(&self, index: usize) -> f32 {
        self.snap_points[index.min(self.max_index)]
    }

    /// Index of the snap point closest to a free-form translation
    ///
    /// Linear scan; ties resolve to the lower index since points are
    /// visited in order. This is the sole place index correctness is
    /// re-established after dragging or coasting.
    pub fn nearest_index(&self, translate: f32) -> usize {
        let mut nearest = 0;
        let mut min_dist = f32::INFINITY;

        for (i, point) in self.snap_points.iter().enumerate() {
            let dist = (point - translate).abs();
            if dist < min_dist {
                min_dist = dist;
                nearest = i;
            }
        }

        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(container: f32, items: usize, item_width: f32, gap: f32) -> SurfaceMetrics {
        SurfaceMetrics {
            container_width: container,
            track_width: items as f32 * item_width + (items.saturating_sub(1)) as f32 * gap,
            item_count: items,
            item_width,
            gap,
        }
    }

    #[test]
    fn test_forced_last_point_overrides_uniform_spacing() {
        // 5 items of 200px, container 600px, gap 0: uniform stepping would
        // end at -400 anyway for index 2, but the value must come from
        // container - track, not from -i * step.
        let geometry = Geometry::compute(&metrics(600.0, 5, 200.0, 0.0));

        assert!(geometry.scrollable);
        assert_eq!(geometry.visible_count, 3);
        assert_eq!(geometry.max_index, 2);
        assert_eq!(geometry.snap_points.as_slice(), &[0.0, -200.0, -400.0]);
        assert_eq!(*geometry.snap_points.last().unwrap(), 600.0 - 1000.0);
    }

    #[test]
    fn test_non_multiple_track_keeps_flush_last_page() {
        // 4 items of 150px with 10px gaps: track 630, container 500,
        // step 160. Uniform stepping would put index 1 at -160; the flush
        // rule forces -130 instead.
        let geometry = Geometry::compute(&metrics(500.0, 4, 150.0, 10.0));

        assert_eq!(geometry.visible_count, 3);
        assert_eq!(geometry.max_index, 1);
        assert_eq!(geometry.snap_points.as_slice(), &[0.0, -130.0]);
    }

    #[test]
    fn test_snap_sequence_invariants() {
        for m in [
            metrics(600.0, 5, 200.0, 0.0),
            metrics(500.0, 4, 150.0, 10.0),
            metrics(320.0, 9, 120.0, 8.0),
            metrics(1024.0, 12, 260.0, 16.0),
        ] {
            let geometry = Geometry::compute(&m);
            assert_eq!(geometry.snap_points.len(), geometry.max_index + 1);
            assert_eq!(geometry.snap_points[0], 0.0);
            for pair in geometry.snap_points.windows(2) {
                assert!(pair[0] >= pair[1], "snap points must be non-increasing");
            }
            assert_eq!(geometry.min_translate(), m.container_width - m.track_width);
        }
    }

    #[test]
    fn test_fitting_content_is_not_scrollable() {
        let geometry = Geometry::compute(&metrics(600.0, 2, 200.0, 0.0));

        assert!(!geometry.scrollable);
        assert_eq!(geometry.max_index, 0);
        assert_eq!(geometry.snap_points.as_slice(), &[0.0]);
        assert_eq!(geometry.min_translate(), 0.0);
    }

    #[test]
    fn test_zero_items_is_a_noop() {
        let geometry = Geometry::compute(&SurfaceMetrics::default());
        assert!(!geometry.scrollable);
        assert_eq!(geometry.snap_points.as_slice(), &[0.0]);
    }

    #[test]
    fn test_snap_point_clamps_out_of_range_index() {
        let geometry = Geometry::compute(&metrics(600.0, 5, 200.0, 0.0));

        assert_eq!(geometry.snap_point(2), -400.0);
        assert_eq!(geometry.snap_point(99), -400.0);

        let flat = Geometry::compute(&metrics(600.0, 2, 200.0, 0.0));
        assert_eq!(flat.snap_point(5), 0.0);
    }

    #[test]
    fn test_nearest_index_prefers_lower_on_tie() {
        let geometry = Geometry::compute(&metrics(600.0, 5, 200.0, 0.0));

        // Equidistant between 0 and -200
        assert_eq!(geometry.nearest_index(-100.0), 0);
        // Clearly closer to -200
        assert_eq!(geometry.nearest_index(-150.0), 1);
        // Exact hit
        assert_eq!(geometry.nearest_index(-400.0), 2);
        // Far out of bounds resolves to the boundary index
        assert_eq!(geometry.nearest_index(-5000.0), 2);
        assert_eq!(geometry.nearest_index(300.0), 0);
    }
}
