//! Utility functions for headball

use bevy::prelude::*;

/// Axis-aligned overlap test between two centered boxes.
/// Touching edges do not count as overlap.
pub fn aabb_overlap(center_a: Vec2, size_a: Vec2, center_b: Vec2, size_b: Vec2) -> bool {
    let diff = center_a - center_b;
    let half = (size_a + size_b) / 2.0;
    diff.x.abs() < half.x && diff.y.abs() < half.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes() {
        assert!(aabb_overlap(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(8.0, 0.0),
            Vec2::new(10.0, 10.0),
        ));
    }

    #[test]
    fn separated_boxes() {
        assert!(!aabb_overlap(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(10.0, 10.0),
        ));
    }

    #[test]
    fn edge_contact_is_not_overlap() {
        assert!(!aabb_overlap(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ));
    }
}
