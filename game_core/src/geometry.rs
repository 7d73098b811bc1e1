use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// True if the closed interval `[lo, hi]` overlaps the box horizontally
    pub fn overlaps_x(&self, lo: f32, hi: f32) -> bool {
        lo <= self.max.x && hi >= self.min.x
    }

    /// True if `y` lies within the box's vertical span (inclusive)
    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.min.y && y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_min_size() {
        let aabb = Aabb::from_min_size(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0));
        assert_eq!(aabb.max, Vec2::new(14.0, 26.0));
        assert_eq!(aabb.size(), Vec2::new(4.0, 6.0));
        assert_eq!(aabb.center(), Vec2::new(12.0, 23.0));
    }

    #[test]
    fn test_overlaps_x_touching_edges() {
        let aabb = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 5.0));
        assert!(aabb.overlaps_x(20.0, 30.0), "Touching right edge overlaps");
        assert!(aabb.overlaps_x(0.0, 10.0), "Touching left edge overlaps");
        assert!(!aabb.overlaps_x(20.1, 30.0));
        assert!(!aabb.overlaps_x(0.0, 9.9));
    }

    #[test]
    fn test_contains_y() {
        let aabb = Aabb::new(Vec2::new(0.0, 100.0), Vec2::new(10.0, 190.0));
        assert!(aabb.contains_y(100.0));
        assert!(aabb.contains_y(190.0));
        assert!(!aabb.contains_y(99.0));
        assert!(!aabb.contains_y(191.0));
    }
}
