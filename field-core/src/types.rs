use glam::Vec2;

/// Axis-aligned rectangular region `[min.x, max.x] × [min.y, max.y]`.
///
/// This is both the visible region of the plane and the terminal region
/// for field-line traces: a trace stops once it steps outside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Inclusive containment test on both edges.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Cell-center seed points of a `resolution × resolution` grid
    /// covering the region, row by row.
    pub fn seed_grid(&self, resolution: usize) -> Vec<Vec2> {
        let size = self.max - self.min;
        let mut seeds = Vec::with_capacity(resolution * resolution);
        for j in 0..resolution {
            for i in 0..resolution {
                let u = (i as f32 + 0.5) / resolution as f32;
                let v = (j as f32 + 0.5) / resolution as f32;
                seeds.push(self.min + Vec2::new(u * size.x, v * size.y));
            }
        }
        seeds
    }
}
