use super::Circle;
use std::f64::consts::TAU;

/// One light ray: an origin at the light's center and an angle fixed for
/// the lifetime of the program
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub x: i32,
    pub y: i32,
    pub angle: f64,
}

/// A point light: the drawn disk plus a fan of rays with angles evenly
/// spaced over the full turn.
///
/// The ray count and every angle are fixed at construction; dragging the
/// light moves only the origins, in lockstep with the circle's center.
pub struct LightSource {
    pub circle: Circle,
    pub rays: Vec<Ray>,
}

impl LightSource {
    pub fn new(x: i32, y: i32, radius: i32, ray_count: usize) -> Self {
        let step = TAU / ray_count as f64;
        let rays = (0..ray_count)
            .map(|i| Ray {
                x,
                y,
                angle: step * i as f64,
            })
            .collect();
        Self {
            circle: Circle::new(x, y, radius),
            rays,
        }
    }

    /// Move the light's center, carrying every ray origin along
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.circle.x = x;
        self.circle.y = y;
        for ray in &mut self.rays {
            ray.x = x;
            ray.y = y;
        }
    }
}
