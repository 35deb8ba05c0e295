//! Per-frame drawing: the light disk, the obstacles, and the ray fan.

use crate::display::PixelBuffer;
use crate::scene::{Obstacle, Scene};

/// How far a ray is projected before giving up: far enough to leave any
/// reasonably sized framebuffer from any on-screen origin.
const RAY_LENGTH: f64 = 10_000.0;

/// Render one frame: clear, light disk, obstacles, rays.
pub fn render_scene(buffer: &mut PixelBuffer, scene: &Scene) {
    buffer.clear(0, 0, 0);

    let light = &scene.light.circle;
    buffer.fill_circle(light.x, light.y, light.r, 255, 255, 255);

    for obstacle in &scene.obstacles {
        draw_obstacle(buffer, obstacle);
    }

    cast_rays(buffer, scene);
}

fn draw_obstacle(buffer: &mut PixelBuffer, obstacle: &Obstacle) {
    match obstacle {
        Obstacle::Circle(c) => buffer.fill_circle(c.x, c.y, c.r, 255, 255, 255),
        Obstacle::Pixel(p) => buffer.set_pixel(p.x, p.y, 255, 255, 255),
        Obstacle::Segment(s) => buffer.line(s.x1, s.y1, s.x2, s.y2, 255, 255, 255),
    }
}

/// Draw every ray from its origin outward until it leaves the buffer or
/// touches an obstacle. The containment test doubles as the line walker's
/// stop predicate, so a ray ends exactly at (but excluding) the first
/// obstacle pixel on its path.
pub fn cast_rays(buffer: &mut PixelBuffer, scene: &Scene) {
    for ray in &scene.light.rays {
        let far_x = ray.x + (ray.angle.cos() * RAY_LENGTH) as i32;
        let far_y = ray.y + (ray.angle.sin() * RAY_LENGTH) as i32;

        buffer.line_until(ray.x, ray.y, far_x, far_y, 255, 255, 255, |x, y| {
            scene.blocked(x, y)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Circle, LightSource, Obstacle, Pixel, Scene, Segment};
    use std::f64::consts::TAU;

    fn any_lit_near(buffer: &PixelBuffer, cx: i32, cy: i32, reach: i32) -> bool {
        for y in (cy - reach)..=(cy + reach) {
            for x in (cx - reach)..=(cx + reach) {
                if buffer.get_pixel(x, y) == Some((255, 255, 255)) {
                    return true;
                }
            }
        }
        false
    }

    #[test]
    fn test_render_scene_draws_every_obstacle_kind() {
        let scene = Scene::new(
            LightSource::new(10, 10, 2, 0),
            vec![
                Obstacle::Circle(Circle::new(100, 50, 5)),
                Obstacle::Pixel(Pixel::new(200, 30)),
                Obstacle::Segment(Segment::new(300, 20, 310, 20)),
            ],
        );
        let mut buffer = PixelBuffer::with_size(400, 100);
        render_scene(&mut buffer, &scene);

        assert_eq!(buffer.get_pixel(10, 10), Some((255, 255, 255))); // light
        assert_eq!(buffer.get_pixel(100, 50), Some((255, 255, 255)));
        assert_eq!(buffer.get_pixel(200, 30), Some((255, 255, 255)));
        assert_eq!(buffer.get_pixel(305, 20), Some((255, 255, 255)));
        assert_eq!(buffer.get_pixel(0, 99), Some((0, 0, 0)));
    }

    #[test]
    fn test_rays_stop_at_obstacle_and_reach_its_rim() {
        let obstacle = Circle::new(600, 400, 50);
        let scene = Scene::new(
            LightSource::new(400, 300, 50, 120),
            vec![Obstacle::Circle(obstacle)],
        );
        let mut buffer = PixelBuffer::with_size(1200, 800);
        cast_rays(&mut buffer, &scene);

        // Nothing is ever plotted strictly inside the obstacle.
        for y in 340..=460 {
            for x in 540..=660 {
                let d2 = (x - obstacle.x).pow(2) + (y - obstacle.y).pow(2);
                if d2 < obstacle.r * obstacle.r {
                    assert_eq!(
                        buffer.get_pixel(x, y),
                        Some((0, 0, 0)),
                        "ray pixel inside obstacle at ({}, {})",
                        x,
                        y
                    );
                }
            }
        }

        // The blocked rays still reach the obstacle's near rim.
        let mut rim_lit = false;
        for y in 340..=460 {
            for x in 540..=660 {
                let d2 = (x - obstacle.x).pow(2) + (y - obstacle.y).pow(2);
                if d2 >= 2500 && d2 <= 3600 && buffer.get_pixel(x, y) == Some((255, 255, 255)) {
                    rim_lit = true;
                }
            }
        }
        assert!(rim_lit, "no ray pixel near the obstacle rim");
    }

    #[test]
    fn test_blocked_ray_is_shorter_than_full_projection() {
        // The ray aimed closest at the obstacle center.
        let step = TAU / 120.0;
        let aim = (100.0_f64).atan2(200.0);
        let ray_index = (aim / step).round() as usize;
        let angle = step * ray_index as f64;

        // A probe point well beyond the obstacle along that ray. Adjacent
        // rays are ~30px away laterally at this distance, so a small
        // neighborhood isolates this one ray.
        let probe_x = 400 + (angle.cos() * 600.0) as i32;
        let probe_y = 300 + (angle.sin() * 600.0) as i32;

        let mut blocked_scene = Scene::new(
            LightSource::new(400, 300, 50, 120),
            vec![Obstacle::Circle(Circle::new(600, 400, 50))],
        );

        let mut buffer = PixelBuffer::with_size(1200, 800);
        cast_rays(&mut buffer, &blocked_scene);
        assert!(
            !any_lit_near(&buffer, probe_x, probe_y, 2),
            "ray passed through the obstacle"
        );

        blocked_scene.obstacles.clear();
        let mut open_buffer = PixelBuffer::with_size(1200, 800);
        cast_rays(&mut open_buffer, &blocked_scene);
        assert!(
            any_lit_near(&open_buffer, probe_x, probe_y, 2),
            "unobstructed ray never reached the probe point"
        );
    }

    #[test]
    fn test_rays_from_dragged_light_emanate_from_new_origin() {
        let mut scene = Scene::new(LightSource::new(400, 300, 50, 120), Vec::new());
        scene.drag_light(250, 150);

        let mut buffer = PixelBuffer::with_size(1200, 800);
        cast_rays(&mut buffer, &scene);

        // Ray 0 points along +x from the new origin.
        assert_eq!(buffer.get_pixel(251, 150), Some((255, 255, 255)));
        assert_eq!(buffer.get_pixel(1199, 150), Some((255, 255, 255)));
        // Nothing radiates from the old origin's row beyond the fan.
        assert_eq!(buffer.get_pixel(399, 300), Some((0, 0, 0)));
    }
}
