// Simple particle struct to keep track of individual position, velocity, radius and color

use crate::color::Color;
use crate::surface::Surface;
use glm::DVec2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(
        pos_x: f64,
        pos_y: f64,
        vel_x: f64,
        vel_y: f64,
        radius: f64,
        color: Color,
    ) -> Particle {
        debug_assert!(radius > 0.0, "particle radius must be positive");
        Particle {
            pos: glm::vec2(pos_x, pos_y),
            vel: glm::vec2(vel_x, vel_y),
            radius,
            color,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Advance one frame: reflect off the surface edges, then move.
    ///
    /// The edge test looks at the position before moving, so a particle sitting past an
    /// edge turns around on this frame rather than the next one.
    pub fn advance(&mut self, surface: &Surface) {
        if Self::crosses_edge(self.pos.x, self.radius, surface.width()) {
            self.vel.x = -self.vel.x;
        }
        if Self::crosses_edge(self.pos.y, self.radius, surface.height()) {
            self.vel.y = -self.vel.y;
        }

        self.pos += self.vel;
    }

    fn crosses_edge(pos: f64, radius: f64, extent: f64) -> bool {
        pos + radius > extent || pos - radius < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE;

    #[test]
    fn moves_by_velocity_inside_bounds() {
        let surface = Surface::with_size(100.0, 100.0);
        let mut p = Particle::new(50.0, 50.0, 3.0, 2.5, 20.0, PALETTE[0]);
        p.advance(&surface);
        assert_eq!(p.pos, glm::vec2(53.0, 52.5));
        assert_eq!(p.vel, glm::vec2(3.0, 2.5));
    }

    #[test]
    fn reflects_off_left_edge_before_moving() {
        let surface = Surface::with_size(100.0, 100.0);
        let radius = 10.0;
        let mut p = Particle::new(radius - 1.0, 50.0, -2.0, 0.5, radius, PALETTE[1]);
        p.advance(&surface);
        assert_eq!(p.vel.x, 2.0);
        assert!(p.pos.x > radius - 1.0, "particle should have moved right");
    }

    #[test]
    fn reflects_off_bottom_edge() {
        let surface = Surface::with_size(100.0, 100.0);
        let mut p = Particle::new(50.0, 95.5, 1.0, 2.0, 5.0, PALETTE[2]);
        p.advance(&surface);
        assert_eq!(p.vel.y, -2.0);
        assert_eq!(p.pos.y, 93.5);
        assert_eq!(p.vel.x, 1.0);
    }

    #[test]
    fn touching_an_edge_is_not_a_collision() {
        let surface = Surface::with_size(100.0, 100.0);
        let mut p = Particle::new(95.0, 50.0, 1.0, 0.0, 5.0, PALETTE[3]);
        p.advance(&surface);
        assert_eq!(p.vel.x, 1.0);
        assert_eq!(p.pos.x, 96.0);

        // Now past the edge, so the next frame turns it around
        p.advance(&surface);
        assert_eq!(p.vel.x, -1.0);
        assert_eq!(p.pos.x, 95.0);
    }

    #[test]
    fn radius_is_unchanged_by_motion() {
        let surface = Surface::with_size(30.0, 30.0);
        let mut p = Particle::new(15.0, 15.0, 3.0, -3.0, 7.5, PALETTE[4]);
        for _ in 0..100 {
            p.advance(&surface);
        }
        assert_eq!(p.radius(), 7.5);
    }
}
