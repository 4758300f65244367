// Keeps the drawing surface sized as a fixed share of the display area

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Surface {
    width: f64,
    height: f64,
    width_fraction: f64,
    height_fraction: f64,
}

impl Surface {
    pub fn new(width_fraction: f64, height_fraction: f64) -> Self {
        Surface {
            width: 0.0,
            height: 0.0,
            width_fraction,
            height_fraction,
        }
    }

    /// Surface with fixed dimensions, as if the display had been resized to fit it exactly.
    pub fn with_size(width: f64, height: f64) -> Self {
        Surface {
            width,
            height,
            width_fraction: 1.0,
            height_fraction: 1.0,
        }
    }

    // Recomputed from scratch every time, zero-sized displays included
    pub fn resize(&mut self, display_width: f64, display_height: f64) {
        self.width = display_width * self.width_fraction;
        self.height = display_height * self.height_fraction;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_applies_fractions() {
        let mut surface = Surface::new(0.9, 0.65);
        surface.resize(1000.0, 800.0);
        assert!((surface.width() - 900.0).abs() < 1e-9);
        assert!((surface.height() - 520.0).abs() < 1e-9);
    }

    #[test]
    fn resize_is_idempotent() {
        let mut surface = Surface::new(0.9, 0.65);
        surface.resize(1280.0, 720.0);
        let first = surface;
        surface.resize(1280.0, 720.0);
        assert_eq!(surface, first);
    }

    #[test]
    fn resize_accepts_empty_display() {
        let mut surface = Surface::new(0.9, 0.65);
        surface.resize(0.0, 0.0);
        assert_eq!(surface.width(), 0.0);
        assert_eq!(surface.height(), 0.0);
    }

    #[test]
    fn fixed_size_surface() {
        let mut surface = Surface::with_size(100.0, 60.0);
        assert_eq!(surface.center(), (50.0, 30.0));
        surface.resize(100.0, 60.0);
        assert_eq!((surface.width(), surface.height()), (100.0, 60.0));
    }
}
