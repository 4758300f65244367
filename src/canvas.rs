// Drawing primitives the simulation needs from its host surface

use crate::color::Color;
use glm::DVec2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Canvas {
    type Error;

    /// Wipe the whole surface.
    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) -> Result<(), Self::Error>;
}

impl Canvas for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) -> Result<(), JsValue> {
        self.begin_path();
        self.arc(center.x, center.y, radius, 0.0, std::f64::consts::PI * 2.0)?;
        #[allow(deprecated)]
        self.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.fill();
        Ok(())
    }
}
