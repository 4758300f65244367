//! Browser wiring: finds the canvas and the two buttons, follows window resizes
//! and drives the simulation from `requestAnimationFrame`.

use crate::config::{ElementIds, SimulationConfig};
use crate::simulation::Simulation;
use crate::timer::Timer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, EventTarget, HtmlCanvasElement, Window};

struct App {
    window: Window,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    simulation: Simulation,
}

impl App {
    fn new(
        window: Window,
        canvas: HtmlCanvasElement,
        config: SimulationConfig,
    ) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;

        Ok(App {
            window,
            canvas,
            context,
            simulation: Simulation::with_config(config),
        })
    }

    fn display_size(&self) -> Result<(f64, f64), JsValue> {
        let width = self
            .window
            .inner_width()?
            .as_f64()
            .ok_or_else(|| JsValue::from_str("window.innerWidth is not a number"))?;
        let height = self
            .window
            .inner_height()?
            .as_f64()
            .ok_or_else(|| JsValue::from_str("window.innerHeight is not a number"))?;
        Ok((width, height))
    }

    // Canvas pixel dimensions are integers, the simulation keeps the exact fractions
    fn sync_canvas_size(&self) {
        let surface = self.simulation.surface();
        self.canvas.set_width(surface.width() as u32);
        self.canvas.set_height(surface.height() as u32);
    }

    fn resize(&mut self) -> Result<(), JsValue> {
        let (width, height) = self.display_size()?;
        self.simulation.resize(width, height);
        self.sync_canvas_size();
        Ok(())
    }

    fn handle_display_resize(&mut self) -> Result<(), JsValue> {
        let _timer = Timer::new("App::handle_display_resize");
        let (width, height) = self.display_size()?;
        self.simulation.handle_display_resize(width, height);
        self.sync_canvas_size();
        Ok(())
    }

    fn frame(&mut self) -> Result<(), JsValue> {
        self.simulation.step(&mut self.context)
    }
}

/// Handle returned to JS by [`start`], for driving the demo from page scripts.
#[wasm_bindgen]
pub struct ParticleDemo {
    app: Rc<RefCell<App>>,
}

#[wasm_bindgen]
impl ParticleDemo {
    pub fn single(&self) {
        self.app.borrow_mut().simulation.generate_single();
    }

    pub fn swarm(&self, count: u32) {
        self.app.borrow_mut().simulation.generate_swarm(count as usize);
    }

    pub fn resize(&self) -> Result<(), JsValue> {
        self.app.borrow_mut().handle_display_resize()
    }

    pub fn particle_count(&self) -> u32 {
        self.app.borrow().simulation.particles().len() as u32
    }
}

/// Mount the demo on `#particleCanvas`, with `#oneParticleBtn` and
/// `#manyParticlesBtn` as the single and swarm triggers.
#[wasm_bindgen]
pub fn start() -> Result<ParticleDemo, JsValue> {
    launch(ElementIds::default(), SimulationConfig::default())
}

#[wasm_bindgen]
pub fn start_with(
    canvas_id: &str,
    single_button_id: &str,
    swarm_button_id: &str,
) -> Result<ParticleDemo, JsValue> {
    let ids = ElementIds {
        canvas: canvas_id.to_string(),
        single_button: single_button_id.to_string(),
        swarm_button: swarm_button_id.to_string(),
    };
    launch(ids, SimulationConfig::default())
}

pub fn launch(ids: ElementIds, config: SimulationConfig) -> Result<ParticleDemo, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    let canvas = element_by_id(&document, &ids.canvas)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not a canvas", ids.canvas)))?;
    let single_button = element_by_id(&document, &ids.single_button)?;
    let swarm_button = element_by_id(&document, &ids.swarm_button)?;

    let swarm_count = config.swarm_count;
    let mut app = App::new(window.clone(), canvas, config)?;
    app.resize()?;
    app.simulation.generate_swarm(swarm_count);
    let app = Rc::new(RefCell::new(app));

    listen(&single_button, "click", &app, |app| {
        app.simulation.generate_single();
        Ok(())
    })?;
    listen(&swarm_button, "click", &app, move |app| {
        app.simulation.generate_swarm(swarm_count);
        Ok(())
    })?;
    listen(&window, "resize", &app, App::handle_display_resize)?;

    run_animation_loop(window, Rc::clone(&app))?;
    log::info!("particle demo started on #{}", ids.canvas);

    Ok(ParticleDemo { app })
}

fn element_by_id(document: &Document, id: &str) -> Result<web_sys::Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id #{}", id)))
}

fn listen<F>(
    target: &EventTarget,
    event: &str,
    app: &Rc<RefCell<App>>,
    action: F,
) -> Result<(), JsValue>
where
    F: Fn(&mut App) -> Result<(), JsValue> + 'static,
{
    let app = Rc::clone(app);
    let event_name = event.to_string();
    let closure = Closure::wrap(Box::new(move || {
        if let Err(err) = action(&mut app.borrow_mut()) {
            log::error!("{} handler failed: {:?}", event_name, err);
        }
    }) as Box<dyn FnMut()>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

fn request_animation_frame(
    window: &Window,
    callback: &Closure<dyn FnMut()>,
) -> Result<i32, JsValue> {
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}

fn run_animation_loop(window: Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = Rc::clone(&callback);
    let loop_window = window.clone();

    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = request_animation_frame(&loop_window, callback) {
                log::error!("failed to schedule next frame: {:?}", err);
            }
        }
        if let Err(err) = app.borrow_mut().frame() {
            log::error!("frame failed: {:?}", err);
        }
    }) as Box<dyn FnMut()>));

    let first = callback.borrow();
    if let Some(first) = first.as_ref() {
        request_animation_frame(&window, first)?;
    }
    Ok(())
}
