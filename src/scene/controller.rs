use std::cell::{Cell, RefCell};
use std::fmt::Debug;
use std::rc::Rc;

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, Window};

use crate::scene::geometry::Scene;

const RING_COLOR: RGBColor = RGBColor(0xdc, 0x66, 0xff);

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("could not acquire drawing surface: {0}")]
    Surface(String),
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error("could not request animation frame: {0}")]
    Frame(String),
}

impl SceneError {
    fn frame<E: Debug>(err: E) -> Self {
        SceneError::Frame(format!("{:?}", err))
    }
}

/// Logs a failed teardown step; returns whether it succeeded.
fn release_step<T, E: Debug>(step: &str, result: Result<T, E>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            log::debug!("Ring scene release: {} failed: {:?}", step, e);
            false
        }
    }
}

impl From<JsValue> for SceneError {
    fn from(value: JsValue) -> Self {
        SceneError::Surface(format!("{:?}", value))
    }
}

/// Canvas plus its 2D context, sized once at activation.
struct Surface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl Surface {
    fn acquire(window: &Window, container: &Element) -> Result<Self, SceneError> {
        let document = window.document().ok_or(SceneError::NoDocument)?;
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SceneError::Surface("created element is not a canvas".into()))?;

        let width = container.client_width().max(1) as u32;
        let height = container.client_height().max(1) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| SceneError::Surface("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SceneError::Surface("unexpected context type".into()))?;

        container.append_child(&canvas)?;

        Ok(Self {
            canvas,
            context,
            width,
            height,
        })
    }

    fn draw(&self, scene: &Scene) -> Result<(), SceneError> {
        self.context
            .clear_rect(0.0, 0.0, f64::from(self.width), f64::from(self.height));

        let backend = CanvasBackend::with_canvas_object(self.canvas.clone())
            .ok_or_else(|| SceneError::Draw("canvas backend unavailable".into()))?;
        let root = backend.into_drawing_area();

        for outline in scene.outlines(self.width, self.height) {
            root.draw(&PathElement::new(outline, RING_COLOR.stroke_width(1)))
                .map_err(|e| SceneError::Draw(e.to_string()))?;
        }
        root.present().map_err(|e| SceneError::Draw(e.to_string()))
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Runs the ring animation inside a container element.
///
/// Everything acquired in [`SceneController::mount`] is released when the
/// controller is dropped: the pending frame is cancelled, the frame callback
/// and the scene it owns are freed, and the canvas is detached.
pub struct SceneController {
    window: Window,
    container: Element,
    canvas: HtmlCanvasElement,
    frame_id: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl SceneController {
    pub fn mount(container: &Element) -> Result<Self, SceneError> {
        let window = web_sys::window().ok_or(SceneError::NoWindow)?;
        let surface = Surface::acquire(&window, container)?;
        let canvas = surface.canvas.clone();
        let mut scene = Scene::new(f64::from(surface.width) / f64::from(surface.height));

        log::debug!(
            "Ring scene mounted at {}x{} with {} rings of {} segments",
            surface.width,
            surface.height,
            scene.rings().len(),
            scene.geometry().points().len()
        );

        let frame_id = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let next_frame = Rc::clone(&callback);
        let next_id = Rc::clone(&frame_id);
        let loop_window = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
            scene.step();
            if let Err(e) = surface.draw(&scene) {
                log::warn!("Ring scene frame skipped: {}", e);
            }
            next_id.set(None);
            if let Some(cb) = next_frame.borrow().as_ref() {
                match loop_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => next_id.set(Some(id)),
                    Err(e) => log::error!("Ring scene stopped: {}", SceneError::frame(e)),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let controller = Self {
            window,
            container: container.clone(),
            canvas,
            frame_id,
            callback,
        };
        controller.schedule()?;
        Ok(controller)
    }

    fn schedule(&self) -> Result<(), SceneError> {
        if let Some(cb) = self.callback.borrow().as_ref() {
            let id = self
                .window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(SceneError::frame)?;
            self.frame_id.set(Some(id));
        }
        Ok(())
    }
}

impl Drop for SceneController {
    fn drop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            release_step("cancel frame", self.window.cancel_animation_frame(id));
        }
        // The callback holds a handle to its own cell; taking it out breaks
        // the cycle and frees the scene with it.
        let callback = self.callback.borrow_mut().take();
        drop(callback);
        if self.canvas.parent_node().is_some() {
            release_step("detach canvas", self.container.remove_child(&self.canvas));
        }
        log::debug!("Ring scene released");
    }
}
