//! Canvas particle trail: surface sizing, the frame loop, and drawing.
//!
//! [`behavior::trail::TrailCore`] decides every lifecycle transition; this
//! module executes the resulting commands against the canvas and the frame
//! scheduler. The requestAnimationFrame callback is the sole animation
//! driver and is explicitly cancelled on every transition to disabled or
//! hidden, so no orphaned callback can outlive a transition.
//!
//! The scroll factor is recomputed from the live scroll position inside
//! each frame; the passive scroll listener at the bottom is deliberately
//! inert.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use behavior::theme::Theme;
use behavior::trail::{ParticleField, ResizeAction, TrailCore, VisibilityAction, fill_style, scroll_factor};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, Window};

const CANVAS_ID: &str = "particleCanvas";
const CONTAINER_SELECTOR: &str = ".particle-trail";
const THEME_ATTR: &str = "data-theme";

/// Everything the trail owns: the canvas and its 2D context, the particle
/// field, the lifecycle core, and the outstanding frame handle.
struct Runtime {
    canvas: HtmlCanvasElement,
    container: Element,
    ctx: CanvasRenderingContext2d,
    core: TrailCore,
    field: ParticleField,
    frame_id: Option<i32>,
}

type Shared = Rc<RefCell<Runtime>>;

/// The frame closure, held in a cell so it can reschedule itself.
type FrameHandle = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

impl Runtime {
    /// Match the canvas pixel buffer to the container's current size.
    fn fit_surface(&mut self) {
        let rect = self.container.get_bounding_client_rect();
        self.canvas.set_width(rect.width() as u32);
        self.canvas.set_height(rect.height() as u32);
    }

    /// Regenerate the whole field over the current surface.
    fn regenerate(&mut self) {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        self.field.regenerate(width, height, &mut || js_sys::Math::random());
    }

    /// One animation frame: advance the field and redraw.
    fn frame(&mut self) {
        let factor = live_scroll_factor();
        self.field.step(factor, &mut || js_sys::Math::random());
        if let Err(err) = self.draw() {
            log::warn!("particle draw failed: {err:?}");
        }
    }

    /// Clear and redraw every particle with the live theme's hue.
    fn draw(&self) -> Result<(), JsValue> {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        let theme = applied_theme();

        self.ctx.clear_rect(0.0, 0.0, width, height);
        for particle in &self.field.particles {
            self.ctx.begin_path();
            self.ctx.arc(particle.x, particle.y, particle.radius, 0.0, TAU)?;
            self.ctx.set_fill_style_str(&fill_style(theme, particle.alpha));
            self.ctx.fill();
            self.ctx.close_path();
        }
        Ok(())
    }

    /// Blank the surface so no stale frame lingers after a shutdown.
    fn clear_surface(&self) {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }
}

/// Wire up the trail. Missing canvas or container is a permanent no-op:
/// no listeners attach and no loop ever starts.
pub fn init() {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(canvas) = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        return;
    };
    let Ok(Some(container)) = document.query_selector(CONTAINER_SELECTOR) else { return };
    let Some(ctx) = context_2d(&canvas) else { return };

    let mut runtime = Runtime {
        canvas,
        container,
        ctx,
        core: TrailCore::new(viewport_width(&window)),
        field: ParticleField::new(),
        frame_id: None,
    };
    runtime.fit_surface();
    runtime.regenerate();

    let runtime: Shared = Rc::new(RefCell::new(runtime));
    let frame = frame_closure(&runtime);

    if runtime.borrow().core.is_enabled() {
        schedule(&runtime, &frame);
    }

    attach_resize(&window, &runtime, &frame);
    attach_visibility(&document, &runtime, &frame);
    attach_scroll(&window);
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Build the self-rescheduling frame callback.
fn frame_closure(runtime: &Shared) -> FrameHandle {
    let handle: FrameHandle = Rc::new(RefCell::new(None));
    let closure = {
        let runtime = Rc::clone(runtime);
        let handle = Rc::clone(&handle);
        Closure::<dyn FnMut()>::new(move || {
            runtime.borrow_mut().frame();
            // Reschedule unless a transition cancelled the loop mid-frame.
            if runtime.borrow().core.loop_scheduled() {
                request_frame(&runtime, &handle);
            }
        })
    };
    *handle.borrow_mut() = Some(closure);
    handle
}

/// Start the loop if it is not already running.
fn schedule(runtime: &Shared, frame: &FrameHandle) {
    if runtime.borrow().core.loop_scheduled() {
        return;
    }
    runtime.borrow_mut().core.frame_scheduled();
    request_frame(runtime, frame);
}

fn request_frame(runtime: &Shared, frame: &FrameHandle) {
    let Some(window) = web_sys::window() else { return };
    let requested = {
        let handle = frame.borrow();
        let Some(closure) = handle.as_ref() else { return };
        window.request_animation_frame(closure.as_ref().unchecked_ref())
    };
    match requested {
        Ok(id) => runtime.borrow_mut().frame_id = Some(id),
        Err(err) => {
            log::warn!("frame scheduling failed: {err:?}");
            runtime.borrow_mut().core.frame_cancelled();
        }
    }
}

/// Cancel the outstanding frame callback, if any.
fn cancel_frame(runtime: &Shared) {
    let mut rt = runtime.borrow_mut();
    if let Some(id) = rt.frame_id.take() {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(id);
        }
    }
    rt.core.frame_cancelled();
}

fn attach_resize(window: &Window, runtime: &Shared, frame: &FrameHandle) {
    let closure = {
        let runtime = Rc::clone(runtime);
        let frame = Rc::clone(frame);
        Closure::<dyn FnMut()>::new(move || {
            let width = web_sys::window().map_or(0.0, |w| viewport_width(&w));
            let action = runtime.borrow_mut().core.on_resize(width);
            match action {
                ResizeAction::Restart => {
                    {
                        let mut rt = runtime.borrow_mut();
                        rt.fit_surface();
                        rt.regenerate();
                    }
                    schedule(&runtime, &frame);
                }
                ResizeAction::Refresh => {
                    let mut rt = runtime.borrow_mut();
                    rt.fit_surface();
                    rt.regenerate();
                }
                ResizeAction::Shutdown => {
                    cancel_frame(&runtime);
                    runtime.borrow().clear_surface();
                }
                ResizeAction::Ignore => {}
            }
        })
    };
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn attach_visibility(document: &Document, runtime: &Shared, frame: &FrameHandle) {
    let closure = {
        let document = document.clone();
        let runtime = Rc::clone(runtime);
        let frame = Rc::clone(frame);
        Closure::<dyn FnMut()>::new(move || {
            let action = runtime.borrow_mut().core.on_visibility(document.hidden());
            match action {
                VisibilityAction::Suspend => cancel_frame(&runtime),
                VisibilityAction::Resume => schedule(&runtime, &frame),
                VisibilityAction::Ignore => {}
            }
        })
    };
    let _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Passive scroll listener with an inert body. The frame callback samples
/// the live scroll position itself; this only keeps the page attached to
/// scroll-linked frame scheduling.
fn attach_scroll(window: &Window) {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let closure = Closure::<dyn FnMut()>::new(|| {});
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

fn viewport_width(window: &Window) -> f64 {
    window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

/// Normalized scroll depth, straight off the live window and document.
fn live_scroll_factor() -> f64 {
    let Some(window) = web_sys::window() else { return 0.0 };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let page = window
        .document()
        .and_then(|d| d.body())
        .map_or(0.0, |body| f64::from(body.scroll_height()));
    scroll_factor(scroll_y, page - viewport)
}

/// The theme currently applied on the document root, read live so a toggle
/// mid-animation recolors the very next frame.
fn applied_theme() -> Theme {
    let attr = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(THEME_ATTR));
    Theme::from_attr(attr.as_deref())
}
