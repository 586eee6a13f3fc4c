use glium::glutin::dpi::LogicalSize;
use glium::glutin::event::{Event, StartCause, WindowEvent};
use glium::glutin::event_loop::{ControlFlow, EventLoop};
use glium::glutin::window::WindowBuilder;
use glium::glutin::ContextBuilder;
use lazy_static::lazy_static;
use log::{debug, info};
use send_wrapper::SendWrapper;
use std::cell::RefCell;

use crate::controller::{Controller, UiEvent};
use crate::render::FrameContext;
use crate::widget::{Allocation, DrawingSurface, MainLoop, Window};

/// Initial inner size of the main window, in logical pixels.
const INITIAL_SIZE: (u32, u32) = (200, 200);

lazy_static! {
    static ref EVENT_LOOP: SendWrapper<RefCell<Option<EventLoop<()>>>> =
        SendWrapper::new(RefCell::new(Some(EventLoop::new())));
    pub static ref DISPLAY: SendWrapper<glium::Display> = SendWrapper::new({
        let (w, h) = INITIAL_SIZE;
        let wb = WindowBuilder::new()
            .with_title(crate::TITLE.to_owned())
            .with_inner_size(LogicalSize::new(w, h))
            .with_visible(false);
        let cb = ContextBuilder::new().with_vsync(true);
        glium::Display::new(
            wb,
            cb,
            EVENT_LOOP.borrow().as_ref().expect("Event loop already running"),
        )
        .expect("Failed to initialize display")
    });
}

/// Translates a winit event into the event the controller handles, if any.
fn ui_event(event: &Event<'_, ()>) -> Option<UiEvent> {
    match event {
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => Some(UiEvent::CloseRequested),
        Event::RedrawRequested(_) => Some(UiEvent::PaintRequested),
        _ => None,
    }
}

impl MainLoop for ControlFlow {
    fn quit(&mut self) {
        *self = ControlFlow::Exit;
    }
}

/// Top-level glutin window behind the display.
pub struct GliumWindow {
    display: &'static glium::Display,
    visible: bool,
}
impl GliumWindow {
    fn new(display: &'static glium::Display) -> Self {
        Self {
            display,
            visible: false,
        }
    }
}
impl Window for GliumWindow {
    fn add<S: DrawingSurface>(&mut self, area: &S) {
        // The GL framebuffer always fills the window, so there is nothing to
        // lay out.
        let alloc = area.allocation();
        debug!("Embedding {}x{} drawing surface", alloc.width, alloc.height);
    }
    fn show(&mut self) {
        let gl_window = self.display.gl_window();
        gl_window.window().set_visible(true);
        gl_window.window().request_redraw();
        self.visible = true;
    }
    fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Drawing surface backed by the window's default framebuffer.
pub struct GliumDrawingArea {
    display: &'static glium::Display,
    visible: bool,
}
impl GliumDrawingArea {
    fn new(display: &'static glium::Display) -> Self {
        Self {
            display,
            visible: false,
        }
    }
}
impl DrawingSurface for GliumDrawingArea {
    type Context = FrameContext;

    fn show(&mut self) {
        self.visible = true;
    }
    fn is_visible(&self) -> bool {
        self.visible
    }
    fn allocation(&self) -> Allocation {
        self.display.get_framebuffer_dimensions().into()
    }
    fn new_context(&mut self) -> FrameContext {
        FrameContext::new(self.display)
    }
}

/// Opens the main window and runs the event loop until it is closed.
pub fn show_gui() -> ! {
    let display: &'static glium::Display = &**DISPLAY;

    let mut controller = Controller::new(GliumWindow::new(display), GliumDrawingArea::new(display));

    let ev_loop = EVENT_LOOP
        .borrow_mut()
        .take()
        .expect("Event loop already running");
    ev_loop.run(move |event, _ev_loop, control_flow| {
        if let Some(ev) = ui_event(&event) {
            controller.handle_event(ev, control_flow);
            return;
        }

        match event {
            Event::NewEvents(StartCause::Init) => *control_flow = ControlFlow::Wait,

            // The allocation changed, so the whole surface is exposed.
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                debug!("Window resized to {}x{}", size.width, size.height);
                display.gl_window().window().request_redraw();
            }

            // The program is about to exit.
            Event::LoopDestroyed => {
                info!("Event loop stopped with status {:?}", controller.exit_code());
            }

            _ => (),
        }
    })
}
