use log::{debug, info, trace};

use crate::widget::{DrawContext, DrawingSurface, MainLoop, Propagation, Rect, Window};

/// Event that the main window controller responds to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The user asked to close the window.
    CloseRequested,
    /// The drawing surface was exposed and must be repainted.
    PaintRequested,
}

/// Lifecycle of the controller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    /// The event loop is active.
    Running,
    /// The event loop has been told to stop.
    Terminated,
}

/// Owns the main window and its drawing surface, and reacts to their events.
#[derive(Debug)]
pub struct Controller<W, S> {
    window: W,
    area: S,
    state: State,
}
impl<W: Window, S: DrawingSurface> Controller<W, S> {
    /// Embeds `area` in `window` and shows both.
    pub fn new(mut window: W, mut area: S) -> Self {
        window.add(&area);
        area.show();
        window.show();
        debug_assert!(window.is_visible() && area.is_visible());
        info!("Main window shown");

        Self {
            window,
            area,
            state: State::Running,
        }
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }
    /// Returns the process exit status once the event loop has been stopped.
    pub fn exit_code(&self) -> Option<i32> {
        match self.state() {
            State::Running => None,
            State::Terminated => Some(0),
        }
    }

    /// Routes an event to its handler.
    pub fn handle_event(&mut self, event: UiEvent, main_loop: &mut impl MainLoop) -> Propagation {
        match event {
            UiEvent::CloseRequested => self.on_delete(main_loop),
            UiEvent::PaintRequested => self.on_expose(),
        }
    }

    /// Handles a close request by stopping the event loop.
    pub fn on_delete(&mut self, main_loop: &mut impl MainLoop) -> Propagation {
        match self.state {
            State::Running => {
                info!("Close requested; stopping event loop");
                main_loop.quit();
                self.state = State::Terminated;
            }
            State::Terminated => trace!("Close requested again after event loop stopped"),
        }
        Propagation::Proceed
    }

    /// Repaints the whole drawing surface as one filled rectangle.
    pub fn on_expose(&mut self) -> Propagation {
        debug_assert!(self.window.is_visible());
        let alloc = self.area.allocation();
        debug!("Painting {}x{} surface", alloc.width, alloc.height);

        let mut ctx = self.area.new_context();
        ctx.fill_rectangle(Rect::covering(alloc));
        ctx.finish();

        Propagation::Stop
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::widget::Allocation;

    #[derive(Debug, Default)]
    struct FakeWindow {
        visible: bool,
        children: usize,
    }
    impl Window for FakeWindow {
        fn add<S: DrawingSurface>(&mut self, _area: &S) {
            self.children += 1;
        }
        fn show(&mut self) {
            self.visible = true;
        }
        fn is_visible(&self) -> bool {
            self.visible
        }
    }

    #[derive(Debug, Default, Clone)]
    struct Log {
        fills: Vec<Rect>,
        finished: usize,
    }

    #[derive(Debug, Default)]
    struct FakeArea {
        visible: bool,
        alloc: Allocation,
        log: Rc<RefCell<Log>>,
    }
    impl DrawingSurface for FakeArea {
        type Context = FakeContext;

        fn show(&mut self) {
            self.visible = true;
        }
        fn is_visible(&self) -> bool {
            self.visible
        }
        fn allocation(&self) -> Allocation {
            self.alloc
        }
        fn new_context(&mut self) -> FakeContext {
            FakeContext(Rc::clone(&self.log))
        }
    }

    struct FakeContext(Rc<RefCell<Log>>);
    impl DrawContext for FakeContext {
        fn fill_rectangle(&mut self, rect: Rect) {
            self.0.borrow_mut().fills.push(rect);
        }
        fn finish(self) {
            self.0.borrow_mut().finished += 1;
        }
    }

    #[derive(Debug, Default)]
    struct CountingLoop {
        quits: usize,
    }
    impl MainLoop for CountingLoop {
        fn quit(&mut self) {
            self.quits += 1;
        }
    }

    fn controller(width: u32, height: u32) -> Controller<FakeWindow, FakeArea> {
        let area = FakeArea {
            alloc: Allocation::new(width, height),
            ..FakeArea::default()
        };
        Controller::new(FakeWindow::default(), area)
    }

    #[test]
    fn test_new_shows_window_and_area() {
        let c = controller(200, 200);
        assert!(c.window.is_visible());
        assert!(c.area.is_visible());
        assert_eq!(c.window.children, 1);
        assert_eq!(c.state(), State::Running);
        assert_eq!(c.exit_code(), None);
    }

    #[test]
    fn test_close_quits_once() {
        let mut c = controller(200, 200);
        let mut main_loop = CountingLoop::default();

        assert_eq!(c.on_delete(&mut main_loop), Propagation::Proceed);
        assert_eq!(main_loop.quits, 1);
        assert_eq!(c.state(), State::Terminated);

        c.on_delete(&mut main_loop);
        c.handle_event(UiEvent::CloseRequested, &mut main_loop);
        assert_eq!(main_loop.quits, 1);
    }

    #[test]
    fn test_paint_fills_whole_allocation() {
        for &(w, h) in &[(200, 200), (1, 1), (1920, 1080), (3, 700), (0, 0)] {
            let mut c = controller(w, h);
            assert_eq!(c.on_expose(), Propagation::Stop);

            let log = c.area.log.borrow().clone();
            assert_eq!(
                log.fills,
                vec![Rect {
                    x: 0,
                    y: 0,
                    width: w,
                    height: h
                }]
            );
            assert_eq!(log.finished, 1);
        }
    }

    #[test]
    fn test_paint_follows_resize() {
        let mut c = controller(200, 200);
        let mut main_loop = CountingLoop::default();
        c.handle_event(UiEvent::PaintRequested, &mut main_loop);
        c.area.alloc = Allocation::new(320, 240);
        assert_eq!(
            c.handle_event(UiEvent::PaintRequested, &mut main_loop),
            Propagation::Stop
        );

        let log = c.area.log.borrow().clone();
        assert_eq!(log.fills.len(), 2);
        assert_eq!(log.fills[1], Rect::covering(Allocation::new(320, 240)));
        assert_eq!(main_loop.quits, 0);
    }

    #[test]
    fn test_close_exits_with_zero() {
        let mut c = controller(200, 200);
        let mut main_loop = CountingLoop::default();
        c.handle_event(UiEvent::PaintRequested, &mut main_loop);
        c.handle_event(UiEvent::CloseRequested, &mut main_loop);
        assert_eq!(c.exit_code(), Some(0));
    }
}
