//! Toolkit seams used by the controller.
//!
//! The controller never talks to glium directly. It only sees a top-level
//! [`Window`], a [`DrawingSurface`] embedded in it, a [`DrawContext`] for
//! painting, and a [`MainLoop`] it can stop.

/// Allocated size of a widget, in physical pixels.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Allocation {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}
impl Allocation {
    /// Returns an allocation of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
impl From<(u32, u32)> for Allocation {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// Rectangle in widget coordinates, with the origin at the top-left corner.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}
impl Rect {
    /// Returns the rectangle from `(0, 0)` to the far corner of `alloc`.
    pub fn covering(alloc: Allocation) -> Self {
        Self {
            x: 0,
            y: 0,
            width: alloc.width,
            height: alloc.height,
        }
    }

    /// Returns `true` if the rectangle covers no pixels.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// What a handler did with an event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Propagation {
    /// The event was fully handled; skip default handling.
    Stop,
    /// Let the toolkit continue with its default handling.
    Proceed,
}

/// Top-level window.
pub trait Window {
    /// Embeds a drawing surface as the window's only child.
    fn add<S: DrawingSurface>(&mut self, area: &S);
    /// Makes the window visible on screen.
    fn show(&mut self);
    /// Returns `true` if the window is visible.
    fn is_visible(&self) -> bool;
}

/// Child widget that can be painted on.
pub trait DrawingSurface {
    /// Drawing context handed out for one paint.
    type Context: DrawContext;

    /// Makes the surface visible inside its window.
    fn show(&mut self);
    /// Returns `true` if the surface is visible.
    fn is_visible(&self) -> bool;
    /// Returns the size currently allocated to the surface.
    fn allocation(&self) -> Allocation;
    /// Returns a fresh drawing context for the surface.
    fn new_context(&mut self) -> Self::Context;
}

/// Handle for issuing drawing primitives onto a surface.
pub trait DrawContext {
    /// Fills `rect` with the context's foreground color.
    fn fill_rectangle(&mut self, rect: Rect);
    /// Presents everything drawn with this context.
    fn finish(self);
}

/// Process-wide event loop, seen from inside a handler.
pub trait MainLoop {
    /// Asks the event loop to stop after the current event.
    fn quit(&mut self);
}

#[cfg(test)]
#[test]
fn test_rect_covering() {
    assert_eq!(
        Rect::covering(Allocation::new(640, 480)),
        Rect {
            x: 0,
            y: 0,
            width: 640,
            height: 480
        }
    );
    assert!(Rect::covering(Allocation::new(0, 0)).is_empty());
    assert!(Rect::covering(Allocation::new(0, 10)).is_empty());
    assert!(!Rect::covering(Allocation::from((1, 1))).is_empty());
}
