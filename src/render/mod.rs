use cgmath::{Matrix4, Vector3};
use glium::index::{NoIndices, PrimitiveType};
use glium::{Frame, Surface, VertexBuffer};
use lazy_static::lazy_static;
use log::trace;
use send_wrapper::SendWrapper;

mod shaders;

use crate::widget::{DrawContext, Rect};

/// Foreground color of a fresh drawing context (opaque black).
pub const DEFAULT_FOREGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

#[derive(Debug, Copy, Clone)]
struct Vertex2D {
    pos: [f32; 2],
}
glium::implement_vertex!(Vertex2D, pos);

lazy_static! {
    static ref SQUARE_VBO: SendWrapper<VertexBuffer<Vertex2D>> = SendWrapper::new(
        VertexBuffer::immutable(
            &**crate::gui::DISPLAY,
            &[
                Vertex2D { pos: [0.0, 0.0] },
                Vertex2D { pos: [1.0, 0.0] },
                Vertex2D { pos: [0.0, 1.0] },
                Vertex2D { pos: [1.0, 1.0] },
            ]
        )
        .expect("Failed to create vertex buffer")
    );
}

/// Returns the matrix that maps the unit square onto `rect` in normalized
/// device coordinates, for a render target of the given dimensions.
///
/// `rect` has its origin at the top-left corner and Y pointing down; OpenGL
/// has Y pointing up, so the Y axis is flipped.
pub fn rect_matrix(rect: Rect, (target_w, target_h): (u32, u32)) -> Matrix4<f32> {
    // Avoid dividing by zero for a collapsed window.
    let target_w = std::cmp::max(1, target_w) as f32;
    let target_h = std::cmp::max(1, target_h) as f32;

    let pixels_to_ndc = Matrix4::from_translation(Vector3::new(-1.0, 1.0, 0.0))
        * Matrix4::from_nonuniform_scale(2.0 / target_w, -2.0 / target_h, 1.0);
    let unit_to_pixels = Matrix4::from_translation(Vector3::new(rect.x as f32, rect.y as f32, 0.0))
        * Matrix4::from_nonuniform_scale(rect.width as f32, rect.height as f32, 1.0);

    pixels_to_ndc * unit_to_pixels
}

/// Drawing context over one frame of the main window.
pub struct FrameContext {
    frame: Frame,
    foreground: [f32; 4],
}
impl FrameContext {
    /// Starts drawing a new frame.
    pub fn new(display: &glium::Display) -> Self {
        Self {
            frame: display.draw(),
            foreground: DEFAULT_FOREGROUND,
        }
    }
}
impl DrawContext for FrameContext {
    fn fill_rectangle(&mut self, rect: Rect) {
        if rect.is_empty() {
            trace!("Skipping fill of empty rectangle {:?}", rect);
            return;
        }

        let transform: [[f32; 4]; 4] = rect_matrix(rect, self.frame.get_dimensions()).into();

        self.frame
            .draw(
                &**SQUARE_VBO,
                &NoIndices(PrimitiveType::TriangleStrip),
                &shaders::FILL_PROGRAM,
                &glium::uniform! {
                    transform: transform,
                    color: self.foreground,
                },
                &glium::DrawParameters::default(),
            )
            .expect("Failed to fill rectangle");
    }

    fn finish(self) {
        self.frame.finish().expect("Failed to swap buffers");
    }
}
