//! Four solid quadrants, drawn with scissored clears. Handy for checking that screenshots come
//! out the right way up: red belongs in the top left.

use gl;

use super::{Demo, Frame};

/// A scissor box in window coordinates, origin bottom-left like `glScissor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScissorBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Top-left red, top-right green, bottom-left blue, bottom-right white.
pub fn quadrants(width: i32, height: i32) -> [(ScissorBox, [f32; 4]); 4] {
    let (w, h) = (width / 2, height / 2);

    [
        (ScissorBox { x: 0, y: h, width: w, height: h }, RED),
        (ScissorBox { x: w, y: h, width: w, height: h }, GREEN),
        (ScissorBox { x: 0, y: 0, width: w, height: h }, BLUE),
        (ScissorBox { x: w, y: 0, width: w, height: h }, WHITE),
    ]
}

pub struct ScreenshotDemo;

impl ScreenshotDemo {
    pub fn new() -> Self {
        unsafe {
            gl::Enable(gl::SCISSOR_TEST);
        }

        ScreenshotDemo
    }
}

impl Demo for ScreenshotDemo {
    fn draw(&mut self, frame: &Frame) {
        unsafe {
            gl::Viewport(0, 0, frame.width, frame.height);

            for (scissor, [r, g, b, a]) in quadrants(frame.width, frame.height).iter() {
                gl::Scissor(scissor.x, scissor.y, scissor.width, scissor.height);
                gl::ClearColor(*r, *g, *b, *a);
                gl::Clear(gl::COLOR_BUFFER_BIT);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn quadrants_tile_the_window() {
        let boxes = quadrants(640, 480);

        let area: i32 = boxes.iter().map(|(b, _)| b.width * b.height).sum();
        assert_eq!(area, 640 * 480);
    }

    #[test]
    fn red_is_top_left() {
        // GL counts y from the bottom, so the top half starts at half the height
        let (top_left, colour) = quadrants(640, 480)[0];
        assert_eq!(top_left, ScissorBox { x: 0, y: 240, width: 320, height: 240 });
        assert_eq!(colour, RED);

        let (bottom_right, colour) = quadrants(640, 480)[3];
        assert_eq!(bottom_right, ScissorBox { x: 320, y: 0, width: 320, height: 240 });
        assert_eq!(colour, WHITE);
    }
}
