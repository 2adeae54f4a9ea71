//! The example programs, and the window and event loop they all share.
//!
//! A demo only builds its GL objects and draws a frame. Everything else (creating the window and
//! context, the frame clock, F5 screenshots, tearing down on close) happens in [`run`].

pub mod cube;
pub mod normals;
pub mod screen_quad;
pub mod screenshot;

use std::path::PathBuf;
use std::time::Instant;

use glutin::dpi::LogicalSize;
use glutin::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::window::WindowBuilder;
use glutin::{Api, ContextBuilder, GlProfile, GlRequest};
use tracing::{debug, error, info};

use crate::config::{DemoConfig, DemoKind};
use crate::error::GlcError;
use crate::graphics::capture::capture_screenshot;
use crate::graphics::window::{best_monitor, center_window};

/// Vertical field of view of the 3D demos, in degrees.
pub const FOV: f32 = 70.0;
pub const Z_NEAR: f32 = 0.01;
pub const Z_FAR: f32 = 10.0;

/// What a demo gets to know about the frame it's drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Framebuffer size in pixels
    pub width: i32,
    pub height: i32,
    /// Seconds since the demo started
    pub time: f32,
}

impl Frame {
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

pub trait Demo {
    /// Draws one frame into the back buffer.
    fn draw(&mut self, frame: &Frame);
}

/// Turns key events into single presses: holding a key down only counts once.
#[derive(Debug, Default)]
pub struct KeyLatch {
    held: bool,
}

impl KeyLatch {
    /// Returns true only for the event that takes the key from up to down.
    pub fn update(&mut self, pressed: bool) -> bool {
        let fired = pressed && !self.held;
        self.held = pressed;
        fired
    }
}

fn build(kind: DemoKind, config: &DemoConfig) -> Result<Box<dyn Demo>, GlcError> {
    Ok(match kind {
        DemoKind::Cube => Box::new(cube::CubeDemo::new()?),
        DemoKind::ScreenQuad => Box::new(screen_quad::ScreenQuadDemo::new()?),
        DemoKind::Screenshot => Box::new(screenshot::ScreenshotDemo::new()),
        DemoKind::Normals => Box::new(normals::NormalsDemo::new(config)?),
    })
}

/// Opens the window, sets up the demo and runs it until the window is closed. Only returns if
/// something goes wrong during setup; closing the window ends the process.
pub fn run(kind: DemoKind, config: DemoConfig) -> Result<(), GlcError> {
    let event_loop = EventLoop::new();

    let window = WindowBuilder::new()
        .with_title(kind.title())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_visible(false);

    let context = ContextBuilder::new()
        .with_gl(GlRequest::Specific(Api::OpenGl, (3, 3)))
        .with_gl_profile(GlProfile::Core)
        .build_windowed(window, &event_loop)?;

    let context = unsafe { context.make_current() }.map_err(|(_, e)| e)?;

    if kind.centered() {
        center_window(context.window(), best_monitor(context.window()));
    }
    context.window().set_visible(true);

    gl::load_with(|s| context.get_proc_address(s) as *const _);
    if !gl::Viewport::is_loaded() {
        return Err(GlcError::Loader);
    }

    let mut demo = Some(build(kind, &config)?);
    info!("running {}", kind.title());

    let screenshot_dir: PathBuf = config.screenshot_dir;
    let mut f5 = KeyLatch::default();
    let mut capture_pending = false;
    let start = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::LoopDestroyed => {
                // Drop the GL objects while the context is still alive
                demo.take();
                debug!("demo torn down");
            }

            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => context.resize(size),
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::KeyboardInput {
                    input: KeyboardInput {
                        state,
                        virtual_keycode: Some(VirtualKeyCode::F5),
                        ..
                    },
                    ..
                } => {
                    if f5.update(state == ElementState::Pressed) {
                        capture_pending = true;
                    }
                }
                _ => {}
            },

            Event::MainEventsCleared => context.window().request_redraw(),

            Event::RedrawRequested(_) => {
                let demo = match demo.as_mut() {
                    Some(d) => d,
                    None => return,
                };

                let size = context.window().inner_size();
                let frame = Frame {
                    width: size.width as i32,
                    height: size.height as i32,
                    time: start.elapsed().as_secs_f32(),
                };

                // Minimized
                if frame.width == 0 || frame.height == 0 {
                    return;
                }

                demo.draw(&frame);

                if capture_pending {
                    capture_pending = false;
                    capture_screenshot(&screenshot_dir);
                }

                if let Err(e) = context.swap_buffers() {
                    error!("failed swapping buffers: {}", e);
                    *control_flow = ControlFlow::Exit;
                }
            }

            _ => {}
        }
    })
}
