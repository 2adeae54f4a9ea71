use std::ffi::NulError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use geometry::obj::ObjError;

/// Everything that can stop a demo from starting.
#[derive(Debug, Error)]
pub enum GlcError {
    #[error("failed creating window: {0}")]
    Window(#[from] glutin::CreationError),

    #[error("failed making the OpenGL context current: {0}")]
    Context(#[from] glutin::ContextError),

    #[error("failed loading OpenGL functions and extensions")]
    Loader,

    #[error("OpenGL gave back a null handle creating a {0}")]
    NullHandle(&'static str),

    #[error("{kind} shader failed to compile: {log}")]
    ShaderCompile { kind: &'static str, log: String },

    #[error("program failed to link: {0}")]
    ProgramLink(String),

    #[error("program failed validation: {0}")]
    ProgramValidate(String),

    #[error("shader program has no active attribute `{0}`")]
    MissingAttribute(&'static str),

    #[error("source contains an interior nul byte")]
    Nul(#[from] NulError),

    #[error("error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Obj(#[from] ObjError),

    #[error("failed saving image {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("framebuffer of {width}x{height} can't be captured")]
    EmptyFramebuffer { width: i32, height: i32 },

    #[error(transparent)]
    Cli(#[from] clap::Error),
}
