pub mod capture;
pub mod opengl;
pub mod utils;
pub mod window;
