pub mod background;
pub mod camera;
pub mod surface;
