mod item_source;
mod render_surface;

pub use item_source::{ItemSource, IterSource};
pub use render_surface::RenderSurface;
