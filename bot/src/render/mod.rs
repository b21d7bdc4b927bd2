mod canvas;
mod cursor;
mod palette;

pub use canvas::{Canvas, CanvasOptions};
pub use cursor::CursorGuard;
pub use palette::Paint;
