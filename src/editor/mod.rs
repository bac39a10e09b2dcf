pub mod brush;
pub mod history;
pub mod map_editor;

pub use map_editor::{MapEditor, StrokeButton};
