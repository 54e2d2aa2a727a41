mod color;
mod edges;
mod enums;
mod style;
mod theme;

pub use color::{Color, Rgb};
pub use edges::Edges;
pub use enums::{Border, Direction, Size, TextStyle};
pub use style::Style;
pub use theme::Theme;
