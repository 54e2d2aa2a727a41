pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod query;
pub mod render;
pub mod terminal;
pub mod text;
pub mod text_input;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{find_element, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_focusable};
pub use layout::{LayoutResult, Rect};
pub use query::{find_by_placeholder, find_text, query_all_text};
pub use terminal::Terminal;
pub use text_input::{TextInputData, TextInputState};
pub use types::*;
