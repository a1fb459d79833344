pub mod buffer;
pub mod cursor;
pub mod span;

pub use buffer::TextBuffer;
pub use cursor::Cursor;
pub use span::Span;
