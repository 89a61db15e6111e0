mod line;

pub use line::{Document, Line, Rgb, SpanStyle, StyledSpan};
