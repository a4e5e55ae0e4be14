mod layout;
mod text_field;

pub use layout::{Layout, ViewId};
pub use text_field::TextField;
