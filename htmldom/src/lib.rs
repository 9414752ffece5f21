pub mod document;
pub mod element;
pub mod render;

pub use document::Document;
pub use element::{find_element, find_element_mut, Content, Element};
pub use render::{escape_html, render_document, render_element};
