//! Table form renderer
//!
//! Turns a declarative list of field descriptors into an HTML `<table>` of
//! label/control rows and attaches it to a container element in an
//! [`htmldom::Document`].

pub mod attach;
pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod render;
pub mod validate;

pub use attach::{Attachment, attach, render_and_attach};
pub use config::RenderConfig;
pub use model::{
    ChoiceField, ChoiceOption, FieldDescriptor, InputField, InputType, SelectField, SelectOption,
    TextAreaField,
};
pub use render::render_table;
