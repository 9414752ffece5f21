//! Attaching a rendered form to a document.

use htmldom::Document;

use crate::config::RenderConfig;
use crate::model::FieldDescriptor;
use crate::render::render_table;

/// What happened when a form was attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment {
    /// The container's content was replaced.
    Attached {
        /// Number of rows written.
        rows: usize,
        /// Length of the written markup in bytes.
        bytes: usize,
    },
    /// No element with the container id exists. The document is untouched.
    ContainerMissing,
}

impl Attachment {
    pub fn is_attached(&self) -> bool {
        matches!(self, Self::Attached { .. })
    }
}

/// Replaces the content of the element with id `container_id` by `markup`.
///
/// Returns `false` and leaves the document unchanged if there is no such
/// element.
pub fn attach(doc: &mut Document, container_id: &str, markup: impl Into<String>) -> bool {
    match doc.get_element_by_id_mut(container_id) {
        Some(container) => {
            container.set_inner_html(markup);
            true
        }
        None => false,
    }
}

/// Renders `fields` and writes the table into the configured container.
///
/// A missing container is not an error.
pub fn render_and_attach(
    doc: &mut Document,
    fields: &[FieldDescriptor],
    config: &RenderConfig,
) -> Attachment {
    let Some(container) = doc.get_element_by_id_mut(&config.container_id) else {
        log::warn!(
            "[attach] container #{} not found, form not rendered",
            config.container_id
        );
        return Attachment::ContainerMissing;
    };

    let markup = render_table(fields, config);
    let bytes = markup.len();
    container.set_inner_html(markup);

    log::debug!(
        "[attach] wrote {} rows ({} bytes) into #{}",
        fields.len(),
        bytes,
        config.container_id
    );
    Attachment::Attached {
        rows: fields.len(),
        bytes,
    }
}
