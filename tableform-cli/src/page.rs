//! The host page the form is attached to.

use htmldom::{Document, Element};
use tableform_lib::config::DEFAULT_CONTAINER_ID;

/// A page with a heading and an empty `<form id="form">`.
pub fn inquiry_page(title: &str, lang: &str) -> Document {
    Document::new()
        .with_lang(lang)
        .with_title(title)
        .with_body(
            Element::body().child(
                Element::new("main").children([
                    Element::text("h1", title),
                    Element::form()
                        .id(DEFAULT_CONTAINER_ID)
                        .attr("method", "post"),
                ]),
            ),
        )
}
