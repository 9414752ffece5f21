//! A standalone HTML document.

use crate::element::{find_element, find_element_mut, Element};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub lang: Option<String>,
    pub title: Option<String>,
    pub body: Element,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            lang: None,
            title: None,
            body: Element::body(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_body(mut self, body: Element) -> Self {
        self.body = body;
        self
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        find_element(&self.body, id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.body, id)
    }
}
