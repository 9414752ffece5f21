use super::Content;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: Option<String>,
    pub tag: String,

    // Attributes other than `id`, in insertion order
    pub attrs: Vec<(String, String)>,

    // Content
    pub content: Content,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            id: None,
            tag: tag.into(),
            attrs: Vec::new(),
            content: Content::None,
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn form() -> Self {
        Self::new("form")
    }

    pub fn body() -> Self {
        Self::new("body")
    }

    /// A text-only element such as `<h1>` or `<p>`.
    pub fn text(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::new(tag)
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set an attribute, replacing any earlier value for the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    pub fn html(mut self, markup: impl Into<String>) -> Self {
        self.content = Content::Html(markup.into());
        self
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Replace everything inside this element with pre-rendered markup.
    pub fn set_inner_html(&mut self, markup: impl Into<String>) {
        self.content = Content::Html(markup.into());
    }
}
