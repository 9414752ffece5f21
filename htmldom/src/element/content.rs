#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    /// Plain text, escaped on render.
    Text(String),
    Children(Vec<super::Element>),
    /// Pre-rendered markup written verbatim, as set through `innerHTML`.
    Html(String),
}

impl Content {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(s) | Self::Html(s) => s.is_empty(),
            Self::Children(c) => c.is_empty(),
        }
    }
}
