use serde::Serialize;

/// Inline style of a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanStyle {
    Plain,
    Bold,
    Italic,
    Code,
}

/// A contiguous run of text sharing one style, delimiters removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSpan {
    pub style: SpanStyle,
    pub text: String,
}

impl TextSpan {
    pub fn new(style: SpanStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(SpanStyle::Plain, text)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(SpanStyle::Bold, text)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(SpanStyle::Italic, text)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(SpanStyle::Code, text)
    }
}

/// How a content line is laid out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeKind {
    Bullet,
    /// Numbered item; the ordinal is the literal digits from the source.
    Numbered { ordinal: String },
    Paragraph,
}

/// The classified, renderable form of one content line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderNode {
    #[serde(flatten)]
    pub kind: NodeKind,
    pub spans: Vec<TextSpan>,
}

impl RenderNode {
    pub fn ordinal(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Numbered { ordinal } => Some(ordinal),
            _ => None,
        }
    }

    /// Concatenated span text with all styling dropped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}
