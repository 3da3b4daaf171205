//! Renderable content and the option render capability.

use std::fmt;

use crate::option::SelectOption;

/// Emphasis applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanStyle {
    #[default]
    Plain,
    Bold,
}

/// A styled run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Plain,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Bold,
        }
    }
}

/// Display content produced for an option: a line of styled spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rendered {
    pub spans: Vec<Span>,
}

impl Rendered {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Unstyled text
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![Span::plain(text)])
    }

    /// Concatenated text with styling dropped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl From<&str> for Rendered {
    fn from(text: &str) -> Self {
        Rendered::text(text)
    }
}

impl From<String> for Rendered {
    fn from(text: String) -> Self {
        Rendered::text(text)
    }
}

/// How options are displayed. Chosen once per widget.
#[derive(Default)]
pub enum OptionRenderer {
    /// The option's label as plain text
    #[default]
    Label,
    /// A host-supplied renderer, used for the trigger and every list item
    Custom(Box<dyn Fn(&SelectOption) -> Rendered>),
}

impl OptionRenderer {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&SelectOption) -> Rendered + 'static,
    {
        OptionRenderer::Custom(Box::new(f))
    }

    pub fn render(&self, option: &SelectOption) -> Rendered {
        match self {
            OptionRenderer::Label => Rendered::text(option.label.as_str()),
            OptionRenderer::Custom(f) => f(option),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, OptionRenderer::Custom(_))
    }
}

impl fmt::Debug for OptionRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionRenderer::Label => f.write_str("Label"),
            OptionRenderer::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
