//! Display model of a dropdown and a plain-text renderer for it.

use std::fmt::Write as _;

use crate::render::{Rendered, SpanStyle};

/// Contents of the open panel below the search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    /// A remote search is outstanding; the list is hidden
    Loading(String),
    /// The last remote search failed
    Failed(String),
    /// Nothing matched
    Empty(String),
    /// One entry per result
    Items(Vec<ItemView>),
}

/// A single result entry, keyed by the option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub key: String,
    pub content: Rendered,
    /// Whether this entry is the current selection
    pub selected: bool,
}

/// The open panel: search input plus body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub search_text: String,
    pub search_placeholder: String,
    pub body: PanelBody,
}

/// Everything needed to draw one dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownView {
    /// Styling hook supplied by the host, passed through untouched
    pub class_name: Option<String>,
    /// Trigger content: the rendered selection or the placeholder
    pub trigger: Rendered,
    /// Whether the trigger shows the placeholder
    pub is_placeholder: bool,
    /// Present only while open
    pub panel: Option<PanelView>,
}

impl DropdownView {
    pub fn is_open(&self) -> bool {
        self.panel.is_some()
    }

    /// Rendered items, empty when closed or showing a status line.
    pub fn items(&self) -> &[ItemView] {
        match &self.panel {
            Some(PanelView {
                body: PanelBody::Items(items),
                ..
            }) => items,
            _ => &[],
        }
    }

    /// Status line text, if the panel is showing one.
    pub fn status(&self) -> Option<&str> {
        match &self.panel.as_ref()?.body {
            PanelBody::Loading(text) | PanelBody::Failed(text) | PanelBody::Empty(text) => Some(text),
            PanelBody::Items(_) => None,
        }
    }
}

/// Draws a [`DropdownView`] as lines of text for a terminal.
///
/// Bold spans are wrapped in `**`. Placeholders are shown in
/// parentheses.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    indent: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indentation of panel lines under the trigger
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn draw(&self, view: &DropdownView) -> String {
        let mut out = String::new();
        let arrow = if view.is_open() { "^" } else { "v" };
        let trigger = Self::spans(&view.trigger);
        if view.is_placeholder {
            let _ = writeln!(out, "[ ({}) ] {}", trigger, arrow);
        } else {
            let _ = writeln!(out, "[ {} ] {}", trigger, arrow);
        }

        let Some(panel) = &view.panel else {
            return out;
        };

        let pad = " ".repeat(self.indent);
        if panel.search_text.is_empty() {
            let _ = writeln!(out, "{}> ({})", pad, panel.search_placeholder);
        } else {
            let _ = writeln!(out, "{}> {}", pad, panel.search_text);
        }

        match &panel.body {
            PanelBody::Loading(text) | PanelBody::Failed(text) | PanelBody::Empty(text) => {
                let _ = writeln!(out, "{}  {}", pad, text);
            }
            PanelBody::Items(items) => {
                for item in items {
                    let marker = if item.selected { '*' } else { '-' };
                    let _ = writeln!(out, "{}{} {} ({})", pad, marker, Self::spans(&item.content), item.key);
                }
            }
        }
        out
    }

    fn spans(rendered: &Rendered) -> String {
        rendered
            .spans
            .iter()
            .map(|span| match span.style {
                SpanStyle::Plain => span.text.clone(),
                SpanStyle::Bold => format!("**{}**", span.text),
            })
            .collect()
    }
}
