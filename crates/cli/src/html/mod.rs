// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escaping HTML builder.
//!
//! [`Markup`] is the only type the renderer emits. It can be created from
//! `'static` literals (trusted template text) or from arbitrary strings,
//! which are always escaped. Item titles, bodies, repositories and URLs
//! therefore cannot reach the document unescaped.

mod render;

pub use render::{render_report, RenderOptions, STATUS_COUNTS_ID};

use serde::Serialize;
use std::fmt;

use crate::error::Result;

/// A fragment of HTML that is safe to embed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Markup(String::new())
    }

    /// Trusted template text. Only compile-time literals qualify.
    pub fn raw(text: &'static str) -> Self {
        Markup(text.to_string())
    }

    /// Untrusted text, escaped for element content and quoted attributes.
    pub fn text(text: &str) -> Self {
        Markup(escape(text))
    }

    pub fn push(&mut self, other: impl Into<Markup>) {
        self.0.push_str(&other.into().0);
    }

    pub fn push_raw(&mut self, text: &'static str) {
        self.0.push_str(text);
    }

    pub fn push_text(&mut self, text: &str) {
        self.0.push_str(&escape(text));
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape `& < > " '` so text is inert in content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Returns the URL if it may be used as a link target.
///
/// Only absolute `http` and `https` URLs qualify; anything else
/// (`javascript:`, `data:`, relative paths) is rejected.
pub fn safe_url(url: &str) -> Option<&str> {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        Some(trimmed)
    } else {
        None
    }
}

/// Serialize `value` for a `<script type="application/json">` block.
///
/// `<`, `>` and `&` are written as JSON unicode escapes so the payload can
/// never close the script element; the result is still valid JSON.
pub fn script_json(value: &impl Serialize) -> Result<Markup> {
    let json = serde_json::to_string(value)?;
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    Ok(Markup(out))
}

/// Start building an element.
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Markup::new(),
        children: Markup::new(),
        void: false,
    }
}

/// An HTML element under construction.
///
/// Tag and attribute names are static; attribute values and text children
/// are escaped on the way in.
#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Markup,
    children: Markup,
    void: bool,
}

impl Element {
    /// Add a static class list.
    pub fn class(self, class: &'static str) -> Self {
        self.attr("class", class)
    }

    /// Add an attribute with an escaped value.
    pub fn attr(mut self, name: &'static str, value: &str) -> Self {
        self.attrs.push_raw(" ");
        self.attrs.push_raw(name);
        self.attrs.push_raw("=\"");
        self.attrs.push_text(value);
        self.attrs.push_raw("\"");
        self
    }

    /// Add a boolean attribute such as `open`.
    pub fn flag(mut self, name: &'static str) -> Self {
        self.attrs.push_raw(" ");
        self.attrs.push_raw(name);
        self
    }

    /// Add a boolean attribute when `on` is true.
    pub fn flag_if(self, name: &'static str, on: bool) -> Self {
        if on {
            self.flag(name)
        } else {
            self
        }
    }

    /// Append escaped text.
    pub fn text(mut self, text: &str) -> Self {
        self.children.push_text(text);
        self
    }

    /// Append a child fragment.
    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child fragments.
    pub fn children<I, M>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Markup>,
    {
        for child in children {
            self.children.push(child);
        }
        self
    }

    /// Mark as a void element (`<meta>`, `<br>`): no children, no end tag.
    pub fn void(mut self) -> Self {
        self.void = true;
        self
    }

    pub fn build(self) -> Markup {
        let mut out = Markup::new();
        out.push_raw("<");
        out.push_raw(self.tag);
        out.push(self.attrs);
        out.push_raw(">");
        if !self.void {
            out.push(self.children);
            out.push_raw("</");
            out.push_raw(self.tag);
            out.push_raw(">");
        }
        out
    }
}

impl From<Element> for Markup {
    fn from(element: Element) -> Self {
        element.build()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
