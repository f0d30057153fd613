//! Tiny templating layer. All escaping happens here.
//!
//! `Markup` holds HTML that is already safe to insert. The only ways to get
//! one are escaping text, building an `Element`, or joining other `Markup`.

use std::fmt;

/// Escape `& < > " '` as named/numeric entities. Call exactly once per
/// interpolation site; the output is not meant to be escaped again.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Escaped text node.
    pub fn text<S: AsRef<str>>(text: S) -> Self {
        Self(escape_html(text.as_ref()))
    }

    /// `None` renders as nothing.
    pub fn opt_text(text: Option<&str>) -> Self {
        text.map(Self::text).unwrap_or_default()
    }

    /// Fixed markup written in this crate, never content data.
    pub(crate) fn trusted(html: &'static str) -> Self {
        Self(html.to_string())
    }

    pub fn concat<I: IntoIterator<Item = Markup>>(parts: I) -> Self {
        let mut out = String::new();
        for part in parts {
            out.push_str(&part.0);
        }
        Self(out)
    }

    pub fn push(&mut self, other: Markup) {
        self.0.push_str(&other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
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

/// Builder for one HTML element.
#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Markup>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr<S: Into<String>>(mut self, name: &'static str, value: S) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn opt_attr(self, name: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn class<S: Into<String>>(self, class: S) -> Self {
        self.attr("class", class)
    }

    pub fn id(self, id: &'static str) -> Self {
        self.attr("id", id)
    }

    /// Link that opens in a new browsing context without an opener reference.
    pub fn external(self, href: &str) -> Self {
        self.attr("href", href)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
    }

    pub fn text<S: AsRef<str>>(mut self, text: S) -> Self {
        self.children.push(Markup::text(text));
        self
    }

    pub fn child(mut self, child: Markup) -> Self {
        self.children.push(child);
        self
    }

    pub fn children<I: IntoIterator<Item = Markup>>(mut self, children: I) -> Self {
        self.children.extend(children);
        self
    }

    pub fn render(self) -> Markup {
        let mut out = String::new();
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');
        for child in self.children {
            out.push_str(&child.0);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
        Markup(out)
    }
}

impl From<Element> for Markup {
    fn from(element: Element) -> Self {
        element.render()
    }
}

/// `<span class="chip">…</span>`
pub fn chip(text: &str) -> Markup {
    Element::new("span").class("chip").text(text).render()
}

/// Decorative icon span; `name` becomes an extra class.
pub fn icon(name: &str) -> Markup {
    let class = if name.is_empty() {
        "icon".to_string()
    } else {
        format!("icon {}", name)
    };
    Element::new("span")
        .class(class)
        .attr("aria-hidden", "true")
        .render()
}

/// A `<div class="stack">` of chips, or nothing for an empty list.
pub fn chip_stack(items: &[String], class: &str) -> Markup {
    if items.is_empty() {
        return Markup::empty();
    }
    Element::new("div")
        .class(class)
        .children(items.iter().map(|t| chip(t)))
        .render()
}

/// `<ul>` of escaped items, or nothing for an empty list.
pub fn bullet_list(items: &[String]) -> Markup {
    if items.is_empty() {
        return Markup::empty();
    }
    Element::new("ul")
        .children(items.iter().map(|i| Element::new("li").text(i).render()))
        .render()
}
