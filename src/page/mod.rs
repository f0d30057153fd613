//! Headless host page.
//!
//! `Page` wraps the host HTML and knows just enough structure to find an
//! element by `id`, swap its inner HTML and rewrite attributes on its opening
//! tag. Mount points must be non-void elements; a missing mount is reported
//! as `false`, never as an error.

pub mod clipboard;
pub mod footer;
pub mod reveal;
pub mod theme;

use crate::render::html::{escape_html, Markup};
use crate::utils::error::Result;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static ROOT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<html\b[^>]*>").expect("root tag pattern"));

/// Comments and script/style bodies; markup-looking text inside them is not part of the page.
static INERT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("inert span pattern")
});

fn inert_spans(html: &str) -> Vec<Range<usize>> {
    INERT.find_iter(html).map(|m| m.range()).collect()
}

fn is_inert(spans: &[Range<usize>], pos: usize) -> bool {
    spans.iter().any(|span| span.contains(&pos))
}

/// Byte ranges of one located element.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Located {
    open: Range<usize>,
    inner: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    html: String,
}

impl Page {
    pub fn new<S: Into<String>>(html: S) -> Self {
        Self { html: html.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    fn locate(&self, id: &str) -> Result<Option<Located>> {
        let id = regex::escape(id);
        let open_re = Regex::new(&format!(
            r#"(?is)<([a-z][a-z0-9-]*)\b[^>]*?\sid\s*=\s*(?:"{id}"|'{id}')[^>]*>"#
        ))?;
        let inert = inert_spans(&self.html);
        let found = open_re
            .captures_iter(&self.html)
            .find(|caps| caps.get(0).is_some_and(|m| !is_inert(&inert, m.start())));
        let Some(caps) = found else {
            return Ok(None);
        };
        let (Some(open), Some(tag)) = (caps.get(0), caps.get(1)) else {
            return Ok(None);
        };
        if open.as_str().ends_with("/>") {
            tracing::warn!("Mount '{}' is a self-closing element, skipping", id);
            return Ok(None);
        }

        // 同名標籤可能巢狀，計算深度找出對應的結束標籤
        let tag_re = Regex::new(&format!(r"(?is)<(/?){}\b[^>]*>", regex::escape(tag.as_str())))?;
        let mut depth = 1usize;
        for m in tag_re.captures_iter(&self.html[open.end()..]) {
            let (Some(whole), Some(slash)) = (m.get(0), m.get(1)) else {
                continue;
            };
            if is_inert(&inert, open.end() + whole.start()) {
                continue;
            }
            if !slash.as_str().is_empty() {
                depth -= 1;
                if depth == 0 {
                    let close_start = open.end() + whole.start();
                    return Ok(Some(Located {
                        open: open.range(),
                        inner: open.end()..close_start,
                    }));
                }
            } else if !whole.as_str().ends_with("/>") {
                depth += 1;
            }
        }

        tracing::warn!("Mount '{}' has no closing tag, skipping", id);
        Ok(None)
    }

    pub fn has_mount(&self, id: &str) -> Result<bool> {
        Ok(self.locate(id)?.is_some())
    }

    pub fn inner_html(&self, id: &str) -> Result<Option<&str>> {
        Ok(self.locate(id)?.map(|l| &self.html[l.inner]))
    }

    /// Replace the element's children wholesale. `false` when the mount is absent.
    pub fn replace_inner(&mut self, id: &str, markup: &Markup) -> Result<bool> {
        match self.locate(id)? {
            Some(located) => {
                self.html.replace_range(located.inner, markup.as_str());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn set_text(&mut self, id: &str, text: &str) -> Result<bool> {
        self.replace_inner(id, &Markup::text(text))
    }

    /// Set (`Some`) or remove (`None`) an attribute on the element with `id`.
    pub fn set_attr(&mut self, id: &str, name: &str, value: Option<&str>) -> Result<bool> {
        let Some(located) = self.locate(id)? else {
            return Ok(false);
        };
        let rewritten = rewrite_attr(&self.html[located.open.clone()], name, value)?;
        self.html.replace_range(located.open, &rewritten);
        Ok(true)
    }

    pub fn attr(&self, id: &str, name: &str) -> Result<Option<String>> {
        let Some(located) = self.locate(id)? else {
            return Ok(None);
        };
        read_attr(&self.html[located.open], name)
    }

    /// Same as [`Page::set_attr`] for the document's `<html>` element.
    pub fn set_root_attr(&mut self, name: &str, value: Option<&str>) -> Result<bool> {
        let Some(open) = self.root_tag() else {
            return Ok(false);
        };
        let rewritten = rewrite_attr(&self.html[open.clone()], name, value)?;
        self.html.replace_range(open, &rewritten);
        Ok(true)
    }

    pub fn root_attr(&self, name: &str) -> Result<Option<String>> {
        match self.root_tag() {
            Some(open) => read_attr(&self.html[open], name),
            None => Ok(None),
        }
    }

    fn root_tag(&self) -> Option<Range<usize>> {
        let inert = inert_spans(&self.html);
        ROOT_TAG
            .find_iter(&self.html)
            .find(|m| !is_inert(&inert, m.start()))
            .map(|m| m.range())
    }

    /// Add class `added` to every element whose class list contains `marker`.
    /// Returns how many elements changed.
    pub fn add_class_where(&mut self, marker: &str, added: &str) -> Result<usize> {
        static ANY_OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"(?is)<[a-z][a-z0-9-]*\b[^>]*>").expect("open tag pattern")
        });
        static CLASS_ATTR: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r#"(?is)(\sclass\s*=\s*)"([^"]*)""#).expect("class attribute pattern")
        });

        let inert = inert_spans(&self.html);
        let mut changed = 0usize;
        let updated = ANY_OPEN_TAG.replace_all(&self.html, |caps: &regex::Captures| {
            let tag = &caps[0];
            if caps.get(0).is_some_and(|m| is_inert(&inert, m.start())) {
                return tag.to_string();
            }
            let Some(class) = CLASS_ATTR.captures(tag) else {
                return tag.to_string();
            };
            let classes: Vec<&str> = class[2].split_whitespace().collect();
            if !classes.contains(&marker) || classes.contains(&added) {
                return tag.to_string();
            }
            changed += 1;
            let merged = format!("{}\"{} {}\"", &class[1], classes.join(" "), added);
            CLASS_ATTR.replace(tag, regex::NoExpand(&merged)).into_owned()
        });
        let updated = updated.into_owned();
        self.html = updated;
        Ok(changed)
    }
}

fn attr_pattern(name: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(
        r#"(?is)\s{}(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>/]+)))?([\s/>])"#,
        regex::escape(name)
    ))?)
}

fn read_attr(open_tag: &str, name: &str) -> Result<Option<String>> {
    let pattern = attr_pattern(name)?;
    Ok(pattern.captures(open_tag).map(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }))
}

fn rewrite_attr(open_tag: &str, name: &str, value: Option<&str>) -> Result<String> {
    let pattern = attr_pattern(name)?;
    let mut tag = pattern.replace_all(open_tag, "$4").into_owned();

    if let Some(value) = value {
        let insert_at = if tag.ends_with("/>") {
            tag.len() - 2
        } else {
            tag.len() - 1
        };
        let attribute = format!(" {}=\"{}\"", name, escape_html(value));
        tag.insert_str(insert_at, &attribute);
    }
    Ok(tag)
}
