//! A minimal virtual tree for views.
//!
//! Trees are plain data: no callbacks live in them, so two trees built from
//! the same model compare equal. Interactive elements are identified by
//! their class, which is what [`DomSource`](crate::DomSource) selects on.

use core::fmt;

/// A node of a rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VNode {
    Element(Element),
    Text(String),
}

/// An element with a tag, an optional class, attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    class: Option<String>,
    attrs: Vec<(String, String)>,
    children: Vec<VNode>,
}

/// Shorthand for a text node.
pub fn text(content: impl Into<String>) -> VNode {
    VNode::Text(content.into())
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<VNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(text(content))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[VNode] {
        &self.children
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl VNode {
    /// First element in document order carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        match self {
            VNode::Text(_) => None,
            VNode::Element(el) => {
                if el.class.as_deref() == Some(class) {
                    return Some(el);
                }
                el.children.iter().find_map(|c| c.find_by_class(class))
            }
        }
    }

    /// Every element with `tag`, in document order.
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_tag(tag, &mut found);
        found
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        if let VNode::Element(el) = self {
            if el.tag == tag {
                found.push(el);
            }
            for child in &el.children {
                child.collect_tag(tag, found);
            }
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            VNode::Text(t) => out.push_str(t),
            VNode::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for VNode {
    fn from(el: Element) -> Self {
        VNode::Element(el)
    }
}

impl From<&str> for VNode {
    fn from(t: &str) -> Self {
        text(t)
    }
}

impl From<String> for VNode {
    fn from(t: String) -> Self {
        VNode::Text(t)
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_open(f: &mut fmt::Formatter<'_>, el: &Element) -> fmt::Result {
    write!(f, "<{}", el.tag)?;
    if let Some(class) = &el.class {
        write!(f, " class=\"{}\"", escape(class))?;
    }
    for (key, value) in &el.attrs {
        write!(f, " {}=\"{}\"", key, escape(value))?;
    }
    write!(f, ">")
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &VNode, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match node {
        VNode::Text(t) => write!(f, "{indent}{}", escape(t)),
        VNode::Element(el) => {
            f.write_str(&indent)?;
            write_open(f, el)?;

            // Leaf-ish elements stay on one line.
            if el.children.iter().all(|c| matches!(c, VNode::Text(_))) {
                for child in &el.children {
                    if let VNode::Text(t) = child {
                        f.write_str(&escape(t))?;
                    }
                }
                return write!(f, "</{}>", el.tag);
            }

            for child in &el.children {
                writeln!(f)?;
                write_node(f, child, depth + 1)?;
            }
            write!(f, "\n{indent}</{}>", el.tag)
        }
    }
}

impl fmt::Display for VNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, &VNode::Element(self.clone()), 0)
    }
}
