use thiserror::Error;

use crate::component::Component;

const ROOT_TAG: &str = "body";

/// A node in a rendered tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element { tag: String, children: Vec<Node> },
    Text(String),
}

impl Node {
    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Element {
            tag: tag.into(),
            children,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Returns the content of a text node, `None` for elements.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(content) => Some(content),
            Self::Element { .. } => None,
        }
    }

    fn collect_text_nodes<'a>(&'a self, out: &mut Vec<&'a Node>) {
        match self {
            Self::Text(_) => out.push(self),
            Self::Element { children, .. } => {
                for child in children {
                    child.collect_text_nodes(out);
                }
            }
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(content) => escape_into(content, out),
            Self::Element { tag, children } => {
                out.push('<');
                out.push_str(tag);
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

/// In-memory document a component has been rendered into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualDocument {
    root: Node,
}

/// Mounts `component` under a fresh `body` root.
pub fn render<C: Component + ?Sized>(component: &C) -> VirtualDocument {
    VirtualDocument {
        root: Node::element(ROOT_TAG, vec![component.render()]),
    }
}

impl VirtualDocument {
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the only text node whose content equals `text` exactly.
    pub fn get_by_text(&self, text: &str) -> Result<&Node, QueryError> {
        let matches = self.get_all_by_text(text);
        match matches.as_slice() {
            [node] => Ok(*node),
            [] => Err(QueryError::NotFound {
                expected: text.to_string(),
                rendered: self.text_content(),
            }),
            _ => Err(QueryError::MultipleMatches {
                expected: text.to_string(),
                count: matches.len(),
            }),
        }
    }

    /// Like [`get_by_text`](Self::get_by_text) but never fails; returns the
    /// first match in document order.
    pub fn query_by_text(&self, text: &str) -> Option<&Node> {
        self.text_nodes()
            .into_iter()
            .find(|node| node.as_text() == Some(text))
    }

    pub fn get_all_by_text(&self, text: &str) -> Vec<&Node> {
        self.text_nodes()
            .into_iter()
            .filter(|node| node.as_text() == Some(text))
            .collect()
    }

    /// Concatenation of every text node in document order.
    pub fn text_content(&self) -> String {
        self.text_nodes()
            .into_iter()
            .filter_map(Node::as_text)
            .collect()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.root.write_html(&mut out);
        out
    }

    fn text_nodes(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.root.collect_text_nodes(&mut out);
        out
    }
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unable to find a text node matching `{expected}` (rendered text: `{rendered}`)")]
    NotFound { expected: String, rendered: String },
    #[error("found {count} text nodes matching `{expected}`, expected exactly one")]
    MultipleMatches { expected: String, count: usize },
}
