use crate::{dom::Node, greet};

/// Anything that can produce a render tree.
pub trait Component {
    fn render(&self) -> Node;
}

/// Renders `Hello, <name>!` inside a single `div`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hello {
    name: String,
}

impl Hello {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Component for Hello {
    fn render(&self) -> Node {
        tracing::debug!(name = %self.name, "rendering greeting");
        Node::element("div", vec![Node::text(greet(&self.name))])
    }
}
