//! Document seam. The host page owns the real DOM; this script only needs
//! query, remove and append, so that is the whole trait. `MemoryDom` backs
//! the tests and the preview binary.

/// Opaque handle to a node owned by a `Dom` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// Description of the anchor element the renderer injects.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub classes: String,
    pub title: String,
    pub href: String,
    pub label: String,
}

pub trait Dom {
    /// First element in document order matching a `.class` selector.
    fn query(&self, selector: &str) -> Option<NodeId>;

    /// Same, restricted to descendants of `scope`.
    fn query_within(&self, scope: NodeId, selector: &str) -> Option<NodeId>;

    /// Detaches a node and its subtree from the document.
    fn remove(&mut self, node: NodeId);

    /// Appends an anchor element as the last child of `parent`.
    fn append_anchor(&mut self, parent: NodeId, anchor: Anchor) -> NodeId;
}

/// Flat node arena with class lists and parent/child links. Enough of a
/// document to drive the renderer outside a browser.
#[derive(Debug, Default)]
pub struct MemoryDom {
    nodes: Vec<Node>,
    roots: Vec<usize>,
}

#[derive(Debug)]
struct Node {
    classes: Vec<String>,
    children: Vec<usize>,
    anchor: Option<Anchor>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plain element; `parent = None` attaches it at the root.
    pub fn add_element(&mut self, parent: Option<NodeId>, classes: &str) -> NodeId {
        let id = self.push(classes, None);
        match parent {
            Some(NodeId(p)) => self.nodes[p].children.push(id),
            None => self.roots.push(id),
        }
        NodeId(id)
    }

    /// Anchor data of a node, if the node is an injected anchor.
    pub fn anchor(&self, node: NodeId) -> Option<&Anchor> {
        self.nodes[node.0].anchor.as_ref()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes[node.0].children.iter().map(|&c| NodeId(c)).collect()
    }

    fn push(&mut self, classes: &str, anchor: Option<Anchor>) -> usize {
        self.nodes.push(Node {
            classes: classes.split_whitespace().map(str::to_owned).collect(),
            children: Vec::new(),
            anchor,
        });
        self.nodes.len() - 1
    }

    fn class_of(selector: &str) -> &str {
        selector.strip_prefix('.').unwrap_or(selector)
    }

    fn matches(&self, id: usize, class: &str) -> bool {
        self.nodes[id].classes.iter().any(|c| c == class)
    }

    // Depth-first over attached nodes, i.e. document order.
    fn find(&self, start: &[usize], class: &str) -> Option<usize> {
        for &id in start {
            if self.matches(id, class) {
                return Some(id);
            }
            if let Some(hit) = self.find(&self.nodes[id].children, class) {
                return Some(hit);
            }
        }
        None
    }
}

impl Dom for MemoryDom {
    fn query(&self, selector: &str) -> Option<NodeId> {
        self.find(&self.roots, Self::class_of(selector)).map(NodeId)
    }

    fn query_within(&self, scope: NodeId, selector: &str) -> Option<NodeId> {
        self.find(&self.nodes[scope.0].children, Self::class_of(selector))
            .map(NodeId)
    }

    fn remove(&mut self, node: NodeId) {
        self.roots.retain(|&r| r != node.0);
        for n in &mut self.nodes {
            n.children.retain(|&c| c != node.0);
        }
    }

    fn append_anchor(&mut self, parent: NodeId, anchor: Anchor) -> NodeId {
        let classes = anchor.classes.clone();
        let id = self.push(&classes, Some(anchor));
        self.nodes[parent.0].children.push(id);
        NodeId(id)
    }
}
