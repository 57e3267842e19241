//! YAML documents read with the quarter scanner hook.
//!
//! [`load_yaml`] reads every document in a YAML stream into a [`Node`] tree.
//! Plain (unquoted, untagged) scalars go through [`scan_scalar`], so
//! `2020Q1` becomes a quarter and `12` an integer. Quoted, block and tagged
//! scalars are kept as strings: quoting is how a document forces text.
//!
//! ```
//! use quarter::{load_yaml, Node, Quarter, Scalar};
//!
//! let docs = load_yaml("- Q1 2020\n- 'Q1 2020'\n").unwrap();
//! let quarter = Quarter::new(2020, 1).unwrap();
//! assert_eq!(
//!     docs[0],
//!     Node::Sequence(vec![
//!         Node::Scalar(Scalar::Quarter(quarter)),
//!         Node::Scalar(Scalar::String("Q1 2020".into())),
//!     ])
//! );
//! ```

use std::collections::BTreeMap;

use yaml_rust2::parser::{Event, EventReceiver, Parser};
use yaml_rust2::scanner::TScalarStyle;

use crate::error::{QuarterError, Result};
use crate::scalar::{scan_scalar, Scalar};

/// A node of a loaded YAML document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(Scalar),
    Sequence(Vec<Node>),
    /// Entries in document order.
    Mapping(Vec<(Node, Node)>),
}

impl Node {
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up a mapping entry by string key.
    pub fn get(&self, key: &str) -> Option<&Node> {
        let Node::Mapping(entries) = self else {
            return None;
        };
        entries
            .iter()
            .find(|(k, _)| matches!(k, Node::Scalar(Scalar::String(s)) if s == key))
            .map(|(_, value)| value)
    }
}

/// A collection still being filled, with its anchor id.
enum Open {
    Sequence(Vec<Node>, usize),
    Mapping(Vec<(Node, Node)>, Option<Node>, usize),
}

#[derive(Default)]
struct Loader {
    docs: Vec<Node>,
    root: Option<Node>,
    open: Vec<Open>,
    anchors: BTreeMap<usize, Node>,
    error: Option<QuarterError>,
}

impl EventReceiver for Loader {
    fn on_event(&mut self, ev: Event) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.handle(ev) {
            self.error = Some(err);
        }
    }
}

impl Loader {
    fn handle(&mut self, ev: Event) -> Result<()> {
        match ev {
            Event::Scalar(value, style, anchor, tag) => {
                let scalar = if style == TScalarStyle::Plain && tag.is_none() {
                    scan_scalar(&value)?
                } else {
                    tracing::trace!(value = value.as_str(), ?style, "kept scalar as text");
                    Scalar::String(value)
                };
                self.insert(Node::Scalar(scalar), anchor);
            }
            Event::SequenceStart(anchor, _) => self.open.push(Open::Sequence(Vec::new(), anchor)),
            Event::MappingStart(anchor, _) => {
                self.open.push(Open::Mapping(Vec::new(), None, anchor));
            }
            Event::SequenceEnd | Event::MappingEnd => {
                let (node, anchor) = match self.open.pop() {
                    Some(Open::Sequence(items, anchor)) => (Node::Sequence(items), anchor),
                    Some(Open::Mapping(entries, _, anchor)) => (Node::Mapping(entries), anchor),
                    None => return Err(QuarterError::Yaml("unbalanced collection end".into())),
                };
                self.insert(node, anchor);
            }
            Event::Alias(id) => {
                let node = self
                    .anchors
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| QuarterError::Yaml(format!("unknown anchor id {id}")))?;
                self.insert(node, 0);
            }
            Event::DocumentEnd => {
                let root = self.root.take().unwrap_or(Node::Scalar(Scalar::Null));
                self.docs.push(root);
            }
            _ => {}
        }
        Ok(())
    }

    fn insert(&mut self, node: Node, anchor: usize) {
        // Anchor ids start at 1.
        if anchor > 0 {
            self.anchors.insert(anchor, node.clone());
        }
        match self.open.last_mut() {
            None => self.root = Some(node),
            Some(Open::Sequence(items, _)) => items.push(node),
            Some(Open::Mapping(entries, key, _)) => match key.take() {
                None => *key = Some(node),
                Some(k) => entries.push((k, node)),
            },
        }
    }
}

/// Loads every document of a YAML stream, recognizing quarters in plain
/// scalars.
///
/// An empty document loads as a null scalar; an empty stream as no
/// documents.
///
/// # Errors
///
/// Returns [`QuarterError::Yaml`] for malformed YAML and
/// [`QuarterError::InvalidNumber`] for a plain quarter-shaped scalar naming
/// quarter 0 or 5..=9.
pub fn load_yaml(text: &str) -> Result<Vec<Node>> {
    let mut loader = Loader::default();
    Parser::new_from_str(text).load(&mut loader, true)?;
    match loader.error {
        Some(err) => Err(err),
        None => {
            tracing::debug!(documents = loader.docs.len(), "loaded YAML stream");
            Ok(loader.docs)
        }
    }
}
