/*!
Congruence closure, aka. equality reasoning over uninterpreted terms.

Terms are added to a graph of nodes, where each node is a label together with child nodes.
Nodes are hash-consed, so each (sub)term has exactly one node.

Equal nodes are grouped into classes (by union-find), and whenever two classes are merged the nodes which use a member of either class as a child are revisited.
If two such nodes have the same label and children from the same classes (the same *signature*), they are merged in turn.
So, if `a = b` then `f(a) = f(b)`.

Definitions are added in their curried form, with each parameter a child of a binder.
So, `Lambda((a), f(a))` and `Lambda((b), f(b))` are merged whenever `a` and `b` are, while `Lambda((a), f(a))` and `Lambda((b), f(b))` remain distinct when nothing is known of `a` and `b`.

```rust
# use otter_euf::oracle::congruence::CongruenceClosure;
# use otter_euf::structures::term::Term;
let mut cc = CongruenceClosure::default();

let a = cc.add_term(&Term::symbol("a"));
let b = cc.add_term(&Term::symbol("b"));
let f_a = cc.add_term(&Term::apply("f", [Term::symbol("a")]));
let f_b = cc.add_term(&Term::apply("f", [Term::symbol("b")]));

assert!(!cc.are_equal(f_a, f_b));
cc.merge(a, b);
assert!(cc.are_equal(f_a, f_b));

cc.assert_distinct(f_a, f_b);
assert!(!cc.consistent());
```
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{
        definition::{Body, Definition},
        predicate::Predicate,
        term::{Symbol, Term},
    },
};

/// The index of a node.
pub type NodeId = usize;

/// The label of a node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Label {
    Symbol(Symbol),
    Integer(i64),
    NaN,
    Matrix(Symbol),
    Application(String),
    Predicate(Predicate),
    Lambda,
    Closed,
}

type Signature = (Label, Vec<NodeId>);

#[derive(Debug)]
struct Node {
    label: Label,
    children: Vec<NodeId>,
}

/// A congruence closure over terms.
#[derive(Debug, Default)]
pub struct CongruenceClosure {
    nodes: Vec<Node>,

    /// Nodes, by label and (original) children.
    interned: HashMap<Signature, NodeId>,

    /// The union-find forest.
    parent: Vec<NodeId>,

    /// The size of each class, valid for roots only.
    size: Vec<usize>,

    /// For each root, the nodes with some child in the class of the root.
    uses: Vec<Vec<NodeId>>,

    /// Nodes, by label and the roots of their children.
    signatures: HashMap<Signature, NodeId>,

    /// Pairs of nodes asserted to be distinct.
    distinct: Vec<(NodeId, NodeId)>,
}

impl CongruenceClosure {
    /// The node of a term, adding the term (and its subterms) if required.
    pub fn add_term(&mut self, term: &Term) -> NodeId {
        match term {
            Term::Symbol(symbol) => self.intern(Label::Symbol(symbol.clone()), Vec::default()),
            Term::Integer(value) => self.intern(Label::Integer(*value), Vec::default()),
            Term::NaN => self.intern(Label::NaN, Vec::default()),
            Term::Matrix(symbol) => self.intern(Label::Matrix(symbol.clone()), Vec::default()),
            Term::Application { head, arguments } => {
                let children = arguments.iter().map(|a| self.add_term(a)).collect();
                self.intern(Label::Application(head.clone()), children)
            }
            Term::Abstraction(definition) => self.add_definition(definition),
        }
    }

    /// Adds a definition in curried form.
    fn add_definition(&mut self, definition: &Definition) -> NodeId {
        let body = match definition.body() {
            Body::Term(term) => self.add_term(term),
            Body::Predicate(predicate, term) => {
                let argument = self.add_term(term);
                self.intern(Label::Predicate(predicate.clone()), vec![argument])
            }
        };

        if definition.is_closed() {
            return self.intern(Label::Closed, vec![body]);
        }

        let mut curried = body;
        for parameter in definition.parameters().iter().rev() {
            let bound = self.intern(Label::Symbol(parameter.clone()), Vec::default());
            curried = self.intern(Label::Lambda, vec![bound, curried]);
        }
        curried
    }

    fn intern(&mut self, label: Label, children: Vec<NodeId>) -> NodeId {
        let key = (label, children);
        if let Some(node) = self.interned.get(&key) {
            return *node;
        }
        let (label, children) = key;

        let node = self.nodes.len();
        self.parent.push(node);
        self.size.push(1);
        self.uses.push(Vec::default());

        for child in &children {
            let root = self.find(*child);
            self.uses[root].push(node);
        }

        let signature = self.signature_of(&label, &children);
        self.nodes.push(Node {
            label: label.clone(),
            children: children.clone(),
        });
        self.interned.insert((label, children), node);

        match self.signatures.get(&signature) {
            Some(congruent) => {
                let congruent = *congruent;
                self.merge(node, congruent);
            }
            None => {
                self.signatures.insert(signature, node);
            }
        }

        node
    }

    fn signature_of(&self, label: &Label, children: &[NodeId]) -> Signature {
        (
            label.clone(),
            children.iter().map(|child| self.find(*child)).collect(),
        )
    }

    /// The representative of the class of a node.
    pub fn find(&self, node: NodeId) -> NodeId {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        root
    }

    /// True if the nodes are in the same class.
    pub fn are_equal(&self, a: NodeId, b: NodeId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merges the classes of two nodes, and any classes which are then congruent.
    pub fn merge(&mut self, a: NodeId, b: NodeId) {
        let mut pending = vec![(a, b)];

        while let Some((a, b)) = pending.pop() {
            let (a_root, b_root) = (self.find(a), self.find(b));
            if a_root == b_root {
                continue;
            }

            let (small, large) = match self.size[a_root] < self.size[b_root] {
                true => (a_root, b_root),
                false => (b_root, a_root),
            };
            log::trace!(target: targets::CONGRUENCE, "Merge {small} into {large}");

            self.parent[small] = large;
            self.size[large] += self.size[small];

            let moved = std::mem::take(&mut self.uses[small]);
            for user in &moved {
                let node = &self.nodes[*user];
                let signature = self.signature_of(&node.label, &node.children);
                match self.signatures.get(&signature) {
                    Some(congruent) if self.find(*congruent) != self.find(*user) => {
                        pending.push((*user, *congruent));
                    }
                    Some(_) => {}
                    None => {
                        self.signatures.insert(signature, *user);
                    }
                }
            }
            self.uses[large].extend(moved);
        }
    }

    /// Notes the two nodes are distinct.
    ///
    /// Whether this is consistent with the classes of the nodes is left to [consistent](CongruenceClosure::consistent).
    pub fn assert_distinct(&mut self, a: NodeId, b: NodeId) {
        self.distinct.push((a, b));
    }

    /// True if no pair of nodes asserted to be distinct are in the same class.
    pub fn consistent(&self) -> bool {
        self.distinct.iter().all(|(a, b)| !self.are_equal(*a, *b))
    }

    /// A count of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
