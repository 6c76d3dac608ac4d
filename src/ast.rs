use std::{
    borrow::Borrow,
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt,
    hash::{BuildHasher, Hash},
    mem,
};

use crate::grow_stack;

/// Widest expression [Node::truth_table] will enumerate. Each extra variable doubles the rows.
pub const MAX_TABLE_VARIABLES: usize = 16;

/// Anything that can tell the value of a variable by name.
pub trait Lookup {
    fn lookup(&self, name: &str) -> Option<bool>;
}

impl<K, S> Lookup for HashMap<K, bool, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn lookup(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl<K> Lookup for BTreeMap<K, bool>
where
    K: Borrow<str> + Ord,
{
    fn lookup(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn lookup(&self, name: &str) -> Option<bool> {
        (**self).lookup(name)
    }
}

/// A parsed Boolean expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Var(String),
    Not(Box<Node>),
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
}

impl Node {
    pub fn var(name: impl Into<String>) -> Self {
        Node::Var(name.into())
    }

    pub fn not(inner: Node) -> Self {
        Node::Not(Box::new(inner))
    }

    pub fn and(lhs: Node, rhs: Node) -> Self {
        Node::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Node, rhs: Node) -> Self {
        Node::Or(Box::new(lhs), Box::new(rhs))
    }

    /// Evaluate the expression. Variables missing from `vars` are false.
    pub fn eval(&self, vars: &impl Lookup) -> bool {
        grow_stack(|| match self {
            Node::Var(name) => vars.lookup(name).unwrap_or(false),
            Node::Not(inner) => !inner.eval(vars),
            Node::And(lhs, rhs) => lhs.eval(vars) & rhs.eval(vars),
            Node::Or(lhs, rhs) => lhs.eval(vars) | rhs.eval(vars),
        })
    }

    /// The names of all variables in the expression, sorted and without duplicates.
    pub fn variables(&self) -> Vec<&str> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names.into_iter().collect()
    }

    fn collect_variables<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        grow_stack(|| match self {
            Node::Var(name) => {
                names.insert(name);
            }
            Node::Not(inner) => inner.collect_variables(names),
            Node::And(lhs, rhs) | Node::Or(lhs, rhs) => {
                lhs.collect_variables(names);
                rhs.collect_variables(names);
            }
        })
    }

    /// Evaluate the expression under every assignment of its variables. Rows count up in
    /// binary, with the first variable as the most significant bit.
    ///
    /// Returns [None] for expressions with more than [MAX_TABLE_VARIABLES] variables.
    pub fn truth_table(&self) -> Option<Vec<TruthRow>> {
        let names = self.variables();
        let width = names.len();
        if width > MAX_TABLE_VARIABLES {
            return None;
        }
        let rows = 1u32.checked_shl(width as u32)?;
        let table: Vec<TruthRow> = (0..rows)
            .map(|bits| {
                let assignment: BTreeMap<String, bool> = names
                    .iter()
                    .enumerate()
                    .map(|(i, name)| (name.to_string(), (bits >> (width - 1 - i)) & 1 == 1))
                    .collect();
                let value = self.eval(&assignment);
                TruthRow { assignment, value }
            })
            .collect();
        Some(table)
    }

    /// Move the children of this node into `pending`, leaving empty leaves in their place.
    fn detach_children(&mut self, pending: &mut Vec<Node>) {
        let mut detach = |child: &mut Box<Node>| {
            pending.push(mem::replace(&mut **child, Node::Var(String::new())));
        };
        match self {
            Node::Var(_) => {}
            Node::Not(inner) => detach(inner),
            Node::And(lhs, rhs) | Node::Or(lhs, rhs) => {
                detach(lhs);
                detach(rhs);
            }
        }
    }
}

impl Drop for Node {
    // Children go through a heap worklist so dropping a deeply nested tree never recurses.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

/// One line of [Node::truth_table].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthRow {
    pub assignment: BTreeMap<String, bool>,
    pub value: bool,
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        grow_stack(|| match self {
            Node::Var(name) => write!(f, "'{name}'"),
            Node::Not(inner) => write!(f, "!({inner})"),
            Node::And(lhs, rhs) => write!(f, "&({lhs},{rhs})"),
            Node::Or(lhs, rhs) => write!(f, "|({lhs},{rhs})"),
        })
    }
}
