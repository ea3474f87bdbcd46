use super::*;
use crate::Score;
use petgraph::Direction::Incoming;
use petgraph::Direction::Outgoing;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::collections::HashSet;

/// The search tree, stored as an arena graph whose edges are moves.
///
/// Node 0 is the root. Every other node has exactly one incoming edge, and
/// no two children of a node share an edge.
#[derive(Debug)]
pub struct Tree<E, T>(DiGraph<Node<T>, E>);

impl<E: SearchEdge, T: SearchTurn> Default for Tree<E, T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<E: SearchEdge, T: SearchTurn> Tree<E, T> {
    pub fn new() -> Self {
        Self::default()
    }
    /// Room for `expansions` nodes below the root. Each iteration expands
    /// at most one.
    pub fn with_capacity(expansions: usize) -> Self {
        let mut graph = DiGraph::with_capacity(expansions + 1, expansions);
        graph.add_node(Node::root());
        Self(graph)
    }
    pub fn root(&self) -> NodeIndex {
        NodeIndex::new(0)
    }
    pub fn size(&self) -> usize {
        self.0.node_count()
    }
    pub fn at(&self, index: NodeIndex) -> &Node<T> {
        self.0.node_weight(index).expect("valid node index")
    }
    fn at_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        self.0.node_weight_mut(index).expect("valid node index")
    }
    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.0.neighbors_directed(index, Incoming).next()
    }
    /// The move leading into a non-root node.
    pub fn incoming(&self, index: NodeIndex) -> &E {
        self.0
            .edges_directed(index, Incoming)
            .next()
            .map(|edge| edge.weight())
            .expect("non-root node has an incoming edge")
    }
    pub fn children(&self, index: NodeIndex) -> Vec<(NodeIndex, &E)> {
        self.0
            .edges_directed(index, Outgoing)
            .map(|edge| (edge.target(), edge.weight()))
            .collect()
    }

    /// Legal moves with no child yet, in the order given.
    pub fn untried(&self, index: NodeIndex, legal: &[E]) -> Vec<E> {
        let tried = self
            .children(index)
            .into_iter()
            .map(|(_, edge)| edge)
            .collect::<HashSet<_>>();
        legal
            .iter()
            .filter(|edge| !tried.contains(edge))
            .cloned()
            .collect()
    }

    /// Picks the legal child with the best UCB score, then marks every
    /// legal child as having been available.
    pub fn select(&mut self, index: NodeIndex, legal: &[E], exploration: Score) -> NodeIndex {
        let legal = legal.iter().collect::<HashSet<_>>();
        let candidates = self
            .children(index)
            .into_iter()
            .filter(|(_, edge)| legal.contains(edge))
            .map(|(child, _)| child)
            .collect::<Vec<_>>();
        let chosen = candidates
            .iter()
            .copied()
            .reduce(|best, next| match self.at(next).ucb(exploration) > self.at(best).ucb(exploration) {
                true => next,
                false => best,
            })
            .expect("selection among at least one legal child");
        for child in candidates {
            self.at_mut(child).avail();
        }
        chosen
    }
    pub fn expand(&mut self, index: NodeIndex, edge: E, mover: Option<T>) -> NodeIndex {
        let child = self.0.add_node(Node::new(mover));
        self.0.add_edge(index, child, edge);
        child
    }
    /// Records one playout outcome on `leaf` and every ancestor.
    pub fn backpropagate(&mut self, leaf: NodeIndex, winner: Option<T>) {
        let mut cursor = Some(leaf);
        while let Some(index) = cursor {
            self.at_mut(index).update(winner);
            cursor = self.parent(index);
        }
    }
    /// The most visited root child whose move is in `legal`.
    pub fn best(&self, legal: &[E]) -> Option<E> {
        self.children(self.root())
            .into_iter()
            .filter(|(_, edge)| legal.contains(*edge))
            .max_by_key(|(child, _)| self.at(*child).visits())
            .map(|(_, edge)| edge.clone())
    }
}

impl<E: SearchEdge, T: SearchTurn> std::fmt::Display for Tree<E, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ROOT   {}", self.at(self.root()))?;
        let mut children = self.children(self.root());
        children.sort_by_key(|(child, _)| std::cmp::Reverse(self.at(*child).visits()));
        let n = children.len();
        for (i, (child, edge)) in children.into_iter().enumerate() {
            let stem = if i == n - 1 { "└" } else { "├" };
            writeln!(f, "{}──{} {}", stem, self.at(child), edge)?;
        }
        Ok(())
    }
}
