//! Wire codec for Huffman trees.
//!
//! Breadth-first and queue-driven: a dequeued internal node emits a `0` flag
//! byte and enqueues its right child before its left one; a dequeued leaf
//! emits a `1` flag byte followed by its symbol as two little-endian bytes.
//! The right-before-left order is a wire-format contract mirrored exactly by
//! `deserialize`: reordering it would break every container written before
//! the change.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::Symbol;

use super::HuffNode;

const INTERNAL_FLAG: u8 = 0;
const LEAF_FLAG: u8 = 1;

/// Serializes a tree to its wire representation. A bare-leaf tree emits the
/// leaf flag and the symbol, nothing else.
pub fn serialize(root: &HuffNode) -> Vec<u8> {
    let mut bytes = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(root);

    while let Some(node) = queue.pop_front() {
        match node {
            HuffNode::Leaf { symbol, .. } => {
                bytes.push(LEAF_FLAG);
                bytes.extend_from_slice(&symbol.to_le_bytes());
            }
            HuffNode::Internal { left, right, .. } => {
                bytes.push(INTERNAL_FLAG);
                queue.push_back(right);
                queue.push_back(left);
            }
        }
    }

    bytes
}

/// Rebuilds a tree from its wire representation.
///
/// Weights are not part of the wire format; rebuilt nodes carry weight 0,
/// which the decode state machine never looks at.
pub fn deserialize(bytes: &[u8]) -> Result<HuffNode> {
    let mut input = TreeCursor::new(bytes);

    if input.read_flag()? == LEAF_FLAG {
        return Ok(HuffNode::Leaf {
            symbol: input.read_symbol()?,
            weight: 0,
        });
    }

    let mut arena = vec![Pending::default()];
    let mut queue = VecDeque::new();
    queue.push_back(0usize);

    while let Some(index) = queue.pop_front() {
        // Children arrive right-first, mirroring the serialization order.
        let right = input.read_child(&mut arena, &mut queue)?;
        let left = input.read_child(&mut arena, &mut queue)?;

        arena[index].right = Some(right);
        arena[index].left = Some(left);
    }

    assemble(&arena, 0)
}

/// A decoded child: a finished leaf, or an index into the arena of internal
/// nodes still waiting for their own children.
enum Slot {
    Leaf(Symbol),
    Node(usize),
}

#[derive(Default)]
struct Pending {
    right: Option<Slot>,
    left: Option<Slot>,
}

struct TreeCursor<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> TreeCursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        TreeCursor { bytes, position: 0 }
    }

    fn read_flag(&mut self) -> Result<u8> {
        let flag = *self
            .bytes
            .get(self.position)
            .ok_or_else(|| Error::malformed("tree flag byte missing"))?;
        self.position += 1;

        match flag {
            INTERNAL_FLAG | LEAF_FLAG => Ok(flag),
            other => Err(Error::malformed(format!(
                "tree flag byte out of range: {}",
                other
            ))),
        }
    }

    fn read_symbol(&mut self) -> Result<Symbol> {
        let end = self.position + 2;
        let raw = self
            .bytes
            .get(self.position..end)
            .ok_or_else(|| Error::malformed("leaf symbol bytes missing"))?;
        self.position = end;

        Ok(Symbol::from_le_bytes([raw[0], raw[1]]))
    }

    fn read_child(
        &mut self,
        arena: &mut Vec<Pending>,
        queue: &mut VecDeque<usize>,
    ) -> Result<Slot> {
        if self.read_flag()? == LEAF_FLAG {
            return Ok(Slot::Leaf(self.read_symbol()?));
        }

        arena.push(Pending::default());
        let index = arena.len() - 1;
        queue.push_back(index);

        Ok(Slot::Node(index))
    }
}

fn assemble(arena: &[Pending], index: usize) -> Result<HuffNode> {
    let node = &arena[index];

    Ok(HuffNode::Internal {
        weight: 0,
        left: Box::new(resolve(arena, node.left.as_ref())?),
        right: Box::new(resolve(arena, node.right.as_ref())?),
    })
}

fn resolve(arena: &[Pending], slot: Option<&Slot>) -> Result<HuffNode> {
    match slot {
        Some(Slot::Leaf(symbol)) => Ok(HuffNode::Leaf {
            symbol: *symbol,
            weight: 0,
        }),
        Some(Slot::Node(index)) => assemble(arena, *index),
        None => Err(Error::malformed("tree node missing a child")),
    }
}
