//! # Expression Tree Module
//!
//! This module provides the binary tree representation of matrix arithmetic expressions.
//! Leaves carry matrix operands and interior nodes carry one of the four arithmetic
//! operators, so every tree is a complete description of a computation such as
//! `( [1,2;3,4] + [1,1;1,1] )`.
//!
//! ## Purpose
//!
//! The expression tree allows users to:
//! - Assemble matrix computations without evaluating them immediately
//! - Evaluate a whole tree in one recursive pass
//! - Reduce a tree one operator at a time and watch intermediate results
//! - Render any subtree as a parenthesized text form
//! - Search the operand leaves for a particular matrix
//!
//! ## Main Structures and Methods
//!
//! ### `Op` Enum
//! The four supported operators `Add`, `Sub`, `Mul`, `Div`. Each maps onto the
//! checked matrix arithmetic in `dense_matrix`, converts to and from its symbol
//! character, and renders as `+`, `-`, `*`, `/`.
//!
//! ### `Node` Enum
//! The tree itself:
//! - **Operands**: `Operand(Matrix)` - leaf values
//! - **Operators**: `Operator(Op, Box<Node>, Box<Node>)` - interior nodes with left/right subtrees
//!
//! ### Key Methods
//! - `evaluate()` - Collapse the whole tree into a single matrix
//! - `reduce_once()` - Apply exactly one operator whose children are both leaves
//! - `find(target)` - True if some leaf equals the given matrix
//! - `operands()` - Leaves in left-to-right order
//!
//! ## Interesting Code Features
//!
//! 1. **Recursive Expression Tree**: Uses Box<Node> for nested expressions, enabling
//!    arbitrarily deep left- or right-leaning trees
//!
//! 2. **Stepwise Reduction**: `reduce_once` picks the leftmost operator (in post-order)
//!    with two leaf children, so chaining it replays evaluation one operation at a time
//!    and reaches the same result as `evaluate`
//!
//! 3. **Checked Propagation**: Every arithmetic failure (dimension mismatch, overflow,
//!    division by zero) bubbles up through `Result` instead of panicking

use crate::matrix::dense_matrix::Matrix;
use crate::matrix::matrix_errors::MatrixError;
use std::fmt;
use strum_macros::EnumIter;

/// Arithmetic operator carried by interior tree nodes.
///
/// Each operator delegates to the corresponding checked operation on `Matrix`,
/// so applying one can fail with any of the arithmetic error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Op {
    /// Elementwise addition: left + right
    Add,
    /// Elementwise subtraction: left - right
    Sub,
    /// Matrix product: left * right
    Mul,
    /// Elementwise division: left / right
    Div,
}

impl Op {
    /// Symbol character used when rendering expression text.
    pub fn symbol(&self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// Apply the operator to two matrices using checked arithmetic.
    pub fn apply(&self, left: &Matrix, right: &Matrix) -> Result<Matrix, MatrixError> {
        match self {
            Op::Add => left.checked_add(right),
            Op::Sub => left.checked_sub(right),
            Op::Mul => left.checked_mul(right),
            Op::Div => left.checked_div(right),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Op {
    type Error = MatrixError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Op::Add),
            '-' => Ok(Op::Sub),
            '*' => Ok(Op::Mul),
            '/' => Ok(Op::Div),
            other => Err(MatrixError::Arithmetic(format!(
                "Unknown operator: {}",
                other
            ))),
        }
    }
}

/// Binary expression tree over matrix operands.
///
/// Leaves hold matrices, interior nodes hold an operator and two subtrees. The enum
/// uses Box<Node> for recursive structure, allowing arbitrarily deep trees.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Leaf node holding a matrix value
    Operand(Matrix),
    /// Interior node applying an operator to left and right subtrees
    Operator(Op, Box<Node>, Box<Node>),
}

impl Node {
    /// Convenience wrapper for boxing nodes when building trees by hand.
    pub fn boxed(self) -> Box<Node> {
        Box::new(self)
    }

    /// Build a leaf from a matrix.
    pub fn operand(matrix: Matrix) -> Node {
        Node::Operand(matrix)
    }

    /// Build an interior node from an operator and two subtrees.
    pub fn operator(op: Op, left: Node, right: Node) -> Node {
        Node::Operator(op, left.boxed(), right.boxed())
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, Node::Operand(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Node::Operator(_, _, _))
    }

    /// Evaluate the whole subtree into a single matrix.
    ///
    /// Post-order recursion: both children are evaluated before the operator is
    /// applied, and the first failing operation aborts the walk.
    pub fn evaluate(&self) -> Result<Matrix, MatrixError> {
        match self {
            Node::Operand(matrix) => Ok(matrix.clone()),
            Node::Operator(op, left, right) => {
                let lhs = left.evaluate()?;
                let rhs = right.evaluate()?;
                op.apply(&lhs, &rhs)
            }
        }
    }

    /// Apply exactly one operator and replace it with its result leaf.
    ///
    /// The operator chosen is the first one in post-order whose children are both
    /// leaves, which for any tree shape is the leftmost-deepest pending operation.
    /// Returns `Ok(true)` if a reduction happened and `Ok(false)` once the tree is
    /// a single leaf. Arithmetic failures leave the tree untouched.
    pub fn reduce_once(&mut self) -> Result<bool, MatrixError> {
        match self {
            Node::Operand(_) => Ok(false),
            Node::Operator(op, left, right) => {
                if let (Node::Operand(lhs), Node::Operand(rhs)) = (left.as_ref(), right.as_ref())
                {
                    let value = op.apply(lhs, rhs)?;
                    *self = Node::Operand(value);
                    return Ok(true);
                }
                if left.reduce_once()? {
                    return Ok(true);
                }
                right.reduce_once()
            }
        }
    }

    /// True if some operand leaf renders exactly as `target`.
    ///
    /// Comparison is on the canonical text form, so the caller can search with a
    /// literal like `"[1,2;3,4]"` without parsing it first.
    pub fn find(&self, target: &str) -> bool {
        match self {
            Node::Operand(matrix) => matrix.to_string() == target,
            Node::Operator(_, left, right) => left.find(target) || right.find(target),
        }
    }

    /// Operand leaves in left-to-right order.
    pub fn operands(&self) -> Vec<&Matrix> {
        match self {
            Node::Operand(matrix) => vec![matrix],
            Node::Operator(_, left, right) => {
                let mut collected = left.operands();
                collected.extend(right.operands());
                collected
            }
        }
    }

    /// Number of operator nodes in the subtree.
    pub fn count_operators(&self) -> usize {
        match self {
            Node::Operand(_) => 0,
            Node::Operator(_, left, right) => {
                1 + left.count_operators() + right.count_operators()
            }
        }
    }
}

/// Display implementation for pretty printing expression trees.
///
/// Leaves render as matrix literals, interior nodes as `( left op right )` with the
/// subtrees parenthesized recursively.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Operand(matrix) => write!(f, "{}", matrix),
            Node::Operator(op, left, right) => write!(f, "( {} {} {} )", left, op, right),
        }
    }
}
