//! # Arithmetic Expression Container
//!
//! Owns one expression tree plus the operand source that feeds it. The container
//! grows left-deep: the first appended operand becomes the root leaf, and every
//! later append wraps the whole current tree as the left child of a new operator
//! root with the fresh operand on the right. Building `a + b - c` therefore yields
//! `( ( a + b ) - c )`.
//!
//! ## Key Methods
//! - `set_loader()` / `switch_loader()` - install or swap the operand source
//! - `add_operand(op)` - pull one matrix from the source and grow the tree
//! - `evaluate()` / `step_evaluate()` - full or one-step reduction
//! - `print_expression()` / `find()` / `get_operands()` - tree inspection
//!
//! The container is move-only: it exclusively owns a mutable tree and possibly an
//! open resource behind its loader, so duplicating one is deliberately unsupported.

use crate::expression::expression_tree::{Node, Op};
use crate::expression::operand_loader::Loader;
use crate::matrix::dense_matrix::Matrix;
use crate::matrix::matrix_errors::MatrixError;
use log::debug;
use std::fmt;

#[derive(Default)]
pub struct ArithmeticExpression {
    root: Option<Node>,
    loader: Option<Box<dyn Loader>>,
}

impl ArithmeticExpression {
    /// Empty expression with no tree and no operand source.
    pub fn new() -> Self {
        ArithmeticExpression {
            root: None,
            loader: None,
        }
    }

    /// Expression that will pull operands from the given loader.
    pub fn with_loader(loader: Box<dyn Loader>) -> Self {
        ArithmeticExpression {
            root: None,
            loader: Some(loader),
        }
    }

    /// Install the operand source.
    pub fn set_loader(&mut self, loader: Box<dyn Loader>) {
        self.loader = Some(loader);
    }

    /// Swap the operand source mid-build and hand back the previous one, so one
    /// side of an expression can come from a file and the rest from elsewhere.
    pub fn switch_loader(&mut self, loader: Box<dyn Loader>) -> Option<Box<dyn Loader>> {
        self.loader.replace(loader)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of operator nodes in the current tree.
    pub fn operator_count(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.count_operators())
    }

    /// Pull one matrix from the operand source and append it to the tree.
    ///
    /// The first operand needs no operator and becomes the root leaf (`op` is
    /// ignored if given). Every later operand requires `op`; omitting it fails with
    /// `Arithmetic` and leaves the tree as it was. The operand is pulled before the
    /// operator check, matching the source-consumption order of interactive input.
    pub fn add_operand(&mut self, op: Option<Op>) -> Result<(), MatrixError> {
        let loader = self
            .loader
            .as_mut()
            .ok_or_else(|| MatrixError::Arithmetic("Loader not set".to_string()))?;
        let operand = loader.next_operand()?;
        let leaf = Node::Operand(operand);

        match (self.root.take(), op) {
            (None, _) => self.root = Some(leaf),
            (Some(old_root), Some(op)) => {
                self.root = Some(Node::Operator(op, old_root.boxed(), leaf.boxed()));
            }
            (Some(old_root), None) => {
                self.root = Some(old_root);
                return Err(MatrixError::Arithmetic(
                    "Operator not provided for operand addition".to_string(),
                ));
            }
        }
        debug!("expression grew to {}", self.print_expression());
        Ok(())
    }

    /// Fully evaluate the tree into one matrix.
    pub fn evaluate(&self) -> Result<Matrix, MatrixError> {
        let root = self
            .root
            .as_ref()
            .ok_or_else(|| MatrixError::Arithmetic("Expression tree is empty".to_string()))?;
        root.evaluate()
    }

    /// Perform one reduction step in place. Returns `Ok(false)` once there is
    /// nothing left to reduce (empty tree or a single leaf).
    pub fn step_evaluate(&mut self) -> Result<bool, MatrixError> {
        match self.root.as_mut() {
            None => Ok(false),
            Some(root) => root.reduce_once(),
        }
    }

    /// Canonical text form of the tree; empty string for an empty expression.
    pub fn print_expression(&self) -> String {
        match &self.root {
            None => String::new(),
            Some(root) => root.to_string(),
        }
    }

    /// True if some operand renders exactly as `target`; false on an empty tree.
    pub fn find(&self, target: &str) -> bool {
        self.root.as_ref().is_some_and(|root| root.find(target))
    }

    /// Operand leaves in left-to-right order; empty for an empty tree.
    pub fn get_operands(&self) -> Vec<&Matrix> {
        self.root.as_ref().map_or_else(Vec::new, |root| root.operands())
    }
}

impl fmt::Display for ArithmeticExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.print_expression())
    }
}
