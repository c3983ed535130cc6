//! # Expression Vector Module
//!
//! Growable, indexable sequence of arithmetic expressions with manual capacity
//! management: storage starts at a fixed four slots and doubles whenever an `add`
//! finds the vector full, moving every element into the new storage in order.
//! Removal shifts the tail one slot left and never gives capacity back.
//!
//! Expressions are moved in and out, never copied - the element type owns a
//! mutable tree and possibly an open resource behind its loader, so the vector is
//! move-only as well.
//!
//! Sorting is comparator-driven through [`ExpressionComparer`]; because a
//! comparison can fail (it evaluates both expressions), the sort is a hand-rolled
//! insertion sort that propagates the first error instead of panicking inside a
//! standard-library sort callback.

use crate::collection::comparers::ExpressionComparer;
use crate::expression::arithmetic_expression::ArithmeticExpression;
use crate::matrix::matrix_errors::MatrixError;
use log::debug;
use std::cmp::Ordering;

/// Slots allocated up front before the first doubling.
pub const INITIAL_CAPACITY: usize = 4;

pub struct ExpressionVector {
    data: Vec<ArithmeticExpression>,
}

impl ExpressionVector {
    /// Empty vector holding `INITIAL_CAPACITY` slots.
    pub fn new() -> Self {
        ExpressionVector {
            data: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Currently allocated slots. Grows by doubling, never shrinks.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Move an expression into the next free slot, doubling storage first when
    /// the vector is full. Existing elements keep their order across the move.
    pub fn add(&mut self, expr: ArithmeticExpression) {
        if self.data.len() == self.data.capacity() {
            debug!(
                "expression vector full at {}, doubling capacity",
                self.data.capacity()
            );
            self.data.reserve_exact(self.data.capacity());
        }
        self.data.push(expr);
    }

    /// Remove and return the expression at `index`, shifting every following
    /// element one slot earlier. Fails with a bounds error for `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<ArithmeticExpression, MatrixError> {
        if index >= self.data.len() {
            return Err(MatrixError::OutOfBounds(format!(
                "expression {} in a collection of {}",
                index,
                self.data.len()
            )));
        }
        Ok(self.data.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&ArithmeticExpression, MatrixError> {
        self.data.get(index).ok_or_else(|| {
            MatrixError::OutOfBounds(format!(
                "expression {} in a collection of {}",
                index,
                self.data.len()
            ))
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut ArithmeticExpression, MatrixError> {
        let len = self.data.len();
        self.data.get_mut(index).ok_or_else(|| {
            MatrixError::OutOfBounds(format!("expression {} in a collection of {}", index, len))
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArithmeticExpression> {
        self.data.iter()
    }

    /// Print every expression with its index, one per line.
    pub fn print_all(&self) {
        for (i, expr) in self.data.iter().enumerate() {
            println!("Expression {}: {}", i, expr.print_expression());
        }
    }

    /// Reorder in place using the given three-way comparator.
    ///
    /// Insertion sort by adjacent swaps, so each comparison's failure can be
    /// propagated with `?`. A failed comparison aborts mid-sort and keeps the
    /// swaps already made; stability across equal elements is not guaranteed.
    pub fn sort(&mut self, comparer: &dyn ExpressionComparer) -> Result<(), MatrixError> {
        debug!("sorting {} expressions with {}", self.data.len(), comparer.name());
        for i in 1..self.data.len() {
            let mut j = i;
            while j > 0 {
                if comparer.compare(&self.data[j - 1], &self.data[j])? == Ordering::Greater {
                    self.data.swap(j - 1, j);
                    j -= 1;
                } else {
                    break;
                }
            }
        }
        Ok(())
    }
}

impl Default for ExpressionVector {
    fn default() -> Self {
        ExpressionVector::new()
    }
}

impl<'a> IntoIterator for &'a ExpressionVector {
    type Item = &'a ArithmeticExpression;
    type IntoIter = std::slice::Iter<'a, ArithmeticExpression>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
