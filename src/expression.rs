/// binary tree of matrix operands and arithmetic operators with full and stepwise
/// evaluation, rendering and search
pub mod expression_tree;

/// pluggable operand sources: console, file-backed and preset queues
pub mod operand_loader;

/// expression container owning one tree and one operand source, growing the tree
/// left-deep one operand at a time
pub mod arithmetic_expression;

mod arithmetic_expression_tests;
