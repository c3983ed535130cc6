//! examples of usage of RustedMatExpr
/// Matrix parsing, arithmetic and ordering examples
pub mod matrix_examples;
/// Expression building, evaluation and collection examples
pub mod expression_examples;
