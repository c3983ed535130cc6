#![allow(non_snake_case)]
pub mod Examples;
pub mod Utils;
pub mod collection;
pub mod expression;
pub mod matrix;

use crate::Examples::expression_examples::expression_examples;
use crate::Examples::matrix_examples::matrix_examples;
use crate::Utils::logger::init_console_logging;

fn main() {
    init_console_logging(Some("info"));
    // 0 - parsing and rendering
    // 1 - checked arithmetic and error taxonomy
    // 2 - ordering by cell sum vs exact equality
    // 3 - build and evaluate an expression
    // 4 - file-backed operands and loader switching
    // 5 - stepwise evaluation
    // 6 - collection sorting with comparers
    // 7 - collection inspection and removal
    // 8 - interactive expression from the console
    let example = 3;
    let result = match example {
        0..=2 => matrix_examples(example),
        3..=8 => expression_examples(example - 3),
        _ => {
            println!("no such example: {}", example);
            Ok(())
        }
    };
    if let Err(e) = result {
        eprintln!("Matrix error: {}", e);
    }
}
