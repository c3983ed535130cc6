// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License

use crate::Utils::logger::save_matrix_to_file;
use crate::collection::comparers::{DiagonalProductComparer, DiagonalProductThenLexComparer};
use crate::collection::expression_vector::ExpressionVector;
use crate::expression::arithmetic_expression::ArithmeticExpression;
use crate::expression::expression_tree::Op;
use crate::expression::operand_loader::{ConsoleLoader, FileLoader, VecLoader};
use crate::matrix::dense_matrix::Matrix;
use crate::matrix::matrix_errors::MatrixError;
use log::info;

#[allow(dead_code)]
pub fn expression_examples(example: usize) -> Result<(), MatrixError> {
    match example {
        0 => {
            // BUILD AND EVALUATE AN EXPRESSION FROM PRESET OPERANDS
            // the first operand needs no operator, every later one wraps the
            // whole tree as the left side of a new root
            let loader = VecLoader::from_texts(&["[1,2;3,4]", "[1,1;1,1]"])?;
            let mut expr = ArithmeticExpression::with_loader(Box::new(loader));
            expr.add_operand(None)?;
            expr.add_operand(Some(Op::Add))?;
            println!("expression A: {}", expr.print_expression());

            let result = expr.evaluate()?;
            println!("result of A: {}", result);
            // evaluation is pure, the tree is still intact
            println!("A after evaluation: {}", expr.print_expression());
        }
        1 => {
            // FILE-BACKED OPERANDS
            // persist a matrix, then let a file loader pull it back; the loader
            // reopens the file on every call and reads its first line
            let dir = tempfile::tempdir()
                .map_err(|e| MatrixError::Resource(format!("Unable to create temp dir: {}", e)))?;
            let path = dir.path().join("matrix.txt");
            let filename = path.to_str().ok_or_else(|| {
                MatrixError::Resource("temp path is not valid UTF-8".to_string())
            })?;

            let stored: Matrix = "[2,0;0,2]".parse()?;
            save_matrix_to_file(&stored, filename)?;
            info!("matrix saved to {}", filename);

            let mut expr = ArithmeticExpression::with_loader(Box::new(FileLoader::new(filename)));
            expr.add_operand(None)?;
            expr.add_operand(Some(Op::Mul))?;
            println!("expression B: {}", expr.print_expression());
            println!("result of B: {}", expr.evaluate()?);

            // switch the source mid-build and keep growing the same tree
            expr.switch_loader(Box::new(VecLoader::from_texts(&["[1,1;1,1]"])?));
            expr.add_operand(Some(Op::Sub))?;
            println!("B after switching loader: {}", expr.print_expression());
            println!("new result of B: {}", expr.evaluate()?);
        }
        2 => {
            // STEPWISE EVALUATION
            // each step collapses the leftmost-deepest operator with two leaf
            // children, so intermediate states stay visible
            let loader = VecLoader::from_texts(&["[1]", "[2]", "[3]", "[4]"])?;
            let mut expr = ArithmeticExpression::with_loader(Box::new(loader));
            expr.add_operand(None)?;
            expr.add_operand(Some(Op::Add))?;
            expr.add_operand(Some(Op::Mul))?;
            expr.add_operand(Some(Op::Sub))?;
            println!("start: {}", expr.print_expression());

            let mut step = 0;
            while expr.step_evaluate()? {
                step += 1;
                println!("after step {}: {}", step, expr.print_expression());
            }
            println!("total steps: {}", step);
        }
        3 => {
            // COLLECTION AND COMPARATOR-DRIVEN SORT
            let mut vector = ExpressionVector::new();
            for texts in [
                ["[1,2;3,4]", "[1,1;1,1]"],
                ["[0,0;0,0]", "[1,1;1,1]"],
                ["[2,2;2,2]", "[1,1;1,1]"],
                ["[1,0;0,1]", "[0,0;0,0]"],
                ["[3,1;1,3]", "[1,1;1,1]"],
            ] {
                let loader = VecLoader::from_texts(&texts)?;
                let mut expr = ArithmeticExpression::with_loader(Box::new(loader));
                expr.add_operand(None)?;
                expr.add_operand(Some(Op::Add))?;
                vector.add(expr);
            }
            println!("collection before sorting:");
            vector.print_all();

            vector.sort(&DiagonalProductComparer)?;
            println!("\nsorted by diagonal product:");
            vector.print_all();

            vector.sort(&DiagonalProductThenLexComparer)?;
            println!("\nsorted with lexicographic tie-break:");
            vector.print_all();
        }
        4 => {
            // INSPECTING AND SHRINKING A COLLECTION
            let mut vector = ExpressionVector::new();
            for texts in [&["[1]", "[2]"][..], &["[3]", "[4]"], &["[5]", "[6]"]] {
                let loader = VecLoader::from_texts(texts)?;
                let mut expr = ArithmeticExpression::with_loader(Box::new(loader));
                expr.add_operand(None)?;
                expr.add_operand(Some(Op::Add))?;
                vector.add(expr);
            }
            println!(
                "collection of {} expressions, capacity {}",
                vector.len(),
                vector.capacity()
            );

            let second = vector.get(1)?;
            println!("expression 1: {}", second.print_expression());
            for operand in second.get_operands() {
                println!("operand: {}", operand);
            }
            println!("contains [3]: {}", second.find("[3]"));

            let removed = vector.remove(1)?;
            println!("removed: {}", removed.print_expression());
            vector.print_all();
        }
        5 => {
            // INTERACTIVE EXPRESSION FROM THE CONSOLE
            // blocks on stdin; enter matrices like [1,2;3,4] when prompted
            let mut expr = ArithmeticExpression::with_loader(Box::new(ConsoleLoader));
            expr.add_operand(None)?;
            expr.add_operand(Some(Op::Add))?;
            println!("expression: {}", expr.print_expression());
            println!("result: {}", expr.evaluate()?);
        }
        _ => {
            println!("no such example: {}", example);
        }
    }
    Ok(())
}
