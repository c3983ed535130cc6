// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License

use crate::matrix::dense_matrix::Matrix;
use crate::matrix::matrix_errors::MatrixError;

#[allow(dead_code)]
pub fn matrix_examples(example: usize) -> Result<(), MatrixError> {
    match example {
        0 => {
            // PARSING AND RENDERING
            let parsed = Matrix::from_text("[1.5, -2; 3, 4]")?;
            println!("parsed {} rows x {} cols", parsed.rows(), parsed.cols());
            // rendering is the exact inverse of the parse grammar
            println!("canonical form: {}", parsed);
            println!("cell (1,0) = {}", parsed.get(1, 0)?);

            let empty = Matrix::from_text("[]")?;
            println!("empty literal parses to {}x{}: {}", empty.rows(), empty.cols(), empty);
        }
        1 => {
            // CHECKED ARITHMETIC AND THE ERROR TAXONOMY
            let a = Matrix::from_text("[1,2;3,4]")?;
            let b = Matrix::from_text("[1,1;1,1]")?;
            println!("a + b = {}", a.checked_add(&b)?);
            println!("a - b = {}", a.checked_sub(&b)?);
            println!("a * b = {}", a.checked_mul(&b)?);
            println!("a / b = {}", a.checked_div(&b)?);

            // every failure mode reports its kind in the message
            let narrow = Matrix::from_text("[1,2]")?;
            if let Err(e) = a.checked_add(&narrow) {
                println!("mismatched shapes: {}", e);
            }
            let huge = Matrix::from_scalar(f64::MAX);
            if let Err(e) = huge.checked_add(&huge) {
                println!("overflow: {}", e);
            }
            // divisors below the epsilon threshold count as zero
            if let Err(e) = a.checked_div(&Matrix::from_text("[1,1;1,1e-12]")?) {
                println!("tiny divisor: {}", e);
            }
            if let Err(e) = Matrix::from_scalar(1.0).checked_div(&Matrix::from_scalar(0.0)) {
                println!("zero divisor: {}", e);
            }
        }
        2 => {
            // ORDERING BY CELL SUM VS EXACT EQUALITY
            let a = Matrix::from_text("[1,3]")?; // sum 4
            let b = Matrix::from_text("[2;2]")?; // sum 4, different shape
            println!("a <= b: {}", a <= b);
            println!("a >= b: {}", a >= b);
            println!("a == b: {}", a == b);

            let c = Matrix::from_text("[10,10]")?;
            println!("a < c: {}", a < c);
        }
        _ => {
            println!("no such example: {}", example);
        }
    }
    Ok(())
}
