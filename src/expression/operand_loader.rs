//! Pluggable operand sources. An expression container pulls each new matrix from a
//! `Loader`, so the same building code works whether operands come from the console,
//! from a file, or from a preset queue prepared in advance.

use crate::matrix::dense_matrix::Matrix;
use crate::matrix::matrix_errors::MatrixError;
use log::info;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

/// Supplier of matrix operands for expression building.
pub trait Loader {
    /// Produce the next matrix operand.
    ///
    /// Fails with `Resource` when the underlying source cannot be read and with
    /// the usual parse errors when the source text is not a valid matrix literal.
    fn next_operand(&mut self) -> Result<Matrix, MatrixError>;

    /// Loader name for diagnostics/logging.
    fn name(&self) -> &str {
        "unnamed_loader"
    }
}

/// Interactive loader reading one matrix literal per line from stdin.
pub struct ConsoleLoader;

impl Loader for ConsoleLoader {
    fn next_operand(&mut self) -> Result<Matrix, MatrixError> {
        print!("Enter matrix in format [a,b;c,d]: ");
        let _ = io::stdout().flush();
        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| MatrixError::Resource(format!("Failed to read console input: {}", e)))?;
        Matrix::from_text(&input)
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// File-backed loader. Each call opens the named file, reads its first line as a
/// matrix literal and releases the handle again, so the file stays closed between
/// calls and repeated calls yield the same operand.
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileLoader { path: path.into() }
    }
}

impl Loader for FileLoader {
    fn next_operand(&mut self) -> Result<Matrix, MatrixError> {
        info!("loading operand from {}", self.path.display());
        let mut line = String::new();
        {
            let file = File::open(&self.path).map_err(|_| {
                MatrixError::Resource(format!("Unable to open file: {}", self.path.display()))
            })?;
            BufReader::new(file).read_line(&mut line).map_err(|e| {
                MatrixError::Resource(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
        }
        Matrix::from_text(&line)
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// Loader over a prepared queue of matrices. Handy for demos and tests where the
/// operand sequence is known up front.
pub struct VecLoader {
    queue: VecDeque<Matrix>,
}

impl VecLoader {
    pub fn new(operands: Vec<Matrix>) -> Self {
        VecLoader {
            queue: VecDeque::from(operands),
        }
    }

    /// Build the queue straight from matrix literals.
    pub fn from_texts(texts: &[&str]) -> Result<VecLoader, MatrixError> {
        let mut operands = Vec::with_capacity(texts.len());
        for text in texts {
            operands.push(Matrix::from_text(text)?);
        }
        Ok(VecLoader::new(operands))
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl Loader for VecLoader {
    fn next_operand(&mut self) -> Result<Matrix, MatrixError> {
        self.queue.pop_front().ok_or_else(|| {
            MatrixError::Resource("Preset operand queue is exhausted".to_string())
        })
    }

    fn name(&self) -> &str {
        "preset"
    }
}
