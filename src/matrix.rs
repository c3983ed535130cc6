/// closed error taxonomy shared by every fallible matrix and expression operation
pub mod matrix_errors;

/// dense row-major matrix of f64 with checked arithmetic and the bracket literal
/// format [a,b;c,d] for parsing and rendering
pub mod dense_matrix;
