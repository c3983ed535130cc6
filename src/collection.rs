/// three-way ordering strategies over expressions: diagonal-product order and its
/// lexicographic tie-break variant
pub mod comparers;

/// growable move-only sequence of expressions with doubling capacity, shifting
/// removal and comparator-driven sort
pub mod expression_vector;
