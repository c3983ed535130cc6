/////////////////////////////TESTS////////////////////////////////////////////////////
/*
comprehensive tests:
First-operand append test (no operator required)
Left-deep growth and rendering test
Missing loader / missing operator failure tests
Operand consumption order test
Full evaluation tests (including empty tree)
Stepwise evaluation count test
Loader switching test (preset and file-backed)
Tree inspection tests (print/find/get_operands)
*/

#[cfg(test)]
mod tests {
    use crate::expression::arithmetic_expression::ArithmeticExpression;
    use crate::expression::expression_tree::Op;
    use crate::expression::operand_loader::{FileLoader, Loader, VecLoader};
    use crate::matrix::dense_matrix::Matrix;
    use crate::matrix::matrix_errors::MatrixError;
    use std::fs;

    fn preset(texts: &[&str]) -> Box<dyn Loader> {
        Box::new(VecLoader::from_texts(texts).unwrap())
    }

    #[test]
    fn test_first_operand_needs_no_operator() {
        let mut expr = ArithmeticExpression::with_loader(preset(&["[1,2]"]));
        expr.add_operand(None).unwrap();
        assert!(!expr.is_empty());
        assert_eq!(expr.print_expression(), "[1,2]");
    }

    #[test]
    fn test_operator_on_first_operand_is_ignored() {
        let mut expr = ArithmeticExpression::with_loader(preset(&["[1,2]"]));
        expr.add_operand(Some(Op::Mul)).unwrap();
        assert_eq!(expr.print_expression(), "[1,2]");
        assert_eq!(expr.operator_count(), 0);
    }

    #[test]
    fn test_left_deep_growth() {
        let mut expr = ArithmeticExpression::with_loader(preset(&["[1]", "[2]", "[3]"]));
        expr.add_operand(None).unwrap();
        expr.add_operand(Some(Op::Add)).unwrap();
        expr.add_operand(Some(Op::Sub)).unwrap();
        assert_eq!(expr.print_expression(), "( ( [1] + [2] ) - [3] )");
    }

    #[test]
    fn test_add_operand_without_loader_fails() {
        let mut expr = ArithmeticExpression::new();
        let result = expr.add_operand(None);
        assert!(matches!(result, Err(MatrixError::Arithmetic(_))));
        assert!(result.unwrap_err().to_string().contains("Loader not set"));
    }

    #[test]
    fn test_missing_operator_fails_and_keeps_tree() {
        let mut expr = ArithmeticExpression::with_loader(preset(&["[1]", "[2]", "[3]"]));
        expr.add_operand(None).unwrap();

        let result = expr.add_operand(None);
        assert!(matches!(result, Err(MatrixError::Arithmetic(_))));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Operator not provided for operand addition")
        );
        assert_eq!(expr.print_expression(), "[1]");

        // the failed call still consumed [2] from the source
        expr.add_operand(Some(Op::Add)).unwrap();
        assert_eq!(expr.print_expression(), "( [1] + [3] )");
    }

    #[test]
    fn test_loader_parse_and_exhaustion_errors_propagate() {
        let mut expr = ArithmeticExpression::with_loader(preset(&["[1]"]));
        expr.add_operand(None).unwrap();
        assert!(matches!(
            expr.add_operand(Some(Op::Add)),
            Err(MatrixError::Resource(_))
        ));
    }

    #[test]
    fn test_end_to_end_addition() {
        let mut expr =
            ArithmeticExpression::with_loader(preset(&["[1,2;3,4]", "[1,1;1,1]"]));
        expr.add_operand(None).unwrap();
        expr.add_operand(Some(Op::Add)).unwrap();

        assert_eq!(expr.print_expression(), "( [1,2;3,4] + [1,1;1,1] )");
        assert_eq!(
            expr.evaluate().unwrap(),
            Matrix::from_text("[2,3;4,5]").unwrap()
        );
        // evaluation is pure, the tree still renders unreduced
        assert_eq!(expr.print_expression(), "( [1,2;3,4] + [1,1;1,1] )");
    }

    #[test]
    fn test_evaluate_empty_tree_fails() {
        let expr = ArithmeticExpression::new();
        let result = expr.evaluate();
        assert!(matches!(result, Err(MatrixError::Arithmetic(_))));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Expression tree is empty")
        );
    }

    #[test]
    fn test_evaluation_errors_propagate_through_container() {
        let mut expr = ArithmeticExpression::with_loader(preset(&["[1,2]", "[1,2;3,4]"]));
        expr.add_operand(None).unwrap();
        expr.add_operand(Some(Op::Add)).unwrap();
        assert!(matches!(
            expr.evaluate(),
            Err(MatrixError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_step_evaluate_true_exactly_operator_count_times() {
        let mut expr =
            ArithmeticExpression::with_loader(preset(&["[1]", "[2]", "[3]", "[4]"]));
        expr.add_operand(None).unwrap();
        expr.add_operand(Some(Op::Add)).unwrap();
        expr.add_operand(Some(Op::Mul)).unwrap();
        expr.add_operand(Some(Op::Sub)).unwrap();

        let expected = expr.evaluate().unwrap();
        let operators = expr.operator_count();
        assert_eq!(operators, 3);

        let mut reductions = 0;
        while expr.step_evaluate().unwrap() {
            reductions += 1;
        }
        assert_eq!(reductions, operators);
        assert!(!expr.step_evaluate().unwrap());
        assert_eq!(expr.print_expression(), expected.to_string());
    }

    #[test]
    fn test_step_evaluate_on_empty_and_leaf_trees() {
        let mut empty = ArithmeticExpression::new();
        assert!(!empty.step_evaluate().unwrap());

        let mut leaf = ArithmeticExpression::with_loader(preset(&["[7]"]));
        leaf.add_operand(None).unwrap();
        assert!(!leaf.step_evaluate().unwrap());
    }

    #[test]
    fn test_inspection_on_empty_tree() {
        let expr = ArithmeticExpression::new();
        assert_eq!(expr.print_expression(), "");
        assert!(!expr.find("[1]"));
        assert!(expr.get_operands().is_empty());
        assert_eq!(expr.operator_count(), 0);
    }

    #[test]
    fn test_find_and_get_operands() {
        let mut expr = ArithmeticExpression::with_loader(preset(&["[1]", "[2]", "[3]"]));
        expr.add_operand(None).unwrap();
        expr.add_operand(Some(Op::Add)).unwrap();
        expr.add_operand(Some(Op::Mul)).unwrap();

        assert!(expr.find("[2]"));
        assert!(!expr.find("[4]"));
        let rendered: Vec<String> =
            expr.get_operands().iter().map(|m| m.to_string()).collect();
        assert_eq!(rendered, vec!["[1]", "[2]", "[3]"]);
    }

    #[test]
    fn test_switch_loader_mid_build() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("operand.txt");
        fs::write(&path, "[5,5]\n").unwrap();

        let mut expr = ArithmeticExpression::with_loader(Box::new(FileLoader::new(&path)));
        expr.add_operand(None).unwrap();

        let previous = expr.switch_loader(preset(&["[1,1]"]));
        assert!(previous.is_some());
        expr.add_operand(Some(Op::Add)).unwrap();

        assert_eq!(expr.print_expression(), "( [5,5] + [1,1] )");
        assert_eq!(
            expr.evaluate().unwrap(),
            Matrix::from_text("[6,6]").unwrap()
        );
    }
}
