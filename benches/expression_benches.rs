use RustedMatExpr::expression::arithmetic_expression::ArithmeticExpression;
use RustedMatExpr::expression::expression_tree::Op;
use RustedMatExpr::expression::operand_loader::VecLoader;
use RustedMatExpr::matrix::dense_matrix::Matrix;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn chain_expression(operands: usize) -> ArithmeticExpression {
    let texts: Vec<String> = (0..operands)
        .map(|k| format!("[{0},{0};{0},{0}]", (k % 7) + 1))
        .collect();
    let refs: Vec<&str> = texts.iter().map(|t| t.as_str()).collect();
    let loader = VecLoader::from_texts(&refs).unwrap();
    let mut expr = ArithmeticExpression::with_loader(Box::new(loader));
    expr.add_operand(None).unwrap();
    for _ in 1..operands {
        expr.add_operand(Some(Op::Add)).unwrap();
    }
    expr
}

fn bench_parse_render(c: &mut Criterion) {
    let text = "[1.5,-2.25,3;4,5.125,-6;7,8,9.75]";
    c.bench_function("parse_render", |b| {
        b.iter(|| {
            let matrix = Matrix::from_text(black_box(text)).unwrap();
            black_box(matrix.to_string())
        })
    });
}

fn bench_evaluate_chain(c: &mut Criterion) {
    c.bench_function("evaluate_chain_16", |b| {
        b.iter(|| {
            let expr = chain_expression(16);
            black_box(expr.evaluate().unwrap())
        })
    });
}

fn bench_stepwise_chain(c: &mut Criterion) {
    c.bench_function("stepwise_chain_16", |b| {
        b.iter(|| {
            let mut expr = chain_expression(16);
            while expr.step_evaluate().unwrap() {}
            black_box(expr.print_expression())
        })
    });
}

criterion_group!(
    benches,
    bench_parse_render,
    bench_evaluate_chain,
    bench_stepwise_chain
);
criterion_main!(benches);
