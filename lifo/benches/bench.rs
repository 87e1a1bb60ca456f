use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lifo::{Error, Stack};

fn fill(n: usize) -> Stack<usize> {
    let mut stack = Stack::new();
    (0..n).for_each(|i| stack.push(i));
    stack
}

fn drain(mut stack: Stack<usize>) -> Result<usize, Error> {
    let mut sum = 0;
    while !stack.is_empty() {
        sum += stack.pop()?;
    }
    Ok(sum)
}

/// Alternate pushes and pops, keeping the stack shallow.
fn seesaw(n: usize) -> Result<usize, Error> {
    let mut stack = Stack::new();
    let mut sum = 0;
    for i in 0..n {
        stack.push(i);
        stack.push(i + 1);
        sum += stack.pop()?;
        sum += *stack.peek()?;
    }
    Ok(sum)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let full = fill(100_000);

    c.bench_function("push", |b| b.iter(|| fill(black_box(100_000))));
    c.bench_function("drain", |b| b.iter(|| drain(full.clone()).unwrap()));
    c.bench_function("seesaw", |b| b.iter(|| seesaw(black_box(100_000)).unwrap()));
    c.bench_function("iter", |b| b.iter(|| full.iter().sum::<usize>()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
