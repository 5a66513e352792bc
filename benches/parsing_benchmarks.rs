use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use armscript::interpreter::Interpreter;

/// Generate script content of different patterns for benchmarking
fn generate_script(lines: usize, pattern: &str) -> String {
    let mut content = String::from("Robot b1\nb1.iniciar()\n");

    match pattern {
        "attribute_heavy" => {
            for i in 0..lines {
                content.push_str(&format!("b1.velocidad({})\n", i % 361));
                content.push_str(&format!("b1.base({})\n", (i * 7) % 361));
            }
        }
        "loop_heavy" => {
            for i in 0..lines {
                content.push_str("b1.repetir(5)\n");
                content.push_str(&format!("b1.cuerpo({})\n", i % 361));
                content.push_str("b1.cerrarGarra()\n");
                content.push_str("b1.finRepetir()\n");
            }
        }
        "error_heavy" => {
            for i in 0..lines {
                match i % 3 {
                    0 => content.push_str("b1.garra(999)\n"),
                    1 => content.push_str("r9.velocidad(50)\n"),
                    2 => content.push_str("esto no es un comando\n"),
                    _ => unreachable!(),
                }
            }
        }
        "mixed" => {
            for i in 0..lines {
                match i % 4 {
                    0 => content.push_str(&format!("b1.velocidad({})\n", i % 361)),
                    1 => content.push_str("b1.cerrarGarra()\n"),
                    2 => content.push_str(&format!("b1.base = {}\n", (i * 3) % 361)),
                    3 => content.push_str("b1.print()\n"),
                    _ => unreachable!(),
                }
            }
        }
        _ => unreachable!(),
    }

    content
}

fn bench_tokenization(c: &mut Criterion) {
    let interpreter = Interpreter::new().expect("build interpreter");
    let mut group = c.benchmark_group("tokenization");

    for pattern in ["attribute_heavy", "mixed"] {
        let content = generate_script(500, pattern);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pattern),
            &content,
            |b, content| {
                b.iter(|| {
                    for line in content.lines() {
                        let _ = black_box(interpreter.tokenize(line));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_execution(c: &mut Criterion) {
    let interpreter = Interpreter::new().expect("build interpreter");
    let mut group = c.benchmark_group("execution");

    for pattern in ["attribute_heavy", "loop_heavy", "error_heavy", "mixed"] {
        let content = generate_script(200, pattern);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pattern),
            &content,
            |b, content| {
                b.iter(|| black_box(interpreter.run(content)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_tokenization, bench_execution);
criterion_main!(benches);
