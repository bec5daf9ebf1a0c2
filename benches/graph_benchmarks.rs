use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use syntaxgraph::graph::{Edge, Graph, Node};
use syntaxgraph::SyntaxRegistry;

fn chain_text(size: usize) -> String {
    (0..size)
        .map(|i| format!("Step{} -> Step{}", i, i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

fn tree_text(depth: usize, fanout: usize) -> String {
    fn walk(prefix: &str, level: usize, depth: usize, fanout: usize, out: &mut Vec<String>) {
        out.push(format!("{}{}", "  ".repeat(level), prefix));
        if level + 1 < depth {
            for i in 0..fanout {
                walk(&format!("{}.{}", prefix, i), level + 1, depth, fanout, out);
            }
        }
    }
    let mut lines = Vec::new();
    walk("root", 0, depth, fanout, &mut lines);
    lines.join("\n")
}

/// Benchmark node and edge insertion throughput
fn bench_graph_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_insertion");

    for size in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut graph = Graph::new("bench");
                let mut previous = Node::new("n0");
                for i in 1..size {
                    let next = Node::new(format!("n{}", i));
                    graph.add_edge(Edge::between(&previous, &next, "basic"));
                    previous = next;
                }
                graph
            });
        });
    }
    group.finish();
}

/// Benchmark arrow-list parsing
fn bench_arrow_parse(c: &mut Criterion) {
    let registry = SyntaxRegistry::with_builtin();
    let mut group = c.benchmark_group("arrow_parse");

    for size in [100, 500].iter() {
        let text = chain_text(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| registry.parse("basic_graph", text));
        });
    }
    group.finish();
}

/// Benchmark hierarchy parse and export
fn bench_hierarchy_round_trip(c: &mut Criterion) {
    let registry = SyntaxRegistry::with_builtin();
    let text = tree_text(5, 4);

    c.bench_function("hierarchy_parse", |b| {
        b.iter(|| registry.parse("hierarchy", &text))
    });

    let graph = registry.parse("hierarchy", &text).unwrap_or_default();
    c.bench_function("hierarchy_export", |b| {
        b.iter(|| registry.export("hierarchy", &graph))
    });
}

criterion_group!(
    benches,
    bench_graph_insertion,
    bench_arrow_parse,
    bench_hierarchy_round_trip
);
criterion_main!(benches);
