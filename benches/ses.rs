use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use weave_diff::intern::InternedInput;
use weave_diff::sink::Counter;
use weave_diff::{CostModel, Differ};

/// Deterministic pseudo random text, so runs are comparable.
fn text(len: usize, seed: u64) -> String {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            char::from(b'a' + (state >> 59) as u8 % 8)
        })
        .collect()
}

/// `before` with every `stride`th character replaced.
fn mutate(before: &str, stride: usize) -> String {
    before
        .chars()
        .enumerate()
        .map(|(i, c)| if i % stride == 0 { 'z' } else { c })
        .collect()
}

fn character_diffs(c: &mut Criterion) {
    let mut group = c.benchmark_group("character_diff");
    for len in [64, 256, 1024] {
        let before = text(len, 42);
        let inputs = [
            ("similar", mutate(&before, 16)),
            ("unrelated", text(len, 7)),
        ];
        for (kind, after) in &inputs {
            let input = InternedInput::new(before.as_str(), after.as_str());
            for cost_model in [CostModel::Indel, CostModel::Levenshtein] {
                group.bench_with_input(
                    BenchmarkId::new(format!("weave_diff-{cost_model:?}-{kind}"), len),
                    &input,
                    |b, input| {
                        let mut differ = Differ::new(cost_model);
                        b.iter(|| black_box(differ.diff(input, Counter::default()).total()))
                    },
                );
            }
            group.bench_with_input(
                BenchmarkId::new(format!("similar-{kind}"), len),
                &(before.as_str(), after.as_str()),
                |b, &(before, after)| {
                    b.iter(|| {
                        let diff = similar::TextDiff::from_chars(before, after);
                        black_box(diff.ops().len())
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, character_diffs);
criterion_main!(benches);
