#![no_main]

use libfuzzer_sys::arbitrary;
use libfuzzer_sys::fuzz_target;
use weave_diff::intern::InternedInput;
use weave_diff::sink::Counter;
use weave_diff::{apply, diff, CostModel, EditScriptBuilder, Sink};

#[derive(arbitrary::Arbitrary, Debug)]
struct Input<'a> {
    before: &'a str,
    after: &'a str,
}

/// Both cost models must produce scripts that:
/// - replay over `before` into exactly `after`
/// - account for every atom of both sides
fn do_fuzz(Input { before, after }: Input<'_>) {
    // the sweep is quadratic
    if before.len() > 512 || after.len() > 512 {
        return;
    }
    let input = InternedInput::new(before, after);
    let source: Vec<char> = before.chars().collect();
    let target: Vec<char> = after.chars().collect();

    for cost_model in [CostModel::Indel, CostModel::Levenshtein] {
        let counter = diff(
            cost_model,
            &input,
            EditScriptBuilder::new(&input).with_counter(),
        );
        assert_eq!(
            (counter.equalities + counter.deletions) as usize,
            source.len()
        );
        assert_eq!(
            (counter.equalities + counter.insertions) as usize,
            target.len()
        );
        assert_eq!(apply(&source, &counter.wrapped), Ok(target.clone()));
    }

    let changes = diff(CostModel::Indel, &input, Counter::default());
    assert!(changes.total() <= source.len() + target.len());
}

fuzz_target!(|input: Input<'_>| {
    do_fuzz(input);
});
