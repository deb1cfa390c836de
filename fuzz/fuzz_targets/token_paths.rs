#![no_main]

use libfuzzer_sys::fuzz_target;
use weave_diff::intern::Token;
use weave_diff::{diff_with_tokens, CostModel, DiffOperation};

/// Drives the token level API with a tiny alphabet, which produces many
/// equal-cost alignments and exercises the tie-breaks of the split search.
fn do_fuzz(data: &[u8]) {
    if data.len() < 2 {
        return;
    }
    let before_len = (data[0] as usize % 64).min(data.len() - 2);
    let rest = &data[2..];
    let (before, after) = rest.split_at(before_len);
    let before: Vec<Token> = before.iter().map(|&b| Token::from(b as u32 % 3)).collect();
    let after: Vec<Token> = after
        .iter()
        .take(64)
        .map(|&b| Token::from(b as u32 % 3))
        .collect();

    for cost_model in [CostModel::Indel, CostModel::Levenshtein] {
        let mut x = 0;
        let mut y = 0;
        diff_with_tokens(
            cost_model,
            &before,
            &after,
            |operation: DiffOperation, token: Token| match operation {
                DiffOperation::Equality => {
                    assert_eq!(before[y], token);
                    assert_eq!(after[x], token);
                    x += 1;
                    y += 1;
                }
                DiffOperation::Deletion => {
                    assert_eq!(before[y], token);
                    y += 1;
                }
                DiffOperation::Insertion => {
                    assert_eq!(after[x], token);
                    x += 1;
                }
            },
        );
        assert_eq!((x, y), (after.len(), before.len()));
    }
}

fuzz_target!(|data: &[u8]| {
    do_fuzz(data);
});
