#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    sequences: Vec<Vec<u8>>,
}

fuzz_target!(|input: Input| {
    // Small alphabets force deep repeats and many splits
    let mut tree = gstree::SuffixTree::new();
    let mut expected_leaves = 0;
    for seq in &input.sequences {
        tree.add(seq.iter().map(|b| b % 4)).expect("construction failed");
        expected_leaves += seq.len() + 1;
    }

    tree.verify().expect("invariant violated");
    assert_eq!(tree.stats().leaf_count, expected_leaves.max(1));

    for seq in &input.sequences {
        let folded: Vec<u8> = seq.iter().map(|b| b % 4).collect();
        assert!(tree.contains(&folded));
    }
});
