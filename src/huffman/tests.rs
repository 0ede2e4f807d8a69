use super::{build_code_table, build_tree, treecodec, HuffNode};
use crate::error::Error;
use crate::frequency::{count_frequencies, FreqTable};
use crate::Symbol;

fn abracadabra_freqs() -> FreqTable {
    count_frequencies("abracadabra".encode_utf16())
}

fn same_shape(a: &HuffNode, b: &HuffNode) -> bool {
    match (a, b) {
        (HuffNode::Leaf { symbol: s1, .. }, HuffNode::Leaf { symbol: s2, .. }) => s1 == s2,
        (
            HuffNode::Internal {
                left: l1, right: r1, ..
            },
            HuffNode::Internal {
                left: l2, right: r2, ..
            },
        ) => same_shape(l1, l2) && same_shape(r1, r2),
        _ => false,
    }
}

#[test]
fn empty_frequency_map_is_rejected() {
    assert!(matches!(
        build_tree(&FreqTable::new()),
        Err(Error::EmptyInput)
    ));
}

#[test]
fn single_symbol_builds_a_bare_leaf() {
    let tree = build_tree(&count_frequencies("aaaa".encode_utf16())).unwrap();

    assert!(matches!(
        tree,
        HuffNode::Leaf {
            symbol: 97,
            weight: 4
        }
    ));
}

#[test]
fn internal_weights_are_children_sums() {
    fn check(node: &HuffNode) {
        if let HuffNode::Internal {
            weight,
            left,
            right,
        } = node
        {
            assert_eq!(*weight, left.weight() + right.weight());
            check(left);
            check(right);
        }
    }

    check(&build_tree(&abracadabra_freqs()).unwrap());
}

#[test]
fn abracadabra_code_lengths_match_the_merge_order() {
    let table = build_code_table(&build_tree(&abracadabra_freqs()).unwrap());

    assert_eq!(table[&(b'a' as Symbol)].len(), 1);
    assert_eq!(table[&(b'b' as Symbol)].len(), 3);
    assert_eq!(table[&(b'c' as Symbol)].len(), 3);
    assert_eq!(table[&(b'd' as Symbol)].len(), 3);
    assert_eq!(table[&(b'r' as Symbol)].len(), 3);
}

#[test]
fn codes_are_prefix_free() {
    let table = build_code_table(&build_tree(&abracadabra_freqs()).unwrap());

    for (s1, c1) in table.iter() {
        for (s2, c2) in table.iter() {
            if s1 != s2 {
                assert!(
                    !c2.starts_with(c1),
                    "code of {} prefixes code of {}",
                    s1,
                    s2
                );
            }
        }
    }
}

#[test]
fn table_has_one_entry_per_leaf() {
    fn leaves(node: &HuffNode) -> usize {
        match node {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => leaves(left) + leaves(right),
        }
    }

    let tree = build_tree(&abracadabra_freqs()).unwrap();

    assert_eq!(build_code_table(&tree).len(), leaves(&tree));
}

#[test]
fn bare_leaf_code_is_one_bit() {
    let table = build_code_table(&build_tree(&count_frequencies("aaaa".encode_utf16())).unwrap());

    assert_eq!(table[&97], vec![false]);
}

#[test]
fn serialized_bare_leaf_is_flag_plus_symbol() {
    let tree = HuffNode::Leaf {
        symbol: 97,
        weight: 4,
    };

    assert_eq!(treecodec::serialize(&tree), vec![1, 97, 0]);
}

#[test]
fn serialization_emits_the_right_child_first() {
    // 'a' (weight 1) is popped first and becomes the left child; the root
    // emits its right child 'b' before its left child 'a'.
    let tree = build_tree(&count_frequencies("abb".encode_utf16())).unwrap();

    assert_eq!(treecodec::serialize(&tree), vec![0, 1, 98, 0, 1, 97, 0]);
}

#[test]
fn tree_roundtrips_through_the_codec() {
    let tree = build_tree(&abracadabra_freqs()).unwrap();
    let rebuilt = treecodec::deserialize(&treecodec::serialize(&tree)).unwrap();

    assert!(same_shape(&tree, &rebuilt));
}

#[test]
fn bare_leaf_roundtrips_through_the_codec() {
    let tree = HuffNode::Leaf {
        symbol: 0x2603,
        weight: 1,
    };
    let rebuilt = treecodec::deserialize(&treecodec::serialize(&tree)).unwrap();

    assert!(same_shape(&tree, &rebuilt));
}

#[test]
fn wide_tree_roundtrips_through_the_codec() {
    let text = "the quick brown fox jumps over the lazy dog 0123456789";
    let tree = build_tree(&count_frequencies(text.encode_utf16())).unwrap();
    let rebuilt = treecodec::deserialize(&treecodec::serialize(&tree)).unwrap();

    assert!(same_shape(&tree, &rebuilt));
}

#[test]
fn out_of_range_flag_byte_is_malformed() {
    assert!(matches!(
        treecodec::deserialize(&[2, 97, 0]),
        Err(Error::MalformedContainer(_))
    ));
}

#[test]
fn truncated_tree_is_malformed() {
    let mut bytes = treecodec::serialize(&build_tree(&abracadabra_freqs()).unwrap());
    bytes.truncate(bytes.len() - 1);

    assert!(matches!(
        treecodec::deserialize(&bytes),
        Err(Error::MalformedContainer(_))
    ));
}

#[test]
fn empty_tree_bytes_are_malformed() {
    assert!(matches!(
        treecodec::deserialize(&[]),
        Err(Error::MalformedContainer(_))
    ));
}

#[test]
fn identical_input_builds_identical_trees() {
    let t1 = build_tree(&abracadabra_freqs()).unwrap();
    let t2 = build_tree(&abracadabra_freqs()).unwrap();

    assert_eq!(treecodec::serialize(&t1), treecodec::serialize(&t2));
}
