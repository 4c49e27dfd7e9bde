use super::*;
use crate::node::NodeIdx;
use proptest::prelude::*;
use std::collections::HashMap;

const ALPHABET: u8 = 4;

fn symbol_keys(
    max_len: usize,
    min_keys: usize,
    max_keys: usize,
) -> impl Strategy<Value = Vec<Vec<u8>>> {
    proptest::collection::vec(
        proptest::collection::vec(0..ALPHABET, 0..max_len),
        min_keys..max_keys,
    )
}

fn lowercase_words(min_words: usize, max_words: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{0,8}".prop_map(String::from), min_words..max_words)
}

fn build(keys: &[Vec<u8>], capacity: usize) -> CountingTrie {
    let config = TrieConfig::default()
        .with_alphabet_size(ALPHABET as usize)
        .with_initial_capacity(capacity);
    let mut trie = CountingTrie::with_config(config).unwrap();
    for key in keys {
        trie.insert(key);
    }
    trie
}

fn multiplicities(keys: &[Vec<u8>]) -> HashMap<&[u8], usize> {
    let mut counts = HashMap::new();
    for key in keys {
        *counts.entry(key.as_slice()).or_insert(0) += 1;
    }
    counts
}

fn model_prefix_count(keys: &[Vec<u8>], prefix: &[u8]) -> usize {
    keys.iter().filter(|k| k.starts_with(prefix)).count()
}

proptest! {
    #[test]
    fn prop_counts_match_model(keys in symbol_keys(8, 0, 60), queries in symbol_keys(8, 0, 30)) {
        let trie = build(&keys, 1);
        let model = multiplicities(&keys);

        for query in keys.iter().chain(queries.iter()) {
            let expected = model.get(query.as_slice()).copied().unwrap_or(0);
            prop_assert_eq!(trie.count_exact(query), expected);
            prop_assert_eq!(trie.count_prefix(query), model_prefix_count(&keys, query));
        }
    }

    #[test]
    fn prop_every_prefix_of_inserted_keys(keys in symbol_keys(10, 1, 40)) {
        let trie = build(&keys, 2);

        for key in &keys {
            for end in 0..=key.len() {
                let prefix = &key[..end];
                prop_assert_eq!(trie.count_prefix(prefix), model_prefix_count(&keys, prefix));
            }
        }
    }

    #[test]
    fn prop_prefix_monotonicity(keys in symbol_keys(10, 1, 40)) {
        let trie = build(&keys, 16);

        for key in &keys {
            let counts: Vec<_> = (0..=key.len()).map(|end| trie.count_prefix(&key[..end])).collect();
            for pair in counts.windows(2) {
                prop_assert!(pair[0] >= pair[1]);
            }
            prop_assert!(counts[key.len()] >= trie.count_exact(key));
        }
    }

    #[test]
    fn prop_empty_prefix_counts_everything(keys in symbol_keys(6, 0, 80)) {
        let trie = build(&keys, 1);

        prop_assert_eq!(trie.count_prefix(Vec::<u8>::new()), keys.len());
        prop_assert_eq!(trie.len(), keys.len());
        prop_assert_eq!(trie.is_empty(), keys.is_empty());
    }

    #[test]
    fn prop_queries_are_idempotent(keys in symbol_keys(6, 0, 30), queries in symbol_keys(6, 1, 20)) {
        let trie = build(&keys, 4);
        let stats = trie.stats();

        let first: Vec<_> = queries.iter().map(|q| (trie.count_exact(q), trie.count_prefix(q))).collect();
        let second: Vec<_> = queries.iter().map(|q| (trie.count_exact(q), trie.count_prefix(q))).collect();

        prop_assert_eq!(first, second);
        prop_assert_eq!(trie.stats(), stats);
    }

    #[test]
    fn prop_capacity_hint_does_not_affect_counts(keys in symbol_keys(8, 0, 50), capacity in 0usize..64) {
        let small = build(&keys, capacity);
        let large = build(&keys, 4096);

        prop_assert_eq!(small.node_count(), large.node_count());
        prop_assert_eq!(large.stats().growths, 0);
        for key in &keys {
            prop_assert_eq!(small.count_exact(key), large.count_exact(key));
            prop_assert_eq!(small.count_prefix(key), large.count_prefix(key));
        }
    }

    #[test]
    fn prop_node_table_invariants(keys in symbol_keys(8, 0, 50)) {
        let trie = build(&keys, 1);
        let table = &trie.table;

        let total_len: usize = keys.iter().map(Vec::len).sum();
        prop_assert!(trie.node_count() <= total_len + 1);
        prop_assert!(trie.capacity() >= trie.node_count());

        for raw in 0..table.len() {
            let node = table.node(NodeIdx(raw as u32));
            prop_assert!(node.prefix_count >= node.end_count);
            if raw != 0 {
                // Nodes only exist on some insertion path.
                prop_assert!(node.prefix_count > 0);
            }
            let children_total: usize = node
                .children
                .iter()
                .filter_map(|&c| (!c.is_absent()).then(|| table.prefix_count_of(c)))
                .sum();
            prop_assert_eq!(node.prefix_count, children_total + node.end_count);
        }
    }

    #[test]
    fn prop_lowercase_words(words in lowercase_words(0, 50), probe in "[a-z]{0,3}") {
        let trie: CountingTrie = words.iter().map(|w| Lowercase(w)).collect();

        let exact = words.iter().filter(|w| **w == probe).count();
        let prefixed = words.iter().filter(|w| w.starts_with(probe.as_str())).count();
        prop_assert_eq!(trie.count_exact(Lowercase(&probe)), exact);
        prop_assert_eq!(trie.count_prefix(Lowercase(&probe)), prefixed);
        prop_assert_eq!(trie.contains(Lowercase(&probe)), exact > 0);
        prop_assert_eq!(trie.starts_with(Lowercase(&probe)), prefixed > 0);
    }

    #[test]
    fn prop_clear_resets(first in symbol_keys(6, 0, 30), second in symbol_keys(6, 0, 30)) {
        let mut trie = build(&first, 1);
        trie.clear();
        for key in &second {
            trie.insert(key);
        }
        let fresh = build(&second, 1);

        prop_assert_eq!(trie.len(), fresh.len());
        prop_assert_eq!(trie.node_count(), fresh.node_count());
        for key in first.iter().chain(second.iter()) {
            prop_assert_eq!(trie.count_exact(key), fresh.count_exact(key));
            prop_assert_eq!(trie.count_prefix(key), fresh.count_prefix(key));
        }
    }
}
