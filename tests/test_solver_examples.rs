use ssp_solve::{ca, gha, greedy, tgreedy, HierarchicalGraph};

fn owned(strings: &[&str]) -> Vec<String> {
    strings.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_greedy_deterministic_examples() {
    assert_eq!(greedy(&owned(&["cde", "bcd", "ab"])).unwrap(), "abcde");
    assert_eq!(greedy(&owned(&["a", "b", "c"])).unwrap(), "abc");
    assert_eq!(greedy(&owned(&["abc"])).unwrap(), "abc");
}

#[test]
fn test_tgreedy_length_examples() {
    let strings = owned(&["ab", "bc", "ca", "de", "ef", "fd"]);
    let result = tgreedy(&strings).unwrap();
    assert_eq!(result.len(), 8);
    for s in &strings {
        assert!(result.contains(s.as_str()), "{result} missing {s}");
    }

    assert_eq!(tgreedy(&owned(&["a", "b", "c"])).unwrap().len(), 3);
}

#[test]
fn test_gha_from_trivial_length_example() {
    let strings = owned(&["abc", "bcd", "cde"]);
    let result = gha(&strings).unwrap();
    assert_eq!(result.len(), 5);
    for s in &strings {
        assert!(result.contains(s.as_str()));
    }
}

#[test]
fn test_gha_order_determinism() {
    let forward = owned(&["ccaeae", "eaeaea", "aeaecc"]);
    let reordered = owned(&["ccaeae", "aeaecc", "eaeaea"]);
    assert_eq!(gha(&forward).unwrap(), "eaeaeaccaeaecc");
    assert_eq!(gha(&reordered).unwrap(), "eaeaeaccaeaecc");
}

#[test]
fn test_trivial_graph_length_depends_on_input_order() {
    let cases: &[(&[&str], usize)] = &[
        (&["abc", "bcd", "cde"], 5),
        (&["cde", "bcd", "abc"], 9),
        (&["abcde", "dedef", "fabc"], 11),
    ];

    for &(strings, expected_len) in cases {
        let strings = owned(strings);
        let mut hg = HierarchicalGraph::new(&strings);
        hg.construct_trivial_graph(&strings).unwrap();
        let result = hg.to_superstring().unwrap();
        assert_eq!(result.len(), expected_len, "trivial graph for {strings:?}");
        for s in &strings {
            assert!(result.contains(s.as_str()), "{result} missing {s}");
        }
    }
}

#[test]
fn test_gha_length_examples() {
    let cases: &[(&[&str], usize)] = &[
        (&["abc", "bcd", "cde"], 5),
        (&["cde", "bcd", "abc"], 5),
        (&["abcde", "dedef", "fabc"], 9),
        (&["GTCCC", "TGCCA", "CCCGA", "ATGCC", "CCGAA"], 13),
    ];

    for &(strings, expected_len) in cases {
        let strings = owned(strings);
        let result = gha(&strings).unwrap();
        assert_eq!(result.len(), expected_len, "gha for {strings:?}");
        for s in &strings {
            assert!(result.contains(s.as_str()), "{result} missing {s}");
        }
    }
}

#[test]
fn test_ca_contains_every_input_across_examples() {
    for strings in [
        owned(&["abc", "bcd", "cde"]),
        owned(&["abcde", "dedef", "fabc"]),
        owned(&["GAA", "TGG", "GGA"]),
    ] {
        let result = ca(&strings).unwrap();
        for s in &strings {
            assert!(result.contains(s.as_str()), "{result} missing {s}");
        }
    }
}
