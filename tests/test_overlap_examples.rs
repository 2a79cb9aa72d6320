use ssp_solve::core::overlap::overlap;

#[test]
fn test_overlap_spec_examples() {
    let cases: &[(&str, &str, usize)] = &[
        ("", "", 0),
        ("a", "a", 1),
        ("ab", "bc", 1),
        ("bc", "ab", 0),
        ("aaaabaa", "aaaaaaa", 2),
    ];

    for &(a, b, expected) in cases {
        let got = overlap(a, b).unwrap();
        assert_eq!(got, expected, "overlap({a:?}, {b:?})");
    }
}
