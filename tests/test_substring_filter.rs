use ssp_solve::ensure_substring_free;

fn owned(strings: &[&str]) -> Vec<String> {
    strings.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_filter_is_idempotent() {
    let input = owned(&["ab", "abcd", "cd", "xy", "xy"]);
    let once = ensure_substring_free(&input);
    let twice = ensure_substring_free(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_filter_output_is_the_maximal_elements() {
    let input = owned(&["a", "ab", "abc", "b", "z"]);
    let result = ensure_substring_free(&input);
    let result_set: std::collections::HashSet<_> = result.iter().cloned().collect();
    assert_eq!(result_set, owned(&["abc", "z"]).into_iter().collect());
}
