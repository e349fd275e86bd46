use super::*;

#[test]
fn passes_through_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| 7), 7);
}

#[test]
fn passes_through_errors() {
    let result: Result<i64, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
    assert_eq!(result, Err("boom".to_string()));
}

#[test]
fn deep_recursion_does_not_overflow() {
    fn countdown(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { countdown(n - 1) + 1 })
    }

    // Far deeper than a default 8MB main-thread stack would allow unguarded.
    assert_eq!(countdown(200_000), 200_000);
}
