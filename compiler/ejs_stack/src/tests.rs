use super::*;

#[test]
fn test_deep_recursion_grows_stack() {
    fn nest(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { nest(n - 1) + 1 })
    }

    assert_eq!(nest(100_000), 100_000);
}

#[test]
fn test_passes_result_through() {
    let result: Result<&str, ()> = ensure_sufficient_stack(|| Ok("done"));
    assert_eq!(result, Ok("done"));
}

#[test]
fn test_budget_enter_and_leave() {
    let mut budget = DepthBudget::new(2);
    assert!(budget.enter().is_ok());
    assert!(budget.enter().is_ok());
    assert_eq!(budget.depth(), 2);
    budget.leave();
    assert_eq!(budget.depth(), 1);
}

#[test]
fn test_budget_refuses_past_limit() {
    let mut budget = DepthBudget::new(1);
    assert!(budget.enter().is_ok());
    assert_eq!(budget.enter(), Err(DepthExceeded { limit: 1 }));
    // A refused entry does not count.
    assert_eq!(budget.depth(), 1);
}

#[test]
fn test_default_limit() {
    assert_eq!(DepthBudget::default().limit(), DEFAULT_MAX_DEPTH);
}
