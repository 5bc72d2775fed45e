use super::*;
use pretty_assertions::assert_eq;

type Host<'a> = Option<&'a (dyn Any + Send + Sync)>;

fn constant(value: &'static str) -> impl NativeFunction {
    move |_: &mut Interpreter, _: Host<'_>, _: &[String]| -> Result<String, EjsError> {
        Ok(value.to_string())
    }
}

#[test]
fn register_lookup_unregister() {
    let mut table = FunctionTable::new();
    assert!(table.is_empty());
    table.register("one", constant("1"));
    assert!(table.contains("one"));
    assert!(table.lookup("one").is_some());
    assert!(table.lookup("two").is_none());
    assert!(table.unregister("one"));
    assert!(!table.unregister("one"));
    assert_eq!(table.len(), 0);
}

#[test]
fn register_replaces() {
    let mut table = FunctionTable::new();
    table.register("f", constant("a"));
    table.register("f", constant("b"));
    assert_eq!(table.len(), 1);
}

#[test]
fn names_are_sorted() {
    let mut table = FunctionTable::new();
    table.register("zeta", constant(""));
    table.register("alpha", constant(""));
    assert_eq!(table.names(), vec!["alpha".to_string(), "zeta".to_string()]);
}

#[test]
fn shared_table_sees_later_registrations() {
    let shared = SharedFunctionTable::default();
    let other = shared.clone();
    assert!(shared.ptr_eq(&other));
    other.write().register("late", constant("x"));
    assert!(shared.lookup("late").is_some());
    assert!(!shared.ptr_eq(&SharedFunctionTable::default()));
}

#[test]
fn shared_table_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SharedFunctionTable>();
}
