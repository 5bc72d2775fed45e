//! Native function bindings.
//!
//! Scripts call host code by name. Names are resolved when the call is
//! evaluated, not when the script is read, so a host may register or
//! remove functions between (or during) evaluations.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use ejs_diagnostic::EjsError;

use crate::Interpreter;

/// Opaque value a host attaches to an interpreter.
pub type HostContext = Arc<dyn Any + Send + Sync>;

/// A host function callable from scripts.
///
/// Arguments arrive already evaluated, in source order, as strings.
pub trait NativeFunction: Send + Sync {
    fn call(
        &self,
        interp: &mut Interpreter,
        host: Option<&(dyn Any + Send + Sync)>,
        args: &[String],
    ) -> Result<String, EjsError>;
}

impl<F> NativeFunction for F
where
    F: Fn(&mut Interpreter, Option<&(dyn Any + Send + Sync)>, &[String]) -> Result<String, EjsError>
        + Send
        + Sync,
{
    fn call(
        &self,
        interp: &mut Interpreter,
        host: Option<&(dyn Any + Send + Sync)>,
        args: &[String],
    ) -> Result<String, EjsError> {
        self(interp, host, args)
    }
}

/// Name to function map.
#[derive(Default, Clone)]
pub struct FunctionTable {
    functions: FxHashMap<String, Arc<dyn NativeFunction>>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any previous binding.
    pub fn register(&mut self, name: impl Into<String>, function: impl NativeFunction + 'static) {
        self.functions.insert(name.into(), Arc::new(function));
    }

    /// Bind an already shared function.
    pub fn register_shared(&mut self, name: impl Into<String>, function: Arc<dyn NativeFunction>) {
        self.functions.insert(name.into(), function);
    }

    /// Remove `name`. Returns whether it was bound.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.functions.remove(name).is_some()
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<dyn NativeFunction>> {
        self.functions.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for FunctionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionTable")
            .field("names", &self.names())
            .finish()
    }
}

/// A function table shared between a host and any number of interpreters.
///
/// Uses `Arc<RwLock<_>>` so registrations made through one handle are seen
/// by every interpreter holding a clone.
pub struct SharedFunctionTable(Arc<parking_lot::RwLock<FunctionTable>>);

impl SharedFunctionTable {
    pub fn new(table: FunctionTable) -> Self {
        SharedFunctionTable(Arc::new(parking_lot::RwLock::new(table)))
    }

    pub fn read(&self) -> parking_lot::RwLockReadGuard<'_, FunctionTable> {
        self.0.read()
    }

    pub fn write(&self) -> parking_lot::RwLockWriteGuard<'_, FunctionTable> {
        self.0.write()
    }

    /// Resolve `name`, releasing the lock before returning.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn NativeFunction>> {
        self.0.read().lookup(name)
    }

    /// Whether two handles share the same underlying table.
    pub fn ptr_eq(&self, other: &SharedFunctionTable) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for SharedFunctionTable {
    fn default() -> Self {
        Self::new(FunctionTable::new())
    }
}

impl Clone for SharedFunctionTable {
    fn clone(&self) -> Self {
        SharedFunctionTable(Arc::clone(&self.0))
    }
}

impl fmt::Debug for SharedFunctionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedFunctionTable({:?})", &*self.0.read())
    }
}

#[cfg(test)]
mod tests;
