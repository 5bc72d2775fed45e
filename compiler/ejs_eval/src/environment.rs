//! Variable scope frames.
//!
//! An interpreter keeps a stack of frames. Frame 0 is the global frame and
//! lives as long as the interpreter; every other frame belongs to one
//! scoped evaluation or to an explicit host block.
//!
//! Name resolution only ever consults two frames: the current (innermost)
//! one and the global one. Frames in between are invisible.

use rustc_hash::FxHashMap;

use ejs_diagnostic::EjsError;

use crate::errors;

/// The value of a declared variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VarValue {
    /// Declared with a bare `var name`.
    Undefined,
    Defined(String),
}

impl VarValue {
    /// The string value, or `None` when undefined.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            VarValue::Undefined => None,
            VarValue::Defined(value) => Some(value),
        }
    }

    /// The value as read by a script; undefined reads as `""`.
    #[inline]
    pub fn to_script_string(&self) -> String {
        self.as_str().unwrap_or_default().to_string()
    }
}

/// A single frame of name to value bindings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scope {
    bindings: FxHashMap<String, VarValue>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&VarValue> {
        self.bindings.get(name)
    }

    #[inline]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut VarValue> {
        self.bindings.get_mut(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Bind `name`, replacing any existing binding.
    #[inline]
    pub fn insert(&mut self, name: impl Into<String>, value: VarValue) {
        self.bindings.insert(name.into(), value);
    }

    /// Convenience for binding a defined string value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.insert(name, VarValue::Defined(value.into()));
    }

    pub fn remove(&mut self, name: &str) -> Option<VarValue> {
        self.bindings.remove(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VarValue)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Handle to an open frame. Frames close in reverse order of opening.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(usize);

impl FrameId {
    pub const GLOBAL: FrameId = FrameId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// Stack of frames with the global frame at the bottom.
#[derive(Clone, Debug)]
pub struct ScopeStack {
    /// Never empty: `frames[0]` is the global frame.
    frames: Vec<Scope>,
}

impl ScopeStack {
    pub fn new(global: Scope) -> Self {
        ScopeStack {
            frames: vec![global],
        }
    }

    /// Number of open frames, including the global one.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn current_id(&self) -> FrameId {
        FrameId(self.frames.len() - 1)
    }

    /// Open a new empty frame and make it current.
    pub fn push(&mut self) -> FrameId {
        self.frames.push(Scope::new());
        self.current_id()
    }

    /// Close `frame`, which must be the current non-global frame.
    pub fn pop(&mut self, frame: FrameId) -> Result<Scope, EjsError> {
        if frame == FrameId::GLOBAL || frame != self.current_id() {
            return Err(errors::invalid_frame(frame.0, self.current_id().0));
        }
        self.frames
            .pop()
            .ok_or_else(|| errors::invalid_frame(frame.0, 0))
    }

    /// Close `frame` and every frame opened after it. The global frame is
    /// never closed.
    pub fn unwind_to(&mut self, frame: FrameId) {
        self.frames.truncate(frame.0.max(1));
    }

    #[inline]
    pub fn global(&self) -> &Scope {
        &self.frames[0]
    }

    #[inline]
    pub fn global_mut(&mut self) -> &mut Scope {
        &mut self.frames[0]
    }

    #[inline]
    pub fn current(&self) -> &Scope {
        &self.frames[self.frames.len() - 1]
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut Scope {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Resolve `name` in the current frame, then the global frame.
    pub fn lookup(&self, name: &str) -> Option<&VarValue> {
        self.current().get(name).or_else(|| self.global().get(name))
    }

    /// Mutable counterpart of [`lookup`](Self::lookup).
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut VarValue> {
        let last = self.frames.len() - 1;
        if self.frames[last].contains(name) {
            return self.frames[last].get_mut(name);
        }
        self.frames[0].get_mut(name)
    }

    /// Assignment semantics: update the current frame if it already binds
    /// `name`, otherwise write the global frame.
    pub fn assign(&mut self, name: &str, value: String) {
        let target = if self.current().contains(name) {
            self.current_mut()
        } else {
            self.global_mut()
        };
        target.insert(name, VarValue::Defined(value));
    }

    /// Bind `name` in the current frame.
    pub fn define_local(&mut self, name: &str, value: VarValue) {
        self.current_mut().insert(name, value);
    }

    /// Drop every local frame and hand back the global one.
    pub fn into_global(mut self) -> Scope {
        self.frames.truncate(1);
        self.frames.pop().unwrap_or_default()
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new(Scope::new())
    }
}
