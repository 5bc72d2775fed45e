//! RAII guards over interpreter state.
//!
//! [`ScopedInterpreter`] opens a local frame when created and closes it when
//! dropped, so the frame is released on every exit path, errors and panics
//! included. Any frames a native function opened above it and left open
//! are closed as well. The nesting level and the active call frame are
//! held the same way, so a native that panics into a host's
//! `catch_unwind` leaves the interpreter as it found it.

use std::ops::{Deref, DerefMut};

use ejs_diagnostic::EjsError;
use tracing::trace;

use super::{CallFrame, Interpreter};
use crate::environment::FrameId;
use crate::errors;

pub struct ScopedInterpreter<'a> {
    interpreter: &'a mut Interpreter,
    frame: FrameId,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.scopes.unwind_to(self.frame);
        trace!(frame = self.frame.index(), "scope closed");
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl ScopedInterpreter<'_> {
    /// The frame this guard owns.
    pub fn frame(&self) -> FrameId {
        self.frame
    }
}

impl Interpreter {
    /// Open a local frame that closes when the returned guard drops.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        let frame = self.scopes.push();
        trace!(frame = frame.index(), "scope opened");
        ScopedInterpreter {
            interpreter: self,
            frame,
        }
    }
}

/// One level of the depth budget, given back on drop.
pub(crate) struct NestedInterpreter<'a> {
    interpreter: &'a mut Interpreter,
}

impl Drop for NestedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.depth.leave();
    }
}

impl Deref for NestedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for NestedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

/// The active native call. Dropping it reinstates the caller's frame.
pub(crate) struct CallingInterpreter<'a> {
    interpreter: &'a mut Interpreter,
    caller: Option<CallFrame>,
}

impl Drop for CallingInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.call = self.caller.take();
    }
}

impl Deref for CallingInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for CallingInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Take one nesting level, failing once the configured depth is reached.
    pub(crate) fn enter_nested(&mut self) -> Result<NestedInterpreter<'_>, EjsError> {
        self.depth
            .enter()
            .map_err(|exceeded| errors::recursion_limit(exceeded.limit))?;
        Ok(NestedInterpreter { interpreter: self })
    }

    /// Make `frame` the active call until the returned guard drops.
    pub(crate) fn enter_call(&mut self, frame: CallFrame) -> CallingInterpreter<'_> {
        let caller = self.call.replace(frame);
        CallingInterpreter {
            interpreter: self,
            caller,
        }
    }
}
