//! Handle-based ownership of interpreter instances.
//!
//! Hosts that juggle many interpreters (one per request, say) keep them in
//! an [`InterpreterRegistry`] and pass [`InstanceId`]s around. Slots are
//! reused after close; each reuse bumps the slot's generation so an id
//! from before the close no longer resolves.

use ejs_diagnostic::EjsError;
use tracing::debug;

use crate::environment::Scope;
use crate::{errors, Interpreter, InterpreterBuilder};

/// Handle to an interpreter in an [`InterpreterRegistry`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InstanceId {
    index: u32,
    generation: u32,
}

impl InstanceId {
    pub fn index(self) -> u32 {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    interpreter: Option<Interpreter>,
}

/// Generation-checked arena of interpreters.
#[derive(Debug)]
pub struct InterpreterRegistry {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    max_instances: usize,
}

impl InterpreterRegistry {
    pub fn new() -> Self {
        Self::with_max_instances(usize::MAX)
    }

    /// A registry that refuses to hold more than `max_instances` at once.
    pub fn with_max_instances(max_instances: usize) -> Self {
        InterpreterRegistry {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
            max_instances,
        }
    }

    /// Build an interpreter and take ownership of it.
    pub fn open(&mut self, builder: InterpreterBuilder) -> Result<InstanceId, EjsError> {
        if self.live >= self.max_instances {
            return Err(errors::too_many_instances(self.max_instances));
        }
        let interpreter = builder.build();

        let id = if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.interpreter = Some(interpreter);
            InstanceId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = u32::try_from(self.slots.len())
                .map_err(|_| errors::too_many_instances(self.max_instances))?;
            self.slots.push(Slot {
                generation: 0,
                interpreter: Some(interpreter),
            });
            InstanceId {
                index,
                generation: 0,
            }
        };

        self.live += 1;
        debug!(index = id.index, generation = id.generation, "interpreter opened");
        Ok(id)
    }

    /// Close an interpreter, returning its global frame.
    pub fn close(&mut self, id: InstanceId) -> Result<Scope, EjsError> {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .ok_or_else(errors::invalid_handle)?;
        let interpreter = slot.interpreter.take().ok_or_else(errors::invalid_handle)?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        debug!(index = id.index, "interpreter closed");
        Ok(interpreter.close())
    }

    pub fn get(&self, id: InstanceId) -> Option<&Interpreter> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)?
            .interpreter
            .as_ref()
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut Interpreter> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)?
            .interpreter
            .as_mut()
    }

    /// [`Interpreter::eval_block`] on the instance behind `id`.
    pub fn eval_block(&mut self, id: InstanceId, script: &str) -> Result<String, EjsError> {
        self.get_mut(id)
            .ok_or_else(errors::invalid_handle)?
            .eval_block(script)
    }

    /// Number of open interpreters.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Ids of all open interpreters.
    pub fn ids(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.slots.iter().zip(0u32..).filter_map(|(slot, index)| {
            slot.interpreter.as_ref().map(|_| InstanceId {
                index,
                generation: slot.generation,
            })
        })
    }
}

impl Default for InterpreterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
