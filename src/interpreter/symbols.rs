use std::collections::HashMap;

use crate::{
    ast::{Qualifiers, VarKind},
    interpreter::value::core::Value,
};

/// A named variable in the global namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The unique name.
    pub name:       String,
    /// The kind recorded by the latest assignment.
    pub kind:       VarKind,
    /// The qualifiers recorded by the latest assignment.
    pub qualifiers: Qualifiers,
    /// The current value.
    pub value:      Value,
}

/// Returned by [`SymbolTable::upsert`] when a new name does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded {
    /// The configured capacity.
    pub capacity: usize,
}

/// The global symbol table.
///
/// Variables are created on first assignment, updated in place afterwards and
/// never removed, so the slot index of a variable never changes. Slots are kept
/// in insertion order.
#[derive(Debug, Default)]
pub struct SymbolTable {
    slots:    Vec<Variable>,
    index:    HashMap<String, usize>,
    capacity: Option<usize>,
}

impl SymbolTable {
    /// Creates an unbounded table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table that refuses new names beyond `capacity`.
    #[must_use]
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self { slots: Vec::with_capacity(capacity),
               index: HashMap::with_capacity(capacity),
               capacity: Some(capacity) }
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        self.index.get(name).map(|&slot| &self.slots[slot])
    }

    /// Returns the slot index of a variable.
    #[must_use]
    pub fn slot_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Reads a variable by slot index.
    #[must_use]
    pub fn slot(&self, slot: usize) -> Option<&Variable> {
        self.slots.get(slot)
    }

    /// Creates or updates a variable, returning its slot index.
    ///
    /// An existing variable takes the new kind, qualifiers and value. A new
    /// name is appended unless the table is at capacity.
    ///
    /// # Errors
    /// Returns [`CapacityExceeded`] if the name is new and the table is full.
    ///
    /// # Example
    /// ```
    /// use brainrot::{
    ///     ast::{Qualifiers, VarKind},
    ///     interpreter::{symbols::SymbolTable, value::core::Value},
    /// };
    ///
    /// let mut table = SymbolTable::with_capacity_limit(1);
    /// assert_eq!(table.upsert("x", VarKind::Int, Qualifiers::NONE, Value::Int(1)), Ok(0));
    /// assert_eq!(table.upsert("x", VarKind::Double, Qualifiers::NONE, Value::Double(2.5)), Ok(0));
    /// assert!(table.upsert("y", VarKind::Int, Qualifiers::NONE, Value::Int(3)).is_err());
    /// assert_eq!(table.lookup("x").unwrap().value, Value::Double(2.5));
    /// ```
    pub fn upsert(&mut self,
                  name: &str,
                  kind: VarKind,
                  qualifiers: Qualifiers,
                  value: Value)
                  -> Result<usize, CapacityExceeded> {
        if let Some(&slot) = self.index.get(name) {
            let variable = &mut self.slots[slot];
            variable.kind = kind;
            variable.qualifiers = qualifiers;
            variable.value = value;
            return Ok(slot);
        }

        if let Some(capacity) = self.capacity
           && self.slots.len() >= capacity
        {
            return Err(CapacityExceeded { capacity });
        }

        let slot = self.slots.len();
        self.slots.push(Variable { name: name.to_string(),
                                   kind,
                                   qualifiers,
                                   value });
        self.index.insert(name.to_string(), slot);
        Ok(slot)
    }

    /// Returns the qualifiers of a variable, or the empty set for unknown
    /// names.
    #[must_use]
    pub fn qualifiers_of(&self, name: &str) -> Qualifiers {
        self.lookup(name)
            .map_or(Qualifiers::NONE, |variable| variable.qualifiers)
    }

    /// Iterates over all variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.slots.iter()
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no variable was ever assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
