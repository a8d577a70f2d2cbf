//! Move unit queue.
//! Strict FIFO built once per operation; supports only head removal and
//! emptiness checks. No reordering, no concurrent consumers.

use std::collections::VecDeque;

use crate::group::MoveUnit;

#[derive(Debug, Default)]
pub struct MoveUnitQueue {
    units: VecDeque<MoveUnit>,
}

impl MoveUnitQueue {
    pub fn from_units(units: Vec<MoveUnit>) -> Self {
        Self {
            units: units.into(),
        }
    }

    /// Remove and return the head unit.
    pub fn pop(&mut self) -> Option<MoveUnit> {
        self.units.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }
}
