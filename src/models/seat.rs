use serde::{Deserialize, Serialize};

/// Одно место в зале. Позиция фиксируется при создании, меняется только статус.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    row: usize,
    number: usize,
    available: bool,
}

impl Seat {
    // Места создаются только конструктором зала, по одному на ячейку сетки
    pub(crate) fn new(row: usize, number: usize) -> Self {
        Self {
            row,
            number,
            available: true,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    // Статус переключается без самопроверки, инварианты диапазона
    // контролирует Venue
    pub(crate) fn take(&mut self) {
        self.available = false;
    }

    pub(crate) fn release(&mut self) {
        self.available = true;
    }
}
