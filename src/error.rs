use thiserror::Error;

/// Ошибки операций над залом.
///
/// Отсутствие результата поиска ошибкой не считается: поисковые методы
/// возвращают `Option` и в этот тип не попадают.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeatingError {
    /// Не передано стартовое место.
    #[error("seat reference is missing")]
    MissingSeat,

    /// Запрошено нулевое количество мест.
    #[error("invalid amount: {amount} (must be > 0)")]
    InvalidAmount { amount: usize },

    /// Стартовый ряд за пределами зала.
    #[error("row {row} is out of bounds")]
    RowOutOfBounds { row: usize },

    /// Колонка за пределами своего ряда.
    #[error("seat {number} in row {row} is out of bounds")]
    SeatOutOfBounds { row: usize, number: usize },

    /// Место уже занято.
    #[error("seat {number} in row {row} is already taken")]
    SeatTaken { row: usize, number: usize },
}

impl SeatingError {
    /// Ошибка аргументов: операция отклонена до каких-либо изменений.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            SeatingError::MissingSeat | SeatingError::InvalidAmount { .. }
        )
    }

    /// Нарушение диапазона или доступности, обнаруженное при проходе по ряду.
    pub fn is_range_violation(&self) -> bool {
        matches!(
            self,
            SeatingError::RowOutOfBounds { .. }
                | SeatingError::SeatOutOfBounds { .. }
                | SeatingError::SeatTaken { .. }
        )
    }
}

/// Result alias для операций над залом.
pub type SeatingResult<T> = Result<T, SeatingError>;
