use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{SeatingError, SeatingResult};
use crate::models::Seat;

/// Зал: рваная сетка мест, ряды могут быть разной длины.
///
/// Форма сетки фиксируется при создании, после этого меняются только статусы
/// мест. Вся адресация идет по координатам (ряд, номер места), обратных
/// ссылок от места к залу нет.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    seats: Vec<Vec<Seat>>,
}

impl Venue {
    /// Создает зал по списку длин рядов. Все места изначально свободны.
    pub fn new(rows: &[usize]) -> Self {
        let seats = rows
            .iter()
            .enumerate()
            .map(|(row, &capacity)| {
                (0..capacity).map(|number| Seat::new(row, number)).collect()
            })
            .collect();
        Self { seats }
    }

    pub fn row_count(&self) -> usize {
        self.seats.len()
    }

    /// Количество мест в ряду или None, если такого ряда нет.
    pub fn row_capacity(&self, row: usize) -> Option<usize> {
        self.seats.get(row).map(|seats| seats.len())
    }

    pub fn total_seats(&self) -> usize {
        self.seats.iter().map(|row| row.len()).sum()
    }

    /// Снимок одного места по координатам или None за пределами сетки.
    pub fn seat(&self, row: usize, number: usize) -> Option<Seat> {
        self.seats.get(row)?.get(number).copied()
    }

    /// Считает свободные места во всем зале.
    pub fn count_available_seats(&self) -> usize {
        self.seats
            .iter()
            .flat_map(|row| row.iter())
            .filter(|seat| seat.is_available())
            .count()
    }

    /// Сводка занятости зала.
    pub fn occupancy(&self) -> OccupancyStats {
        OccupancyStats {
            total_seats: self.total_seats(),
            available: self.count_available_seats(),
        }
    }

    /// Первое свободное место в ряду, слева направо.
    ///
    /// Несуществующий ряд - это тоже None, а не ошибка.
    pub fn find_first_available_seat_in_row(&self, row: usize) -> Option<Seat> {
        self.seats
            .get(row)?
            .iter()
            .find(|seat| seat.is_available())
            .copied()
    }

    /// Первое свободное место во всем зале, ряды обходятся по возрастанию.
    pub fn find_first_available_seat(&self) -> Option<Seat> {
        (0..self.seats.len()).find_map(|row| self.find_first_available_seat_in_row(row))
    }

    /// Ищет в ряду самую левую серию из `amount` подряд свободных мест и
    /// возвращает первое место серии.
    ///
    /// None, если ряда нет, `amount` нулевой или такой серии в ряду нет.
    pub fn find_available_block_in_row(&self, row: usize, amount: usize) -> Option<Seat> {
        if amount == 0 {
            return None;
        }
        let row_seats = self.seats.get(row)?;
        // Один проход со счетчиком длины текущей серии, занятое место
        // сбрасывает счетчик
        let mut run = 0;
        for (i, seat) in row_seats.iter().enumerate() {
            if seat.is_available() {
                run += 1;
                if run == amount {
                    return Some(row_seats[i + 1 - amount]);
                }
            } else {
                run = 0;
            }
        }
        None
    }

    /// Ищет серию из `amount` свободных мест по всему залу, ряды по
    /// возрастанию. Серия никогда не разрывается между рядами.
    pub fn find_available_block(&self, amount: usize) -> Option<Seat> {
        if amount == 0 {
            return None;
        }
        (0..self.seats.len()).find_map(|row| self.find_available_block_in_row(row, amount))
    }

    /// Занимает `amount` мест подряд, начиная с переданного.
    ///
    /// Проверка и изменение идут колонка за колонкой: при ошибке на середине
    /// диапазона места левее сбойной колонки уже заняты, отката нет. Если
    /// нужна транзакционность - [`Venue::take_seats_atomic`].
    pub fn take_seats(&mut self, seat: Option<Seat>, amount: usize) -> SeatingResult<()> {
        let (row, start) = self.check_range_args(seat, amount)?;
        for number in start..start + amount {
            let seat = match self.seats[row].get_mut(number) {
                Some(seat) => seat,
                None => {
                    warn!(
                        "take_seats stopped mid-range: seat {} in row {} is out of bounds",
                        number, row
                    );
                    return Err(SeatingError::SeatOutOfBounds { row, number });
                }
            };
            if !seat.is_available() {
                warn!(
                    "take_seats stopped mid-range: seat {} in row {} is already taken",
                    number, row
                );
                return Err(SeatingError::SeatTaken { row, number });
            }
            seat.take();
        }
        debug!("took {} seats in row {} starting at {}", amount, row, start);
        Ok(())
    }

    /// Освобождает `amount` мест подряд, начиная с переданного.
    ///
    /// Статус не проверяется: повторное освобождение не ошибка, проверяются
    /// только границы ряда. Неатомарность та же, что у take_seats.
    pub fn release_seats(&mut self, seat: Option<Seat>, amount: usize) -> SeatingResult<()> {
        let (row, start) = self.check_range_args(seat, amount)?;
        for number in start..start + amount {
            match self.seats[row].get_mut(number) {
                Some(seat) => seat.release(),
                None => {
                    warn!(
                        "release_seats stopped mid-range: seat {} in row {} is out of bounds",
                        number, row
                    );
                    return Err(SeatingError::SeatOutOfBounds { row, number });
                }
            }
        }
        debug!("released {} seats in row {} starting at {}", amount, row, start);
        Ok(())
    }

    /// Транзакционный вариант [`Venue::take_seats`]: сначала проверяет весь
    /// диапазон, статусы меняет только если все места свободны и в границах.
    /// При ошибке зал не меняется.
    pub fn take_seats_atomic(&mut self, seat: Option<Seat>, amount: usize) -> SeatingResult<()> {
        let (row, start) = self.check_range_args(seat, amount)?;
        for number in start..start + amount {
            match self.seats[row].get(number) {
                Some(seat) if seat.is_available() => {}
                Some(_) => return Err(SeatingError::SeatTaken { row, number }),
                None => return Err(SeatingError::SeatOutOfBounds { row, number }),
            }
        }
        for number in start..start + amount {
            self.seats[row][number].take();
        }
        debug!("took {} seats in row {} starting at {}", amount, row, start);
        Ok(())
    }

    /// Транзакционный вариант [`Venue::release_seats`]: границы всего
    /// диапазона проверяются заранее. При ошибке зал не меняется.
    pub fn release_seats_atomic(&mut self, seat: Option<Seat>, amount: usize) -> SeatingResult<()> {
        let (row, start) = self.check_range_args(seat, amount)?;
        for number in start..start + amount {
            if self.seats[row].get(number).is_none() {
                return Err(SeatingError::SeatOutOfBounds { row, number });
            }
        }
        for number in start..start + amount {
            self.seats[row][number].release();
        }
        debug!("released {} seats in row {} starting at {}", amount, row, start);
        Ok(())
    }

    // Общая проверка аргументов take/release: до ее прохождения ни одно
    // место не трогаем
    fn check_range_args(&self, seat: Option<Seat>, amount: usize) -> SeatingResult<(usize, usize)> {
        let seat = seat.ok_or(SeatingError::MissingSeat)?;
        if amount == 0 {
            return Err(SeatingError::InvalidAmount { amount });
        }
        let row = seat.row();
        if row >= self.seats.len() {
            return Err(SeatingError::RowOutOfBounds { row });
        }
        Ok((row, seat.number()))
    }
}

/// Сводка занятости: сколько всего мест и сколько из них свободно.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OccupancyStats {
    pub total_seats: usize,
    pub available: usize,
}

impl OccupancyStats {
    pub fn taken(&self) -> usize {
        self.total_seats - self.available
    }
}
