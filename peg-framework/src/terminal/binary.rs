//! Terminals for binary formats.
//!
//! These rules run over byte cursors and compare or copy the native
//! in-memory image of fixed-size values. The read rules write into cells
//! owned by the caller: a grammar holding them must not be used by two
//! overlapping parses, and each parse overwrites what the previous one read.
//!
//! A read that runs out of input fails but keeps the bytes it already
//! copied, so a 4-byte field read from 2 bytes leaves those 2 bytes in the
//! target.

use crate::result::Match;
use crate::traits::Rule;
use cursor_framework::Cursor;
use std::cell::{Cell, RefCell};

/// A value with a fixed-size byte image.
pub trait FixedBytes: Sized {
    /// Size of the byte image.
    const SIZE: usize;

    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    fn to_bytes(&self) -> Self::Bytes;

    fn from_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! fixed_bytes {
    ($($t:ty),* $(,)?) => {
        $(
            impl FixedBytes for $t {
                const SIZE: usize = std::mem::size_of::<$t>();

                type Bytes = [u8; std::mem::size_of::<$t>()];

                fn to_bytes(&self) -> Self::Bytes {
                    self.to_ne_bytes()
                }

                fn from_bytes(bytes: Self::Bytes) -> Self {
                    <$t>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}

fixed_bytes!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, f32, f64);

/// Copies up to `T::SIZE` bytes from `[i1, i2)` over the image of `value`.
fn read_into<I, T>(value: &mut T, i1: I, i2: I) -> Match<I>
where
    I: Cursor<Item = u8>,
    T: FixedBytes,
{
    let mut bytes = value.to_bytes();
    let mut position = i1;
    let mut copied = 0;
    for slot in bytes.as_mut() {
        match position.next_item(&i2) {
            Some((byte, next)) => {
                *slot = byte;
                position = next;
                copied += 1;
            }
            None => break,
        }
    }
    *value = T::from_bytes(bytes);

    if copied == T::SIZE {
        Match::success(i1, position)
    } else {
        Match::failure(i1)
    }
}

/// Matches the byte image of a fixed value.
#[derive(Debug, Clone, Copy)]
pub struct BinRule<T>(T);

impl<I, T> Rule<I> for BinRule<T>
where
    I: Cursor<Item = u8>,
    T: FixedBytes,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        let mut position = i1;
        for expected in self.0.to_bytes().as_ref() {
            match position.next_item(&i2) {
                Some((byte, next)) if byte == *expected => position = next,
                _ => return Match::failure(i1),
            }
        }
        Match::success(i1, position)
    }
}

/// Reads a fixed-size value into a caller-owned cell.
#[derive(Clone, Copy)]
pub struct VarRule<'v, T> {
    target: &'v Cell<T>,
}

impl<T: FixedBytes> std::fmt::Debug for VarRule<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VarRule").field("size", &T::SIZE).finish()
    }
}

impl<I, T> Rule<I> for VarRule<'_, T>
where
    I: Cursor<Item = u8>,
    T: FixedBytes + Copy,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        let mut value = self.target.get();
        let m = read_into(&mut value, i1, i2);
        self.target.set(value);
        m
    }
}

/// Reads `N` fixed-size values into a caller-owned array.
///
/// Stops at the first element that cannot be read; earlier elements (and
/// the partial bytes of the failing one) stay written.
#[derive(Debug, Clone, Copy)]
pub struct ArrayRule<'v, T, const N: usize> {
    target: &'v RefCell<[T; N]>,
}

impl<I, T, const N: usize> Rule<I> for ArrayRule<'_, T, N>
where
    I: Cursor<Item = u8>,
    T: FixedBytes,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        let Ok(mut array) = self.target.try_borrow_mut() else {
            log::warn!("array read skipped: target is borrowed elsewhere");
            return Match::failure(i1);
        };

        let mut position = i1;
        for slot in array.iter_mut() {
            let m = read_into(slot, position, i2);
            if !m.matched {
                return Match::failure(i1);
            }
            position = m.position;
        }
        Match::success(i1, position)
    }
}

/// Reads fixed-size values into a caller-owned vector.
///
/// The vector is cleared first, then filled until the input runs out, a
/// value cannot be read completely, or `max` values were read. Matches when
/// at least `min` values were read; the cursor stops after the last complete
/// value.
#[derive(Debug, Clone, Copy)]
pub struct SequenceRule<'v, T> {
    target: &'v RefCell<Vec<T>>,
    min: usize,
    max: usize,
}

impl<I, T> Rule<I> for SequenceRule<'_, T>
where
    I: Cursor<Item = u8>,
    T: FixedBytes,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        let Ok(mut items) = self.target.try_borrow_mut() else {
            log::warn!("sequence read skipped: target is borrowed elsewhere");
            return Match::failure(i1);
        };
        items.clear();

        let mut position = i1;
        while position != i2 && items.len() < self.max {
            let mut value = T::from_bytes(Default::default());
            let m = read_into(&mut value, position, i2);
            if !m.matched {
                break;
            }
            position = m.position;
            items.push(value);
        }

        if items.len() >= self.min {
            Match::success(i1, position)
        } else {
            Match::failure(i1)
        }
    }
}

/// Rule matching the byte image of `value`.
pub fn bin<T: FixedBytes>(value: T) -> BinRule<T> {
    BinRule(value)
}

/// Rule reading a value into `target`.
pub fn var<T: FixedBytes + Copy>(target: &Cell<T>) -> VarRule<'_, T> {
    VarRule { target }
}

/// Rule reading `N` values into `target`.
pub fn array<T: FixedBytes, const N: usize>(target: &RefCell<[T; N]>) -> ArrayRule<'_, T, N> {
    ArrayRule { target }
}

/// Rule reading between `min` and `max` values into `target`.
pub fn sequence<T: FixedBytes>(
    target: &RefCell<Vec<T>>,
    min: usize,
    max: usize,
) -> SequenceRule<'_, T> {
    SequenceRule { target, min, max }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_bytes_sizes() {
        assert_eq!(<u8 as FixedBytes>::SIZE, 1);
        assert_eq!(<u32 as FixedBytes>::SIZE, 4);
        assert_eq!(<f64 as FixedBytes>::SIZE, 8);
    }

    #[test]
    fn test_fixed_bytes_round_trip_native() {
        let value = 0x0102_0304u32;
        assert_eq!(u32::from_bytes(value.to_bytes()), value);
        assert_eq!(value.to_bytes(), value.to_ne_bytes());
    }
}
