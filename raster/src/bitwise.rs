use std::fmt::Debug;
use std::ops::RangeInclusive;

/// Bit-field helpers for the packed 12-bit color words.
///
/// Bit indices go from lsb to msb (right to left), ranges are inclusive.
pub trait Bits
where
    Self: Copy + Into<u32> + TryFrom<u32>,
    <Self as TryFrom<u32>>::Error: Debug,
{
    /// Extracts `bits_range` and moves it down to bit 0.
    fn get_bits(&self, bits_range: RangeInclusive<u8>) -> Self {
        let start = *bits_range.start();
        let mask = field_mask(&bits_range);
        let value: u32 = (*self).into();

        // Always fits: the field is narrower than `Self`.
        from_u32((value & mask) >> start)
    }
}

fn field_mask(bits_range: &RangeInclusive<u8>) -> u32 {
    let length = u32::from(*bits_range.end() - *bits_range.start() + 1);
    let ones = if length >= 32 {
        u32::MAX
    } else {
        (1 << length) - 1
    };

    ones << *bits_range.start()
}

fn from_u32<T>(value: u32) -> T
where
    T: TryFrom<u32>,
    <T as TryFrom<u32>>::Error: Debug,
{
    match T::try_from(value) {
        Ok(v) => v,
        Err(e) => unreachable!("masked field does not fit: {e:?}"),
    }
}

impl Bits for u32 {}
impl Bits for u16 {}
impl Bits for u8 {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    #[test]
    fn get_bits() {
        let color = 0x0a5f_u16;
        assert_eq!(color.get_bits(8..=11), 0xa);
        assert_eq!(color.get_bits(4..=7), 0x5);
        assert_eq!(color.get_bits(0..=3), 0xf);
        assert_eq!(color.get_bits(0..=15), 0x0a5f);
    }

    #[test]
    fn get_bits_matches_shift_and_mask() {
        let mut rng = rand::thread_rng();
        for _ in 0..256 {
            let start = rng.gen_range(0..=12_u8);
            let word = rng.gen_range(0..=u16::MAX);
            assert_eq!(word.get_bits(start..=start + 3), (word >> start) & 0xf);
        }
    }
}
