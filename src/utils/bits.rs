//! Bit-level views of floating-point values.

/// A floating-point type with a same-width unsigned integer representation.
pub trait BitCast: Copy {
    type Bits: Copy;

    fn bits_of(self) -> Self::Bits;

    fn float_of(bits: Self::Bits) -> Self;
}

impl BitCast for f32 {
    type Bits = u32;

    #[inline]
    fn bits_of(self) -> u32 {
        self.to_bits()
    }

    #[inline]
    fn float_of(bits: u32) -> f32 {
        f32::from_bits(bits)
    }
}

impl BitCast for f64 {
    type Bits = u64;

    #[inline]
    fn bits_of(self) -> u64 {
        self.to_bits()
    }

    #[inline]
    fn float_of(bits: u64) -> f64 {
        f64::from_bits(bits)
    }
}

/// Reinterprets a float as its IEEE 754 encoding.
#[inline]
pub fn bits_of<T: BitCast>(value: T) -> T::Bits {
    value.bits_of()
}

/// Reinterprets an IEEE 754 encoding as a float.
///
/// # Examples
///
/// ```
/// # use approx_libm::utils::{bits_of, float_of};
/// #
/// assert_eq!(bits_of(1.0f32), 0x3f80_0000);
/// assert_eq!(float_of::<f64>(0x3ff0_0000_0000_0000), 1.0);
/// ```
#[inline]
pub fn float_of<T: BitCast>(bits: T::Bits) -> T {
    T::float_of(bits)
}
