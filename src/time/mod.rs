//! Strongly typed durations.
//!
//! Every unit wraps a signed 64 bit count. Going from a coarser to a finer unit is lossless and
//! available through `From`/`Into`, so a [`Seconds`] can be passed wherever an
//! `impl Into<Micros>` is taken. Going the other way truncates and is only available through
//! the explicit [`TimeUnit::to`].
//!
//! None of the arithmetic is checked. Pick a unit that keeps your values in range.

pub mod clock;
pub mod interop;

use core::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign},
};

use num_traits::AsPrimitive;

use crate::config::{MICROS_PER_HOUR, MICROS_PER_MILLI, MICROS_PER_MINUTE, MICROS_PER_SECOND};

/// A unit of time backed by a signed 64 bit count.
///
/// Implement this for your own unit to get [`TimeUnit::to`] conversions from and to the built-in
/// ones. The units have to be integer multiples of each other, otherwise the conversion does not
/// compile:
///
/// ```compile_fail
/// use tftools::{Millis, TimeUnit};
///
/// #[derive(Clone, Copy)]
/// struct Ticks(i64);
///
/// impl TimeUnit for Ticks {
///     const MICROS_PER_UNIT: i64 = 1_500;
///     const SUFFIX: &'static str = "ticks";
///
///     fn from_count(count: i64) -> Self {
///         Self(count)
///     }
///
///     fn count(self) -> i64 {
///         self.0
///     }
/// }
///
/// let millis: Millis = Ticks(2).to();
/// ```
pub trait TimeUnit: Copy {
    /// How many microseconds one count of this unit is
    const MICROS_PER_UNIT: i64;

    /// Used when displaying the value
    const SUFFIX: &'static str;

    fn from_count(count: i64) -> Self;

    fn count(self) -> i64;

    /// Convert to another unit.
    ///
    /// Multiplies if `U` is finer (wrapping on overflow) and divides truncating toward zero if
    /// `U` is coarser. Either way it is a single step with a compile-time ratio.
    fn to<U: TimeUnit>(self) -> U {
        U::from_count(convert_count::<Self, U>(self.count()))
    }
}

fn convert_count<S: TimeUnit, U: TimeUnit>(count: i64) -> i64 {
    const {
        assert!(
            S::MICROS_PER_UNIT % U::MICROS_PER_UNIT == 0
                || U::MICROS_PER_UNIT % S::MICROS_PER_UNIT == 0,
            "time units are not integer multiples of each other"
        )
    };

    if S::MICROS_PER_UNIT >= U::MICROS_PER_UNIT {
        count.wrapping_mul(const { S::MICROS_PER_UNIT / U::MICROS_PER_UNIT })
    } else {
        count / const { U::MICROS_PER_UNIT / S::MICROS_PER_UNIT }
    }
}

macro_rules! time_unit {
    ($(#[$meta:meta])* $name:ident, $micros_per_unit:expr, $suffix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[repr(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const ZERO: Self = Self(0);
            pub const MAX: Self = Self(i64::MAX);
            pub const MIN: Self = Self(i64::MIN);

            pub const fn new(count: i64) -> Self {
                Self(count)
            }

            /// The raw count in this unit
            pub const fn count(self) -> i64 {
                self.0
            }

            /// See [`TimeUnit::to`]
            pub fn to<U: TimeUnit>(self) -> U {
                <Self as TimeUnit>::to::<U>(self)
            }

            /// Cast the raw count to another numeric type without any unit conversion.
            /// Follows the rules of `as`.
            pub fn as_num<N>(self) -> N
            where
                N: Copy + 'static,
                i64: AsPrimitive<N>,
            {
                self.0.as_()
            }

            pub const fn abs(self) -> Self {
                Self(self.0.wrapping_abs())
            }

            pub const fn is_negative(self) -> bool {
                self.0 < 0
            }
        }

        impl TimeUnit for $name {
            const MICROS_PER_UNIT: i64 = $micros_per_unit;
            const SUFFIX: &'static str = $suffix;

            fn from_count(count: i64) -> Self {
                Self(count)
            }

            fn count(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(count: i64) -> Self {
                Self(count)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", self.0, $suffix)
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self(self.0.wrapping_add(rhs.0))
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self(self.0.wrapping_sub(rhs.0))
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self {
                Self(self.0.wrapping_neg())
            }
        }

        impl Mul<i64> for $name {
            type Output = Self;

            fn mul(self, rhs: i64) -> Self {
                Self(self.0.wrapping_mul(rhs))
            }
        }

        impl Mul<$name> for i64 {
            type Output = $name;

            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        impl Div<i64> for $name {
            type Output = Self;

            fn div(self, rhs: i64) -> Self {
                Self(self.0.wrapping_div(rhs))
            }
        }

        // How many times rhs fits into self
        impl Div for $name {
            type Output = i64;

            fn div(self, rhs: Self) -> i64 {
                self.0.wrapping_div(rhs.0)
            }
        }

        impl Rem for $name {
            type Output = Self;

            fn rem(self, rhs: Self) -> Self {
                Self(self.0.wrapping_rem(rhs.0))
            }
        }

        impl Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, Add::add)
            }
        }
    };
}

time_unit!(
    /// Microseconds. Also used for absolute instants, see [`clock`].
    Micros,
    1,
    "us"
);
time_unit!(Millis, MICROS_PER_MILLI, "ms");
time_unit!(Seconds, MICROS_PER_SECOND, "s");
time_unit!(Minutes, MICROS_PER_MINUTE, "min");
time_unit!(Hours, MICROS_PER_HOUR, "h");

impl Micros {
    /// Whole milliseconds narrowed to `u32`, for timer APIs that take 32 bit millisecond counts
    pub const fn millis(self) -> u32 {
        (self.0 / MICROS_PER_MILLI) as u32
    }
}

// Coarser to finer. Always a single multiplication so nothing rounds in between
macro_rules! widening {
    ($from:ident => $($to:ident),+) => {
        $(
            impl From<$from> for $to {
                fn from(value: $from) -> Self {
                    Self(value.0.wrapping_mul(
                        const { <$from as TimeUnit>::MICROS_PER_UNIT / <$to as TimeUnit>::MICROS_PER_UNIT },
                    ))
                }
            }
        )+
    };
}

widening!(Millis => Micros);
widening!(Seconds => Micros, Millis);
widening!(Minutes => Micros, Millis, Seconds);
widening!(Hours => Micros, Millis, Seconds, Minutes);

/// Unit suffixes for integer literals, e.g. `500.us()` or `10.s()`
pub trait DurationExt {
    fn us(self) -> Micros;

    fn ms(self) -> Millis;

    fn s(self) -> Seconds;

    // Not `min` to stay clear of `Ord::min`
    fn m(self) -> Minutes;

    fn h(self) -> Hours;
}

impl DurationExt for i64 {
    fn us(self) -> Micros {
        Micros(self)
    }

    fn ms(self) -> Millis {
        Millis(self)
    }

    fn s(self) -> Seconds {
        Seconds(self)
    }

    fn m(self) -> Minutes {
        Minutes(self)
    }

    fn h(self) -> Hours {
        Hours(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Days(i64);

    impl TimeUnit for Days {
        const MICROS_PER_UNIT: i64 = MICROS_PER_HOUR * 24;
        const SUFFIX: &'static str = "d";

        fn from_count(count: i64) -> Self {
            Self(count)
        }

        fn count(self) -> i64 {
            self.0
        }
    }

    #[test]
    fn test_widening_ratios() {
        assert_eq!(Micros::from(Millis::new(1)), Micros::new(1_000));
        assert_eq!(Micros::from(Seconds::new(1)), Micros::new(1_000_000));
        assert_eq!(Millis::from(Seconds::new(1)), Millis::new(1_000));
        assert_eq!(Seconds::from(Minutes::new(1)), Seconds::new(60));
        assert_eq!(Minutes::from(Hours::new(1)), Minutes::new(60));
        assert_eq!(Micros::from(Hours::new(2)), Micros::new(7_200_000_000));
    }

    #[test]
    fn test_into_micros_parameter() {
        fn as_micros(delay: impl Into<Micros>) -> Micros {
            delay.into()
        }

        assert_eq!(as_micros(3.s()), 3_000_000.us());
        assert_eq!(as_micros(2.m()), 120_000_000.us());
        assert_eq!(as_micros(Micros::new(5)), 5.us());
    }

    #[test]
    fn test_to_coarser_truncates() {
        assert_eq!(Micros::new(1999).to::<Millis>(), Millis::new(1));
        assert_eq!(Micros::new(-1999).to::<Millis>(), Millis::new(-1));
        assert_eq!(Seconds::new(119).to::<Minutes>(), Minutes::new(1));
        assert_eq!(Micros::new(3_599_999_999).to::<Hours>(), Hours::ZERO);
        assert_eq!(Millis::new(999).to::<Seconds>(), Seconds::ZERO);
    }

    #[test]
    fn test_to_finer_and_same_unit() {
        assert_eq!(Hours::new(1).to::<Micros>(), Micros::new(3_600_000_000));
        assert_eq!(Minutes::new(3).to::<Millis>(), Millis::new(180_000));
        assert_eq!(Seconds::new(42).to::<Seconds>(), Seconds::new(42));
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Ticks(i64);

    impl TimeUnit for Ticks {
        const MICROS_PER_UNIT: i64 = 1_500;
        const SUFFIX: &'static str = "ticks";

        fn from_count(count: i64) -> Self {
            Self(count)
        }

        fn count(self) -> i64 {
            self.0
        }
    }

    #[test]
    fn test_unit_that_is_not_a_multiple_of_millis() {
        // 1500 us only divides evenly with micros, so that is the only exact route
        assert_eq!(Ticks(2).to::<Micros>(), Micros::new(3_000));
        assert_eq!(Micros::new(4_499).to::<Ticks>(), Ticks(2));
        assert_eq!(Micros::new(3_000).to::<Millis>(), Millis::new(3));
    }

    #[test]
    fn test_to_user_defined_unit() {
        assert_eq!(Hours::new(49).to::<Days>(), Days(2));
        assert_eq!(Days(1).to::<Minutes>(), Minutes::new(1440));
        assert_eq!(TimeUnit::to::<Seconds>(Days(1)), Seconds::new(86_400));
    }

    #[test]
    fn test_conversion_wraps_on_overflow() {
        let huge = Hours::new(i64::MAX);
        assert_eq!(
            huge.to::<Micros>(),
            Micros::new(i64::MAX.wrapping_mul(MICROS_PER_HOUR))
        );
        assert_eq!(Micros::MAX + Micros::new(1), Micros::MIN);
    }

    #[test]
    fn test_millis_narrowing() {
        assert_eq!(Micros::new(2500).millis(), 2);
        assert_eq!(Micros::new(999).millis(), 0);
        // Above u32::MAX milliseconds the upper bits are dropped
        let over = Micros::new((u32::MAX as i64 + 2) * 1000);
        assert_eq!(over.millis(), 1);
    }

    #[test]
    fn test_as_num() {
        let t = Micros::new(1_500);
        assert_eq!(t.as_num::<u32>(), 1_500u32);
        assert_eq!(t.as_num::<f64>(), 1_500.0);
        assert_eq!(Micros::new(-1).as_num::<u8>(), 255u8);
        assert_eq!(Millis::new(300).as_num::<i8>(), 44i8);
    }

    #[test]
    fn test_arithmetic() {
        let mut t = 10.s();
        t += 5.s();
        assert_eq!(t, 15.s());
        t -= 20.s();
        assert_eq!(t, Seconds::new(-5));
        assert!(t.is_negative());
        assert_eq!(t.abs(), 5.s());
        assert_eq!(-t, 5.s());
        assert_eq!(3.ms() * 4, 12.ms());
        assert_eq!(4 * 3.ms(), 12.ms());
        assert_eq!(13.ms() / 4, 3.ms());
        assert_eq!(13.ms() / 4.ms(), 3);
        assert_eq!(13.ms() % 4.ms(), 1.ms());
        assert_eq!([1.h(), 2.h(), 3.h()].into_iter().sum::<Hours>(), 6.h());
    }

    #[test]
    fn test_ordering_within_unit() {
        assert!(1.us() < 2.us());
        assert!(Minutes::MIN < Minutes::ZERO);
        assert_eq!(Millis::default(), Millis::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(500.us().to_string(), "500 us");
        assert_eq!(Millis::new(-3).to_string(), "-3 ms");
        assert_eq!(10.s().to_string(), "10 s");
        assert_eq!(2.m().to_string(), "2 min");
        assert_eq!(1.h().to_string(), "1 h");
    }

    #[test]
    fn test_suffix_constants() {
        assert_eq!(<Micros as TimeUnit>::SUFFIX, "us");
        assert_eq!(<Hours as TimeUnit>::MICROS_PER_UNIT, 3_600_000_000);
    }
}
