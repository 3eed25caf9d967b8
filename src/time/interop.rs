//! Conversions to and from the duration types of `fugit` and `embassy-time`

use crate::{error::Error, time::Micros};

pub type FugitDuration = fugit::MicrosDurationU64;
pub type FugitInstant = fugit::Instant<u64, 1, 1_000_000>;

impl<const NOM: u32, const DENOM: u32> From<fugit::Duration<u64, NOM, DENOM>> for Micros {
    fn from(duration: fugit::Duration<u64, NOM, DENOM>) -> Self {
        Micros::new(duration.to_micros() as i64)
    }
}

impl From<FugitInstant> for Micros {
    fn from(instant: FugitInstant) -> Self {
        Micros::new(instant.ticks() as i64)
    }
}

impl TryFrom<Micros> for FugitDuration {
    type Error = Error;

    fn try_from(value: Micros) -> Result<Self, Self::Error> {
        if value.is_negative() {
            return Err(Error::Negative);
        }

        Ok(FugitDuration::from_ticks(value.count() as u64))
    }
}

#[cfg(feature = "embassy-time")]
mod embassy {
    use super::*;

    impl From<embassy_time::Duration> for Micros {
        fn from(duration: embassy_time::Duration) -> Self {
            Micros::new(duration.as_micros() as i64)
        }
    }

    impl From<embassy_time::Instant> for Micros {
        fn from(instant: embassy_time::Instant) -> Self {
            Micros::new(instant.as_micros() as i64)
        }
    }

    impl TryFrom<Micros> for embassy_time::Duration {
        type Error = Error;

        fn try_from(value: Micros) -> Result<Self, Self::Error> {
            if value.is_negative() {
                return Err(Error::Negative);
            }

            Ok(embassy_time::Duration::from_micros(value.count() as u64))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{DurationExt, Millis};

    #[test]
    fn test_from_fugit() {
        let duration = fugit::MillisDurationU64::millis(15);
        assert_eq!(Micros::from(duration), 15_000.us());

        let micros = FugitDuration::micros(7);
        assert_eq!(Micros::from(micros), 7.us());
    }

    #[test]
    fn test_from_fugit_instant() {
        let instant = FugitInstant::from_ticks(123_456);
        assert_eq!(Micros::from(instant), 123_456.us());
    }

    #[test]
    fn test_to_fugit() {
        let duration: Micros = Millis::new(2).into();
        assert_eq!(
            FugitDuration::try_from(duration),
            Ok(FugitDuration::from_ticks(2_000))
        );
        assert_eq!(FugitDuration::try_from(Micros::new(-1)), Err(Error::Negative));
    }
}
