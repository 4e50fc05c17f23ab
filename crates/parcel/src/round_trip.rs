//! Fail-fast parceling round trip used by tests.

use crate::parcel::Parcel;
use crate::parcelable::Parcelable;
use std::any::type_name;

/// Writes `value` into a fresh parcel, rewinds, and reads a new value back.
///
/// # Panics
/// Panics if either direction reports an error. A failed round trip is a
/// broken codec contract, not a recoverable condition.
pub fn round_trip<T: Parcelable>(value: &T) -> T {
    let mut parcel = Parcel::new();
    if let Err(err) = value.write_to_parcel(&mut parcel) {
        panic!("failed to write {} to parcel: {}", type_name::<T>(), err);
    }
    tracing::debug!(bytes = parcel.data_size(), ty = type_name::<T>(), "parcel written");

    parcel.set_data_position(0);
    match T::read_from_parcel(&mut parcel) {
        Ok(decoded) => decoded,
        Err(err) => panic!("failed to read {} from parcel: {}", type_name::<T>(), err),
    }
}

/// Asserts that a value survives [`round_trip`] unchanged.
#[macro_export]
macro_rules! assert_parceling_round_trip {
    ($value:expr $(,)?) => {{
        let value = &$value;
        let decoded = $crate::round_trip(value);
        assert_eq!(*value, decoded, "value changed across a parcel round trip");
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParcelError, Result};

    #[derive(Debug, PartialEq)]
    struct Truncating;

    impl Parcelable for Truncating {
        type Error = ParcelError;

        fn write_to_parcel(&self, parcel: &mut Parcel) -> Result<()> {
            parcel.write_i32(1)
        }

        fn read_from_parcel(parcel: &mut Parcel) -> Result<Self> {
            parcel.read_i32()?;
            parcel.read_i64()?;
            Ok(Truncating)
        }
    }

    #[test]
    fn test_primitive_round_trips() {
        assert_parceling_round_trip!(-1i32);
        assert_parceling_round_trip!(i64::MAX);
        assert_parceling_round_trip!(false);
        assert_parceling_round_trip!(String::from("package_name/.ClassName"));
        assert_parceling_round_trip!(String::new());
        assert_parceling_round_trip!(vec![0u8, 1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "failed to read")]
    fn test_failed_read_panics() {
        round_trip(&Truncating);
    }
}
