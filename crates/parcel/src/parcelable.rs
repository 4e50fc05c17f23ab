use crate::error::{ParcelError, Result};
use crate::parcel::Parcel;

/// A value that can flatten itself into a [`Parcel`] and be rebuilt from one.
///
/// `read_from_parcel` must consume exactly what `write_to_parcel` produced,
/// starting at the parcel's current data position.
pub trait Parcelable: Sized {
    type Error: From<ParcelError> + std::error::Error;

    fn write_to_parcel(&self, parcel: &mut Parcel) -> std::result::Result<(), Self::Error>;

    fn read_from_parcel(parcel: &mut Parcel) -> std::result::Result<Self, Self::Error>;
}

impl Parcelable for i32 {
    type Error = ParcelError;

    fn write_to_parcel(&self, parcel: &mut Parcel) -> Result<()> {
        parcel.write_i32(*self)
    }

    fn read_from_parcel(parcel: &mut Parcel) -> Result<Self> {
        parcel.read_i32()
    }
}

impl Parcelable for i64 {
    type Error = ParcelError;

    fn write_to_parcel(&self, parcel: &mut Parcel) -> Result<()> {
        parcel.write_i64(*self)
    }

    fn read_from_parcel(parcel: &mut Parcel) -> Result<Self> {
        parcel.read_i64()
    }
}

impl Parcelable for bool {
    type Error = ParcelError;

    fn write_to_parcel(&self, parcel: &mut Parcel) -> Result<()> {
        parcel.write_bool(*self)
    }

    fn read_from_parcel(parcel: &mut Parcel) -> Result<Self> {
        parcel.read_bool()
    }
}

impl Parcelable for String {
    type Error = ParcelError;

    fn write_to_parcel(&self, parcel: &mut Parcel) -> Result<()> {
        parcel.write_string(Some(self.as_str()))
    }

    fn read_from_parcel(parcel: &mut Parcel) -> Result<Self> {
        parcel.read_string()?.ok_or(ParcelError::UnexpectedNull("string"))
    }
}

impl Parcelable for Vec<u8> {
    type Error = ParcelError;

    fn write_to_parcel(&self, parcel: &mut Parcel) -> Result<()> {
        parcel.write_byte_array(Some(self.as_slice()))
    }

    fn read_from_parcel(parcel: &mut Parcel) -> Result<Self> {
        parcel.read_byte_array()?.ok_or(ParcelError::UnexpectedNull("byte array"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_string_is_unexpected() {
        let mut parcel = Parcel::new();
        parcel.write_string(None).unwrap();
        parcel.set_data_position(0);
        let result = String::read_from_parcel(&mut parcel);
        assert!(matches!(result, Err(ParcelError::UnexpectedNull("string"))));
    }

    #[test]
    fn test_sequential_parcelables() {
        let mut parcel = Parcel::new();
        parcel.write_parcelable(&42i32).unwrap();
        parcel.write_parcelable(&"launch".to_string()).unwrap();
        parcel.write_parcelable(&vec![7u8; 3]).unwrap();
        parcel.set_data_position(0);

        assert_eq!(parcel.read_parcelable::<i32>().unwrap(), 42);
        assert_eq!(parcel.read_parcelable::<String>().unwrap(), "launch");
        assert_eq!(parcel.read_parcelable::<Vec<u8>>().unwrap(), vec![7, 7, 7]);
        assert_eq!(parcel.data_avail(), 0);
    }
}
