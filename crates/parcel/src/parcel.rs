use crate::config::{DEFAULT_CAPACITY, MAX_ARRAY_LEN, NULL_LENGTH, PARCEL_ALIGNMENT};
use crate::error::{ParcelError, Result};
use crate::parcelable::Parcelable;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use bytes::Bytes;
use std::io::{Cursor, Read, Write};

const PADDING: [u8; PARCEL_ALIGNMENT] = [0; PARCEL_ALIGNMENT];

/// Rounds `len` up to the next multiple of [`PARCEL_ALIGNMENT`].
pub fn aligned(len: usize) -> usize {
    (len + PARCEL_ALIGNMENT - 1) & !(PARCEL_ALIGNMENT - 1)
}

/// Growable byte buffer with a shared read/write data position.
///
/// Layout:
/// [i32]  4 bytes, little-endian
/// [i64]  8 bytes, little-endian
/// [bool] written as i32 0 / 1
/// [byte array] i32 length (-1 for null), bytes, zero padding to 4
/// [string] i32 byte length (-1 for null), UTF-8 bytes, NUL, zero padding to 4
#[derive(Debug, Clone, Default)]
pub struct Parcel {
    cursor: Cursor<Vec<u8>>,
}

impl Parcel {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cursor: Cursor::new(Vec::with_capacity(capacity)),
        }
    }

    /// Wraps a copy of `data`, positioned at the start.
    pub fn unmarshall(data: &[u8]) -> Self {
        Self {
            cursor: Cursor::new(data.to_vec()),
        }
    }

    /// Snapshot of every byte written so far, independent of the data position.
    pub fn marshall(&self) -> Bytes {
        Bytes::copy_from_slice(self.cursor.get_ref())
    }

    pub fn data_size(&self) -> usize {
        self.cursor.get_ref().len()
    }

    pub fn data_position(&self) -> usize {
        self.cursor.position() as usize
    }

    /// Moves the cursor used by both reads and writes. Positions past the
    /// end are allowed; reads there fail and writes zero-fill the gap.
    pub fn set_data_position(&mut self, position: usize) {
        self.cursor.set_position(position as u64);
    }

    pub fn data_avail(&self) -> usize {
        self.data_size().saturating_sub(self.data_position())
    }

    fn ensure_avail(&self, needed: usize) -> Result<()> {
        let available = self.data_avail();
        if needed > available {
            return Err(ParcelError::NotEnoughData { needed, available });
        }
        Ok(())
    }

    fn check_len(len: usize) -> Result<()> {
        if len > MAX_ARRAY_LEN {
            return Err(ParcelError::PayloadTooLarge {
                len,
                max: MAX_ARRAY_LEN,
            });
        }
        Ok(())
    }

    fn write_padded(&mut self, body: &[u8], padded_len: usize) -> Result<()> {
        self.cursor.write_all(body)?;
        self.cursor.write_all(&PADDING[..padded_len - body.len()])?;
        Ok(())
    }

    fn skip(&mut self, len: usize) {
        let position = self.cursor.position() + len as u64;
        self.cursor.set_position(position);
    }

    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.cursor.write_i32::<LittleEndian>(value)?;
        Ok(())
    }

    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.cursor.write_i64::<LittleEndian>(value)?;
        Ok(())
    }

    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_i32(value as i32)
    }

    /// Writes a length-prefixed byte array; `None` is written as a null array.
    pub fn write_byte_array(&mut self, bytes: Option<&[u8]>) -> Result<()> {
        let Some(bytes) = bytes else {
            return self.write_i32(NULL_LENGTH);
        };
        Self::check_len(bytes.len())?;
        self.write_i32(bytes.len() as i32)?;
        self.write_padded(bytes, aligned(bytes.len()))
    }

    pub fn write_string(&mut self, value: Option<&str>) -> Result<()> {
        let Some(value) = value else {
            return self.write_i32(NULL_LENGTH);
        };
        let len = value.len();
        Self::check_len(len)?;
        self.write_i32(len as i32)?;
        self.cursor.write_all(value.as_bytes())?;
        // NUL terminator is folded into the padding.
        self.write_padded(&[0], aligned(len + 1) - len)
    }

    pub fn write_parcelable<T: Parcelable>(&mut self, value: &T) -> std::result::Result<(), T::Error> {
        value.write_to_parcel(self)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.ensure_avail(4)?;
        Ok(self.cursor.read_i32::<LittleEndian>()?)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        self.ensure_avail(8)?;
        Ok(self.cursor.read_i64::<LittleEndian>()?)
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_i32()? != 0)
    }

    /// Reads a length prefix, `None` for the null sentinel.
    fn read_len(&mut self) -> Result<Option<usize>> {
        let len = self.read_i32()?;
        if len == NULL_LENGTH {
            return Ok(None);
        }
        if len < 0 {
            return Err(ParcelError::BadValue(format!("negative length {}", len)));
        }
        let len = len as usize;
        Self::check_len(len)?;
        Ok(Some(len))
    }

    pub fn read_byte_array(&mut self) -> Result<Option<Vec<u8>>> {
        let Some(len) = self.read_len()? else {
            return Ok(None);
        };
        let padded = aligned(len);
        self.ensure_avail(padded)?;
        let mut bytes = vec![0u8; len];
        self.cursor.read_exact(&mut bytes)?;
        self.skip(padded - len);
        Ok(Some(bytes))
    }

    pub fn read_string(&mut self) -> Result<Option<String>> {
        let Some(len) = self.read_len()? else {
            return Ok(None);
        };
        let padded = aligned(len + 1);
        self.ensure_avail(padded)?;
        let mut bytes = vec![0u8; len + 1];
        self.cursor.read_exact(&mut bytes)?;
        self.skip(padded - bytes.len());
        if bytes.pop() != Some(0) {
            return Err(ParcelError::BadValue("string is not NUL terminated".into()));
        }
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| ParcelError::InvalidUtf8)
    }

    pub fn read_parcelable<T: Parcelable>(&mut self) -> std::result::Result<T, T::Error> {
        T::read_from_parcel(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives_are_aligned() {
        let mut parcel = Parcel::new();
        parcel.write_i32(-7).unwrap();
        parcel.write_i64(1 << 40).unwrap();
        parcel.write_bool(true).unwrap();
        assert_eq!(parcel.data_size(), 16);

        parcel.set_data_position(0);
        assert_eq!(parcel.read_i32().unwrap(), -7);
        assert_eq!(parcel.read_i64().unwrap(), 1 << 40);
        assert!(parcel.read_bool().unwrap());
        assert_eq!(parcel.data_avail(), 0);
    }

    #[test]
    fn test_byte_array_padding_and_null() {
        let mut parcel = Parcel::new();
        parcel.write_byte_array(Some(&[1u8, 2, 3, 4, 5][..])).unwrap();
        // 4 (len) + 5 bytes padded to 8
        assert_eq!(parcel.data_size(), 12);
        parcel.write_byte_array(None).unwrap();
        parcel.write_byte_array(Some(&[][..])).unwrap();
        assert_eq!(parcel.data_size(), 20);

        parcel.set_data_position(0);
        assert_eq!(parcel.read_byte_array().unwrap(), Some(vec![1, 2, 3, 4, 5]));
        assert_eq!(parcel.data_position(), 12);
        assert_eq!(parcel.read_byte_array().unwrap(), None);
        assert_eq!(parcel.read_byte_array().unwrap(), Some(vec![]));
    }

    #[test]
    fn test_string_layout() {
        let mut parcel = Parcel::new();
        parcel.write_string(Some("abcd")).unwrap();
        // 4 (len) + 4 bytes + NUL padded to 8
        assert_eq!(parcel.data_size(), 12);
        parcel.write_string(None).unwrap();

        let bytes = parcel.marshall();
        assert_eq!(&bytes[0..4], &4i32.to_le_bytes());
        assert_eq!(bytes[8], 0);

        let mut reader = Parcel::unmarshall(&bytes);
        assert_eq!(reader.read_string().unwrap().as_deref(), Some("abcd"));
        assert_eq!(reader.read_string().unwrap(), None);
    }

    #[test]
    fn test_truncated_read() {
        let mut parcel = Parcel::unmarshall(&[1, 0]);
        let result = parcel.read_i32();
        assert!(matches!(
            result,
            Err(ParcelError::NotEnoughData { needed: 4, available: 2 })
        ));
    }

    #[test]
    fn test_truncated_array_body() {
        let mut parcel = Parcel::new();
        parcel.write_i32(16).unwrap();
        parcel.write_i32(0).unwrap();
        parcel.set_data_position(0);
        assert!(matches!(
            parcel.read_byte_array(),
            Err(ParcelError::NotEnoughData { needed: 16, available: 4 })
        ));
    }

    #[test]
    fn test_negative_length_rejected() {
        let mut parcel = Parcel::new();
        parcel.write_i32(-5).unwrap();
        parcel.set_data_position(0);
        assert!(matches!(parcel.read_byte_array(), Err(ParcelError::BadValue(_))));
    }

    #[test]
    fn test_oversized_array_rejected() {
        let mut parcel = Parcel::new();
        parcel.write_i32((MAX_ARRAY_LEN + 1) as i32).unwrap();
        parcel.set_data_position(0);
        assert!(matches!(
            parcel.read_byte_array(),
            Err(ParcelError::PayloadTooLarge { .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let mut parcel = Parcel::new();
        parcel.write_i32(2).unwrap();
        parcel.write_padded(&[0xff, 0xfe, 0], 4).unwrap();
        parcel.set_data_position(0);
        assert!(matches!(parcel.read_string(), Err(ParcelError::InvalidUtf8)));
    }

    #[test]
    fn test_set_data_position_overwrites() {
        let mut parcel = Parcel::new();
        parcel.write_i32(1).unwrap();
        parcel.write_i32(2).unwrap();
        parcel.set_data_position(0);
        parcel.write_i32(9).unwrap();
        assert_eq!(parcel.data_size(), 8);
        parcel.set_data_position(0);
        assert_eq!(parcel.read_i32().unwrap(), 9);
        assert_eq!(parcel.read_i32().unwrap(), 2);
    }

    #[test]
    fn test_aligned() {
        assert_eq!(aligned(0), 0);
        assert_eq!(aligned(1), 4);
        assert_eq!(aligned(4), 4);
        assert_eq!(aligned(5), 8);
    }
}
