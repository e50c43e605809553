/// Growable little-endian byte writer.
///
/// Sections are emitted as tag, length, payload; when a payload length is
/// not known up front the length word is back-filled with `patch_u32_le`.
pub struct Writer {
    data: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    pub fn write_u8(&mut self, v: u8) {
        self.data.push(v);
    }

    pub fn write_u16_le(&mut self, v: u16) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u32_le(&mut self, v: u32) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_tag(&mut self, tag: [u8; 4]) {
        self.data.extend_from_slice(&tag);
    }

    /// Overwrite a previously written `u32` in place.
    pub fn patch_u32_le(&mut self, offset: usize, v: u32) {
        self.data[offset..offset + 4].copy_from_slice(&v.to_le_bytes());
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Writer> for Vec<u8> {
    fn from(writer: Writer) -> Self {
        writer.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::reader::Reader;

    #[test]
    fn test_roundtrip_primitives() {
        let mut writer = Writer::new();
        writer.write_u8(0x42);
        writer.write_u16_le(0x1234);
        writer.write_u32_le(0xDEADBEEF);

        let data = writer.into_vec();
        let mut reader = Reader::new(&data);

        assert_eq!(reader.read_u8().unwrap(), 0x42);
        assert_eq!(reader.read_u16_le().unwrap(), 0x1234);
        assert_eq!(reader.read_u32_le().unwrap(), 0xDEADBEEF);
    }

    #[test]
    fn test_patch_u32() {
        let mut writer = Writer::new();
        writer.write_tag(*b"UNIT");
        let at = writer.len();
        writer.write_u32_le(0);
        writer.write_bytes(&[0xAA; 16]);
        writer.patch_u32_le(at, 16);

        let data = writer.into_vec();
        let mut reader = Reader::new(&data);
        assert_eq!(reader.read_tag().unwrap(), *b"UNIT");
        assert_eq!(reader.read_u32_le().unwrap(), 16);
    }
}
