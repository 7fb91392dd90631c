//! Wire format of file contents lists.
//!
//! A list object's payload is a concatenation of [`FileContents`] records,
//! each encoded as `varint(total_size_bytes) varint(reference.index)` using
//! little-endian base-128 varints.

use crate::error::DecodeError;

/// Reference embedded in an object's payload.
///
/// Holds a 1-based position into the containing object's outgoing reference
/// table. Index 0 means no reference was provided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocalReference {
    pub index: u32,
}

impl LocalReference {
    pub fn new(index: u32) -> Self {
        Self { index }
    }
}

/// Descriptor of a part of a file, or of a file as a whole.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FileContents {
    /// Length of the part in bytes.
    pub total_size_bytes: u64,
    /// Object backing the part.
    pub reference: LocalReference,
}

impl FileContents {
    pub fn new(total_size_bytes: u64, index: u32) -> Self {
        Self {
            total_size_bytes,
            reference: LocalReference::new(index),
        }
    }
}

/// Decoder of payloads consisting of a repeated message.
pub trait MessageListDecoder {
    type Message;

    /// Decode all messages in `data`. Returns the messages and the number of
    /// bytes consumed.
    fn decode(&self, data: &[u8]) -> Result<(Vec<Self::Message>, usize), DecodeError>;
}

/// [`MessageListDecoder`] for varint-encoded [`FileContents`] records.
#[derive(Clone, Copy, Debug, Default)]
pub struct VarintMessageListDecoder;

impl MessageListDecoder for VarintMessageListDecoder {
    type Message = FileContents;

    fn decode(&self, data: &[u8]) -> Result<(Vec<FileContents>, usize), DecodeError> {
        let mut messages = Vec::new();
        let mut pos = 0;
        while pos < data.len() {
            let (total_size_bytes, consumed) = decode_varint(data, pos)?;
            pos += consumed;

            let index_offset = pos;
            let (index, consumed) = decode_varint(data, pos)?;
            pos += consumed;
            let index = u32::try_from(index).map_err(|_| DecodeError::IndexTooLarge {
                offset: index_offset,
                value: index,
            })?;

            messages.push(FileContents {
                total_size_bytes,
                reference: LocalReference { index },
            });
        }
        Ok((messages, pos))
    }
}

/// Encode descriptors in the format accepted by [`VarintMessageListDecoder`].
pub fn encode_file_contents(messages: &[FileContents]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(messages.len() * 4);
    for message in messages {
        encode_varint(&mut buf, message.total_size_bytes);
        encode_varint(&mut buf, u64::from(message.reference.index));
    }
    buf
}

fn encode_varint(buf: &mut Vec<u8>, mut value: u64) {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value > 0 {
            byte |= 0x80;
        }
        buf.push(byte);
        if value == 0 {
            break;
        }
    }
}

/// Decode a varint starting at `offset`. Returns (value, bytes_consumed).
fn decode_varint(data: &[u8], offset: usize) -> Result<(u64, usize), DecodeError> {
    let mut value: u64 = 0;
    let mut shift = 0u32;
    for (i, &byte) in data[offset..].iter().enumerate() {
        let bits = u64::from(byte & 0x7F);
        // The tenth byte may only contribute the top bit.
        if shift == 63 && bits > 1 {
            return Err(DecodeError::VarintOverflow { offset });
        }
        value |= bits << shift;
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
        shift += 7;
        if shift > 63 {
            return Err(DecodeError::VarintOverflow { offset });
        }
    }
    Err(DecodeError::TruncatedVarint { offset })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn varint_small_value_is_one_byte() {
        let mut buf = Vec::new();
        encode_varint(&mut buf, 42);
        assert_eq!(buf, vec![42]);
        assert_eq!(decode_varint(&buf, 0).unwrap(), (42, 1));
    }

    #[test]
    fn varint_multi_byte() {
        let mut buf = Vec::new();
        encode_varint(&mut buf, 300);
        assert_eq!(buf, vec![0xAC, 0x02]);
        assert_eq!(decode_varint(&buf, 0).unwrap(), (300, 2));
    }

    #[test]
    fn varint_max_value() {
        let mut buf = Vec::new();
        encode_varint(&mut buf, u64::MAX);
        assert_eq!(buf.len(), 10);
        assert_eq!(decode_varint(&buf, 0).unwrap(), (u64::MAX, 10));
    }

    #[test]
    fn varint_decodes_at_offset() {
        let buf = [0xFF, 0x05];
        assert_eq!(decode_varint(&buf, 1).unwrap(), (5, 1));
    }

    #[test]
    fn varint_truncated() {
        let err = decode_varint(&[0x80], 0).unwrap_err();
        assert_eq!(err, DecodeError::TruncatedVarint { offset: 0 });
    }

    #[test]
    fn varint_overflow_in_tenth_byte() {
        let mut buf = vec![0xFF; 9];
        buf.push(0x02);
        let err = decode_varint(&buf, 0).unwrap_err();
        assert_eq!(err, DecodeError::VarintOverflow { offset: 0 });
    }

    #[test]
    fn varint_overflow_past_tenth_byte() {
        let buf = vec![0x80; 11];
        let err = decode_varint(&buf, 0).unwrap_err();
        assert_eq!(err, DecodeError::VarintOverflow { offset: 0 });
    }

    // -----------------------------------------------------------------------
    // Message list decoding
    // -----------------------------------------------------------------------

    #[test]
    fn decode_empty_payload() {
        let (messages, consumed) = VarintMessageListDecoder.decode(&[]).unwrap();
        assert!(messages.is_empty());
        assert_eq!(consumed, 0);
    }

    #[test]
    fn decode_records() {
        let data = encode_file_contents(&[FileContents::new(3, 1), FileContents::new(1000, 2)]);
        assert_eq!(data, vec![3, 1, 0xE8, 0x07, 2]);

        let (messages, consumed) = VarintMessageListDecoder.decode(&data).unwrap();
        assert_eq!(consumed, data.len());
        assert_eq!(
            messages,
            vec![FileContents::new(3, 1), FileContents::new(1000, 2)]
        );
    }

    #[test]
    fn decode_record_missing_reference() {
        let err = VarintMessageListDecoder.decode(&[3, 1, 7]).unwrap_err();
        assert_eq!(err, DecodeError::TruncatedVarint { offset: 3 });
    }

    #[test]
    fn decode_index_wider_than_32_bits() {
        let mut data = vec![1];
        encode_varint(&mut data, u64::from(u32::MAX) + 1);
        let err = VarintMessageListDecoder.decode(&data).unwrap_err();
        assert_eq!(
            err,
            DecodeError::IndexTooLarge {
                offset: 1,
                value: u64::from(u32::MAX) + 1
            }
        );
    }

    #[test]
    fn zero_index_is_preserved() {
        let (messages, _) = VarintMessageListDecoder.decode(&[5, 0]).unwrap();
        assert_eq!(messages[0].reference, LocalReference::default());
    }
}
