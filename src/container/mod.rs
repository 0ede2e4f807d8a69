//! The on-disk container format.
//!
//! ```text
//! [4 bytes]          tree byte length N   (little-endian u32)
//! [N bytes]          serialized tree
//! [4 bytes]          content bit length M (little-endian u32)
//! [ceil(M/8) bytes]  packed content       (LSB-first per byte)
//! ```

use crate::bitstreams::BitBuffer;
use crate::error::{Error, Result};

/// One compressed artifact: the serialized tree plus the packed content.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Container {
    pub tree: Box<[u8]>,
    pub content: BitBuffer,
}

impl Container {
    pub fn new(tree: Vec<u8>, content: BitBuffer) -> Self {
        assert!(
            tree.len() <= u32::MAX as usize,
            "serialized tree exceeds the u32 length field"
        );
        assert!(
            content.bit_len <= u32::MAX as usize,
            "content exceeds the u32 bit-length field"
        );

        Container {
            tree: tree.into_boxed_slice(),
            content,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.tree.len() + self.content.bytes.len());

        bytes.extend_from_slice(&(self.tree.len() as u32).to_le_bytes());
        bytes.extend_from_slice(&self.tree);
        bytes.extend_from_slice(&(self.content.bit_len as u32).to_le_bytes());
        bytes.extend_from_slice(&self.content.bytes);

        bytes
    }

    /// Parses a container, validating that both declared lengths fit in the
    /// available bytes. Bytes past the declared spans are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Container> {
        let mut cursor = 0usize;

        let tree_len = read_u32(bytes, &mut cursor, "tree byte length")? as usize;
        let tree = read_span(bytes, &mut cursor, tree_len, "serialized tree")?;

        let bit_len = read_u32(bytes, &mut cursor, "content bit length")? as usize;
        let content = read_span(bytes, &mut cursor, (bit_len + 7) / 8, "packed content")?;

        Ok(Container {
            tree: tree.into(),
            content: BitBuffer {
                bytes: content.into(),
                bit_len,
            },
        })
    }
}

fn read_u32(bytes: &[u8], cursor: &mut usize, field: &str) -> Result<u32> {
    let end = *cursor + 4;
    let raw = bytes
        .get(*cursor..end)
        .ok_or_else(|| Error::malformed(format!("container truncated reading {}", field)))?;
    *cursor = end;

    Ok(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

fn read_span<'a>(bytes: &'a [u8], cursor: &mut usize, len: usize, field: &str) -> Result<&'a [u8]> {
    let end = cursor
        .checked_add(len)
        .ok_or_else(|| Error::malformed(format!("{} length overflows", field)))?;
    let span = bytes.get(*cursor..end).ok_or_else(|| {
        Error::malformed(format!(
            "container declares {} bytes of {} but only {} remain",
            len,
            field,
            bytes.len() - *cursor
        ))
    })?;
    *cursor = end;

    Ok(span)
}
