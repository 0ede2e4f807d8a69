//! The compression pipeline: text in, container bytes out, and back.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::bitstreams::{BitReader, BitWriterBuilder};
use crate::container::Container;
use crate::error::{Error, Result};
use crate::frequency::count_frequencies;
use crate::huffman::{build_code_table, build_tree, treecodec, HuffNode};
use crate::Symbol;

/// Compresses `text` into container bytes.
///
/// The symbol stream is scanned three times: once to count frequencies, once
/// to total the output bit length, and once to emit the codes.
pub fn compress(text: &str) -> Result<Vec<u8>> {
    let freqs = count_frequencies(text.encode_utf16());
    let tree = build_tree(&freqs)?;
    let table = build_code_table(&tree);

    let total_bits: usize = text
        .encode_utf16()
        .map(|symbol| table.get(&symbol).map_or(0, Vec::len))
        .sum();

    let mut writer = BitWriterBuilder::with_bit_capacity(total_bits);
    for symbol in text.encode_utf16() {
        // A symbol without a code cannot occur for a table built from the
        // same stream; such symbols are skipped rather than treated as errors.
        if let Some(code) = table.get(&symbol) {
            writer.push_code(code);
        }
    }

    let tree_bytes = treecodec::serialize(&tree);
    debug!(
        "encoded {} distinct symbols: {} tree bytes, {} content bits",
        freqs.len(),
        tree_bytes.len(),
        writer.written_bits
    );

    Ok(Container::new(tree_bytes, writer.build()).to_bytes())
}

/// Expands container bytes back into the original text.
pub fn decompress(bytes: &[u8]) -> Result<String> {
    let container = Container::from_bytes(bytes)?;
    let tree = treecodec::deserialize(&container.tree)?;
    let mut reader = BitReader::from(container.content);

    let mut symbols: Vec<Symbol> = Vec::new();

    if let HuffNode::Leaf { symbol, .. } = &tree {
        // Bare-leaf tree: one content bit per occurrence of the lone symbol.
        while reader.read_bit().is_some() {
            symbols.push(*symbol);
        }
    } else {
        let mut cursor = &tree;
        while let Some(bit) = reader.read_bit() {
            if let HuffNode::Internal { left, right, .. } = cursor {
                cursor = if bit { right } else { left };
            }
            if let HuffNode::Leaf { symbol, .. } = cursor {
                symbols.push(*symbol);
                cursor = &tree;
            }
        }
        // A cursor still mid-tree here consumed only byte-alignment padding.
    }

    debug!("decoded {} symbols", symbols.len());

    String::from_utf16(&symbols).map_err(|_| Error::malformed("decoded text is not valid UTF-16"))
}

/// Compresses the text file at `source` into a container file at `dest`.
pub fn compress_file(source: &Path, dest: &Path) -> Result<()> {
    let text = fs::read_to_string(source)?;
    let bytes = compress(&text)?;

    write_atomic(dest, &bytes)
}

/// Expands the container file at `source` into a text file at `dest`.
pub fn decompress_file(source: &Path, dest: &Path) -> Result<()> {
    let bytes = fs::read(source)?;
    let text = decompress(&bytes)?;

    write_atomic(dest, text.as_bytes())
}

/// Writes `bytes` to a sibling temporary file and renames it over `path`, so
/// a failed operation never leaves a partial artifact at `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    if let Err(e) = fs::write(&tmp, bytes).and_then(|_| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    Ok(())
}
