//! Symbol table segment codec.
//!
//! A symbol table segment is a little-endian `u32` name count followed by
//! exactly that many NUL-terminated names, packed back to back in
//! declaration order. Names are bound to sequential slots starting at
//! [`FIRST_SLOT`]; slot 0 stays reserved.

use core_types::{RuntimeError, RuntimeResult, SymbolTable, FIRST_SLOT};

/// Width of the leading name count in bytes.
pub const COUNT_WIDTH: usize = 4;

/// Decode a symbol table segment.
///
/// Bytes after the last declared name are ignored; see
/// [`decode_symbol_table_prefix`] to learn where the segment ended.
///
/// # Errors
///
/// Returns [`RuntimeError::MalformedSymbolTable`] when the buffer is shorter
/// than the declared count requires or a name is not valid UTF-8.
///
/// # Example
///
/// ```
/// use bytecode_system::decode_symbol_table;
///
/// let mut data = 2u32.to_le_bytes().to_vec();
/// data.extend_from_slice(b"x\0y\0");
///
/// let table = decode_symbol_table(&data).unwrap();
/// assert_eq!(table.slot("x"), Some(1));
/// assert_eq!(table.slot("y"), Some(2));
/// ```
pub fn decode_symbol_table(data: &[u8]) -> RuntimeResult<SymbolTable> {
    decode_symbol_table_prefix(data).map(|(table, _)| table)
}

/// Decode a symbol table segment at the start of `data`.
///
/// Returns the table and the number of bytes the segment occupied.
pub fn decode_symbol_table_prefix(data: &[u8]) -> RuntimeResult<(SymbolTable, usize)> {
    let count_bytes: [u8; COUNT_WIDTH] = data
        .get(..COUNT_WIDTH)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| {
            RuntimeError::malformed(format!(
                "buffer of {} bytes is too short for the name count",
                data.len()
            ))
        })?;
    let count = u32::from_le_bytes(count_bytes);

    let mut offset = COUNT_WIDTH;
    let mut table = SymbolTable::new();

    for index in 0..count {
        let rest = &data[offset..];
        let len = rest.iter().position(|&b| b == 0).ok_or_else(|| {
            RuntimeError::malformed(format!(
                "declared {} names but the buffer ends inside name {}",
                count,
                index + 1
            ))
        })?;
        let name = std::str::from_utf8(&rest[..len]).map_err(|e| {
            RuntimeError::malformed(format!("name {} is not valid UTF-8: {}", index + 1, e))
        })?;

        table.insert(name, FIRST_SLOT + index);
        offset += len + 1;
    }

    tracing::debug!(names = count, bytes = offset, "decoded symbol table");
    Ok((table, offset))
}

/// Encode names into a symbol table segment.
///
/// # Errors
///
/// Returns [`RuntimeError::MalformedSymbolTable`] if a name contains a NUL
/// byte or there are more names than the count field can hold.
pub fn encode_symbol_table<I, S>(names: I) -> RuntimeResult<Vec<u8>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut body = Vec::new();
    let mut count: u32 = 0;

    for name in names {
        let name = name.as_ref();
        if name.as_bytes().contains(&0) {
            return Err(RuntimeError::malformed(format!(
                "name {:?} contains a NUL byte",
                name
            )));
        }
        count = count
            .checked_add(1)
            .ok_or_else(|| RuntimeError::malformed("too many names"))?;
        body.extend_from_slice(name.as_bytes());
        body.push(0);
    }

    let mut bytes = Vec::with_capacity(COUNT_WIDTH + body.len());
    bytes.extend_from_slice(&count.to_le_bytes());
    bytes.extend_from_slice(&body);
    Ok(bytes)
}
