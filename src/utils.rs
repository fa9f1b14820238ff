use std::io::{self, Read, Seek, SeekFrom};

use crate::constants::SECTOR_SIZE;

/// Reads `count` consecutive sectors of `sector_size` bytes starting at `sector`.
///
/// # Arguments
///
/// - `reader`: The medium to read from.
/// - `sector`: The first sector number to read.
/// - `count`: The number of sectors to read.
/// - `sector_size`: The size in bytes of a sector.
///
/// # Errors
///
/// Returns an `io::Error` if the sectors cannot be read completely.
pub fn read_sectors<T: Read + Seek>(
    reader: &mut T,
    sector: u64,
    count: usize,
    sector_size: usize,
) -> io::Result<Vec<u8>> {
    let mut buffer = vec![0; count * sector_size];

    reader.seek(SeekFrom::Start(sector_size as u64 * sector))?;

    reader.read_exact(&mut buffer).map_err(|err| {
        io::Error::new(
            err.kind(),
            format!("Failed to read {count} sector(s) from {sector}: {err}"),
        )
    })?;

    Ok(buffer)
}

/// Reads as many bytes as possible, up to `buffer.len()`, starting at `offset`.
///
/// Unlike `read_exact`, hitting the end of the medium is not an error: the number of bytes
/// actually read is returned and the caller decides whether it is enough.
pub fn read_up_to<T: Read + Seek>(reader: &mut T, offset: u64, buffer: &mut [u8]) -> io::Result<usize> {
    reader.seek(SeekFrom::Start(offset))?;

    let mut filled = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }

    Ok(filled)
}

/// Returns the number of sectors needed to hold `size` bytes.
pub fn sectors_for(size: usize) -> usize {
    size.div_ceil(SECTOR_SIZE)
}

/// Extracts a 32-bit unsigned integer from a buffer at a given offset.
///
/// # Arguments
///
/// - `buffer`: A slice of bytes from which the value will be extracted.
/// - `offset`: The offset within the buffer where the 32-bit value starts.
///
/// Returns `None` if the slice does not contain enough bytes starting from the offset.
pub fn u32_at(buffer: &[u8], offset: usize) -> Option<u32> {
    let bytes = buffer.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_le_bytes(bytes.try_into().ok()?))
}

/// Extracts a NUL-terminated string from a buffer at a given offset.
///
/// Returns `None` if the offset is out of bounds or no terminator is found.
pub fn c_str_at(buffer: &[u8], offset: usize) -> Option<String> {
    let tail = buffer.get(offset..)?;
    let end = tail.iter().position(|b| *b == 0)?;
    Some(String::from_utf8_lossy(&tail[..end]).into_owned())
}

/// Converts a space padded identifier into a string.
pub fn padded_str(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches([' ', '\0'])
        .to_string()
}
