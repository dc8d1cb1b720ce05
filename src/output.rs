/*!
The binary count stream.

Counts are written as native-endian `u16`s in row-major order with no header,
so a `W x H` grid is exactly `2 * W * H` bytes. Readers need to know the grid
size and byte order out of band.
*/

use std::io::Write;

use log::debug;

use crate::error::Result;

pub fn write_counts<W: Write>(mut writer: W, counts: &[u16]) -> Result<()> {
    let bytes: &[u8] = bytemuck::cast_slice(counts);
    writer.write_all(bytes)?;
    writer.flush()?;
    debug!("wrote {} counts ({} bytes)", counts.len(), bytes.len());
    Ok(())
}

/// Read a count stream back. A trailing odd byte is ignored.
pub fn decode_counts(bytes: &[u8]) -> Vec<u16> {
    let whole = bytes.len() - bytes.len() % 2;
    bytemuck::allocation::pod_collect_to_vec(&bytes[..whole])
}
