pub(crate) mod date;
pub(crate) mod text;

/// Decodes a 28-bit synchsafe integer, as used by ID3v2 headers
pub(crate) fn unsynch_u32(n: u32) -> u32 {
	n & 0xFF | (n & 0xFF00) >> 1 | (n & 0xFF_0000) >> 2 | (n & 0xFF00_0000) >> 3
}
