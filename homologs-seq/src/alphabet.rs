use crate::error::InvalidBase;

/// A lookup table that maps ASCII characters representing DNA bases
/// (A, C, G, T and their lowercase counterparts) to their uppercase
/// Watson-Crick complement. Every other byte maps to 0.
const COMPLEMENT_ARRAY: [u8; 256] = {
    let mut arr = [0u8; 256];
    arr[b'A' as usize] = b'T';
    arr[b'a' as usize] = b'T';
    arr[b'C' as usize] = b'G';
    arr[b'c' as usize] = b'G';
    arr[b'G' as usize] = b'C';
    arr[b'g' as usize] = b'C';
    arr[b'T' as usize] = b'A';
    arr[b't' as usize] = b'A';
    arr
};

/// Complement of a single base, uppercased. `None` for anything outside
/// {A, C, G, T} in either case.
#[inline]
pub fn complement(base: u8) -> Option<u8> {
    match COMPLEMENT_ARRAY[base as usize] {
        0 => None,
        c => Some(c),
    }
}

///
/// Check that every byte is one of A, C, G or T, in either case.
///
/// # Returns
/// The first offending byte and its offset
pub fn validate_bases(sequence: &[u8]) -> Result<(), InvalidBase> {
    match sequence.iter().position(|&b| complement(b).is_none()) {
        Some(position) => Err(InvalidBase {
            base: sequence[position],
            position,
        }),
        None => Ok(()),
    }
}

///
/// Reverse complement a nucleotide sequence. The result is uppercase.
///
/// # Arguments
/// - bytes: bases over {A, C, G, T}, case-insensitive
///
/// # Returns
/// The reverse complement, or the first base that has no complement. Its
/// position is an offset into `bytes`.
pub fn reverse_complement(bytes: &[u8]) -> Result<String, InvalidBase> {
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());

    for (offset, &base) in bytes.iter().enumerate().rev() {
        match complement(base) {
            Some(c) => out.push(c),
            None => {
                // report the leftmost bad base, not the first one met
                validate_bases(&bytes[..offset])?;
                return Err(InvalidBase {
                    base,
                    position: offset,
                });
            }
        }
    }

    // only ASCII bases were pushed
    Ok(String::from_utf8_lossy(&out).into_owned())
}
