// Bit `i` lives in byte `i / 8`, counted from the most significant end, so
// the packed bytes read in the same order as the rendered binary string.

#[inline(always)]
fn mask(bit_pos: usize) -> u8 {
    0x80 >> (bit_pos % 8)
}

pub fn set_bit(slice: &mut [u8], bit_pos: usize, value: bool) {
    let byte = bit_pos / 8;
    if value {
        slice[byte] |= mask(bit_pos);
    } else {
        slice[byte] &= !mask(bit_pos);
    }
}

pub fn get_bit(slice: &[u8], bit_pos: usize) -> bool {
    slice[bit_pos / 8] & mask(bit_pos) != 0
}
