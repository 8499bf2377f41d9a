// pixels.rs - Field to RGBA pixel buffer, one 4-byte tuple per cell

pub const ALIVE: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
pub const DEAD: [u8; 4] = [0x00, 0x00, 0x00, 0x00];

/// Refills `out` with the RGBA image of `cells`, reusing its allocation.
pub fn write_pixels(cells: &[bool], out: &mut Vec<u8>) {
    out.clear();
    out.reserve(cells.len() * 4);
    for &alive in cells {
        out.extend_from_slice(if alive { &ALIVE } else { &DEAD });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_tuple_per_cell() {
        let mut out = Vec::new();
        write_pixels(&[true, false, false], &mut out);
        assert_eq!(out.len(), 12);
        assert_eq!(&out[0..4], &ALIVE);
        assert_eq!(&out[4..8], &DEAD);
        assert_eq!(&out[8..12], &DEAD);
    }

    #[test]
    fn buffer_is_refilled_not_appended() {
        let mut out = vec![7; 40];
        write_pixels(&[false, true], &mut out);
        assert_eq!(out, [0, 0, 0, 0, 0xff, 0xff, 0xff, 0xff]);
    }
}
