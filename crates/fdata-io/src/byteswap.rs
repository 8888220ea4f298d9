//! Raw byte-swap helpers for buffers of fixed-width words.

/// Swap bytes of 4-byte words in place.
pub fn bswap4(buf: &mut [u8]) {
    debug_assert!(buf.len() % 4 == 0, "bswap4: buffer length must be multiple of 4");
    for chunk in buf.chunks_exact_mut(4) {
        chunk.swap(0, 3);
        chunk.swap(1, 2);
    }
}

/// Swap bytes of 2-byte words in place.
pub fn bswap2(buf: &mut [u8]) {
    debug_assert!(buf.len() % 2 == 0, "bswap2: buffer length must be multiple of 2");
    for chunk in buf.chunks_exact_mut(2) {
        chunk.swap(0, 1);
    }
}

/// Swap bytes of 8-byte words in place.
pub fn bswap8(buf: &mut [u8]) {
    debug_assert!(buf.len() % 8 == 0, "bswap8: buffer length must be multiple of 8");
    for chunk in buf.chunks_exact_mut(8) {
        chunk.swap(0, 7);
        chunk.swap(1, 6);
        chunk.swap(2, 5);
        chunk.swap(3, 4);
    }
}

/// Detect platform byte order: returns `true` if big-endian.
pub fn is_big_endian() -> bool {
    cfg!(target_endian = "big")
}

/// Probe the byte-order sentinel of a raw header: `true` if the slot does
/// not read as the order constant natively, i.e. the data needs a swap.
pub fn needs_swap(flt_order_bytes: &[u8; 4]) -> bool {
    let val = f32::from_ne_bytes(*flt_order_bytes);
    (val - fdata_core::FD_ORDER_CONS).abs() > 0.001
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bswap4_reverses_words() {
        let mut buf = [0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        bswap4(&mut buf);
        assert_eq!(buf, [0x04, 0x03, 0x02, 0x01, 0x08, 0x07, 0x06, 0x05]);
    }

    #[test]
    fn bswap2_reverses_words() {
        let mut buf = [0x01u8, 0x02, 0x03, 0x04];
        bswap2(&mut buf);
        assert_eq!(buf, [0x02, 0x01, 0x04, 0x03]);
    }

    #[test]
    fn bswap8_reverses_words() {
        let mut buf = [1u8, 2, 3, 4, 5, 6, 7, 8];
        bswap8(&mut buf);
        assert_eq!(buf, [8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn double_swap_is_identity() {
        let orig = [9u8, 8, 7, 6, 5, 4, 3, 2];
        let mut buf = orig;
        bswap4(&mut buf);
        bswap4(&mut buf);
        assert_eq!(buf, orig);
    }

    #[test]
    fn needs_swap_probe() {
        let native = fdata_core::FD_ORDER_CONS.to_ne_bytes();
        assert!(!needs_swap(&native));
        let mut foreign = native;
        foreign.reverse();
        assert!(needs_swap(&foreign));
    }
}
