//! # Shared Utility Functions
//!
//! Address formatting used by the navbar and the connected-wallet panel.
//!
//! Cardano payment addresses are bech32 (`addr1...` on mainnet, `addr_test1...`
//! on testnets) and run past 100 characters, so the short form keeps the
//! human-readable prefix visible.
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "addr1qx2fxv2umyhttkxyxp8x0dlpdt3k6cwng5pxj3jhsydzer3n0d3vllmyqwsx5wktcd8cc3sq835lu7drv2xwl2wywfgse35a3x";
//! assert_eq!(format_address(address, 10, 6), "addr1qx2fx...e35a3x");
//! ```

/// Default number of leading characters kept by [`truncate_address`].
pub const ADDRESS_PREFIX_LEN: usize = 10;
/// Default number of trailing characters kept by [`truncate_address`].
pub const ADDRESS_SUFFIX_LEN: usize = 6;

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is not longer than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// assert_eq!(format_address("addr_test1vz0123456789abcdef", 4, 4), "addr...cdef");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();
    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with the default Cardano widths.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(truncate_address("addr1q9abcdefghijklmnopqrstuvwxyz"), "addr1q9abc...uvwxyz");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "addr1qx2fxv2umyhttkxyxp8x0dlpdt3k6cwng5pxj3jhsydzer3n0d3vllmyqwsx5wktcd8cc3sq835lu7drv2xwl2wywfgse35a3x";
        assert_eq!(format_address(addr, 5, 4), "addr1...5a3x");
        assert_eq!(format_address(addr, 2, 2), "ad...3x");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("abcdefgh", 4, 4), "abcdefgh");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(
            truncate_address("addr_test1vz2fxv2umyhttkxyxp8x0dlpdt3k6cwng5"),
            "addr_test1...6cwng5"
        );
    }
}
