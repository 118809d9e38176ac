//! UTF-16 helpers for `PWSTR` values handed back by the OS.

/// Length of the nul-terminated UTF-16 string at `ptr`, in code units.
///
/// # Safety
///
/// `ptr` must point to a valid nul-terminated UTF-16 buffer.
pub unsafe fn wide_len(ptr: *const u16) -> usize {
    let mut len = 0;
    while *ptr.add(len) != 0 {
        len += 1;
    }
    len
}

/// Lossy conversion of a nul-terminated UTF-16 string. A null pointer
/// yields the empty string; unpaired surrogates become replacement
/// characters.
///
/// # Safety
///
/// `ptr` must be null or point to a valid nul-terminated UTF-16 buffer.
pub unsafe fn string_from_wide(ptr: *const u16) -> String {
    if ptr.is_null() {
        return String::new();
    }
    let units = std::slice::from_raw_parts(ptr, wide_len(ptr));
    String::from_utf16_lossy(units)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide(text: &str) -> Vec<u16> {
        text.encode_utf16().chain(std::iter::once(0)).collect()
    }

    #[test]
    fn converts_host_name() {
        let buf = wide("example.com");
        let text = unsafe { string_from_wide(buf.as_ptr()) };
        assert_eq!(text, "example.com");
    }

    #[test]
    fn null_pointer_yields_empty_string() {
        let text = unsafe { string_from_wide(std::ptr::null()) };
        assert_eq!(text, "");
    }

    #[test]
    fn empty_string_round_trips() {
        let buf = wide("");
        let text = unsafe { string_from_wide(buf.as_ptr()) };
        assert_eq!(text, "");
    }

    #[test]
    fn unpaired_surrogate_is_replaced() {
        let buf = vec![0xd800, 0x0061, 0];
        let text = unsafe { string_from_wide(buf.as_ptr()) };
        assert_eq!(text, "\u{fffd}a");
    }
}
