/// Length of `s` as a browser text field reports it: UTF-16 code units.
/// Characters outside the BMP (most emoji) count as two.
pub fn text_length(s: &str) -> usize {
    s.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::text_length;

    #[test]
    fn ascii_counts_one_per_char() {
        assert_eq!(text_length(""), 0);
        assert_eq!(text_length("hello"), 5);
        assert_eq!(text_length("line one\nline two"), 17);
    }

    #[test]
    fn bmp_chars_count_once() {
        assert_eq!(text_length("café"), 4);
        assert_eq!(text_length("Привет"), 6);
    }

    #[test]
    fn astral_chars_count_twice() {
        assert_eq!(text_length("👍"), 2);
        assert_eq!(text_length("ok 👍"), 5);
    }
}
