use std::fmt;

/// Characters in one SMS segment.
pub const SEGMENT_LEN: usize = 160;

/// What the `remaining` label shows for a given message length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    /// Only set once the message spills past the first segment.
    pub segments: Option<usize>,
    pub remaining: usize,
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(segments) = self.segments {
            write!(f, "({segments} messages) ")?;
        }
        write!(f, "{}/{SEGMENT_LEN} remaining", self.remaining)
    }
}

/// Segment arithmetic for a message of `length` characters.
///
/// Past the first segment the count is `length / 160 + 1`, so an exact
/// multiple such as 320 reports 3 segments with 160 remaining.
pub fn compute_display(length: usize) -> DisplayState {
    if length <= SEGMENT_LEN {
        DisplayState {
            segments: None,
            remaining: SEGMENT_LEN - length,
        }
    } else {
        DisplayState {
            segments: Some(length / SEGMENT_LEN + 1),
            remaining: SEGMENT_LEN - length % SEGMENT_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn render(length: usize) -> String {
        compute_display(length).to_string()
    }

    #[test]
    fn boundary_lengths_render_literally() {
        assert_eq!(render(0), "160/160 remaining");
        assert_eq!(render(160), "0/160 remaining");
        assert_eq!(render(161), "(2 messages) 159/160 remaining");
        assert_eq!(render(320), "(3 messages) 160/160 remaining");
        assert_eq!(render(321), "(3 messages) 159/160 remaining");
    }

    // 320 characters fit in two segments, but the counter reports a third,
    // empty one. Kept on purpose so the label matches what users already see.
    #[test]
    fn exact_multiple_reports_an_extra_empty_segment() {
        let state = compute_display(2 * SEGMENT_LEN);
        assert_eq!(state.segments, Some(3));
        assert_eq!(state.remaining, SEGMENT_LEN);

        let state = compute_display(5 * SEGMENT_LEN);
        assert_eq!(state.segments, Some(6));
        assert_eq!(state.remaining, SEGMENT_LEN);
    }

    #[test]
    fn single_segment_covers_every_length_up_to_the_boundary() {
        for length in 0..=SEGMENT_LEN {
            assert_eq!(render(length), format!("{}/160 remaining", 160 - length));
        }
    }

    #[test]
    fn remaining_drops_by_one_per_char_within_first_segment() {
        for length in 1..=SEGMENT_LEN {
            let before = compute_display(length - 1).remaining;
            let after = compute_display(length).remaining;
            assert_eq!(before - after, 1, "at length {length}");
        }
    }

    proptest! {
        #[test]
        fn multi_segment_formula(length in (SEGMENT_LEN + 1)..100_000usize) {
            let expected = format!(
                "({} messages) {}/160 remaining",
                length / 160 + 1,
                160 - length % 160
            );
            prop_assert_eq!(render(length), expected);
        }

        #[test]
        fn same_length_same_label(length in 0..100_000usize) {
            prop_assert_eq!(render(length), render(length));
        }

        #[test]
        fn remaining_stays_within_a_segment(length in 0..100_000usize) {
            let state = compute_display(length);
            prop_assert!(state.remaining <= SEGMENT_LEN);
            prop_assert!(state.remaining >= 1 || length == SEGMENT_LEN);
        }
    }
}
