use crate::shared::constants::DEFAULT_TOLERANCE;

pub type Rgb = [u8; 3];

/// Target colors plus a per-channel tolerance; defines "foreground" for
/// one kind of region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorRule {
    pub targets: &'static [Rgb],
    pub tolerance: u8,
}

impl ColorRule {
    pub const fn new(targets: &'static [Rgb]) -> Self {
        Self {
            targets,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// True when `color` is within tolerance of any target.
    pub fn matches(&self, color: Rgb) -> bool {
        self.targets
            .iter()
            .any(|&target| is_close_color(color, target, self.tolerance))
    }
}

/// Box tolerance: every channel differs by at most `tolerance`.
///
/// This is a per-channel check, not a Euclidean distance, so `(30, 30, 30)`
/// away from a target still matches.
pub fn is_close_color(a: Rgb, b: Rgb, tolerance: u8) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|(&x, &y)| x.abs_diff(y) <= tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const GOLD: ColorRule = ColorRule::new(&[[251, 160, 40]]);

    #[rstest]
    #[case::exact([251, 160, 40], true)]
    #[case::at_boundary([221, 161, 70], true)]
    #[case::one_past_red([220, 160, 70], false)]
    #[case::one_past_blue([251, 160, 71], false)]
    #[case::upper_clamp([255, 190, 70], true)]
    fn test_gold_boundary(#[case] color: Rgb, #[case] expected: bool) {
        assert_eq!(GOLD.matches(color), expected);
    }

    #[test]
    fn test_box_not_euclidean() {
        // Euclidean distance is ~52, well past 30, but each channel is within.
        assert!(is_close_color([100, 100, 100], [130, 130, 130], 30));
    }

    #[test]
    fn test_any_target_matches() {
        const RULE: ColorRule = ColorRule::new(&[[255, 255, 255], [122, 136, 139]]);
        assert!(RULE.matches([120, 140, 140]));
        assert!(RULE.matches([240, 240, 240]));
        assert!(!RULE.matches([60, 60, 60]));
    }

    #[test]
    fn test_empty_rule_matches_nothing() {
        const RULE: ColorRule = ColorRule::new(&[]);
        assert!(!RULE.matches([0, 0, 0]));
    }

    #[test]
    fn test_default_tolerance() {
        assert_eq!(GOLD.tolerance, 30);
    }
}
