//! # Color Contrast Check
//!
//! This module implements the focus-ring visibility check. Three colors
//! are resolved from a [ThemeDefaults] source:
//!
//! - the selection background ([ColorKey::selection_background])
//! - the baseline focus color ([ColorKey::focus_color])
//! - the rendered focused-cell border ([ColorKey::focus_cell_border])
//!
//! A fixed sequence of policy rules then decides the verdict. The
//! grayscale rules exist because a gray background has no hue to contrast
//! against, so the check accepts the extreme opposite instead of
//! comparing distances:
//!
//! 1. [PolicyRule::AchromaticExtremes]: pure black or pure white
//!    background with a mid-gray border passes outright.
//! 2. [PolicyRule::GrayscaleTowardWhite]: gray background with channel
//!    value >= 128 and a pure black border passes.
//! 3. [PolicyRule::GrayscaleTowardBlack]: gray background with channel
//!    value < 128 and a pure white border passes.
//! 4. [PolicyRule::RgbDifference]: otherwise the border must be strictly
//!    farther from the background than the baseline focus color is,
//!    measured by [rgb_diff].
//!
//! Rule equality is exact color equality; near-black or near-white
//! borders do not qualify for the grayscale rules and fall through to the
//! metric.
//!
//! ## Usage Examples
//!
//! ```rust
//! use focusring::check::{run_check, PolicyRule};
//! use focusring_theme::color::Color;
//! use focusring_theme::defaults::DefaultsTable;
//! use focusring_theme::key::ColorKey;
//!
//! let theme = DefaultsTable::new("synthetic")
//!     .with(ColorKey::selection_background(), Color::from_rgb8(100, 150, 200))
//!     .with(ColorKey::focus_color(), Color::from_rgb8(110, 150, 200))
//!     .with(ColorKey::focus_cell_border(), Color::from_rgb8(255, 0, 0));
//!
//! let report = run_check(&theme).unwrap();
//! assert_eq!(report.rule, PolicyRule::RgbDifference);
//! ```

use std::fmt::{Display, Formatter};

use focusring_theme::color::Color;
use focusring_theme::defaults::ThemeDefaults;
use focusring_theme::key::ColorKey;

use crate::error::{CheckError, CheckResult};

/// The named policy rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyRule {
    /// Pure black or pure white background with a mid-gray focus border.
    AchromaticExtremes,
    /// Gray background towards white (channel >= 128) with a pure black
    /// focus border.
    GrayscaleTowardWhite,
    /// Gray background towards black (channel < 128) with a pure white
    /// focus border.
    GrayscaleTowardBlack,
    /// Generic comparison of RGB differences against the baseline.
    RgbDifference,
}

impl Display for PolicyRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::AchromaticExtremes => "achromatic extremes",
            Self::GrayscaleTowardWhite => "grayscale towards white",
            Self::GrayscaleTowardBlack => "grayscale towards black",
            Self::RgbDifference => "rgb difference",
        };
        write!(f, "{name}")
    }
}

/// The outcome of a passed contrast check, with the resolved colors and
/// diagnostic values.
///
/// The diffs are only populated when [PolicyRule::RgbDifference] decided
/// the verdict; the special-case rules pass without computing the metric.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastReport {
    /// Name of the checked theme.
    pub theme: String,
    /// The selection background color.
    pub background: Color,
    /// The baseline focus indicator color.
    pub baseline_focus: Color,
    /// The rendered focused-cell border color.
    pub actual_focus: Color,
    /// The rule that decided the verdict.
    pub rule: PolicyRule,
    /// RGB difference of the baseline focus color against the background.
    pub baseline_diff: Option<f32>,
    /// RGB difference of the rendered border against the background.
    pub actual_diff: Option<f32>,
}

impl Display for ContrastReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "theme '{}' passed by rule '{}'",
            self.theme, self.rule
        )?;
        if let (Some(baseline), Some(actual)) = (self.baseline_diff, self.actual_diff) {
            write!(f, " (baseline diff {baseline}, actual diff {actual})")?;
        }
        Ok(())
    }
}

/// Sum of absolute per-channel differences between two colors, computed
/// on normalized `[0, 1]` channels. Alpha is not part of the metric.
///
/// The result is symmetric, zero for equal colors, and bounded by 3.0.
pub fn rgb_diff(a: Color, b: Color) -> f32 {
    let a = a.components();
    let b = b.components();
    a.iter().zip(b.iter()).map(|(a, b)| (a - b).abs()).sum()
}

/// Run the contrast check against a theme defaults source.
///
/// Resolves the three checked colors, logs them, and evaluates the policy
/// rules. Returns a [ContrastReport] on pass; every failure is a fatal
/// [CheckError].
pub fn run_check(defaults: &dyn ThemeDefaults) -> CheckResult<ContrastReport> {
    let background = resolve_color(defaults, ColorKey::selection_background())?;
    let baseline_focus = resolve_color(defaults, ColorKey::focus_color())?;
    let actual_focus = resolve_color(defaults, ColorKey::focus_cell_border())?;

    log::info!("Theme: {}", defaults.name());
    log::info!("Selection background color: {background}");
    log::info!("Baseline focus ring color: {baseline_focus}");
    log::info!("Rendered focus ring color: {actual_focus}");

    let (rule, diffs) = evaluate(background, baseline_focus, actual_focus)?;
    log::info!("Verdict decided by rule: {rule}");

    Ok(ContrastReport {
        theme: defaults.name().to_string(),
        background,
        baseline_focus,
        actual_focus,
        rule,
        baseline_diff: diffs.map(|(baseline, _)| baseline),
        actual_diff: diffs.map(|(_, actual)| actual),
    })
}

/// Evaluate the policy rules for an already-resolved color triple.
///
/// Returns the deciding rule and, when the metric ran, the
/// `(baseline_diff, actual_diff)` pair.
pub fn evaluate(
    background: Color,
    baseline_focus: Color,
    actual_focus: Color,
) -> CheckResult<(PolicyRule, Option<(f32, f32)>)> {
    if (background == Color::BLACK || background == Color::WHITE)
        && actual_focus == Color::GRAY
    {
        return Ok((PolicyRule::AchromaticExtremes, None));
    }

    if background.is_grayscale() {
        // towards white
        if background.r >= 128 && actual_focus == Color::BLACK {
            return Ok((PolicyRule::GrayscaleTowardWhite, None));
        }
        // towards black
        if background.r < 128 && actual_focus == Color::WHITE {
            return Ok((PolicyRule::GrayscaleTowardBlack, None));
        }
    }

    let baseline_diff = rgb_diff(baseline_focus, background);
    let actual_diff = rgb_diff(actual_focus, background);
    log::info!("Baseline RGB diff: {baseline_diff}");
    log::info!("Actual RGB diff: {actual_diff}");

    if actual_diff <= baseline_diff {
        return Err(CheckError::FocusRingNotVisible {
            actual_diff,
            baseline_diff,
        });
    }

    Ok((PolicyRule::RgbDifference, Some((baseline_diff, actual_diff))))
}

fn resolve_color(defaults: &dyn ThemeDefaults, key: ColorKey) -> CheckResult<Color> {
    defaults
        .color(&key)
        .ok_or_else(|| CheckError::missing_color(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_diff_is_symmetric() {
        let a = Color::from_rgb8(100, 150, 200);
        let b = Color::from_rgb8(255, 0, 0);
        assert_eq!(rgb_diff(a, b), rgb_diff(b, a));
    }

    #[test]
    fn test_rgb_diff_of_equal_colors_is_zero() {
        let a = Color::from_rgb8(12, 34, 56);
        assert_eq!(rgb_diff(a, a), 0.0);
    }

    #[test]
    fn test_rgb_diff_is_bounded() {
        assert_eq!(rgb_diff(Color::BLACK, Color::WHITE), 3.0);
        let a = Color::from_rgb8(10, 200, 77);
        let b = Color::from_rgb8(240, 3, 129);
        let diff = rgb_diff(a, b);
        assert!((0.0..=3.0).contains(&diff));
    }

    #[test]
    fn test_rgb_diff_ignores_alpha() {
        let opaque = Color::from_rgb8(100, 150, 200);
        let translucent = Color::from_rgba8(100, 150, 200, 32);
        assert_eq!(rgb_diff(opaque, translucent), 0.0);
    }

    #[test]
    fn test_achromatic_extremes_pass_regardless_of_baseline() {
        for background in [Color::BLACK, Color::WHITE] {
            // Baseline identical to the border would fail the metric, but
            // the special case decides first.
            let (rule, diffs) = evaluate(background, Color::GRAY, Color::GRAY).unwrap();
            assert_eq!(rule, PolicyRule::AchromaticExtremes);
            assert_eq!(diffs, None);
        }
    }

    #[test]
    fn test_gray_towards_white_accepts_black_border() {
        let background = Color::from_rgb8(200, 200, 200);
        let (rule, _) = evaluate(background, background, Color::BLACK).unwrap();
        assert_eq!(rule, PolicyRule::GrayscaleTowardWhite);
    }

    #[test]
    fn test_gray_threshold_is_inclusive_towards_white() {
        let background = Color::GRAY;
        let (rule, _) = evaluate(background, background, Color::BLACK).unwrap();
        assert_eq!(rule, PolicyRule::GrayscaleTowardWhite);
    }

    #[test]
    fn test_gray_towards_black_accepts_white_border() {
        let background = Color::from_rgb8(50, 50, 50);
        let (rule, _) = evaluate(background, background, Color::WHITE).unwrap();
        assert_eq!(rule, PolicyRule::GrayscaleTowardBlack);
    }

    #[test]
    fn test_near_white_border_does_not_qualify_for_gray_rule() {
        // Exact equality only: (254, 254, 254) does not trigger the gray
        // rule and is decided by the metric instead.
        let background = Color::from_rgb8(50, 50, 50);
        let (rule, _) =
            evaluate(background, background, Color::from_rgb8(254, 254, 254)).unwrap();
        assert_eq!(rule, PolicyRule::RgbDifference);
    }

    #[test]
    fn test_gray_background_falls_through_to_metric() {
        let background = Color::from_rgb8(200, 200, 200);
        let baseline = Color::from_rgb8(190, 190, 190);
        let actual = Color::from_rgb8(90, 90, 90);
        let (rule, diffs) = evaluate(background, baseline, actual).unwrap();
        assert_eq!(rule, PolicyRule::RgbDifference);
        assert!(diffs.is_some());
    }

    #[test]
    fn test_more_distinct_border_passes_metric() {
        let background = Color::from_rgb8(100, 150, 200);
        let baseline = Color::from_rgb8(110, 150, 200);
        let actual = Color::from_rgb8(255, 0, 0);
        let (rule, diffs) = evaluate(background, baseline, actual).unwrap();
        assert_eq!(rule, PolicyRule::RgbDifference);
        let (baseline_diff, actual_diff) = diffs.unwrap();
        assert!((baseline_diff - 10.0 / 255.0).abs() < 1e-6);
        assert!(actual_diff > baseline_diff);
    }

    #[test]
    fn test_less_distinct_border_fails_metric() {
        let background = Color::from_rgb8(100, 150, 200);
        let baseline = Color::from_rgb8(110, 150, 200);
        let actual = Color::from_rgb8(102, 148, 198);
        let err = evaluate(background, baseline, actual).unwrap_err();
        assert!(matches!(err, CheckError::FocusRingNotVisible { .. }));
    }

    #[test]
    fn test_equal_diffs_fail_metric() {
        // The comparison is <=, so a border exactly as distinct as the
        // baseline is still a failure.
        let background = Color::from_rgb8(100, 150, 200);
        let baseline = Color::from_rgb8(110, 150, 200);
        let err = evaluate(background, baseline, baseline).unwrap_err();
        assert!(matches!(err, CheckError::FocusRingNotVisible { .. }));
    }
}
