//! Width store: restore-from-storage and the clamp policy.

use crate::config::ResizerConfig;
use crate::platform::Platform;

/// Clamp a candidate width to `[min_width, max_width]`.
///
/// Ties resolve to the bound itself. Deliberately `max(lo, min(hi, x))`
/// rather than `i32::clamp` so a misconfigured `min_width > max_width`
/// degrades to `min_width` instead of panicking.
pub(crate) fn clamp_width(candidate: i32, min_width: i32, max_width: i32) -> i32 {
    candidate.min(max_width).max(min_width)
}

/// Read the persisted width for `config.storage_key`, falling back to
/// `config.default_width` when the entry is absent or fails to parse as a
/// base-10 integer. Malformed entries are cache misses, never errors.
///
/// The restored value is intentionally NOT re-clamped against the current
/// bounds: a width saved under looser bounds in the past stays as saved
/// until the next drag clamps it.
pub(crate) fn restore_width(platform: &dyn Platform, config: &ResizerConfig) -> i32 {
    platform
        .load(&config.storage_key)
        .and_then(|saved| saved.trim().parse::<i32>().ok())
        .unwrap_or(config.default_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryPlatform;

    fn config() -> ResizerConfig {
        ResizerConfig::new("panel-width", "--panel-width")
            .default_width(300)
            .width_bounds(100, 600)
    }

    #[test]
    fn clamp_keeps_in_range_values() {
        assert_eq!(clamp_width(450, 100, 600), 450);
        assert_eq!(clamp_width(100, 100, 600), 100);
        assert_eq!(clamp_width(600, 100, 600), 600);
    }

    #[test]
    fn clamp_resolves_out_of_range_to_bounds() {
        assert_eq!(clamp_width(0, 100, 600), 100);
        assert_eq!(clamp_width(i32::MIN, 100, 600), 100);
        assert_eq!(clamp_width(9999, 100, 600), 600);
        assert_eq!(clamp_width(i32::MAX, 100, 600), 600);
    }

    #[test]
    fn clamp_is_idempotent() {
        for x in [-500, 0, 99, 100, 350, 600, 601, 10_000] {
            let once = clamp_width(x, 100, 600);
            assert_eq!(clamp_width(once, 100, 600), once);
        }
    }

    #[test]
    fn restore_falls_back_to_default_when_absent() {
        let platform = MemoryPlatform::new();
        assert_eq!(restore_width(&platform, &config()), 300);
    }

    #[test]
    fn restore_returns_saved_value() {
        let platform = MemoryPlatform::new();
        platform.seed("panel-width", "450");
        assert_eq!(restore_width(&platform, &config()), 450);
    }

    #[test]
    fn restore_tolerates_malformed_values() {
        let platform = MemoryPlatform::new();
        for junk in ["not-a-number", "", "  ", "12.5", "450px", "0x1f"] {
            platform.seed("panel-width", junk);
            assert_eq!(restore_width(&platform, &config()), 300, "junk: {junk:?}");
        }
    }

    #[test]
    fn restore_accepts_whitespace_padding_and_sign() {
        let platform = MemoryPlatform::new();
        platform.seed("panel-width", "  450  ");
        assert_eq!(restore_width(&platform, &config()), 450);
        platform.seed("panel-width", "-20");
        assert_eq!(restore_width(&platform, &config()), -20);
    }

    #[test]
    fn restore_does_not_reclamp_stale_values() {
        let platform = MemoryPlatform::new();
        platform.seed("panel-width", "900");
        assert_eq!(restore_width(&platform, &config()), 900);
    }
}
