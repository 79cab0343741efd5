use std::time::Duration;

/// Elapsed seconds rendered with a fixed 15-digit fractional part, the
/// precision the record's `time` entry carries.
pub fn format_elapsed_seconds(elapsed: Duration) -> String {
    format!("{:.15}", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_fifteen_fraction_digits() {
        let formatted = format_elapsed_seconds(Duration::from_micros(1500));
        let (secs, fraction) = formatted.split_once('.').unwrap();
        assert_eq!(secs, "0");
        assert_eq!(fraction.len(), 15);
        assert!(formatted.starts_with("0.0015"));
    }

    #[test]
    fn whole_seconds_keep_the_fraction() {
        let formatted = format_elapsed_seconds(Duration::from_secs(2));
        assert_eq!(formatted, "2.000000000000000");
    }
}
