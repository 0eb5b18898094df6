use super::*;

// =============================================================
// duration
// =============================================================

#[test]
fn duration_pads_seconds() {
    assert_eq!(duration(65_000), "1:05");
}

#[test]
fn duration_zero() {
    assert_eq!(duration(0), "0:00");
}

#[test]
fn duration_truncates_partial_seconds() {
    assert_eq!(duration(199_900), "3:19");
}

// =============================================================
// followers
// =============================================================

#[test]
fn followers_millions() {
    assert_eq!(followers(1_234_567), "1.2M");
}

#[test]
fn followers_thousands() {
    assert_eq!(followers(3_400), "3.4K");
}

#[test]
fn followers_small_counts_unchanged() {
    assert_eq!(followers(999), "999");
}

// =============================================================
// album_length
// =============================================================

#[test]
fn album_length_under_an_hour() {
    assert_eq!(album_length(42 * 60_000), "42 min");
}

#[test]
fn album_length_over_an_hour() {
    assert_eq!(album_length(75 * 60_000), "1 hr 15 min");
}

// =============================================================
// release_year
// =============================================================

#[test]
fn release_year_from_full_date() {
    assert_eq!(release_year("2019-06-21"), "2019");
}

#[test]
fn release_year_from_year_only() {
    assert_eq!(release_year("2019"), "2019");
}
