use super::*;

#[test]
fn member_since_formats_rfc3339() {
    assert_eq!(member_since(Some("2024-03-05T10:00:00Z")), "March 5, 2024");
    assert_eq!(member_since(Some("2023-12-31T23:00:00+02:00")), "December 31, 2023");
}

#[test]
fn member_since_accepts_naive_timestamps_and_dates() {
    assert_eq!(member_since(Some("2024-01-09T08:07:06.123456")), "January 9, 2024");
    assert_eq!(member_since(Some("2022-07-04")), "July 4, 2022");
}

#[test]
fn member_since_falls_back() {
    assert_eq!(member_since(None), "—");
    assert_eq!(member_since(Some("  ")), "—");
    assert_eq!(member_since(Some("yesterday")), "yesterday");
}

#[test]
fn label_capitalizes_and_spaces() {
    assert_eq!(label(Some("pro")), "Pro");
    assert_eq!(label(Some("past_due")), "Past due");
    assert_eq!(label(None), "—");
}

#[test]
fn scan_label_prefers_title_and_appends_location() {
    let mut scan = Scan {
        id: "1".to_owned(),
        listing_url: "https://airbnb.com/rooms/1".to_owned(),
        listing_title: Some("Beach house".to_owned()),
        location: Some("Malibu, CA".to_owned()),
    };
    assert_eq!(scan_label(&scan), "Beach house — Malibu, CA");
    scan.listing_title = Some(" ".to_owned());
    scan.location = None;
    assert_eq!(scan_label(&scan), "https://airbnb.com/rooms/1");
}
