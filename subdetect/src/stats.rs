//! Order statistics over HSV samples.
//!
//! All arithmetic happens on the clamped domain: inputs are already clamped
//! by construction, and every result is re-clamped on assignment.  Integer
//! division truncates toward zero.

use crate::hsv::Hsv;

/// The component-wise average of two colors.
pub fn average(first: &Hsv, second: &Hsv) -> Hsv {
    Hsv::new(
        (first.hue() + second.hue()) / 2,
        (first.saturation() + second.saturation()) / 2,
        (first.value() + second.value()) / 2,
    )
}

/// The component-wise average of a list of colors.  An empty list yields the
/// all-minima color.
pub fn average_all(list: &[Hsv]) -> Hsv {
    if list.is_empty() {
        return Hsv::default();
    }
    let mut h: i64 = 0;
    let mut s: i64 = 0;
    let mut v: i64 = 0;
    for hsv in list {
        h += i64::from(hsv.hue());
        s += i64::from(hsv.saturation());
        v += i64::from(hsv.value());
    }
    let count = list.len() as i64;
    Hsv::new(
        (h / count) as i32,
        (s / count) as i32,
        (v / count) as i32,
    )
}

/// The median color of a list, ordered by (hue, saturation, value).
///
/// For an odd number of samples this is the middle element of the sorted
/// list; for an even number it is the `average` of the two middle elements.
/// An empty list yields the all-minima color.
pub fn median(list: &[Hsv]) -> Hsv {
    if list.is_empty() {
        return Hsv::default();
    }
    let mut sorted = list.to_vec();
    sorted.sort_by_key(|hsv| (hsv.hue(), hsv.saturation(), hsv.value()));
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[middle]
    } else {
        average(&sorted[middle - 1], &sorted[middle])
    }
}

#[test]
fn average_truncates_toward_zero() {
    assert_eq!(
        average(&Hsv::new(15, 30, 100), &Hsv::new(10, 50, 200)),
        Hsv::new(12, 40, 150)
    );
    assert_eq!(
        average(&Hsv::new(0, 0, 0), &Hsv::new(179, 255, 255)),
        Hsv::new(89, 127, 127)
    );
}

#[test]
fn average_operates_on_the_clamped_domain() {
    // The inputs clamp before any arithmetic happens.
    assert_eq!(
        average(&Hsv::new(-5, 500, 100), &Hsv::new(10, 50, -4)),
        Hsv::new(5, 152, 50)
    );
    assert_eq!(
        average(&Hsv::new(800, -5, 452), &Hsv::new(-5, -500, -4)),
        Hsv::new(89, 0, 127)
    );
}

#[test]
fn list_average_sums_each_component() {
    assert_eq!(average_all(&[]), Hsv::default());
    assert_eq!(
        average_all(&[Hsv::new(1, 0, 0), Hsv::new(0, 1, 0), Hsv::new(0, 0, 1)]),
        Hsv::new(0, 0, 0)
    );
    assert_eq!(
        average_all(&[Hsv::new(1, 0, 4), Hsv::new(2, 1, 0), Hsv::new(0, 3, 1)]),
        Hsv::new(1, 1, 1)
    );
    assert_eq!(
        average_all(&[Hsv::new(1, -1, 4), Hsv::new(2, 1, -5), Hsv::new(-1, 3, 1)]),
        Hsv::new(1, 1, 1)
    );
    assert_eq!(
        average_all(&[
            Hsv::new(200, 255, 255),
            Hsv::new(200, 255, 255),
            Hsv::new(200, 255, 255),
        ]),
        Hsv::new(179, 255, 255)
    );
}

#[test]
fn median_picks_the_middle_sample() {
    assert_eq!(median(&[]), Hsv::default());
    assert_eq!(median(&[Hsv::new(5, 0, 4)]), Hsv::new(5, 0, 4));
    assert_eq!(
        median(&[Hsv::new(1, 0, 0), Hsv::new(0, 1, 0), Hsv::new(0, 0, 1)]),
        Hsv::new(0, 1, 0)
    );
    assert_eq!(
        median(&[Hsv::new(1, 0, 4), Hsv::new(2, 1, 0), Hsv::new(0, 3, 1)]),
        Hsv::new(1, 0, 4)
    );
    assert_eq!(
        median(&[
            Hsv::new(200, 255, 255),
            Hsv::new(200, 255, 255),
            Hsv::new(200, 255, 255),
        ]),
        Hsv::new(179, 255, 255)
    );
}

#[test]
fn median_of_even_count_averages_the_middle_pair() {
    assert_eq!(
        median(&[
            Hsv::new(1, 0, 4),
            Hsv::new(2, 1, 5),
            Hsv::new(0, 3, 1),
            Hsv::new(2, 4, 5),
        ]),
        Hsv::new(1, 0, 4)
    );
    assert_eq!(
        median(&[
            Hsv::new(-1, 0, -4),
            Hsv::new(-2, -1, -5),
            Hsv::new(0, -3, 1),
            Hsv::new(-2, 4, -5),
        ]),
        Hsv::new(0, 0, 0)
    );
    assert_eq!(
        median(&[
            Hsv::new(5, 0, 4),
            Hsv::new(2, 1, 5),
            Hsv::new(0, 3, 1),
            Hsv::new(2, 4, 5),
            Hsv::new(0, 3, 1),
            Hsv::new(8, 0, 7),
        ]),
        Hsv::new(2, 2, 5)
    );
}
