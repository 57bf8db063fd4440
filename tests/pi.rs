//! End-to-end digit checks for the pi driver.

use tracked_float::compute_pi;

const PI_100: &str = "3.1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679";

#[test]
fn test_pi_100_digits() {
    let pi = compute_pi(120).unwrap();
    let s = pi.to_string();

    assert_eq!(&s[..102], PI_100);
}

#[test]
#[ignore] // takes minutes without optimizations
fn test_pi_10000_digits() {
    let pi = compute_pi(10_020).unwrap();
    let s = pi.to_string();

    assert!(s.len() >= 10_002);
    assert_eq!(&s[..102], PI_100);

    // tail of the first 10000 digits, per http://www.numberworld.org/digits/Pi/
    assert_eq!(&s[9_992..10_002], "5256375678");
}
