//! Prints digits of pi to the standard output.

use tracked_float::compute_pi;
use tracked_float::Error;

fn main() -> Result<(), Error> {
    let digits: usize = std::env::args()
        .nth(1)
        .map(|arg| {
            arg.parse()
                .expect("the first argument must be the number of digits")
        })
        .unwrap_or(100);

    // two extra characters for the leading "3."
    let pi = compute_pi(digits as u64 + 2)?;
    let s = pi.to_string();

    println!("{}", &s[..s.len().min(digits + 2)]);

    Ok(())
}
