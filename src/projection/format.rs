//! Locale number formatting
//!
//! en-US style: `,` groups thousands, `.` separates decimals.

/// Formats `value` with between `min_decimals` and `max_decimals` fractional digits.
///
/// Rounding works on the shortest decimal representation of `value` and
/// rounds half away from zero, so `1.005` becomes `1.01` at two digits.
/// Trailing zeros beyond `min_decimals` are dropped.
pub fn format_to_local_string(value: f64, min_decimals: usize, max_decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let max_decimals = max_decimals.max(min_decimals);
    let repr = format!("{}", value.abs());
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let kept = frac_part.len().min(max_decimals);
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(kept))
        .map(|b| b - b'0')
        .collect();
    digits.resize(int_part.len() + max_decimals, 0);
    let mut int_len = int_part.len();

    let round_up = frac_part
        .as_bytes()
        .get(max_decimals)
        .is_some_and(|&b| b >= b'5');
    if round_up && increment(&mut digits) {
        int_len += 1;
    }

    let (int_digits, frac_digits) = digits.split_at(int_len);
    let mut frac_len = frac_digits.len();
    while frac_len > min_decimals && frac_digits[frac_len - 1] == 0 {
        frac_len -= 1;
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_digits));
    if frac_len > 0 {
        out.push('.');
        out.extend(frac_digits[..frac_len].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

/// Adds one unit in the last place. Returns true when a new leading digit was added.
fn increment(digits: &mut Vec<u8>) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return false;
        }
    }
    digits.insert(0, 1);
    true
}

fn group_thousands(digits: &[u8]) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(char::from(b'0' + digit));
    }
    out
}
