//! Brazilian document and contact validation and display masks.
//!
//! Covers CPF (with mod-11 verifier digits), RG, phone numbers and CEP
//! postal codes. Validation ignores punctuation; masks are progressive so
//! they can be applied to partial input.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const CPF_LENGTH: usize = 11;
pub const RG_MIN_LENGTH: usize = 7;
pub const RG_MAX_LENGTH: usize = 9;
pub const PHONE_LANDLINE_LENGTH: usize = 10;
pub const PHONE_MOBILE_LENGTH: usize = 11;
pub const POSTAL_CODE_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Keep only ASCII digits.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Validate a CPF, with or without punctuation.
///
/// Rejects sequences of a single repeated digit, which pass the checksum.
pub fn validate_cpf(cpf: &str) -> bool {
    let digits: Vec<u32> = digits_only(cpf)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != CPF_LENGTH {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    digits[9] == cpf_check_digit(&digits[..9]) && digits[10] == cpf_check_digit(&digits[..10])
}

/// Compute the CPF verifier digit for the given prefix (9 or 10 digits).
fn cpf_check_digit(prefix: &[u32]) -> u32 {
    let weight_start = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, d)| d * (weight_start - i as u32))
        .sum();
    let digit = 11 - (sum % 11);
    if digit > 9 {
        0
    } else {
        digit
    }
}

/// RG numbers vary by issuing state; only the length is checked.
pub fn validate_rg(rg: &str) -> bool {
    let len = rg.chars().filter(char::is_ascii_alphanumeric).count();
    (RG_MIN_LENGTH..=RG_MAX_LENGTH).contains(&len)
}

/// Landline (10 digits) or mobile (11 digits), area code included.
pub fn validate_phone(phone: &str) -> bool {
    let len = digits_only(phone).len();
    len == PHONE_LANDLINE_LENGTH || len == PHONE_MOBILE_LENGTH
}

// ---------------------------------------------------------------------------
// Masks
// ---------------------------------------------------------------------------

/// `000.000.000-00`
pub fn format_cpf(value: &str) -> String {
    let digits = truncated_digits(value, CPF_LENGTH);
    apply_mask(&digits, &[(3, '.'), (6, '.'), (9, '-')])
}

/// `00.000.000-0`
pub fn format_rg(value: &str) -> String {
    let digits = truncated_digits(value, RG_MAX_LENGTH);
    apply_mask(&digits, &[(2, '.'), (5, '.'), (8, '-')])
}

/// `(00) 0000-0000` for landlines, `(00) 00000-0000` for mobiles.
pub fn format_phone(value: &str) -> String {
    let digits = truncated_digits(value, PHONE_MOBILE_LENGTH);
    let split = if digits.len() <= PHONE_LANDLINE_LENGTH { 6 } else { 7 };

    let mut out = String::with_capacity(digits.len() + 4);
    for (i, c) in digits.chars().enumerate() {
        if i == 0 && digits.len() > 2 {
            out.push('(');
        }
        if i == 2 {
            out.push_str(") ");
        }
        if i == split {
            out.push('-');
        }
        out.push(c);
    }
    out
}

/// `00000-000`
pub fn format_postal_code(value: &str) -> String {
    let digits = truncated_digits(value, POSTAL_CODE_LENGTH);
    apply_mask(&digits, &[(5, '-')])
}

fn truncated_digits(value: &str, max: usize) -> String {
    digits_only(value).chars().take(max).collect()
}

/// Insert each separator before the digit at its index, if that digit exists.
fn apply_mask(digits: &str, separators: &[(usize, char)]) -> String {
    let mut out = String::with_capacity(digits.len() + separators.len());
    for (i, c) in digits.chars().enumerate() {
        if let Some((_, sep)) = separators.iter().find(|(at, _)| *at == i) {
            out.push(*sep);
        }
        out.push(c);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
