//! Field-level validation used by the form screens to gate step advancement.
//!
//! The sequencer itself never validates; forms call these helpers and withhold
//! `next_step()` until their required fields pass.

use stagelink_core::{DomainError, DomainResult};

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

fn is_local_part_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '.'
}

/// Structural email validation (format only, no deliverability check).
pub fn validate_email(email: &str) -> DomainResult<()> {
    if email.is_empty() {
        return Err(DomainError::validation("email is required"));
    }
    if email.len() > EMAIL_MAX_LEN {
        return Err(DomainError::validation("email is too long"));
    }

    let mut parts = email.splitn(3, '@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(DomainError::validation("email must contain exactly one '@'")),
    };

    if local.is_empty() || local.len() > EMAIL_LOCAL_MAX_LEN {
        return Err(DomainError::validation("email local part has invalid length"));
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(DomainError::validation("email local part has misplaced dots"));
    }
    if !local.chars().all(is_local_part_char) {
        return Err(DomainError::validation("email local part has invalid characters"));
    }

    if domain.starts_with('.') || domain.ends_with('.') || domain.starts_with('-') || domain.ends_with('-') {
        return Err(DomainError::validation("email domain is malformed"));
    }
    if !domain.chars().all(is_domain_char) {
        return Err(DomainError::validation("email domain has invalid characters"));
    }
    let extension = match domain.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => return Err(DomainError::validation("email domain is missing an extension")),
    };
    if extension.len() < 2 {
        return Err(DomainError::validation("email domain extension is too short"));
    }

    Ok(())
}

fn digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Country-aware phone number validation keyed by dialing code.
pub fn validate_phone(phone: &str, country_code: &str) -> DomainResult<()> {
    if phone.is_empty() {
        return Err(DomainError::validation("phone number is required"));
    }

    let cleaned = digits(phone);
    let valid = match country_code {
        "+33" => {
            (cleaned.len() == 10 && cleaned.starts_with('0'))
                || cleaned.len() == 9
                || (cleaned.len() == 12 && cleaned.starts_with("33"))
        }
        "+32" => cleaned.len() == 9 || cleaned.len() == 10,
        "+41" => cleaned.len() == 9,
        "+1" => cleaned.len() == 10,
        _ => (7..=15).contains(&cleaned.len()),
    };

    if valid {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "invalid phone number for {country_code}"
        )))
    }
}

fn group(digits: &str, groups: &[usize]) -> Option<String> {
    if digits.len() != groups.iter().sum::<usize>() {
        return None;
    }
    let mut out = Vec::with_capacity(groups.len());
    let mut rest = digits;
    for &len in groups {
        let (head, tail) = rest.split_at(len);
        out.push(head);
        rest = tail;
    }
    Some(out.join(" "))
}

/// Display formatting for phone numbers, keyed by dialing code.
///
/// Falls back to `{code} {digits}` when the number does not fit the national
/// pattern; never fails.
pub fn format_phone(phone: &str, country_code: &str) -> String {
    let cleaned = digits(phone);
    let formatted = match country_code {
        "+33" => {
            let national = if let Some(rest) = cleaned.strip_prefix("33") {
                rest
            } else if let Some(rest) = cleaned.strip_prefix('0') {
                rest
            } else {
                cleaned.as_str()
            };
            group(national, &[1, 2, 2, 2, 2])
        }
        "+32" => group(&cleaned, &[1, 3, 2, 2, 2]),
        "+41" => group(&cleaned, &[2, 3, 2, 2]),
        "+1" => group(&cleaned, &[3, 3, 4]),
        _ => None,
    };

    match formatted {
        Some(national) => format!("{country_code} {national}"),
        None => format!("{country_code} {cleaned}"),
    }
}
