use crate::domain::phone::normalized_or_none;

const INDIA_CODE: &str = "91";
const INDIA_DIAL_PREFIX: &str = "+91";
const MOBILE_LEN: usize = 10;

/// Decides whether a phone value looks like an Indian number.
///
/// Checked in order: an explicit `+91` prefix, a bare `91` prefix on a
/// 12 or 13 character number, then a 10-digit mobile number starting with
/// 6, 7, 8 or 9. Anything else, including German `491…` numbers that
/// merely contain `91`, is not Indian.
///
/// The mobile rule only accepts ASCII digits; numbers written in other
/// scripts (e.g. Devanagari `९८७६…`) are not Indian.
pub fn is_indian_phone_number(phone: Option<&str>) -> bool {
    let Some(normalized) = normalized_or_none(phone) else {
        return false;
    };

    if normalized.starts_with(INDIA_DIAL_PREFIX) {
        return true;
    }

    if normalized.starts_with(INDIA_CODE) {
        let len = normalized.chars().count();
        if (12..=13).contains(&len) {
            return true;
        }
    }

    is_local_mobile(&normalized)
}

fn is_local_mobile(normalized: &str) -> bool {
    let bytes = normalized.as_bytes();
    bytes.len() == MOBILE_LEN
        && matches!(bytes[0], b'6'..=b'9')
        && bytes.iter().all(u8::is_ascii_digit)
}
