//! Leaf maskers for string values.
//!
//! Every rule here is a pure string transformation with fixed offsets and
//! fixed mask literals. Offsets count Unicode scalar values, never bytes, so
//! multi-byte text (e.g. CJK addresses) is sliced at character boundaries.
//!
//! None of these functions validate their input. Malformed values are masked
//! on a best-effort basis.

const PASSWORD_MASK: &str = "************";
const NAME_MASK: &str = "**";
const ID_MASK: &str = "****";
const ADDRESS_MASK: &str = "******";
const CREDIT_CARD_MASK: &str = "******";
const EMAIL_MASK: &str = "****";
const MOBILE_MASK: &str = "***";
const TELEPHONE_MASK: &str = "****";

/// Byte offset of the `chars`-th scalar value, or `text.len()` when `chars`
/// equals the character count. `None` past the end.
fn byte_offset(text: &str, chars: usize) -> Option<usize> {
    text.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .nth(chars)
}

/// Replaces the characters in `[start, end)` with `mask`.
///
/// `end` is clamped to the character length. The text is returned unchanged
/// when `start` lies past the end or the clamped range is empty.
///
/// ```rust
/// assert_eq!(masker::overlay("0987654321", "***", 4, 7), "0987***321");
/// assert_eq!(masker::overlay("abc", "**", 5, 9), "abc");
/// ```
#[must_use]
pub fn overlay(text: &str, mask: &str, start: usize, end: usize) -> String {
    let Some(start_byte) = byte_offset(text, start) else {
        return text.to_string();
    };
    let end_byte = byte_offset(text, end).unwrap_or(text.len());
    if start_byte >= end_byte {
        return text.to_string();
    }

    let mut masked = String::with_capacity(start_byte + mask.len() + text.len() - end_byte);
    masked.push_str(&text[..start_byte]);
    masked.push_str(mask);
    masked.push_str(&text[end_byte..]);
    masked
}

/// Always returns `************`, whatever the input.
#[must_use]
pub fn password(_value: &str) -> String {
    PASSWORD_MASK.to_string()
}

/// Masks the second character of short names and the second and third
/// characters of longer ones.
///
/// ```rust
/// assert_eq!(masker::name("ABCD"), "A**D");
/// assert_eq!(masker::name("AB"), "A**");
/// assert_eq!(masker::name("A"), "**");
/// ```
#[must_use]
pub fn name(value: &str) -> String {
    match value.chars().count() {
        2 | 3 => overlay(value, NAME_MASK, 1, 2),
        len if len > 3 => overlay(value, NAME_MASK, 1, 3),
        _ => NAME_MASK.to_string(),
    }
}

/// Masks characters 7 to 10 of an identification number.
///
/// ```rust
/// assert_eq!(masker::id("A123456789"), "A12345****");
/// ```
#[must_use]
pub fn id(value: &str) -> String {
    overlay(value, ID_MASK, 6, 10)
}

/// Keeps the first six characters and replaces the rest with six mask
/// characters, whatever its length.
///
/// ```rust
/// assert_eq!(masker::address("台北市內湖區內湖路一段737巷1號1樓"), "台北市內湖區******");
/// ```
#[must_use]
pub fn address(value: &str) -> String {
    if value.chars().count() <= 6 {
        return ADDRESS_MASK.to_string();
    }
    overlay(value, ADDRESS_MASK, 6, usize::MAX)
}

/// Masks the six digits after the issuer prefix.
///
/// ```rust
/// assert_eq!(masker::credit_card("1234567890123456"), "123456******3456");
/// assert_eq!(masker::credit_card("123456789012345"), "123456******345");
/// ```
#[must_use]
pub fn credit_card(value: &str) -> String {
    overlay(value, CREDIT_CARD_MASK, 6, 12)
}

/// Keeps the domain and the first three characters of the local part.
///
/// The rest of the local part becomes `****` whatever its length, so the
/// mask never reveals how long the address is. Local parts of three
/// characters or fewer, and values without an `@`, are returned unchanged.
///
/// ```rust
/// assert_eq!(masker::email("ggw.chang@gmail.com"), "ggw****@gmail.com");
/// ```
#[must_use]
pub fn email(value: &str) -> String {
    let Some((local, domain)) = value.split_once('@') else {
        return value.to_string();
    };
    let local = overlay(local, EMAIL_MASK, 3, usize::MAX);
    format!("{local}@{domain}")
}

/// Masks three digits starting at the fifth.
///
/// ```rust
/// assert_eq!(masker::mobile("0987654321"), "0987***321");
/// ```
#[must_use]
pub fn mobile(value: &str) -> String {
    overlay(value, MOBILE_MASK, 4, 7)
}

/// Normalizes a landline number to `(AA)BBBB-****` or `BBBB-****`.
///
/// `(`, `)`, spaces and `-` are stripped first. Numbers that are neither 8 nor
/// 10 characters long afterwards are returned stripped but unmasked.
///
/// ```rust
/// assert_eq!(masker::telephone("(02) 2799-3078"), "(02)2799-****");
/// assert_eq!(masker::telephone("27993078"), "2799-****");
/// ```
#[must_use]
pub fn telephone(value: &str) -> String {
    let digits: Vec<char> = value
        .chars()
        .filter(|ch| !matches!(ch, '(' | ')' | ' ' | '-'))
        .collect();

    let (area, local) = match digits.len() {
        10 => digits.split_at(2),
        8 => digits.split_at(0),
        _ => return digits.into_iter().collect(),
    };

    let mut masked = String::with_capacity(14);
    if !area.is_empty() {
        masked.push('(');
        masked.extend(area);
        masked.push(')');
    }
    masked.extend(&local[..4]);
    masked.push('-');
    masked.push_str(TELEPHONE_MASK);
    masked
}
