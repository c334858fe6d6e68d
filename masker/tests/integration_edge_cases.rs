//! Edge-case coverage for the leaf maskers.
//!
//! These tests focus on boundary lengths, where a rule's range starts at or
//! past the end of the input, and on multi-byte text where offsets must count
//! characters rather than bytes.

use masker::{
    address, credit_card, email, id, mobile, name, overlay, password, telephone, MaskKind,
};

#[test]
fn empty_input() {
    assert_eq!(password(""), "************");
    assert_eq!(name(""), "**");
    assert_eq!(address(""), "******");
    assert_eq!(id(""), "");
    assert_eq!(credit_card(""), "");
    assert_eq!(mobile(""), "");
    assert_eq!(telephone(""), "");
    assert_eq!(email(""), "");
}

#[test]
fn single_character_name() {
    assert_eq!(name("王"), "**");
    assert_eq!(name("x"), "**");
}

#[test]
fn range_starting_at_end_leaves_text() {
    assert_eq!(id("A12345"), "A12345");
    assert_eq!(credit_card("123456"), "123456");
    assert_eq!(mobile("0987"), "0987");
    assert_eq!(email("abc@example.com"), "abc@example.com");
}

#[test]
fn range_past_end_is_clamped() {
    assert_eq!(id("A1234567"), "A12345****");
    assert_eq!(credit_card("12345678"), "123456******");
    assert_eq!(mobile("09876"), "0987***");
    assert_eq!(email("abcd@example.com"), "abc****@example.com");
}

#[test]
fn address_boundary_at_six_characters() {
    assert_eq!(address("台北市內湖區"), "******");
    assert_eq!(address("台北市內湖區內"), "台北市內湖區******");
}

#[test]
fn multibyte_offsets_count_characters() {
    assert_eq!(name("歐陽小明"), "歐**明");
    assert_eq!(mobile("零九八七六五四三二一"), "零九八七***三二一");
    assert_eq!(email("王小明先生@例子.台灣"), "王小明****@例子.台灣");
    assert_eq!(overlay("🔒secret🔒", "*", 1, 7), "🔒*🔒");
}

#[test]
fn combining_marks_are_separate_characters() {
    // "e" followed by U+0301 counts as two characters.
    let text = "e\u{301}abc";
    assert_eq!(overlay(text, "#", 1, 2), "e#abc");
}

#[test]
fn telephone_strips_separators() {
    assert_eq!(telephone("(02) 2799-3078"), "(02)2799-****");
    assert_eq!(telephone("02-2799-3078"), "(02)2799-****");
    assert_eq!(telephone("0227993078"), "(02)2799-****");
    assert_eq!(telephone("2799 3078"), "2799-****");
}

#[test]
fn telephone_other_lengths_return_stripped_input() {
    assert_eq!(telephone("(02) 123"), "02123");
    assert_eq!(telephone("+886 2 2799-3078"), "+886227993078");
    assert_eq!(telephone("()- "), "");
}

#[test]
fn telephone_keeps_other_characters() {
    assert_eq!(telephone("ab-cd efgh"), "abcd-****");
}

#[test]
fn email_edge_cases() {
    assert_eq!(email("@example.com"), "@example.com");
    assert_eq!(email("abcdefghij@"), "abc****@");
    assert_eq!(email("no-separator"), "no-separator");
    assert_eq!(email("a@b@c"), "a@b@c");
}

#[test]
fn overlay_with_empty_mask_removes_range() {
    assert_eq!(overlay("abcdef", "", 1, 3), "adef");
}

#[test]
fn runtime_kinds_match_functions() {
    let value = "ggw.chang@gmail.com";
    for kind in MaskKind::ALL {
        let expected = match kind {
            MaskKind::Password => password(value),
            MaskKind::Name => name(value),
            MaskKind::Address => address(value),
            MaskKind::Email => email(value),
            MaskKind::Mobile => mobile(value),
            MaskKind::Telephone => telephone(value),
            MaskKind::Id => id(value),
            MaskKind::CreditCard => credit_card(value),
            MaskKind::Struct => {
                assert_eq!(kind.apply_to(value), None);
                continue;
            }
        };
        assert_eq!(kind.apply_to(value).as_deref(), Some(expected.as_str()));
    }
}

#[test]
fn kind_tags_round_trip_through_from_str() {
    for kind in MaskKind::ALL {
        assert_eq!(kind.tag().parse::<MaskKind>(), Ok(kind));
    }
    assert!("phone".parse::<MaskKind>().is_err());
}
