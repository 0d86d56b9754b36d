use flex_storage::{
    AlignSelf, Display, FlexDirection, JustifyContent, StorageError, StyleField, StyleStorage, bits,
};

#[test]
fn checked_writes_reject_out_of_range() {
    let mut style = StyleStorage::new();
    for field in StyleStorage::fields() {
        // First value past the enum, and first value past the bit width
        let beyond_enum = field.cardinality();
        let beyond_width = 1_u8 << field.width();
        for value in [beyond_enum, beyond_width] {
            let result = style.set_raw(field, value);
            assert_eq!(
                result,
                Err(StorageError::InvalidStyleValue {
                    field: field.name(),
                    value,
                    max: field.cardinality() - 1,
                }),
            );
        }
    }
}

#[test]
fn rejected_write_leaves_prior_value_intact() {
    let mut style = StyleStorage::new();
    style.set_align_self(AlignSelf::Center);

    // 9 exceeds the 3-bit width's max of 7
    let result = style.set_raw(StyleField::AlignSelf, 9);
    assert!(result.is_err());
    assert_eq!(style.align_self(), AlignSelf::Center);
    assert_eq!(style.get_raw(StyleField::AlignSelf), AlignSelf::Center.bits());
}

#[test]
fn raw_bit_path_aliases_modulo_width() {
    // The unchecked word-level accessors truncate by masking; the checked
    // record setters never do. Both policies hold everywhere.
    let word = bits::set(0, 4, 3, 9);
    assert_eq!(bits::get(word, 4, 3), 9 % 8);
}

#[test]
fn scenario_column_and_center_leave_other_fields_zero() {
    let mut style = StyleStorage::new();
    style.set_raw(StyleField::FlexDirection, 1).unwrap();
    style.set_raw(StyleField::JustifyContent, 2).unwrap();

    assert_eq!(style.get_raw(StyleField::FlexDirection), 1);
    assert_eq!(style.get_raw(StyleField::JustifyContent), 2);
    for field in StyleStorage::fields() {
        if field == StyleField::FlexDirection || field == StyleField::JustifyContent {
            continue;
        }
        assert_eq!(style.get_raw(field), 0, "{field:?} should still be default");
    }
}

#[test]
fn typed_setters_agree_with_raw_reads() {
    let mut style = StyleStorage::new();
    style.set_flex_direction(FlexDirection::RowReverse);
    style.set_justify_content(JustifyContent::SpaceEvenly);
    style.set_display(Display::None);

    assert_eq!(style.get_raw(StyleField::FlexDirection), FlexDirection::RowReverse.bits());
    assert_eq!(style.get_raw(StyleField::JustifyContent), JustifyContent::SpaceEvenly.bits());
    assert_eq!(style.get_raw(StyleField::Display), Display::None.bits());
    assert_eq!(style.flex_direction(), FlexDirection::RowReverse);
    assert_eq!(style.justify_content(), JustifyContent::SpaceEvenly);
    assert_eq!(style.display(), Display::None);
}

#[test]
fn style_equality_is_bitwise() {
    let mut left = StyleStorage::new();
    let mut right = StyleStorage::new();
    assert_eq!(left, right);

    left.set_flex_direction(FlexDirection::Row);
    assert_ne!(left, right);

    right.set_raw(StyleField::FlexDirection, FlexDirection::Row.bits()).unwrap();
    assert_eq!(left, right);
}
