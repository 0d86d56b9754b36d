use flex_storage::{Direction, LayoutFlags, NodeFlags, NodeType, StyleStorage};

#[test]
fn style_fields_round_trip_full_domain() {
    for field in StyleStorage::fields() {
        for value in 0..field.cardinality() {
            let mut style = StyleStorage::new();
            style.set_raw(field, value).unwrap();
            assert_eq!(style.get_raw(field), value, "{field:?} lost {value}");
        }
    }
}

#[test]
fn style_fields_do_not_clobber_neighbors() {
    // Saturate every field with its highest member, then read all back.
    let mut style = StyleStorage::new();
    for field in StyleStorage::fields() {
        style.set_raw(field, field.cardinality() - 1).unwrap();
    }
    for field in StyleStorage::fields() {
        assert_eq!(style.get_raw(field), field.cardinality() - 1);
    }
}

#[test]
fn node_flags_round_trip() {
    let mut flags = NodeFlags::new();
    assert!(!flags.has_new_layout());
    assert_eq!(flags.node_type(), NodeType::Default);
    assert!(!flags.is_reference_baseline());
    assert!(!flags.is_dirty());

    flags.set_has_new_layout(true);
    flags.set_node_type(NodeType::Text);
    flags.set_reference_baseline(true);
    flags.set_dirty(true);

    assert!(flags.has_new_layout());
    assert_eq!(flags.node_type(), NodeType::Text);
    assert!(flags.is_reference_baseline());
    assert!(flags.is_dirty());

    // Clearing one bit leaves the others alone
    flags.set_reference_baseline(false);
    assert!(!flags.is_reference_baseline());
    assert!(flags.has_new_layout());
    assert_eq!(flags.node_type(), NodeType::Text);
    assert!(flags.is_dirty());
}

#[test]
fn layout_flags_round_trip() {
    let mut flags = LayoutFlags::new();
    for direction in [Direction::Ltr, Direction::Rtl] {
        flags.set_direction(direction).unwrap();
        assert_eq!(flags.direction(), direction);
    }
    flags.set_has_overflow(true);
    assert!(flags.has_overflow());
    assert_eq!(flags.direction(), Direction::Rtl);
    flags.set_has_overflow(false);
    assert!(!flags.has_overflow());
}

#[test]
fn default_records_are_all_zero() {
    assert_eq!(NodeFlags::default(), NodeFlags::new());
    assert_eq!(LayoutFlags::default(), LayoutFlags::new());
    assert_eq!(StyleStorage::default(), StyleStorage::new());
    let style = StyleStorage::new();
    for field in StyleStorage::fields() {
        assert_eq!(style.get_raw(field), 0);
    }
}
