//! Tests for the line item collection and its derived total.

#[cfg(test)]
mod tests {
    use crate::claims::{ItemField, LineItem, LineItemCollection};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    // ==================== Construction ====================

    #[test]
    fn test_new_collection_holds_one_blank_row() {
        let items = LineItemCollection::new();
        assert_eq!(items.len(), 1);
        assert_eq!(items.get(0).unwrap().service_ref(), "");
        assert_eq!(items.total(), Decimal::ZERO);
    }

    #[test]
    fn test_from_items_empty_input_hydrates_to_blank_row() {
        let items = LineItemCollection::from_items(Vec::new());
        assert_eq!(items.len(), 1);
        assert_eq!(items.total(), Decimal::ZERO);
    }

    #[test]
    fn test_from_items_preserves_order() {
        let items = LineItemCollection::from_items(vec![
            LineItem::new("3", dec!(10.00)),
            LineItem::new("1", dec!(20.00)),
            LineItem::new("2", dec!(30.00)),
        ]);
        let refs: Vec<&str> = items.items().iter().map(|i| i.service_ref()).collect();
        assert_eq!(refs, vec!["3", "1", "2"]);
    }

    // ==================== Total derivation ====================

    #[test]
    fn test_total_ignores_rows_without_service() {
        let mut items = LineItemCollection::new();
        items.update_item(0, ItemField::ChargeAmount, "42.00").unwrap();
        // Charge set but no service selected: contributes nothing.
        assert_eq!(items.total(), Decimal::ZERO);

        items.update_item(0, ItemField::ServiceRef, "7").unwrap();
        assert_eq!(items.total(), dec!(42.00));
    }

    #[test]
    fn test_total_counts_zero_charge_rows_with_service() {
        let mut items = LineItemCollection::new();
        items.update_item(0, ItemField::ServiceRef, "7").unwrap();
        assert_eq!(items.total(), Decimal::ZERO);
        assert_eq!(items.valid_items().len(), 0);
    }

    #[test]
    fn test_add_blank_item_leaves_total_unchanged() {
        let mut items = LineItemCollection::new();
        items.update_item(0, ItemField::ServiceRef, "1").unwrap();
        items.update_item(0, ItemField::ChargeAmount, "15.25").unwrap();
        items.add_blank_item();
        assert_eq!(items.len(), 2);
        assert_eq!(items.total(), dec!(15.25));
    }

    #[test]
    fn test_total_rounds_to_cents() {
        let mut items = LineItemCollection::new();
        items.update_item(0, ItemField::ServiceRef, "1").unwrap();
        items.update_item(0, ItemField::ChargeAmount, "10.006").unwrap();
        // Charge input itself is rounded on entry.
        assert_eq!(items.total(), dec!(10.01));
    }

    // ==================== Charge parsing policy ====================

    #[test]
    fn test_non_numeric_charge_coerces_to_zero() {
        let mut items = LineItemCollection::new();
        items.update_item(0, ItemField::ServiceRef, "1").unwrap();
        items.update_item(0, ItemField::ChargeAmount, "abc").unwrap();
        assert_eq!(items.total(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_charge_coerces_to_zero() {
        let mut items = LineItemCollection::new();
        items.update_item(0, ItemField::ServiceRef, "1").unwrap();
        items.update_item(0, ItemField::ChargeAmount, "-5").unwrap();
        assert_eq!(items.get(0).unwrap().charge(), Decimal::ZERO);
        assert_eq!(items.total(), Decimal::ZERO);
    }

    #[test]
    fn test_charge_coercion_applies_to_every_row() {
        let mut items = LineItemCollection::new();
        items.add_blank_item();
        items.add_blank_item();
        for i in 0..3 {
            items.update_item(i, ItemField::ServiceRef, "9").unwrap();
            items.update_item(i, ItemField::ChargeAmount, "-5").unwrap();
        }
        assert_eq!(items.total(), Decimal::ZERO);
        for item in items.items() {
            assert_eq!(item.charge(), Decimal::ZERO);
        }
    }

    // ==================== Removal ====================

    #[test]
    fn test_remove_item_never_empties_collection() {
        let mut items = LineItemCollection::new();
        items.add_blank_item();
        items.remove_item(0).unwrap();
        assert_eq!(items.len(), 1);
        // Removing the only remaining row is a no-op.
        items.remove_item(0).unwrap();
        items.remove_item(0).unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_remove_item_out_of_range() {
        let mut items = LineItemCollection::new();
        assert!(items.remove_item(5).is_err());
    }

    #[test]
    fn test_update_item_out_of_range() {
        let mut items = LineItemCollection::new();
        assert!(items.update_item(1, ItemField::ServiceRef, "2").is_err());
    }

    // ==================== Multi-row editing ====================

    #[test]
    fn test_three_row_editing_scenario() {
        let mut items = LineItemCollection::new();
        items.add_blank_item();
        items.add_blank_item();
        assert_eq!(items.len(), 3);

        items.update_item(0, ItemField::ServiceRef, "S1").unwrap();
        items.update_item(0, ItemField::ChargeAmount, "10.00").unwrap();
        items.update_item(1, ItemField::ServiceRef, "S2").unwrap();
        items.update_item(1, ItemField::ChargeAmount, "25.50").unwrap();
        // Third row stays blank.
        assert_eq!(items.total(), dec!(35.50));

        items.remove_item(2).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items.total(), dec!(35.50));

        items.remove_item(0).unwrap();
        items.remove_item(0).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items.total(), Decimal::ZERO);
    }

    // ==================== Valid items ====================

    #[test]
    fn test_valid_items_excludes_incomplete_rows() {
        let mut items = LineItemCollection::new();
        items.add_blank_item();
        items.add_blank_item();
        items.add_blank_item();
        // Row 0: complete. Row 1: service only. Row 2: charge only. Row 3: blank.
        items.update_item(0, ItemField::ServiceRef, "1").unwrap();
        items.update_item(0, ItemField::ChargeAmount, "50").unwrap();
        items.update_item(1, ItemField::ServiceRef, "2").unwrap();
        items.update_item(2, ItemField::ChargeAmount, "25").unwrap();

        let valid = items.valid_items();
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].service_ref(), "1");
        assert_eq!(valid[0].charge(), dec!(50));
    }

    #[test]
    fn test_total_always_matches_manual_sum_over_edit_sequence() {
        let mut items = LineItemCollection::new();
        let ops: [(usize, ItemField, &str); 8] = [
            (0, ItemField::ServiceRef, "1"),
            (0, ItemField::ChargeAmount, "10.10"),
            (0, ItemField::ChargeAmount, "12.30"),
            (1, ItemField::ServiceRef, "2"),
            (1, ItemField::ChargeAmount, "0.70"),
            (2, ItemField::ChargeAmount, "99.99"),
            (1, ItemField::ServiceRef, ""),
            (2, ItemField::ServiceRef, "3"),
        ];
        items.add_blank_item();
        items.add_blank_item();
        for (index, field, value) in ops {
            items.update_item(index, field, value).unwrap();
            let expected: Decimal = items
                .items()
                .iter()
                .filter(|i| !i.service_ref().is_empty())
                .map(|i| i.charge())
                .sum();
            assert_eq!(items.total(), expected.round_dp(2));
        }
    }
}
