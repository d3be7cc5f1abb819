//! 低庫存偵測

use bizdash_core::InventoryItem;

/// 低庫存偵測器
pub struct LowStockDetector;

impl LowStockDetector {
    /// 篩選庫存小於等於補貨門檻的品項，庫存最少者在前（同庫存保持原順序）
    pub fn detect(items: &[InventoryItem]) -> Vec<InventoryItem> {
        let mut low: Vec<InventoryItem> = items
            .iter()
            .filter(|item| item.is_low_stock())
            .cloned()
            .collect();
        low.sort_by_key(|item| item.stock);
        low
    }

    /// 低庫存品項數量
    pub fn count(items: &[InventoryItem]) -> usize {
        items.iter().filter(|item| item.is_low_stock()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::item;
    use proptest::prelude::*;

    #[test]
    fn test_only_low_items_returned() {
        let items = vec![item("X", 3, 5), item("Y", 10, 2)];

        let low = LowStockDetector::detect(&items);

        assert_eq!(low.len(), 1);
        assert_eq!(low[0].id, "X");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let items = vec![item("EQ", 5, 5), item("ZERO", 0, 0)];

        let low = LowStockDetector::detect(&items);

        assert_eq!(low.len(), 2);
        assert_eq!(low[0].id, "ZERO");
    }

    #[test]
    fn test_sorted_by_stock_then_original_order() {
        let items = vec![
            item("A", 4, 10),
            item("B", 1, 10),
            item("C", 4, 10),
            item("D", 50, 10),
            item("E", 1, 3),
        ];

        let low = LowStockDetector::detect(&items);
        let ids: Vec<_> = low.iter().map(|i| i.id.as_str()).collect();

        assert_eq!(ids, vec!["B", "E", "A", "C"]);
        assert_eq!(LowStockDetector::count(&items), 4);
    }

    proptest! {
        #[test]
        fn prop_low_stock_is_sorted_subsequence(
            specs in prop::collection::vec((0u32..30, 0u32..30), 0..40)
        ) {
            let items: Vec<_> = specs
                .iter()
                .enumerate()
                .map(|(i, (stock, min))| item(&format!("I{i}"), *stock, *min))
                .collect();

            let low = LowStockDetector::detect(&items);

            prop_assert!(low.iter().all(|i| i.stock <= i.min_stock));
            prop_assert_eq!(low.len(), LowStockDetector::count(&items));
            for pair in low.windows(2) {
                prop_assert!(pair[0].stock <= pair[1].stock);
                if pair[0].stock == pair[1].stock {
                    let pos = |id: &str| items.iter().position(|i| i.id == id);
                    prop_assert!(pos(&pair[0].id) < pos(&pair[1].id));
                }
            }
        }
    }
}
