//! 品項銷售彙總

use std::collections::HashMap;

use bizdash_core::{Invoice, SalesData};

/// 品項銷售計算器
pub struct SalesCalculator;

impl SalesCalculator {
    /// 彙總已付款發票的品項銷售
    ///
    /// 只輸出出現在已付款發票明細中的品項，依總營收由高到低排序；
    /// 營收相同時保持首次出現的順序。
    pub fn calculate(invoices: &[Invoice]) -> Vec<SalesData> {
        let mut sales: Vec<SalesData> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for invoice in invoices.iter().filter(|inv| inv.is_paid()) {
            for line in &invoice.items {
                let slot = *index.entry(line.inventory_item_id.as_str()).or_insert_with(|| {
                    sales.push(SalesData::new(
                        line.inventory_item_id.clone(),
                        line.name.clone(),
                    ));
                    sales.len() - 1
                });
                sales[slot].record(line.quantity, line.total);
            }
        }

        sales.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));
        sales
    }

    /// 取營收前 N 名
    pub fn top(sales: &[SalesData], limit: usize) -> &[SalesData] {
        &sales[..limit.min(sales.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{invoice, line};
    use bizdash_core::InvoiceStatus;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::collections::{BTreeMap, BTreeSet};

    #[test]
    fn test_draft_invoices_are_excluded() {
        let invoices = vec![
            invoice(InvoiceStatus::Paid, 1, vec![line("A", 2, 20)]),
            invoice(InvoiceStatus::Draft, 1, vec![line("A", 5, 50)]),
        ];

        let sales = SalesCalculator::calculate(&invoices);

        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].item_id, "A");
        assert_eq!(sales[0].total_quantity, 2);
        assert_eq!(sales[0].total_revenue, Decimal::from(20));
        assert_eq!(sales[0].invoice_count, 1);
    }

    #[test]
    fn test_cancelled_only_item_is_absent() {
        let invoices = vec![
            invoice(InvoiceStatus::Paid, 1, vec![line("A", 1, 10)]),
            invoice(InvoiceStatus::Cancelled, 2, vec![line("B", 9, 90)]),
        ];

        let sales = SalesCalculator::calculate(&invoices);

        assert!(sales.iter().all(|s| s.item_id != "B"));
    }

    #[test]
    fn test_sorted_by_revenue_descending() {
        let invoices = vec![
            invoice(InvoiceStatus::Paid, 1, vec![line("A", 1, 10), line("B", 1, 40)]),
            invoice(InvoiceStatus::Paid, 2, vec![line("C", 3, 25), line("A", 2, 20)]),
        ];

        let sales = SalesCalculator::calculate(&invoices);
        let order: Vec<_> = sales.iter().map(|s| s.item_id.as_str()).collect();

        assert_eq!(order, vec!["B", "A", "C"]);
        assert_eq!(sales[1].total_revenue, Decimal::from(30));
        assert_eq!(sales[1].invoice_count, 2);
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let invoices = vec![invoice(
            InvoiceStatus::Paid,
            1,
            vec![line("Z", 1, 15), line("M", 3, 15), line("A", 5, 15)],
        )];

        let sales = SalesCalculator::calculate(&invoices);
        let order: Vec<_> = sales.iter().map(|s| s.item_id.as_str()).collect();

        assert_eq!(order, vec!["Z", "M", "A"]);
    }

    #[test]
    fn test_invoice_count_is_per_line_occurrence() {
        // 同一張發票出現兩次同一品項，計為兩次
        let invoices = vec![invoice(
            InvoiceStatus::Paid,
            1,
            vec![line("A", 1, 10), line("A", 4, 40)],
        )];

        let sales = SalesCalculator::calculate(&invoices);

        assert_eq!(sales[0].invoice_count, 2);
        assert_eq!(sales[0].total_quantity, 5);
    }

    #[test]
    fn test_empty_input() {
        assert!(SalesCalculator::calculate(&[]).is_empty());
    }

    #[test]
    fn test_top_products() {
        let invoices = vec![invoice(
            InvoiceStatus::Paid,
            1,
            vec![line("A", 1, 10), line("B", 1, 20), line("C", 1, 30)],
        )];
        let sales = SalesCalculator::calculate(&invoices);

        assert_eq!(SalesCalculator::top(&sales, 2).len(), 2);
        assert_eq!(SalesCalculator::top(&sales, 2)[0].item_id, "C");
        assert_eq!(SalesCalculator::top(&sales, 10).len(), 3);
    }

    fn arb_status() -> impl Strategy<Value = InvoiceStatus> {
        prop_oneof![
            Just(InvoiceStatus::Draft),
            Just(InvoiceStatus::Paid),
            Just(InvoiceStatus::Cancelled),
        ]
    }

    fn arb_invoices() -> impl Strategy<Value = Vec<Invoice>> {
        let lines = prop::collection::vec(
            (prop::sample::select(vec!["A", "B", "C", "D", "E"]), 1u32..20, 0i64..500),
            0..6,
        );
        prop::collection::vec((arb_status(), 1u32..28, lines), 0..12).prop_map(|specs| {
            specs
                .into_iter()
                .map(|(status, day, lines)| {
                    let lines = lines
                        .into_iter()
                        .map(|(id, qty, total)| line(id, qty, total))
                        .collect();
                    invoice(status, day, lines)
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_sales_match_paid_lines(invoices in arb_invoices()) {
            let sales = SalesCalculator::calculate(&invoices);

            let mut expected: BTreeMap<String, Decimal> = BTreeMap::new();
            for inv in invoices.iter().filter(|i| i.is_paid()) {
                for l in &inv.items {
                    *expected.entry(l.inventory_item_id.clone()).or_default() += l.total;
                }
            }

            let ids: BTreeSet<_> = sales.iter().map(|s| s.item_id.clone()).collect();
            prop_assert_eq!(ids.len(), sales.len());
            prop_assert_eq!(ids, expected.keys().cloned().collect::<BTreeSet<_>>());

            for s in &sales {
                prop_assert_eq!(s.total_revenue, expected[&s.item_id]);
            }
            for pair in sales.windows(2) {
                prop_assert!(pair[0].total_revenue >= pair[1].total_revenue);
            }
        }

        #[test]
        fn prop_sales_is_idempotent(invoices in arb_invoices()) {
            prop_assert_eq!(
                SalesCalculator::calculate(&invoices),
                SalesCalculator::calculate(&invoices)
            );
        }
    }
}
