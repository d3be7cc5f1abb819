//! 儀表板計算效能基準

use bizdash_calc::AnalyticsCalculator;
use bizdash_core::{
    AnalyticsConfig, DayBoundary, InventoryItem, Invoice, InvoiceItem, InvoiceStatus,
    PurchaseOrder, PurchaseOrderStatus, Snapshot, Supplier,
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

fn generate_snapshot(invoice_count: usize, item_count: usize) -> Snapshot {
    let mut rng = StdRng::seed_from_u64(42);
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    let items: Vec<InventoryItem> = (0..item_count)
        .map(|i| {
            InventoryItem::new(
                format!("ITEM-{i:05}"),
                format!("Item {i}"),
                rng.gen_range(0..500),
                rng.gen_range(0..50),
            )
            .with_price(Decimal::new(rng.gen_range(100..10_000), 2))
        })
        .collect();

    let statuses = [InvoiceStatus::Paid, InvoiceStatus::Paid, InvoiceStatus::Draft, InvoiceStatus::Cancelled];
    let invoices: Vec<Invoice> = (0..invoice_count)
        .map(|i| {
            let lines = (0..rng.gen_range(1..6))
                .map(|_| {
                    let item = &items[rng.gen_range(0..items.len())];
                    InvoiceItem::new(item.id.clone(), item.name.clone(), rng.gen_range(1..10), item.price)
                })
                .collect();
            let created_at = start + Duration::minutes(rng.gen_range(0..525_600));
            Invoice::new(format!("INV-{i:06}"), statuses[i % statuses.len()], created_at)
                .with_items(lines)
        })
        .collect();

    let suppliers: Vec<Supplier> = (0..20)
        .map(|i| Supplier::new(format!("SUP-{i:02}"), format!("Supplier {i}")))
        .collect();

    let po_statuses = [PurchaseOrderStatus::Received, PurchaseOrderStatus::Pending, PurchaseOrderStatus::Cancelled];
    let base_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let purchase_orders: Vec<PurchaseOrder> = (0..invoice_count / 4)
        .map(|i| {
            PurchaseOrder::new(
                format!("SUP-{:02}", rng.gen_range(0..25)),
                base_date + Duration::days(rng.gen_range(0..365)),
                po_statuses[i % po_statuses.len()],
            )
            .with_total_amount(Decimal::new(rng.gen_range(1_000..500_000), 2))
        })
        .collect();

    Snapshot::new(invoices, items, purchase_orders, suppliers)
}

fn bench_dashboard(c: &mut Criterion) {
    let calculator =
        AnalyticsCalculator::new(AnalyticsConfig::default().with_day_boundary(DayBoundary::utc()));
    let mut group = c.benchmark_group("dashboard");

    for &invoices in &[1_000usize, 10_000, 50_000] {
        let snapshot = generate_snapshot(invoices, 2_000);
        group.bench_with_input(BenchmarkId::from_parameter(invoices), &snapshot, |b, snapshot| {
            b.iter(|| calculator.calculate(black_box(snapshot)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dashboard);
criterion_main!(benches);
