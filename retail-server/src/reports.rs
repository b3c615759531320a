//! Read-only views over orders

use std::collections::HashMap;

use chrono::NaiveDate;
use shared::error::ErrorCode;
use shared::models::{
    ClientStatement, ClientSummary, Order, OrderDetail, OrderStatus, SalesReport, SellerSales,
};
use shared::money::from_cents;
use sqlx::SqlitePool;

use crate::db::models::OrderRow;
use crate::db::repository::{order, order_item, payment};
use crate::sales::order_not_found;
use crate::utils::ServiceResult;
use crate::utils::time::period_millis;
use crate::utils::validation::{MAX_NAME_LEN, require_text};

/// Order header with its items and payment history
pub async fn order_detail(pool: &SqlitePool, order_number: i64) -> ServiceResult<OrderDetail> {
    let row = order::find_by_number(pool, order_number)
        .await?
        .ok_or_else(|| order_not_found(order_number))?;
    let items = order_item::find_by_order(pool, order_number).await?;
    let payments = payment::find_by_order(pool, order_number).await?;

    Ok(OrderDetail {
        order: row.into(),
        items: items.into_iter().map(Into::into).collect(),
        payments: payments.into_iter().map(Into::into).collect(),
    })
}

/// Summary over orders that still count towards the client's account
pub fn summarize(orders: &[Order]) -> ClientSummary {
    orders
        .iter()
        .filter(|o| !o.status.is_terminal())
        .fold(ClientSummary::default(), |mut acc, o| {
            acc.total_ordered += o.total;
            acc.total_paid += o.paid;
            acc.outstanding += o.balance();
            acc
        })
}

/// Every order of a client, newest first, with account totals
pub async fn client_statement(pool: &SqlitePool, client_name: &str) -> ServiceResult<ClientStatement> {
    let client_name = require_text(client_name, "client_name", MAX_NAME_LEN, ErrorCode::ClientNameRequired)?;

    let orders: Vec<Order> = order::find_by_client(pool, &client_name)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let summary = summarize(&orders);

    Ok(ClientStatement {
        client_name,
        orders,
        summary,
    })
}

/// Per-seller count and sums, highest total first
pub fn sales_by_seller(rows: &[OrderRow]) -> Vec<SellerSales> {
    let mut by_id: HashMap<i64, (String, i64, i64, i64)> = HashMap::new();
    for row in rows {
        let entry = by_id
            .entry(row.seller_id)
            .or_insert_with(|| (row.seller_name.clone(), 0, 0, 0));
        entry.1 += 1;
        entry.2 += row.total;
        entry.3 += row.paid;
    }

    let mut sellers: Vec<(i64, (String, i64, i64, i64))> = by_id.into_iter().collect();
    sellers.sort_by(|a, b| (b.1).2.cmp(&(a.1).2).then(a.0.cmp(&b.0)));
    sellers
        .into_iter()
        .map(|(seller_id, (seller_name, order_count, total, paid))| SellerSales {
            seller_id,
            seller_name,
            order_count,
            total: from_cents(total),
            paid: from_cents(paid),
        })
        .collect()
}

/// Orders created between `from` and `to` (inclusive days), with totals
/// overall and per seller
pub async fn sales_summary(
    pool: &SqlitePool,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    status: Option<OrderStatus>,
) -> ServiceResult<SalesReport> {
    let (start, end) = period_millis(from, to)?;
    let rows = order::find_in_period(pool, start, end, status).await?;

    let total: i64 = rows.iter().map(|r| r.total).sum();
    let paid: i64 = rows.iter().map(|r| r.paid).sum();
    let by_seller = sales_by_seller(&rows);

    Ok(SalesReport {
        from,
        to,
        status,
        order_count: rows.len() as i64,
        total: from_cents(total),
        paid: from_cents(paid),
        by_seller,
        orders: rows.into_iter().map(Into::into).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::{OrderStatus, PaymentStatus};

    fn order(total: i64, paid: i64, status: OrderStatus) -> Order {
        Order {
            order_number: 1,
            client_name: "Acme".into(),
            seller_id: 1,
            seller_name: "Ana".into(),
            total: Decimal::from(total),
            paid: Decimal::from(paid),
            status,
            payment_status: PaymentStatus::from_amounts(Decimal::from(paid), Decimal::from(total)),
            cancel_reason: None,
            edit_unlocked: false,
            edited_after_unlock: false,
            unlock_reason: None,
            unlocked_by: None,
            unlocked_at: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn summary_skips_terminal_orders() {
        let orders = vec![
            order(100, 40, OrderStatus::Open),
            order(50, 50, OrderStatus::Completed),
            order(70, 0, OrderStatus::Cancelled),
            order(30, 0, OrderStatus::Reversed),
        ];
        let summary = summarize(&orders);
        assert_eq!(summary.total_ordered, Decimal::from(150));
        assert_eq!(summary.total_paid, Decimal::from(90));
        assert_eq!(summary.outstanding, Decimal::from(60));
    }

    fn row(order_number: i64, seller_id: i64, seller_name: &str, total: i64, paid: i64) -> OrderRow {
        OrderRow {
            order_number,
            client_name: "Acme".into(),
            seller_id,
            seller_name: seller_name.into(),
            total,
            paid,
            status: OrderStatus::Open,
            payment_status: PaymentStatus::NotPaid,
            cancel_reason: None,
            edit_unlocked: false,
            edited_after_unlock: false,
            unlock_reason: None,
            unlocked_by: None,
            unlocked_at: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn seller_totals_are_grouped_and_ranked() {
        let rows = vec![
            row(1, 7, "Sergio", 1000, 500),
            row(2, 3, "Marta", 4000, 0),
            row(3, 7, "Sergio", 2500, 2500),
        ];
        let sellers = sales_by_seller(&rows);
        assert_eq!(sellers.len(), 2);
        assert_eq!(sellers[0].seller_name, "Marta");
        assert_eq!(sellers[0].order_count, 1);
        assert_eq!(sellers[1].seller_id, 7);
        assert_eq!(sellers[1].order_count, 2);
        assert_eq!(sellers[1].total, Decimal::new(3500, 2));
        assert_eq!(sellers[1].paid, Decimal::new(3000, 2));
    }
}
