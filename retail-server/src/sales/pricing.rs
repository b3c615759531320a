//! Line pricing
//!
//! Pure validation and pricing of one submitted line against its resolved
//! product. Stock reservation happens in [`super::items`].

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::{OrderItemInput, ProductType};
use shared::money::{area_subtotal, from_cents, to_cents};

use crate::db::models::ProductRow;
use crate::db::repository::order_item::NewOrderItem;
use crate::utils::validation::MAX_QUANTITY;

/// A validated, priced line (amounts in cents)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLine {
    pub product_type: ProductType,
    pub quantity: i64,
    pub width: Option<Decimal>,
    pub height: Option<Decimal>,
    pub unit_price: i64,
    pub subtotal: i64,
}

impl PricedLine {
    pub fn into_new_item(self, order_number: i64, product: &ProductRow) -> NewOrderItem {
        NewOrderItem {
            order_number,
            product_id: product.id,
            product_code: product.code.clone(),
            product_name: product.name.clone(),
            product_type: self.product_type,
            quantity: self.quantity,
            width: self.width.map(|w| w.normalize().to_string()),
            height: self.height.map(|h| h.normalize().to_string()),
            unit_price: self.unit_price,
            subtotal: self.subtotal,
        }
    }
}

fn require_dimension(value: Option<Decimal>, field: &str, product: &ProductRow) -> Result<Decimal, AppError> {
    match value {
        Some(v) if v > Decimal::ZERO => Ok(v),
        _ => Err(AppError::with_message(
            ErrorCode::DimensionsRequired,
            format!("{field} must be greater than zero for made-to-order product {}", product.name),
        )
        .with_detail("product", product.code.clone())
        .with_detail("field", field)),
    }
}

/// Validate the quantity (and dimensions for made-to-order lines) and
/// compute the subtotal from the product's current price.
pub fn price_line(product: &ProductRow, input: &OrderItemInput) -> Result<PricedLine, AppError> {
    if input.quantity <= 0 || input.quantity > MAX_QUANTITY {
        return Err(AppError::with_message(
            ErrorCode::InvalidQuantity,
            format!(
                "Quantity for {} must be between 1 and {MAX_QUANTITY}, got {}",
                product.name, input.quantity
            ),
        )
        .with_detail("product", product.code.clone())
        .with_detail("quantity", input.quantity));
    }

    match product.product_type {
        ProductType::Stocked => {
            let subtotal = product
                .unit_price
                .checked_mul(input.quantity)
                .ok_or_else(|| AppError::new(ErrorCode::ValueOutOfRange))?;
            Ok(PricedLine {
                product_type: ProductType::Stocked,
                quantity: input.quantity,
                width: None,
                height: None,
                unit_price: product.unit_price,
                subtotal,
            })
        }
        ProductType::MadeToOrder => {
            let width = require_dimension(input.width, "width", product)?;
            let height = require_dimension(input.height, "height", product)?;
            let subtotal = to_cents(area_subtotal(from_cents(product.unit_price), width, height))
                .ok_or_else(|| AppError::new(ErrorCode::ValueOutOfRange))?;
            Ok(PricedLine {
                product_type: ProductType::MadeToOrder,
                quantity: input.quantity,
                width: Some(width),
                height: Some(height),
                unit_price: product.unit_price,
                subtotal,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorKind;

    fn product(product_type: ProductType, unit_price: i64) -> ProductRow {
        ProductRow {
            id: 1,
            code: "P-1".into(),
            name: "Banner".into(),
            unit_price,
            stock: 10,
            product_type,
            created_at: 0,
            updated_at: 0,
        }
    }

    fn input(quantity: i64, width: Option<i64>, height: Option<i64>) -> OrderItemInput {
        OrderItemInput {
            product: "P-1".into(),
            quantity,
            width: width.map(Decimal::from),
            height: height.map(Decimal::from),
        }
    }

    #[test]
    fn stocked_line_is_price_times_quantity() {
        let line = price_line(&product(ProductType::Stocked, 500), &input(3, None, None)).unwrap();
        assert_eq!(line.subtotal, 1500);
        assert_eq!(line.width, None);
    }

    #[test]
    fn made_to_order_line_is_price_times_area() {
        let line =
            price_line(&product(ProductType::MadeToOrder, 200), &input(1, Some(2), Some(3)))
                .unwrap();
        assert_eq!(line.subtotal, 1200);
        assert_eq!(line.width, Some(Decimal::from(2)));
    }

    #[test]
    fn fractional_dimensions_round_to_cents() {
        let mut req = input(1, None, None);
        req.width = Some(Decimal::new(15, 1)); // 1.5
        req.height = Some(Decimal::new(333, 3)); // 0.333
        // 7.77 * 1.5 * 0.333 = 3.881115
        let line = price_line(&product(ProductType::MadeToOrder, 777), &req).unwrap();
        assert_eq!(line.subtotal, 388);
    }

    #[test]
    fn zero_quantity_is_invalid_input() {
        let err = price_line(&product(ProductType::Stocked, 500), &input(0, None, None)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn missing_dimension_is_invalid_input() {
        let err = price_line(&product(ProductType::MadeToOrder, 200), &input(1, Some(2), None))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DimensionsRequired);

        let err = price_line(&product(ProductType::MadeToOrder, 200), &input(1, Some(0), Some(3)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn dimensions_are_ignored_for_stocked_lines() {
        let line =
            price_line(&product(ProductType::Stocked, 100), &input(2, Some(5), Some(5))).unwrap();
        assert_eq!(line.subtotal, 200);
        assert_eq!(line.height, None);
    }
}
