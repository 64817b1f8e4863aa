//! Order data shown on the checkout page.
//!
//! The order is fixed for the lifetime of the page: in a real deployment it
//! would arrive in the merchant's checkout session payload, here it is a
//! sample record.

use serde::{Deserialize, Serialize};

/// Line-item breakdown of an order. The discount is stored as a negative
/// amount so the total is a plain sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderBreakdown {
    pub subtotal: f64,
    pub tax: f64,
    pub processing_fee: f64,
    pub discount: f64,
}

impl OrderBreakdown {
    pub fn total(&self) -> f64 {
        self.subtotal + self.tax + self.processing_fee + self.discount
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: String,
    pub transaction_id: String,
    pub product_name: String,
    pub currency: String,
    pub breakdown: OrderBreakdown,
}

impl OrderSummary {
    /// The sample order rendered by the demo checkout session.
    pub fn sample() -> Self {
        Self {
            order_id: "ORD-2024-001523".to_string(),
            transaction_id: "TXN-PGX-789456123".to_string(),
            product_name: "Premium Software License".to_string(),
            currency: "USD".to_string(),
            breakdown: OrderBreakdown {
                subtotal: 249.99,
                tax: 25.00,
                processing_fee: 15.00,
                discount: -10.00,
            },
        }
    }

    pub fn total(&self) -> f64 {
        self.breakdown.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_sum_of_line_items() {
        let breakdown = OrderBreakdown {
            subtotal: 100.0,
            tax: 10.0,
            processing_fee: 5.0,
            discount: -2.5,
        };
        assert!((breakdown.total() - 112.5).abs() < 1e-9);
    }

    #[test]
    fn sample_order_totals_279_99() {
        let order = OrderSummary::sample();
        assert!((order.total() - 279.99).abs() < 1e-9);
        assert_eq!(format!("{:.2}", order.total()), "279.99");
    }

    #[test]
    fn order_survives_a_serde_round_trip() {
        let order = OrderSummary::sample();
        let json = serde_json::to_string(&order).unwrap();
        let parsed: OrderSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, order);
        assert!((parsed.total() - 279.99).abs() < 1e-9);
    }

    #[test]
    fn sample_discount_is_negative() {
        let order = OrderSummary::sample();
        assert!(order.breakdown.discount < 0.0);
        assert!(order.total() < order.breakdown.subtotal + order.breakdown.tax + order.breakdown.processing_fee);
    }
}
