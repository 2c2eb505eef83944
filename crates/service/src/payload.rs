//! Outbound mapping: domain values into JSON payloads.
//!
//! Amounts are written as decimal strings so a store or remote API receives
//! the exact value. The shape is the one [`crate::parse`] reads back.

use serde_json::{Value, json};

use billforge_invoicing::{Invoice, LineItem};
use billforge_parties::Party;
use billforge_products::Product;

pub fn party_to_json(party: &Party) -> Value {
    json!({
        "name": party.name(),
        "avatar": party.avatar(),
    })
}

pub fn product_to_json(product: &Product) -> Value {
    json!({
        "name": product.name(),
        "description": product.description(),
    })
}

pub fn line_item_to_json(item: &LineItem) -> Value {
    json!({
        "product": product_to_json(item.product()),
        "rate": item.rate().to_string(),
        "quantity": item.quantity(),
        "line_total": item.line_total().to_string(),
    })
}

pub fn invoice_to_json(invoice: &Invoice) -> Value {
    json!({
        "id": invoice.id().map(u64::from),
        "created_by": party_to_json(invoice.created_by()),
        "line_items": invoice.line_items().iter().map(line_item_to_json).collect::<Vec<_>>(),
        "total_amount": invoice.total_amount().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_invoice;
    use billforge_core::{Decimal, InvoiceId};

    fn sample_invoice() -> Invoice {
        Invoice::create(Party::new("Ada", "https://example.com/ada.png"))
            .add_line_item(LineItem::new(
                Product::new("Consulting", "Hourly").shared(),
                Decimal::new(1000, 2),
                1,
            ))
            .add_line_item(LineItem::new(
                Product::new("Widget", "Small").shared(),
                Decimal::new(3, 0),
                2,
            ))
    }

    #[test]
    fn invoice_payload_has_string_amounts() {
        let json = invoice_to_json(&sample_invoice());
        assert_eq!(json["id"], Value::Null);
        assert_eq!(json["total_amount"], json!("16.00"));
        assert_eq!(json["line_items"][0]["rate"], json!("10.00"));
        assert_eq!(json["line_items"][1]["line_total"], json!("6"));
        assert_eq!(json["created_by"]["avatar"], json!("https://example.com/ada.png"));
    }

    #[test]
    fn payload_parses_back_to_the_same_invoice() {
        let invoice = sample_invoice().with_id(InvoiceId::new(9));
        let parsed = parse_invoice(&invoice_to_json(&invoice)).unwrap();
        assert_eq!(parsed, invoice);
    }
}
