//! Parsing boundary: loosely-typed JSON into domain values.
//!
//! Missing or `null` fields take their defaults (empty text, zero amounts and
//! quantities, no identity, empty line items). A field that is present with
//! the wrong JSON type is rejected with a validation error naming the field.

use serde_json::{Map, Value};

use billforge_core::{Decimal, DomainError, DomainResult, InvoiceId, Money, parse_money};
use billforge_invoicing::{Invoice, LineItem};
use billforge_parties::Party;
use billforge_products::Product;

type Object = Map<String, Value>;

/// Parse a party (`{ "name", "avatar" }`).
pub fn parse_party(value: &Value) -> DomainResult<Party> {
    parse_party_at(value, "created_by")
}

/// Parse a product (`{ "name", "description" }`).
pub fn parse_product(value: &Value) -> DomainResult<Product> {
    parse_product_at(value, "product")
}

/// Parse a line item (`{ "product", "rate", "quantity" }`).
///
/// `rate` may be a decimal string or a JSON number; numbers are read through
/// their literal text so no float rounding reaches the decimal.
pub fn parse_line_item(value: &Value) -> DomainResult<LineItem> {
    parse_line_item_at(value, "line_item")
}

/// Parse an invoice (`{ "id", "created_by", "line_items", "total_amount" }`).
///
/// `total_amount` is never taken from input: the invoice total is recomputed
/// from the parsed line items, and a disagreeing input total is logged.
/// A line amount or total too large for `Decimal` is a validation error
/// naming the line, e.g. `line_items[0].rate: amount overflows`.
pub fn parse_invoice(value: &Value) -> DomainResult<Invoice> {
    let Some(obj) = object(value, "invoice")? else {
        tracing::debug!("invoice payload is null; using defaults");
        return Ok(Invoice::create(Party::default()));
    };

    let id = invoice_id(obj, "id")?;
    let created_by = parse_party_at(field(obj, "created_by").unwrap_or(&Value::Null), "created_by")?;

    let line_items = match field(obj, "line_items") {
        None => {
            tracing::debug!(field = "line_items", "missing field defaulted");
            Vec::new()
        }
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| parse_line_item_at(item, &format!("line_items[{i}]")))
            .collect::<DomainResult<Vec<_>>>()?,
        Some(_) => return Err(wrong_type("line_items", "an array")),
    };

    let invoice = Invoice::try_from_parts(id, created_by, line_items)?;
    check_reported_total(obj, &invoice);
    Ok(invoice)
}

fn parse_party_at(value: &Value, path: &str) -> DomainResult<Party> {
    let Some(obj) = object(value, path)? else {
        tracing::debug!(field = path, "missing field defaulted");
        return Ok(Party::default());
    };
    Ok(Party::new(
        text(obj, path, "name")?,
        text(obj, path, "avatar")?,
    ))
}

fn parse_product_at(value: &Value, path: &str) -> DomainResult<Product> {
    let Some(obj) = object(value, path)? else {
        tracing::debug!(field = path, "missing field defaulted");
        return Ok(Product::default());
    };
    Ok(Product::new(
        text(obj, path, "name")?,
        text(obj, path, "description")?,
    ))
}

fn parse_line_item_at(value: &Value, path: &str) -> DomainResult<LineItem> {
    let Some(obj) = object(value, path)? else {
        tracing::debug!(field = path, "missing field defaulted");
        return Ok(LineItem::new(Product::default().shared(), Decimal::ZERO, 0));
    };
    let product_path = format!("{path}.product");
    let product = parse_product_at(field(obj, "product").unwrap_or(&Value::Null), &product_path)?;
    Ok(LineItem::new(
        product.shared(),
        money(obj, path, "rate")?,
        quantity(obj, path, "quantity")?,
    ))
}

fn check_reported_total(obj: &Object, invoice: &Invoice) {
    let Some(reported) = field(obj, "total_amount") else {
        return;
    };
    match decimal_value(reported, "total_amount") {
        Ok(reported) if reported == invoice.total_amount() => {}
        Ok(reported) => tracing::warn!(
            invoice_id = ?invoice.id(),
            reported = %reported,
            computed = %invoice.total_amount(),
            "reported invoice total disagrees with line items; using computed total"
        ),
        Err(err) => tracing::warn!(
            invoice_id = ?invoice.id(),
            error = %err,
            "unreadable reported invoice total ignored"
        ),
    }
}

/// `None` for a null value, the map for an object, an error otherwise.
fn object<'a>(value: &'a Value, path: &str) -> DomainResult<Option<&'a Object>> {
    match value {
        Value::Null => Ok(None),
        Value::Object(obj) => Ok(Some(obj)),
        _ => Err(wrong_type(path, "an object")),
    }
}

/// A present, non-null field.
fn field<'a>(obj: &'a Object, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn text(obj: &Object, path: &str, key: &str) -> DomainResult<String> {
    match field(obj, key) {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(wrong_type(&format!("{path}.{key}"), "a string")),
    }
}

fn money(obj: &Object, path: &str, key: &str) -> DomainResult<Money> {
    match field(obj, key) {
        None => {
            tracing::debug!(field = %format!("{path}.{key}"), "missing amount defaulted to zero");
            Ok(Decimal::ZERO)
        }
        Some(value) => decimal_value(value, &format!("{path}.{key}")),
    }
}

fn decimal_value(value: &Value, path: &str) -> DomainResult<Money> {
    match value {
        Value::String(s) => parse_money(path, s),
        Value::Number(n) => parse_money(path, &n.to_string()),
        _ => Err(wrong_type(path, "a decimal string or number")),
    }
}

fn quantity(obj: &Object, path: &str, key: &str) -> DomainResult<u32> {
    let full = format!("{path}.{key}");
    match field(obj, key) {
        None => Ok(0),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|q| u32::try_from(q).ok())
            .ok_or_else(|| DomainError::validation(format!("{full}: expected a non-negative integer, got {n}"))),
        Some(_) => Err(wrong_type(&full, "a non-negative integer")),
    }
}

fn invoice_id(obj: &Object, key: &str) -> DomainResult<Option<InvoiceId>> {
    match field(obj, key) {
        None => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .map(|id| Some(InvoiceId::new(id)))
            .ok_or_else(|| DomainError::invalid_id(format!("InvoiceId: {n}"))),
        Some(Value::String(s)) => s.parse().map(Some),
        Some(_) => Err(wrong_type(key, "a number")),
    }
}

fn wrong_type(path: &str, expected: &str) -> DomainError {
    DomainError::validation(format!("{path}: expected {expected}"))
}
