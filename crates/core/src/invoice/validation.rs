//! Input validation for invoice creation.

use rust_decimal::Decimal;

use super::error::InvoiceError;
use super::types::NewInvoice;

/// Validates an invoice before anything is written.
///
/// # Errors
///
/// Returns `InvoiceError::Validation` if the supplier is blank, there are no
/// items, or an item has a blank name, negative quantity or negative price.
pub fn validate_invoice(input: &NewInvoice) -> Result<(), InvoiceError> {
    if input.supplier.trim().is_empty() {
        return Err(InvoiceError::validation("supplier is required"));
    }

    if input.items.is_empty() {
        return Err(InvoiceError::validation("at least one item is required"));
    }

    for (index, item) in input.items.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(InvoiceError::validation(format!(
                "item {index}: name is required"
            )));
        }
        if item.quantity < 0 {
            return Err(InvoiceError::validation(format!(
                "item {index}: quantity cannot be negative"
            )));
        }
        if item.buying_price < Decimal::ZERO {
            return Err(InvoiceError::validation(format!(
                "item {index}: buyingPrice cannot be negative"
            )));
        }
        if item.selling_price < Decimal::ZERO {
            return Err(InvoiceError::validation(format!(
                "item {index}: sellingPrice cannot be negative"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::NewInvoiceItem;
    use rust_decimal_macros::dec;

    fn invoice(supplier: &str, items: Vec<NewInvoiceItem>) -> NewInvoice {
        NewInvoice {
            file_url: None,
            supplier: supplier.to_string(),
            items,
        }
    }

    #[test]
    fn test_valid_invoice() {
        let input = invoice("Acme", vec![NewInvoiceItem::new("Widget", 2, dec!(4.5))]);
        assert!(validate_invoice(&input).is_ok());
    }

    #[test]
    fn test_blank_supplier() {
        let input = invoice("   ", vec![NewInvoiceItem::new("Widget", 2, dec!(4.5))]);
        let err = validate_invoice(&input).unwrap_err();
        assert!(matches!(err, InvoiceError::Validation(ref m) if m.contains("supplier")));
    }

    #[test]
    fn test_no_items() {
        let err = validate_invoice(&invoice("Acme", vec![])).unwrap_err();
        assert!(matches!(err, InvoiceError::Validation(ref m) if m.contains("item")));
    }

    #[test]
    fn test_item_errors_name_the_index() {
        let mut bad = NewInvoiceItem::new("Gadget", 1, dec!(1));
        bad.quantity = -1;
        let input = invoice(
            "Acme",
            vec![NewInvoiceItem::new("Widget", 1, dec!(1)), bad],
        );
        let err = validate_invoice(&input).unwrap_err();
        assert_eq!(err.to_string(), "item 1: quantity cannot be negative");
    }

    #[test]
    fn test_blank_item_name() {
        let input = invoice("Acme", vec![NewInvoiceItem::new(" ", 1, dec!(1))]);
        let err = validate_invoice(&input).unwrap_err();
        assert_eq!(err.to_string(), "item 0: name is required");
    }

    #[test]
    fn test_negative_prices() {
        let mut cheap = NewInvoiceItem::new("Widget", 1, dec!(1));
        cheap.buying_price = dec!(-0.01);
        let err = validate_invoice(&invoice("Acme", vec![cheap])).unwrap_err();
        assert_eq!(err.to_string(), "item 0: buyingPrice cannot be negative");

        let free = NewInvoiceItem::new("Widget", 1, dec!(-2));
        let err = validate_invoice(&invoice("Acme", vec![free])).unwrap_err();
        assert_eq!(err.to_string(), "item 0: sellingPrice cannot be negative");
    }
}
