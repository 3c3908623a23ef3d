use super::*;

#[test]
fn validate_new_transaction_parses_amount() {
    let tx = validate_new_transaction("Starbucks", "10.50", "Dining", "2025-06-01").unwrap();
    assert_eq!(tx.merchant, "Starbucks");
    assert_eq!(tx.amount, 10.5);
    assert_eq!(tx.category, "Dining");
    assert_eq!(tx.date, "2025-06-01");
}

#[test]
fn validate_new_transaction_trims_merchant() {
    let tx = validate_new_transaction("  Trader Joe's  ", "42", "Groceries", "2025-06-01").unwrap();
    assert_eq!(tx.merchant, "Trader Joe's");
}

#[test]
fn validate_new_transaction_requires_merchant() {
    assert_eq!(
        validate_new_transaction("   ", "10.50", "Dining", "2025-06-01"),
        Err("Enter a merchant name.")
    );
}

#[test]
fn validate_new_transaction_rejects_unparseable_amount() {
    assert_eq!(
        validate_new_transaction("Starbucks", "ten", "Dining", "2025-06-01"),
        Err("Enter a valid amount.")
    );
}

#[test]
fn validate_new_transaction_rejects_non_positive_amounts() {
    assert_eq!(
        validate_new_transaction("Starbucks", "0", "Dining", "2025-06-01"),
        Err("Enter a valid amount.")
    );
    assert_eq!(
        validate_new_transaction("Starbucks", "-5.00", "Dining", "2025-06-01"),
        Err("Enter a valid amount.")
    );
    assert_eq!(
        validate_new_transaction("Starbucks", "inf", "Dining", "2025-06-01"),
        Err("Enter a valid amount.")
    );
}

#[test]
fn validate_new_transaction_requires_date() {
    assert_eq!(
        validate_new_transaction("Starbucks", "10.50", "Dining", "  "),
        Err("Pick a date.")
    );
}

#[test]
fn categories_offer_the_six_supported_options() {
    assert_eq!(CATEGORIES, ["Dining", "Travel", "Groceries", "Gas", "Entertainment", "Other"]);
}
