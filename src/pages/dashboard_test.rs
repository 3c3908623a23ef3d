use super::*;

#[test]
fn validate_new_card_maps_network_to_issuer_and_type() {
    let card = validate_new_card("Chase Sapphire", "1234", "Visa").unwrap();
    assert_eq!(card.card_name, "Chase Sapphire");
    assert_eq!(card.issuer, "Visa");
    assert_eq!(card.card_type, "Visa");
    assert_eq!(card.last_four_digits, "1234");
}

#[test]
fn validate_new_card_trims_inputs() {
    let card = validate_new_card("  Everyday  ", " 9876 ", "Amex").unwrap();
    assert_eq!(card.card_name, "Everyday");
    assert_eq!(card.last_four_digits, "9876");
}

#[test]
fn validate_new_card_requires_nickname() {
    assert_eq!(validate_new_card("   ", "1234", "Visa"), Err("Enter a card nickname."));
}

#[test]
fn validate_new_card_requires_exactly_four_digits() {
    assert_eq!(
        validate_new_card("Everyday", "123", "Visa"),
        Err("Enter the last 4 digits of the card.")
    );
    assert_eq!(
        validate_new_card("Everyday", "12345", "Visa"),
        Err("Enter the last 4 digits of the card.")
    );
    assert_eq!(
        validate_new_card("Everyday", "12a4", "Visa"),
        Err("Enter the last 4 digits of the card.")
    );
}

#[test]
fn networks_offer_the_four_supported_options() {
    assert_eq!(NETWORKS, ["Visa", "Mastercard", "Amex", "Discover"]);
}
