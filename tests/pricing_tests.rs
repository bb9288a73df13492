//! Tests for basic and combo package pricing

use nextu_portal_core::*;

fn money(major: f64) -> Money {
    Money::from_major(major)
}

/// A room at 100 per night for one month
#[test]
fn test_accommodation_one_month() {
    let request = PricingRequest::new(PriceableItem::accommodation(money(100.0)), DurationSpec::months(1));
    assert_eq!(PriceCalculator::default().price(&request), money(3000.0));
}

/// A room at 100 per night for one year
#[test]
fn test_accommodation_one_year() {
    let request = PricingRequest::new(PriceableItem::accommodation(money(100.0)), DurationSpec::years(1));
    assert_eq!(PriceCalculator::default().price(&request), money(36000.0));
}

/// A lifestyle entitlement at 500 for six months with 15% off
#[test]
fn test_lifestyle_with_discount() {
    let request = PricingRequest::new(PriceableItem::lifestyle(money(500.0)), DurationSpec::months(6))
        .with_discount(0.15);

    let quote = PriceCalculator::default().quote(&request);
    assert_eq!(quote.base, money(3000.0));
    assert_eq!(quote.discount, money(450.0));
    assert_eq!(quote.total, money(2550.0));
    assert_eq!(quote.months, 6);
    assert_eq!(quote.service_type, Some(ServiceType::Lifestyle));
}

/// Incomplete requests price to zero rather than failing
#[test]
fn test_incomplete_requests_price_to_zero() {
    let calculator = PriceCalculator::default();

    let no_duration = PricingRequest {
        item: Some(PriceableItem::lifestyle(money(500.0))),
        ..Default::default()
    };
    assert_eq!(calculator.price(&no_duration), Money::ZERO);

    let no_item = PricingRequest { duration: Some(DurationSpec::months(3)), ..Default::default() };
    assert_eq!(calculator.price(&no_item), Money::ZERO);

    let no_price = PricingRequest::new(
        PriceableItem::Accommodation { price_per_night: None },
        DurationSpec::months(3),
    );
    assert_eq!(calculator.price(&no_price), Money::ZERO);
    assert!(!calculator.quote(&no_price).is_computable());

    let zero_length = PricingRequest::new(PriceableItem::lifestyle(money(500.0)), DurationSpec::months(0));
    assert_eq!(calculator.price(&zero_length), Money::ZERO);
}

/// A zero-priced catalog item is a real price, not a missing one
#[test]
fn test_zero_priced_item_is_computable() {
    let calculator = PriceCalculator::default();
    let json = r#"{
        "item": { "serviceType": 0, "pricePerNight": 0 },
        "duration": { "value": 2, "unit": "Month" }
    }"#;

    let request: PricingRequest = serde_json::from_str(json).unwrap();
    let quote = calculator.quote(&request);
    assert_eq!(quote.total, Money::ZERO);
    assert!(quote.is_computable());

    let missing_price: PricingRequest =
        serde_json::from_str(r#"{"item": {"serviceType": 0}, "duration": {"value": 2, "unit": "Month"}}"#)
            .unwrap();
    assert!(!calculator.quote(&missing_price).is_computable());
}

/// A full discount is free and out-of-range rates are clamped
#[test]
fn test_discount_bounds() {
    let calculator = PriceCalculator::default();
    let base = PricingRequest::new(PriceableItem::lifestyle(money(200.0)), DurationSpec::months(2));

    assert_eq!(calculator.price(&base.clone().with_discount(1.0)), Money::ZERO);
    assert_eq!(calculator.price(&base.clone().with_discount(1.5)), Money::ZERO);
    assert_eq!(calculator.price(&base.clone().with_discount(-0.5)), money(400.0));
    assert_eq!(calculator.price(&base.clone().with_discount(f64::NAN)), money(400.0));
    assert_eq!(calculator.price(&base.with_discount(0.0)), money(400.0));
}

/// Same inputs always give the same price
#[test]
fn test_pricing_is_repeatable() {
    let calculator = PriceCalculator::default();
    let request = PricingRequest::new(PriceableItem::accommodation(money(87.35)), DurationSpec::months(5))
        .with_discount(0.07);

    let first = calculator.quote(&request);
    let second = calculator.quote(&request);
    assert_eq!(first, second);
}

/// Months per billing period come from configuration
#[test]
fn test_custom_nights_per_month() {
    let config = PortalConfig { nights_per_month: 28, ..Default::default() };
    let calculator = PriceCalculator::from_config(&config);
    let request = PricingRequest::new(PriceableItem::accommodation(money(100.0)), DurationSpec::months(2));

    assert_eq!(calculator.price(&request), money(5600.0));
}

/// Catalog records decode by service type code
#[test]
fn test_pricing_request_from_catalog_json() {
    let json = r#"{
        "item": { "serviceType": 1, "price": 500 },
        "duration": { "_id": "dur-6m", "value": 6, "unit": "Month" },
        "discountRate": 0.15
    }"#;

    let request: PricingRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.duration.as_ref().and_then(|d| d.id.clone()), Some(DurationId::from("dur-6m")));
    assert_eq!(PriceCalculator::default().price(&request), money(2550.0));
}

/// Two monthly items in a six-month combo
#[test]
fn test_combo_of_monthly_items() {
    let components = vec![
        ComboComponent::new(money(10.0), DurationSpec::months(1)),
        ComboComponent::new(money(20.0), DurationSpec::months(1)),
    ];

    assert_eq!(aggregate_combo(&components, &DurationSpec::months(6)), money(180.0));
}

/// Native durations that do not divide the combo duration are rounded
#[test]
fn test_combo_multiplier_rounds() {
    let four_months = ComboComponent::new(money(100.0), DurationSpec::months(4));
    let yearly = ComboComponent::new(money(1200.0), DurationSpec::years(1));

    assert_eq!(four_months.multiplier(6), 2);
    assert_eq!(four_months.multiplier(5), 1);
    assert_eq!(yearly.multiplier(6), 1);
    assert_eq!(yearly.multiplier(5), 0);
    assert_eq!(aggregate_combo(&[four_months, yearly], &DurationSpec::years(1)), money(1500.0));
}

/// Components without a native duration or price add nothing
#[test]
fn test_combo_skips_incomplete_components() {
    let components = vec![
        ComboComponent::new(money(50.0), DurationSpec::months(1)),
        ComboComponent::new(money(50.0), DurationSpec::months(0)),
        ComboComponent { package_id: None, price: None, native_duration: Some(DurationSpec::months(1)) },
        ComboComponent { package_id: None, price: Some(money(50.0)), native_duration: None },
    ];

    assert_eq!(aggregate_combo(&components, &DurationSpec::months(3)), money(150.0));
    assert_eq!(aggregate_combo(&[], &DurationSpec::months(3)), Money::ZERO);
}

/// Combo quotes list contributions and apply the combo discount
#[test]
fn test_combo_quote_with_discount() {
    let request = ComboRequest {
        components: vec![
            ComboComponent::new(money(10.0), DurationSpec::months(1)),
            ComboComponent::new(money(20.0), DurationSpec::months(1)),
        ],
        duration: Some(DurationSpec::months(6)),
        discount_rate: Some(0.1),
    };

    let quote = PriceCalculator::default().quote_combo(&request);
    assert_eq!(quote.months, 6);
    assert_eq!(quote.contributions, vec![money(60.0), money(120.0)]);
    assert_eq!(quote.subtotal, money(180.0));
    assert_eq!(quote.discount, money(18.0));
    assert_eq!(quote.total, money(162.0));
}

/// Combo components built from catalog packages
#[test]
fn test_combo_from_basic_packages() {
    let calculator = PriceCalculator::default();
    let packages = vec![
        BasicPackage::new("Studio", PriceableItem::accommodation(money(100.0)), DurationSpec::months(1)),
        BasicPackage::new("Gym", PriceableItem::lifestyle(money(40.0)), DurationSpec::months(3)),
    ];

    let components = calculator.components_from(&packages);
    assert_eq!(components[0].price, Some(money(3000.0)));
    assert_eq!(components[1].price, Some(money(120.0)));

    let request = ComboRequest { components, duration: Some(DurationSpec::months(6)), discount_rate: None };
    assert_eq!(calculator.price_combo(&request), money(18240.0));
}

/// Months are counted per unit
#[test]
fn test_requested_months() {
    assert_eq!(requested_months(&DurationSpec::months(1)), 1);
    assert_eq!(requested_months(&DurationSpec::months(18)), 18);
    assert_eq!(requested_months(&DurationSpec::years(2)), 24);
    assert_eq!(requested_months(&DurationSpec::years(0)), 0);
}
