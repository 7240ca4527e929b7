//! Tests for tracking number derivation.

use super::*;
use crate::domain::{CountryCode, CountryRole, CustomerName, CustomerSlug, Weight};
use chrono::DateTime;
use rstest::{fixture, rstest};
use uuid::Uuid;

const REFERENCE_CORRELATION: &str = "4f9e6b3a-1c2d-4e5f-8a7b-9c0d1e2f3a4b";

fn correlation(raw: &str) -> CorrelationId {
    raw.parse().expect("valid correlation id")
}

#[fixture]
fn reference_input() -> GenerationInput {
    GenerationInput {
        origin: CountryCode::parse("MY", CountryRole::Origin).expect("origin"),
        destination: CountryCode::parse("ID", CountryRole::Destination).expect("destination"),
        weight: Weight::parse("1.234").expect("weight"),
        created_at: DateTime::parse_from_rfc3339("2018-11-20T19:29:32+08:00")
            .expect("timestamp"),
        customer_id: Uuid::parse_str("de619854-b59b-425e-9db4-943979e1bd49").expect("uuid"),
        customer_name: CustomerName::new("RedBox Logistics").expect("name"),
        customer_slug: CustomerSlug::new("redbox-logistics").expect("slug"),
    }
}

#[rstest]
fn reference_input_yields_known_number(reference_input: GenerationInput) {
    let number = generate_tracking_number(&reference_input, &correlation(REFERENCE_CORRELATION));
    assert_eq!(number.as_ref(), "MYIDF50EDWNIQ");
}

#[rstest]
fn derivation_is_deterministic(reference_input: GenerationInput) {
    let id = CorrelationId::generate();
    let first = generate_tracking_number(&reference_input, &id);
    let second = generate_tracking_number(&reference_input.clone(), &id);
    assert_eq!(first, second);
}

#[rstest]
fn output_matches_format(reference_input: GenerationInput) {
    for _ in 0..64 {
        let number = generate_tracking_number(&reference_input, &CorrelationId::generate());
        assert!(
            TrackingNumber::new(number.as_ref()).is_ok(),
            "malformed: {number}"
        );
        assert!(number.as_ref().starts_with("MYID"));
        assert!(number.as_ref().len() <= 14);
    }
}

#[rstest]
fn customer_name_is_not_hashed(mut reference_input: GenerationInput) {
    let id = correlation(REFERENCE_CORRELATION);
    reference_input.customer_name = CustomerName::new("Someone Else").expect("name");
    assert_eq!(
        generate_tracking_number(&reference_input, &id).as_ref(),
        "MYIDF50EDWNIQ"
    );
}

#[rstest]
#[case::weight(|input: &mut GenerationInput| {
    input.weight = Weight::parse("2.345").expect("weight");
}, "MYIDS9JHONEUY")]
#[case::slug(|input: &mut GenerationInput| {
    input.customer_slug = CustomerSlug::new("acme-freight").expect("slug");
}, "MYID2J0CXAHZ3J")]
#[case::customer_id(|input: &mut GenerationInput| {
    input.customer_id = Uuid::nil();
}, "MYIDIIZUMSPT6")]
#[case::timestamp(|input: &mut GenerationInput| {
    input.created_at += chrono::Duration::microseconds(1);
}, "MYIDVS1IHU1HZ")]
#[case::origin(|input: &mut GenerationInput| {
    input.origin = CountryCode::parse("SG", CountryRole::Origin).expect("origin");
}, "SGID1K3ECUQAUZ")]
#[case::destination(|input: &mut GenerationInput| {
    input.destination = CountryCode::parse("SG", CountryRole::Destination).expect("destination");
}, "MYSG1T1CMW2KBF")]
fn each_hashed_field_changes_output(
    mut reference_input: GenerationInput,
    #[case] mutate: fn(&mut GenerationInput),
    #[case] expected: &str,
) {
    let id = correlation(REFERENCE_CORRELATION);
    mutate(&mut reference_input);
    let number = generate_tracking_number(&reference_input, &id);
    assert_ne!(number.as_ref(), "MYIDF50EDWNIQ");
    assert_eq!(number.as_ref(), expected);
}

#[rstest]
fn correlation_id_changes_output(reference_input: GenerationInput) {
    let number = generate_tracking_number(
        &reference_input,
        &correlation("00000000-0000-0000-0000-000000000001"),
    );
    assert_eq!(number.as_ref(), "MYID2D55IYXEV8");
}

#[rstest]
#[case("1.5", "MYIDC04ZDHGUN")]
#[case("1", "MYIDIOCT6P3D4")]
fn weight_is_hashed_in_shortest_form(
    mut reference_input: GenerationInput,
    #[case] raw: &str,
    #[case] expected: &str,
) {
    reference_input.weight = Weight::parse(raw).expect("weight");
    let number = generate_tracking_number(&reference_input, &correlation(REFERENCE_CORRELATION));
    assert_eq!(number.as_ref(), expected);
}

#[rstest]
#[case(0, "0")]
#[case(35, "Z")]
#[case(36, "10")]
#[case(1295, "ZZ")]
#[case(46_656, "1000")]
#[case((1_u64 << 48) - 1, "2RRVTHNXTR")]
fn base36_encodes_unsigned_values(#[case] value: u64, #[case] expected: &str) {
    assert_eq!(to_base36(value), expected);
}

#[rstest]
#[case("MYIDF50EDWNIQ")]
#[case("A")]
#[case("ABCDEFGHIJ123456")]
fn accepts_well_formed_numbers(#[case] raw: &str) {
    assert!(TrackingNumber::new(raw).is_ok());
}

#[rstest]
#[case("")]
#[case("myid123")]
#[case("ABCDEFGHIJ1234567")]
#[case("MY-ID")]
fn rejects_malformed_numbers(#[case] raw: &str) {
    assert!(TrackingNumber::new(raw).is_err());
}
