//! Static contract checks for the tracking tables migration.

use rstest::rstest;

const MIGRATION_UP: &str =
    include_str!("../migrations/2024-01-01-000000_create_tracking_tables/up.sql");
const MIGRATION_DOWN: &str =
    include_str!("../migrations/2024-01-01-000000_create_tracking_tables/down.sql");

#[rstest]
#[case("CREATE TABLE tracking_numbers")]
#[case("CREATE TABLE tracking_requests")]
#[case("CREATE TABLE api_metrics")]
fn creates_expected_tables(#[case] table_ddl: &str) {
    assert!(
        MIGRATION_UP.contains(table_ddl),
        "expected migration to contain: {table_ddl}"
    );
}

#[rstest]
fn tracking_number_is_the_primary_key() {
    assert!(MIGRATION_UP.contains("tracking_number VARCHAR(16) PRIMARY KEY"));
}

#[rstest]
#[case("tracking_requests_created_at_idx ON tracking_requests (created_at)")]
#[case("tracking_requests_customer_id_idx ON tracking_requests (customer_id)")]
#[case("tracking_requests_correlation_id_idx ON tracking_requests (correlation_id)")]
#[case("api_metrics_recorded_at_idx ON api_metrics (recorded_at)")]
fn creates_lookup_indexes(#[case] index_fragment: &str) {
    assert!(
        MIGRATION_UP.contains(index_fragment),
        "expected migration to contain index fragment: {index_fragment}"
    );
}

#[rstest]
#[case("DROP TABLE IF EXISTS api_metrics;")]
#[case("DROP TABLE IF EXISTS tracking_requests;")]
#[case("DROP TABLE IF EXISTS tracking_numbers;")]
fn down_migration_drops_tables(#[case] statement: &str) {
    assert!(
        MIGRATION_DOWN.contains(statement),
        "expected down migration to contain: {statement}"
    );
}
