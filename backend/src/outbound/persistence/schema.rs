//! Diesel table definitions matching `backend/migrations`.

diesel::table! {
    /// Uniqueness index of issued tracking numbers.
    tracking_numbers (tracking_number) {
        tracking_number -> Varchar,
        correlation_id -> Uuid,
        issued_at -> Timestamptz,
    }
}

diesel::table! {
    /// Audit trail of issued tracking numbers with their request attributes.
    tracking_requests (id) {
        id -> Uuid,
        tracking_number -> Varchar,
        origin_country -> Varchar,
        destination_country -> Varchar,
        weight_grams -> Int8,
        customer_id -> Uuid,
        customer_name -> Varchar,
        customer_slug -> Varchar,
        request_timestamp -> Timestamptz,
        correlation_id -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// One row per served HTTP request.
    api_metrics (id) {
        id -> Uuid,
        endpoint -> Varchar,
        method -> Varchar,
        status_code -> Int4,
        response_time_ms -> Int8,
        correlation_id -> Uuid,
        recorded_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(tracking_numbers, tracking_requests, api_metrics);
