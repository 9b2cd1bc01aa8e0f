use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// Istante corrente in UTC formattato RFC3339 (es. "2026-08-24T12:34:56Z").
/// È il valore che finisce nei campi `createdAt` e nel timestamp di /health.
pub fn now_timestamp() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339).expect("error formatting timestamp")
}
