//! Table projection of secret requests, shared by the web and terminal views.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

use crate::secret_request::SecretRequest;

/// Column headers, in display order.
pub const HEADERS: [&str; 5] = ["ID", "Secret Name", "Type", "Status", "Created"];

/// Rendering of a `created_at` value no parser accepts.
pub const INVALID_DATE: &str = "Invalid Date";

/// Date-time layout for the `Created` column.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One table row: raw field values, except `created` which is formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRow {
    pub id: String,
    pub secret_name: String,
    pub secret_type: String,
    pub status: String,
    pub created: String,
}

impl RequestRow {
    pub fn new<Tz>(req: &SecretRequest, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            id: req.id.to_string(),
            secret_name: req.secret_name.clone(),
            secret_type: req.secret_type.clone(),
            status: req.status.clone(),
            created: format_created_at(&req.created_at, tz),
        }
    }

    pub fn cells(&self) -> [&str; 5] {
        [
            self.id.as_str(),
            self.secret_name.as_str(),
            self.secret_type.as_str(),
            self.status.as_str(),
            self.created.as_str(),
        ]
    }
}

/// Project every request into a row, preserving order.
pub fn rows<Tz>(requests: &[SecretRequest], tz: &Tz) -> Vec<RequestRow>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    requests.iter().map(|r| RequestRow::new(r, tz)).collect()
}

/// Parse a backend timestamp.
///
/// Accepts RFC 3339 and, failing that, a naive ISO-8601 date-time which is
/// taken to be UTC (what the backend emits for columns without a zone).
/// A bare `YYYY-MM-DD` date is midnight UTC.
pub fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Format a backend timestamp in the given zone; `Invalid Date` if unparseable.
pub fn format_created_at<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_created_at(raw) {
        Some(dt) => dt.with_timezone(tz).format(CREATED_AT_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}
