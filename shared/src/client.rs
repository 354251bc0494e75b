//! Wire types of the table / reservation API
//!
//! Request and response bodies exchanged with the remote table service.
//! Shared between the HTTP client and anything faking the service in tests.

use crate::models::FloorTable;
use serde::{Deserialize, Serialize};

// =============================================================================
// Table API DTOs
// =============================================================================

/// Response of `GET /tables`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableListResponse {
    #[serde(default)]
    pub items: Vec<FloorTable>,
}

/// Body of `POST /reserve`
///
/// Constructed only at submission time; `seat_index` is the seat's position
/// within the owning table's `seats` sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub table_id: String,
    pub seat_index: usize,
    pub name: String,
}

/// Error body the service attaches to non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reservation_request_wire_format() {
        let req = ReservationRequest {
            table_id: "T1".to_string(),
            seat_index: 2,
            name: "Ada Lovelace".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["table_id"], "T1");
        assert_eq!(json["seat_index"], 2);
        assert_eq!(json["name"], "Ada Lovelace");
    }

    #[test]
    fn error_body_tolerates_missing_detail() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.detail.is_none());
    }

    #[test]
    fn table_list_tolerates_missing_items() {
        let res: TableListResponse = serde_json::from_str("{}").unwrap();
        assert!(res.items.is_empty());
    }
}
