//! Wire types for the three leaderboard endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::RankedCustomer;

/// A single ranked customer, as returned by `/leaderboard*`.
///
/// `score` serializes through `rust_decimal`'s string representation so
/// clients never lose precision to floating point.
#[derive(Debug, Serialize, Deserialize)]
pub struct RankedCustomerDto {
    pub customer_id: i64,
    pub score: Decimal,
    pub rank: u32,
}

impl From<RankedCustomer> for RankedCustomerDto {
    fn from(c: RankedCustomer) -> Self {
        Self {
            customer_id: c.customer_id,
            score: c.score,
            rank: c.rank,
        }
    }
}

/// Response body for `POST /customer/{id}/score/{delta}`.
#[derive(Debug, Serialize)]
pub struct ScoreUpdateResponse {
    pub customer_id: i64,
    pub score: Decimal,
}

/// Query parameters for `GET /leaderboard?start=S&end=E`.
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: u64,
    pub end: u64,
}

/// Query parameters for `GET /leaderboard/{id}?high=H&low=L`.
#[derive(Debug, Deserialize)]
pub struct NeighborsQuery {
    #[serde(default)]
    pub high: i64,
    #[serde(default)]
    pub low: i64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
