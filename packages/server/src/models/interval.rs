use serde::Serialize;

/// Gap between two consecutive wins of one producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
    #[schema(example = "Joel Silver")]
    pub producer: String,
    /// `following_win - previous_win`, in years.
    #[schema(example = 1)]
    pub interval: i64,
    #[schema(example = 1990)]
    pub previous_win: i32,
    #[schema(example = 1991)]
    pub following_win: i32,
}

/// Every interval matching the smallest gap, and every interval matching the largest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct ProducerIntervalResponse {
    pub min: Vec<ProducerInterval>,
    pub max: Vec<ProducerInterval>,
}
