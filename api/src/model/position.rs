use kernel::model::{id::PositionId, position::Position};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionsResponse {
    pub items: Vec<PositionResponse>,
}

impl From<Vec<Position>> for PositionsResponse {
    fn from(value: Vec<Position>) -> Self {
        Self {
            items: value.into_iter().map(PositionResponse::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionResponse {
    pub position_id: PositionId,
    pub name: String,
}

impl From<Position> for PositionResponse {
    fn from(value: Position) -> Self {
        let Position { position_id, name } = value;
        Self { position_id, name }
    }
}
