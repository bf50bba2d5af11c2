use crate::model::id::PositionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub position_id: PositionId,
    pub name: String,
}
