use crate::TrafficType;

/// Single row of the inbound or outbound traffic table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TrafficItem {
    pub name: String,
    pub object_type: TrafficType,
    pub request_type: String,
}
