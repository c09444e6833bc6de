use crate::member::TeamMember;

/// Roles that place a member in the leadership grid. Matched exactly after trimming.
pub const LEADERSHIP_ROLES: [&str; 8] = [
    "President",
    "Vice President",
    "Executive",
    "Co-Executive",
    "Former President",
    "Former Vice President",
    "Former Executive",
    "Former Co-Executive",
];

/// Exact, case-sensitive lookup. Callers pass `TeamMember::role`, already trimmed.
pub fn is_leadership_role(role: &str) -> bool {
    LEADERSHIP_ROLES.contains(&role)
}

/// Displayed members split into the two grids, each in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RolePartition {
    pub leadership: Vec<TeamMember>,
    pub other: Vec<TeamMember>,
}

impl RolePartition {
    pub fn is_empty(&self) -> bool {
        self.leadership.is_empty() && self.other.is_empty()
    }
}

pub fn partition_by_role(members: &[TeamMember]) -> RolePartition {
    let (leadership, other): (Vec<_>, Vec<_>) = members
        .iter()
        .cloned()
        .partition(|member| is_leadership_role(member.role()));
    RolePartition { leadership, other }
}
