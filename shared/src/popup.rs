use crate::member::TeamMember;

/// Where a click inside the open popup landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickRegion {
    /// Dimmed area around the detail panel.
    Backdrop,
    /// Anywhere inside the detail panel. Never bubbles to the backdrop.
    Panel,
    CloseControl,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    Closed,
    Open(TeamMember),
}

impl PopupState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn member(&self) -> Option<&TeamMember> {
        match self {
            Self::Open(member) => Some(member),
            Self::Closed => None,
        }
    }

    /// A card click always opens, replacing any member already shown.
    pub fn open(self, member: TeamMember) -> Self {
        Self::Open(member)
    }

    pub fn click(self, region: ClickRegion) -> Self {
        match (self, region) {
            (Self::Open(member), ClickRegion::Panel) => Self::Open(member),
            (_, ClickRegion::Backdrop | ClickRegion::CloseControl) => Self::Closed,
            (Self::Closed, ClickRegion::Panel) => Self::Closed,
        }
    }
}
