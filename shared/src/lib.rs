pub mod dataset;
pub mod era;
pub mod member;
pub mod page;
pub mod popup;
pub mod roles;

pub use dataset::{DATASET_PATH, TeamDataset};
pub use era::Era;
pub use member::{PLACEHOLDER_IMAGE, ProfileKind, ProfileLink, TeamMember};
pub use page::{Effect, PageEvent, PageState, card_key};
pub use popup::{ClickRegion, PopupState};
pub use roles::{LEADERSHIP_ROLES, RolePartition, is_leadership_role, partition_by_role};
