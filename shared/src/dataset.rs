use serde::Deserialize;

use crate::era::Era;
use crate::member::TeamMember;

/// Fixed path of the team document, relative to the site root.
pub const DATASET_PATH: &str = "/data.json";

/// Team members grouped by era. Missing eras deserialize as empty lists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TeamDataset {
    #[serde(rename = "currentLeads", default)]
    pub current: Vec<TeamMember>,
    #[serde(rename = "2024-2025Leads", default)]
    pub leads_2024_2025: Vec<TeamMember>,
    #[serde(rename = "2023Leads", default)]
    pub leads_2023: Vec<TeamMember>,
    #[serde(rename = "2022Leads", default)]
    pub leads_2022: Vec<TeamMember>,
}

impl TeamDataset {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn members(&self, era: Era) -> &[TeamMember] {
        match era {
            Era::Current => &self.current,
            Era::Leads2024To2025 => &self.leads_2024_2025,
            Era::Leads2023 => &self.leads_2023,
            Era::Leads2022 => &self.leads_2022,
        }
    }

    pub fn total_members(&self) -> usize {
        Era::ALL.iter().map(|era| self.members(*era).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_members() == 0
    }
}
