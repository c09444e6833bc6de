/// One of the four year buckets the team page can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Era {
    #[default]
    Current,
    Leads2024To2025,
    Leads2023,
    Leads2022,
}

impl Era {
    /// Timeline order, newest first.
    pub const ALL: [Era; 4] = [
        Era::Current,
        Era::Leads2024To2025,
        Era::Leads2023,
        Era::Leads2022,
    ];

    /// Year marker used by the timeline.
    pub fn year(self) -> u16 {
        match self {
            Self::Current => 2026,
            Self::Leads2024To2025 => 2025,
            Self::Leads2023 => 2023,
            Self::Leads2022 => 2022,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Current => "Current",
            Self::Leads2024To2025 => "2024-2025",
            Self::Leads2023 => "2023",
            Self::Leads2022 => "2022",
        }
    }

    /// Top-level key in the dataset document; also namespaces card keys.
    pub fn dataset_key(self) -> &'static str {
        match self {
            Self::Current => "currentLeads",
            Self::Leads2024To2025 => "2024-2025Leads",
            Self::Leads2023 => "2023Leads",
            Self::Leads2022 => "2022Leads",
        }
    }

    /// Position on the timeline.
    pub fn index(self) -> usize {
        match self {
            Self::Current => 0,
            Self::Leads2024To2025 => 1,
            Self::Leads2023 => 2,
            Self::Leads2022 => 3,
        }
    }
}
