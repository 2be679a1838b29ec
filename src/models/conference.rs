#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    AiVision,
    Security,
    Network,
    Data,
}

impl Category {
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::AiVision => "AI/Vision",
            Category::Security => "Security",
            Category::Network => "Network",
            Category::Data => "Data",
        }
    }

    // Order used for category headers in the full digest.
    pub fn ordered() -> [Category; 4] {
        [
            Category::AiVision,
            Category::Security,
            Category::Network,
            Category::Data,
        ]
    }
}

#[derive(Debug, Clone)]
pub struct ConferenceSpec {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub is_target: bool,
}

impl ConferenceSpec {
    fn new(id: &str, name: &str, category: Category, is_target: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            is_target,
        }
    }
}

/// The compiled-in conference roster. Targets are the conferences shown in the
/// focused even-day digest.
pub fn tracked_conferences() -> Vec<ConferenceSpec> {
    vec![
        ConferenceSpec::new("cvpr", "CVPR", Category::AiVision, true),
        ConferenceSpec::new("eccv", "ECCV", Category::AiVision, false),
        ConferenceSpec::new("iccv", "ICCV", Category::AiVision, false),
        ConferenceSpec::new("aaai", "AAAI", Category::AiVision, false),
        ConferenceSpec::new("icml", "ICML", Category::AiVision, true),
        ConferenceSpec::new("iclr", "ICLR", Category::AiVision, true),
        ConferenceSpec::new("neurips", "NeurIPS", Category::AiVision, true),
        ConferenceSpec::new("sp", "IEEE S&P", Category::Security, true),
        ConferenceSpec::new("ccs", "CCS", Category::Security, true),
        ConferenceSpec::new("usenix-sec", "USENIX Security", Category::Security, true),
        ConferenceSpec::new("ndss", "NDSS", Category::Security, false),
        ConferenceSpec::new("eurocrypt", "Eurocrypt", Category::Security, false),
        ConferenceSpec::new("esorics", "ESORICS", Category::Security, false),
        ConferenceSpec::new("dsn", "DSN", Category::Security, false),
        ConferenceSpec::new("blackhat", "Black Hat", Category::Security, false),
        ConferenceSpec::new("sigmetrics", "SIGMETRICS", Category::Network, false),
        ConferenceSpec::new("infocom", "INFOCOM", Category::Network, false),
        ConferenceSpec::new("sigcomm", "SIGCOMM", Category::Network, true),
        ConferenceSpec::new("icdm", "ICDM", Category::Data, false),
        ConferenceSpec::new("bigdata", "IEEE BigData", Category::Data, false),
    ]
}
