const DEFAULT_HEADLINES: [&str; 3] = [
    "Eat more vegetables for better heart health.",
    "Regular exercise reduces risk of diabetes.",
    "Mental health is as important as physical health.",
];

/// Read-only list of health tips served at `/news/`.
#[derive(Debug, Clone)]
pub struct NewsFeed {
    items: Vec<String>,
}

impl Default for NewsFeed {
    fn default() -> Self {
        Self {
            items: DEFAULT_HEADLINES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl NewsFeed {
    pub fn list(&self) -> &[String] {
        &self.items
    }
}
