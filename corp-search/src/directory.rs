use std::path::Path;

use corp_search_api_types::CorporationSummary;
use sublime_fuzzy::{FuzzySearch, Scoring};

const BUILTIN_DIRECTORY: &str = include_str!("../data/corporations.json");
const MAX_RESULTS: usize = 25;

fn fuzzy_score(query: &str, target: &str) -> Option<isize> {
    let scoring = Scoring::default();
    FuzzySearch::new(query, target)
        .case_insensitive()
        .score_with(&scoring)
        .best_match()
        .map(|m| m.score())
}

/// Corporations the host can answer searches for.
#[derive(Debug, Clone, Default)]
pub struct CorporationDirectory {
    corporations: Vec<CorporationSummary>,
}

impl CorporationDirectory {
    pub fn new(corporations: Vec<CorporationSummary>) -> Self {
        Self { corporations }
    }

    pub fn builtin() -> anyhow::Result<Self> {
        Ok(Self::new(serde_json::from_str(BUILTIN_DIRECTORY)?))
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::new(serde_json::from_str(&json)?))
    }

    pub fn len(&self) -> usize {
        self.corporations.len()
    }

    pub fn get(&self, id: i32) -> Option<&CorporationSummary> {
        self.corporations.iter().find(|c| c.id == id)
    }

    /// Fuzzy matches the query against names and tickers, best match first.
    pub fn search(&self, query: &str) -> Vec<CorporationSummary> {
        let mut matches: Vec<_> = self
            .corporations
            .iter()
            .filter_map(|corporation| {
                let score = fuzzy_score(query, &corporation.name)
                    .into_iter()
                    .chain(fuzzy_score(query, &corporation.ticker))
                    .max()?;
                Some((score, corporation))
            })
            .collect();
        // stable, so equal scores keep directory order
        matches.sort_by(|(a, _), (b, _)| b.cmp(a));
        matches
            .into_iter()
            .take(MAX_RESULTS)
            .map(|(_, corporation)| corporation.clone())
            .collect()
    }
}
