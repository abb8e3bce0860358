//! Static joke content and its sanity checks.

pub mod responses;
pub mod stats;
pub mod whitepaper;

use std::fmt;

use crate::config::CHART_CONFIG;

pub use responses::{SocialPlatform, social_message, team_secret};
pub use stats::FakeStat;
pub use whitepaper::{ContentBlock, ModalContent, WHITEPAPER_TITLE, generate_mock_whitepaper};

/// Problems with the built-in content tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// A list that handlers pick from is empty
    EmptyList(&'static str),
    /// A fake statistic cannot produce any value
    EmptyRange(&'static str),
    /// Chart slices do not add up to a whole pie
    ChartTotal(u32),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::EmptyList(name) => write!(f, "Content list '{}' is empty", name),
            ContentError::EmptyRange(label) => write!(f, "Stat '{}' has an empty range", label),
            ContentError::ChartTotal(total) => {
                write!(f, "Chart slices add up to {}%, expected 100%", total)
            }
        }
    }
}

impl std::error::Error for ContentError {}

/// Checks every table the page picks from at random.
pub fn validate() -> Result<(), ContentError> {
    let lists: [(&'static str, usize); 5] = [
        ("buy responses", responses::BUY_RESPONSES.len()),
        ("team secrets", responses::TEAM_SECRETS.len()),
        ("roadmap statuses", responses::ROADMAP_STATUSES.len()),
        ("console messages", responses::CONSOLE_MESSAGES.len()),
        ("startup messages", responses::STARTUP_MESSAGES.len()),
    ];
    if let Some((name, _)) = lists.iter().find(|(_, len)| *len == 0) {
        return Err(ContentError::EmptyList(name));
    }

    if generate_mock_whitepaper().is_empty() {
        return Err(ContentError::EmptyList("whitepaper"));
    }

    if let Some(stat) = FakeStat::ALL.iter().find(|s| s.range().is_empty()) {
        return Err(ContentError::EmptyRange(stat.label()));
    }

    validate_chart_total(CHART_CONFIG.slices.iter().map(|s| s.value))
}

fn validate_chart_total(values: impl Iterator<Item = u32>) -> Result<(), ContentError> {
    let total: u32 = values.sum();
    if total != 100 {
        return Err(ContentError::ChartTotal(total));
    }
    Ok(())
}
