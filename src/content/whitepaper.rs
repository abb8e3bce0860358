//! The whitepaper shown in the modal.
//!
//! egui renders widgets rather than markup, so modal bodies are a short list of
//! typed blocks instead of an HTML string.

pub const WHITEPAPER_TITLE: &str = "Our Totally Legitimate Whitepaper";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Title(&'static str),
    Heading(&'static str),
    Paragraph(&'static str),
    /// Rendered in italics
    Emphasis(&'static str),
    Bullets(Vec<&'static str>),
    Numbered(Vec<&'static str>),
}

/// Body of a modal dialog, rendered block by block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent(pub Vec<ContentBlock>);

impl ModalContent {
    pub fn blocks(&self) -> &[ContentBlock] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn generate_mock_whitepaper() -> ModalContent {
    use ContentBlock::*;

    ModalContent(vec![
        Title("Example Coin: A Revolutionary Approach to Being Unoriginal"),
        Heading("Abstract"),
        Paragraph(
            "This whitepaper outlines our groundbreaking strategy of doing exactly what \
             everyone else has done, but with more honesty about it.",
        ),
        Heading("Technology Stack"),
        Bullets(vec![
            "Blockchain: The one everyone else uses",
            "Smart Contracts: Copy-pasted from Stack Overflow",
            "Consensus Mechanism: Democracy (whoever shouts loudest)",
        ]),
        Heading("Tokenomics (The Numbers We Made Up)"),
        Paragraph(
            "Our token distribution follows the time-tested formula of \"whatever seems \
             reasonable\" with a dash of \"numbers that add up to 100%\".",
        ),
        Heading("Roadmap to Success"),
        Numbered(vec![
            "Phase 1: Create website ✅",
            "Phase 2: ???",
            "Phase 3: Profit",
        ]),
        Heading("Risk Disclosure"),
        Emphasis(
            "All investments carry risk. Our investments carry extra risk because we're \
             making this up as we go. Past performance does not indicate future results, \
             mostly because we don't have past performance.",
        ),
        Heading("Team Credentials"),
        Paragraph(
            "Our team has a combined total of 47 minutes of blockchain experience and \
             unlimited enthusiasm for financial freedom (ours, not necessarily yours).",
        ),
    ])
}
