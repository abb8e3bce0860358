use eframe::egui::{Key, Rect};

use crate::domain::CloseReason;

/// Everything the rendered page can report back to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    BuyClicked { anchor: Rect },
    WhitepaperClicked,
    /// `index` is the member's position on the page
    TeamMemberClicked { index: usize, anchor: Rect },
    /// `label` is the visible link text
    SocialLinkClicked { label: String, anchor: Rect },
    RoadmapItemClicked { anchor: Rect },
    /// `page` is the whole page rect, used to anchor easter egg messages
    KeyPressed { key: Key, page: Rect },
    VisibilityChanged { visible: bool },
    ModalClosed(CloseReason),
}
