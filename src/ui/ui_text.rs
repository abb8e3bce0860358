//! Visible page copy. Everything the page says outside tooltips and modals.

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

pub struct RoadmapItem {
    pub phase: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub struct UiText {
    pub window_title: &'static str,
    pub coin_name: &'static str,
    pub ticker: &'static str,
    pub tagline: &'static str,
    pub moon_phase_label: &'static str,
    pub buy_button: &'static str,
    pub whitepaper_button: &'static str,

    pub tokenomics_heading: &'static str,
    pub tokenomics_blurb: &'static str,

    pub team_heading: &'static str,
    pub team_hint: &'static str,
    pub team_members: &'static [TeamMember],

    pub roadmap_heading: &'static str,
    pub roadmap_hint: &'static str,
    pub roadmap: &'static [RoadmapItem],

    pub social_heading: &'static str,
    pub footer_disclaimer: &'static str,

    pub modal_close_label: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "Example Coin - Definitely Not Financial Advice",
    coin_name: "Example Coin",
    ticker: "$EXMPL",
    tagline: "The cryptocurrency that's honest about being completely pointless.",
    moon_phase_label: "Current moon phase",
    buy_button: "Buy $EXMPL Now",
    whitepaper_button: "Read Whitepaper",

    tokenomics_heading: "Tokenomics",
    tokenomics_blurb: "A carefully engineered distribution that we drew on a napkin.",

    team_heading: "Meet the Team",
    team_hint: "Click a team member to learn their deepest secrets.",
    team_members: &[
        TeamMember {
            name: "CryptoKing_420",
            role: "Founder & Chief Visionary",
            avatar: "🧑‍💼",
        },
        TeamMember {
            name: "Dr. Whiskers",
            role: "Head of Blockchain Research",
            avatar: "🐱",
        },
        TeamMember {
            name: "Chad Moonington",
            role: "Lead Developer",
            avatar: "🧑‍💻",
        },
    ],

    roadmap_heading: "Roadmap",
    roadmap_hint: "Click a milestone for a totally accurate status update.",
    roadmap: &[
        RoadmapItem {
            phase: "Q1",
            title: "Launch Website",
            detail: "Make a website with a pie chart.",
        },
        RoadmapItem {
            phase: "Q2",
            title: "Build Community",
            detail: "Convince our friends to join the Discord.",
        },
        RoadmapItem {
            phase: "Q3",
            title: "Exchange Listings",
            detail: "Email every exchange. Wait.",
        },
        RoadmapItem {
            phase: "Q4",
            title: "Moon",
            detail: "Self-explanatory.",
        },
    ],

    social_heading: "Join the Community",
    footer_disclaimer: "Example Coin is a joke. Please do not send us money. \
                        Nothing on this page is financial advice.",

    modal_close_label: "Close modal",
};
