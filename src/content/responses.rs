//! Fixed joke strings routed to tooltips and the console.

use strum_macros::{AsRefStr, Display, EnumIter};

pub const BUY_RESPONSES: &[&str] = &[
    "Hold on, let me check if we actually have a token yet... 🤔",
    "Error 404: Financial responsibility not found",
    "Are you sure? Like, really sure? This is your money we're talking about.",
    "Redirecting to our definitely-not-suspicious exchange partner...",
    "Warning: May cause sudden urge to post rocket emojis on social media",
    "Token purchase failed successfully! Please try again never.",
    "Connecting to MetaMask... Just kidding, we don't have integration yet.",
    "HODL achieved! (You're now holding nothing, but with confidence!)",
];

/// Indexed by team member position on the page
pub const TEAM_SECRETS: &[&str] = &[
    "Real name: Kyle from Ohio. Favorite food: Ramen noodles.",
    "Actually a collective of 3 cats in a trench coat.",
    "Credentials: Watched a 30-minute YouTube video about blockchain.",
];

pub const TEAM_SECRET_FALLBACK: &str = "Error: Backstory not found";

pub const ROADMAP_STATUSES: &[&str] = &[
    "Status: ✅ Completed (somehow)",
    "Status: 🚧 In progress (maybe)",
    "Status: 📅 Scheduled (optimistically)",
    "Status: 🌙 Moon dependent",
    "Status: 🤷‍♂️ Probably not happening",
];

pub const CONSOLE_MESSAGES: &[&str] = &[
    "💭 Remember: This is financial advice (it's not)",
    "🎯 Pro tip: Investing in memecoins is basically gambling with extra steps",
    "📈 Current market sentiment: Cautiously delusional",
    "🤔 Did you know? 73% of statistics are made up on the spot",
    "🚀 Moon mission status: Still on the launch pad",
];

pub const STARTUP_MESSAGES: &[&str] = &[
    "🚀 Example Coin website loaded successfully!",
    "📊 Tracking absolutely nothing important...",
    "💰 Wallet connection status: Definitely not implemented",
];

pub const DEBUG_BANNER: &str = r"
 ╔══════════════════════════════════════╗
 ║          EXAMPLE COIN DEBUG          ║
 ║                                      ║
 ║  If you're reading this, you're      ║
 ║  probably more qualified than our    ║
 ║  entire development team.            ║
 ║                                      ║
 ║  Current moon status: Still waiting  ║
 ║  Lambo status: Still dreaming        ║
 ║  Regret level: Moderate to severe    ║
 ╚══════════════════════════════════════╝";

pub const KONAMI_MESSAGE: &str = "🎮 Konami Code activated! Reality.exe has stopped working.";

pub const SOCIAL_FALLBACK: &str = "Link leads to existential void";

/// The social links shown in the footer. The serialized form is the visible
/// label, which is also the lookup key for the tooltip message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum SocialPlatform {
    #[strum(serialize = "Twitter (We Post Daily)")]
    Twitter,
    #[strum(serialize = "Discord (Echo Chamber)")]
    Discord,
    #[strum(serialize = "Telegram (Pump Group)")]
    Telegram,
    #[strum(serialize = "YouTube (No Content Yet)")]
    YouTube,
}

impl SocialPlatform {
    pub fn icon(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "🐦",
            SocialPlatform::Discord => "💬",
            SocialPlatform::Telegram => "✈",
            SocialPlatform::YouTube => "📺",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => {
                "Redirecting to @ExampleCoin... Wait, that handle was taken by someone else."
            }
            SocialPlatform::Discord => {
                "Joining Discord server... Current member count: 3 (including bots)"
            }
            SocialPlatform::Telegram => {
                "Welcome to our Telegram! Please ignore the previous 47 failed projects."
            }
            SocialPlatform::YouTube => {
                "Our YouTube channel is coming soon! (Definition of 'soon' may vary)"
            }
        }
    }
}

/// Looks a message up by the visible link label.
pub fn social_message(label: &str) -> &'static str {
    use strum::IntoEnumIterator;

    SocialPlatform::iter()
        .find(|platform| platform.as_ref() == label)
        .map(|platform| platform.message())
        .unwrap_or(SOCIAL_FALLBACK)
}

pub fn team_secret(index: usize) -> &'static str {
    TEAM_SECRETS
        .get(index)
        .copied()
        .unwrap_or(TEAM_SECRET_FALLBACK)
}
