//! Static pricing catalog.

use crate::notify::{Notice, Notifier};
use once_cell::sync::Lazy;
use serde::Serialize;

/// Tier highlighted before the user picks one.
pub const DEFAULT_TIER: &str = "pro";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: Vec<&'static str>,
    pub limitations: Vec<&'static str>,
    pub button_text: &'static str,
    pub popular: bool,
}

impl Tier {
    /// Lowercase key used to select the tier.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

static TIERS: Lazy<Vec<Tier>> = Lazy::new(|| {
    vec![
        Tier {
            name: "Free",
            price: "$0",
            period: "forever",
            description: "Perfect for getting started",
            features: vec![
                "1 Directory",
                "Up to 50 items",
                "Basic customization",
                "Community support",
                "Standard templates",
            ],
            limitations: vec![
                "No advanced analytics",
                "Limited integrations",
                "No priority support",
            ],
            button_text: "Get Started Free",
            popular: false,
        },
        Tier {
            name: "Pro",
            price: "$29",
            period: "per month",
            description: "Best for growing businesses",
            features: vec![
                "5 Directories",
                "Up to 500 items per directory",
                "Advanced customization",
                "Priority support",
                "Custom branding",
                "Advanced analytics",
                "API access",
                "Custom fields",
            ],
            limitations: vec![],
            button_text: "Start Pro Trial",
            popular: true,
        },
        Tier {
            name: "Business",
            price: "$99",
            period: "per month",
            description: "For large organizations",
            features: vec![
                "Unlimited directories",
                "Unlimited items",
                "White-label solution",
                "Dedicated support",
                "Custom integrations",
                "Advanced SEO tools",
                "Team collaboration",
                "Enterprise security",
            ],
            limitations: vec![],
            button_text: "Contact Sales",
            popular: false,
        },
    ]
});

pub fn tiers() -> &'static [Tier] {
    &TIERS
}

/// Case-insensitive lookup by tier name.
pub fn find_tier(name: &str) -> Option<&'static Tier> {
    let name = name.trim();
    tiers().iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Pick a tier and tell the user about it.
pub fn select_tier<N: Notifier + ?Sized>(notifier: &N, name: &str) -> Option<&'static Tier> {
    let tier = find_tier(name);
    match tier {
        Some(tier) => notifier.notify(Notice::success(format!("Selected {} plan!", tier.name))),
        None => notifier.notify(Notice::warning(format!("No plan named '{}'", name.trim()))),
    }
    tier
}
