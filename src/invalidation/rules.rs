//! Dependency table: which cached views go stale when a resource changes.

use std::fmt;
use std::str::FromStr;

use MatchRule::{Exact, Prefix};

// == Match Rule ==
/// How a dependency rule selects cache keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Exactly one key
    Exact(&'static str),
    /// Every key starting with the prefix
    Prefix(&'static str),
}

impl MatchRule {
    pub fn matches(&self, key: &str) -> bool {
        match self {
            MatchRule::Exact(exact) => key == *exact,
            MatchRule::Prefix(prefix) => key.starts_with(*prefix),
        }
    }
}

// == Resource Type ==
/// Logical resource groups known to the invalidation router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Products,
    MyProducts,
    Auctions,
    AuctionProducts,
    Conversations,
    Messages,
    Reviews,
    Articles,
    Countries,
    Governorates,
    ActivityTypes,
    Categories,
}

impl ResourceType {
    pub const ALL: [ResourceType; 12] = [
        ResourceType::Products,
        ResourceType::MyProducts,
        ResourceType::Auctions,
        ResourceType::AuctionProducts,
        ResourceType::Conversations,
        ResourceType::Messages,
        ResourceType::Reviews,
        ResourceType::Articles,
        ResourceType::Countries,
        ResourceType::Governorates,
        ResourceType::ActivityTypes,
        ResourceType::Categories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Products => "products",
            ResourceType::MyProducts => "my_products",
            ResourceType::Auctions => "auctions",
            ResourceType::AuctionProducts => "auction_products",
            ResourceType::Conversations => "conversations",
            ResourceType::Messages => "messages",
            ResourceType::Reviews => "reviews",
            ResourceType::Articles => "articles",
            ResourceType::Countries => "countries",
            ResourceType::Governorates => "governorates",
            ResourceType::ActivityTypes => "activity_types",
            ResourceType::Categories => "categories",
        }
    }

    /// Cache keys that become stale when this resource is written.
    pub fn rules(&self) -> &'static [MatchRule] {
        match self {
            ResourceType::Products => &[
                Exact("products"),
                Exact("my_products"),
                Exact("categories"),
            ],
            ResourceType::MyProducts => &[Exact("my_products"), Exact("products")],
            ResourceType::Auctions => &[
                Exact("auctions"),
                Prefix("auction_products_"),
                Prefix("my_auction_products_"),
                Prefix("prev_auction_products_"),
            ],
            ResourceType::AuctionProducts => &[
                Prefix("auction_products_"),
                Prefix("my_auction_products_"),
            ],
            ResourceType::Conversations => &[Prefix("conversations_")],
            // Message writes change conversation previews and unread counts
            ResourceType::Messages => &[Prefix("conversations_")],
            ResourceType::Reviews => &[Prefix("top_sellers_")],
            ResourceType::Articles => &[Prefix("articles_"), Prefix("article_")],
            ResourceType::Countries => &[Exact("countries")],
            ResourceType::Governorates => &[Prefix("governorates_")],
            ResourceType::ActivityTypes => &[Exact("activity_types")],
            ResourceType::Categories => &[Exact("categories")],
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .iter()
            .copied()
            .find(|rt| rt.as_str() == s)
            .ok_or_else(|| format!("Unknown resource type: {}", s))
    }
}
