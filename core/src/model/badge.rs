// core/src/model/badge.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeName {
  #[serde(rename = "Helpful Neighbour")]
  HelpfulNeighbour,
  #[serde(rename = "Best Lender")]
  BestLender,
  #[serde(rename = "Zero Waste Hero")]
  ZeroWasteHero,
}

impl BadgeName {
  pub fn label(self) -> &'static str {
    match self {
      BadgeName::HelpfulNeighbour => "Helpful Neighbour",
      BadgeName::BestLender => "Best Lender",
      BadgeName::ZeroWasteHero => "Zero Waste Hero",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
  pub id: String,
  pub name: BadgeName,
  pub icon: String,
  pub description: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub count: Option<u32>,
}

pub struct BadgeDef {
  pub id: &'static str,
  pub name: BadgeName,
  pub icon: &'static str,
  pub description: &'static str,
}

pub const BADGES: [BadgeDef; 3] = [
  BadgeDef {
    id: "b1",
    name: BadgeName::HelpfulNeighbour,
    icon: "🤝",
    description: "Always ready to help those nearby.",
  },
  BadgeDef {
    id: "b2",
    name: BadgeName::BestLender,
    icon: "🌟",
    description: "Provides high-quality items and service.",
  },
  BadgeDef {
    id: "b3",
    name: BadgeName::ZeroWasteHero,
    icon: "♻️",
    description: "Saving the planet through shared resources.",
  },
];

impl From<&BadgeDef> for Badge {
  fn from(def: &BadgeDef) -> Self {
    Badge {
      id: def.id.to_string(),
      name: def.name,
      icon: def.icon.to_string(),
      description: def.description.to_string(),
      count: None,
    }
  }
}

/// The badge catalogue as owned values.
pub fn all_badges() -> Vec<Badge> {
  BADGES.iter().map(Badge::from).collect()
}
