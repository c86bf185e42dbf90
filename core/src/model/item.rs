// core/src/model/item.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HubError;
use crate::store::Record;

/// Lending count from which an item's listing photo is flagged for a refresh.
pub const PHOTO_REFRESH_LENDINGS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
  #[serde(rename = "Home and Appliances")]
  HomeAndAppliances,
  #[serde(rename = "Tools and Equipment")]
  ToolsAndEquipment,
  #[serde(rename = "Event and Party Supplies")]
  EventAndPartySupplies,
  #[serde(rename = "Electronics and Gadgets")]
  ElectronicsAndGadgets,
  #[serde(rename = "Sports Tools")]
  SportsTools,
  #[serde(rename = "Stationery")]
  Stationery,
}

impl Category {
  pub const ALL: [Category; 6] = [
    Category::HomeAndAppliances,
    Category::ToolsAndEquipment,
    Category::EventAndPartySupplies,
    Category::ElectronicsAndGadgets,
    Category::SportsTools,
    Category::Stationery,
  ];

  pub fn label(self) -> &'static str {
    match self {
      Category::HomeAndAppliances => "Home and Appliances",
      Category::ToolsAndEquipment => "Tools and Equipment",
      Category::EventAndPartySupplies => "Event and Party Supplies",
      Category::ElectronicsAndGadgets => "Electronics and Gadgets",
      Category::SportsTools => "Sports Tools",
      Category::Stationery => "Stationery",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for Category {
  type Err = HubError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .iter()
      .copied()
      .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| HubError::Validation(format!("Unknown category '{s}'")))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
  #[default]
  Available,
  Rented,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareItem {
  pub id: String,
  pub name: String,
  pub description: String,
  pub category: Category,
  pub owner_id: String,
  pub owner_name: String,
  /// Free text such as `0.4 km`; never geocoded.
  pub distance: String,
  pub price_per_day: u64,
  pub image_url: String,
  pub status: ItemStatus,
  #[serde(default)]
  pub lending_count: u32,
}

impl ShareItem {
  pub fn is_available(&self) -> bool {
    self.status == ItemStatus::Available
  }

  pub fn photo_update_required(&self) -> bool {
    self.lending_count >= PHOTO_REFRESH_LENDINGS
  }

  /// Revenue this listing has earned so far, at its current daily price.
  /// Saturates at `u64::MAX`.
  pub fn lending_revenue(&self) -> u64 {
    u64::from(self.lending_count).saturating_mul(self.price_per_day)
  }
}

impl Record for ShareItem {
  const COLLECTION: &'static str = crate::store::ITEMS_KEY;

  fn key(&self) -> &str {
    &self.id
  }

  fn seed() -> Vec<Self> {
    let mock = |id: &str, name: &str, description: &str, category, owner: (&str, &str), distance: &str, price, image: &str, lendings| ShareItem {
      id: id.to_string(),
      name: name.to_string(),
      description: description.to_string(),
      category,
      owner_id: owner.0.to_string(),
      owner_name: owner.1.to_string(),
      distance: distance.to_string(),
      price_per_day: price,
      image_url: format!("https://picsum.photos/seed/{image}/400/300"),
      status: ItemStatus::Available,
      lending_count: lendings,
    };
    vec![
      mock(
        "1",
        "Drill Machine",
        "Heavy duty Bosch drill for home construction.",
        Category::ToolsAndEquipment,
        ("u1", "Rahul Sharma"),
        "0.4 km",
        150,
        "drill",
        15,
      ),
      mock(
        "2",
        "Microwave Oven",
        "Compact microwave, perfect for quick heating.",
        Category::HomeAndAppliances,
        ("u2", "Priya Verma"),
        "0.8 km",
        300,
        "oven",
        42,
      ),
      mock(
        "3",
        "Projector",
        "Full HD 1080p projector for outdoor movie nights.",
        Category::ElectronicsAndGadgets,
        ("u3", "Amit Singh"),
        "0.2 km",
        500,
        "projector",
        28,
      ),
    ]
  }
}

/// Fields an owner supplies when listing a new item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
  pub name: String,
  #[serde(default)]
  pub description: String,
  pub category: Category,
  pub price_per_day: u64,
  #[serde(default)]
  pub image_url: Option<String>,
}
