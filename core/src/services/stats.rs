// core/src/services/stats.rs

use serde::Serialize;

use crate::model::ShareItem;

/// Formats kilograms the way the dashboards show them: one decimal place.
pub fn format_kg(kg: f64) -> String {
  format!("{kg:.1}")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
  pub total_items: usize,
  pub total_shares: u64,
  pub co2_saved: String,
}

impl GlobalStats {
  pub fn from_items(items: &[ShareItem], co2_per_share_kg: f64) -> Self {
    let total_shares = total_lendings(items);
    Self {
      total_items: items.len(),
      total_shares,
      co2_saved: format_kg(total_shares as f64 * co2_per_share_kg),
    }
  }
}

/// An owner's contribution, as shown on their profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Impact {
  pub co2_saved: String,
  pub lending_revenue: u64,
  pub items_listed: usize,
  /// Items that have been lent often enough to need a fresh photo.
  pub photo_updates_due: Vec<String>,
}

impl Impact {
  pub fn from_items(items: &[ShareItem], co2_per_share_kg: f64) -> Self {
    Self {
      co2_saved: format_kg(total_lendings(items) as f64 * co2_per_share_kg),
      lending_revenue: items
        .iter()
        .map(ShareItem::lending_revenue)
        .fold(0, u64::saturating_add),
      items_listed: items.len(),
      photo_updates_due: items
        .iter()
        .filter(|i| i.photo_update_required())
        .map(|i| i.id.clone())
        .collect(),
    }
  }
}

fn total_lendings(items: &[ShareItem]) -> u64 {
  items
    .iter()
    .map(|i| u64::from(i.lending_count))
    .fold(0, u64::saturating_add)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::settings::CO2_PER_SHARE_KG;
  use crate::store::Record;

  #[test]
  fn global_stats_over_seed_items() {
    let stats = GlobalStats::from_items(&ShareItem::seed(), CO2_PER_SHARE_KG);
    assert_eq!(stats.total_items, 3);
    assert_eq!(stats.total_shares, 85);
    assert_eq!(stats.co2_saved, "357.0");
  }

  #[test]
  fn empty_catalog_is_all_zero() {
    let stats = GlobalStats::from_items(&[], CO2_PER_SHARE_KG);
    assert_eq!(stats.total_shares, 0);
    assert_eq!(stats.co2_saved, "0.0");
  }

  #[test]
  fn impact_sums_revenue_and_flags_photos() {
    let mut items = ShareItem::seed();
    items[2].lending_count = 4;
    let impact = Impact::from_items(&items, CO2_PER_SHARE_KG);
    // 15*150 + 42*300 + 4*500
    assert_eq!(impact.lending_revenue, 2250 + 12600 + 2000);
    assert_eq!(impact.co2_saved, "256.2");
    assert_eq!(impact.photo_updates_due, vec!["1".to_string(), "2".to_string()]);
  }

  #[test]
  fn impact_saturates_instead_of_overflowing() {
    let mut items = ShareItem::seed();
    for item in &mut items {
      item.price_per_day = u64::MAX / 2;
    }
    let impact = Impact::from_items(&items, CO2_PER_SHARE_KG);
    assert_eq!(impact.lending_revenue, u64::MAX);
    assert_eq!(impact.items_listed, 3);
  }
}
