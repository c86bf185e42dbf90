// core/src/services/catalog.rs

use tracing::{info, instrument};

use crate::error::{HubError, HubResult};
use crate::model::{new_id, Category, ItemStatus, NewItem, ShareItem, User};
use crate::store::Store;

/// Distance shown for items listed by the signed-in member themselves.
pub const OWN_LISTING_DISTANCE: &str = "0.1 km";

/// Highest daily price a new listing may ask for.
pub const MAX_PRICE_PER_DAY: u64 = 1_000_000;

pub fn default_image_url(seed: &str) -> String {
  format!("https://picsum.photos/seed/{seed}/400/300")
}

/// The lending library: every listed item.
#[derive(Debug, Clone)]
pub struct Catalog {
  store: Store,
}

impl Catalog {
  pub fn new(store: Store) -> Self {
    Self { store }
  }

  pub fn all(&self) -> HubResult<Vec<ShareItem>> {
    self.store.all()
  }

  pub fn get(&self, item_id: &str) -> HubResult<ShareItem> {
    self
      .store
      .find::<ShareItem>(item_id)?
      .ok_or_else(|| HubError::NotFound(format!("Item '{item_id}'")))
  }

  pub fn by_category(&self, category: Category) -> HubResult<Vec<ShareItem>> {
    Ok(self.all()?.into_iter().filter(|i| i.category == category).collect())
  }

  pub fn for_owner(&self, owner_id: &str) -> HubResult<Vec<ShareItem>> {
    Ok(self.all()?.into_iter().filter(|i| i.owner_id == owner_id).collect())
  }

  /// Lists a new item for `owner`.
  #[instrument(name = "Catalog::list_item", skip_all, fields(owner_id = %owner.id, name = %new_item.name), err(Display))]
  pub fn list_item(&self, owner: &User, new_item: NewItem) -> HubResult<ShareItem> {
    if new_item.name.trim().is_empty() {
      return Err(HubError::Validation("Item name is required.".to_string()));
    }
    if new_item.price_per_day == 0 {
      return Err(HubError::Validation("Price per day must be greater than zero.".to_string()));
    }
    if new_item.price_per_day > MAX_PRICE_PER_DAY {
      return Err(HubError::Validation(format!(
        "Price per day cannot exceed {MAX_PRICE_PER_DAY}."
      )));
    }

    let id = new_id();
    let image_url = match new_item.image_url {
      Some(url) if !url.trim().is_empty() => url,
      _ => default_image_url(&id),
    };
    let item = ShareItem {
      id,
      name: new_item.name.trim().to_string(),
      description: new_item.description,
      category: new_item.category,
      owner_id: owner.id.clone(),
      owner_name: owner.name.clone(),
      distance: OWN_LISTING_DISTANCE.to_string(),
      price_per_day: new_item.price_per_day,
      image_url,
      status: ItemStatus::Available,
      lending_count: 0,
    };
    self.store.upsert(&item)?;
    info!(item_id = %item.id, "Item listed.");
    Ok(item)
  }

  pub fn save(&self, item: &ShareItem) -> HubResult<()> {
    self.store.upsert(item)
  }

  /// Removes an item. Orders that reference it are left as they are.
  #[instrument(name = "Catalog::delete", skip(self), err(Display))]
  pub fn delete(&self, item_id: &str) -> HubResult<usize> {
    let removed = self.store.delete::<ShareItem>(item_id)?;
    info!(removed, "Item delete processed.");
    Ok(removed)
  }

  pub fn set_status(&self, item_id: &str, status: ItemStatus) -> HubResult<ShareItem> {
    self.store.update::<ShareItem, _>(|items| {
      let item = items
        .iter_mut()
        .find(|i| i.id == item_id)
        .ok_or_else(|| HubError::NotFound(format!("Item '{item_id}'")))?;
      item.status = status;
      Ok(item.clone())
    })
  }

  /// Marks an available item rented, checking and writing under one store lock.
  /// Only one of several concurrent claims on the same item succeeds.
  #[instrument(name = "Catalog::claim", skip(self), err(Display))]
  pub fn claim(&self, item_id: &str) -> HubResult<ShareItem> {
    self.store.update::<ShareItem, _>(|items| {
      let item = items
        .iter_mut()
        .find(|i| i.id == item_id)
        .ok_or_else(|| HubError::NotFound(format!("Item '{item_id}'")))?;
      if !item.is_available() {
        return Err(HubError::Validation(format!("'{}' is not available for booking.", item.name)));
      }
      item.status = ItemStatus::Rented;
      Ok(item.clone())
    })
  }

  /// Undoes a `claim` whose booking did not complete.
  pub fn release(&self, item_id: &str) -> HubResult<ShareItem> {
    self.set_status(item_id, ItemStatus::Available)
  }
}
