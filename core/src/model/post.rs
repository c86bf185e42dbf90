// core/src/model/post.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
  pub id: String,
  pub user_name: String,
  pub content: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image_url: Option<String>,
  pub likes: u32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub badge_dedicated: Option<String>,
  /// Human-readable age, e.g. `2 hours ago`.
  pub timestamp: String,
}

impl CommunityPost {
  pub(crate) fn seed() -> Vec<Self> {
    vec![CommunityPost {
      id: "p1".to_string(),
      user_name: "Karan Mehra".to_string(),
      content: "Just borrowed a lawn mower from Sarah. Saved me 2000 rupees and a trip to the store! This hub is amazing. #Sustainability".to_string(),
      image_url: None,
      likes: 24,
      badge_dedicated: Some("Helpful Neighbour".to_string()),
      timestamp: "2 hours ago".to_string(),
    }]
  }
}
