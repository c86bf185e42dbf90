// core/src/services/community.rs

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::error::{HubError, HubResult};
use crate::model::{new_id, CommunityPost};

/// Author name shown on posts published from this session.
pub const SELF_AUTHOR: &str = "You";

/// The community feed, newest post first. Kept in process memory only.
#[derive(Debug, Clone)]
pub struct CommunityFeed {
  posts: Arc<RwLock<Vec<CommunityPost>>>,
}

impl Default for CommunityFeed {
  fn default() -> Self {
    Self {
      posts: Arc::new(RwLock::new(CommunityPost::seed())),
    }
  }
}

impl CommunityFeed {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn posts(&self) -> Vec<CommunityPost> {
    self.posts.read().clone()
  }

  /// Prepends a new post. Blank content is rejected.
  #[instrument(name = "CommunityFeed::publish", skip(self, content), err(Display))]
  pub fn publish(&self, user_name: Option<&str>, content: &str, badge: Option<&str>) -> HubResult<CommunityPost> {
    let content = content.trim();
    if content.is_empty() {
      return Err(HubError::Validation("Post content cannot be empty.".to_string()));
    }
    let post = CommunityPost {
      id: new_id(),
      user_name: user_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(SELF_AUTHOR)
        .to_string(),
      content: content.to_string(),
      image_url: None,
      likes: 0,
      badge_dedicated: badge.map(str::to_string),
      timestamp: "Just now".to_string(),
    };
    self.posts.write().insert(0, post.clone());
    debug!(post_id = %post.id, "Post published.");
    Ok(post)
  }

  pub fn like(&self, post_id: &str) -> HubResult<CommunityPost> {
    let mut posts = self.posts.write();
    let post = posts
      .iter_mut()
      .find(|p| p.id == post_id)
      .ok_or_else(|| HubError::NotFound(format!("Post '{post_id}'")))?;
    post.likes += 1;
    Ok(post.clone())
  }
}
