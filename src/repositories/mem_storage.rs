// src/repositories/mem_storage.rs - in-memory user/post storage

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{SecondsFormat, Utc};

use crate::models::post::{NewPost, Post};
use crate::models::user::{NewUser, User};

/// Process-local storage behind one mutex. Cloning the handle shares the
/// same data, so every actix worker sees the same users and posts.
/// Nothing survives a restart.
#[derive(Clone)]
pub struct MemStorage {
    inner: Arc<Mutex<StoreInner>>,
}

struct StoreInner {
    users: BTreeMap<i32, User>,
    posts: BTreeMap<i32, Post>,
    next_user_id: i32,
    next_post_id: i32,
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl MemStorage {
    /// Creates a store seeded with one default user, so the app is usable
    /// before any real signup happens.
    pub fn new() -> Self {
        let mut users = BTreeMap::new();
        users.insert(
            1,
            User {
                id: 1,
                firebase_uid: "default-user".to_string(),
                email: "user@example.com".to_string(),
                display_name: Some("Test User".to_string()),
                created_at: now_timestamp(),
            },
        );

        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                users,
                posts: BTreeMap::new(),
                next_user_id: 2,
                next_post_id: 1,
            })),
        }
    }

    fn inner(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().expect("store mutex poisoned")
    }

    pub fn get_user(&self, id: i32) -> Option<User> {
        self.inner().users.get(&id).cloned()
    }

    pub fn get_user_by_firebase_uid(&self, firebase_uid: &str) -> Option<User> {
        self.inner()
            .users
            .values()
            .find(|user| user.firebase_uid == firebase_uid)
            .cloned()
    }

    pub fn create_user(&self, new_user: NewUser) -> User {
        let mut inner = self.inner();
        let id = inner.next_user_id;
        inner.next_user_id += 1;

        let user = User {
            id,
            firebase_uid: new_user.firebase_uid,
            email: new_user.email,
            display_name: new_user.display_name,
            created_at: now_timestamp(),
        };
        inner.users.insert(id, user.clone());
        user
    }

    /// All posts for a user, newest first. Timestamps are RFC 3339 UTC, so
    /// string comparison orders them chronologically; equal timestamps keep
    /// insertion order.
    pub fn get_user_posts(&self, user_id: i32) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .inner()
            .posts
            .values()
            .filter(|post| post.user_id == user_id)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    pub fn get_post(&self, id: i32) -> Option<Post> {
        self.inner().posts.get(&id).cloned()
    }

    pub fn create_post(&self, new_post: NewPost) -> Post {
        let mut inner = self.inner();
        let id = inner.next_post_id;
        inner.next_post_id += 1;

        let post = Post {
            id,
            user_id: new_post.user_id,
            content: new_post.content,
            platform: new_post.platform,
            tone: new_post.tone,
            idea: new_post.idea,
            has_emojis: new_post.has_emojis,
            has_hashtags: new_post.has_hashtags,
            has_suggested_images: new_post.has_suggested_images,
            created_at: now_timestamp(),
        };
        inner.posts.insert(id, post.clone());
        post
    }

    /// Removes the post if present; deleting an unknown id is a no-op.
    pub fn delete_post(&self, id: i32) {
        self.inner().posts.remove(&id);
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}
