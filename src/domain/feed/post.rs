//! Feed entities: posts with threaded comments and replies.
//!
//! # Invariants
//!
//! - comments and replies are append-only and preserve creation order
//! - `like_count` never goes below zero
//! - the viewer can hold at most one like on a post: liking toggles

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CommentId, PostId, ReplyId, Timestamp};

/// A reply nested under a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    id: ReplyId,
    author: String,
    body: String,
    created_at: Timestamp,
}

impl Reply {
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: ReplyId::new(),
            author: author.into(),
            body: body.into(),
            created_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> &ReplyId {
        &self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

/// A comment on a post, with its chronologically ordered replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    author: String,
    body: String,
    created_at: Timestamp,
    replies: Vec<Reply>,
}

impl Comment {
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: CommentId::new(),
            author: author.into(),
            body: body.into(),
            created_at: Timestamp::now(),
            replies: Vec::new(),
        }
    }

    pub fn id(&self) -> &CommentId {
        &self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn replies(&self) -> &[Reply] {
        &self.replies
    }

    /// Appends a reply, keeping thread order chronological.
    pub fn add_reply(&mut self, author: impl Into<String>, body: impl Into<String>) -> &Reply {
        self.replies.push(Reply::new(author, body));
        self.replies.last().expect("reply was just pushed")
    }
}

/// A feed post owned by the posts collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    id: PostId,
    author: String,
    body: String,
    created_at: Timestamp,
    like_count: u32,
    liked_by_viewer: bool,
    comments: Vec<Comment>,
}

impl Post {
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: PostId::new(),
            author: author.into(),
            body: body.into(),
            created_at: Timestamp::now(),
            like_count: 0,
            liked_by_viewer: false,
            comments: Vec::new(),
        }
    }

    pub fn id(&self) -> &PostId {
        &self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn like_count(&self) -> u32 {
        self.like_count
    }

    pub fn liked_by_viewer(&self) -> bool {
        self.liked_by_viewer
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Toggles the viewer's like and adjusts the count by one in the
    /// matching direction.
    pub fn toggle_like(&mut self) {
        if self.liked_by_viewer {
            self.liked_by_viewer = false;
            self.like_count = self.like_count.saturating_sub(1);
        } else {
            self.liked_by_viewer = true;
            self.like_count += 1;
        }
    }

    /// Appends a comment, keeping thread order chronological.
    pub fn add_comment(&mut self, author: impl Into<String>, body: impl Into<String>) -> &Comment {
        self.comments.push(Comment::new(author, body));
        self.comments.last().expect("comment was just pushed")
    }

    /// Looks up a comment for reply insertion.
    pub fn comment_mut(&mut self, id: &CommentId) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| c.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_post_starts_unliked_with_no_comments() {
        let post = Post::new("alice", "hello");
        assert_eq!(post.like_count(), 0);
        assert!(!post.liked_by_viewer());
        assert!(post.comments().is_empty());
    }

    #[test]
    fn toggle_like_twice_returns_to_original_state() {
        let mut post = Post::new("alice", "hello");
        post.toggle_like();
        assert_eq!(post.like_count(), 1);
        assert!(post.liked_by_viewer());

        post.toggle_like();
        assert_eq!(post.like_count(), 0);
        assert!(!post.liked_by_viewer());
    }

    #[test]
    fn comments_preserve_creation_order() {
        let mut post = Post::new("alice", "hello");
        post.add_comment("bob", "first");
        post.add_comment("carol", "second");
        post.add_comment("dave", "third");

        let bodies: Vec<&str> = post.comments().iter().map(|c| c.body()).collect();
        assert_eq!(bodies, vec!["first", "second", "third"]);
    }

    #[test]
    fn replies_nest_under_the_addressed_comment() {
        let mut post = Post::new("alice", "hello");
        let comment_id = *post.add_comment("bob", "hi").id();
        post.add_comment("carol", "unrelated");

        post.comment_mut(&comment_id).unwrap().add_reply("alice", "ok");

        let comment = post
            .comments()
            .iter()
            .find(|c| c.id() == &comment_id)
            .unwrap();
        assert_eq!(comment.replies().len(), 1);
        assert_eq!(comment.replies()[0].body(), "ok");

        let other = post.comments().iter().find(|c| c.author() == "carol").unwrap();
        assert!(other.replies().is_empty());
    }

    #[test]
    fn post_roundtrips_through_json() {
        let mut post = Post::new("alice", "hello");
        post.toggle_like();
        let comment_id = *post.add_comment("bob", "hi").id();
        post.comment_mut(&comment_id).unwrap().add_reply("alice", "ok");

        let json = serde_json::to_string(&post).unwrap();
        let back: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(back, post);
    }

    proptest! {
        #[test]
        fn like_toggle_parity_holds_for_any_sequence(toggles in 0usize..64) {
            let mut post = Post::new("alice", "hello");
            for _ in 0..toggles {
                post.toggle_like();
            }
            let odd = toggles % 2 == 1;
            prop_assert_eq!(post.liked_by_viewer(), odd);
            prop_assert_eq!(post.like_count(), if odd { 1 } else { 0 });
        }
    }
}
