//! Feed collection - the posts the dashboard renders, newest first.
//!
//! All operations are synchronous and total over the in-memory collection;
//! targeting a missing post or comment returns a typed error and leaves the
//! collection untouched.

use thiserror::Error;
use tracing::debug;

use crate::domain::feed::{Comment, Post, Reply};
use crate::domain::foundation::{CommentId, PostId};

/// A feed operation addressed an entity that is not there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),
}

/// The ordered post collection.
#[derive(Debug, Default)]
pub struct Feed {
    posts: Vec<Post>,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts in display order, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Creates a post and prepends it so the feed stays newest-first.
    pub fn create_post(&mut self, author: impl Into<String>, body: impl Into<String>) -> &Post {
        let post = Post::new(author, body);
        debug!(post_id = %post.id(), "post created");
        self.posts.insert(0, post);
        &self.posts[0]
    }

    /// Toggles the viewer's like on the addressed post.
    ///
    /// # Errors
    ///
    /// `FeedError::PostNotFound` when the id matches nothing.
    pub fn toggle_like(&mut self, id: &PostId) -> Result<&Post, FeedError> {
        let post = self.post_mut(id)?;
        post.toggle_like();
        Ok(&*post)
    }

    /// Appends a comment to the addressed post.
    pub fn add_comment(
        &mut self,
        post_id: &PostId,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<&Comment, FeedError> {
        let post = self.post_mut(post_id)?;
        Ok(post.add_comment(author, body))
    }

    /// Appends a reply under the addressed comment of the addressed post.
    pub fn add_reply(
        &mut self,
        post_id: &PostId,
        comment_id: &CommentId,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<&Reply, FeedError> {
        let post = self.post_mut(post_id)?;
        let comment = post
            .comment_mut(comment_id)
            .ok_or(FeedError::CommentNotFound(*comment_id))?;
        Ok(comment.add_reply(author, body))
    }

    fn post_mut(&mut self, id: &PostId) -> Result<&mut Post, FeedError> {
        self.posts
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(FeedError::PostNotFound(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_come_back_newest_first() {
        let mut feed = Feed::new();
        feed.create_post("alice", "first");
        feed.create_post("bob", "second");

        let bodies: Vec<&str> = feed.posts().iter().map(|p| p.body()).collect();
        assert_eq!(bodies, vec!["second", "first"]);
    }

    #[test]
    fn toggle_like_on_missing_post_fails_and_changes_nothing() {
        let mut feed = Feed::new();
        feed.create_post("alice", "hello");
        let before: Vec<Post> = feed.posts().to_vec();

        let missing = PostId::new();
        assert_eq!(
            feed.toggle_like(&missing),
            Err(FeedError::PostNotFound(missing))
        );
        assert_eq!(feed.posts(), &before[..]);
    }

    #[test]
    fn comment_lands_on_the_addressed_post_only() {
        let mut feed = Feed::new();
        let first = *feed.create_post("alice", "first").id();
        let second = *feed.create_post("bob", "second").id();

        feed.add_comment(&first, "carol", "nice").unwrap();

        assert_eq!(feed.get(&first).unwrap().comments().len(), 1);
        assert!(feed.get(&second).unwrap().comments().is_empty());
    }

    #[test]
    fn reply_requires_both_post_and_comment_to_exist() {
        let mut feed = Feed::new();
        let post_id = *feed.create_post("alice", "hello").id();
        let comment_id = *feed.add_comment(&post_id, "bob", "hi").unwrap().id();

        let other_comment = CommentId::new();
        assert_eq!(
            feed.add_reply(&post_id, &other_comment, "alice", "ok"),
            Err(FeedError::CommentNotFound(other_comment))
        );

        feed.add_reply(&post_id, &comment_id, "alice", "ok").unwrap();
        let comment = &feed.get(&post_id).unwrap().comments()[0];
        assert_eq!(comment.replies().len(), 1);
    }
}
