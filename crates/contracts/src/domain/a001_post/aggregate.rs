use crate::system::auth::FieldError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_POST_LEN: usize = 500;

/// A post on the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author: String,
    pub author_instrument: Option<String>,
    pub body: String,
    pub posted_at: DateTime<Utc>,
    pub likes: u32,
    pub liked: bool,
}

impl Post {
    /// Flips the viewer's like and keeps the counter in step.
    pub fn toggle_like(&mut self) {
        if self.liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes += 1;
        }
        self.liked = !self.liked;
    }
}

/// Composer contents before they become a `Post`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPost {
    pub body: String,
}

impl NewPost {
    pub fn remaining(&self) -> isize {
        MAX_POST_LEN as isize - self.body.chars().count() as isize
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        let len = self.body.chars().count();
        if self.body.trim().is_empty() {
            Err(FieldError::Required {
                field: "body",
                label: "Post",
            })
        } else if len > MAX_POST_LEN {
            Err(FieldError::TooLong {
                len,
                max: MAX_POST_LEN,
            })
        } else {
            Ok(())
        }
    }

    /// Validates and stamps the post with a fresh id and the given time.
    pub fn publish(
        &self,
        author: &str,
        author_instrument: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Post, FieldError> {
        self.validate()?;
        Ok(Post {
            id: Uuid::new_v4(),
            author: author.to_string(),
            author_instrument,
            body: self.body.trim().to_string(),
            posted_at: now,
            likes: 0,
            liked: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_post_is_rejected() {
        let post = NewPost {
            body: "   \n".to_string(),
        };
        assert_eq!(
            post.validate(),
            Err(FieldError::Required {
                field: "body",
                label: "Post",
            })
        );
    }

    #[test]
    fn test_length_limit_counts_chars() {
        let at_limit = NewPost {
            body: "♪".repeat(MAX_POST_LEN),
        };
        assert_eq!(at_limit.validate(), Ok(()));
        assert_eq!(at_limit.remaining(), 0);

        let over = NewPost {
            body: "a".repeat(MAX_POST_LEN + 1),
        };
        assert_eq!(
            over.validate(),
            Err(FieldError::TooLong {
                len: MAX_POST_LEN + 1,
                max: MAX_POST_LEN,
            })
        );
        assert_eq!(over.remaining(), -1);
    }

    #[test]
    fn test_publish_trims_and_stamps() {
        let now = Utc::now();
        let post = NewPost {
            body: "  New single out Friday!  ".to_string(),
        }
        .publish("Nina Vale", Some("Bass".to_string()), now)
        .unwrap();

        assert_eq!(post.body, "New single out Friday!");
        assert_eq!(post.posted_at, now);
        assert_eq!(post.likes, 0);
        assert!(!post.liked);
    }

    #[test]
    fn test_toggle_like() {
        let mut post = NewPost {
            body: "Jam session tonight".to_string(),
        }
        .publish("Nina Vale", None, Utc::now())
        .unwrap();

        post.toggle_like();
        assert_eq!((post.likes, post.liked), (1, true));
        post.toggle_like();
        assert_eq!((post.likes, post.liked), (0, false));
    }
}
