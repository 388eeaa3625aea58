//! Sample posts for the Feed. Timestamps are relative to `now` so the feed
//! always looks recent.

use chrono::{DateTime, Duration, Utc};
use contracts::domain::a001_post::Post;
use uuid::Uuid;

fn post(
    author: &str,
    instrument: Option<&str>,
    body: &str,
    posted_at: DateTime<Utc>,
    likes: u32,
) -> Post {
    Post {
        id: Uuid::new_v4(),
        author: author.to_string(),
        author_instrument: instrument.map(str::to_string),
        body: body.to_string(),
        posted_at,
        likes,
        liked: false,
    }
}

/// Newest first.
pub fn sample_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        post(
            "Omar Reyes",
            Some("Drums"),
            "Open jam at The Canteen on Tuesday. Bass players especially welcome, we are short on low end!",
            now - Duration::minutes(12),
            14,
        ),
        post(
            "Saoirse Quinn",
            Some("Fiddle"),
            "Finally recorded the reel I've been working on all summer. Link in my profile.",
            now - Duration::hours(3),
            41,
        ),
        post(
            "Brixton Brass Co.",
            None,
            "We're auditioning a second trombone for the spring tour. DM for details.",
            now - Duration::days(1),
            87,
        ),
        post(
            "Lena Hart",
            Some("Cello"),
            "Anyone in Bristol fancy a cello + electronics session? Bring your weirdest pedals.",
            now - Duration::days(4),
            6,
        ),
    ]
}

/// Adds `post` to the top of the feed.
pub fn prepend(posts: &mut Vec<Post>, post: Post) {
    posts.insert(0, post);
}

/// Toggles the like on the post with `id`. Returns false if it is not in
/// the feed.
pub fn toggle_like(posts: &mut [Post], id: Uuid) -> bool {
    match posts.iter_mut().find(|p| p.id == id) {
        Some(post) => {
            post.toggle_like();
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_post::NewPost;

    #[test]
    fn test_samples_are_newest_first() {
        let posts = sample_posts(Utc::now());
        assert!(posts.windows(2).all(|w| w[0].posted_at >= w[1].posted_at));
    }

    #[test]
    fn test_published_post_goes_on_top() {
        let now = Utc::now();
        let mut posts = sample_posts(now);
        let draft = NewPost {
            body: "New single out Friday".to_string(),
        };
        let published = draft.publish("Nina Vale", Some("Bass".to_string()), now).unwrap();
        let id = published.id;

        prepend(&mut posts, published);

        assert_eq!(posts[0].id, id);
        assert_eq!(posts[0].posted_at, now);
        assert_eq!(posts.len(), 5);
    }

    #[test]
    fn test_toggle_like() {
        let mut posts = sample_posts(Utc::now());
        let id = posts[1].id;

        assert!(toggle_like(&mut posts, id));
        assert_eq!((posts[1].likes, posts[1].liked), (42, true));

        assert!(toggle_like(&mut posts, id));
        assert_eq!((posts[1].likes, posts[1].liked), (41, false));

        assert!(!toggle_like(&mut posts, Uuid::new_v4()));
    }
}
