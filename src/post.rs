//! Post records: the raw API shape and the display model.
//!
//! [`RawPost`] is what the API sends, after it has passed the schema check
//! in [`crate::schema`].  [`BlogPost`] is the minimal shape the renderer
//! consumes.  The conversion between them is a pure, order-preserving map.

use serde::Deserialize;

/// A post exactly as received from the API.
///
/// Only ever produced by [`crate::schema::validate_posts`]; unknown fields in
/// the JSON record are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

/// A post as displayed in the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    /// API identifier, also used as the list key.
    pub id: i64,
    pub title: String,
    /// The post body (`body` in the API).
    pub text: String,
}

impl From<RawPost> for BlogPost {
    fn from(raw: RawPost) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            text: raw.body,
        }
    }
}

/// Convert validated records into display records, keeping their order.
pub fn to_blog_posts(raw: Vec<RawPost>) -> Vec<BlogPost> {
    raw.into_iter().map(BlogPost::from).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    pub fn make_raw(id: i64, title: &str, body: &str) -> RawPost {
        RawPost {
            id,
            user_id: 7,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn drops_user_id_and_renames_body() {
        let post = BlogPost::from(make_raw(1, "Hello", "World"));
        assert_eq!(
            post,
            BlogPost {
                id: 1,
                title: "Hello".into(),
                text: "World".into(),
            }
        );
    }

    #[test]
    fn preserves_order_and_length() {
        let raw = vec![make_raw(3, "c", "z"), make_raw(1, "a", "x"), make_raw(2, "b", "y")];
        let posts = to_blog_posts(raw);

        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn transform_is_idempotent() {
        let raw = vec![make_raw(1, "a", "x"), make_raw(2, "b", "y")];
        assert_eq!(to_blog_posts(raw.clone()), to_blog_posts(raw));
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(to_blog_posts(Vec::new()).is_empty());
    }

    #[test]
    fn deserializes_camel_case_user_id() {
        let raw: RawPost = serde_json::from_str(
            r#"{"id":1,"userId":7,"title":"Hello","body":"World","extra":true}"#,
        )
        .unwrap();
        assert_eq!(raw, make_raw(1, "Hello", "World"));
    }
}
