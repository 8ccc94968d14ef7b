use crate::models::Comment;

/// Filter criteria for crawled comments. Username and keywords are lowercased
/// once at construction; empty strings and empty lists count as "no filter".
#[derive(Debug, Clone, Default)]
pub struct CommentFilter {
    username: Option<String>,
    keywords: Vec<String>,
}

impl CommentFilter {
    pub fn new(username: Option<String>, keywords: Option<Vec<String>>) -> Self {
        let username = username
            .map(|u| u.to_lowercase())
            .filter(|u| !u.is_empty());

        let keywords = keywords
            .unwrap_or_default()
            .into_iter()
            .filter(|k| !k.is_empty())
            .map(|k| k.to_lowercase())
            .collect();

        CommentFilter { username, keywords }
    }

    /// Keeps comments whose author name contains the username filter and
    /// whose text contains at least one keyword, case-insensitively. Inactive
    /// filters pass everything through; order is preserved.
    pub fn apply(&self, comments: &[Comment]) -> Vec<Comment> {
        let mut matches: Vec<Comment> = comments.to_vec();

        if let Some(username) = &self.username {
            matches.retain(|c| c.author.to_lowercase().contains(username.as_str()));
        }

        if !self.keywords.is_empty() {
            matches.retain(|c| {
                let text = c.text.to_lowercase();
                self.keywords.iter().any(|k| text.contains(k.as_str()))
            });
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(author: &str, text: &str) -> Comment {
        Comment {
            author: author.to_string(),
            text: text.to_string(),
            published_at: "2024-01-01T00:00:00Z".to_string(),
            like_count: 0,
        }
    }

    #[test]
    fn test_username_filter_is_case_insensitive_substring() {
        let comments = vec![
            comment("JohnDoe42", "first"),
            comment("alice", "second"),
            comment("Big John", "third"),
        ];

        let filter = CommentFilter::new(Some("john".to_string()), None);
        let matches = filter.apply(&comments);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].author, "JohnDoe42");
        assert_eq!(matches[1].author, "Big John");
    }

    #[test]
    fn test_keywords_match_any() {
        let comments = vec![
            comment("a", "This video is GREAT"),
            comment("b", "awful sound quality"),
            comment("c", "nothing to see here"),
        ];

        let filter = CommentFilter::new(
            None,
            Some(vec!["great".to_string(), "awful".to_string()]),
        );
        let matches = filter.apply(&comments);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].author, "a");
        assert_eq!(matches[1].author, "b");
    }

    #[test]
    fn test_both_filters_combine_as_and() {
        let comments = vec![
            comment("alice", "great video"),
            comment("alice", "meh"),
            comment("bob", "great video"),
        ];

        let filter = CommentFilter::new(
            Some("alice".to_string()),
            Some(vec!["great".to_string()]),
        );
        let matches = filter.apply(&comments);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].author, "alice");
        assert_eq!(matches[0].text, "great video");
    }

    #[test]
    fn test_no_filters_pass_everything_through() {
        let comments = vec![comment("a", "x"), comment("b", "y")];

        let matches = CommentFilter::new(None, None).apply(&comments);

        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_empty_strings_and_empty_list_count_as_absent() {
        let comments = vec![comment("a", "x"), comment("b", "y")];

        let filter = CommentFilter::new(Some(String::new()), Some(vec![]));
        let matches = filter.apply(&comments);

        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_matches_keep_input_order() {
        let comments = vec![
            comment("z-user", "keyword here"),
            comment("a-user", "nothing"),
            comment("m-user", "keyword again"),
        ];

        let filter = CommentFilter::new(None, Some(vec!["keyword".to_string()]));
        let matches = filter.apply(&comments);

        let authors: Vec<&str> = matches.iter().map(|c| c.author.as_str()).collect();
        assert_eq!(authors, vec!["z-user", "m-user"]);
    }
}
