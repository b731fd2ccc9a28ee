//! Sort controller and derived table ordering.
//!
//! This module owns the active sort selection and derives a freshly computed,
//! ordered view of the story list on demand. The canonical result-set state is
//! never reordered in place; rendering and selection always go through
//! [`sorted_view`].

use crate::domain::Story;

/// Column key the table can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// API ranking order, untouched.
    #[default]
    None,

    /// Ascending lexicographic by title.
    Title,

    /// Ascending lexicographic by author.
    Author,

    /// Descending numeric by comment count.
    Comments,

    /// Descending numeric by points.
    Points,
}

/// Active sort selection.
///
/// Selecting the key that is already active toggles the reverse flag; selecting
/// a different key switches to it and clears reverse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    /// Currently active column key.
    pub key: SortKey,

    /// Invert the base ordering's output.
    pub is_reverse: bool,
}

impl SortState {
    /// Applies a column selection, toggling direction on reselect.
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.is_reverse = !self.is_reverse;
        } else {
            self.key = key;
            self.is_reverse = false;
        }
    }
}

/// Computes the display ordering of `stories` under the given sort selection.
///
/// Returns a fresh list; the input is never mutated. The underlying sort is
/// stable, so stories with equal keys keep their relative order and re-sorting
/// an already ordered list is a fixed point. With `is_reverse` set, the output
/// of the base ordering is inverted.
#[must_use]
pub fn sorted_view(stories: &[Story], sort: SortState) -> Vec<Story> {
    let mut view: Vec<Story> = stories.to_vec();

    match sort.key {
        SortKey::None => {}
        SortKey::Title => view.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Author => view.sort_by(|a, b| a.author.cmp(&b.author)),
        SortKey::Comments => view.sort_by(|a, b| b.num_comments.cmp(&a.num_comments)),
        SortKey::Points => view.sort_by(|a, b| b.points.cmp(&a.points)),
    }

    if sort.is_reverse {
        view.reverse();
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str, title: &str, author: &str, comments: u32, points: u32) -> Story {
        Story {
            object_id: id.to_string(),
            url: None,
            title: title.to_string(),
            author: author.to_string(),
            num_comments: comments,
            points,
        }
    }

    fn sample() -> Vec<Story> {
        vec![
            story("1", "beta", "zoe", 5, 10),
            story("2", "alpha", "amy", 9, 30),
            story("3", "gamma", "mia", 1, 20),
        ]
    }

    fn ids(view: &[Story]) -> Vec<&str> {
        view.iter().map(|s| s.object_id.as_str()).collect()
    }

    #[test]
    fn reselecting_the_active_key_toggles_reverse() {
        let mut sort = SortState::default();
        sort.select(SortKey::Title);
        assert_eq!(sort.key, SortKey::Title);
        assert!(!sort.is_reverse);

        sort.select(SortKey::Title);
        assert!(sort.is_reverse);

        sort.select(SortKey::Title);
        assert!(!sort.is_reverse);
    }

    #[test]
    fn switching_keys_clears_reverse() {
        let mut sort = SortState::default();
        sort.select(SortKey::Title);
        sort.select(SortKey::Title);
        assert!(sort.is_reverse);

        sort.select(SortKey::Author);
        assert_eq!(sort.key, SortKey::Author);
        assert!(!sort.is_reverse);
    }

    #[test]
    fn none_is_identity_order() {
        let stories = sample();
        let view = sorted_view(&stories, SortState::default());
        assert_eq!(ids(&view), vec!["1", "2", "3"]);
    }

    #[test]
    fn title_and_author_sort_ascending() {
        let stories = sample();

        let by_title = sorted_view(&stories, SortState { key: SortKey::Title, is_reverse: false });
        assert_eq!(ids(&by_title), vec!["2", "1", "3"]);

        let by_author = sorted_view(&stories, SortState { key: SortKey::Author, is_reverse: false });
        assert_eq!(ids(&by_author), vec!["2", "3", "1"]);
    }

    #[test]
    fn comments_and_points_sort_descending() {
        let stories = sample();

        let by_comments =
            sorted_view(&stories, SortState { key: SortKey::Comments, is_reverse: false });
        assert_eq!(ids(&by_comments), vec!["2", "1", "3"]);

        let by_points = sorted_view(&stories, SortState { key: SortKey::Points, is_reverse: false });
        assert_eq!(ids(&by_points), vec!["2", "3", "1"]);
    }

    #[test]
    fn reverse_inverts_the_base_ordering() {
        let stories = sample();

        let forward = sorted_view(&stories, SortState { key: SortKey::Points, is_reverse: false });
        let backward = sorted_view(&stories, SortState { key: SortKey::Points, is_reverse: true });

        let mut expected = forward;
        expected.reverse();
        assert_eq!(backward, expected);
    }

    #[test]
    fn sorting_is_idempotent_on_sorted_input() {
        let stories = sample();
        let sort = SortState { key: SortKey::Title, is_reverse: false };

        let once = sorted_view(&stories, sort);
        let twice = sorted_view(&once, sort);
        assert_eq!(once, twice);
    }

    #[test]
    fn input_list_is_untouched() {
        let stories = sample();
        let _ = sorted_view(&stories, SortState { key: SortKey::Title, is_reverse: true });
        assert_eq!(ids(&stories), vec!["1", "2", "3"]);
    }
}
