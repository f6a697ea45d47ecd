//! Derived values shown on the listing page
//!
//! Built from the ordered list of names with the text functions and
//! combinators of this crate. Field names are the keys the listing
//! template reads.

use serde::Serialize;

use crate::combinators::{
    add, compose, filter_by, map_each, partial_apply, pipe, reduce, sort_by_key, zip_pairs,
};
use crate::text::{initials, length, lowercase, reverse, title_case, uppercase};

/// Names strictly longer than this count as "long".
const LONG_NAME_THRESHOLD: usize = 5;

/// Added to each position index for the `offsets` column.
const OFFSET_BASE: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameSummary {
    pub upper: Vec<String>,
    pub title: Vec<String>,
    pub longer_than_five: Vec<String>,
    pub total_characters: usize,
    /// `title_case(lowercase(name))`
    pub composed: Vec<String>,
    /// `name |> lowercase |> reverse |> uppercase`
    pub piped: Vec<String>,
    pub lengths: Vec<usize>,
    pub name_lengths: Vec<(String, usize)>,
    pub initials: Vec<String>,
    /// Position index + 5, one per name.
    pub offsets: Vec<usize>,
    /// Shortest first; equal lengths keep listing order.
    pub by_length: Vec<String>,
}

impl NameSummary {
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let names: Vec<String> = names.iter().map(|n| n.as_ref().to_owned()).collect();

        let title_of_lower = compose(title_case::<String>, lowercase::<String>);
        let steps: [&dyn Fn(String) -> String; 3] =
            [&lowercase::<String>, &reverse::<String>, &uppercase::<String>];
        let plus_offset = partial_apply(add, OFFSET_BASE);

        let lengths = map_each(|n: &String| length(n), &names);
        let positions: Vec<usize> = (0..names.len()).collect();

        Self {
            upper: map_each(|n: &String| uppercase(n), &names),
            title: map_each(|n: &String| title_case(n), &names),
            longer_than_five: filter_by(&names, |n| length(n) > LONG_NAME_THRESHOLD),
            total_characters: reduce(&names, 0, |total, n| total + length(n)),
            composed: map_each(|n: &String| title_of_lower(n.clone()), &names),
            piped: map_each(|n: &String| pipe(n.clone(), &steps), &names),
            name_lengths: zip_pairs(&names, &lengths),
            initials: initials(&names),
            offsets: map_each(|i: &usize| plus_offset(*i), &positions),
            by_length: sort_by_key(&names, |n| length(n)),
            lengths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_record_scenario() {
        let summary = NameSummary::from_names(&["Ana", "Bianca"]);

        assert_eq!(summary.total_characters, 9);
        assert_eq!(summary.longer_than_five, vec!["Bianca"]);
        assert_eq!(summary.by_length, vec!["Ana", "Bianca"]);
        assert_eq!(summary.upper, vec!["ANA", "BIANCA"]);
        assert_eq!(summary.piped, vec!["ANA", "ACNAIB"]);
        assert_eq!(summary.lengths, vec![3, 6]);
        assert_eq!(
            summary.name_lengths,
            vec![("Ana".to_string(), 3), ("Bianca".to_string(), 6)]
        );
        assert_eq!(summary.initials, vec!["A", "B"]);
        assert_eq!(summary.offsets, vec![5, 6]);
    }

    #[test]
    fn composed_matches_title_of_lowercase() {
        let summary = NameSummary::from_names(&["JOÃO da silva"]);
        assert_eq!(summary.composed, vec!["João Da Silva"]);
        assert_eq!(summary.title, vec!["João Da Silva"]);
    }

    #[test]
    fn sort_by_length_is_stable() {
        let summary = NameSummary::from_names(&["Bianca", "Eva", "Ana", "Caio"]);
        assert_eq!(summary.by_length, vec!["Eva", "Ana", "Caio", "Bianca"]);
    }

    #[test]
    fn empty_listing() {
        let summary = NameSummary::from_names::<&str>(&[]);
        assert_eq!(summary, NameSummary::default());
    }
}
