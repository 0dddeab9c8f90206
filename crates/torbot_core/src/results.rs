use std::collections::HashSet;

use crate::FormController;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub link: String,
    pub reachable: bool,
}

/// Links discovered by the service, each with its reachability flag.
///
/// Keys are unique and keep first-seen order. When the same link is reported
/// more than once, the first occurrence keeps both its position and its flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkResultSet {
    entries: Vec<LinkEntry>,
}

impl LinkResultSet {
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for (link, reachable) in pairs {
            let link = link.into();
            if seen.insert(link.clone()) {
                entries.push(LinkEntry { link, reachable });
            }
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkEntry> {
        self.entries.iter()
    }

    pub fn get(&self, link: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|entry| entry.link == link)
            .map(|entry| entry.reachable)
    }

    pub fn reachable_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.reachable).count()
    }
}

/// Result of one submission, consumed by the view transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success(LinkResultSet),
    Failure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClass {
    Good,
    Bad,
}

impl LinkClass {
    pub fn from_reachable(reachable: bool) -> Self {
        if reachable {
            LinkClass::Good
        } else {
            LinkClass::Bad
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LinkClass::Good => "good",
            LinkClass::Bad => "bad",
        }
    }
}

/// Read-only projection of a fetched result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsPresenter {
    links: LinkResultSet,
}

impl ResultsPresenter {
    pub fn new(links: LinkResultSet) -> Self {
        Self { links }
    }

    pub fn links(&self) -> &LinkResultSet {
        &self.links
    }

    pub fn render(&self) -> Vec<crate::ResultRow> {
        self.links
            .iter()
            .enumerate()
            .map(|(idx, entry)| crate::ResultRow {
                ordinal: idx + 1,
                link: entry.link.clone(),
                class: LinkClass::from_reachable(entry.reachable),
            })
            .collect()
    }

    /// Drops the result set and hands back a fresh form.
    pub fn go_back(self) -> FormController {
        FormController::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_keep_first_position_and_flag() {
        let set = LinkResultSet::from_pairs([
            ("http://a.com", true),
            ("http://b.com", false),
            ("http://a.com", false),
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("http://a.com"), Some(true));
        let links: Vec<_> = set.iter().map(|e| e.link.as_str()).collect();
        assert_eq!(links, vec!["http://a.com", "http://b.com"]);
    }

    #[test]
    fn render_numbers_rows_from_one() {
        let presenter = ResultsPresenter::new(LinkResultSet::from_pairs([
            ("http://z.com", false),
            ("http://a.com", true),
        ]));
        let rows = presenter.render();
        assert_eq!(rows[0].ordinal, 1);
        assert_eq!(rows[0].link, "http://z.com");
        assert_eq!(rows[0].class, LinkClass::Bad);
        assert_eq!(rows[1].ordinal, 2);
        assert_eq!(rows[1].class.as_str(), "good");
    }
}
