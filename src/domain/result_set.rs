//! Paged result container returned by search operations.

/// Records from one page of a search plus the service's total match count.
///
/// `count` is the total across all pages, so it may exceed `records.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet<T> {
    /// Records on this page, in service order.
    pub records: Vec<T>,
    /// Total number of matches reported by the service.
    pub count: u64,
}

impl<T> ResultSet<T> {
    #[must_use]
    pub fn new(records: Vec<T>, count: u64) -> Self {
        Self { records, count }
    }

    /// The "no match" result: no records and a count of zero.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            count: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.records.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Whether the service reported more matches than this page holds.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.count > self.records.len() as u64
    }
}

impl<T> Default for ResultSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> IntoIterator for ResultSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResultSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let rs: ResultSet<u8> = ResultSet::empty();
        assert!(rs.is_empty());
        assert_eq!(rs.count, 0);
        assert!(!rs.has_more());
        assert_eq!(rs, ResultSet::default());
    }

    #[test]
    fn test_count_may_exceed_records() {
        let rs = ResultSet::new(vec!["a", "b"], 25);
        assert_eq!(rs.len(), 2);
        assert!(rs.has_more());
        assert_eq!(rs.first(), Some(&"a"));

        let collected: Vec<_> = rs.into_iter().collect();
        assert_eq!(collected, ["a", "b"]);
    }

    #[test]
    fn test_count_without_records() {
        let rs: ResultSet<u8> = ResultSet::new(Vec::new(), 5);
        assert!(rs.is_empty());
        assert_eq!(rs.count, 5);
        assert!(rs.has_more());
    }
}
