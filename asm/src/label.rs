use indexmap::IndexMap;

/// Label table built in pass 1: name -> instruction index. Labels occupy no
/// instruction slot themselves. Kept insertion-ordered for listings.
pub struct Labels(IndexMap<String, u16>);

impl Labels {
    pub fn new() -> Self {
        Labels(IndexMap::new())
    }

    /// Record a label. The first definition wins; a duplicate returns the
    /// previously recorded address so the caller can warn.
    pub fn define(&mut self, name: &str, addr: u16) -> Option<u16> {
        if let Some(prev) = self.0.get(name) {
            return Some(*prev);
        }
        self.0.insert(name.to_string(), addr);
        None
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_definition_wins() {
        let mut labels = Labels::new();
        assert_eq!(labels.define("loop", 0), None);
        assert_eq!(labels.define("loop", 4), Some(0));
        assert_eq!(labels.get("loop"), Some(0));
        assert_eq!(labels.get("exit"), None);
    }
}
