//! Variable scopes.

use rustc_hash::FxHashMap;

use crate::Variant;

/// A name to value mapping for one scope (a call's locals, or the globals).
///
/// Every store goes through [`Namespace::save`], which keeps a clean copy of
/// the value so control flags never end up in a scope.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Namespace {
    vars: FxHashMap<String, Variant>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a clean copy of `value` under `name`, replacing any previous value.
    pub fn save(&mut self, name: impl Into<String>, value: impl Into<Variant>) {
        self.vars.insert(name.into(), value.into().cleaned());
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Variant> {
        self.vars.get(name)
    }

    #[inline]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Variant> {
        self.vars.get_mut(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Variant> {
        self.vars.remove(name)
    }

    /// All bound names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.vars.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variant)> {
        self.vars.iter().map(|(name, v)| (name.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Variant>> FromIterator<(K, V)> for Namespace {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ns = Namespace::new();
        for (name, value) in iter {
            ns.save(name, value);
        }
        ns
    }
}

impl<K: Into<String>, V: Into<Variant>> Extend<(K, V)> for Namespace {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.save(name, value);
        }
    }
}
