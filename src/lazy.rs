//! Registry of images still waiting for their real source.
//!
//! Generic over the element handle so the load-once rule is testable without a
//! browser. A page holds a handful of images, so a linear scan is fine.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

#[derive(Debug, Clone)]
pub struct LazyImages<K> {
    pending: Vec<(K, String)>,
}

impl<K> Default for LazyImages<K> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<K: PartialEq> LazyImages<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track an image with its deferred source. Re-registering an image that
    /// is already pending is ignored. Returns whether it was added.
    pub fn register(&mut self, image: K, src: String) -> bool {
        if self.contains(&image) {
            return false;
        }
        self.pending.push((image, src));
        true
    }

    /// Handle an intersection report. Returns the source to load when the
    /// image is intersecting and still pending; the image is dropped from the
    /// registry at that point, so later reports return `None`.
    pub fn on_intersection(&mut self, image: &K, intersecting: bool) -> Option<String> {
        if !intersecting {
            return None;
        }
        let pos = self.pending.iter().position(|(k, _)| k == image)?;
        Some(self.pending.swap_remove(pos).1)
    }

    /// Release every pending image at once.
    pub fn drain(&mut self) -> Vec<(K, String)> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn contains(&self, image: &K) -> bool {
        self.pending.iter().any(|(k, _)| k == image)
    }
}
