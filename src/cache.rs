//! LRU cache for rendered page images
//!
//! Optional for callers; [`crate::view::PageList::render_page_cached`] uses
//! it so scroll passes don't re-rasterize pages whose target size hasn't
//! changed.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;

use crate::view::RenderedPage;

/// Identity of one rendered page variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Zero-based page index
    pub index: usize,
    /// Target width in pixels
    pub width_px: u32,
    /// Scale factor, stored in millionths for stable hashing
    pub scale_millionths: u32,
}

impl CacheKey {
    #[must_use]
    pub fn new(index: usize, width_px: u32, scale: f64) -> Self {
        Self {
            index,
            width_px,
            scale_millionths: (scale * 1_000_000.0) as u32,
        }
    }
}

/// LRU cache of rendered pages.
pub struct PageCache {
    cache: LruCache<CacheKey, Arc<RenderedPage>>,
}

impl PageCache {
    /// Create a cache holding up to `capacity` rendered pages.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("max(1) is non-zero");
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Look up a rendered page, promoting it in LRU order.
    #[must_use]
    pub fn get(&mut self, key: &CacheKey) -> Option<Arc<RenderedPage>> {
        self.cache.get(key).cloned()
    }

    /// Check for a key without promoting it.
    #[must_use]
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.cache.contains(key)
    }

    /// Insert a rendered page, returning the shared handle.
    pub fn insert(&mut self, key: CacheKey, page: RenderedPage) -> Arc<RenderedPage> {
        let arc = Arc::new(page);
        self.cache.put(key, arc.clone());
        arc
    }

    /// Drop everything.
    pub fn invalidate_all(&mut self) {
        self.cache.clear();
    }

    /// Drop every cached variant of one page index.
    pub fn invalidate_page(&mut self, index: usize) {
        let stale: Vec<_> = self
            .cache
            .iter()
            .filter(|(k, _)| k.index == index)
            .map(|(k, _)| k.clone())
            .collect();
        for key in stale {
            self.cache.pop(&key);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }
}

#[cfg(test)]
mod tests {
    use image::RgbaImage;

    use super::*;
    use crate::geometry::Rect;

    fn rendered(index: usize) -> RenderedPage {
        RenderedPage {
            image: RgbaImage::new(4, 8),
            index,
            page_bounds: Rect::new(0.0, 0.0, 100.0, 200.0),
        }
    }

    #[test]
    fn insert_and_get() {
        let mut cache = PageCache::new(8);
        let key = CacheKey::new(0, 400, 1.0);
        cache.insert(key.clone(), rendered(0));
        assert!(cache.contains(&key));
        assert_eq!(cache.get(&key).unwrap().index, 0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn lru_eviction() {
        let mut cache = PageCache::new(2);
        for i in 0..3 {
            cache.insert(CacheKey::new(i, 400, 1.0), rendered(i));
        }
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&CacheKey::new(0, 400, 1.0)));
        assert!(cache.contains(&CacheKey::new(1, 400, 1.0)));
        assert!(cache.contains(&CacheKey::new(2, 400, 1.0)));
    }

    #[test]
    fn scale_distinguishes_keys() {
        let mut cache = PageCache::new(8);
        cache.insert(CacheKey::new(0, 400, 1.0), rendered(0));
        assert!(!cache.contains(&CacheKey::new(0, 400, 1.5)));
        assert!(!cache.contains(&CacheKey::new(0, 800, 1.0)));
    }

    #[test]
    fn invalidate_one_page() {
        let mut cache = PageCache::new(8);
        cache.insert(CacheKey::new(0, 400, 1.0), rendered(0));
        cache.insert(CacheKey::new(0, 800, 1.0), rendered(0));
        cache.insert(CacheKey::new(1, 400, 1.0), rendered(1));

        cache.invalidate_page(0);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&CacheKey::new(1, 400, 1.0)));
    }

    #[test]
    fn invalidate_all() {
        let mut cache = PageCache::new(8);
        for i in 0..5 {
            cache.insert(CacheKey::new(i, 400, 1.0), rendered(i));
        }
        cache.invalidate_all();
        assert!(cache.is_empty());
    }

    #[test]
    fn zero_capacity_clamped() {
        let cache = PageCache::new(0);
        assert_eq!(cache.capacity(), 1);
    }
}
