// Copyright 2025 The Waterfall Flow Authors
// SPDX-License-Identifier: Apache-2.0

//! Union-rect buckets for viewport queries.
//!
//! The flat attribute list is cut into consecutive runs of [`UNION_SIZE`]
//! elements and each run keeps the bounding rect of its members. A query walks
//! the bucket rects instead of every element and only filters the candidate
//! index range they select, which keeps scroll-time queries cheap on lists of
//! tens of thousands of items.

use std::ops::Range;

use waterfall_geometry::Rect;

/// Number of consecutive elements summarized by one bucket.
pub const UNION_SIZE: usize = 20;

/// Bucket index over a position-ordered list of rects.
///
/// Buckets are keyed by index, not geometry: element `i` always belongs to
/// bucket `i / unit`. Each bucket rect is the union of all member rects, so a
/// query never misses a member whose rect lies between the first and last
/// element of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionRectIndex {
    buckets: Vec<Rect>,
    unit: usize,
    len: usize,
}

impl Default for UnionRectIndex {
    fn default() -> Self {
        Self {
            buckets: Vec::new(),
            unit: UNION_SIZE,
            len: 0,
        }
    }
}

impl UnionRectIndex {
    /// Builds an index with the default bucket size.
    pub fn build<I>(rects: I) -> Self
    where
        I: IntoIterator<Item = Rect>,
    {
        Self::with_unit(rects, UNION_SIZE)
    }

    /// Builds an index with `unit` elements per bucket.
    ///
    /// `rects` yields one rect per element, in emission order.
    pub fn with_unit<I>(rects: I, unit: usize) -> Self
    where
        I: IntoIterator<Item = Rect>,
    {
        let unit = unit.max(1);
        let mut buckets: Vec<Rect> = Vec::new();
        let mut len = 0;
        for rect in rects {
            if len % unit == 0 {
                buckets.push(rect);
            } else if let Some(bucket) = buckets.last_mut() {
                *bucket = bucket.union(&rect);
            }
            len += 1;
        }
        Self { buckets, unit, len }
    }

    /// Number of indexed elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn unit(&self) -> usize {
        self.unit
    }

    pub fn buckets(&self) -> &[Rect] {
        &self.buckets
    }

    /// Element index range covered by `bucket`.
    pub fn bucket_range(&self, bucket: usize) -> Range<usize> {
        let start = (bucket * self.unit).min(self.len);
        let end = ((bucket + 1) * self.unit).min(self.len);
        start..end
    }

    /// Element index ranges of all buckets, in order. Together they partition
    /// `0..len()`.
    pub fn bucket_ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.buckets.len()).map(move |bucket| self.bucket_range(bucket))
    }

    /// Candidate element range for `rect`.
    ///
    /// Spans from the first to the last bucket touching `rect`. Callers must
    /// still filter the range by exact intersection. Returns an empty range
    /// when no bucket touches `rect`.
    pub fn query(&self, rect: &Rect) -> Range<usize> {
        let Some(first) = self.buckets.iter().position(|bucket| bucket.touches(rect)) else {
            return 0..0;
        };
        let last = self
            .buckets
            .iter()
            .rposition(|bucket| bucket.touches(rect))
            .unwrap_or(first);
        self.bucket_range(first).start..self.bucket_range(last).end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked_rows(count: usize, height: f32) -> Vec<Rect> {
        (0..count)
            .map(|i| Rect::new(0.0, i as f32 * height, 100.0, height))
            .collect()
    }

    #[test]
    fn test_empty_index() {
        let index = UnionRectIndex::build(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.buckets().len(), 0);
        assert_eq!(index.query(&Rect::new(0.0, 0.0, 100.0, 100.0)), 0..0);
    }

    #[test]
    fn test_buckets_partition_all_elements() {
        for count in [0, 1, 19, 20, 21, 40, 57] {
            let index = UnionRectIndex::build(stacked_rows(count, 10.0));
            assert_eq!(index.buckets().len(), count.div_ceil(UNION_SIZE));
            let mut expected_start = 0;
            for range in index.bucket_ranges() {
                assert_eq!(range.start, expected_start);
                assert!(range.end > range.start);
                expected_start = range.end;
            }
            assert_eq!(expected_start, count);
        }
    }

    #[test]
    fn test_query_selects_touching_buckets() {
        // 100 rows of 10pt: bucket k covers y in [200k, 200k + 200)
        let index = UnionRectIndex::build(stacked_rows(100, 10.0));
        let range = index.query(&Rect::new(0.0, 450.0, 100.0, 100.0));
        // y 450..550 touches buckets 2 only
        assert_eq!(range, 40..60);
    }

    #[test]
    fn test_query_spanning_bucket_boundary() {
        let index = UnionRectIndex::build(stacked_rows(100, 10.0));
        let range = index.query(&Rect::new(0.0, 350.0, 100.0, 100.0));
        assert_eq!(range, 20..60);
    }

    #[test]
    fn test_query_outside_content_is_empty() {
        let index = UnionRectIndex::build(stacked_rows(30, 10.0));
        assert_eq!(index.query(&Rect::new(0.0, 5_000.0, 100.0, 100.0)), 0..0);
    }

    #[test]
    fn test_bucket_covers_members_between_first_and_last() {
        // First and last members sit on the left, a tall member in the middle
        // extends far below both.
        let rects = vec![
            Rect::new(0.0, 0.0, 50.0, 10.0),
            Rect::new(60.0, 0.0, 50.0, 900.0),
            Rect::new(0.0, 10.0, 50.0, 10.0),
        ];
        let index = UnionRectIndex::with_unit(rects, 3);
        assert_eq!(index.buckets()[0], Rect::new(0.0, 0.0, 110.0, 900.0));
        assert_eq!(index.query(&Rect::new(60.0, 500.0, 10.0, 10.0)), 0..3);
    }

    #[test]
    fn test_custom_unit() {
        let index = UnionRectIndex::with_unit(stacked_rows(7, 10.0), 3);
        let ranges: Vec<_> = index.bucket_ranges().collect();
        assert_eq!(ranges, vec![0..3, 3..6, 6..7]);
    }
}
