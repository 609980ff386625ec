// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Edge conditioning: the filtering/upsampling preprocessing pass applied to
// a neighbor-sample edge before the directional predictors (Z1/Z2/Z3) do
// their fractional-position sampling.

use crate::bitdepth::BitDepth;
use crate::tables::{
  blk_wh_partition, FILTER_STRENGTH_TABLE, FILTER_STRENGTH_TABLE_SMOOTH, INTRA_EDGE_KERNEL,
  UPSAMPLE_KERNEL,
};
use crate::util::{clamp, round2};

/// Look up the 5-tap edge filter strength (0 = don't filter) for a given
/// combined block dimension, angular delta from the nearest cardinal, and
/// "is smooth neighbor" flag.
pub fn filter_strength(blk_wh: usize, d: i32, is_smooth: bool) -> u8 {
  let row = blk_wh_partition(blk_wh);
  let table = if is_smooth {
    &FILTER_STRENGTH_TABLE_SMOOTH
  } else {
    &FILTER_STRENGTH_TABLE
  };
  for &(max_d, strength) in &table[row] {
    if d <= max_d {
      log::trace!("filter_strength(blk_wh={blk_wh}, d={d}, smooth={is_smooth}) -> {strength}");
      return strength;
    }
  }
  log::trace!("filter_strength(blk_wh={blk_wh}, d={d}, smooth={is_smooth}) -> 0");
  0
}

/// Whether edge upsampling (rather than filtering) applies.
pub fn upsample(blk_wh: usize, d: i32, is_smooth: bool) -> bool {
  let decision = if d >= 40 {
    false
  } else if is_smooth {
    blk_wh <= 8
  } else {
    blk_wh <= 16
  };
  log::trace!("upsample(blk_wh={blk_wh}, d={d}, smooth={is_smooth}) -> {decision}");
  decision
}

/// Clamp `idx` into `[from, to)` and read `input[idx - from]` (`input`
/// holds exactly the samples in `[from, to)`).
fn read_clipped(input: &[i32], from: isize, to: isize, idx: isize) -> i32 {
  let clipped = clamp(idx, from, to - 1);
  input[(clipped - from) as usize]
}

/// Apply the symmetric 5-tap smoothing kernel selected by `strength`
/// (1..=3) to `input`, covering source range `[from, to)`, producing `n`
/// output samples into `out`. Reads past the range are clamped to the
/// nearest in-range index.
pub fn filter_edge(out: &mut [i32], n: usize, input: &[i32], from: isize, to: isize, strength: u8) {
  debug_assert!((1..=3).contains(&strength));
  debug_assert!(out.len() >= n);
  debug_assert_eq!(input.len(), (to - from) as usize);

  let kernel = &INTRA_EDGE_KERNEL[(strength - 1) as usize];
  for i in 0..n {
    let mut sum = 0i32;
    for (j, &k) in kernel.iter().enumerate() {
      sum += read_clipped(input, from, to, from + i as isize - 2 + j as isize) * k;
    }
    out[i] = round2(sum, 4);
  }
}

/// Produce a `2*hsz - 1` sample upsampled edge from `input` (source range
/// `[from, to)`). Even output indices are clipped copies; odd indices are
/// a 4-tap interpolation, rounded and clipped to the pixel range.
pub fn upsample_edge(out: &mut [i32], hsz: usize, input: &[i32], from: isize, to: isize, bd: BitDepth) {
  let n = 2 * hsz - 1;
  debug_assert!(out.len() >= n);
  debug_assert_eq!(input.len(), (to - from) as usize);

  for i in 0..n {
    if i % 2 == 0 {
      out[i] = read_clipped(input, from, to, from + (i as isize) / 2);
    } else {
      let base = from + (i as isize - 1) / 2;
      let mut sum = 0i32;
      for (k, &w) in UPSAMPLE_KERNEL.iter().enumerate() {
        sum += read_clipped(input, from, to, base - 1 + k as isize) * w;
      }
      out[i] = bd.clip(round2(sum, 4)) as i32;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn upsample_false_beyond_forty_degrees() {
    assert!(!upsample(8, 40, false));
    assert!(!upsample(8, 90, true));
  }

  #[test]
  fn upsample_true_for_small_smooth_blocks() {
    assert!(upsample(8, 0, true));
    assert!(!upsample(16, 0, true));
    assert!(upsample(16, 0, false));
  }

  #[test]
  fn filter_edge_on_flat_input_is_a_no_op() {
    let input = vec![42i32; 9]; // from..to spans 9 samples
    let mut out = vec![0i32; 9];
    filter_edge(&mut out, 9, &input, 0, 9, 2);
    assert!(out.iter().all(|&v| v == 42));
  }

  #[test]
  fn upsample_edge_preserves_flat_input() {
    let input = vec![10i32; 5];
    let mut out = vec![0i32; 9];
    upsample_edge(&mut out, 5, &input, 0, 5, BitDepth::Eight);
    assert!(out.iter().all(|&v| v == 10));
  }

  #[test]
  fn filter_edge_clamps_reads_past_range() {
    // A single in-range sample: every tap reads the same value.
    let input = [7i32];
    let mut out = [0i32; 3];
    filter_edge(&mut out, 3, &input, 0, 1, 1);
    assert_eq!(out, [7, 7, 7]);
  }
}
