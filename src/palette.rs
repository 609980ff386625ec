// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Palette expansion: each destination sample is a lookup into a small
// per-block color table, indexed by a pre-decoded color-index map.

use crate::bitdepth::Pixel;

/// `pal_pred`: `dst[y, x] = pal[idx[y*W + x]]`.
pub fn pal_pred(dst: &mut [Pixel], stride: usize, pal: &[Pixel], idx: &[u8], w: usize, h: usize) {
  debug_assert!(idx.len() >= w * h);
  for y in 0..h {
    for x in 0..w {
      let i = idx[y * w + x] as usize;
      debug_assert!(i < pal.len());
      dst[y * stride + x] = pal[i];
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn expands_indices_through_the_palette() {
    let pal = [10u16, 20, 30, 40];
    let idx = [0u8, 1, 2, 3, 3, 2, 1, 0];
    let mut dst = vec![0u16; 8];
    pal_pred(&mut dst, 4, &pal, &idx, 4, 2);
    assert_eq!(&dst[0..4], &[10, 20, 30, 40]);
    assert_eq!(&dst[4..8], &[40, 30, 20, 10]);
  }

  #[test]
  fn respects_stride() {
    let pal = [5u16, 6];
    let idx = [0u8, 1, 1, 0];
    let mut dst = vec![99u16; 2 * 3]; // stride 3, block width 2
    pal_pred(&mut dst, 3, &pal, &idx, 2, 2);
    assert_eq!(&dst[0..2], &[5, 6]);
    assert_eq!(dst[2], 99); // padding column untouched
    assert_eq!(&dst[3..5], &[6, 5]);
  }
}
