// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// `FILTER_PRED`: a recursive 7-tap predictor produced one 4x2 tile at a
// time, where interior tiles read back pixels this same call already wrote.

use crate::bitdepth::{BitDepth, Pixel};
use crate::edgebuf::Edge;
use crate::tables::FILTER_INTRA_TAPS;
use crate::util::round2;

/// Read context sample `(r, c)` relative to the block's top-left corner,
/// where negative `r`/`c` fall back to the neighbor edge.
fn sample(dst: &[Pixel], stride: usize, edge: Edge, r: isize, c: isize) -> i32 {
  if r < 0 && c < 0 {
    edge.tl() as i32
  } else if r < 0 {
    edge.top((c + 1) as usize) as i32
  } else if c < 0 {
    edge.left((r + 1) as usize) as i32
  } else {
    dst[r as usize * stride + c as usize] as i32
  }
}

/// `FILTER_PRED`: supported for blocks up to 32x32 with `w` a multiple of 4
/// and `h` a multiple of 2. `filt_idx` selects one of the five filter sets.
pub fn ipred_filter(
  dst: &mut [Pixel],
  stride: usize,
  edge: Edge,
  w: usize,
  h: usize,
  filt_idx: usize,
  bd: BitDepth,
) {
  debug_assert!(filt_idx < FILTER_INTRA_TAPS.len());
  debug_assert!(w <= 32 && h <= 32);
  debug_assert!(w % 4 == 0 && h % 2 == 0);

  let taps = &FILTER_INTRA_TAPS[filt_idx];

  let mut ty = 0;
  while ty < h {
    let mut tx = 0;
    while tx < w {
      let p = [
        sample(dst, stride, edge, ty as isize - 1, tx as isize - 1),
        sample(dst, stride, edge, ty as isize - 1, tx as isize),
        sample(dst, stride, edge, ty as isize - 1, tx as isize + 1),
        sample(dst, stride, edge, ty as isize - 1, tx as isize + 2),
        sample(dst, stride, edge, ty as isize - 1, tx as isize + 3),
        sample(dst, stride, edge, ty as isize, tx as isize - 1),
        sample(dst, stride, edge, ty as isize + 1, tx as isize - 1),
      ];

      for pr in 0..2 {
        for pc in 0..4 {
          let row = &taps[pr * 4 + pc];
          let sum: i32 = row.iter().zip(p.iter()).map(|(&t, &pv)| t * pv).sum();
          dst[(ty + pr) * stride + tx + pc] = bd.clip(round2(sum, 4));
        }
      }

      tx += 4;
    }
    ty += 2;
  }
}
