// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// The orthogonal/smooth family: V, H, Paeth and the three Smooth variants.
// All six are fixed-pattern predictors with no fractional sampling, unlike
// the directional modes in `directional.rs`.

use crate::bitdepth::Pixel;
use crate::edgebuf::Edge;
use crate::tables::SM_WEIGHTS;
use crate::util::{abs, round2};

/// `VERT_PRED`: every row is a copy of the top neighbors.
pub fn ipred_v(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize) {
  for y in 0..h {
    for x in 0..w {
      dst[y * stride + x] = edge.top(1 + x);
    }
  }
}

/// `HOR_PRED`: every column is a copy of the left neighbors.
pub fn ipred_h(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize) {
  for y in 0..h {
    let v = edge.left(1 + y);
    dst[y * stride..y * stride + w].fill(v);
  }
}

/// `PAETH_PRED`: per-pixel choice among left, top and top-left, picking
/// whichever is closest to `left + top - top_left`.
pub fn ipred_paeth(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize) {
  let tl = edge.tl() as i32;
  for y in 0..h {
    let l = edge.left(1 + y) as i32;
    for x in 0..w {
      let t = edge.top(1 + x) as i32;
      let base = l + t - tl;

      let p_left = abs(l - base);
      let p_top = abs(t - base);
      let p_tl = abs(tl - base);

      let pred = if p_left <= p_top && p_left <= p_tl {
        l
      } else if p_top <= p_tl {
        t
      } else {
        tl
      };
      dst[y * stride + x] = pred as Pixel;
    }
  }
}

fn sm_row(n: usize) -> &'static [u8] {
  &SM_WEIGHTS[n..n + n]
}

/// `SMOOTH_PRED`: bilinear-like blend of all four edge directions,
/// weighted by per-axis AV1 smooth-weight tables.
pub fn ipred_smooth(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize) {
  let w_h = sm_row(w);
  let w_v = sm_row(h);
  let right = edge.top(w) as i32;
  let bottom = edge.left(h) as i32;

  for y in 0..h {
    let wv = w_v[y] as i32;
    let left = edge.left(1 + y) as i32;
    for x in 0..w {
      let wh = w_h[x] as i32;
      let top = edge.top(1 + x) as i32;

      let pred = wv * top + (256 - wv) * bottom + wh * left + (256 - wh) * right;
      dst[y * stride + x] = round2(pred, 9) as Pixel;
    }
  }
}

/// `SMOOTH_V_PRED`: only the vertical (top/bottom) pair of weights.
pub fn ipred_smooth_v(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize) {
  let w_v = sm_row(h);
  let bottom = edge.left(h) as i32;

  for y in 0..h {
    let wv = w_v[y] as i32;
    for x in 0..w {
      let top = edge.top(1 + x) as i32;
      let pred = wv * top + (256 - wv) * bottom;
      dst[y * stride + x] = round2(pred, 8) as Pixel;
    }
  }
}

/// `SMOOTH_H_PRED`: only the horizontal (left/right) pair of weights.
pub fn ipred_smooth_h(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize) {
  let w_h = sm_row(w);
  let right = edge.top(w) as i32;

  for y in 0..h {
    let left = edge.left(1 + y) as i32;
    for x in 0..w {
      let wh = w_h[x] as i32;
      let pred = wh * left + (256 - wh) * right;
      dst[y * stride + x] = round2(pred, 8) as Pixel;
    }
  }
}
