// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Chroma-from-luma: extracting a zero-mean AC map from the already-decoded
// luma plane, then combining it with a per-channel DC and alpha to predict
// chroma samples. One generic extractor covers every (ss_hor, ss_ver, cW,
// cH) combination the dispatch table binds it to, rather than fifteen
// hand-written variants.

use crate::bitdepth::{BitDepth, Pixel};
use crate::util::{ctz, signum};

/// Extract the zero-mean luma AC map for a `cw x ch` chroma block.
///
/// `luma` holds the co-located luma samples at full resolution (stride
/// `luma_stride`); `ss_hor`/`ss_ver` select how many luma samples each
/// chroma sample subsamples. `w_pad`/`h_pad` count the trailing chroma
/// columns/rows that lie outside the valid source area (frame-edge
/// partial blocks) and must be replicated from the last valid one.
pub fn cfl_ac_extract(
  ac: &mut [i32],
  luma: &[Pixel],
  luma_stride: usize,
  cw: usize,
  ch: usize,
  ss_hor: bool,
  ss_ver: bool,
  w_pad: usize,
  h_pad: usize,
) {
  debug_assert!(ac.len() >= cw * ch);
  debug_assert!(w_pad * 4 < cw && h_pad * 4 < ch);

  let shift = 3 - ss_hor as u32 - ss_ver as u32;
  let w_pad = w_pad * 4;
  let h_pad = h_pad * 4;
  let valid_w = cw - w_pad;
  let valid_h = ch - h_pad;

  for cy in 0..valid_h {
    let ly = cy << (ss_ver as usize);
    for cx in 0..valid_w {
      let lx = cx << (ss_hor as usize);
      let mut sum = luma[ly * luma_stride + lx] as i32;
      if ss_hor {
        sum += luma[ly * luma_stride + lx + 1] as i32;
      }
      if ss_ver {
        sum += luma[(ly + 1) * luma_stride + lx] as i32;
      }
      if ss_hor && ss_ver {
        sum += luma[(ly + 1) * luma_stride + lx + 1] as i32;
      }
      ac[cy * cw + cx] = sum << shift;
    }
  }

  // Horizontal pad: replicate the last valid column.
  if w_pad > 0 {
    for cy in 0..valid_h {
      let fill = ac[cy * cw + valid_w - 1];
      for cx in valid_w..cw {
        ac[cy * cw + cx] = fill;
      }
    }
  }

  // Vertical pad: replicate the last valid row (already horizontally padded).
  if h_pad > 0 {
    for cy in valid_h..ch {
      let (src, dst) = ac.split_at_mut(cy * cw);
      let src_row = &src[(valid_h - 1) * cw..(valid_h - 1) * cw + cw];
      dst[..cw].copy_from_slice(src_row);
    }
  }

  let log2sz = ctz(cw * ch);
  let mut total: i64 = 0;
  for &v in ac[..cw * ch].iter() {
    total += v as i64;
  }
  total += 1i64 << (log2sz - 1);
  let dc = (total >> log2sz) as i32;
  for v in ac[..cw * ch].iter_mut() {
    *v -= dc;
  }
}

/// `cfl_pred_1`: combine one channel's reconstructed DC (`dst[0,0]`, already
/// written by the caller) with the scaled AC map.
pub fn cfl_pred_1(dst: &mut [Pixel], stride: usize, ac: &[i32], alpha: i32, w: usize, h: usize, bd: BitDepth) {
  let dc = dst[0] as i32;
  for y in 0..h {
    for x in 0..w {
      let diff = alpha * ac[y * w + x];
      let rounded = signum(diff) * ((diff.abs() + 32) >> 6);
      dst[y * stride + x] = bd.clip(dc + rounded);
    }
  }
}

/// `cfl_pred`: apply [`cfl_pred_1`] independently to U and V.
pub fn cfl_pred(
  dst_u: &mut [Pixel],
  dst_v: &mut [Pixel],
  stride: usize,
  ac: &[i32],
  alphas: [i32; 2],
  w: usize,
  h: usize,
  bd: BitDepth,
) {
  cfl_pred_1(dst_u, stride, ac, alphas[0], w, h, bd);
  cfl_pred_1(dst_v, stride, ac, alphas[1], w, h, bd);
}
