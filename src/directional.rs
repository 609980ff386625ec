// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// The directional predictors Z1/Z2/Z3: fractional-position sampling along
// one of 56 angles, with optional edge upsampling or smoothing first.

use crate::bitdepth::{BitDepth, Pixel};
use crate::edge::{filter_edge, filter_strength, upsample, upsample_edge};
use crate::edgebuf::Edge;
use crate::tables::DR_INTRA_DERIVATIVE;
use crate::util::{min, round2_i64};

/// A conditioned (raw, filtered or upsampled) edge segment, indexed by a
/// *local* coordinate that may run slightly negative - index 0 is always
/// the first real neighbor sample on that side, and -1 (when present) is
/// the top-left corner.
struct CondSide {
  data: Vec<i32>,
  zero: usize,
  upsampled: bool,
}

impl CondSide {
  fn at(&self, local: i64) -> i32 {
    self.data[(self.zero as i64 + local) as usize]
  }

  fn frac_bits(&self) -> u32 {
    if self.upsampled { 5 } else { 6 }
  }
}

/// Build a conditioned edge for one side (top or left), including the
/// corner sample at local index -1 so `Z2` can read slightly before 0.
fn condition_side(
  len: usize,
  corner: i32,
  sample: impl Fn(usize) -> i32,
  blk_wh: usize,
  d: i32,
  is_smooth: bool,
  bd: BitDepth,
) -> CondSide {
  let mut raw = Vec::with_capacity(len + 1);
  raw.push(corner);
  for i in 0..len {
    raw.push(sample(i));
  }

  if upsample(blk_wh, d, is_smooth) {
    let hsz = raw.len();
    let mut out = vec![0i32; 2 * hsz - 1];
    upsample_edge(&mut out, hsz, &raw, -1, (len) as isize, bd);
    CondSide { data: out, zero: 2, upsampled: true }
  } else {
    let strength = filter_strength(blk_wh, d, is_smooth);
    if strength != 0 {
      let mut out = vec![0i32; raw.len()];
      filter_edge(&mut out, raw.len(), &raw, -1, len as isize, strength);
      CondSide { data: out, zero: 1, upsampled: false }
    } else {
      CondSide { data: raw, zero: 1, upsampled: false }
    }
  }
}

/// `Z1_PRED` (0 < angle < 90): purely from the top edge.
pub fn ipred_z1(
  dst: &mut [Pixel],
  stride: usize,
  edge: Edge,
  w: usize,
  h: usize,
  angle: u16,
  is_smooth: bool,
  bd: BitDepth,
) {
  debug_assert!(0 < angle && angle < 90);
  let blk_wh = w + h;
  let d = (angle as i32 - 90).abs();
  let upsampled = upsample(blk_wh, d, is_smooth);

  let raw_len = if upsampled {
    blk_wh
  } else if filter_strength(blk_wh, d, is_smooth) != 0 {
    blk_wh
  } else {
    w + min(w, h)
  };

  let side = condition_side(
    blk_wh,
    edge.tl() as i32,
    |i| edge.top(1 + i) as i32,
    blk_wh,
    d,
    is_smooth,
    bd,
  );

  let max_base_x: i64 = if upsampled {
    2 * blk_wh as i64 - 2
  } else {
    raw_len as i64 - 1
  };

  let dx = DR_INTRA_DERIVATIVE[angle as usize] as i64;
  let inc: i64 = if side.upsampled { 2 } else { 1 };
  let frac_bits = side.frac_bits();

  for y in 0..h {
    let xpos = (y as i64 + 1) * dx;
    let base0 = xpos >> frac_bits;
    let frac = ((xpos << (side.upsampled as i64)) & 0x3F) >> 1;

    for x in 0..w {
      let base = base0 + x as i64 * inc;
      if base < max_base_x {
        let raw = side.at(base) as i64 * (32 - frac) + side.at(base + 1) as i64 * frac;
        dst[y * stride + x] = bd.clip(round2_i64(raw, 5) as i32);
      } else {
        let fill = bd.clip(side.at(max_base_x));
        for xf in x..w {
          dst[y * stride + xf] = fill;
        }
        break;
      }
    }
  }
}

/// `Z3_PRED` (180 < angle): purely from the left edge, symmetric to Z1.
pub fn ipred_z3(
  dst: &mut [Pixel],
  stride: usize,
  edge: Edge,
  w: usize,
  h: usize,
  angle: u16,
  is_smooth: bool,
  bd: BitDepth,
) {
  debug_assert!(angle > 180);
  let blk_wh = w + h;
  let d = (angle as i32 - 180).abs();
  let upsampled = upsample(blk_wh, d, is_smooth);

  let raw_len = if upsampled {
    blk_wh
  } else if filter_strength(blk_wh, d, is_smooth) != 0 {
    blk_wh
  } else {
    h + min(w, h)
  };

  let side = condition_side(
    blk_wh,
    edge.tl() as i32,
    |i| edge.left(1 + i) as i32,
    blk_wh,
    d,
    is_smooth,
    bd,
  );

  let max_base_y: i64 = if upsampled {
    2 * blk_wh as i64 - 2
  } else {
    raw_len as i64 - 1
  };

  let dy = DR_INTRA_DERIVATIVE[(angle - 180) as usize] as i64;
  let inc: i64 = if side.upsampled { 2 } else { 1 };
  let frac_bits = side.frac_bits();

  for x in 0..w {
    let ypos = (x as i64 + 1) * dy;
    let base0 = ypos >> frac_bits;
    let frac = ((ypos << (side.upsampled as i64)) & 0x3F) >> 1;

    for y in 0..h {
      let base = base0 + y as i64 * inc;
      if base < max_base_y {
        let raw = side.at(base) as i64 * (32 - frac) + side.at(base + 1) as i64 * frac;
        dst[y * stride + x] = bd.clip(round2_i64(raw, 5) as i32);
      } else {
        let fill = bd.clip(side.at(max_base_y));
        for yf in y..h {
          dst[yf * stride + x] = fill;
        }
        break;
      }
    }
  }
}

/// `Z2_PRED` (90 < angle < 180): reads from both edges, falling over from
/// the top side to the left side partway across each row.
pub fn ipred_z2(
  dst: &mut [Pixel],
  stride: usize,
  edge: Edge,
  w: usize,
  h: usize,
  angle: u16,
  is_smooth: bool,
  bd: BitDepth,
) {
  debug_assert!(angle > 90 && angle < 180);
  let blk_wh = w + h;

  let d_above = (angle as i32 - 90).abs();
  let d_left = (angle as i32 - 180).abs();

  let top_side = condition_side(
    blk_wh,
    edge.tl() as i32,
    |i| edge.top(1 + i) as i32,
    blk_wh,
    d_above,
    is_smooth,
    bd,
  );
  let left_side = condition_side(
    blk_wh,
    edge.tl() as i32,
    |i| edge.left(1 + i) as i32,
    blk_wh,
    d_left,
    is_smooth,
    bd,
  );

  let dy = DR_INTRA_DERIVATIVE[(angle - 90) as usize] as i64;
  let dx = DR_INTRA_DERIVATIVE[(180 - angle) as usize] as i64;

  let frac_bits_x = top_side.frac_bits();
  let frac_bits_y = left_side.frac_bits();
  let min_base_x: i64 = -(1i64 << (top_side.upsampled as i64));

  for i in 0..h {
    for j in 0..w {
      let idx = ((j as i64) << 6) - (i as i64 + 1) * dx;
      let base_x = idx >> frac_bits_x;

      let raw: i64 = if base_x >= min_base_x {
        let shift = ((idx << (top_side.upsampled as i64)) & 0x3F) >> 1;
        top_side.at(base_x) as i64 * (32 - shift) + top_side.at(base_x + 1) as i64 * shift
      } else {
        let idy = ((i as i64) << 6) - (j as i64 + 1) * dy;
        let base_y = idy >> frac_bits_y;
        let shift = ((idy << (left_side.upsampled as i64)) & 0x3F) >> 1;
        left_side.at(base_y) as i64 * (32 - shift) + left_side.at(base_y + 1) as i64 * shift
      };

      dst[i * stride + j] = bd.clip(round2_i64(raw, 5) as i32);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make_edge(top: &[Pixel], left: &[Pixel], tl: Pixel) -> Vec<Pixel> {
    let mut data: Vec<Pixel> = left.iter().rev().copied().collect();
    data.push(tl);
    data.extend_from_slice(top);
    data
  }

  #[test]
  fn z1_flat_top_yields_flat_block() {
    let top = [50u16; 16];
    let left = [50u16; 8];
    let data = make_edge(&top, &left, 50);
    let edge = Edge::new(&data, left.len());

    let mut dst = vec![0u16; 8 * 8];
    ipred_z1(&mut dst, 8, edge, 8, 8, 45, false, BitDepth::Eight);
    assert!(dst.iter().all(|&v| v == 50));
  }

  #[test]
  fn z1_output_in_range() {
    let top: Vec<Pixel> = (0..16).map(|i| (i * 16) as Pixel).collect();
    let left = [10u16; 8];
    let data = make_edge(&top, &left, 5);
    let edge = Edge::new(&data, left.len());

    let mut dst = vec![0u16; 8 * 8];
    for &angle in &[3u16, 30, 60, 87] {
      ipred_z1(&mut dst, 8, edge, 8, 8, angle, false, BitDepth::Eight);
      assert!(dst.iter().all(|&v| v <= 255));
    }
  }

  #[test]
  fn z3_flat_left_yields_flat_block() {
    let top = [30u16; 8];
    let left = [30u16; 16];
    let data = make_edge(&top, &left, 30);
    let edge = Edge::new(&data, left.len());

    let mut dst = vec![0u16; 8 * 8];
    ipred_z3(&mut dst, 8, edge, 8, 8, 203, false, BitDepth::Eight);
    assert!(dst.iter().all(|&v| v == 30));
  }

  #[test]
  fn z2_flat_neighbors_yields_flat_block() {
    let top = [70u16; 16];
    let left = [70u16; 16];
    let data = make_edge(&top, &left, 70);
    let edge = Edge::new(&data, left.len());

    let mut dst = vec![0u16; 8 * 8];
    ipred_z2(&mut dst, 8, edge, 8, 8, 135, false, BitDepth::Eight);
    assert!(dst.iter().all(|&v| v == 70));
  }

  #[test]
  fn z2_output_in_range_for_several_angles() {
    let top: Vec<Pixel> = (0..16).map(|i| (i * 16) as Pixel).collect();
    let left: Vec<Pixel> = (0..16).map(|i| (255 - i * 16) as Pixel).collect();
    let data = make_edge(&top, &left, 128);
    let edge = Edge::new(&data, left.len());

    let mut dst = vec![0u16; 8 * 8];
    for &angle in &[93u16, 113, 135, 157, 176] {
      ipred_z2(&mut dst, 8, edge, 8, 8, angle, false, BitDepth::Eight);
      assert!(dst.iter().all(|&v| v <= 255));
    }
  }
}
