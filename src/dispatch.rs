// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// The single registration point: binds intra prediction modes, chroma
// subsampling layouts and transform sizes to the generic routines in the
// sibling modules, once, at decoder startup.

use crate::bitdepth::{BitDepth, Pixel};
use crate::cfl::{cfl_pred, cfl_pred_1};
use crate::dc::{ipred_dc, ipred_dc_128, ipred_dc_left, ipred_dc_top};
use crate::directional::{ipred_z1, ipred_z2, ipred_z3};
use crate::edgebuf::Edge;
use crate::filter::ipred_filter;
use crate::palette::pal_pred;
use crate::smooth::{ipred_h, ipred_paeth, ipred_smooth, ipred_smooth_h, ipred_smooth_v, ipred_v};

pub const ANGLE_MASK: u16 = 0x1ff;
pub const SMOOTH_BIT: u16 = 1 << 9;

/// One of the fourteen intra prediction modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
  Dc,
  Dc128,
  DcTop,
  DcLeft,
  Hor,
  Vert,
  Paeth,
  Smooth,
  SmoothV,
  SmoothH,
  Z1,
  Z2,
  Z3,
  Filter,
}

pub const ALL_MODES: [Mode; 14] = [
  Mode::Dc,
  Mode::Dc128,
  Mode::DcTop,
  Mode::DcLeft,
  Mode::Hor,
  Mode::Vert,
  Mode::Paeth,
  Mode::Smooth,
  Mode::SmoothV,
  Mode::SmoothH,
  Mode::Z1,
  Mode::Z2,
  Mode::Z3,
  Mode::Filter,
];

/// A uniform predictor signature: every mode is reachable through this one
/// function pointer type, with `param` carrying the angle word (ignored by
/// modes that don't need it).
pub type PredFn = fn(&mut [Pixel], usize, Edge, usize, usize, u16, BitDepth);

fn wrap_dc(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize, _p: u16, bd: BitDepth) {
  ipred_dc(dst, stride, edge, w, h, bd);
}
fn wrap_dc128(dst: &mut [Pixel], stride: usize, _edge: Edge, w: usize, h: usize, _p: u16, bd: BitDepth) {
  ipred_dc_128(dst, stride, w, h, bd);
}
fn wrap_dc_top(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize, _p: u16, bd: BitDepth) {
  ipred_dc_top(dst, stride, edge, w, h, bd);
}
fn wrap_dc_left(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize, _p: u16, bd: BitDepth) {
  ipred_dc_left(dst, stride, edge, w, h, bd);
}
fn wrap_hor(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize, _p: u16, _bd: BitDepth) {
  ipred_h(dst, stride, edge, w, h);
}
fn wrap_vert(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize, _p: u16, _bd: BitDepth) {
  ipred_v(dst, stride, edge, w, h);
}
fn wrap_paeth(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize, _p: u16, _bd: BitDepth) {
  ipred_paeth(dst, stride, edge, w, h);
}
fn wrap_smooth(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize, _p: u16, _bd: BitDepth) {
  ipred_smooth(dst, stride, edge, w, h);
}
fn wrap_smooth_v(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize, _p: u16, _bd: BitDepth) {
  ipred_smooth_v(dst, stride, edge, w, h);
}
fn wrap_smooth_h(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize, _p: u16, _bd: BitDepth) {
  ipred_smooth_h(dst, stride, edge, w, h);
}
fn wrap_z1(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize, param: u16, bd: BitDepth) {
  ipred_z1(dst, stride, edge, w, h, param & ANGLE_MASK, param & SMOOTH_BIT != 0, bd);
}
fn wrap_z2(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize, param: u16, bd: BitDepth) {
  ipred_z2(dst, stride, edge, w, h, param & ANGLE_MASK, param & SMOOTH_BIT != 0, bd);
}
fn wrap_z3(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize, param: u16, bd: BitDepth) {
  ipred_z3(dst, stride, edge, w, h, param & ANGLE_MASK, param & SMOOTH_BIT != 0, bd);
}
fn wrap_filter(dst: &mut [Pixel], stride: usize, edge: Edge, w: usize, h: usize, param: u16, bd: BitDepth) {
  ipred_filter(dst, stride, edge, w, h, (param & ANGLE_MASK) as usize, bd);
}

/// The three chroma subsampling layouts CfL extraction supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChromaLayout {
  I420,
  I422,
  I444,
}

/// A luma transform size capable of hosting a CfL extractor, capped at
/// 32 samples on a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxSize {
  Tx4x4,
  Tx8x8,
  Tx16x16,
  Tx32x32,
  Tx4x8,
  Tx8x4,
  Tx8x16,
  Tx16x8,
  Tx16x32,
  Tx32x16,
  Tx4x16,
  Tx16x4,
  Tx8x32,
  Tx32x8,
}

/// A bound chroma-from-luma extractor: the concrete chroma dimensions and
/// subsampling flags a `(layout, tx)` pair resolves to, ready to hand to
/// [`crate::cfl::cfl_ac_extract`].
#[derive(Clone, Copy, Debug)]
pub struct CflAcEntry {
  pub cw: usize,
  pub ch: usize,
  pub ss_hor: bool,
  pub ss_ver: bool,
}

/// The `(layout, tx)` pairs that actually host a CfL extractor.
///
/// Chroma block validity is not just "at least 4 samples on a side": the
/// resulting chroma shape must also be one AV1 recognizes as a transform
/// size, which caps the longer side at 4x the shorter one. Subsampling a
/// luma block whose aspect ratio is already at that cap in the direction
/// that ISN'T subsampled pushes the chroma shape past it - e.g. an 8x32
/// luma block under 4:2:2 (horizontal-only subsampling) would need a 4x32
/// chroma transform, which doesn't exist. That single combination is the
/// one exclusion beyond the plain "cw, ch >= 4" cutoff.
const CFL_AC_TABLE: [(ChromaLayout, TxSize, CflAcEntry); 33] = {
  const fn e(cw: usize, ch: usize, ss_hor: bool, ss_ver: bool) -> CflAcEntry {
    CflAcEntry { cw, ch, ss_hor, ss_ver }
  }
  use ChromaLayout::{I420, I422, I444};
  use TxSize::*;
  [
    // 4:2:0 - both axes subsampled (9 entries).
    (I420, Tx8x8, e(4, 4, true, true)),
    (I420, Tx16x16, e(8, 8, true, true)),
    (I420, Tx32x32, e(16, 16, true, true)),
    (I420, Tx8x16, e(4, 8, true, true)),
    (I420, Tx16x8, e(8, 4, true, true)),
    (I420, Tx16x32, e(8, 16, true, true)),
    (I420, Tx32x16, e(16, 8, true, true)),
    (I420, Tx8x32, e(4, 16, true, true)),
    (I420, Tx32x8, e(16, 4, true, true)),
    // 4:2:2 - horizontal subsampling only (10 entries; Tx8x32 excluded,
    // see the doc comment above).
    (I422, Tx8x8, e(4, 8, true, false)),
    (I422, Tx16x16, e(8, 16, true, false)),
    (I422, Tx32x32, e(16, 32, true, false)),
    (I422, Tx8x4, e(4, 4, true, false)),
    (I422, Tx8x16, e(4, 16, true, false)),
    (I422, Tx16x8, e(8, 8, true, false)),
    (I422, Tx16x32, e(8, 32, true, false)),
    (I422, Tx32x16, e(16, 16, true, false)),
    (I422, Tx16x4, e(8, 4, true, false)),
    (I422, Tx32x8, e(16, 8, true, false)),
    // 4:4:4 - no subsampling, every tx size is its own chroma shape (14
    // entries).
    (I444, Tx4x4, e(4, 4, false, false)),
    (I444, Tx8x8, e(8, 8, false, false)),
    (I444, Tx16x16, e(16, 16, false, false)),
    (I444, Tx32x32, e(32, 32, false, false)),
    (I444, Tx4x8, e(4, 8, false, false)),
    (I444, Tx8x4, e(8, 4, false, false)),
    (I444, Tx8x16, e(8, 16, false, false)),
    (I444, Tx16x8, e(16, 8, false, false)),
    (I444, Tx16x32, e(16, 32, false, false)),
    (I444, Tx32x16, e(32, 16, false, false)),
    (I444, Tx4x16, e(4, 16, false, false)),
    (I444, Tx16x4, e(16, 4, false, false)),
    (I444, Tx8x32, e(8, 32, false, false)),
    (I444, Tx32x8, e(32, 8, false, false)),
  ]
};

fn w_bucket(w: usize) -> usize {
  debug_assert!(matches!(w, 4 | 8 | 16 | 32));
  (w / 4).trailing_zeros() as usize
}

pub type CflPred1Fn = fn(&mut [Pixel], usize, &[i32], i32, usize, usize, BitDepth);
pub type CflPredFn = fn(&mut [Pixel], &mut [Pixel], usize, &[i32], [i32; 2], usize, usize, BitDepth);
pub type PalPredFn = fn(&mut [Pixel], usize, &[Pixel], &[u8], usize, usize);

/// The populated dispatch context. One instance is built at startup and
/// then only read.
pub struct Dispatch {
  intra_pred: [PredFn; ALL_MODES.len()],
  cfl_pred_1: [CflPred1Fn; 4],
  cfl_pred: [CflPredFn; 4],
  pal_pred: PalPredFn,
}

impl Dispatch {
  /// Populate the dispatch context. Call once per bit-depth build, before
  /// any prediction call.
  pub fn init() -> Self {
    log::debug!("initializing intra prediction dispatch table");
    let intra_pred = [
      wrap_dc, wrap_dc128, wrap_dc_top, wrap_dc_left, wrap_hor, wrap_vert, wrap_paeth, wrap_smooth,
      wrap_smooth_v, wrap_smooth_h, wrap_z1, wrap_z2, wrap_z3, wrap_filter,
    ];

    Self { intra_pred, cfl_pred_1: [cfl_pred_1; 4], cfl_pred: [cfl_pred; 4], pal_pred }
  }

  pub fn intra_pred(&self, mode: Mode) -> PredFn {
    log::trace!("dispatch lookup: intra_pred[{mode:?}]");
    self.intra_pred[mode as usize]
  }

  pub fn cfl_ac(&self, layout: ChromaLayout, tx: TxSize) -> Option<CflAcEntry> {
    log::trace!("dispatch lookup: cfl_ac[{layout:?}][{tx:?}]");
    CFL_AC_TABLE.iter().find(|(l, t, _)| *l == layout && *t == tx).map(|(_, _, e)| *e)
  }

  pub fn cfl_pred_1(&self, w: usize) -> CflPred1Fn {
    log::trace!("dispatch lookup: cfl_pred_1[w={w}]");
    self.cfl_pred_1[w_bucket(w)]
  }

  pub fn cfl_pred(&self, w: usize) -> CflPredFn {
    log::trace!("dispatch lookup: cfl_pred[w={w}]");
    self.cfl_pred[w_bucket(w)]
  }

  pub fn pal_pred(&self) -> PalPredFn {
    log::trace!("dispatch lookup: pal_pred");
    self.pal_pred
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn intra_pred_table_covers_every_mode() {
    let d = Dispatch::init();
    for &mode in &ALL_MODES {
      let _ = d.intra_pred(mode);
    }
  }

  #[test]
  fn cfl_ac_i420_halves_both_dimensions() {
    let d = Dispatch::init();
    let entry = d.cfl_ac(ChromaLayout::I420, TxSize::Tx16x16).unwrap();
    assert_eq!((entry.cw, entry.ch), (8, 8));
    assert_eq!((entry.ss_hor, entry.ss_ver), (true, true));
  }

  #[test]
  fn cfl_ac_i444_keeps_full_resolution() {
    let d = Dispatch::init();
    let entry = d.cfl_ac(ChromaLayout::I444, TxSize::Tx8x16).unwrap();
    assert_eq!((entry.cw, entry.ch), (8, 16));
    assert_eq!((entry.ss_hor, entry.ss_ver), (false, false));
  }

  #[test]
  fn cfl_ac_omits_combos_that_shrink_below_four() {
    let d = Dispatch::init();
    assert!(d.cfl_ac(ChromaLayout::I420, TxSize::Tx4x4).is_none());
    assert!(d.cfl_ac(ChromaLayout::I420, TxSize::Tx4x8).is_none());
  }

  #[test]
  fn cfl_ac_omits_shape_with_no_matching_transform_size() {
    // 8x32 luma under 4:2:2 would need a 4x32 chroma block, which isn't a
    // transform size AV1 has, even though both sides are >= 4.
    let d = Dispatch::init();
    assert!(d.cfl_ac(ChromaLayout::I422, TxSize::Tx8x32).is_none());
  }

  #[test]
  fn cfl_pred_1_is_reachable_through_dispatch() {
    let d = Dispatch::init();
    let pred = d.cfl_pred_1(4);
    let mut dst = vec![50u16; 16];
    let ac = vec![0i32; 16];
    pred(&mut dst, 4, &ac, 7, 4, 4, BitDepth::Eight);
    assert!(dst.iter().all(|&v| v == 50));
  }

  #[test]
  fn cfl_pred_is_reachable_through_dispatch() {
    let d = Dispatch::init();
    let pred = d.cfl_pred(8);
    let mut dst_u = vec![20u16; 64];
    let mut dst_v = vec![20u16; 64];
    let ac = vec![0i32; 64];
    pred(&mut dst_u, &mut dst_v, 8, &ac, [3, -3], 8, 8, BitDepth::Eight);
    assert!(dst_u.iter().all(|&v| v == 20));
    assert!(dst_v.iter().all(|&v| v == 20));
  }

  #[test]
  fn pal_pred_is_reachable_through_dispatch() {
    let d = Dispatch::init();
    let pred = d.pal_pred();
    let pal = [1u16, 2, 3];
    let idx = [0u8, 1, 2];
    let mut dst = vec![0u16; 3];
    pred(&mut dst, 3, &pal, &idx, 3, 1);
    assert_eq!(dst, [1, 2, 3]);
  }
}
