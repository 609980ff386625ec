// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// End-to-end scenarios driven through the public dispatch table, rather
// than calling the per-family functions directly the way the unit tests
// colocated with each module do.

use av1_intra_pred::cfl::cfl_ac_extract;
use av1_intra_pred::dispatch::{ChromaLayout, Mode, TxSize};
use av1_intra_pred::{BitDepth, Dispatch, Edge};

fn make_edge(top: &[u16], left: &[u16], tl: u16) -> Vec<u16> {
  let mut data: Vec<u16> = left.iter().rev().copied().collect();
  data.push(tl);
  data.extend_from_slice(top);
  data
}

#[test]
fn scenario_1_dc_4x4() {
  let top = [10u16, 20, 30, 40];
  let left = [50u16, 60, 70, 80];
  let data = make_edge(&top, &left, 0);
  let edge = Edge::new(&data, left.len());

  let dispatch = Dispatch::init();
  let pred = dispatch.intra_pred(Mode::Dc);

  let mut dst = vec![0u16; 16];
  pred(&mut dst, 4, edge, 4, 4, 0, BitDepth::Eight);
  assert!(dst.iter().all(|&v| v == 45));
}

#[test]
fn scenario_2_dc_top_4x8() {
  let top = [4u16, 4, 4, 4];
  let left = [0u16; 8];
  let data = make_edge(&top, &left, 0);
  let edge = Edge::new(&data, left.len());

  let dispatch = Dispatch::init();
  let pred = dispatch.intra_pred(Mode::DcTop);

  let mut dst = vec![0u16; 4 * 8];
  pred(&mut dst, 4, edge, 4, 8, 0, BitDepth::Eight);
  assert!(dst.iter().all(|&v| v == 4));
}

#[test]
fn scenario_3_paeth_2x1() {
  let top = [5u16, 5];
  let left = [15u16];
  let data = make_edge(&top, &left, 10);
  let edge = Edge::new(&data, left.len());

  let dispatch = Dispatch::init();
  let pred = dispatch.intra_pred(Mode::Paeth);

  let mut dst = vec![0u16; 2];
  pred(&mut dst, 2, edge, 2, 1, 0, BitDepth::Eight);
  assert_eq!(dst[0], 15);
}

#[test]
fn scenario_4_vert_4x2() {
  let top = [1u16, 2, 3, 4];
  let left = [0u16; 2];
  let data = make_edge(&top, &left, 0);
  let edge = Edge::new(&data, left.len());

  let dispatch = Dispatch::init();
  let pred = dispatch.intra_pred(Mode::Vert);

  let mut dst = vec![0u16; 4 * 2];
  pred(&mut dst, 4, edge, 4, 2, 0, BitDepth::Eight);
  assert_eq!(&dst[0..4], &[1, 2, 3, 4]);
  assert_eq!(&dst[4..8], &[1, 2, 3, 4]);
}

#[test]
fn scenario_5_smooth_v_2x2() {
  let top = [100u16, 100];
  let left = [0u16, 0];
  let data = make_edge(&top, &left, 100);
  let edge = Edge::new(&data, left.len());

  let dispatch = Dispatch::init();
  let pred = dispatch.intra_pred(Mode::SmoothV);

  let mut dst = vec![0u16; 4];
  pred(&mut dst, 2, edge, 2, 2, 0, BitDepth::Eight);
  assert_eq!(dst, [100, 100, 50, 50]);
}

#[test]
fn scenario_6_palette_3x2() {
  let pal = [7u16, 9, 11];
  let idx = [0u8, 1, 2, 2, 1, 0];
  let mut dst = vec![0u16; 6];

  let dispatch = Dispatch::init();
  let pred = dispatch.pal_pred();
  pred(&mut dst, 3, &pal, &idx, 3, 2);
  assert_eq!(&dst[0..3], &[7, 9, 11]);
  assert_eq!(&dst[3..6], &[11, 9, 7]);
}

#[test]
fn dc_128_is_bit_depth_neutral_grey() {
  let dispatch = Dispatch::init();
  let pred = dispatch.intra_pred(Mode::Dc128);
  let empty = [0u16; 1];
  let edge = Edge::new(&empty, 0);

  let mut dst8 = vec![0u16; 16];
  pred(&mut dst8, 4, edge, 4, 4, 0, BitDepth::Eight);
  assert!(dst8.iter().all(|&v| v == 128));

  let mut dst12 = vec![0u16; 16];
  pred(&mut dst12, 4, edge, 4, 4, 0, BitDepth::Twelve);
  assert!(dst12.iter().all(|&v| v == 2048));
}

#[test]
fn cfl_zero_mean_round_trips_through_combine() {
  let layout = ChromaLayout::I420;
  let tx = TxSize::Tx16x16;
  let dispatch = Dispatch::init();
  let entry = dispatch.cfl_ac(layout, tx).expect("4:2:0 16x16 -> 8x8 chroma is hosted");
  assert_eq!((entry.cw, entry.ch), (8, 8));

  let luma: Vec<u16> = (0..16 * 16).map(|i| (i % 37) as u16 * 4).collect();
  let mut ac = vec![0i32; entry.cw * entry.ch];
  cfl_ac_extract(&mut ac, &luma, 16, entry.cw, entry.ch, entry.ss_hor, entry.ss_ver, 0, 0);

  // Zero-mean, per the DC-subtract step: the rounded mean over the region
  // is removed, leaving a residual within one unit of true zero-sum.
  let sum: i64 = ac.iter().map(|&v| v as i64).sum();
  assert!(sum.abs() <= (entry.cw * entry.ch) as i64);

  let mut dst = vec![64u16; entry.cw * entry.ch];
  let pred = dispatch.cfl_pred_1(entry.cw);
  pred(&mut dst, entry.cw, &ac, 0, entry.cw, entry.ch, BitDepth::Eight);
  assert!(dst.iter().all(|&v| v == 64));
}
