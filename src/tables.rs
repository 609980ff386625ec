// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Constant lookup tables from the AV1 reference decoder, transcribed once
// here rather than regenerated on the fly: plain `pub const` arrays, no
// runtime computation.

/// Q6 step size per angle, indexed directly by the angle (0..90). Only
/// multiples of 3 are populated since AV1 angle deltas always land on a
/// multiple of 3 degrees from the nearest cardinal; other entries are
/// never read and are zero.
pub const DR_INTRA_DERIVATIVE: [u16; 90] = [
  0, 0, 0, 1023, 0, 0, 547, 0, 0, 372, 0, 0, 273, 0, 0, 215, 0, 0, 178, 0, 0, 151, 0, 0, 132, 0, 0,
  116, 0, 0, 102, 0, 0, 90, 0, 0, 80, 0, 0, 71, 0, 0, 64, 0, 0, 57, 0, 0, 51, 0, 0, 45, 0, 0, 40,
  0, 0, 35, 0, 0, 31, 0, 0, 27, 0, 0, 23, 0, 0, 19, 0, 0, 15, 0, 0, 11, 0, 0, 7, 0, 0, 6, 0, 0, 3,
  0, 0, 1, 0, 0,
];

/// Smooth-predictor weights, flattened so that the weight row for block
/// size N starts at flat index N: `&SM_WEIGHTS[n .. n + n]` is the row for
/// a block of size `n`. Sizes 4, 8, 16, 32 and 64 are populated; smaller
/// entries exist only so the larger rows land at the right offset.
pub const SM_WEIGHTS: [u8; 128] = [
  0, 0, 255, 128, 255, 149, 85, 64, 255, 197, 146, 105, 73, 50, 37, 32, 255, 225, 196, 170, 145,
  123, 102, 84, 68, 54, 43, 33, 26, 20, 17, 16, 255, 240, 225, 210, 196, 182, 169, 157, 145, 133,
  122, 111, 101, 92, 83, 74, 66, 59, 52, 45, 39, 34, 29, 25, 21, 17, 14, 12, 10, 9, 8, 8, 255,
  248, 240, 233, 225, 218, 210, 203, 196, 189, 182, 176, 169, 163, 156, 150, 144, 138, 133, 127,
  121, 116, 111, 106, 101, 96, 91, 86, 82, 77, 73, 69, 65, 61, 57, 54, 50, 47, 44, 41, 38, 35, 32,
  29, 27, 25, 22, 20, 18, 16, 15, 13, 12, 10, 9, 8, 7, 6, 6, 5, 5, 4, 4, 4,
];

/// Weights for the 5-tap edge smoothing filter, keyed by strength 1..=3.
pub const INTRA_EDGE_KERNEL: [[i32; 5]; 3] = [
  [0, 4, 8, 4, 0],
  [0, 5, 6, 5, 0],
  [2, 4, 4, 4, 2],
];

/// 4-tap kernel used by `upsample_edge` at odd output positions.
pub const UPSAMPLE_KERNEL: [i32; 4] = [-1, 9, 9, -1];

/// `filter_strength` lookup: outer index is `is_smooth`, then a row per
/// `blk_wh` partition ({<=8, <=12, <=16, <=24, <=32, else}), each holding
/// the four `d` thresholds read as "first threshold whose row the delta
/// falls under, strength = row index + 1, else 0".
///
/// Represented as `(max_d, strength)` pairs per partition; the first pair
/// whose `max_d` is not exceeded wins, with an implicit trailing
/// `strength = 0` for d beyond the largest threshold.
pub const FILTER_STRENGTH_TABLE: [[(i32, u8); 4]; 6] = [
  // is_smooth = 0
  [(0, 0), (2, 1), (4, 2), (i32::MAX, 0)],
  [(0, 0), (4, 1), (8, 2), (i32::MAX, 0)],
  [(0, 0), (4, 1), (8, 2), (i32::MAX, 3)],
  [(0, 0), (4, 2), (8, 3), (i32::MAX, 3)],
  [(0, 0), (4, 3), (8, 3), (i32::MAX, 3)],
  [(0, 0), (4, 3), (8, 3), (i32::MAX, 3)],
];

pub const FILTER_STRENGTH_TABLE_SMOOTH: [[(i32, u8); 4]; 6] = [
  [(0, 0), (1, 1), (2, 2), (i32::MAX, 3)],
  [(0, 0), (4, 1), (8, 2), (i32::MAX, 3)],
  [(0, 0), (4, 2), (8, 3), (i32::MAX, 3)],
  [(0, 0), (4, 3), (8, 3), (i32::MAX, 3)],
  [(0, 0), (4, 3), (8, 3), (i32::MAX, 3)],
  [(0, 0), (4, 3), (8, 3), (i32::MAX, 3)],
];

/// Row index into the strength tables above for a given `blk_wh = W + H`.
pub fn blk_wh_partition(blk_wh: usize) -> usize {
  match blk_wh {
    0..=8 => 0,
    9..=12 => 1,
    13..=16 => 2,
    17..=24 => 3,
    25..=32 => 4,
    _ => 5,
  }
}

/// Seven-tap recursive filter-intra taps: `FILTER_INTRA_TAPS[mode][p][k]`,
/// mode in 0..5 (one per `FILTER_PRED` sub-mode), p in 0..8 (position in
/// the 2-row x 4-col output tile, row-major), k in 0..7 (context sample
/// index: TL, top[0..3], left[0..1] for the first row; the two rows share
/// the same context for both output rows of the tile).
pub const FILTER_INTRA_TAPS: [[[i32; 7]; 8]; 5] = [
  [
    [-6, 10, 0, 0, 0, 12, 0],
    [-5, 2, 10, 0, 0, 9, 0],
    [-3, 1, 1, 10, 0, 7, 0],
    [-3, 1, 1, 2, 10, 5, 0],
    [-4, 6, 0, 0, 0, 2, 12],
    [-3, 2, 6, 0, 0, 4, 7],
    [-3, 2, 2, 6, 0, 4, 5],
    [-3, 1, 2, 2, 6, 3, 5],
  ],
  [
    [-10, 16, 0, 0, 0, 10, 0],
    [-6, 0, 16, 0, 0, 6, 0],
    [-4, 0, 0, 16, 0, 4, 0],
    [-2, 0, 0, 0, 16, 2, 0],
    [-10, 16, 0, 0, 0, 0, 10],
    [-6, 0, 16, 0, 0, 0, 6],
    [-4, 0, 0, 16, 0, 0, 4],
    [-2, 0, 0, 0, 16, 0, 2],
  ],
  [
    [-8, 8, 0, 0, 0, 16, 0],
    [-8, 0, 8, 0, 0, 16, 0],
    [-8, 0, 0, 8, 0, 16, 0],
    [-8, 0, 0, 0, 8, 16, 0],
    [-4, 4, 0, 0, 0, 0, 16],
    [-4, 0, 4, 0, 0, 0, 16],
    [-4, 0, 0, 4, 0, 0, 16],
    [-4, 0, 0, 0, 4, 0, 16],
  ],
  [
    [-2, 8, 0, 0, 0, 10, 0],
    [-1, 3, 8, 0, 0, 6, 0],
    [-1, 2, 3, 8, 0, 4, 0],
    [0, 1, 2, 3, 8, 2, 0],
    [-1, 4, 0, 0, 0, 3, 10],
    [-1, 3, 4, 0, 0, 4, 6],
    [-1, 2, 3, 4, 0, 4, 4],
    [-1, 2, 2, 3, 4, 3, 3],
  ],
  [
    [-12, 14, 0, 0, 0, 14, 0],
    [-10, 0, 14, 0, 0, 12, 0],
    [-9, 0, 0, 14, 0, 11, 0],
    [-8, 0, 0, 0, 14, 10, 0],
    [-10, 12, 0, 0, 0, 0, 14],
    [-9, 1, 12, 0, 0, 0, 12],
    [-8, 0, 0, 12, 0, 1, 11],
    [-7, 0, 0, 1, 12, 1, 9],
  ],
];
