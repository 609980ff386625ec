// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

//! AV1 intra-prediction sample generation: the DC, orthogonal/smooth,
//! directional, recursive-filter, chroma-from-luma and palette predictors,
//! plus the dispatch table that binds modes, chroma layouts and transform
//! sizes to them. Every routine is a pure function over caller-supplied
//! buffers - no I/O, no allocation on the hot path besides the directional
//! predictors' edge-conditioning scratch.

pub mod bitdepth;
pub mod cfl;
pub mod dc;
pub mod directional;
pub mod dispatch;
pub mod edge;
pub mod edgebuf;
pub mod filter;
pub mod palette;
pub mod smooth;
pub mod tables;
pub mod util;

pub use bitdepth::{BitDepth, Pixel};
pub use dispatch::{ChromaLayout, Dispatch, Mode, TxSize};
pub use edgebuf::Edge;
