// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Small CLI driver: builds one block's neighbor edge from the command
// line, runs a single predictor through the dispatch table, and prints the
// resulting block as a grid of samples. Useful for poking at a mode by
// hand without a full decoder around it.

use std::fmt;

use av1_intra_pred::dispatch::{Mode, SMOOTH_BIT};
use av1_intra_pred::{BitDepth, Dispatch, Edge};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Run one AV1 intra predictor over a hand-specified neighbor edge")]
struct Args {
  /// Block width in samples.
  #[arg(long, default_value_t = 4)]
  width: usize,

  /// Block height in samples.
  #[arg(long, default_value_t = 4)]
  height: usize,

  /// Prediction mode: dc, dc128, dctop, dcleft, hor, vert, paeth, smooth,
  /// smoothv, smoothh, z1, z2, z3, filter.
  #[arg(long)]
  mode: String,

  /// Angle (Z1/Z2/Z3) or filter-set index (filter); ignored otherwise.
  #[arg(long, default_value_t = 0)]
  angle: u16,

  /// Treat the neighbor edge as "smooth", affecting edge conditioning.
  #[arg(long, default_value_t = false)]
  smooth_edge: bool,

  /// Bit depth: 8, 10 or 12.
  #[arg(long, default_value_t = 8)]
  bit_depth: u32,

  /// Top-left corner sample.
  #[arg(long)]
  tl: u16,

  /// Comma-separated top-row neighbor samples, left to right.
  #[arg(long)]
  top: String,

  /// Comma-separated left-column neighbor samples, top to bottom.
  #[arg(long)]
  left: String,
}

#[derive(Debug)]
enum DemoError {
  UnknownMode(String),
  BadBitDepth(u32),
  BadSampleList { field: &'static str, value: String },
}

impl fmt::Display for DemoError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DemoError::UnknownMode(m) => write!(f, "unknown mode: {m}"),
      DemoError::BadBitDepth(bd) => write!(f, "unsupported bit depth: {bd}"),
      DemoError::BadSampleList { field, value } => {
        write!(f, "could not parse --{field} sample list: {value:?}")
      }
    }
  }
}

impl std::error::Error for DemoError {}

fn parse_mode(s: &str) -> Result<Mode, DemoError> {
  match s {
    "dc" => Ok(Mode::Dc),
    "dc128" => Ok(Mode::Dc128),
    "dctop" => Ok(Mode::DcTop),
    "dcleft" => Ok(Mode::DcLeft),
    "hor" => Ok(Mode::Hor),
    "vert" => Ok(Mode::Vert),
    "paeth" => Ok(Mode::Paeth),
    "smooth" => Ok(Mode::Smooth),
    "smoothv" => Ok(Mode::SmoothV),
    "smoothh" => Ok(Mode::SmoothH),
    "z1" => Ok(Mode::Z1),
    "z2" => Ok(Mode::Z2),
    "z3" => Ok(Mode::Z3),
    "filter" => Ok(Mode::Filter),
    other => Err(DemoError::UnknownMode(other.to_string())),
  }
}

fn parse_samples(field: &'static str, s: &str) -> Result<Vec<u16>, DemoError> {
  s.split(',')
    .map(|v| v.trim().parse::<u16>())
    .collect::<Result<Vec<_>, _>>()
    .map_err(|_| DemoError::BadSampleList { field, value: s.to_string() })
}

fn bit_depth_from(value: u32) -> Result<BitDepth, DemoError> {
  match value {
    8 => Ok(BitDepth::Eight),
    10 => Ok(BitDepth::Ten),
    12 => Ok(BitDepth::Twelve),
    other => Err(DemoError::BadBitDepth(other)),
  }
}

fn run(args: Args) -> Result<(), DemoError> {
  let mode = parse_mode(&args.mode)?;
  let bd = bit_depth_from(args.bit_depth)?;
  let top = parse_samples("top", &args.top)?;
  let left = parse_samples("left", &args.left)?;

  log::info!(
    "predicting {}x{} block, mode={:?}, angle={}, bit_depth={}",
    args.width,
    args.height,
    mode,
    args.angle,
    args.bit_depth
  );

  let mut edge_data: Vec<u16> = left.iter().rev().copied().collect();
  edge_data.push(args.tl);
  edge_data.extend_from_slice(&top);
  let edge = Edge::new(&edge_data, left.len());

  let dispatch = Dispatch::init();
  let pred = dispatch.intra_pred(mode);

  let mut dst = vec![0u16; args.width * args.height];
  let param = args.angle | if args.smooth_edge { SMOOTH_BIT } else { 0 };
  pred(&mut dst, args.width, edge, args.width, args.height, param, bd);

  for row in dst.chunks(args.width) {
    let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
    println!("{}", line.join(" "));
  }

  Ok(())
}

fn main() {
  env_logger::init();
  let args = Args::parse();
  if let Err(e) = run(args) {
    eprintln!("error: {e}");
    std::process::exit(1);
  }
}
