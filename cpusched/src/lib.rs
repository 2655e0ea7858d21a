/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! cpusched – single-CPU scheduling simulator
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── process/        – validated input table, ids, raw list parsing
//! ├── scheduler/      – seven policies, simulate() dispatch, output audit
//! ├── timeline/       – Gantt timeline and per-process metrics report
//! ├── config/         – YAML workload files
//! └── render/         – plain-text table and Gantt chart for the CLI
//! ```

pub mod config;
pub mod process;
pub mod render;
pub mod scheduler;
pub mod timeline;
