// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2022 The armv7m-boot developers

//! Processor code.

// armを対象とする場合対応するcpu.rsを使う
#[cfg(target_arch = "arm")]
#[path = "_arch/armv7m/cpu.rs"]
mod arch_cpu;

pub mod boot;

//--------------------------------------------------------------------------------------------------
// Architectural Public Reexports
//--------------------------------------------------------------------------------------------------
#[cfg(target_arch = "arm")]
pub use arch_cpu::wait_forever;
