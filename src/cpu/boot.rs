// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2022 The armv7m-boot developers

//! Boot code.

// armを対象とする場合対応するboot.rsを使う
#[cfg(target_arch = "arm")]
#[path = "../_arch/armv7m/cpu/boot.rs"]
mod arch_boot;
