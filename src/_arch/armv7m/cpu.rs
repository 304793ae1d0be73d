// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2022 The armv7m-boot developers

//! Architectural processor code.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of this
//! file is:
//!
//! crate::cpu::arch_cpu

use cortex_m::asm;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Pause execution on the core.
/// coreを止めて待ち続ける
#[inline(always)]
pub fn wait_forever() -> ! {
    // 無限loop
    loop {
        // wait for event
        asm::wfe()
    }
}
