// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2022 The armv7m-boot developers

//! A panic handler that infinitely waits.
//!
//! Enabled through the `panic_wait` cargo feature, for images that do not bring their own
//! handler. There is no reporting path this early, so waiting is all that can be done.
//! 独自のpanic handlerを持たないimage向け．featureで有効化する．

use crate::cpu;
use core::panic::PanicInfo;

/// panicしたらcoreを止める
#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    // ./_arch/armv7m/cpu.rsのwait_foreverに飛ぶ
    cpu::wait_forever()
}
