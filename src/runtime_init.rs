// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2022 The armv7m-boot developers

//! Rust runtime initialization code.

use crate::memory::{self, MemoryLayout};
use core::ffi::c_int;

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

// Provided by the application, not by this crate.
// applicationが実装する関数達．このcrateは宣言するだけ．
#[cfg(target_arch = "arm")]
extern "C" {
    /// Runs after memory initialization but before `main()`. This allows targets to have
    /// pre-main initialization of the device, e.g. clock setup. Must return normally.
    /// memory初期化の後，`main()`の前に呼ばれる．普通にreturnしなければならない．
    fn pre_main_init();

    /// The conventional program entry point. Not expected to return.
    fn main() -> c_int;
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Run the boot pipeline over an explicit layout contract.
/// 与えられたlayout契約に対してboot処理を実行する
///
/// Equivalent to `crt0` or `c0` code in C/C++ world: zeroes the `.bss` range, copies the
/// `.data` image, then runs the two application hooks in order. The entry hook's return
/// value is read and discarded, since nothing below this layer could act on it.
/// C/C++の`crt0`や`c0`と同等．`.bss`を0埋めし，`.data`をcopyしてからhookを順に呼ぶ．
///
/// Arch-independent on purpose, so that a host-side harness can drive it with fabricated
/// buffers and recording hooks. On hardware, `runtime_init()` is the only caller.
/// host上のtestから偽のbufferで呼べるようにarchに依存しない形にしてある．
///
/// # Safety
///
/// - The `data` and `bss` ranges of `layout` must be valid for writes, or empty.
/// - `layout.data_load` must be valid for reads of as many bytes as `layout.data` holds.
/// - The ranges must not overlap the stack in use or this crate's own code.
/// - Must not be re-entered within one boot cycle; a second call redoes the memory steps.
pub unsafe fn boot_sequence<P, M>(layout: &MemoryLayout, pre_main: P, entry: M)
where
    P: FnOnce(),
    M: FnOnce() -> c_int,
{
    // Both memory steps must be complete before either hook runs. Their relative order is
    // free; zero-then-copy is fixed here so re-entry behaves deterministically.
    // どちらのhookよりも先に両方のmemory初期化を終わらせる．
    memory::zero_volatile(layout.bss.clone());
    memory::copy_volatile(layout.data_load, layout.data.clone());

    pre_main();
    let _ = entry();
}

/// Prepare memory and hand control to the application.
/// memoryを初期化してapplicationに制御を渡す
///
/// `_start_rust()` jumps here right after reset.
/// resetの直後に_arch/armv7m/cpu/boot.rsの`_start_rust()`からここに飛んでくる
///
/// `main()` is not expected to return; if it somehow does, the core is parked, because no
/// reporting path exists at this layer.
/// 万一`main()`がreturnしてきたらcoreを止めるしかない．
///
/// # Safety
///
/// - Only a single core must be active and running this function.
/// - Must only be called pre `main()`, exactly once per power-on or reset.
#[cfg(target_arch = "arm")]
pub unsafe fn runtime_init() -> ! {
    boot_sequence(
        &memory::layout::memory_layout(),
        || unsafe { pre_main_init() },
        || unsafe { main() },
    );

    crate::cpu::wait_forever()
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::ops::Range;

    fn test_layout(data_load: *const u8, data: Range<*mut u8>, bss: Range<*mut u8>) -> MemoryLayout {
        MemoryLayout {
            stack: core::ptr::null_mut()..core::ptr::null_mut(),
            heap: core::ptr::null_mut()..core::ptr::null_mut(),
            vector_table: core::ptr::null(),
            data_load,
            data,
            bss,
        }
    }

    /// Hooks run in order, exactly once, and only after both memory steps completed.
    #[test]
    fn hooks_run_once_after_memory_init() {
        let src: [u8; 2] = [0xAA, 0xBB];
        let mut data: [u8; 2] = [0xFF, 0xFF];
        let mut bss: [u8; 4] = [0x11; 4];

        let layout = test_layout(src.as_ptr(), data.as_mut_ptr_range(), bss.as_mut_ptr_range());

        let data_ptr = layout.data.start as *const u8;
        let bss_ptr = layout.bss.start as *const u8;

        // 0 = nothing ran yet, 1 = pre-main ran, 2 = entry ran.
        let step = Cell::new(0);

        unsafe {
            boot_sequence(
                &layout,
                || {
                    assert_eq!(step.get(), 0);
                    // Memory must already be valid when the pre-main hook observes it.
                    let (data_now, bss_now) = unsafe {
                        (
                            core::slice::from_raw_parts(data_ptr, 2),
                            core::slice::from_raw_parts(bss_ptr, 4),
                        )
                    };
                    assert_eq!(data_now, &[0xAA, 0xBB]);
                    assert_eq!(bss_now, &[0x00; 4]);
                    step.set(1);
                },
                || {
                    assert_eq!(step.get(), 1);
                    step.set(2);
                    0
                },
            );
        }

        assert_eq!(step.get(), 2);
        assert_eq!(data, src);
        assert_eq!(bss, [0x00; 4]);
    }

    /// The entry hook's return value is discarded without any side effect.
    #[test]
    fn entry_return_value_is_ignored() {
        let layout = test_layout(
            core::ptr::null(),
            core::ptr::null_mut()..core::ptr::null_mut(),
            core::ptr::null_mut()..core::ptr::null_mut(),
        );

        unsafe { boot_sequence(&layout, || (), || -1) };
    }

    /// Out of contract, but a second invocation must redo the same two memory operations
    /// deterministically.
    #[test]
    fn reentry_repeats_memory_init() {
        let src: [u8; 3] = [1, 2, 3];
        let mut data: [u8; 3] = [0; 3];
        let mut bss: [u8; 2] = [0; 2];

        let layout = test_layout(src.as_ptr(), data.as_mut_ptr_range(), bss.as_mut_ptr_range());

        let data_ptr = layout.data.start;
        let bss_ptr = layout.bss.start;

        for _ in 0..2 {
            unsafe {
                boot_sequence(&layout, || (), || 0);

                // Scribble over the regions so the second pass has work to do.
                core::ptr::write_bytes(data_ptr, 0xEE, 3);
                core::ptr::write_bytes(bss_ptr, 0xEE, 2);
            }
        }

        unsafe { boot_sequence(&layout, || (), || 0) };

        assert_eq!(data, src);
        assert_eq!(bss, [0x00; 2]);
    }
}
